//! Centered sliding-mean smoother
//!
//! O(n) moving average over a prefix-sum table. Applied to the
//! amplitude channel of a spectrum before the whitening division.

/// How the window behaves where it would extend past the array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Clip the window to the array and average the surviving points
    Shrink,

    /// Treat the edge values as extending `half_width` samples outward
    Replicate,
}

/// Smoother configuration, forwarded unchanged by the orchestrator
#[derive(Debug, Clone, Copy)]
pub struct SmootherOptions {
    pub boundary: BoundaryPolicy,
}

impl Default for SmootherOptions {
    fn default() -> Self {
        Self {
            boundary: BoundaryPolicy::Shrink,
        }
    }
}

/// Centered sliding mean with the given half-width
///
/// Output position `i` is the arithmetic mean of
/// `values[i - half_width ..= i + half_width]`, boundaries handled per
/// `options.boundary`. Output length equals input length; a half-width
/// of zero is a pass-through.
pub fn sliding_mean(values: &[f64], half_width: usize, options: &SmootherOptions) -> Vec<f64> {
    if half_width == 0 || values.len() <= 1 {
        return values.to_vec();
    }

    match options.boundary {
        BoundaryPolicy::Shrink => mean_shrink(values, half_width),
        BoundaryPolicy::Replicate => mean_replicate(values, half_width),
    }
}

/// Prefix sums with a leading zero: `prefix[i] = sum(values[..i])`
fn prefix_sums(values: &[f64]) -> Vec<f64> {
    let mut prefix = Vec::with_capacity(values.len() + 1);
    prefix.push(0.0);
    let mut acc = 0.0;
    for &v in values {
        acc += v;
        prefix.push(acc);
    }
    prefix
}

fn mean_shrink(values: &[f64], half_width: usize) -> Vec<f64> {
    let n = values.len();
    let prefix = prefix_sums(values);

    (0..n)
        .map(|i| {
            let lo = i.saturating_sub(half_width);
            let hi = (i + half_width + 1).min(n);
            (prefix[hi] - prefix[lo]) / (hi - lo) as f64
        })
        .collect()
}

fn mean_replicate(values: &[f64], half_width: usize) -> Vec<f64> {
    let n = values.len();
    let window = 2 * half_width + 1;

    // Pad conceptually with half_width copies of each edge value, then
    // the window never shrinks.
    let mut padded = Vec::with_capacity(n + 2 * half_width);
    padded.extend(std::iter::repeat(values[0]).take(half_width));
    padded.extend_from_slice(values);
    padded.extend(std::iter::repeat(values[n - 1]).take(half_width));

    let prefix = prefix_sums(&padded);
    (0..n)
        .map(|i| (prefix[i + window] - prefix[i]) / window as f64)
        .collect()
}
