//! Smoothing-window resolution
//!
//! Turns a user-supplied width in physical (Hz) or sample-count units
//! into an odd, centered integer window, expressed as a half-width.

use super::error::WhitenError;

/// Unit of a smoothing-window width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthUnit {
    /// Physical width in Hz, converted per record via its sample spacing
    Hz,

    /// Direct sample count (must be a positive integer)
    Samples,
}

impl WidthUnit {
    /// Parse a unit token, case-insensitively
    pub fn parse(token: &str) -> Result<Self, WhitenError> {
        match token.to_ascii_lowercase().as_str() {
            "hz" => Ok(WidthUnit::Hz),
            "samples" => Ok(WidthUnit::Samples),
            _ => Err(WhitenError::InvalidUnit {
                reason: format!("unrecognized unit token '{}'", token),
                indices: Vec::new(),
            }),
        }
    }
}

/// A parameter given once for the whole batch or once per record
#[derive(Debug, Clone)]
pub enum PerRecord<T> {
    /// One value broadcast to every record
    Uniform(T),

    /// Positional values; length must be 1 or the record count
    Each(Vec<T>),
}

impl<T: Copy> PerRecord<T> {
    /// Number of supplied entries (1 for `Uniform`)
    pub fn cardinality(&self) -> usize {
        match self {
            PerRecord::Uniform(_) => 1,
            PerRecord::Each(values) => values.len(),
        }
    }

    /// True if the supplied entry count fits an `n`-record batch
    pub fn fits(&self, n: usize) -> bool {
        let c = self.cardinality();
        c == 1 || c == n
    }

    /// Value for record `i`; a single entry broadcasts to every record
    pub fn get(&self, i: usize) -> T {
        match self {
            PerRecord::Uniform(value) => *value,
            PerRecord::Each(values) => {
                if values.len() == 1 {
                    values[0]
                } else {
                    values[i]
                }
            }
        }
    }
}

/// Resolve a width specification to a centered half-width in samples
///
/// Sample-count widths are centered directly: `half = ceil((w - 1) / 2)`,
/// so an even count rounds up to the next odd symmetric window (width 4
/// and width 5 both give a 5-point window). Physical widths are first
/// converted to a count via the record's spectral bin spacing, always
/// rounding up so the request is never under-smoothed:
/// `count = ceil(w / spacing + 1)`.
///
/// A half-width of zero means no smoothing.
pub fn resolve_half_width(width: f64, unit: WidthUnit, sample_spacing: f64) -> usize {
    let count = match unit {
        WidthUnit::Samples => width,
        WidthUnit::Hz => (width / sample_spacing + 1.0).ceil(),
    };
    let half = ((count - 1.0) / 2.0).ceil();
    if half > 0.0 {
        half as usize
    } else {
        0
    }
}
