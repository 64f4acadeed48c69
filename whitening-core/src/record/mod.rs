//! Signal record data model
//!
//! A record is one sampled signal plus the few header fields the
//! whitening pipeline reads: representation tag, sample spacing,
//! even-sampling flag, and derived min/max/mean statistics.

/// How a record's `samples` buffer is laid out and interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    /// Real-valued time series, one value per sample point
    Time,

    /// Generic paired series (un-dimensioned x/y data). Evenly sampled
    /// in its abscissa, so only the dependent values are stored.
    GenericXy,

    /// Rectangular complex spectrum, interleaved `re, im` pairs
    RectSpectrum,

    /// Polar complex spectrum, interleaved `magnitude, phase` pairs
    PolarSpectrum,

    /// Gridded/volumetric data (e.g. a spectrogram image). Present in
    /// the upstream data model but not whitenable.
    Grid,
}

impl Representation {
    /// True for the spectral representations that store two values per bin
    pub fn is_paired(&self) -> bool {
        matches!(self, Representation::RectSpectrum | Representation::PolarSpectrum)
    }

    /// True if the whitening pipeline can process this representation
    pub fn is_whitenable(&self) -> bool {
        !matches!(self, Representation::Grid)
    }
}

/// Derived header statistics over a record's raw sample buffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl HeaderStats {
    /// Compute statistics over a sample buffer
    ///
    /// An empty buffer yields all-zero statistics.
    pub fn of(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self {
                min: 0.0,
                max: 0.0,
                mean: 0.0,
            };
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &s in samples {
            min = min.min(s);
            max = max.max(s);
            sum += s;
        }

        Self {
            min,
            max,
            mean: sum / samples.len() as f64,
        }
    }
}

/// One signal instance flowing through the pipeline
///
/// Records are never mutated in place: whitening produces a fresh
/// `Record` with the same representation tag and sample spacing.
#[derive(Debug, Clone)]
pub struct Record {
    /// Layout/interpretation of `samples`
    pub representation: Representation,

    /// Sample buffer, layout per `representation`
    pub samples: Vec<f64>,

    /// Seconds per sample for series, bin spacing for spectra; > 0
    pub sample_spacing: f64,

    /// Whether the record is evenly sampled (required by whitening)
    pub evenly_sampled: bool,

    /// Derived min/max/mean over `samples`
    pub stats: HeaderStats,
}

impl Record {
    /// Create an evenly sampled record, computing header statistics
    pub fn new(representation: Representation, samples: Vec<f64>, sample_spacing: f64) -> Self {
        let stats = HeaderStats::of(&samples);
        Self {
            representation,
            samples,
            sample_spacing,
            evenly_sampled: true,
            stats,
        }
    }

    /// Recompute header statistics after the sample buffer changed
    pub fn refresh_stats(&mut self) {
        self.stats = HeaderStats::of(&self.samples);
    }

    /// Number of stored values (pairs count as two)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the record holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
