//! Whitening orchestrator
//!
//! Validates a batch of records, then flattens each record's spectral
//! envelope by dividing its complex spectrum by a smoothed copy of its
//! own amplitude spectrum, preserving phase and restoring each record
//! to its native representation.

use rayon::prelude::*;

use crate::record::{Record, Representation};
use crate::smoothing::{sliding_mean, SmootherOptions};
use crate::spectrum::{
    amplitudes, pack_rectangular, to_polar, to_rectangular, unpack_rectangular, SpectrumEngine,
};
use crate::whiten::error::WhitenError;
use crate::whiten::window::{resolve_half_width, PerRecord, WidthUnit};

use num_complex::Complex;

/// Below this batch size sequential processing beats the rayon overhead
const MIN_RECORDS_FOR_PARALLEL: usize = 4;

/// Whitening parameters for one batch call
#[derive(Debug, Clone)]
pub struct WhitenConfig {
    /// Smoothing-window width, broadcast or positional
    pub width: PerRecord<f64>,

    /// Width unit, broadcast or positional
    pub unit: PerRecord<WidthUnit>,

    /// Forwarded unchanged to the smoother
    pub smoother: SmootherOptions,

    /// Run batch validation before processing. Per-call, never ambient
    /// process state; callers that disable it must supply well-formed
    /// batches.
    pub validate: bool,
}

impl Default for WhitenConfig {
    fn default() -> Self {
        Self {
            width: PerRecord::Uniform(0.001),
            unit: PerRecord::Uniform(WidthUnit::Hz),
            smoother: SmootherOptions::default(),
            validate: true,
        }
    }
}

/// Whiten every record in a batch
///
/// Records are processed independently and in parallel for larger
/// batches; output position `i` corresponds to input position `i`,
/// with the input's representation tag preserved.
///
/// # Errors
/// Validation failures name every offending record index. Any
/// per-record transform failure aborts the whole call; there is no
/// partial output.
pub fn whiten(records: &[Record], config: &WhitenConfig) -> Result<Vec<Record>, WhitenError> {
    if records.is_empty() {
        return Err(WhitenError::EmptyBatch);
    }
    if config.validate {
        validate_batch(records, config)?;
    }

    let job = |(i, rec): (usize, &Record)| -> Result<Record, WhitenError> {
        let half = resolve_half_width(
            config.width.get(i),
            config.unit.get(i),
            rec.sample_spacing,
        );
        whiten_record(i, rec, half, &config.smoother)
    };

    if records.len() >= MIN_RECORDS_FOR_PARALLEL {
        records.par_iter().enumerate().map(job).collect()
    } else {
        records.iter().enumerate().map(job).collect()
    }
}

/// Batch-wide precondition checks
///
/// Each rule is evaluated over the whole batch and reported with the
/// complete list of offending indices, never just the first.
fn validate_batch(records: &[Record], config: &WhitenConfig) -> Result<(), WhitenError> {
    let n = records.len();

    // Unsupported representations, including pair-layout spectra whose
    // interleaved buffer has an odd length and so cannot be interpreted.
    let unsupported: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            !r.representation.is_whitenable()
                || (r.representation.is_paired() && r.samples.len() % 2 != 0)
        })
        .map(|(i, _)| i)
        .collect();
    if !unsupported.is_empty() {
        return Err(WhitenError::UnsupportedRepresentation {
            indices: unsupported,
        });
    }

    let uneven: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| !r.evenly_sampled)
        .map(|(i, _)| i)
        .collect();
    if !uneven.is_empty() {
        return Err(WhitenError::UnevenSampling { indices: uneven });
    }

    if !config.width.fits(n) {
        return Err(WhitenError::InvalidWidth {
            reason: format!(
                "expected 1 or {} width entries, got {}",
                n,
                config.width.cardinality()
            ),
            indices: Vec::new(),
        });
    }
    let bad_widths: Vec<usize> = (0..n)
        .filter(|&i| {
            let w = config.width.get(i);
            !w.is_finite() || w <= 0.0
        })
        .collect();
    if !bad_widths.is_empty() {
        return Err(WhitenError::InvalidWidth {
            reason: "width must be a positive finite number".to_string(),
            indices: bad_widths,
        });
    }

    if !config.unit.fits(n) {
        return Err(WhitenError::InvalidUnit {
            reason: format!(
                "expected 1 or {} unit entries, got {}",
                n,
                config.unit.cardinality()
            ),
            indices: Vec::new(),
        });
    }

    // A sample-count width must be a whole number of samples
    let fractional: Vec<usize> = (0..n)
        .filter(|&i| {
            config.unit.get(i) == WidthUnit::Samples && config.width.get(i).fract() != 0.0
        })
        .collect();
    if !fractional.is_empty() {
        return Err(WhitenError::InvalidWidth {
            reason: "sample-count width must be an integer".to_string(),
            indices: fractional,
        });
    }

    Ok(())
}

/// Whiten one record in isolation
fn whiten_record(
    index: usize,
    rec: &Record,
    half_width: usize,
    smoother: &SmootherOptions,
) -> Result<Record, WhitenError> {
    let collaborator = |reason: String| WhitenError::Collaborator { index, reason };

    match rec.representation {
        Representation::Time | Representation::GenericXy => {
            let mut engine = SpectrumEngine::new();
            let spectrum = engine
                .forward(&rec.samples)
                .map_err(|e| collaborator(e.to_string()))?;

            let whitened = divide_by_envelope(&spectrum, half_width, smoother);
            let series = engine
                .inverse(&whitened, rec.samples.len())
                .map_err(|e| collaborator(e.to_string()))?;

            // GenericXy transits through frequency domain but keeps its tag
            Ok(restore(rec, series))
        }
        Representation::RectSpectrum => {
            let spectrum = unpack_rectangular(&rec.samples);
            let whitened = divide_by_envelope(&spectrum, half_width, smoother);
            Ok(restore(rec, pack_rectangular(&whitened)))
        }
        Representation::PolarSpectrum => {
            // Amplitudes come straight from the stored magnitudes; the
            // division happens on the derived rectangular view so real
            // and imaginary parts share one smoothed curve.
            let amps: Vec<f64> = rec.samples.iter().step_by(2).copied().collect();
            let spectrum = to_rectangular(&rec.samples);
            let whitened = scale_by_smoothed(&spectrum, &amps, half_width, smoother);
            Ok(restore(rec, to_polar(&whitened)))
        }
        Representation::Grid => {
            // Reachable only with validation disabled
            Err(WhitenError::UnsupportedRepresentation {
                indices: vec![index],
            })
        }
    }
}

/// Divide a spectrum by its own smoothed amplitude envelope
fn divide_by_envelope(
    spectrum: &[Complex<f64>],
    half_width: usize,
    smoother: &SmootherOptions,
) -> Vec<Complex<f64>> {
    let amps = amplitudes(spectrum);
    scale_by_smoothed(spectrum, &amps, half_width, smoother)
}

/// Scale each bin by the reciprocal of the smoothed amplitude at that bin
///
/// A fixed machine-epsilon offset guards the division, so zero-amplitude
/// bins stay finite.
fn scale_by_smoothed(
    spectrum: &[Complex<f64>],
    amps: &[f64],
    half_width: usize,
    smoother: &SmootherOptions,
) -> Vec<Complex<f64>> {
    let smoothed = sliding_mean(amps, half_width, smoother);
    spectrum
        .iter()
        .zip(smoothed.iter())
        .map(|(&c, &a)| c / (a + f64::EPSILON))
        .collect()
}

/// Build the output record: new samples, fresh header statistics, and
/// the input's representation, spacing, and sampling flag carried over
fn restore(rec: &Record, samples: Vec<f64>) -> Record {
    let mut out = Record::new(rec.representation, samples, rec.sample_spacing);
    out.evenly_sampled = rec.evenly_sampled;
    out
}
