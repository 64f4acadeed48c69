//! Forward/inverse spectral transform using realfft for real-valued signals

use num_complex::Complex;
use realfft::RealFftPlanner;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("cannot transform an empty series")]
    EmptySeries,

    #[error("spectrum has {got} bins, expected {expected} for a {len}-point series")]
    BinCountMismatch {
        got: usize,
        expected: usize,
        len: usize,
    },

    #[error("FFT processing failed: {0}")]
    Fft(String),
}

/// Transform engine wrapping a realfft planner
///
/// The planner caches plans per length, so an engine can serve records
/// of mixed lengths. Not shareable across threads; parallel callers
/// create one engine each.
pub struct SpectrumEngine {
    planner: RealFftPlanner<f64>,
}

impl SpectrumEngine {
    pub fn new() -> Self {
        Self {
            planner: RealFftPlanner::new(),
        }
    }

    /// Forward transform: real series to half spectrum (len/2 + 1 bins)
    pub fn forward(&mut self, series: &[f64]) -> Result<Vec<Complex<f64>>, TransformError> {
        if series.is_empty() {
            return Err(TransformError::EmptySeries);
        }

        let r2c = self.planner.plan_fft_forward(series.len());
        let mut input = series.to_vec();
        let mut spectrum = r2c.make_output_vec();
        r2c.process(&mut input, &mut spectrum)
            .map_err(|e| TransformError::Fft(e.to_string()))?;
        Ok(spectrum)
    }

    /// Inverse transform: half spectrum back to a `len`-point real series
    ///
    /// Output is normalized by `1/len` so `inverse(forward(x), x.len())`
    /// reproduces `x` within floating-point tolerance.
    pub fn inverse(
        &mut self,
        spectrum: &[Complex<f64>],
        len: usize,
    ) -> Result<Vec<f64>, TransformError> {
        if len == 0 {
            return Err(TransformError::EmptySeries);
        }
        let expected = len / 2 + 1;
        if spectrum.len() != expected {
            return Err(TransformError::BinCountMismatch {
                got: spectrum.len(),
                expected,
                len,
            });
        }

        let c2r = self.planner.plan_fft_inverse(len);
        let mut input = spectrum.to_vec();
        let mut series = c2r.make_output_vec();
        c2r.process(&mut input, &mut series)
            .map_err(|e| TransformError::Fft(e.to_string()))?;

        let scale = 1.0 / len as f64;
        for s in series.iter_mut() {
            *s *= scale;
        }
        Ok(series)
    }
}

impl Default for SpectrumEngine {
    fn default() -> Self {
        Self::new()
    }
}
