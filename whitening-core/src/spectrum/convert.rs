//! Conversions between rectangular and polar spectrum layouts
//!
//! Spectra arrive either as interleaved `re, im` pairs or interleaved
//! `magnitude, phase` pairs; internally the pipeline works on
//! `Complex<f64>` bins and a separate amplitude channel.

use num_complex::Complex;

/// Unpack interleaved `re, im` pairs into complex bins
///
/// A trailing unpaired value is ignored; callers validate pair layout
/// before conversion.
pub fn unpack_rectangular(samples: &[f64]) -> Vec<Complex<f64>> {
    samples
        .chunks_exact(2)
        .map(|pair| Complex::new(pair[0], pair[1]))
        .collect()
}

/// Pack complex bins into interleaved `re, im` pairs
pub fn pack_rectangular(spectrum: &[Complex<f64>]) -> Vec<f64> {
    let mut samples = Vec::with_capacity(spectrum.len() * 2);
    for c in spectrum {
        samples.push(c.re);
        samples.push(c.im);
    }
    samples
}

/// Convert complex bins to interleaved `magnitude, phase` pairs
///
/// Phase is `atan2(im, re)`, so it lands in (-π, π].
pub fn to_polar(spectrum: &[Complex<f64>]) -> Vec<f64> {
    let mut samples = Vec::with_capacity(spectrum.len() * 2);
    for c in spectrum {
        let (mag, phase) = c.to_polar();
        samples.push(mag);
        samples.push(phase);
    }
    samples
}

/// Convert interleaved `magnitude, phase` pairs to complex bins
pub fn to_rectangular(polar: &[f64]) -> Vec<Complex<f64>> {
    polar
        .chunks_exact(2)
        .map(|pair| Complex::from_polar(pair[0], pair[1]))
        .collect()
}

/// Amplitude channel of a spectrum: `|X[k]|` per bin
pub fn amplitudes(spectrum: &[Complex<f64>]) -> Vec<f64> {
    spectrum.iter().map(|c| c.norm()).collect()
}
