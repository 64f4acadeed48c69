//! Spectral transform and representation conversion

pub mod convert;
pub mod transform;

pub use convert::{amplitudes, pack_rectangular, to_polar, to_rectangular, unpack_rectangular};
pub use transform::{SpectrumEngine, TransformError};
