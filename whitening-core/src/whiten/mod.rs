//! Batch spectral whitening

pub mod error;
pub mod pipeline;
pub mod window;

pub use error::WhitenError;
pub use pipeline::{whiten, WhitenConfig};
pub use window::{resolve_half_width, PerRecord, WidthUnit};
