//! Spectral Whitening Core
//!
//! Flattens the spectral envelope of sampled signal records by dividing
//! each record's complex spectrum by a smoothed copy of its own
//! amplitude spectrum, preserving phase. Records in time-domain,
//! generic-xy, rectangular-spectrum, and polar-spectrum form are
//! supported; each comes back in its native representation.

pub mod record;
pub mod smoothing;
pub mod spectrum;
pub mod whiten;

pub use record::{HeaderStats, Record, Representation};
pub use smoothing::{BoundaryPolicy, SmootherOptions};
pub use whiten::{whiten, PerRecord, WhitenConfig, WhitenError, WidthUnit};
