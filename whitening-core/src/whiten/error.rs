//! Error taxonomy for the whitening pipeline

use thiserror::Error;

/// Batch validation and processing failures
///
/// Validation variants carry the complete list of offending record
/// indices so a caller can fix every problem in one pass. Any failure
/// aborts the whole call; there is no partial-batch success.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WhitenError {
    #[error("record batch is empty")]
    EmptyBatch,

    #[error("records {indices:?} have a representation that cannot be whitened")]
    UnsupportedRepresentation { indices: Vec<usize> },

    #[error("records {indices:?} are not evenly sampled")]
    UnevenSampling { indices: Vec<usize> },

    #[error("invalid smoothing width ({reason}); offending record indices: {indices:?}")]
    InvalidWidth { reason: String, indices: Vec<usize> },

    #[error("invalid width unit ({reason}); offending record indices: {indices:?}")]
    InvalidUnit { reason: String, indices: Vec<usize> },

    #[error("record {index}: {reason}")]
    Collaborator { index: usize, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_indices() {
        let err = WhitenError::UnevenSampling {
            indices: vec![2, 4],
        };
        let msg = err.to_string();
        assert!(msg.contains("[2, 4]"), "{}", msg);
    }
}
