use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("sequence contains no elements")]
    EmptySequence,

    #[error("index {idx} out of range for view of length {len}")]
    OutOfRange { idx: usize, len: usize },

    #[error("destination holds {available} elements but {needed} are required")]
    DestinationTooSmall { needed: usize, available: usize },

    /// the element at `idx` maps to a key that an earlier element already produced
    #[error("duplicate key produced by element {idx}")]
    DuplicateKey { idx: usize },
}
