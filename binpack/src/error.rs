use thiserror::Error;

use crate::geometry::geo_enums::Orientation;

/// Result type alias for all fallible operations of the engine.
pub type Result<T> = std::result::Result<T, PackError>;

/// Everything that can go wrong while building, packing or optimizing a packer.
///
/// An item that does not fit in any bin is *not* an error: it simply remains unfitted.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PackError {
    /// Bins or items were added to a packer that is already packed, or it was packed twice.
    #[error("packer is already packed")]
    AlreadyPacked,

    #[error("cannot copy packed state")]
    CopyPackedState,

    #[error("bins contain data in unpacked state")]
    CopyDirtyState,

    /// A dimension or weight is negative, NaN or infinite.
    #[error("invalid {what}: {value}")]
    InvalidMeasure { what: &'static str, value: f64 },

    #[error("target fitness {0} not in range [0, 1]")]
    TargetFitnessOutOfRange(f64),

    #[error("{what} {value} not in range [0, 1]")]
    RateOutOfRange { what: &'static str, value: f64 },

    #[error("maximum number of generations has to be at least 1")]
    InvalidMaxGenerations,

    #[error("number of attempts has to be at least 1")]
    InvalidAttempts,

    #[error("invalid gene length {found}, requires {expected}")]
    GeneLengthMismatch { expected: usize, found: usize },

    #[error("gene value {0} out of range [0, 1]")]
    GeneValueOutOfRange(f64),

    /// The genetic solver can only run once.
    #[error("solver already executed")]
    AlreadyExecuted,

    #[error("solver has no genes to evaluate")]
    EmptyPopulation,

    #[error("pick value {0} not in range [0, 1]")]
    PickValueOutOfRange(f64),

    #[error("not enough pick values")]
    InsufficientPickValues,

    #[error("orientation {0} not supported")]
    UnsupportedOrientation(Orientation),
}
