use thiserror::Error;

/// Failure modes of topology generation and analysis.
///
/// All variants are surfaced directly to the caller; generation and analysis
/// are deterministic pure functions, so retrying without changed input is
/// meaningless and no internal recovery is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("unknown lattice family: {0:?}")]
    UnknownFamily(String),

    #[error("tiling count must be at least 1")]
    InvalidTiling,

    #[error("malformed topology: {0}")]
    MalformedTopology(String),

    #[error("metrics are undefined for a topology with zero nodes")]
    EmptyTopology,
}
