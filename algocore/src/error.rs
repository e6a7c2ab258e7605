use thiserror::Error;

/// Errors returned by fallible operations in this crate.
///
/// Every error leaves the receiver untouched; the failed call is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("heap is empty")]
    EmptyHeap,

    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("invalid range {left}..={right} for length {len}")]
    InvalidRange { left: usize, right: usize, len: usize },

    #[error("pattern set is empty")]
    EmptyPatternSet,

    #[error("pattern {id} is empty")]
    EmptyPattern { id: usize },

    #[error("negative weight on edge {from} -> {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("negative-weight cycle reachable from source")]
    NegativeCycleReachable,

    #[error("node {node} not in graph of {node_count} nodes")]
    InvalidNode { node: usize, node_count: usize },

    #[error("path length to node {node} overflows the weight type")]
    WeightOverflow { node: usize },
}

/// Coarse classification of [`Error`], independent of payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyHeap,
    OutOfRange,
    EmptyPatternSet,
    NegativeWeight,
    NegativeCycleReachable,
    InvalidNode,
    WeightOverflow,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyHeap => ErrorKind::EmptyHeap,
            Error::OutOfRange { .. } | Error::InvalidRange { .. } => ErrorKind::OutOfRange,
            Error::EmptyPatternSet | Error::EmptyPattern { .. } => ErrorKind::EmptyPatternSet,
            Error::NegativeWeight { .. } => ErrorKind::NegativeWeight,
            Error::NegativeCycleReachable => ErrorKind::NegativeCycleReachable,
            Error::InvalidNode { .. } => ErrorKind::InvalidNode,
            Error::WeightOverflow { .. } => ErrorKind::WeightOverflow,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
