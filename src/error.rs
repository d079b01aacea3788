//! Trace error types.

use thiserror::Error;

use crate::geom::Direction;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, TraceError>;

/// Everything that can go wrong while tracing a diagram.
///
/// Every condition is fatal to the walk in progress; the first violated
/// check aborts immediately and no partial result is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TraceError {
    /// No start mark in the grid.
    #[error("missing start character")]
    MissingStart,

    /// No end mark in the grid.
    #[error("missing end character")]
    MissingEnd,

    /// More than one start mark.
    #[error("multiple start characters found")]
    MultipleStarts,

    /// More than one end mark.
    #[error("multiple end characters found")]
    MultipleEnds,

    /// The initial heading cannot be determined, or the walk stepped onto
    /// the blank character.
    #[error("broken path")]
    BrokenPath,

    /// More than one open neighbor at the start mark.
    #[error("multiple starting paths")]
    MultipleStartPaths,

    /// A character outside the path alphabet on the trail.
    #[error("invalid path character")]
    InvalidCharacter,

    /// A straight segment entered along its incompatible axis on a
    /// first-time visit.
    #[error("invalid character for direction {0}")]
    InvalidDirection(Direction),

    /// A corner that does not genuinely redirect the path.
    #[error("fake turn")]
    FakeTurn,

    /// More than one viable turn at a corner or letter junction.
    #[error("fork in path")]
    ForkInPath,
}
