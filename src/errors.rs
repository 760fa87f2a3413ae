//! Errors used throughout the checkers engine.
//!
//! This module defines the canonical error type returned by configuration
//! validation, board diagram parsing and the tablebase persistence boundary.
//!
//! Usage guidelines:
//! - Illegal move requests are not errors. Move entry reports them as `false`
//!   or `None`, since they are the expected outcome of user-driven attempts.
//!   The one exception is an engine answering the match harness with a move
//!   it was never offered, which aborts the match.
//! - Structural invariant violations (a piece on a light cell, a side above
//!   its piece cap on a freshly built board) are internal bugs and panic.
//! - Everything else that can fail at a boundary (bad configuration, bad
//!   diagram text, missing or corrupt tablebase files) returns
//!   `Result<_, CheckersError>` so callers can recover, typically by falling
//!   back to defaults or rebuilding the tablebase.

use std::io;

use thiserror::Error;

/// Unified error type for the checkers engine.
#[derive(Debug, Error)]
pub enum CheckersError {
    /// A configuration value is out of its supported range.
    ///
    /// Payload: a description of the offending field.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A text board diagram could not be parsed.
    ///
    /// Payload: the reason, including the offending row or character.
    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),

    /// Serialized board data violates board geometry or occupancy invariants.
    #[error("invalid board data: {0}")]
    InvalidBoard(String),

    /// Reading or writing a tablebase file failed.
    #[error("tablebase i/o failed: {0}")]
    Io(#[from] io::Error),

    /// A tablebase file could not be encoded or decoded.
    #[error("tablebase encoding failed: {0}")]
    Encoding(#[from] bincode::Error),

    /// A loaded tablebase was built for a different configuration or format.
    ///
    /// Payload: which header field disagreed.
    #[error("tablebase does not match the requested configuration: {0}")]
    TablebaseMismatch(String),

    /// An engine answered with a move that is not legal in the position.
    #[error("engine '{engine}' returned an illegal move: {path:?}")]
    IllegalMove { engine: String, path: Vec<u8> },
}

pub type CheckersResult<T> = Result<T, CheckersError>;
