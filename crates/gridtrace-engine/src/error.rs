//! Error types for the engine.

use std::error::Error;
use std::fmt;

/// Errors surfaced by [`Session`](crate::Session) commands.
///
/// Marker misplacement and commands arriving mid-run are silent no-ops by
/// contract, not errors; an unreachable end cell simply yields an empty
/// path. Rejected geometry is the one failure callers need to see.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Grid dimensions must both be positive.
    InvalidGeometry { rows: i32, cols: i32 },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry { rows, cols } => {
                write!(f, "invalid grid geometry {rows}x{cols}")
            }
        }
    }
}

impl Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = EngineError::InvalidGeometry { rows: 0, cols: -3 };
        assert_eq!(err.to_string(), "invalid grid geometry 0x-3");
    }
}
