/*!
# Unified Error Type

This module provides a single error enum covering every failure mode of the retiming pipeline,
consolidated the way a production crate consolidates errors for ergonomic pattern matching instead
of threading a different error type through every stage.
*/

use std::error::Error;
use std::fmt;

/// Unified error type for the retiming pipeline.
#[derive(Debug)]
pub enum RetimingError {
    /// The input graph file could not be opened.
    FileNotReadable(String),

    /// A line of the input file did not tokenize into the expected integers.
    ParseError(String),

    /// The zero-weight subgraph of the main graph contains a directed cycle.
    CycleInGraph,

    /// Bellman-Ford found a negative-weight cycle in the PC graph.
    NegativeCycleInPc,

    /// A `Matrix` copy was attempted between matrices of different sides.
    MatrixSizeMismatch { expected: usize, found: usize },

    /// Wraps an I/O failure from writing output or creating directories.
    Io(String),
}

impl fmt::Display for RetimingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RetimingError::FileNotReadable(path) => {
                write!(f, "could not open input file: {}", path)
            }
            RetimingError::ParseError(msg) => write!(f, "malformed input: {}", msg),
            RetimingError::CycleInGraph => write!(
                f,
                "the zero-weight subgraph contains a cycle; retiming cannot be applied"
            ),
            RetimingError::NegativeCycleInPc => write!(
                f,
                "the PC graph contains a negative cycle; no feasible retiming exists for this clock period"
            ),
            RetimingError::MatrixSizeMismatch { expected, found } => write!(
                f,
                "matrix size mismatch: expected side {}, found {}",
                expected, found
            ),
            RetimingError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl Error for RetimingError {}

impl From<std::io::Error> for RetimingError {
    fn from(e: std::io::Error) -> Self {
        RetimingError::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RetimingError::CycleInGraph;
        assert_eq!(
            format!("{}", err),
            "the zero-weight subgraph contains a cycle; retiming cannot be applied"
        );

        let err = RetimingError::MatrixSizeMismatch {
            expected: 4,
            found: 3,
        };
        assert_eq!(
            format!("{}", err),
            "matrix size mismatch: expected side 4, found 3"
        );
    }
}
