//! Error types for striped-sw

use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

/// Result type alias for alignment operations
pub type Result<T> = std::result::Result<T, AlignError>;

/// Which of the two inputs an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    Query,
    Reference,
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceKind::Query => f.write_str("query"),
            SequenceKind::Reference => f.write_str("reference"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AlignError {
    /// A byte outside the 15 symbol nucleotide alphabet
    #[error("invalid symbol {symbol:?} at position {position} of the {sequence}")]
    InvalidSymbol {
        symbol: char,
        /// 0-based offset into the sequence
        position: usize,
        sequence: SequenceKind,
    },

    #[error("the {0} sequence is empty")]
    EmptySequence(SequenceKind),

    /// Mismatching profile entries would go negative and wrap
    #[error("bias {bias} is smaller than the mismatch penalty {mismatch}")]
    BiasTooSmall { bias: u8, mismatch: u8 },

    /// Matching profile entries would exceed a byte
    #[error("match score {match_score} plus bias {bias} does not fit in a byte")]
    ProfileOverflow { match_score: u8, bias: u8 },

    /// Affine gaps need the opening penalty to cover at least one extension
    #[error("{kind} open penalty {open} is smaller than its extend penalty {extend}")]
    GapOpenBelowExtend {
        kind: &'static str,
        open: u8,
        extend: u8,
    },

    #[error("failed to allocate alignment buffers: {0}")]
    Allocation(#[from] TryReserveError),
}
