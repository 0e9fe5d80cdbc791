//! Striped SIMD Smith-Waterman for short nucleotide reads. Scores a query (the read) against a reference with affine gaps and reports where the best local alignment ends, along with a secondary best alignment away from it, for mapping quality estimation. Only end points and scores are computed, there is no traceback.
//!
//! The core of the algorithm is [Farrar's striped Smith-Waterman](https://doi.org/10.1093/bioinformatics/btl582) over sixteen 8-bit lanes, the same approach used by SSW and Bowtie 2. The read is laid out in a striped query profile once, then every reference position costs `ceil(len / 16)` vector operations plus a usually short lazy F fix-up. SSE2 is used on x86_64, NEON on aarch64 and a portable implementation everywhere else, all producing identical results.
//!
//! Sequences use the 15 symbol nucleotide alphabet `ACGTKMRYSBVHDNX` (case-insensitive), with ambiguity codes matching the bases they stand for.
//!
//! # Example: using `align`
//!
//! ```rust
//! use striped_sw::{align, Config};
//!
//! let read = "ACGTACGT";
//! let reference = "TTACGTACGTTT";
//!
//! let ends = align(read, reference, &Config::default()).unwrap();
//! assert_eq!(ends.best.score, 16);
//! assert_eq!(ends.best.reference_end, 10);
//! assert_eq!(ends.best.read_end, 8);
//! ```
//!
//! # Example: using `Aligner`
//!
//! Useful for when you want to align one read against more than one reference, since the query
//! profile is only built once.
//!
//! ```rust
//! use striped_sw::{Aligner, Config};
//!
//! let aligner = Aligner::new("GATTACA", &Config::default()).unwrap();
//! for reference in ["CCGATTACACC", "GATTTACA", "CCCCCCC"] {
//!     let ends = aligner.align(reference).unwrap();
//!     println!("{reference}: {:?}", ends.best);
//! }
//!
//! // per reference position best scores
//! let scan = aligner.scan("CCGATTACACC").unwrap();
//! assert_eq!(scan.columns.len(), 11);
//! assert_eq!(scan.columns.scores()[8], 14);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod aligner;
pub mod alphabet;
mod r#const;
mod error;
pub mod profile;
pub mod scoring_matrix;
pub mod simd;
pub mod smith_waterman;

pub use aligner::{Aligner, align};
pub use error::{AlignError, Result, SequenceKind};
pub use smith_waterman::{AlignmentEnd, AlignmentEnds, ColumnBests, GapPenalties, Scan};

use r#const::*;

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Controls the scoring used by the smith waterman algorithm
    pub scoring: Scoring,
    /// Which vector implementation runs the alignment
    pub backend: Backend,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Backend {
    /// SSE2 or NEON when the CPU supports it, falling back to [`Backend::Portable`]
    #[default]
    Native,
    /// Plain arrays, vectorized by the compiler where possible
    Portable,
}

/// All scores and penalties are magnitudes, penalties are subtracted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scoring {
    /// Score for a matching base, including ambiguity codes compatible with the base
    pub match_score: u8,
    /// Penalty for a mismatch (substitution)
    pub mismatch_penalty: u8,
    /// Penalty for opening a gap in the read (skipping reference bases)
    pub insertion_open_penalty: u8,
    /// Penalty for every further skipped reference base
    pub insertion_extend_penalty: u8,
    /// Penalty for opening a gap in the reference (skipping read bases)
    pub deletion_open_penalty: u8,
    /// Penalty for every further skipped read base
    pub deletion_extend_penalty: u8,
    /// Offset added to every profile entry so mismatches stay non-negative. Must be at least
    /// `mismatch_penalty`, and `match_score + bias` must fit in a byte.
    pub bias: u8,
}

impl Default for Scoring {
    fn default() -> Self {
        Scoring {
            match_score: MATCH_SCORE,
            mismatch_penalty: MISMATCH_PENALTY,
            insertion_open_penalty: INSERTION_OPEN_PENALTY,
            insertion_extend_penalty: INSERTION_EXTEND_PENALTY,
            deletion_open_penalty: DELETION_OPEN_PENALTY,
            deletion_extend_penalty: DELETION_EXTEND_PENALTY,
            bias: BIAS,
        }
    }
}

impl Scoring {
    /// Checks that the profile fits in unsigned bytes and that both gap kinds are affine
    pub fn validate(&self) -> Result<()> {
        profile::check_profile_range(self.match_score, self.mismatch_penalty, self.bias)?;

        for (kind, open, extend) in [
            (
                "insertion",
                self.insertion_open_penalty,
                self.insertion_extend_penalty,
            ),
            (
                "deletion",
                self.deletion_open_penalty,
                self.deletion_extend_penalty,
            ),
        ] {
            if open < extend {
                return Err(AlignError::GapOpenBelowExtend { kind, open, extend });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_is_valid() {
        assert!(Scoring::default().validate().is_ok());
        assert_eq!(Config::default().backend, Backend::Native);
    }

    #[test]
    fn test_validate_rejects_bad_scoring() {
        let scoring = Scoring {
            bias: 1,
            ..Scoring::default()
        };
        assert!(matches!(
            scoring.validate(),
            Err(AlignError::BiasTooSmall { bias: 1, mismatch: 2 })
        ));

        let scoring = Scoring {
            match_score: 254,
            ..Scoring::default()
        };
        assert!(matches!(
            scoring.validate(),
            Err(AlignError::ProfileOverflow { .. })
        ));

        let scoring = Scoring {
            deletion_open_penalty: 1,
            deletion_extend_penalty: 2,
            ..Scoring::default()
        };
        assert!(matches!(
            scoring.validate(),
            Err(AlignError::GapOpenBelowExtend {
                kind: "deletion",
                open: 1,
                extend: 2
            })
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = AlignError::InvalidSymbol {
            symbol: 'U',
            position: 3,
            sequence: SequenceKind::Reference,
        };
        assert_eq!(
            err.to_string(),
            "invalid symbol 'U' at position 3 of the reference"
        );
        assert_eq!(
            AlignError::EmptySequence(SequenceKind::Query).to_string(),
            "the query sequence is empty"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_derives() {
        fn assert_serde<T: serde::Serialize + for<'de> serde::Deserialize<'de>>() {}
        assert_serde::<Config>();
        assert_serde::<AlignmentEnds>();
        assert_serde::<GapPenalties>();
    }
}
