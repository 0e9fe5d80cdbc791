//! The [Smith Waterman algorithm](https://en.wikipedia.org/wiki/Smith%E2%80%93Waterman_algorithm) performs local sequence alignment ([explanation](https://kaell.se/bibook/pairwise/waterman.html)), here with [affine gaps](https://en.wikipedia.org/wiki/Smith%E2%80%93Waterman_algorithm#Affine) for short reads against a reference.
//!
//! Each cell depends on the cell to its left, above and on the diagonal, so the vertical (within a column) dependency is what blocks vectorizing down the read. [Farrar's striped layout](https://doi.org/10.1093/bioinformatics/btl582) spreads the read over the lanes with a stride of `segment_count` (see [`crate::profile`]) so that the 16 lanes of one vector are never adjacent in the same column. The vertical gap track (`F`) is then carried from segment to segment inside each lane, which leaves a single missed dependency: a gap leaving the last segment of lane `k` should enter segment 0 of lane `k + 1`. The [lazy F loop](simd/gaps.rs) fixes this up after each column and rarely runs more than a couple of segments.
//!
//! ```text
//! read: "ACGTACGTTTGG" (12 positions, 4 lanes for simplicity, segment_count = 3)
//!
//!            lane 0  lane 1  lane 2  lane 3
//! segment 0  A (0)   T (3)   G (6)   T (9)
//! segment 1  C (1)   A (4)   T (7)   G (10)
//! segment 2  G (2)   C (5)   T (8)   G (11)
//!
//! // first pass over a column: F flows down the segments of each lane
//! segment 0 -> segment 1 -> segment 2
//!
//! // F after segment 2 belongs to the next position of each lane:
//! // position 2 -> 3, 5 -> 6, 8 -> 9
//! F after segment 2:  [f2  f5  f8  f11]
//! shifted up a lane:  [0   f2  f5  f8]
//! // walk the segments again while F beats H - deletion_open anywhere, shifting again on every
//! // wrap. Lane 0 fills with zeros, so at most 4 wraps are needed.
//! ```
//!
//! Scores are unsigned bytes. The profile stores `weight + bias` so mismatches stay
//! non-negative, and every cell subtracts `bias` again with saturation, which also clamps local
//! alignment scores at 0. Scores saturate at 255.

pub(crate) mod ends;
pub mod reference;
pub(crate) mod simd;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Scoring;

pub use ends::{AlignmentEnd, AlignmentEnds, ColumnBests, Scan};
pub use simd::{StripedEngine, StripedEnginePortable};
#[cfg(all(feature = "simd", target_arch = "aarch64"))]
pub use simd::StripedEngineNEON;
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub use simd::StripedEngineSSE2;

/// Affine gap penalties. Insertions consume reference positions without advancing the read,
/// deletions consume read positions without advancing the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GapPenalties {
    pub insertion_open: u8,
    pub insertion_extend: u8,
    pub deletion_open: u8,
    pub deletion_extend: u8,
}

impl From<&Scoring> for GapPenalties {
    fn from(scoring: &Scoring) -> Self {
        Self {
            insertion_open: scoring.insertion_open_penalty,
            insertion_extend: scoring.insertion_extend_penalty,
            deletion_open: scoring.deletion_open_penalty,
            deletion_extend: scoring.deletion_extend_penalty,
        }
    }
}
