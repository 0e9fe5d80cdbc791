//! Striped query profile (Farrar, 2007).
//!
//! The query is split into `segment_count = ceil(len / 16)` segments and read position `pos` is
//! stored in segment `pos % segment_count`, lane `pos / segment_count`. For a query of length 40
//! (3 segments):
//!
//! ```text
//!            lane 0  lane 1  lane 2  ...  lane 13  lane 14  lane 15
//! segment 0  pos 0   pos 3   pos 6        pos 39   pad      pad
//! segment 1  pos 1   pos 4   pos 7        pad      pad      pad
//! segment 2  pos 2   pos 5   pos 8        pad      pad      pad
//! ```
//!
//! One vector then scores a single reference symbol against 16 read positions that are
//! `segment_count` apart, so the inner loop runs `segment_count` times per reference position
//! instead of `len` times.

use crate::{
    Scoring,
    alphabet::{ALPHABET_SIZE, Symbol, encode_sequence},
    error::{AlignError, Result, SequenceKind},
    scoring_matrix::ScoringMatrix,
    simd::{Aligned16, LANES},
};

#[derive(Debug, Clone)]
pub struct QueryProfile {
    /// `ALPHABET_SIZE` rows of `segment_count` blocks
    blocks: Vec<Aligned16<[u8; LANES]>>,
    /// Per segment, `0xFF` in lanes holding a read position and `0x00` in padding lanes
    lane_masks: Vec<Aligned16<[u8; LANES]>>,
    query_len: usize,
    segment_count: usize,
    bias: u8,
}

impl QueryProfile {
    /// Builds the profile for `query`, storing `weight + bias` for every real read position and
    /// a raw `0` for padding lanes past the end of the query
    pub fn new(query: &[u8], match_score: u8, mismatch_penalty: u8, bias: u8) -> Result<Self> {
        let encoded = encode_sequence(query, SequenceKind::Query)?;
        Self::from_encoded(&encoded, match_score, mismatch_penalty, bias)
    }

    pub fn from_scoring(query: &[u8], scoring: &Scoring) -> Result<Self> {
        Self::new(
            query,
            scoring.match_score,
            scoring.mismatch_penalty,
            scoring.bias,
        )
    }

    pub(crate) fn from_encoded(
        query: &[u8],
        match_score: u8,
        mismatch_penalty: u8,
        bias: u8,
    ) -> Result<Self> {
        if query.is_empty() {
            return Err(AlignError::EmptySequence(SequenceKind::Query));
        }
        check_profile_range(match_score, mismatch_penalty, bias)?;

        let matrix = ScoringMatrix::new(match_score, mismatch_penalty);
        let query_len = query.len();
        let segment_count = query_len.div_ceil(LANES);

        let mut blocks = Vec::new();
        blocks.try_reserve_exact(ALPHABET_SIZE * segment_count)?;

        for symbol in 0..ALPHABET_SIZE {
            for segment in 0..segment_count {
                let block = std::array::from_fn(|lane| {
                    let pos = segment + lane * segment_count;
                    match query.get(pos) {
                        // In range since -mismatch + bias >= 0 and match + bias <= 255
                        Some(&read_symbol) => {
                            (matrix.get_index(symbol, read_symbol as usize) + bias as i16) as u8
                        }
                        None => 0,
                    }
                });
                blocks.push(Aligned16(block));
            }
        }

        let mut lane_masks = Vec::new();
        lane_masks.try_reserve_exact(segment_count)?;
        lane_masks.extend((0..segment_count).map(|segment| {
            Aligned16(std::array::from_fn(|lane| {
                if segment + lane * segment_count < query_len {
                    0xFF
                } else {
                    0x00
                }
            }))
        }));

        Ok(Self {
            blocks,
            lane_masks,
            query_len,
            segment_count,
            bias,
        })
    }

    #[inline(always)]
    pub fn query_len(&self) -> usize {
        self.query_len
    }

    #[inline(always)]
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    #[inline(always)]
    pub fn bias(&self) -> u8 {
        self.bias
    }

    /// The `segment_count` blocks scoring `symbol` against the query
    #[inline(always)]
    pub fn row(&self, symbol: Symbol) -> &[Aligned16<[u8; LANES]>] {
        self.row_index(symbol.index())
    }

    #[inline(always)]
    pub(crate) fn row_index(&self, symbol: usize) -> &[Aligned16<[u8; LANES]>] {
        let start = symbol * self.segment_count;
        &self.blocks[start..start + self.segment_count]
    }

    #[inline(always)]
    pub(crate) fn lane_masks(&self) -> &[Aligned16<[u8; LANES]>] {
        &self.lane_masks
    }

    pub fn score(&self, symbol: Symbol, segment: usize, lane: usize) -> u8 {
        self.row(symbol)[segment].0[lane]
    }
}

/// Ensures every biased weight fits in an unsigned byte
pub(crate) fn check_profile_range(match_score: u8, mismatch_penalty: u8, bias: u8) -> Result<()> {
    if bias < mismatch_penalty {
        return Err(AlignError::BiasTooSmall {
            bias,
            mismatch: mismatch_penalty,
        });
    }
    if match_score.checked_add(bias).is_none() {
        return Err(AlignError::ProfileOverflow { match_score, bias });
    }
    Ok(())
}
