#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// End point of a local alignment. Positions are 1-based and inclusive, a score of 0 means no
/// alignment was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlignmentEnd {
    /// Saturates at 255
    pub score: u8,
    pub reference_end: usize,
    pub read_end: usize,
}

impl AlignmentEnd {
    pub fn is_aligned(&self) -> bool {
        self.score > 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlignmentEnds {
    pub best: AlignmentEnd,
    /// Best alignment ending outside a window of half the read length around `best`
    pub second_best: AlignmentEnd,
}

/// The highest score of every reference position and the read position it was reached at
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnBests {
    scores: Vec<u8>,
    read_ends: Vec<usize>,
}

impl ColumnBests {
    pub(crate) fn with_capacity(reference_len: usize) -> Result<Self> {
        let mut scores = Vec::new();
        scores.try_reserve_exact(reference_len)?;
        let mut read_ends = Vec::new();
        read_ends.try_reserve_exact(reference_len)?;
        Ok(Self { scores, read_ends })
    }

    #[inline(always)]
    pub(crate) fn push(&mut self, score: u8, read_end: usize) {
        self.scores.push(score);
        self.read_ends.push(read_end);
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn scores(&self) -> &[u8] {
        &self.scores
    }

    /// 1-based read end of each column's best score, 0 where the column scored 0
    pub fn read_ends(&self) -> &[usize] {
        &self.read_ends
    }

    /// Best alignment ending at the 0-based reference `column`
    pub fn get(&self, column: usize) -> Option<AlignmentEnd> {
        Some(AlignmentEnd {
            score: *self.scores.get(column)?,
            reference_end: column + 1,
            read_end: self.read_ends[column],
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = AlignmentEnd> + '_ {
        (0..self.len()).filter_map(|column| self.get(column))
    }

    /// Highest scoring column outside `best.reference_end ± read_len / 2`. The earliest column
    /// wins ties, and no qualifying column yields a zero score.
    pub fn second_best(&self, best: &AlignmentEnd, read_len: usize) -> AlignmentEnd {
        let radius = read_len / 2;
        let before = best.reference_end.saturating_sub(radius + 1).min(self.len());
        let after = (best.reference_end + radius + 1).min(self.len());

        (0..before)
            .chain(after..self.len())
            .fold(AlignmentEnd::default(), |second, column| {
                if self.scores[column] > second.score {
                    AlignmentEnd {
                        score: self.scores[column],
                        reference_end: column + 1,
                        read_end: self.read_ends[column],
                    }
                } else {
                    second
                }
            })
    }
}

/// Everything a scan of one reference produces
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    pub ends: AlignmentEnds,
    pub columns: ColumnBests,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(scores: &[u8]) -> ColumnBests {
        let mut columns = ColumnBests::with_capacity(scores.len()).unwrap();
        for (i, &score) in scores.iter().enumerate() {
            columns.push(score, if score == 0 { 0 } else { i % 7 + 1 });
        }
        columns
    }

    fn best_at(reference_end: usize) -> AlignmentEnd {
        AlignmentEnd {
            score: 200,
            reference_end,
            read_end: 1,
        }
    }

    #[test]
    fn test_exclusion_window() {
        // read length 4 gives radius 2: with the best ending at 10 (1-based), columns 7..=12
        // (0-based) are excluded
        let mut scores = [1u8; 20];
        for score in &mut scores[7..=12] {
            *score = 50;
        }
        scores[6] = 9;
        scores[13] = 8;
        let columns = columns(&scores);

        let second = columns.second_best(&best_at(10), 4);
        assert_eq!(second.score, 9);
        assert_eq!(second.reference_end, 7);
        assert_eq!(second.read_end, 7);

        scores[6] = 1;
        let second = columns_second(&scores, 10, 4);
        assert_eq!((second.score, second.reference_end), (8, 14));
    }

    fn columns_second(scores: &[u8], reference_end: usize, read_len: usize) -> AlignmentEnd {
        columns(scores).second_best(&best_at(reference_end), read_len)
    }

    #[test]
    fn test_window_clamps_at_start() {
        let scores = [5, 5, 5, 6, 1, 1, 1, 1, 1, 1];
        // best at 2 with radius 5 would start the window before the first column
        let second = columns_second(&scores, 2, 10);
        assert_eq!(second.score, 1);
        assert_eq!(second.reference_end, 9);
    }

    #[test]
    fn test_window_clamps_at_end() {
        let scores = [3, 1, 1, 1, 7, 7, 7];
        let second = columns_second(&scores, 7, 6);
        assert_eq!((second.score, second.reference_end), (3, 1));
    }

    #[test]
    fn test_window_covers_everything() {
        let second = columns_second(&[4, 4, 4, 4], 2, 8);
        assert_eq!(second, AlignmentEnd::default());
        assert!(!second.is_aligned());
    }

    #[test]
    fn test_earliest_column_wins_ties() {
        let scores = [0, 6, 0, 6, 0, 0, 0, 0, 0, 0, 0, 0, 50, 0];
        let second = columns_second(&scores, 13, 2);
        assert_eq!((second.score, second.reference_end), (6, 2));
    }

    #[test]
    fn test_no_alignment() {
        let columns = columns(&[0; 12]);
        let second = columns.second_best(&AlignmentEnd::default(), 6);
        assert_eq!(second, AlignmentEnd::default());
    }

    #[test]
    fn test_column_accessors() {
        let columns = columns(&[0, 3, 9]);
        assert_eq!(columns.len(), 3);
        assert_eq!(
            columns.get(2),
            Some(AlignmentEnd {
                score: 9,
                reference_end: 3,
                read_end: 3
            })
        );
        assert_eq!(columns.get(3), None);
        assert_eq!(columns.iter().map(|end| end.score).collect::<Vec<_>>(), [0, 3, 9]);
        assert_eq!(columns.read_ends(), [0, 2, 3]);
    }
}
