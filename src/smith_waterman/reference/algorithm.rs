use crate::{
    Scoring,
    alphabet::encode_sequence,
    error::{AlignError, Result, SequenceKind},
    scoring_matrix::ScoringMatrix,
    smith_waterman::{
        GapPenalties,
        ends::{AlignmentEnd, AlignmentEnds, ColumnBests, Scan},
    },
};

/// Scalar Gotoh recurrence over the same saturating byte arithmetic as the striped engines.
/// Returns the scan together with the score matrix, indexed `[reference][read]`.
pub fn smith_waterman(
    reference: &[u8],
    query: &[u8],
    scoring: &Scoring,
) -> Result<(Scan, Vec<Vec<u8>>)> {
    scoring.validate()?;
    let reference = encode_sequence(reference, SequenceKind::Reference)?;
    let query = encode_sequence(query, SequenceKind::Query)?;
    if query.is_empty() {
        return Err(AlignError::EmptySequence(SequenceKind::Query));
    }

    let matrix = ScoringMatrix::new(scoring.match_score, scoring.mismatch_penalty);
    let gaps = GapPenalties::from(scoring);
    let bias = scoring.bias;

    // State
    let mut score_matrix = vec![vec![0u8; query.len()]; reference.len()];
    let mut insertions = vec![0u8; query.len()];
    let mut columns = ColumnBests::with_capacity(reference.len())?;
    let mut best = AlignmentEnd::default();
    let zeros = vec![0u8; query.len()];

    for (i, &reference_symbol) in reference.iter().enumerate() {
        let (prev_col_scores, curr_col_scores) = if i > 0 {
            let (prev_col_scores_slice, curr_col_scores_slice) = score_matrix.split_at_mut(i);
            (&prev_col_scores_slice[i - 1], &mut curr_col_scores_slice[0])
        } else {
            (&zeros, &mut score_matrix[i])
        };

        let mut deletion = 0u8;
        let mut column_best = (0u8, 0usize);

        for (j, &read_symbol) in query.iter().enumerate() {
            let diag = if j == 0 { 0 } else { prev_col_scores[j - 1] };
            let weight = (matrix.get_index(reference_symbol as usize, read_symbol as usize)
                + bias as i16) as u8;

            let score = diag
                .saturating_add(weight)
                .saturating_sub(bias)
                .max(insertions[j])
                .max(deletion);
            curr_col_scores[j] = score;

            insertions[j] = insertions[j]
                .saturating_sub(gaps.insertion_extend)
                .max(score.saturating_sub(gaps.insertion_open));
            deletion = deletion
                .saturating_sub(gaps.deletion_extend)
                .max(score.saturating_sub(gaps.deletion_open));

            if score > column_best.0 {
                column_best = (score, j + 1);
            }
        }

        if column_best.0 > best.score {
            best = AlignmentEnd {
                score: column_best.0,
                reference_end: i + 1,
                read_end: column_best.1,
            };
        }
        columns.push(column_best.0, column_best.1);
    }

    let second_best = columns.second_best(&best, query.len());
    Ok((
        Scan {
            ends: AlignmentEnds { best, second_best },
            columns,
        },
        score_matrix,
    ))
}
