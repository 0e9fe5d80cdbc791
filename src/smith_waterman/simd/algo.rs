use crate::{
    error::Result,
    profile::QueryProfile,
    simd::{Aligned16, LANES, Vector, all_eq, lane_max},
    smith_waterman::{
        GapPenalties,
        ends::{AlignmentEnd, AlignmentEnds, ColumnBests, Scan},
    },
};

use super::gaps::propagate_deletions;

/// Gap penalties broadcast to every lane
#[derive(Debug, Clone, Copy)]
pub(crate) struct Penalties<V: Vector> {
    pub insertion_open: V,
    pub insertion_extend: V,
    pub deletion_open: V,
    pub deletion_extend: V,
}

impl<V: Vector> Penalties<V> {
    #[inline(always)]
    pub unsafe fn splat(gaps: &GapPenalties) -> Self {
        unsafe {
            Self {
                insertion_open: V::splat_u8(gaps.insertion_open),
                insertion_extend: V::splat_u8(gaps.insertion_extend),
                deletion_open: V::splat_u8(gaps.deletion_open),
                deletion_extend: V::splat_u8(gaps.deletion_extend),
            }
        }
    }
}

fn try_filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len)?;
    buffer.resize(len, value);
    Ok(buffer)
}

/// Scores `reference` (already encoded) against the striped `profile`, one reference position
/// per outer iteration.
///
/// Per column, for each segment `j`:
///
/// ```text
/// H = max(H_diag + profile[j] - bias, E[j], F)
/// E[j] = max(E[j] - insertion_extend, H - insertion_open)
/// F = max(F - deletion_extend, H - deletion_open)
/// ```
///
/// followed by the lazy F loop. Column maxima only consider lanes holding a read position.
///
/// # Safety
///
/// `V` must be supported by the running CPU
#[inline(always)]
pub(crate) unsafe fn striped_smith_waterman<V: Vector>(
    reference: &[u8],
    gaps: &GapPenalties,
    profile: &QueryProfile,
) -> Result<Scan> {
    let segment_count = profile.segment_count();
    let read_len = profile.query_len();

    let mut columns = ColumnBests::with_capacity(reference.len())?;
    let mut best = AlignmentEnd::default();
    let mut lazy_updates = 0usize;

    unsafe {
        let zero = V::zero();
        let bias = V::splat_u8(profile.bias());
        let penalties = Penalties::<V>::splat(gaps);

        let mut h_store = try_filled(segment_count, zero)?;
        let mut h_load = try_filled(segment_count, zero)?;
        let mut e = try_filled(segment_count, zero)?;

        let mut max_score = zero;
        let mut max_mark = zero;

        for (i, &symbol) in reference.iter().enumerate() {
            let row = profile.row_index(symbol as usize);

            let mut f = zero;
            // Diagonal of segment 0 is the last segment of the previous column, one lane down
            let mut h = h_store[segment_count - 1].shift_right_u8::<1>();
            std::mem::swap(&mut h_store, &mut h_load);

            for j in 0..segment_count {
                h = h.adds_u8(V::from_aligned(&row[j])).subs_u8(bias);
                h = h.max_u8(e[j]).max_u8(f);
                max_score = max_score.max_u8(h);
                h_store[j] = h;

                e[j] = e[j]
                    .subs_u8(penalties.insertion_extend)
                    .max_u8(h.subs_u8(penalties.insertion_open));
                f = f
                    .subs_u8(penalties.deletion_extend)
                    .max_u8(h.subs_u8(penalties.deletion_open));

                h = h_load[j];
            }

            lazy_updates +=
                propagate_deletions(f, &mut h_store, &mut e, &penalties, &mut max_score);

            let (column_max, read_end) = column_best(&h_store, profile.lane_masks());

            let previous_mark = max_mark;
            max_mark = max_mark.max_u8(max_score);
            if !all_eq(max_mark, previous_mark) && column_max > best.score {
                best = AlignmentEnd {
                    score: column_max,
                    reference_end: i + 1,
                    read_end,
                };
            }

            columns.push(column_max, read_end);
        }
    }

    let second_best = columns.second_best(&best, read_len);

    log::debug!(
        "scanned {} reference positions over {} segments ({} lazy F updates), best {:?}, second best {:?}",
        reference.len(),
        segment_count,
        lazy_updates,
        best,
        second_best
    );
    if log::log_enabled!(log::Level::Trace) {
        log::trace!("column maxima: {:?}", columns.scores());
    }

    Ok(Scan {
        ends: AlignmentEnds { best, second_best },
        columns,
    })
}

/// Highest score in the column and its 1-based read position, ignoring padding lanes. Ties go to
/// the earliest segment, then the lowest lane.
#[inline(always)]
unsafe fn column_best<V: Vector>(
    h_store: &[V],
    lane_masks: &[Aligned16<[u8; LANES]>],
) -> (u8, usize) {
    unsafe {
        let mut column_max = V::zero();
        for (h, mask) in h_store.iter().zip(lane_masks) {
            column_max = column_max.max_u8(h.and(V::from_aligned(mask)));
        }
        let (target, _) = lane_max(column_max);
        if target == 0 {
            return (0, 0);
        }

        let segment_count = h_store.len();
        for (j, (h, mask)) in h_store.iter().zip(lane_masks).enumerate() {
            let (value, lane) = lane_max(h.and(V::from_aligned(mask)));
            if value == target {
                return (target, lane * segment_count + j + 1);
            }
        }
        (target, 0)
    }
}
