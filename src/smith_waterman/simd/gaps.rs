use crate::simd::{Vector, any_gt};

use super::algo::Penalties;

/// Lazy F loop. The first pass over a column only carries deletions within a lane, so a
/// deletion leaving the last segment of lane `k` has to re-enter segment 0 of lane `k + 1`.
///
/// `f` is the deletion vector left after the last segment. It is shifted one lane up and walked
/// through the segments again, raising `h_store` and `e` wherever it beats the stored score minus
/// the deletion open penalty. The shift zero fills lane 0, so the loop ends after at most
/// `LANES` wraps.
///
/// Returns the number of segment updates performed.
#[inline(always)]
pub(crate) unsafe fn propagate_deletions<V: Vector>(
    f: V,
    h_store: &mut [V],
    e: &mut [V],
    penalties: &Penalties<V>,
    max_score: &mut V,
) -> usize {
    let segment_count = h_store.len();
    let mut updates = 0;

    unsafe {
        let mut f = f.shift_right_u8::<1>();
        let mut j = 0;
        while any_gt(f, h_store[j].subs_u8(penalties.deletion_open)) {
            let h = h_store[j].max_u8(f);
            h_store[j] = h;
            *max_score = max_score.max_u8(h);
            e[j] = e[j].max_u8(h.subs_u8(penalties.insertion_open));
            f = f.subs_u8(penalties.deletion_extend);
            updates += 1;

            j += 1;
            if j == segment_count {
                j = 0;
                f = f.shift_right_u8::<1>();
            }
        }
    }

    updates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        simd::{LANES, PortableVector},
        smith_waterman::GapPenalties,
    };

    fn penalties() -> Penalties<PortableVector> {
        unsafe {
            Penalties::splat(&GapPenalties {
                insertion_open: 3,
                insertion_extend: 1,
                deletion_open: 3,
                deletion_extend: 1,
            })
        }
    }

    #[test]
    fn test_deletion_crosses_lanes() {
        unsafe {
            // two segments: position = segment + lane * 2
            let mut h_store = vec![PortableVector::zero(); 2];
            let mut e = vec![PortableVector::zero(); 2];
            let mut max_score = PortableVector::zero();

            let mut carried = [0; LANES];
            carried[0] = 10;
            let updates = propagate_deletions(
                PortableVector::from_array(carried),
                &mut h_store,
                &mut e,
                &penalties(),
                &mut max_score,
            );

            // positions 2 through 11 receive 10, 9, 8, ...
            let first = h_store[0].to_array();
            let second = h_store[1].to_array();
            assert_eq!(&first[..7], [0, 10, 8, 6, 4, 2, 0]);
            assert_eq!(&second[..7], [0, 9, 7, 5, 3, 1, 0]);
            assert_eq!(updates, 10);

            assert_eq!(e[0].to_array()[1], 7);
            assert_eq!(e[1].to_array()[1], 6);
            assert_eq!(max_score.to_array()[1], 10);
        }
    }

    #[test]
    fn test_no_update_when_open_is_cheaper() {
        unsafe {
            let mut h_store = vec![PortableVector::splat_u8(20); 3];
            let mut e = vec![PortableVector::zero(); 3];
            let mut max_score = PortableVector::zero();

            let updates = propagate_deletions(
                PortableVector::splat_u8(17),
                &mut h_store,
                &mut e,
                &penalties(),
                &mut max_score,
            );

            assert_eq!(updates, 0);
            assert_eq!(h_store[0].to_array(), [20; LANES]);
            assert_eq!(max_score.to_array(), [0; LANES]);
        }
    }
}
