#[cfg(all(feature = "simd", target_arch = "aarch64"))]
mod neon;
mod portable;
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
mod sse;

#[cfg(all(feature = "simd", target_arch = "aarch64"))]
pub use neon::NEONVector;
pub use portable::PortableVector;
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub use sse::SSEVector;

/// Number of 8-bit lanes in a vector
pub const LANES: usize = 16;

#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Aligned16<T>(pub T);

/// A 128-bit vector of sixteen unsigned 8-bit lanes. All arithmetic saturates.
pub trait Vector: Copy + core::fmt::Debug {
    /// Whether the current CPU can execute this implementation
    fn is_available() -> bool;

    /// Create a vector with zeros in all lanes.
    unsafe fn zero() -> Self;
    /// Create a vector with the given byte repeated into each lane.
    unsafe fn splat_u8(value: u8) -> Self;

    /// Load sixteen lanes from an aligned block
    unsafe fn from_aligned(data: &Aligned16<[u8; LANES]>) -> Self;
    unsafe fn from_array(arr: [u8; LANES]) -> Self;
    unsafe fn to_array(self) -> [u8; LANES];

    unsafe fn adds_u8(self, other: Self) -> Self;
    unsafe fn subs_u8(self, other: Self) -> Self;
    unsafe fn max_u8(self, other: Self) -> Self;
    unsafe fn and(self, other: Self) -> Self;
    /// `0xFF` in lanes where `self == other`, `0x00` elsewhere
    unsafe fn eq_u8(self, other: Self) -> Self;

    /// Collects the high bit of every lane into a 16-bit mask, lane 0 in the lowest bit
    unsafe fn movemask_u8(self) -> u16;

    /// Move every lane `L` positions towards the last lane, filling the first `L` lanes with
    /// zeros
    unsafe fn shift_right_u8<const L: i32>(self) -> Self;
    /// Move every lane `L` positions towards the first lane, filling the last `L` lanes with
    /// zeros
    unsafe fn shift_left_u8<const L: i32>(self) -> Self;
}

/// Returns the maximum lane value and the first lane holding it
#[inline(always)]
pub unsafe fn lane_max<V: Vector>(vector: V) -> (u8, usize) {
    let lanes = unsafe { vector.to_array() };
    let mut max = lanes[0];
    let mut max_lane = 0;
    for (lane, &value) in lanes.iter().enumerate().skip(1) {
        if value > max {
            max = value;
            max_lane = lane;
        }
    }
    (max, max_lane)
}

/// True if every lane of `a` equals the matching lane of `b`
#[inline(always)]
pub unsafe fn all_eq<V: Vector>(a: V, b: V) -> bool {
    unsafe { a.eq_u8(b).movemask_u8() == 0xFFFF }
}

/// True if any lane of `a` is strictly greater than the matching lane of `b`
#[inline(always)]
pub unsafe fn any_gt<V: Vector>(a: V, b: V) -> bool {
    unsafe { !all_eq(a.subs_u8(b), V::zero()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAMP: [u8; LANES] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

    fn check_arithmetic<V: Vector>() {
        unsafe {
            let a = V::from_array([250, 10, 0, 128, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 255]);
            let b = V::splat_u8(10);

            assert_eq!(
                a.adds_u8(b).to_array(),
                [255, 20, 10, 138, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 255]
            );
            assert_eq!(
                a.subs_u8(b).to_array(),
                [240, 0, 0, 118, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 245]
            );
            assert_eq!(
                a.max_u8(b).to_array(),
                [250, 10, 10, 128, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 11, 255]
            );

            let mut mask = [0xFF; LANES];
            mask[0] = 0;
            mask[15] = 0;
            assert_eq!(
                a.and(V::from_array(mask)).to_array(),
                [0, 10, 0, 128, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0]
            );
        }
    }

    fn check_compare<V: Vector>() {
        unsafe {
            let a = V::from_array(RAMP);
            let b = V::splat_u8(3);
            let eq = a.eq_u8(b);
            assert_eq!(eq.to_array()[3], 0xFF);
            assert_eq!(eq.movemask_u8(), 1 << 3);

            assert_eq!(V::zero().movemask_u8(), 0);
            assert_eq!(V::splat_u8(0xFF).movemask_u8(), 0xFFFF);
            assert_eq!(V::from_array(RAMP).movemask_u8(), 0);

            assert!(all_eq(a, V::from_array(RAMP)));
            assert!(!all_eq(a, b));
            assert!(any_gt(a, b));
            assert!(!any_gt(b, V::splat_u8(3)));
        }
    }

    fn check_shifts<V: Vector>() {
        unsafe {
            let a = V::from_array(RAMP);
            assert_eq!(
                a.shift_right_u8::<1>().to_array(),
                [0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14]
            );
            assert_eq!(
                a.shift_left_u8::<1>().to_array(),
                [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0]
            );
            assert_eq!(
                a.shift_right_u8::<4>().to_array(),
                [0, 0, 0, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]
            );
            assert_eq!(a.shift_right_u8::<0>().to_array(), RAMP);
        }
    }

    fn check_loads<V: Vector>() {
        unsafe {
            let block = Aligned16(RAMP);
            assert_eq!(V::from_aligned(&block).to_array(), RAMP);
            assert_eq!(V::splat_u8(7).to_array(), [7; LANES]);
            assert_eq!(V::zero().to_array(), [0; LANES]);
        }
    }

    fn check_lane_max<V: Vector>() {
        unsafe {
            assert_eq!(lane_max(V::from_array(RAMP)), (15, 15));
            assert_eq!(lane_max(V::zero()), (0, 0));

            let mut ties = [1; LANES];
            ties[5] = 9;
            ties[11] = 9;
            assert_eq!(lane_max(V::from_array(ties)), (9, 5));
        }
    }

    fn check_all<V: Vector>() {
        check_arithmetic::<V>();
        check_compare::<V>();
        check_shifts::<V>();
        check_loads::<V>();
        check_lane_max::<V>();
    }

    #[test]
    fn test_portable_vector() {
        check_all::<PortableVector>();
    }

    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    #[test]
    fn test_sse_vector() {
        if SSEVector::is_available() {
            check_all::<SSEVector>();
        }
    }

    #[cfg(all(feature = "simd", target_arch = "aarch64"))]
    #[test]
    fn test_neon_vector() {
        check_all::<NEONVector>();
    }
}
