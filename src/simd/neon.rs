use std::arch::aarch64::*;

use super::{Aligned16, LANES};

/// Per lane shift amounts used to pack the high bits of each half into a byte
const MOVEMASK_SHIFTS: [i8; LANES] = [0, 1, 2, 3, 4, 5, 6, 7, 0, 1, 2, 3, 4, 5, 6, 7];

#[derive(Debug, Clone, Copy)]
pub struct NEONVector(uint8x16_t);

impl super::Vector for NEONVector {
    #[inline]
    fn is_available() -> bool {
        // NEON is mandatory on aarch64
        cfg!(target_arch = "aarch64")
    }

    #[inline(always)]
    unsafe fn zero() -> Self {
        Self(vdupq_n_u8(0))
    }

    #[inline(always)]
    unsafe fn splat_u8(value: u8) -> Self {
        Self(vdupq_n_u8(value))
    }

    #[inline(always)]
    unsafe fn from_aligned(data: &Aligned16<[u8; LANES]>) -> Self {
        Self(unsafe { vld1q_u8(data.0.as_ptr()) })
    }

    #[inline(always)]
    unsafe fn from_array(arr: [u8; LANES]) -> Self {
        Self(unsafe { vld1q_u8(arr.as_ptr()) })
    }

    #[inline(always)]
    unsafe fn to_array(self) -> [u8; LANES] {
        let mut arr = [0u8; LANES];
        unsafe { vst1q_u8(arr.as_mut_ptr(), self.0) };
        arr
    }

    #[inline(always)]
    unsafe fn adds_u8(self, other: Self) -> Self {
        Self(vqaddq_u8(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn subs_u8(self, other: Self) -> Self {
        Self(vqsubq_u8(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn max_u8(self, other: Self) -> Self {
        Self(vmaxq_u8(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn and(self, other: Self) -> Self {
        Self(vandq_u8(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn eq_u8(self, other: Self) -> Self {
        Self(vceqq_u8(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn movemask_u8(self) -> u16 {
        let high_bits = vshrq_n_u8::<7>(self.0);
        let shifts = unsafe { vld1q_s8(MOVEMASK_SHIFTS.as_ptr()) };
        let packed = vshlq_u8(high_bits, shifts);
        let low = vaddv_u8(vget_low_u8(packed)) as u16;
        let high = vaddv_u8(vget_high_u8(packed)) as u16;
        low | (high << 8)
    }

    #[inline(always)]
    unsafe fn shift_right_u8<const L: i32>(self) -> Self {
        let zero = vdupq_n_u8(0);
        match L {
            0 => self,
            1 => Self(vextq_u8(zero, self.0, 15)),
            2 => Self(vextq_u8(zero, self.0, 14)),
            3 => Self(vextq_u8(zero, self.0, 13)),
            4 => Self(vextq_u8(zero, self.0, 12)),
            5 => Self(vextq_u8(zero, self.0, 11)),
            6 => Self(vextq_u8(zero, self.0, 10)),
            7 => Self(vextq_u8(zero, self.0, 9)),
            8 => Self(vextq_u8(zero, self.0, 8)),
            9 => Self(vextq_u8(zero, self.0, 7)),
            10 => Self(vextq_u8(zero, self.0, 6)),
            11 => Self(vextq_u8(zero, self.0, 5)),
            12 => Self(vextq_u8(zero, self.0, 4)),
            13 => Self(vextq_u8(zero, self.0, 3)),
            14 => Self(vextq_u8(zero, self.0, 2)),
            15 => Self(vextq_u8(zero, self.0, 1)),
            _ => Self(zero),
        }
    }

    #[inline(always)]
    unsafe fn shift_left_u8<const L: i32>(self) -> Self {
        let zero = vdupq_n_u8(0);
        match L {
            0 => self,
            1 => Self(vextq_u8(self.0, zero, 1)),
            2 => Self(vextq_u8(self.0, zero, 2)),
            3 => Self(vextq_u8(self.0, zero, 3)),
            4 => Self(vextq_u8(self.0, zero, 4)),
            5 => Self(vextq_u8(self.0, zero, 5)),
            6 => Self(vextq_u8(self.0, zero, 6)),
            7 => Self(vextq_u8(self.0, zero, 7)),
            8 => Self(vextq_u8(self.0, zero, 8)),
            9 => Self(vextq_u8(self.0, zero, 9)),
            10 => Self(vextq_u8(self.0, zero, 10)),
            11 => Self(vextq_u8(self.0, zero, 11)),
            12 => Self(vextq_u8(self.0, zero, 12)),
            13 => Self(vextq_u8(self.0, zero, 13)),
            14 => Self(vextq_u8(self.0, zero, 14)),
            15 => Self(vextq_u8(self.0, zero, 15)),
            _ => Self(zero),
        }
    }
}
