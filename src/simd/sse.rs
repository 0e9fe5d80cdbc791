use std::arch::x86_64::*;

use super::{Aligned16, LANES};

#[derive(Debug, Clone, Copy)]
pub struct SSEVector(__m128i);

impl super::Vector for SSEVector {
    #[inline]
    fn is_available() -> bool {
        raw_cpuid::CpuId::new()
            .get_feature_info()
            .is_some_and(|info| info.has_sse2())
    }

    #[inline(always)]
    unsafe fn zero() -> Self {
        Self(_mm_setzero_si128())
    }

    #[inline(always)]
    unsafe fn splat_u8(value: u8) -> Self {
        Self(_mm_set1_epi8(value as i8))
    }

    #[inline(always)]
    unsafe fn from_aligned(data: &Aligned16<[u8; LANES]>) -> Self {
        Self(unsafe { _mm_load_si128(data.0.as_ptr() as *const __m128i) })
    }

    #[inline(always)]
    unsafe fn from_array(arr: [u8; LANES]) -> Self {
        Self(unsafe { _mm_loadu_si128(arr.as_ptr() as *const __m128i) })
    }

    #[inline(always)]
    unsafe fn to_array(self) -> [u8; LANES] {
        let mut arr = [0u8; LANES];
        unsafe { _mm_storeu_si128(arr.as_mut_ptr() as *mut __m128i, self.0) };
        arr
    }

    #[inline(always)]
    unsafe fn adds_u8(self, other: Self) -> Self {
        Self(_mm_adds_epu8(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn subs_u8(self, other: Self) -> Self {
        Self(_mm_subs_epu8(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn max_u8(self, other: Self) -> Self {
        Self(_mm_max_epu8(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn and(self, other: Self) -> Self {
        Self(_mm_and_si128(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn eq_u8(self, other: Self) -> Self {
        Self(_mm_cmpeq_epi8(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn movemask_u8(self) -> u16 {
        _mm_movemask_epi8(self.0) as u16
    }

    #[inline(always)]
    unsafe fn shift_right_u8<const L: i32>(self) -> Self {
        // Lane 0 is the lowest byte, so moving lanes up is a left byte shift
        Self(_mm_slli_si128::<L>(self.0))
    }

    #[inline(always)]
    unsafe fn shift_left_u8<const L: i32>(self) -> Self {
        Self(_mm_srli_si128::<L>(self.0))
    }
}
