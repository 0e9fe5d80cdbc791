use super::{Aligned16, LANES};

/// Loop based fallback, producing the same results as the native implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct PortableVector([u8; LANES]);

impl PortableVector {
    #[inline(always)]
    fn zip(self, other: Self, f: impl Fn(u8, u8) -> u8) -> Self {
        Self(std::array::from_fn(|i| f(self.0[i], other.0[i])))
    }
}

impl super::Vector for PortableVector {
    #[inline]
    fn is_available() -> bool {
        true
    }

    #[inline(always)]
    unsafe fn zero() -> Self {
        Self([0; LANES])
    }

    #[inline(always)]
    unsafe fn splat_u8(value: u8) -> Self {
        Self([value; LANES])
    }

    #[inline(always)]
    unsafe fn from_aligned(data: &Aligned16<[u8; LANES]>) -> Self {
        Self(data.0)
    }

    #[inline(always)]
    unsafe fn from_array(arr: [u8; LANES]) -> Self {
        Self(arr)
    }

    #[inline(always)]
    unsafe fn to_array(self) -> [u8; LANES] {
        self.0
    }

    #[inline(always)]
    unsafe fn adds_u8(self, other: Self) -> Self {
        self.zip(other, u8::saturating_add)
    }

    #[inline(always)]
    unsafe fn subs_u8(self, other: Self) -> Self {
        self.zip(other, u8::saturating_sub)
    }

    #[inline(always)]
    unsafe fn max_u8(self, other: Self) -> Self {
        self.zip(other, u8::max)
    }

    #[inline(always)]
    unsafe fn and(self, other: Self) -> Self {
        self.zip(other, |a, b| a & b)
    }

    #[inline(always)]
    unsafe fn eq_u8(self, other: Self) -> Self {
        self.zip(other, |a, b| if a == b { 0xFF } else { 0x00 })
    }

    #[inline(always)]
    unsafe fn movemask_u8(self) -> u16 {
        self.0
            .iter()
            .enumerate()
            .fold(0u16, |mask, (lane, &value)| mask | (((value >> 7) as u16) << lane))
    }

    #[inline(always)]
    unsafe fn shift_right_u8<const L: i32>(self) -> Self {
        let shift = L as usize;
        Self(std::array::from_fn(|i| {
            if i >= shift { self.0[i - shift] } else { 0 }
        }))
    }

    #[inline(always)]
    unsafe fn shift_left_u8<const L: i32>(self) -> Self {
        let shift = L as usize;
        Self(std::array::from_fn(|i| {
            if i + shift < LANES { self.0[i + shift] } else { 0 }
        }))
    }
}
