//! Fixed-point scalars for the per-pixel hot path.
//!
//! [`F16`] stores a nonnegative real as a `u64` scaled by 2^16, [`F32`] as a
//! `u64` scaled by 2^32. Multiplying two `F16`s yields an `F32` with no
//! intermediate shift, so interpolation weights stay exact through one level
//! of multiplication. Cell indices come out of a shift and a mask instead of
//! a floor and a modulo.
//!
//! Both types wrap the `fixed` crate's unsigned types for formatting and
//! float conversion; the arithmetic that matters is done on the raw bits.

use std::fmt;
use std::ops::{Add, Sub};

use fixed::types::{U32F32, U48F16};

const FRAC_BITS: u32 = 16;
const REMAINDER_MASK: u64 = (1 << FRAC_BITS) - 1;
const FLOAT_FACTOR_16: f64 = (1u64 << FRAC_BITS) as f64;

/// Nonnegative multiple of 2^-16, from 0 to 2^48 - 2^-16.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct F16(U48F16);

/// Nonnegative multiple of 2^-32, from 0 to 2^32 - 2^-32.
///
/// Produced by [`F16::times`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct F32(U32F32);

impl F16 {
    pub const ZERO: F16 = F16::from_bits(0);
    pub const ONE: F16 = F16::from_bits(1 << FRAC_BITS);
    pub const HALF: F16 = F16::from_bits(1 << (FRAC_BITS - 1));

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(U48F16::from_bits(bits))
    }

    #[inline]
    pub const fn to_bits(self) -> u64 {
        self.0.to_bits()
    }

    /// Integral value `i`. Bits above 2^48 are shifted out.
    #[inline]
    pub const fn from_int(i: u64) -> Self {
        Self::from_bits(i << FRAC_BITS)
    }

    /// Truncates `f` toward zero. Negative and NaN inputs become zero,
    /// values past the range saturate.
    #[inline]
    pub fn from_f64(f: f64) -> Self {
        Self::from_bits((f * FLOAT_FACTOR_16) as u64)
    }

    /// Integral part.
    #[inline]
    pub const fn int(self) -> u64 {
        self.to_bits() >> FRAC_BITS
    }

    /// Non-integral part, in [0, 1).
    #[inline]
    pub const fn remainder(self) -> Self {
        Self::from_bits(self.to_bits() & REMAINDER_MASK)
    }

    /// Exact for values below 2^37.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0.to_num::<f64>()
    }

    /// Exact product, widened to 32 fractional bits.
    ///
    /// Exact as long as the integral part of the product fits in 32 bits,
    /// which always holds for two remainders.
    #[inline]
    pub const fn times(self, rhs: Self) -> F32 {
        F32::from_bits(self.to_bits().wrapping_mul(rhs.to_bits()))
    }

    /// Multiplicative inverse, truncated. `None` for zero.
    #[inline]
    pub fn recip(self) -> Option<Self> {
        F32::ONE.divided_by(self)
    }
}

impl F32 {
    pub const ZERO: F32 = F32::from_bits(0);
    pub const ONE: F32 = F32::from_bits(1 << (2 * FRAC_BITS));

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(U32F32::from_bits(bits))
    }

    #[inline]
    pub const fn to_bits(self) -> u64 {
        self.0.to_bits()
    }

    /// Drops the low 16 fractional bits.
    #[inline]
    pub const fn to_f16(self) -> F16 {
        F16::from_bits(self.to_bits() >> FRAC_BITS)
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0.to_num::<f64>()
    }

    /// `self / rhs` as an `F16`. `None` when `rhs` is zero.
    #[inline]
    pub fn divided_by(self, rhs: F16) -> Option<F16> {
        self.to_bits().checked_div(rhs.to_bits()).map(F16::from_bits)
    }
}

impl Add for F16 {
    type Output = F16;

    #[inline]
    fn add(self, rhs: F16) -> F16 {
        F16(self.0 + rhs.0)
    }
}

impl Sub for F16 {
    type Output = F16;

    #[inline]
    fn sub(self, rhs: F16) -> F16 {
        F16(self.0 - rhs.0)
    }
}

impl fmt::Display for F16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for F32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
