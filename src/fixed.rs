//! Q16.16 signed fixed-point scalar.
//!
//! Every runtime quantity in the renderer lives in this representation:
//! 16 integer bits, 16 fractional bits, stored in an `i32`. Floating point
//! appears only in compile-time constant conversion ([`Fx32::from_f32`]);
//! nothing computed at runtime ever touches a float.
//!
//! Rounding and wraparound behavior are concentrated here so there is a
//! single audited implementation instead of bit-shifts scattered through
//! the scene code.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Number of fractional bits in the representation.
pub const FRAC_BITS: u32 = 16;

/// Q16.16 fixed-point scalar.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Fx32(i32);

impl Fx32 {
    /// 0.0
    pub const ZERO: Fx32 = Fx32(0);
    /// 1.0
    pub const ONE: Fx32 = Fx32(1 << FRAC_BITS);

    /// Build a constant from integer and fractional parts, mirroring the
    /// classic `((int & 0xffff) << 16) + frac` macro. `frac` is in units
    /// of 1/65536; values past `0xffff` deliberately carry into the
    /// integer part, so `from_parts(1, 0x2000)` is `0x12000`.
    #[inline(always)]
    pub const fn from_parts(int: i32, frac: u32) -> Fx32 {
        Fx32((((int as u32 & 0xffff) << 16).wrapping_add(frac)) as i32)
    }

    /// Convert a float literal to Q16.16 at compile time, truncating
    /// toward zero. Build-time constants only; never call this on a
    /// runtime-computed value.
    #[inline(always)]
    pub const fn from_f32(value: f32) -> Fx32 {
        Fx32((value * 65536.0) as i32)
    }

    /// Whole integer, fractional part zero.
    #[inline(always)]
    pub const fn from_int(value: i32) -> Fx32 {
        Fx32::from_parts(value, 0)
    }

    /// Construct directly from the raw Q16.16 bit pattern.
    #[inline(always)]
    pub const fn from_raw(raw: i32) -> Fx32 {
        Fx32(raw)
    }

    /// The raw Q16.16 bit pattern.
    #[inline(always)]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Fixed-point multiply.
    ///
    /// The true product is computed in a widened 64-bit intermediate and
    /// arithmetic-shifted right by the fractional width before truncating
    /// back to 32 bits. This is not the compiler's generic 64-bit multiply
    /// helper: both operands and the result are Q16.16, and the shift
    /// happens on the full 64-bit product.
    ///
    /// Products whose Q16.16 result does not fit in 32 bits truncate
    /// (wrap). Scene geometry keeps runtime values well inside the
    /// representable span; truncation on the way out is an accepted,
    /// documented limitation, not an error.
    #[inline(always)]
    pub const fn mul(self, rhs: Fx32) -> Fx32 {
        Fx32(((self.0 as i64 * rhs.0 as i64) >> FRAC_BITS) as i32)
    }

    /// Approximate `f32` value, for diagnostics and test references only.
    #[inline(always)]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / 65536.0
    }
}

// Addition and subtraction wrap on overflow. The squared-distance
// accumulator relies on wraparound near the far plane; saturating here
// would change the rendered image.

impl Add for Fx32 {
    type Output = Fx32;

    #[inline(always)]
    fn add(self, rhs: Fx32) -> Fx32 {
        Fx32(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Fx32 {
    type Output = Fx32;

    #[inline(always)]
    fn sub(self, rhs: Fx32) -> Fx32 {
        Fx32(self.0.wrapping_sub(rhs.0))
    }
}

impl Neg for Fx32 {
    type Output = Fx32;

    #[inline(always)]
    fn neg(self) -> Fx32 {
        Fx32(self.0.wrapping_neg())
    }
}

impl AddAssign for Fx32 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Fx32) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fx32 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Fx32) {
        *self = *self - rhs;
    }
}

impl fmt::Display for Fx32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f32())
    }
}
