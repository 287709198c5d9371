//! Unsigned arbitrary-precision integer façade
//!
//! `DecUint` owns one canonical [`DigitVec`] and routes every operation to
//! the kernels: add/sub through the SIMD-dispatched carry chains, products
//! through the schoolbook/FFT crossover, division through the reciprocal
//! divider, text through the balanced parser and the per-limb emitter.
//!
//! Contract breaches panic the way std's unsigned types do (subtraction
//! underflow, zero divisor); `checked_*` variants return `None` instead.
//! With the `validity-checks` feature the multiply/divide entry points
//! additionally assert the operand-length cap that keeps convolutions
//! inside the engine's supported transform length.

use crate::digits::{DigitVec, LIMB_DIGITS};
use crate::div::big_divmod;
use crate::error::{ParseDecimalError, TryFromDecimalError};
use crate::kernels::{self, compare};
use crate::mul::big_mul;
use crate::text::{parse_decimal, write_decimal};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};
use std::str::FromStr;

/// Largest supported operand length in limbs for multiply and divide.
///
/// Keeps `next_power_of_two(3 * (|a| + |b|))` within the engine's
/// transform cap even for the oversized products the reciprocal divider
/// builds internally. Roughly 4.7 million decimal digits per operand.
pub const MAX_OPERAND_LIMBS: usize = 1 << 19;

/// Unsigned arbitrary-precision decimal integer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DecUint {
    digits: DigitVec,
}

impl DecUint {
    /// The value zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// The value one.
    pub fn one() -> Self {
        Self::from(1u32)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }

    /// Borrow of the canonical little-endian limbs.
    #[inline]
    pub fn as_limbs(&self) -> &[u32] {
        self.digits.as_slice()
    }

    /// Count of decimal digits ("0" counts one).
    pub fn digit_count(&self) -> usize {
        self.digits.digit_count()
    }

    pub(crate) fn from_digits(digits: DigitVec) -> Self {
        Self { digits }
    }

    /// Moves the value out, leaving `self` canonically zero.
    pub fn take(&mut self) -> Self {
        Self { digits: self.digits.take() }
    }

    /// `self - rhs`, or `None` when `rhs > self`.
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        if self < rhs {
            return None;
        }
        Some(Self::from_digits(kernels::sub(self.as_limbs(), rhs.as_limbs())))
    }

    /// `(self / divisor, self % divisor)` in one pass.
    ///
    /// # Panics
    /// Panics if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        check_operand_lengths(self, divisor);
        let (q, r) = big_divmod(self.as_limbs(), divisor.as_limbs());
        (Self::from_digits(q), Self::from_digits(r))
    }

    /// `div_rem` that returns `None` on a zero divisor.
    pub fn checked_div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        if divisor.is_zero() {
            return None;
        }
        Some(self.div_rem(divisor))
    }

    pub fn checked_div(&self, divisor: &Self) -> Option<Self> {
        self.checked_div_rem(divisor).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, divisor: &Self) -> Option<Self> {
        self.checked_div_rem(divisor).map(|(_, r)| r)
    }

    /// Value reduced modulo 2^64 (explicit wrapping narrowing).
    pub fn low_u64(&self) -> u64 {
        self.digits.low_u64()
    }

    /// Value reduced modulo 2^128 (explicit wrapping narrowing).
    pub fn low_u128(&self) -> u128 {
        self.digits.low_u128()
    }

    /// Appends the decimal form to a caller-owned buffer, so hot emission
    /// paths can reuse one allocation.
    pub fn write_decimal(&self, out: &mut String) {
        write_decimal(self.as_limbs(), out);
    }
}

fn check_operand_lengths(a: &DecUint, b: &DecUint) {
    #[cfg(feature = "validity-checks")]
    {
        assert!(
            a.digits.len() <= MAX_OPERAND_LIMBS && b.digits.len() <= MAX_OPERAND_LIMBS,
            "operand exceeds the supported length of {MAX_OPERAND_LIMBS} limbs"
        );
    }
    #[cfg(not(feature = "validity-checks"))]
    let _ = (a, b);
}

impl PartialOrd for DecUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DecUint {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self.as_limbs(), other.as_limbs())
    }
}

// Reference operators hold the implementations; owned variants forward.
impl Add for &DecUint {
    type Output = DecUint;
    fn add(self, rhs: Self) -> DecUint {
        DecUint::from_digits(kernels::add(self.as_limbs(), rhs.as_limbs()))
    }
}

impl Sub for &DecUint {
    type Output = DecUint;
    /// # Panics
    /// Panics when `rhs > self`.
    fn sub(self, rhs: Self) -> DecUint {
        DecUint::from_digits(kernels::sub(self.as_limbs(), rhs.as_limbs()))
    }
}

impl Mul for &DecUint {
    type Output = DecUint;
    fn mul(self, rhs: Self) -> DecUint {
        check_operand_lengths(self, rhs);
        DecUint::from_digits(big_mul(self.as_limbs(), rhs.as_limbs()))
    }
}

impl Div for &DecUint {
    type Output = DecUint;
    /// # Panics
    /// Panics on a zero divisor.
    fn div(self, rhs: Self) -> DecUint {
        self.div_rem(rhs).0
    }
}

impl Rem for &DecUint {
    type Output = DecUint;
    /// # Panics
    /// Panics on a zero divisor.
    fn rem(self, rhs: Self) -> DecUint {
        self.div_rem(rhs).1
    }
}

macro_rules! forward_owned_binop {
    ($($trait:ident :: $method:ident),*) => {$(
        impl $trait for DecUint {
            type Output = DecUint;
            fn $method(self, rhs: Self) -> DecUint {
                $trait::$method(&self, &rhs)
            }
        }
        impl $trait<&DecUint> for DecUint {
            type Output = DecUint;
            fn $method(self, rhs: &DecUint) -> DecUint {
                $trait::$method(&self, rhs)
            }
        }
        impl $trait<DecUint> for &DecUint {
            type Output = DecUint;
            fn $method(self, rhs: DecUint) -> DecUint {
                $trait::$method(self, &rhs)
            }
        }
    )*};
}

forward_owned_binop!(Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);

macro_rules! forward_assign_op {
    ($($trait:ident :: $method:ident => $binop:ident :: $binm:ident),*) => {$(
        impl $trait<&DecUint> for DecUint {
            fn $method(&mut self, rhs: &DecUint) {
                let lhs = self.take();
                *self = $binop::$binm(&lhs, rhs);
            }
        }
        impl $trait for DecUint {
            fn $method(&mut self, rhs: DecUint) {
                $trait::$method(self, &rhs);
            }
        }
    )*};
}

forward_assign_op!(
    AddAssign::add_assign => Add::add,
    SubAssign::sub_assign => Sub::sub,
    MulAssign::mul_assign => Mul::mul,
    DivAssign::div_assign => Div::div,
    RemAssign::rem_assign => Rem::rem
);

/// Increment sugar: `x += 1u32`.
impl AddAssign<u32> for DecUint {
    fn add_assign(&mut self, rhs: u32) {
        let rhs = DigitVec::from_u64(rhs as u64);
        self.digits = kernels::add(self.as_limbs(), rhs.as_slice());
    }
}

/// Decrement sugar: `x -= 1u32`.
impl SubAssign<u32> for DecUint {
    fn sub_assign(&mut self, rhs: u32) {
        let rhs = DigitVec::from_u64(rhs as u64);
        self.digits = kernels::sub(self.as_limbs(), rhs.as_slice());
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for DecUint {
            fn from(v: $t) -> Self {
                Self { digits: DigitVec::from_u128(v as u128) }
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_try_from_signed {
    ($($t:ty),*) => {$(
        impl TryFrom<$t> for DecUint {
            type Error = TryFromDecimalError;
            fn try_from(v: $t) -> Result<Self, Self::Error> {
                if v < 0 {
                    return Err(TryFromDecimalError::Negative);
                }
                Ok(Self::from(v as u128))
            }
        }
    )*};
}

impl_try_from_signed!(i8, i16, i32, i64, i128, isize);

impl TryFrom<f64> for DecUint {
    type Error = TryFromDecimalError;

    /// Floor of a finite nonnegative float, by mantissa/exponent scaling.
    fn try_from(v: f64) -> Result<Self, Self::Error> {
        if !v.is_finite() {
            return Err(TryFromDecimalError::NotFinite);
        }
        if v < 0.0 {
            return Err(TryFromDecimalError::Negative);
        }
        if v < 1.0 {
            return Ok(Self::zero());
        }
        let bits = v.to_bits();
        let exponent = ((bits >> 52) & 0x7ff) as i64 - 1075;
        let mantissa = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);
        // v >= 1.0 rules out subnormals, so exponent >= -52
        if exponent <= 0 {
            return Ok(Self::from(mantissa >> (-exponent) as u32));
        }

        // scale into limbs with power-of-two chunks below LIMB_BASE
        const CHUNK: u32 = 29;
        let mut digits = DigitVec::from_u64(mantissa);
        let mut remaining = exponent as u32;
        while remaining > 0 {
            let step = remaining.min(CHUNK);
            digits = kernels::scalar_mul(digits.as_slice(), 1u32 << step);
            remaining -= step;
        }
        Ok(Self { digits })
    }
}

macro_rules! impl_try_into_unsigned {
    ($($t:ty),*) => {$(
        impl TryFrom<&DecUint> for $t {
            type Error = TryFromDecimalError;
            fn try_from(v: &DecUint) -> Result<Self, Self::Error> {
                let wide = v.digits.to_u128().ok_or(TryFromDecimalError::Overflow)?;
                <$t>::try_from(wide).map_err(|_| TryFromDecimalError::Overflow)
            }
        }
    )*};
}

impl_try_into_unsigned!(u8, u16, u32, u64, u128, usize);

impl FromStr for DecUint {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self { digits: parse_decimal(s)? })
    }
}

impl fmt::Display for DecUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::with_capacity(self.digits.len() * LIMB_DIGITS + 1);
        write_decimal(self.as_limbs(), &mut buf);
        f.pad_integral(true, "", &buf)
    }
}
