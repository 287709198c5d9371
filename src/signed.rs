//! Signed integers layered over the unsigned core
//!
//! A `DecInt` is a sign and a magnitude. All arithmetic forwards to the
//! unsigned façade and fixes signs up afterwards, with C-style truncated
//! division: the quotient truncates toward zero and the remainder takes
//! the dividend's sign. Zero is always positive; no negative zero is ever
//! observable.

use crate::error::{ParseDecimalError, TryFromDecimalError};
use crate::unsigned::DecUint;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// Signed arbitrary-precision decimal integer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DecInt {
    sign: Sign,
    magnitude: DecUint,
}

impl Default for DecInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl DecInt {
    pub fn zero() -> Self {
        Self { sign: Sign::Positive, magnitude: DecUint::zero() }
    }

    /// Builds from parts, normalizing the sign of zero.
    pub fn from_parts(sign: Sign, magnitude: DecUint) -> Self {
        if magnitude.is_zero() {
            Self::zero()
        } else {
            Self { sign, magnitude }
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn magnitude(&self) -> &DecUint {
        &self.magnitude
    }

    /// Consumes self into its magnitude.
    pub fn into_magnitude(self) -> DecUint {
        self.magnitude
    }

    /// `(self / divisor, self % divisor)` with truncation toward zero;
    /// the remainder carries the dividend's sign.
    ///
    /// # Panics
    /// Panics if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        let (q_mag, r_mag) = self.magnitude.div_rem(&divisor.magnitude);
        let q_sign = if self.sign == divisor.sign { Sign::Positive } else { Sign::Negative };
        (
            Self::from_parts(q_sign, q_mag),
            Self::from_parts(self.sign, r_mag),
        )
    }

    pub fn checked_div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        if divisor.is_zero() {
            return None;
        }
        Some(self.div_rem(divisor))
    }
}

impl PartialOrd for DecInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DecInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.magnitude.cmp(&other.magnitude),
            (Sign::Negative, Sign::Negative) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl Neg for DecInt {
    type Output = DecInt;
    fn neg(self) -> DecInt {
        DecInt::from_parts(self.sign.flip(), self.magnitude)
    }
}

impl Neg for &DecInt {
    type Output = DecInt;
    fn neg(self) -> DecInt {
        DecInt::from_parts(self.sign.flip(), self.magnitude.clone())
    }
}

impl Add for &DecInt {
    type Output = DecInt;
    fn add(self, rhs: Self) -> DecInt {
        if self.sign == rhs.sign {
            return DecInt::from_parts(self.sign, &self.magnitude + &rhs.magnitude);
        }
        match self.magnitude.cmp(&rhs.magnitude) {
            Ordering::Equal => DecInt::zero(),
            Ordering::Greater => {
                DecInt::from_parts(self.sign, &self.magnitude - &rhs.magnitude)
            }
            Ordering::Less => DecInt::from_parts(rhs.sign, &rhs.magnitude - &self.magnitude),
        }
    }
}

impl Sub for &DecInt {
    type Output = DecInt;
    fn sub(self, rhs: Self) -> DecInt {
        self + &(-rhs)
    }
}

impl Mul for &DecInt {
    type Output = DecInt;
    fn mul(self, rhs: Self) -> DecInt {
        let sign = if self.sign == rhs.sign { Sign::Positive } else { Sign::Negative };
        DecInt::from_parts(sign, &self.magnitude * &rhs.magnitude)
    }
}

impl Div for &DecInt {
    type Output = DecInt;
    /// # Panics
    /// Panics on a zero divisor.
    fn div(self, rhs: Self) -> DecInt {
        self.div_rem(rhs).0
    }
}

impl Rem for &DecInt {
    type Output = DecInt;
    /// # Panics
    /// Panics on a zero divisor.
    fn rem(self, rhs: Self) -> DecInt {
        self.div_rem(rhs).1
    }
}

macro_rules! forward_owned_binop {
    ($($trait:ident :: $method:ident),*) => {$(
        impl $trait for DecInt {
            type Output = DecInt;
            fn $method(self, rhs: Self) -> DecInt {
                $trait::$method(&self, &rhs)
            }
        }
        impl $trait<&DecInt> for DecInt {
            type Output = DecInt;
            fn $method(self, rhs: &DecInt) -> DecInt {
                $trait::$method(&self, rhs)
            }
        }
        impl $trait<DecInt> for &DecInt {
            type Output = DecInt;
            fn $method(self, rhs: DecInt) -> DecInt {
                $trait::$method(self, &rhs)
            }
        }
    )*};
}

forward_owned_binop!(Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);

macro_rules! forward_assign_op {
    ($($trait:ident :: $method:ident => $binop:ident :: $binm:ident),*) => {$(
        impl $trait<&DecInt> for DecInt {
            fn $method(&mut self, rhs: &DecInt) {
                let lhs = std::mem::take(self);
                *self = $binop::$binm(&lhs, rhs);
            }
        }
        impl $trait for DecInt {
            fn $method(&mut self, rhs: DecInt) {
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

impl From<DecUint> for DecInt {
    fn from(magnitude: DecUint) -> Self {
        Self::from_parts(Sign::Positive, magnitude)
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for DecInt {
            fn from(v: $t) -> Self {
                Self::from_parts(Sign::Positive, DecUint::from(v))
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for DecInt {
            fn from(v: $t) -> Self {
                let sign = if v < 0 { Sign::Negative } else { Sign::Positive };
                Self::from_parts(sign, DecUint::from(v.unsigned_abs() as u128))
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl TryFrom<f64> for DecInt {
    type Error = TryFromDecimalError;

    /// Truncation toward zero of a finite float.
    fn try_from(v: f64) -> Result<Self, Self::Error> {
        if !v.is_finite() {
            return Err(TryFromDecimalError::NotFinite);
        }
        let sign = if v < 0.0 { Sign::Negative } else { Sign::Positive };
        let magnitude = DecUint::try_from(v.abs())?;
        Ok(Self::from_parts(sign, magnitude))
    }
}

impl FromStr for DecInt {
    type Err = ParseDecimalError;

    /// Accepts an optional leading '+' or '-' before the digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, rest, offset) = match s.as_bytes().first() {
            Some(b'-') => (Sign::Negative, &s[1..], 1),
            Some(b'+') => (Sign::Positive, &s[1..], 1),
            _ => (Sign::Positive, s, 0),
        };
        if offset == 1 && rest.is_empty() {
            return Err(ParseDecimalError::MissingDigits);
        }
        let magnitude: DecUint = rest.parse().map_err(|e| match e {
            ParseDecimalError::InvalidDigit { position, byte } => {
                ParseDecimalError::InvalidDigit { position: position + offset, byte }
            }
            other => other,
        })?;
        Ok(Self::from_parts(sign, magnitude))
    }
}

impl fmt::Display for DecInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}
