//! Decimal text conversion
//!
//! Parsing validates the whole string, strips leading zeros, then builds
//! the limb vector by balanced halving: the split always lands on a
//! multiple-of-nine digit boundary, so combining the halves is a limb
//! shift plus an add (`10^(9k)` is exactly `LIMB_BASE^k`), never a general
//! multiplication. Runs of eighteen digits or fewer parse directly through
//! a `u64`.
//!
//! Emission is the mirror image: the top limb prints unpadded, every
//! interior limb prints zero-padded to width nine. `write_decimal` appends
//! to a caller-owned buffer so hot paths can reuse one allocation.

use crate::digits::{DigitVec, LIMB_DIGITS};
use crate::error::ParseDecimalError;
use crate::kernels::{add, shift_limbs_left};
use std::fmt::Write;

/// Digit count at or below which a run parses directly into limbs.
const DIRECT_PARSE_DIGITS: usize = 18;

/// Parses an unsigned decimal string. Leading zeros are accepted and
/// canonicalized away; anything but ASCII digits is rejected.
pub fn parse_decimal(s: &str) -> Result<DigitVec, ParseDecimalError> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return Err(ParseDecimalError::Empty);
    }
    for (position, &byte) in bytes.iter().enumerate() {
        if !byte.is_ascii_digit() {
            return Err(ParseDecimalError::InvalidDigit { position, byte });
        }
    }
    let first_nonzero = bytes.iter().position(|&b| b != b'0');
    match first_nonzero {
        None => Ok(DigitVec::new()),
        Some(start) => Ok(parse_digit_run(&bytes[start..])),
    }
}

/// Parses a validated run of ASCII digits by balanced halving.
fn parse_digit_run(digits: &[u8]) -> DigitVec {
    if digits.len() <= DIRECT_PARSE_DIGITS {
        let mut v = 0u64;
        for &d in digits {
            v = v * 10 + (d - b'0') as u64;
        }
        return DigitVec::from_u64(v);
    }
    // split near the middle, on a limb boundary
    let low_limbs = (digits.len() / 2 / LIMB_DIGITS).max(1);
    let (high, low) = digits.split_at(digits.len() - low_limbs * LIMB_DIGITS);
    let high = parse_digit_run(high);
    let low = parse_digit_run(low);
    add(
        shift_limbs_left(high.as_slice(), low_limbs).as_slice(),
        low.as_slice(),
    )
}

/// Appends the canonical decimal form of `limbs` to `out`.
pub fn write_decimal(limbs: &[u32], out: &mut String) {
    match limbs.split_last() {
        None => out.push('0'),
        Some((&top, rest)) => {
            let _ = write!(out, "{top}");
            for &limb in rest.iter().rev() {
                let _ = write!(out, "{limb:09}");
            }
        }
    }
}

/// Canonical decimal form of `limbs` as an owned string.
pub fn to_decimal(limbs: &[u32]) -> String {
    let mut out = String::with_capacity(limbs.len() * LIMB_DIGITS + 1);
    write_decimal(limbs, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(s: &str) -> String {
        to_decimal(parse_decimal(s).unwrap().as_slice())
    }

    #[test]
    fn parses_zero_in_all_spellings() {
        for s in ["0", "00", "0000000000000000000000000000"] {
            assert!(parse_decimal(s).unwrap().is_zero(), "{s}");
        }
    }

    #[test]
    fn strips_leading_zeros() {
        assert_eq!(round_trip("00007"), "7");
        assert_eq!(round_trip("007000000000"), "7000000000");
    }

    #[test]
    fn direct_and_split_paths_meet_at_the_boundary() {
        // 18 digits: direct; 19 digits: one split
        let eighteen = "123456789012345678";
        let nineteen = "1234567890123456789";
        assert_eq!(round_trip(eighteen), eighteen);
        assert_eq!(round_trip(nineteen), nineteen);
    }

    #[test]
    fn long_values_round_trip() {
        let s = "10000000000000000000000000000000000000000";
        assert_eq!(round_trip(s), s);

        let mut digits = String::from("9");
        for i in 0..400 {
            digits.push(char::from(b'0' + ((i * 7 + 3) % 10) as u8));
        }
        assert_eq!(round_trip(&digits), digits);
    }

    #[test]
    fn limb_boundaries_pad_interior_zeros() {
        // 5*10^18 + 1 holds a full limb of zeros between two nonzero limbs
        let v = parse_decimal("5000000000000000001").unwrap();
        assert_eq!(v.as_slice(), &[1, 0, 5]);
        assert_eq!(to_decimal(v.as_slice()), "5000000000000000001");
    }

    #[test]
    fn rejects_non_digits() {
        assert_eq!(parse_decimal(""), Err(ParseDecimalError::Empty));
        assert_eq!(
            parse_decimal("12a4"),
            Err(ParseDecimalError::InvalidDigit { position: 2, byte: b'a' })
        );
        assert_eq!(
            parse_decimal("-5"),
            Err(ParseDecimalError::InvalidDigit { position: 0, byte: b'-' })
        );
        assert_eq!(
            parse_decimal(" 5"),
            Err(ParseDecimalError::InvalidDigit { position: 0, byte: b' ' })
        );
    }

    #[test]
    fn emits_zero_for_empty_limbs() {
        assert_eq!(to_decimal(&[]), "0");
    }

    #[test]
    fn write_decimal_appends() {
        let mut buf = String::from("x=");
        write_decimal(&[42], &mut buf);
        assert_eq!(buf, "x=42");
    }
}
