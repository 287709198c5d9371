//! Scalar limb kernels: the baseline reference implementations
//!
//! Everything here walks limbs one at a time with explicit carry and borrow
//! chains. The SIMD tier (in the `simd` module) must match these functions
//! bit-for-bit; randomized equivalence tests enforce that.
//!
//! Inputs are canonical limb slices (no trailing zeros, every limb below
//! `LIMB_BASE`); outputs are renormalized before return.

use crate::digits::{DigitVec, LIMB_BASE};
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Lexicographic comparison: longer is larger, ties scan from the most
/// significant limb down.
pub fn compare(a: &[u32], b: &[u32]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {
            for i in (0..a.len()).rev() {
                match a[i].cmp(&b[i]) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }
            Ordering::Equal
        }
        other => other,
    }
}

/// `a + b` with a single carry chain.
pub fn add(a: &[u32], b: &[u32]) -> DigitVec {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out: SmallVec<[u32; 4]> = SmallVec::with_capacity(long.len() + 1);
    let mut carry = 0u64;
    for i in 0..long.len() {
        let mut cur = long[i] as u64 + carry;
        if i < short.len() {
            cur += short[i] as u64;
        }
        if cur >= LIMB_BASE {
            out.push((cur - LIMB_BASE) as u32);
            carry = 1;
        } else {
            out.push(cur as u32);
            carry = 0;
        }
    }
    if carry != 0 {
        out.push(1);
    }
    DigitVec::from_raw(out)
}

/// `a - b` for `a >= b`.
///
/// # Panics
/// Panics if `a < b`; the caller owns that precondition.
pub fn sub(a: &[u32], b: &[u32]) -> DigitVec {
    let mut out: SmallVec<[u32; 4]> = SmallVec::with_capacity(a.len());
    let mut borrow = 0i64;
    for i in 0..a.len() {
        let mut cur = a[i] as i64 - borrow;
        if i < b.len() {
            cur -= b[i] as i64;
        }
        if cur < 0 {
            cur += LIMB_BASE as i64;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(cur as u32);
    }
    assert!(
        borrow == 0 && a.len() >= b.len(),
        "subtraction underflow: minuend smaller than subtrahend"
    );
    DigitVec::from_raw(out)
}

/// Multiplies by `LIMB_BASE^k` by prepending `k` zero limbs.
pub fn shift_limbs_left(a: &[u32], k: usize) -> DigitVec {
    if a.is_empty() {
        return DigitVec::new();
    }
    let mut out: SmallVec<[u32; 4]> = SmallVec::with_capacity(a.len() + k);
    out.resize(k, 0);
    out.extend_from_slice(a);
    DigitVec::from_raw(out)
}

/// Floor-divides by `LIMB_BASE^k` by dropping the `k` least significant
/// limbs.
pub fn shift_limbs_right(a: &[u32], k: usize) -> DigitVec {
    if k >= a.len() {
        return DigitVec::new();
    }
    DigitVec::from_slice(&a[k..])
}

/// `a * s` for a single limb factor `s < LIMB_BASE`.
pub fn scalar_mul(a: &[u32], s: u32) -> DigitVec {
    debug_assert!((s as u64) < LIMB_BASE);
    if s == 0 || a.is_empty() {
        return DigitVec::new();
    }
    let mut out: SmallVec<[u32; 4]> = SmallVec::with_capacity(a.len() + 1);
    let mut carry = 0u64;
    for &limb in a {
        let cur = limb as u64 * s as u64 + carry;
        out.push((cur % LIMB_BASE) as u32);
        carry = cur / LIMB_BASE;
    }
    if carry != 0 {
        out.push(carry as u32);
    }
    DigitVec::from_raw(out)
}

/// `(a / d, a % d)` for a single limb divisor `0 < d < LIMB_BASE`.
pub fn scalar_divmod(a: &[u32], d: u32) -> (DigitVec, u32) {
    debug_assert!(d != 0 && (d as u64) < LIMB_BASE);
    let mut q = vec![0u32; a.len()];
    let mut rem = 0u64;
    for i in (0..a.len()).rev() {
        let cur = rem * LIMB_BASE + a[i] as u64;
        q[i] = (cur / d as u64) as u32;
        rem = cur % d as u64;
    }
    (DigitVec::from_vec(q), rem as u32)
}

/// Classical O(|a|·|b|) product, row by row with a u64 working buffer.
pub fn schoolbook_mul(a: &[u32], b: &[u32]) -> DigitVec {
    if a.is_empty() || b.is_empty() {
        return DigitVec::new();
    }
    let mut work = vec![0u64; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        let ai = ai as u64;
        let mut carry = 0u64;
        for (j, &bj) in b.iter().enumerate() {
            let cur = work[i + j] + ai * bj as u64 + carry;
            work[i + j] = cur % LIMB_BASE;
            carry = cur / LIMB_BASE;
        }
        // stays below 2*LIMB_BASE; folded into canonical limbs at the end
        work[i + b.len()] += carry;
    }
    let mut out = Vec::with_capacity(work.len());
    let mut carry = 0u64;
    for cell in work {
        let cur = cell + carry;
        out.push((cur % LIMB_BASE) as u32);
        carry = cur / LIMB_BASE;
    }
    debug_assert_eq!(carry, 0);
    DigitVec::from_vec(out)
}

/// Classical long division (Knuth's algorithm D in base 10^9) with a
/// normalized divisor. Returns `(quotient, remainder)`.
///
/// # Panics
/// Panics on an empty divisor.
pub fn schoolbook_divmod(a: &[u32], b: &[u32]) -> (DigitVec, DigitVec) {
    assert!(!b.is_empty(), "division by zero");
    if compare(a, b) == Ordering::Less {
        return (DigitVec::new(), DigitVec::from_slice(a));
    }
    if b.len() == 1 {
        let (q, r) = scalar_divmod(a, b[0]);
        return (q, DigitVec::from_u64(r as u64));
    }

    let n = a.len();
    let m = b.len();

    // D1: scale both operands so the divisor's top limb is at least B/2.
    let scale = (LIMB_BASE / (b[m - 1] as u64 + 1)) as u32;
    let mut u = vec![0u32; n + 1];
    let mut carry = 0u64;
    for i in 0..n {
        let cur = a[i] as u64 * scale as u64 + carry;
        u[i] = (cur % LIMB_BASE) as u32;
        carry = cur / LIMB_BASE;
    }
    u[n] = carry as u32;

    let mut v = vec![0u32; m];
    carry = 0;
    for i in 0..m {
        let cur = b[i] as u64 * scale as u64 + carry;
        v[i] = (cur % LIMB_BASE) as u32;
        carry = cur / LIMB_BASE;
    }
    debug_assert_eq!(carry, 0);

    let vt = v[m - 1] as u64;
    let vt2 = v[m - 2] as u64;
    let mut q = vec![0u32; n - m + 1];

    for j in (0..=n - m).rev() {
        // D3: estimate the quotient limb from the top two dividend limbs.
        let (mut qhat, mut rhat) = if u[j + m] as u64 == vt {
            (LIMB_BASE - 1, u[j + m - 1] as u64 + vt)
        } else {
            let num = u[j + m] as u64 * LIMB_BASE + u[j + m - 1] as u64;
            (num / vt, num % vt)
        };
        while rhat < LIMB_BASE && qhat * vt2 > rhat * LIMB_BASE + u[j + m - 2] as u64 {
            qhat -= 1;
            rhat += vt;
        }

        // D4: multiply and subtract, tracking a signed top deficit.
        let mut borrow = 0i64;
        let mut mul_carry = 0u64;
        for i in 0..m {
            let p = qhat * v[i] as u64 + mul_carry;
            mul_carry = p / LIMB_BASE;
            let t = u[j + i] as i64 - (p % LIMB_BASE) as i64 - borrow;
            if t < 0 {
                u[j + i] = (t + LIMB_BASE as i64) as u32;
                borrow = 1;
            } else {
                u[j + i] = t as u32;
                borrow = 0;
            }
        }
        let top = u[j + m] as i64 - mul_carry as i64 - borrow;

        if top < 0 {
            // D6: the estimate was one too large; add the divisor back.
            qhat -= 1;
            let mut add_carry = 0u64;
            for i in 0..m {
                let s = u[j + i] as u64 + v[i] as u64 + add_carry;
                u[j + i] = (s % LIMB_BASE) as u32;
                add_carry = s / LIMB_BASE;
            }
            u[j + m] = (top + add_carry as i64) as u32;
        } else {
            u[j + m] = top as u32;
        }
        q[j] = qhat as u32;
    }

    // D8: the remainder is the low limbs, undone by the scale factor.
    let (r, r_rem) = scalar_divmod(&u[..m], scale);
    debug_assert_eq!(r_rem, 0);
    (DigitVec::from_vec(q), r)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limbs(v: u128) -> DigitVec {
        DigitVec::from_u128(v)
    }

    #[test]
    fn compare_orders_by_length_then_limbs() {
        assert_eq!(compare(&[], &[]), Ordering::Equal);
        assert_eq!(compare(&[1], &[]), Ordering::Greater);
        assert_eq!(compare(&[5, 1], &[9]), Ordering::Greater);
        assert_eq!(compare(&[5, 1], &[6, 1]), Ordering::Less);
        assert_eq!(compare(&[5, 1], &[5, 1]), Ordering::Equal);
    }

    #[test]
    fn add_carries_across_limbs() {
        // 999999999999999999 + 1 = 10^18
        let a = limbs(999_999_999_999_999_999);
        let b = limbs(1);
        let sum = add(a.as_slice(), b.as_slice());
        assert_eq!(sum, limbs(1_000_000_000_000_000_000));
    }

    #[test]
    fn add_zero_is_identity() {
        let a = limbs(123456789);
        assert_eq!(add(a.as_slice(), &[]), a);
        assert_eq!(add(&[], a.as_slice()), a);
    }

    #[test]
    fn sub_borrows_across_limbs() {
        // 10^18 - 1
        let a = limbs(1_000_000_000_000_000_000);
        let b = limbs(1);
        assert_eq!(sub(a.as_slice(), b.as_slice()), limbs(999_999_999_999_999_999));
    }

    #[test]
    fn sub_to_zero_is_canonical() {
        let a = limbs(123456789012345);
        let d = sub(a.as_slice(), a.as_slice());
        assert!(d.is_zero());
    }

    #[test]
    #[should_panic(expected = "subtraction underflow")]
    fn sub_underflow_panics() {
        let _ = sub(&[1], &[2]);
    }

    #[test]
    fn shift_left_multiplies_by_base_power() {
        let a = limbs(7);
        assert_eq!(shift_limbs_left(a.as_slice(), 2).as_slice(), &[0, 0, 7]);
        assert!(shift_limbs_left(&[], 5).is_zero());
    }

    #[test]
    fn shift_right_floor_divides() {
        // 7*10^18 + 5 has limbs [5, 0, 7]; dropping one limb floors to 7*10^9
        let a = limbs(7_000_000_000_000_000_005);
        assert_eq!(shift_limbs_right(a.as_slice(), 1), limbs(7_000_000_000));
        assert!(shift_limbs_right(a.as_slice(), 3).is_zero());
        assert!(shift_limbs_right(&[], 1).is_zero());
    }

    #[test]
    fn scalar_mul_and_divmod_invert() {
        let a = limbs(987654321987654321);
        let p = scalar_mul(a.as_slice(), 999_999_937);
        let (q, r) = scalar_divmod(p.as_slice(), 999_999_937);
        assert_eq!(q, a);
        assert_eq!(r, 0);
    }

    #[test]
    fn schoolbook_mul_known_product() {
        let a = limbs(123_456_789);
        let b = limbs(987_654_321);
        let p = schoolbook_mul(a.as_slice(), b.as_slice());
        assert_eq!(p, limbs(121_932_631_112_635_269));
    }

    #[test]
    fn schoolbook_mul_by_zero_annihilates() {
        let a = limbs(123_456_789_123_456_789);
        assert!(schoolbook_mul(a.as_slice(), &[]).is_zero());
    }

    #[test]
    fn schoolbook_divmod_small_cases() {
        let a = limbs(1_000_000_000_000_000_000);
        let b = limbs(999_999_999_999_999_999);
        let (q, r) = schoolbook_divmod(a.as_slice(), b.as_slice());
        assert_eq!(q, limbs(1));
        assert_eq!(r, limbs(1));

        let (q, r) = schoolbook_divmod(b.as_slice(), a.as_slice());
        assert!(q.is_zero());
        assert_eq!(r, b);
    }

    #[test]
    fn schoolbook_divmod_reconstructs_dividend() {
        // multi-limb divisor exercising the qhat correction paths
        let a = limbs(340_282_366_920_938_463_463_374_607_431_768_211_455); // 2^128 - 1
        let b = limbs(18_446_744_073_709_551_557); // prime near 2^64
        let (q, r) = schoolbook_divmod(a.as_slice(), b.as_slice());
        let back = add(
            schoolbook_mul(q.as_slice(), b.as_slice()).as_slice(),
            r.as_slice(),
        );
        assert_eq!(back, a);
        assert_eq!(compare(r.as_slice(), b.as_slice()), Ordering::Less);
    }
}
