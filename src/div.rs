//! Division via Newton-iteration reciprocals
//!
//! Above the schoolbook crossover, `a / b` is reduced to multiplication:
//! compute a fixed-point reciprocal `W ≈ B^(m+h) / b` (with `m = |b|` and
//! `h` the working scale in limbs), take `q ≈ ⌊a·W / B^(m+h)⌋`, then fix
//! the quotient up against the exact remainder.
//!
//! The reciprocal starts from an f64 seed built out of the divisor's top
//! three limbs (about fifteen valid decimal digits) and Newton steps
//! `W ← ⌊W·(2·B^(t+h) − b_t·W) / B^(t+2h−h')⌋` double the valid digits
//! until the scale reaches `|a| − |b| + 2` limbs. The divisor is truncated
//! to its top `t = h' + 2` limbs inside each step, which keeps every
//! iteration's products proportional to the precision it delivers; the
//! two guard limbs keep truncation error below the doubling target.
//!
//! The final correction is written as genuine loops, so the quotient is
//! exact even if the reciprocal were a few ulps off; with the bounds above
//! it takes at most a step or two in practice.

use crate::digits::DigitVec;
use crate::kernels::{self, compare, shift_limbs_left, shift_limbs_right};
use crate::mul::{big_mul, SCHOOLBOOK_THRESHOLD};
use log::{debug, trace};
use std::cmp::Ordering;

/// `(a / b, a % b)` with `0 <= r < b`, exact and canonical.
///
/// # Panics
/// Panics on an empty (zero) divisor.
pub fn big_divmod(a: &[u32], b: &[u32]) -> (DigitVec, DigitVec) {
    assert!(!b.is_empty(), "division by zero");
    if compare(a, b) == Ordering::Less {
        return (DigitVec::new(), DigitVec::from_slice(a));
    }
    if b.len() <= SCHOOLBOOK_THRESHOLD {
        trace!("divide {}/{} limbs via schoolbook", a.len(), b.len());
        return kernels::schoolbook_divmod(a, b);
    }

    let n = a.len();
    let m = b.len();
    let target = n - m + 2;
    trace!("divide {n}/{m} limbs via reciprocal, scale {target}");

    let w = reciprocal(b, target);

    // q0 = floor(a * W / B^(m + target))
    let aw = big_mul(a, w.as_slice());
    let mut q = shift_limbs_right(aw.as_slice(), m + target);

    // correct an overshoot first so the remainder stays unsigned
    let mut qb = big_mul(q.as_slice(), b);
    let mut steps = 0u32;
    while compare(qb.as_slice(), a) == Ordering::Greater {
        q = kernels::sub(q.as_slice(), &[1]);
        qb = kernels::sub(qb.as_slice(), b);
        steps += 1;
    }
    let mut r = kernels::sub(a, qb.as_slice());
    while compare(r.as_slice(), b) != Ordering::Less {
        q = kernels::add(q.as_slice(), &[1]);
        r = kernels::sub(r.as_slice(), b);
        steps += 1;
    }
    if steps > 2 {
        debug!("reciprocal divide needed {steps} correction steps");
    }
    (q, r)
}

/// Fixed-point reciprocal `W ≈ ⌊B^(m+target) / b⌋` at scale `target` limbs.
fn reciprocal(b: &[u32], target: usize) -> DigitVec {
    let m = b.len();
    debug_assert!(m >= 3);

    // f64 seed from the top three limbs: W_1 ≈ B^4 / (b / B^(m-3))
    let base = 1e9;
    let top = b[m - 1] as f64 * base * base + b[m - 2] as f64 * base + b[m - 3] as f64;
    let seed = (1e36 / top) as u128;
    let mut w = DigitVec::from_u128(seed);

    let mut h = 1usize;
    while h < target {
        let next = (2 * h).min(target);
        w = refine(b, &w, h, next);
        h = next;
    }
    w
}

/// One Newton step lifting `w` from scale `h` to scale `h2`.
fn refine(b: &[u32], w: &DigitVec, h: usize, h2: usize) -> DigitVec {
    let m = b.len();
    let t = (h2 + 2).min(m);
    let b_top = &b[m - t..];

    // E = 2*B^(t+h) - b_top * W, close to B^(t+h) when W is accurate
    let p = big_mul(b_top, w.as_slice());
    let two = shift_limbs_left(&[2], t + h);
    let e = kernels::sub(two.as_slice(), p.as_slice());

    let lifted = big_mul(w.as_slice(), e.as_slice());
    shift_limbs_right(lifted.as_slice(), t + 2 * h - h2)
}
