//! FFT multiplication: sub-base split, packed-real convolution, carry
//! propagation, repack
//!
//! Each base-10^9 limb is split into three base-1000 mini-limbs before the
//! transform. That keeps every convolution coefficient exact in an `f64`:
//! with transform length capped at `FFT_MAX_LEN` = 2^22 the largest
//! coefficient is below 2^22 · 999² < 2^42, far under the 2^52 mantissa
//! budget, so accumulated roundoff stays orders of magnitude below the 0.5
//! rounding margin.
//!
//! Both real operand sequences ride one forward transform: A sits in the
//! real lane and B in the imaginary lane of a single complex buffer, and
//! the two spectra are separated with the conjugate-symmetry identity
//! before the pointwise multiply. One convolution therefore costs one
//! forward and one inverse transform.

use super::transform::{forward, inverse};
use super::workspace::{with_workspace, ConvolutionWorkspace};
use crate::digits::{DigitVec, LIMB_BASE};
use num_complex::Complex64;

/// Hard cap on the transform length the engine supports.
pub const FFT_MAX_LEN: usize = 1 << 22;

/// Sub-base used inside the transform.
pub const MINI_BASE: u64 = 1000;

/// Mini-limbs per base-10^9 limb.
pub const MINI_PER_LIMB: usize = 3;

/// Splits base-10^9 limbs into little-endian base-1000 mini-limbs.
fn split_mini(limbs: &[u32], out: &mut Vec<u32>) {
    out.clear();
    out.reserve(limbs.len() * MINI_PER_LIMB);
    for &limb in limbs {
        out.push(limb % 1000);
        out.push(limb / 1000 % 1000);
        out.push(limb / 1_000_000);
    }
    while out.last() == Some(&0) {
        out.pop();
    }
}

/// `a * b` by cyclic convolution. Operands must be canonical and nonempty.
///
/// # Panics
/// Panics if the required transform length exceeds [`FFT_MAX_LEN`]; the
/// façade's operand cap keeps callers away from that.
pub fn fft_mul(a: &[u32], b: &[u32]) -> DigitVec {
    debug_assert!(!a.is_empty() && !b.is_empty());

    with_workspace(|ws| {
        let ConvolutionWorkspace {
            twiddles,
            packed,
            product,
            mini_a,
            mini_b,
        } = ws;

        split_mini(a, mini_a);
        split_mini(b, mini_b);
        let conv_len = mini_a.len() + mini_b.len() - 1;
        let n = (conv_len + 1).next_power_of_two();
        assert!(
            n <= FFT_MAX_LEN,
            "convolution length {n} exceeds the supported transform cap"
        );

        let tw = ConvolutionWorkspace::twiddles_for(twiddles, n);

        // pack A into the real lane and B into the imaginary lane
        packed.clear();
        packed.resize(n, Complex64::new(0.0, 0.0));
        for (slot, &d) in packed.iter_mut().zip(mini_a.iter()) {
            slot.re = d as f64;
        }
        for (slot, &d) in packed.iter_mut().zip(mini_b.iter()) {
            slot.im = d as f64;
        }

        forward(packed, tw);

        // separate the two spectra and multiply pointwise:
        //   A[k] = (X[k] + conj(X[n-k])) / 2
        //   B[k] = (X[k] - conj(X[n-k])) / 2i
        product.clear();
        product.resize(n, Complex64::new(0.0, 0.0));
        let mask = n - 1;
        for k in 0..n {
            let x = packed[k];
            let y = packed[(n - k) & mask].conj();
            let a_spec = (x + y) * 0.5;
            let b_spec = (x - y) * Complex64::new(0.0, -0.5);
            product[k] = a_spec * b_spec;
        }

        inverse(product, tw);

        // round, propagate carries in the sub-base, repack into limbs
        let scale = n as f64;
        let mut mini_out = Vec::with_capacity(conv_len + 2);
        let mut carry = 0u64;
        for c in product[..conv_len].iter() {
            let v = (c.re / scale).round().max(0.0) as u64 + carry;
            mini_out.push((v % MINI_BASE) as u32);
            carry = v / MINI_BASE;
        }
        while carry > 0 {
            mini_out.push((carry % MINI_BASE) as u32);
            carry /= MINI_BASE;
        }

        let mut limbs = Vec::with_capacity(mini_out.len().div_ceil(MINI_PER_LIMB));
        for chunk in mini_out.chunks(MINI_PER_LIMB) {
            let mut limb = 0u64;
            for (i, &d) in chunk.iter().enumerate() {
                limb += d as u64 * MINI_BASE.pow(i as u32);
            }
            debug_assert!(limb < LIMB_BASE);
            limbs.push(limb as u32);
        }
        DigitVec::from_vec(limbs)
    })
}
