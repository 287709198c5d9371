//! Iterative radix-2 complex FFT
//!
//! Plain Cooley–Tukey over `Complex64`: bit-reversal permutation up front,
//! then in-place butterflies walking stage sizes 2, 4, …, n. A single
//! twiddle table of `n/2` roots serves every stage through stride indexing
//! (`w_len^j = w_n^(j·n/len)`). The inverse transform conjugates the
//! twiddles and leaves the `1/n` scale to the caller, which folds it into
//! coefficient rounding.

use num_complex::Complex64;
use std::f64::consts::PI;

/// First `n/2` powers of the principal n-th root of unity `e^(-2πi/n)`.
pub fn twiddle_table(n: usize) -> Box<[Complex64]> {
    debug_assert!(n.is_power_of_two());
    let step = -2.0 * PI / n as f64;
    (0..n / 2)
        .map(|j| {
            let angle = step * j as f64;
            Complex64::new(angle.cos(), angle.sin())
        })
        .collect()
}

/// Reorders `buf` into bit-reversed index order.
pub fn bit_reverse_permute(buf: &mut [Complex64]) {
    let n = buf.len();
    let mut j = 0usize;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j |= bit;
        if i < j {
            buf.swap(i, j);
        }
    }
}

/// In-place forward transform. `twiddles` must come from
/// [`twiddle_table`] for `buf.len()`.
pub fn forward(buf: &mut [Complex64], twiddles: &[Complex64]) {
    let n = buf.len();
    debug_assert!(n.is_power_of_two());
    debug_assert_eq!(twiddles.len(), n / 2);

    bit_reverse_permute(buf);

    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let stride = n / len;
        for block in (0..n).step_by(len) {
            for j in 0..half {
                let w = twiddles[j * stride];
                let u = buf[block + j];
                let t = buf[block + j + half] * w;
                buf[block + j] = u + t;
                buf[block + j + half] = u - t;
            }
        }
        len <<= 1;
    }
}

/// In-place inverse transform, unscaled: the caller divides by `n`.
pub fn inverse(buf: &mut [Complex64], twiddles: &[Complex64]) {
    let n = buf.len();
    debug_assert!(n.is_power_of_two());
    debug_assert_eq!(twiddles.len(), n / 2);

    bit_reverse_permute(buf);

    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let stride = n / len;
        for block in (0..n).step_by(len) {
            for j in 0..half {
                let w = twiddles[j * stride].conj();
                let u = buf[block + j];
                let t = buf[block + j + half] * w;
                buf[block + j] = u + t;
                buf[block + j + half] = u - t;
            }
        }
        len <<= 1;
    }
}
