//! Limb arithmetic kernels
//!
//! The `scalar` module holds the reference implementations; `simd` layers
//! runtime-detected AVX2/SSE2 variants of the carry-friendly passes on top.
//! The dispatchers here pick the widest available tier once per process.

pub mod scalar;
pub mod simd;

pub use scalar::{
    compare, scalar_divmod, scalar_mul, schoolbook_divmod, schoolbook_mul,
    shift_limbs_left, shift_limbs_right,
};
pub use simd::{active_level, detect_simd_support, SimdLevel};

use crate::digits::DigitVec;

/// `a + b`, widest available tier.
#[inline]
pub fn add(a: &[u32], b: &[u32]) -> DigitVec {
    simd::add_limbs(a, b, simd::active_level())
}

/// `a - b` for `a >= b`, widest available tier.
///
/// # Panics
/// Panics if `a < b`.
#[inline]
pub fn sub(a: &[u32], b: &[u32]) -> DigitVec {
    simd::sub_limbs(a, b, simd::active_level())
}
