//! SIMD-accelerated add/sub kernels
//!
//! Limb sums fit a 32-bit lane: two limbs below 10^9 add to less than 2^31,
//! so the vector pass computes raw lane sums with packed 32-bit adds and a
//! scalar pass then folds the carries. The output is bit-for-bit identical
//! to the scalar reference in the `scalar` module; randomized equivalence
//! tests enforce that.
//!
//! Tier selection is runtime: AVX2 when available, then SSE2, then the
//! scalar fallback. The detected level is cached process-wide.

use crate::digits::{DigitVec, LIMB_BASE};
use super::scalar;
use std::sync::OnceLock;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Runtime detection of CPU SIMD features
pub fn detect_simd_support() -> SimdLevel {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            return SimdLevel::Avx2;
        }
        if is_x86_feature_detected!("sse2") {
            return SimdLevel::Sse2;
        }
    }
    SimdLevel::None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimdLevel {
    None,
    Sse2,
    Avx2,
}

/// Detected level, probed once per process.
pub fn active_level() -> SimdLevel {
    static LEVEL: OnceLock<SimdLevel> = OnceLock::new();
    *LEVEL.get_or_init(detect_simd_support)
}

/// Lane-wise `out[i] = a[i] + b[i]` over the common prefix, 8 lanes per
/// iteration. Carries are not propagated here.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn lane_add_avx2(a: &[u32], b: &[u32], out: &mut [u32]) {
    let n = b.len();
    let mut i = 0;
    while i + 8 <= n {
        let va = _mm256_loadu_si256(a.as_ptr().add(i) as *const __m256i);
        let vb = _mm256_loadu_si256(b.as_ptr().add(i) as *const __m256i);
        let vs = _mm256_add_epi32(va, vb);
        _mm256_storeu_si256(out.as_mut_ptr().add(i) as *mut __m256i, vs);
        i += 8;
    }
    while i < n {
        *out.get_unchecked_mut(i) = a.get_unchecked(i) + b.get_unchecked(i);
        i += 1;
    }
}

/// 4-lane SSE2 variant of [`lane_add_avx2`].
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse2")]
unsafe fn lane_add_sse2(a: &[u32], b: &[u32], out: &mut [u32]) {
    let n = b.len();
    let mut i = 0;
    while i + 4 <= n {
        let va = _mm_loadu_si128(a.as_ptr().add(i) as *const __m128i);
        let vb = _mm_loadu_si128(b.as_ptr().add(i) as *const __m128i);
        let vs = _mm_add_epi32(va, vb);
        _mm_storeu_si128(out.as_mut_ptr().add(i) as *mut __m128i, vs);
        i += 4;
    }
    while i < n {
        *out.get_unchecked_mut(i) = a.get_unchecked(i) + b.get_unchecked(i);
        i += 1;
    }
}

/// Lane-wise `out[i] = a[i] + LIMB_BASE - b[i]` over the common prefix.
/// The rebias keeps every lane nonnegative so the borrow pass stays scalar
/// and branch-cheap.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn lane_sub_avx2(a: &[u32], b: &[u32], out: &mut [u32]) {
    let n = b.len();
    let base = _mm256_set1_epi32(LIMB_BASE as i32);
    let mut i = 0;
    while i + 8 <= n {
        let va = _mm256_loadu_si256(a.as_ptr().add(i) as *const __m256i);
        let vb = _mm256_loadu_si256(b.as_ptr().add(i) as *const __m256i);
        let vs = _mm256_sub_epi32(_mm256_add_epi32(va, base), vb);
        _mm256_storeu_si256(out.as_mut_ptr().add(i) as *mut __m256i, vs);
        i += 8;
    }
    while i < n {
        *out.get_unchecked_mut(i) =
            a.get_unchecked(i) + LIMB_BASE as u32 - b.get_unchecked(i);
        i += 1;
    }
}

/// 4-lane SSE2 variant of [`lane_sub_avx2`].
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse2")]
unsafe fn lane_sub_sse2(a: &[u32], b: &[u32], out: &mut [u32]) {
    let n = b.len();
    let base = _mm_set1_epi32(LIMB_BASE as i32);
    let mut i = 0;
    while i + 4 <= n {
        let va = _mm_loadu_si128(a.as_ptr().add(i) as *const __m128i);
        let vb = _mm_loadu_si128(b.as_ptr().add(i) as *const __m128i);
        let vs = _mm_sub_epi32(_mm_add_epi32(va, base), vb);
        _mm_storeu_si128(out.as_mut_ptr().add(i) as *mut __m128i, vs);
        i += 4;
    }
    while i < n {
        *out.get_unchecked_mut(i) =
            a.get_unchecked(i) + LIMB_BASE as u32 - b.get_unchecked(i);
        i += 1;
    }
}

/// `a + b` using the requested tier, scalar fallback otherwise.
pub fn add_limbs(a: &[u32], b: &[u32], level: SimdLevel) -> DigitVec {
    #[cfg(target_arch = "x86_64")]
    {
        let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
        if short.len() >= 16 && level != SimdLevel::None {
            let mut out = vec![0u32; long.len() + 1];
            match level {
                SimdLevel::Avx2 => unsafe { lane_add_avx2(long, short, &mut out) },
                SimdLevel::Sse2 => unsafe { lane_add_sse2(long, short, &mut out) },
                SimdLevel::None => unreachable!(),
            }
            out[short.len()..long.len()].copy_from_slice(&long[short.len()..]);

            // carry fixup; lane sums stay below 2*LIMB_BASE
            let mut carry = 0u32;
            for cell in out[..long.len()].iter_mut() {
                let v = *cell as u64 + carry as u64;
                if v >= LIMB_BASE {
                    *cell = (v - LIMB_BASE) as u32;
                    carry = 1;
                } else {
                    *cell = v as u32;
                    carry = 0;
                }
            }
            out[long.len()] = carry;
            return DigitVec::from_vec(out);
        }
    }
    let _ = level;
    scalar::add(a, b)
}

/// `a - b` for `a >= b` using the requested tier, scalar fallback otherwise.
///
/// # Panics
/// Panics if `a < b`, matching the scalar reference.
pub fn sub_limbs(a: &[u32], b: &[u32], level: SimdLevel) -> DigitVec {
    #[cfg(target_arch = "x86_64")]
    {
        if b.len() >= 16 && level != SimdLevel::None {
            assert!(
                a.len() >= b.len(),
                "subtraction underflow: minuend smaller than subtrahend"
            );
            let mut out = vec![0u32; a.len()];
            match level {
                SimdLevel::Avx2 => unsafe { lane_sub_avx2(a, b, &mut out) },
                SimdLevel::Sse2 => unsafe { lane_sub_sse2(a, b, &mut out) },
                SimdLevel::None => unreachable!(),
            }

            // borrow fixup over the rebased common prefix
            let mut borrow = 0u32;
            for cell in out[..b.len()].iter_mut() {
                let v = *cell - borrow;
                if v >= LIMB_BASE as u32 {
                    *cell = v - LIMB_BASE as u32;
                    borrow = 0;
                } else {
                    *cell = v;
                    borrow = 1;
                }
            }
            // plain borrow chain over the minuend's tail
            for i in b.len()..a.len() {
                let v = a[i] as i64 - borrow as i64;
                if v < 0 {
                    out[i] = (v + LIMB_BASE as i64) as u32;
                    borrow = 1;
                } else {
                    out[i] = v as u32;
                    borrow = 0;
                }
            }
            assert!(
                borrow == 0,
                "subtraction underflow: minuend smaller than subtrahend"
            );
            return DigitVec::from_vec(out);
        }
    }
    let _ = level;
    scalar::sub(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(len: usize, seed: u64) -> Vec<u32> {
        // simple LCG over the limb range; deterministic per seed
        let mut state = seed;
        let mut v = Vec::with_capacity(len);
        for _ in 0..len {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            v.push((state % LIMB_BASE) as u32);
        }
        if let Some(top) = v.last_mut() {
            if *top == 0 {
                *top = 1;
            }
        }
        v
    }

    fn levels() -> Vec<SimdLevel> {
        let mut levels = vec![SimdLevel::None];
        #[cfg(target_arch = "x86_64")]
        {
            if is_x86_feature_detected!("sse2") {
                levels.push(SimdLevel::Sse2);
            }
            if is_x86_feature_detected!("avx2") {
                levels.push(SimdLevel::Avx2);
            }
        }
        levels
    }

    #[test]
    fn add_matches_scalar_across_tiers() {
        for &(la, lb) in &[(1usize, 1usize), (16, 16), (33, 7), (100, 99), (257, 256)] {
            let a = pattern(la, 0xDECAF + la as u64);
            let b = pattern(lb, 0xC0FFEE + lb as u64);
            let reference = scalar::add(&a, &b);
            for level in levels() {
                assert_eq!(add_limbs(&a, &b, level), reference, "level {level:?} ({la},{lb})");
                assert_eq!(add_limbs(&b, &a, level), reference, "level {level:?} swapped");
            }
        }
    }

    #[test]
    fn sub_matches_scalar_across_tiers() {
        for &(la, lb) in &[(16usize, 16usize), (40, 17), (100, 100), (300, 256)] {
            let mut a = pattern(la, 0xFEED + la as u64);
            let b = pattern(lb, 0xBEEF + lb as u64);
            // force a >= b
            a.push(1);
            let reference = scalar::sub(&a, &b);
            for level in levels() {
                assert_eq!(sub_limbs(&a, &b, level), reference, "level {level:?} ({la},{lb})");
            }
        }
    }

    #[test]
    fn add_carry_ripples_through_saturated_limbs() {
        let a = vec![(LIMB_BASE - 1) as u32; 64];
        let b = vec![1u32];
        let reference = scalar::add(&a, &b);
        for level in levels() {
            assert_eq!(add_limbs(&a, &b, level), reference);
        }
        // 64 saturated limbs + 1 rolls over into a 65th limb
        assert_eq!(reference.len(), 65);
        assert_eq!(reference.as_slice()[64], 1);
        assert!(reference.as_slice()[..64].iter().all(|&l| l == 0));
    }
}
