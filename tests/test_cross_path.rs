//! Randomized agreement between independent implementations
//!
//! The same operands run through every implementation pair that must
//! agree bit-for-bit: scalar vs SIMD carry chains, schoolbook vs FFT
//! products, and schoolbook vs reciprocal division. Operand lengths are
//! drawn geometrically so both sides of every crossover get exercised.

use decint::digits::LIMB_BASE;
use decint::kernels::{self, scalar, simd};
use decint::{div, fft, mul};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_limbs(rng: &mut StdRng, len: usize) -> Vec<u32> {
    let mut v: Vec<u32> = (0..len).map(|_| rng.random_range(0..LIMB_BASE as u32)).collect();
    if let Some(top) = v.last_mut() {
        if *top == 0 {
            *top = 1;
        }
    }
    v
}

/// Geometric-ish length: scale 2^k with k uniform, then uniform within.
fn random_len(rng: &mut StdRng, max_log2: u32) -> usize {
    let magnitude = rng.random_range(0..=max_log2);
    rng.random_range(1..=(1usize << magnitude))
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn simd_tiers_match_scalar_reference() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(0x5EED_0001);
    let mut levels = vec![simd::SimdLevel::None];
    let active = simd::active_level();
    if active != simd::SimdLevel::None {
        levels.push(active);
    }

    for round in 0..500 {
        let la = random_len(&mut rng, 9);
        let lb = random_len(&mut rng, 9);
        let a = random_limbs(&mut rng, la);
        let b = random_limbs(&mut rng, lb);

        let add_ref = scalar::add(&a, &b);
        for &level in &levels {
            assert_eq!(simd::add_limbs(&a, &b, level), add_ref, "add {level:?} round {round}");
        }

        let (hi, lo) = if kernels::compare(&a, &b) == std::cmp::Ordering::Less {
            (&b, &a)
        } else {
            (&a, &b)
        };
        let sub_ref = scalar::sub(hi, lo);
        for &level in &levels {
            assert_eq!(simd::sub_limbs(hi, lo, level), sub_ref, "sub {level:?} round {round}");
        }
    }
}

#[test]
fn schoolbook_and_fft_products_agree() {
    let mut rng = StdRng::seed_from_u64(0x5EED_0002);
    for round in 0..40 {
        // lengths clustered around the crossover, with occasional big ones
        let la = 32 + random_len(&mut rng, 7);
        let lb = 32 + random_len(&mut rng, 7);
        let a = random_limbs(&mut rng, la);
        let b = random_limbs(&mut rng, lb);
        assert_eq!(
            kernels::schoolbook_mul(&a, &b),
            fft::fft_mul(&a, &b),
            "round {round}: {la}x{lb} limbs"
        );
    }
}

#[test]
fn dispatched_product_is_consistent_at_scale() {
    let mut rng = StdRng::seed_from_u64(0x5EED_0003);
    // ~90k decimal digits per side: firmly on the FFT path
    let a = random_limbs(&mut rng, 10_000);
    let b = random_limbs(&mut rng, 10_000);
    let p = mul::big_mul(&a, &b);
    assert!(p.len() == 20_000 || p.len() == 19_999);

    // spot-check against the Euclidean law: p / a == b exactly
    let (q, r) = div::big_divmod(p.as_slice(), &a);
    assert!(r.is_zero());
    assert_eq!(q.as_slice(), &b[..]);
}

#[test]
fn reciprocal_division_matches_schoolbook() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(0x5EED_0004);
    for round in 0..25 {
        let m = 65 + random_len(&mut rng, 6);
        let n = m + random_len(&mut rng, 8);
        let a = random_limbs(&mut rng, n);
        let b = random_limbs(&mut rng, m);
        let (q1, r1) = div::big_divmod(&a, &b);
        let (q2, r2) = kernels::schoolbook_divmod(&a, &b);
        assert_eq!(q1, q2, "quotient, round {round} ({n}/{m})");
        assert_eq!(r1, r2, "remainder, round {round} ({n}/{m})");
    }
}

#[test]
fn million_digit_square_has_closed_form() {
    // (10^k - 1)^2 = 10^2k - 2*10^k + 1: a fully saturated FFT input with
    // an exactly known two-million-digit answer
    let k = 1_000_000;
    let nines: decint::DecUint = "9".repeat(k).parse().unwrap();
    let square = &nines * &nines;

    let mut expected = String::with_capacity(2 * k);
    expected.push_str(&"9".repeat(k - 1));
    expected.push('8');
    expected.push_str(&"0".repeat(k - 1));
    expected.push('1');
    assert_eq!(square.to_string(), expected);
}

#[test]
fn two_million_digit_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x5EED_0005);
    let mut digits = String::with_capacity(2_000_000);
    digits.push(char::from(b'1' + rng.random_range(0..9u8)));
    for _ in 1..2_000_000 {
        digits.push(char::from(b'0' + rng.random_range(0..10u8)));
    }
    let v: decint::DecUint = digits.parse().unwrap();
    assert_eq!(v.digit_count(), 2_000_000);
    assert_eq!(v.to_string(), digits);
}
