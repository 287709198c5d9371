//! Packed-decimal limb storage for arbitrary-precision integers
//!
//! A number is a little-endian vector of base-10^9 limbs: `limbs[0]` is the
//! least significant. Each limb is a `u32` holding exactly nine decimal
//! digits, so a widened `u64` has room for a full limb-by-limb product carry.
//!
//! ## Canonical form
//!
//! - every limb is in `[0, LIMB_BASE)`,
//! - the most significant limb is nonzero,
//! - zero is the empty vector.
//!
//! Every operation in this crate returns vectors in canonical form; the
//! kernels call [`DigitVec::normalize`] before handing a result back.

use smallvec::SmallVec;

/// Limb radix: each limb stores nine decimal digits.
pub const LIMB_BASE: u64 = 1_000_000_000;

/// Decimal digits per limb.
pub const LIMB_DIGITS: usize = 9;

/// Inline capacity: values up to 36 decimal digits never touch the heap.
const INLINE_LIMBS: usize = 4;

/// Growable little-endian buffer of base-10^9 limbs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DigitVec {
    limbs: SmallVec<[u32; INLINE_LIMBS]>,
}

impl DigitVec {
    /// Canonical zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of meaningful limbs. Zero for the value zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.limbs
    }

    /// Reserves room for at least `n` limbs. Growth is geometric, so
    /// repeated pushes stay amortized linear.
    pub fn reserve(&mut self, n: usize) {
        self.limbs.reserve(n);
    }

    /// Grows with zero limbs or truncates to `n` limbs. The result is not
    /// necessarily canonical; callers must [`normalize`](Self::normalize)
    /// before the vector becomes observable.
    pub(crate) fn resize(&mut self, n: usize) {
        self.limbs.resize(n, 0);
    }

    /// Strips trailing zero limbs so the most significant limb is nonzero.
    pub fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.limbs, &mut other.limbs);
    }

    /// Moves the value out, leaving the donor canonically zero.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Wraps raw limbs, restoring canonical form.
    pub(crate) fn from_raw(limbs: SmallVec<[u32; INLINE_LIMBS]>) -> Self {
        let mut v = Self { limbs };
        v.normalize();
        v
    }

    /// Wraps a heap buffer produced by a kernel, restoring canonical form.
    pub(crate) fn from_vec(limbs: Vec<u32>) -> Self {
        Self::from_raw(SmallVec::from_vec(limbs))
    }

    pub(crate) fn from_slice(limbs: &[u32]) -> Self {
        Self::from_raw(SmallVec::from_slice(limbs))
    }

    pub fn from_u64(mut v: u64) -> Self {
        let mut limbs = SmallVec::new();
        while v != 0 {
            limbs.push((v % LIMB_BASE) as u32);
            v /= LIMB_BASE;
        }
        Self { limbs }
    }

    pub fn from_u128(mut v: u128) -> Self {
        let mut limbs = SmallVec::new();
        while v != 0 {
            limbs.push((v % LIMB_BASE as u128) as u32);
            v /= LIMB_BASE as u128;
        }
        Self { limbs }
    }

    /// Value reduced modulo 2^64 (wrapping narrowing).
    pub fn low_u64(&self) -> u64 {
        let mut acc = 0u64;
        for &limb in self.limbs.iter().rev() {
            acc = acc.wrapping_mul(LIMB_BASE).wrapping_add(limb as u64);
        }
        acc
    }

    /// Value reduced modulo 2^128 (wrapping narrowing).
    pub fn low_u128(&self) -> u128 {
        let mut acc = 0u128;
        for &limb in self.limbs.iter().rev() {
            acc = acc.wrapping_mul(LIMB_BASE as u128).wrapping_add(limb as u128);
        }
        acc
    }

    /// Exact value as `u128`, or `None` if it does not fit.
    pub fn to_u128(&self) -> Option<u128> {
        let mut acc = 0u128;
        for &limb in self.limbs.iter().rev() {
            acc = acc.checked_mul(LIMB_BASE as u128)?;
            acc = acc.checked_add(limb as u128)?;
        }
        Some(acc)
    }

    /// Decimal digit count; zero counts as one digit.
    pub fn digit_count(&self) -> usize {
        match self.limbs.last() {
            None => 1,
            Some(&top) => {
                let mut digits = (self.limbs.len() - 1) * LIMB_DIGITS + 1;
                let mut v = top / 10;
                while v != 0 {
                    digits += 1;
                    v /= 10;
                }
                digits
            }
        }
    }
}
