//! Product dispatch: schoolbook below the crossover, FFT above
//!
//! The rule is symmetric and deterministic: whichever operand is shorter
//! decides. Schoolbook wins below [`SCHOOLBOOK_THRESHOLD`] limbs because
//! the convolution's split/transform/carry overhead dominates there.

use crate::digits::DigitVec;
use crate::fft;
use crate::kernels;
use log::trace;

/// Crossover in limbs: at or below this the schoolbook kernel runs.
pub const SCHOOLBOOK_THRESHOLD: usize = 64;

/// `a * b`, exact and canonical.
pub fn big_mul(a: &[u32], b: &[u32]) -> DigitVec {
    if a.is_empty() || b.is_empty() {
        return DigitVec::new();
    }
    if a.len().min(b.len()) <= SCHOOLBOOK_THRESHOLD {
        trace!("multiply {}x{} limbs via schoolbook", a.len(), b.len());
        kernels::schoolbook_mul(a, b)
    } else {
        trace!("multiply {}x{} limbs via fft", a.len(), b.len());
        fft::fft_mul(a, b)
    }
}
