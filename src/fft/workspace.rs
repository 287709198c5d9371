//! Per-thread convolution arenas
//!
//! Each thread owns one workspace holding the complex buffer pair, the
//! mini-limb scratch vectors, and the twiddle cache keyed by transform
//! length. The arena grows monotonically to the high-water mark the thread
//! has seen and is never shared, so convolutions on distinct threads need
//! no locking. [`reset_thread_workspace`] releases the memory early for
//! callers that care; otherwise it lives until thread exit.

use super::transform::twiddle_table;
use num_complex::Complex64;
use rustc_hash::FxHashMap;
use std::cell::RefCell;

#[derive(Default)]
pub(crate) struct ConvolutionWorkspace {
    /// Twiddle tables by transform length, grown on demand.
    pub twiddles: FxHashMap<usize, Box<[Complex64]>>,
    /// Packed operand buffer (operand A in the real lane, B in the
    /// imaginary lane).
    pub packed: Vec<Complex64>,
    /// Spectrum product / inverse-transform buffer.
    pub product: Vec<Complex64>,
    /// Sub-base digit scratch for the two operands.
    pub mini_a: Vec<u32>,
    pub mini_b: Vec<u32>,
}

impl ConvolutionWorkspace {
    /// Twiddle table for length `n`, computing and caching it on first use.
    pub fn twiddles_for(
        twiddles: &mut FxHashMap<usize, Box<[Complex64]>>,
        n: usize,
    ) -> &[Complex64] {
        twiddles.entry(n).or_insert_with(|| twiddle_table(n))
    }
}

thread_local! {
    static WORKSPACE: RefCell<ConvolutionWorkspace> =
        RefCell::new(ConvolutionWorkspace::default());
}

pub(crate) fn with_workspace<R>(f: impl FnOnce(&mut ConvolutionWorkspace) -> R) -> R {
    WORKSPACE.with(|w| f(&mut w.borrow_mut()))
}

/// Drops the calling thread's convolution arena (buffers and twiddle
/// tables). The next large multiplication on this thread re-grows it.
pub fn reset_thread_workspace() {
    WORKSPACE.with(|w| *w.borrow_mut() = ConvolutionWorkspace::default());
}
