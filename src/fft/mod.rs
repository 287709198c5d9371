//! FFT convolution engine for large products
//!
//! ## Overview
//!
//! Multiplication above the schoolbook crossover runs as a cyclic
//! convolution of sub-base digit sequences: split each limb into base-1000
//! mini-limbs, transform, multiply pointwise, transform back, round and
//! carry. See `convolve` for the precision argument and `workspace` for
//! the per-thread arena that makes repeated large multiplies
//! allocation-free.

pub mod convolve;
pub mod transform;
pub mod workspace;

pub use convolve::{fft_mul, FFT_MAX_LEN};
pub use workspace::reset_thread_workspace;
