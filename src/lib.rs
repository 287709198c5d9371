//! decint - High-performance arbitrary-precision decimal integers
//!
//! ## Representation
//!
//! Values are little-endian vectors of base-10^9 limbs (nine decimal
//! digits per `u32`), so decimal parsing and printing never pay a binary
//! radix conversion. The canonical form has no trailing zero limbs and
//! represents zero as the empty vector.
//!
//! ## Performance
//!
//! Small operands run schoolbook kernels with SIMD-assisted carry chains
//! (AVX2/SSE2 with runtime detection and a scalar fallback producing
//! identical results). Past the 64-limb crossover, products switch to a
//! floating-point FFT convolution over base-1000 sub-digits, and division
//! reduces to multiplication through a Newton-iteration reciprocal.
//! Multi-million-digit products complete in tens of milliseconds on one
//! core; every thread reuses its own convolution arena, so caller-side
//! parallelism across distinct values scales without locks.

pub mod digits;
pub mod div;
pub mod error;
pub mod fft;
pub mod kernels;
pub mod mul;
pub mod signed;
pub mod text;
pub mod unsigned;

pub use digits::{DigitVec, LIMB_BASE, LIMB_DIGITS};
pub use error::{ParseDecimalError, TryFromDecimalError};
pub use fft::reset_thread_workspace;
pub use signed::{DecInt, Sign};
pub use unsigned::{DecUint, MAX_OPERAND_LIMBS};
