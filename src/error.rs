//! Error types for decimal parsing and fixed-width conversions

use thiserror::Error;

/// Errors that can occur while parsing decimal text.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseDecimalError {
    /// Empty input string
    #[error("cannot parse integer from empty string")]
    Empty,

    /// A byte outside '0'..='9' (for signed parses, outside an optional
    /// leading sign)
    #[error("invalid digit 0x{byte:02x} at position {position}")]
    InvalidDigit { position: usize, byte: u8 },

    /// A sign with no digits after it
    #[error("sign without any digits")]
    MissingDigits,
}

/// Errors that can occur converting to or from fixed-width numeric types.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TryFromDecimalError {
    /// The value does not fit in the target type's range
    #[error("value out of range for the target type")]
    Overflow,

    /// A negative value cannot be represented as an unsigned integer
    #[error("negative value cannot be represented")]
    Negative,

    /// NaN or infinite floating-point input
    #[error("value is not finite")]
    NotFinite,
}
