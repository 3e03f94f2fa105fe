//! Error types for Punycode transcoding.

use thiserror::Error;

/// Errors that can occur while encoding or decoding a label or domain.
///
/// None of these are transient: the input has to change before the call can
/// succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Encode was called with zero code points.
    #[error("cannot encode an empty label")]
    EmptyInput,

    /// Decode input contains a non-ASCII character.
    #[error("punycode input must be ASCII")]
    NonAsciiInput,

    /// A character outside the base-36 alphabet was found in the digit
    /// stream, or (`None`) the stream ended in the middle of an integer.
    #[error("{}", describe_digit(.0))]
    InvalidDigit(Option<char>),

    /// An intermediate value exceeded the 32-bit unsigned range.
    #[error("overflow during punycode arithmetic")]
    Overflow,

    /// A decoded value is a surrogate or lies above U+10FFFF.
    #[error("invalid Unicode scalar value: {0:#x}")]
    InvalidScalar(u32),
}

fn describe_digit(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("invalid digit in encoded portion: '{}'", c),
        None => "encoded data ended in the middle of an integer".to_string(),
    }
}

/// Result type alias for Punycode operations.
pub type Result<T> = std::result::Result<T, Error>;
