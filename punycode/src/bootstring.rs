//! RFC 3492 parameters and the arithmetic shared by the encoder and decoder.
//!
//! Digits run over a-z for 0-25 and 0-9 for 26-35, so encoded labels stay
//! inside the LDH character set.

pub(crate) const BASE: u32 = 36;
pub(crate) const T_MIN: u32 = 1;
pub(crate) const T_MAX: u32 = 26;
pub(crate) const SKEW: u32 = 38;
pub(crate) const DAMP: u32 = 700;
pub(crate) const INITIAL_BIAS: u32 = 72;

/// Smallest extended code point; `n` starts here.
pub(crate) const INITIAL_N: u32 = 0x80;

/// Last `-` in an encoded label ends the literal ASCII run.
pub(crate) const DELIMITER: char = '-';

const DIGITS: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Largest scaled delta that needs no further division in [`adapt_bias`].
const SETTLED_DELTA: u32 = ((BASE - T_MIN) * T_MAX) / 2;

/// Next bias after writing or reading `delta`.
///
/// `points` counts every code point placed so far, this one included. The
/// very first delta of a label is damped harder than the rest since the
/// following ones are usually much smaller.
pub(crate) fn adapt_bias(delta: u32, points: u32, first: bool) -> u32 {
    let mut scaled = delta / if first { DAMP } else { 2 };
    scaled += scaled / points;

    let mut bias = 0;
    while scaled > SETTLED_DELTA {
        scaled /= BASE - T_MIN;
        bias += BASE;
    }

    bias + (BASE - T_MIN + 1) * scaled / (scaled + SKEW)
}

/// Digit character for a value below [`BASE`].
pub(crate) fn encode_digit(value: u32) -> Option<char> {
    DIGITS.get(value as usize).copied().map(char::from)
}

/// Value of a digit character. Uppercase letters are not digits here.
pub(crate) fn decode_digit(c: char) -> Option<u32> {
    match c {
        'a'..='z' => Some(c as u32 - 'a' as u32),
        '0'..='9' => Some(c as u32 - '0' as u32 + 26),
        _ => None,
    }
}

/// Threshold `t` for the digit at weight position `k`: `k - bias` pinned
/// to `T_MIN..=T_MAX`.
pub(crate) fn threshold(k: u32, bias: u32) -> u32 {
    k.saturating_sub(bias).clamp(T_MIN, T_MAX)
}
