//! Punycode decoding implementation.

use crate::bootstring::{
    adapt_bias, decode_digit, threshold, BASE, DELIMITER, INITIAL_BIAS, INITIAL_N,
};
use crate::error::{Error, Result};

/// Decode a Punycode label back to Unicode.
///
/// The input must not carry the ACE prefix; see [`crate::decode_domain`].
/// A plain ASCII word with no delimiter is read as a digit stream, so the
/// delimiter-free output of [`crate::encode_label`] for an all-ASCII label
/// does not decode back to that label.
///
/// # Examples
///
/// ```
/// use punycode::{decode_label, Error};
///
/// assert_eq!(decode_label("bcher-kva").unwrap(), "bücher");
/// assert_eq!(decode_label("g28h").unwrap(), "😂");
///
/// // The digit stream only uses a-z and 0-9
/// assert_eq!(decode_label("bcher-k!a"), Err(Error::InvalidDigit(Some('!'))));
/// ```
pub fn decode_label(input: &str) -> Result<String> {
    decode(input).map(|chars| chars.into_iter().collect())
}

/// Decode a Punycode string into a sequence of code points.
///
/// Everything before the last delimiter is copied literally; everything
/// after it (or the whole input, without a delimiter) is the digit stream.
pub fn decode(input: &str) -> Result<Vec<char>> {
    if !input.is_ascii() {
        tracing::debug!(input, "rejecting non-ASCII punycode input");
        return Err(Error::NonAsciiInput);
    }

    let (mut output, digits): (Vec<char>, &str) = match input.rfind(DELIMITER) {
        Some(pos) => (input[..pos].chars().collect(), &input[pos + 1..]),
        None => (Vec::new(), input),
    };

    let mut n = INITIAL_N;
    let mut i: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut chars = digits.chars().peekable();

    while chars.peek().is_some() {
        let previous_i = i;
        i = decode_varint(&mut chars, i, bias)?;

        let out_len = u32::try_from(output.len())
            .ok()
            .and_then(|len| len.checked_add(1))
            .ok_or(Error::Overflow)?;
        bias = adapt_bias(i - previous_i, out_len, previous_i == 0);

        n = n.checked_add(i / out_len).ok_or(Error::Overflow)?;
        i %= out_len;

        let c = char::from_u32(n).ok_or(Error::InvalidScalar(n))?;
        output.insert(i as usize, c);
        i += 1;
    }

    Ok(output)
}

/// Decode one generalized variable-length integer and add it to `i`.
fn decode_varint(
    chars: &mut std::iter::Peekable<std::str::Chars>,
    mut i: u32,
    bias: u32,
) -> Result<u32> {
    let mut w: u32 = 1;
    let mut k: u32 = BASE;

    loop {
        let c = chars.next().ok_or(Error::InvalidDigit(None))?;
        let digit = decode_digit(c).ok_or(Error::InvalidDigit(Some(c)))?;

        // i += digit * w
        i = digit
            .checked_mul(w)
            .and_then(|dw| i.checked_add(dw))
            .ok_or(Error::Overflow)?;

        let t = threshold(k, bias);
        if digit < t {
            return Ok(i);
        }

        // w *= (BASE - t)
        w = w.checked_mul(BASE - t).ok_or(Error::Overflow)?;
        k = k.saturating_add(BASE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_mixed() {
        assert_eq!(decode_label("bcher-kva").unwrap(), "bücher");
        assert_eq!(decode_label("maana-pta").unwrap(), "mañana");
        assert_eq!(decode_label("ab-xka").unwrap(), "aüb");
    }

    #[test]
    fn test_decode_digits_only() {
        assert_eq!(decode_label("tda").unwrap(), "ü");
        assert_eq!(decode_label("zckzah").unwrap(), "テスト");
        assert_eq!(decode("g28h").unwrap(), vec!['😂']);
    }

    #[test]
    fn test_decode_basic_only() {
        // Trailing delimiter with an empty digit stream
        assert_eq!(decode_label("abc-").unwrap(), "abc");
        assert_eq!(decode_label("-").unwrap(), "");
        assert_eq!(decode_label("").unwrap(), "");
    }

    #[test]
    fn test_decode_splits_at_last_delimiter() {
        assert_eq!(decode_label("abc--dpa9i").unwrap(), "abcé-ü");
    }

    #[test]
    fn test_decode_non_ascii() {
        assert_eq!(decode_label("bücher"), Err(Error::NonAsciiInput));
        assert_eq!(decode("ü-kva"), Err(Error::NonAsciiInput));
    }

    #[test]
    fn test_decode_invalid_digit() {
        assert_eq!(decode_label("bcher-kv_"), Err(Error::InvalidDigit(Some('_'))));
        // Uppercase is not part of the digit alphabet
        assert_eq!(decode_label("bcher-KVA"), Err(Error::InvalidDigit(Some('K'))));
    }

    #[test]
    fn test_decode_ends_mid_integer() {
        // With the initial bias the first threshold is 1, so 'z' (25) asks for
        // another digit that never comes.
        assert_eq!(decode_label("z"), Err(Error::InvalidDigit(None)));
        assert_eq!(decode_label("bcher-kv"), Err(Error::InvalidDigit(None)));
        assert_eq!(decode_label("99"), Err(Error::InvalidDigit(None)));
    }

    #[test]
    fn test_decode_single_digit() {
        // "a" is delta 0: code point 128 at position 0
        assert_eq!(decode("a").unwrap(), vec!['\u{80}']);
    }

    #[test]
    fn test_decode_overflow() {
        // A long run of maximal digits keeps multiplying the weight
        let result = decode_label("99999999999999999999a");
        assert_eq!(result, Err(Error::Overflow));
    }

    /// Write `delta` as a single variable-length integer under the initial bias.
    fn digits_for(delta: u32) -> String {
        let mut digits = String::new();
        let mut value = delta;
        let mut k = BASE;
        loop {
            let t = threshold(k, INITIAL_BIAS);
            if value < t {
                digits.push(crate::bootstring::encode_digit(value).unwrap());
                return digits;
            }
            let d = t + (value - t) % (BASE - t);
            digits.push(crate::bootstring::encode_digit(d).unwrap());
            value = (value - t) / (BASE - t);
            k += BASE;
        }
    }

    #[test]
    fn test_decode_invalid_scalar() {
        // Into an empty output, n lands on 0x80 + delta
        assert_eq!(
            decode_label(&digits_for(0xD800 - INITIAL_N)),
            Err(Error::InvalidScalar(0xD800))
        );

        let digits = digits_for(0x11_0000 - INITIAL_N);
        assert_eq!(digits, "en32g");
        assert_eq!(decode_label(&digits), Err(Error::InvalidScalar(0x11_0000)));

        // One below the limit is still a scalar
        assert_eq!(
            decode(&digits_for(0x10_FFFF - INITIAL_N)).unwrap(),
            vec!['\u{10FFFF}']
        );
    }

    #[test]
    fn test_decode_code_point_overflow() {
        // i fits in u32, but n + i / 1 does not
        let digits = digits_for(u32::MAX - 127);
        assert_eq!(digits, "xw902716a");
        assert_eq!(decode_label(&digits), Err(Error::Overflow));
    }
}
