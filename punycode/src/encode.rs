//! Punycode encoding implementation.

use crate::bootstring::{
    adapt_bias, encode_digit, threshold, BASE, DELIMITER, INITIAL_BIAS, INITIAL_N,
};
use crate::error::{Error, Result};

/// Encode a Unicode label into its Punycode form.
///
/// This is the string boundary over [`encode`]. The ACE prefix is not added;
/// see [`crate::encode_domain`] for that. A label with no non-ASCII code
/// point is returned as-is, without a delimiter, so it does not round-trip
/// through [`crate::decode_label`].
///
/// # Examples
///
/// ```
/// use punycode::{encode_label, Error};
///
/// assert_eq!(encode_label("bücher").unwrap(), "bcher-kva");
/// assert_eq!(encode_label("hello").unwrap(), "hello");
/// assert_eq!(encode_label(""), Err(Error::EmptyInput));
/// ```
pub fn encode_label(input: &str) -> Result<String> {
    let chars: Vec<char> = input.chars().collect();
    encode(&chars)
}

/// Encode a sequence of code points into a Punycode string.
///
/// Basic code points are copied first, in order. The delimiter is only
/// written when both basic and extended code points are present, so a
/// sequence without extended code points comes back as-is.
pub fn encode(input: &[char]) -> Result<String> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut output: String = input.iter().filter(|c| c.is_ascii()).collect();
    let basic_len = u32::try_from(output.len()).map_err(|_| Error::Overflow)?;
    let total_len = u32::try_from(input.len()).map_err(|_| Error::Overflow)?;

    if basic_len == total_len {
        tracing::trace!(len = total_len, "label is entirely basic");
        return Ok(output);
    }

    if basic_len > 0 {
        output.push(DELIMITER);
    }

    let mut n = INITIAL_N;
    let mut delta: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut handled = basic_len;

    while handled < total_len {
        // Every code point below n has been handled, so one >= n must exist.
        let m = input
            .iter()
            .map(|&c| c as u32)
            .filter(|&c| c >= n)
            .min()
            .ok_or(Error::Overflow)?;

        // delta += (m - n) * (handled + 1)
        delta = (m - n)
            .checked_mul(handled + 1)
            .and_then(|d| d.checked_add(delta))
            .ok_or(Error::Overflow)?;
        n = m;

        for &c in input {
            let c = c as u32;

            if c < n {
                delta = delta.checked_add(1).ok_or(Error::Overflow)?;
            } else if c == n {
                encode_varint(&mut output, delta, bias)?;
                bias = adapt_bias(delta, handled + 1, handled == basic_len);
                delta = 0;
                handled += 1;
            }
        }

        delta = delta.checked_add(1).ok_or(Error::Overflow)?;
        n = n.checked_add(1).ok_or(Error::Overflow)?;
    }

    tracing::trace!(
        basic = basic_len,
        extended = total_len - basic_len,
        encoded = %output,
        "encoded label"
    );

    Ok(output)
}

/// Encode a value as a generalized variable-length integer.
fn encode_varint(output: &mut String, mut value: u32, bias: u32) -> Result<()> {
    let mut k: u32 = BASE;

    loop {
        let t = threshold(k, bias);

        if value < t {
            output.push(encode_digit(value).ok_or(Error::Overflow)?);
            return Ok(());
        }

        let digit = t + (value - t) % (BASE - t);
        output.push(encode_digit(digit).ok_or(Error::Overflow)?);

        value = (value - t) / (BASE - t);
        k = k.saturating_add(BASE);
    }
}
