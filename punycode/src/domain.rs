//! Domain-level wrapper: per-label ACE prefixing on top of the label codec.

use crate::decode::decode_label;
use crate::encode::encode_label;
use crate::error::Result;

/// The prefix marking a Punycode-encoded label.
pub const ACE_PREFIX: &str = "xn--";

/// Separates labels within a domain.
pub const DOMAIN_DELIMITER: char = '.';

/// Check if a label needs Punycode encoding.
///
/// Any label containing a non-ASCII character does. Empty labels never do.
pub fn needs_encoding(label: &str) -> bool {
    !label.is_ascii()
}

/// Quick check if a label carries the ACE prefix.
///
/// The comparison is case-sensitive. This doesn't validate that the rest of
/// the label is well-formed Punycode.
pub fn is_ace_label(label: &str) -> bool {
    label.starts_with(ACE_PREFIX)
}

/// Encode every non-ASCII label of a domain into its `xn--` form.
///
/// ASCII labels, including empty ones, are copied unchanged. The first label
/// that fails to encode fails the whole domain.
///
/// # Examples
///
/// ```
/// use punycode::encode_domain;
///
/// assert_eq!(encode_domain("bücher.com").unwrap(), "xn--bcher-kva.com");
/// assert_eq!(encode_domain("example.com").unwrap(), "example.com");
/// ```
pub fn encode_domain(input: &str) -> Result<String> {
    map_labels(input, |label| {
        if needs_encoding(label) {
            let encoded = encode_label(label)?;
            tracing::trace!(label, %encoded, "encoded domain label");
            Ok(format!("{}{}", ACE_PREFIX, encoded))
        } else {
            Ok(label.to_string())
        }
    })
}

/// Decode every `xn--` label of a domain back to Unicode.
///
/// Labels without the prefix are copied unchanged. The first label that
/// fails to decode fails the whole domain.
///
/// # Examples
///
/// ```
/// use punycode::decode_domain;
///
/// assert_eq!(decode_domain("xn--bcher-kva.com").unwrap(), "bücher.com");
/// assert_eq!(decode_domain("example.com").unwrap(), "example.com");
/// ```
pub fn decode_domain(input: &str) -> Result<String> {
    map_labels(input, |label| match label.strip_prefix(ACE_PREFIX) {
        Some(encoded) => {
            let decoded = decode_label(encoded)?;
            tracing::trace!(label, %decoded, "decoded domain label");
            Ok(decoded)
        }
        None => Ok(label.to_string()),
    })
}

/// Apply `f` to each label independently and rejoin the results.
fn map_labels<F>(input: &str, mut f: F) -> Result<String>
where
    F: FnMut(&str) -> Result<String>,
{
    let mut output = String::with_capacity(input.len());

    for (idx, label) in input.split(DOMAIN_DELIMITER).enumerate() {
        if idx > 0 {
            output.push(DOMAIN_DELIMITER);
        }
        match f(label) {
            Ok(mapped) => output.push_str(&mapped),
            Err(e) => {
                tracing::debug!(label, error = %e, "label rejected");
                return Err(e);
            }
        }
    }

    Ok(output)
}
