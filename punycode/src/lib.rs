//! Punycode: ASCII-compatible encoding of Unicode domain labels.
//!
//! This crate implements the Punycode transcoding algorithm from
//! [RFC 3492](https://www.rfc-editor.org/rfc/rfc3492): a lossless, reversible
//! mapping between a sequence of Unicode code points and a string over
//! `[a-z0-9-]`, plus the domain-level `xn--` wrapper applied label by label.
//!
//! # Key Properties
//!
//! - Round-trip: `decode_label(encode_label(x)) == x` for any label with at
//!   least one non-ASCII code point
//! - ASCII labels pass through [`encode_domain`] and [`decode_domain`]
//!   unchanged
//! - Pure functions with no shared state; safe to call from any thread
//!
//! Normalization (NFC/NFKC), case folding and IDNA validity rules are out of
//! scope: callers that need them apply them before encoding.
//!
//! # Examples
//!
//! ```
//! use punycode::{decode_domain, decode_label, encode_domain, encode_label};
//!
//! // Label level: no prefix
//! assert_eq!(encode_label("bücher").unwrap(), "bcher-kva");
//! assert_eq!(decode_label("bcher-kva").unwrap(), "bücher");
//!
//! // Domain level: only non-ASCII labels get the xn-- prefix
//! assert_eq!(encode_domain("bücher.com").unwrap(), "xn--bcher-kva.com");
//! assert_eq!(decode_domain("xn--bcher-kva.com").unwrap(), "bücher.com");
//! ```

mod bootstring;
mod decode;
mod domain;
mod encode;
mod error;

pub use decode::{decode, decode_label};
pub use domain::{
    decode_domain, encode_domain, is_ace_label, needs_encoding, ACE_PREFIX, DOMAIN_DELIMITER,
};
pub use encode::{encode, encode_label};
pub use error::{Error, Result};


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip property: labels with a non-ASCII code point survive
        /// encode then decode
        #[test]
        fn prop_roundtrip(s in "\\PC*[^\\x00-\\x7F]\\PC*") {
            let encoded = encode_label(&s).unwrap();
            let decoded = decode_label(&encoded).unwrap_or_else(|e| {
                panic!("decode failed for input '{}' with encoding '{}': {:?}", &s, &encoded, e)
            });
            prop_assert_eq!(&decoded, &s, "roundtrip failed for: {}", &s);
        }

        /// Roundtrip on arbitrary scalar sequences, control characters included
        #[test]
        fn prop_roundtrip_chars(mut chars in prop::collection::vec(any::<char>(), 1..64)) {
            if chars.iter().all(|c| c.is_ascii()) {
                chars.push('\u{80}');
            }
            let encoded = encode(&chars).unwrap();
            prop_assert_eq!(decode(&encoded).unwrap(), chars);
        }

        /// Encoded output only uses [a-z0-9] plus the basic code points
        #[test]
        fn prop_output_is_ascii(s in ".+") {
            let encoded = encode_label(&s).unwrap();
            prop_assert!(encoded.is_ascii(), "encode_label('{}') = '{}'", &s, &encoded);
        }

        /// ASCII domains pass through both directions unchanged
        #[test]
        fn prop_ascii_domain_passthrough(s in "[a-z0-9-]{1,20}(\\.[a-z0-9-]{1,20}){0,3}") {
            prop_assume!(!s.split('.').any(is_ace_label));
            prop_assert_eq!(encode_domain(&s).unwrap(), s.clone());
            prop_assert_eq!(decode_domain(&s).unwrap(), s);
        }

        /// Domain roundtrip: labels without dots survive encode then decode
        #[test]
        fn prop_domain_roundtrip(labels in prop::collection::vec("[^.]{1,12}", 1..4)) {
            prop_assume!(!labels.iter().any(|l| is_ace_label(l)));
            let domain = labels.join(".");
            let encoded = encode_domain(&domain).unwrap();
            prop_assert!(encoded.is_ascii());
            prop_assert_eq!(decode_domain(&encoded).unwrap(), domain);
        }

        /// Decode never panics, whatever the input
        #[test]
        fn prop_decode_total(s in "[a-z0-9-]{0,40}") {
            let _ = decode_label(&s);
        }
    }
}
