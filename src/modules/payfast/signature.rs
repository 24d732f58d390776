//! PayFast request signatures.
//!
//! The gateway signs and checks MD5 digests over a canonical
//! `key=value&...` string. Outbound payment requests keep the caller's field
//! order and append `passphrase`, while notifications are checked with the
//! keys sorted and `pass_phrase` appended. Both quirks belong to the gateway
//! protocol and must stay as they are.

use super::fields::FieldList;

pub const SIGNATURE_KEY: &str = "signature";

const SIGN_PASSPHRASE_KEY: &str = "passphrase";
const VERIFY_PASSPHRASE_KEY: &str = "pass_phrase";

/// Percent-encodes like `encodeURIComponent`, with spaces as `+`.
pub fn encode(value: &str) -> String {
    // `urlencoding` only leaves `-_.~` unescaped.
    urlencoding::encode(value)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
        .replace("%20", "+")
}

fn signable<'a>(
    pairs: impl Iterator<Item = (&'a str, &'a str)>,
) -> impl Iterator<Item = (&'a str, &'a str)> {
    pairs.filter(|(key, value)| *key != SIGNATURE_KEY && !value.is_empty())
}

fn join_terms<'a>(
    pairs: impl Iterator<Item = (&'a str, &'a str)>,
    passphrase: Option<(&str, &str)>,
) -> String {
    let mut canonical = pairs
        .map(|(key, value)| format!("{}={}", key, encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    if let Some((key, passphrase)) = passphrase {
        canonical.push_str(&format!("&{}={}", key, encode(passphrase)));
    }

    canonical
}

/// Canonical string for an outbound payment request.
///
/// Values are trimmed after the emptiness check.
pub fn generation_string(fields: &FieldList, passphrase: Option<&str>) -> String {
    join_terms(
        signable(fields.iter()).map(|(key, value)| (key, value.trim())),
        passphrase
            .filter(|passphrase| !passphrase.is_empty())
            .map(|passphrase| (SIGN_PASSPHRASE_KEY, passphrase.trim())),
    )
}

/// Canonical string for an inbound notification.
pub fn verification_string(fields: &FieldList, passphrase: Option<&str>) -> String {
    let sorted = fields.sorted();

    join_terms(
        signable(sorted.iter()),
        passphrase
            .filter(|passphrase| !passphrase.is_empty())
            .map(|passphrase| (VERIFY_PASSPHRASE_KEY, passphrase)),
    )
}

fn digest(canonical: &str) -> String {
    hex::encode(md5::compute(canonical.as_bytes()).0)
}

/// Signs an outbound request. Values must not be pre-encoded.
pub fn sign(fields: &FieldList, passphrase: Option<&str>) -> String {
    digest(&generation_string(fields, passphrase))
}

/// Checks the `signature` field of an inbound notification.
///
/// Returns `false` when the signature is missing; anything malformed simply
/// fails to match.
pub fn verify(fields: &FieldList, passphrase: Option<&str>) -> bool {
    let Some(received) = fields.get_non_empty(SIGNATURE_KEY) else {
        return false;
    };

    digest(&verification_string(fields, passphrase)).eq_ignore_ascii_case(received)
}
