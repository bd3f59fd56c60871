//! Keyed signing of the session cookie payload.
//!
//! The cookie value is `payload + "." + base64url(HMAC-SHA256(payload))`.
//! Splitting on the last `.` is safe because the payload is itself base64url,
//! which never contains the delimiter.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::session::config::SESSION_SECRET;

type HmacSha256 = Hmac<Sha256>;

fn compute_mac(data: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(&SESSION_SECRET).expect("HMAC can take key of any size");
    mac.update(data.as_bytes());
    URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
}

pub(super) fn sign(data: &str) -> String {
    format!("{data}.{}", compute_mac(data))
}

/// Returns the payload only when the appended MAC verifies. The comparison is
/// constant-time over the tag bytes.
pub(super) fn verify(signed: &str) -> Option<String> {
    let (data, tag) = signed.rsplit_once('.')?;
    let expected = compute_mac(data);
    if expected.as_bytes().ct_eq(tag.as_bytes()).into() {
        Some(data.to_string())
    } else {
        None
    }
}
