//! Request-authenticity verification for the webhook endpoint.
//!
//! The chat platform signs each request with HMAC-SHA256 over
//! `"v0:" + timestamp + ":" + body` using a shared secret, and presents
//! the digest as `v0=<hex>` in a signature header next to a
//! unix-seconds timestamp header. Requests older than five minutes are
//! rejected to blunt replays. When no secret is configured,
//! verification is skipped entirely.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

pub const TIMESTAMP_HEADER: &str = "X-Slack-Request-Timestamp";
pub const SIGNATURE_HEADER: &str = "X-Slack-Signature";

const VERSION_PREFIX: &str = "v0=";
const TOLERANCE_SECS: u64 = 5 * 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("missing signature headers")]
    MissingHeaders,
    #[error("malformed timestamp")]
    BadTimestamp,
    #[error("request timestamp outside tolerance")]
    StaleTimestamp,
    #[error("malformed signature")]
    BadSignature,
    #[error("signature mismatch")]
    Mismatch,
}

/// Verify a request against the shared secret. `now` is unix seconds,
/// passed in so expiry is testable.
pub fn verify(
    secret: &str,
    timestamp: &str,
    signature: &str,
    body: &[u8],
    now: u64,
) -> Result<(), SignatureError> {
    let ts: u64 = timestamp
        .parse()
        .map_err(|_| SignatureError::BadTimestamp)?;
    if now.abs_diff(ts) > TOLERANCE_SECS {
        return Err(SignatureError::StaleTimestamp);
    }

    let hex_digest = signature
        .strip_prefix(VERSION_PREFIX)
        .ok_or(SignatureError::BadSignature)?;
    let provided = hex::decode(hex_digest).map_err(|_| SignatureError::BadSignature)?;

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| SignatureError::BadSignature)?;
    mac.update(b"v0:");
    mac.update(timestamp.as_bytes());
    mac.update(b":");
    mac.update(body);

    // Constant-time comparison
    mac.verify_slice(&provided)
        .map_err(|_| SignatureError::Mismatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "8f742231b10e8888abcd99yyyzzz85a5";

    fn sign(timestamp: &str, body: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(SECRET.as_bytes()).unwrap();
        mac.update(b"v0:");
        mac.update(timestamp.as_bytes());
        mac.update(b":");
        mac.update(body);
        format!("{}{}", VERSION_PREFIX, hex::encode(mac.finalize().into_bytes()))
    }

    #[test]
    fn accepts_valid_signature() {
        let body = b"text=%D9%85%D8%AD%D9%85%D8%AF";
        let sig = sign("1700000000", body);
        assert_eq!(verify(SECRET, "1700000000", &sig, body, 1700000060), Ok(()));
    }

    #[test]
    fn rejects_tampered_body() {
        let sig = sign("1700000000", b"text=a");
        assert_eq!(
            verify(SECRET, "1700000000", &sig, b"text=b", 1700000060),
            Err(SignatureError::Mismatch)
        );
    }

    #[test]
    fn rejects_wrong_secret() {
        let sig = sign("1700000000", b"text=a");
        assert_eq!(
            verify("other-secret", "1700000000", &sig, b"text=a", 1700000060),
            Err(SignatureError::Mismatch)
        );
    }

    #[test]
    fn rejects_stale_timestamp() {
        let sig = sign("1700000000", b"text=a");
        assert_eq!(
            verify(SECRET, "1700000000", &sig, b"text=a", 1700000000 + 301),
            Err(SignatureError::StaleTimestamp)
        );
    }

    #[test]
    fn accepts_at_tolerance_boundary() {
        let sig = sign("1700000000", b"text=a");
        assert_eq!(
            verify(SECRET, "1700000000", &sig, b"text=a", 1700000000 + 300),
            Ok(())
        );
    }

    #[test]
    fn rejects_malformed_inputs() {
        assert_eq!(
            verify(SECRET, "not-a-number", "v0=00", b"", 0),
            Err(SignatureError::BadTimestamp)
        );
        assert_eq!(
            verify(SECRET, "100", "missing-prefix", b"", 100),
            Err(SignatureError::BadSignature)
        );
        assert_eq!(
            verify(SECRET, "100", "v0=zz", b"", 100),
            Err(SignatureError::BadSignature)
        );
    }
}
