//! Request authentication for the BitcoinAverage API
//!
//! Every request carries an `X-Signature` header of the form
//! `<unix_time>.<public_key>.<hex(HMAC-SHA256(secret_key, "<unix_time>.<public_key>"))>`.

use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::Method;
use sha2::Sha256;

use crate::constants::{PUBLIC_KEY_ENV, SECRET_KEY_ENV, SIGNATURE_HEADER};
use crate::error::{ClientError, ClientResult};

type HmacSha256 = Hmac<Sha256>;

/// Public/secret key pair used to sign requests
///
/// A missing key behaves as the empty string.
#[derive(Clone, Default)]
pub struct Credentials {
    public_key: String,
    secret_key: String,
}

impl Credentials {
    /// Create new credentials
    pub fn new(public_key: Option<&str>, secret_key: Option<&str>) -> Self {
        Self {
            public_key: public_key.unwrap_or_default().to_string(),
            secret_key: secret_key.unwrap_or_default().to_string(),
        }
    }

    /// Create credentials from environment variables
    ///
    /// Reads `BITCOINAVERAGE_PUBLIC_KEY` and `BITCOINAVERAGE_SECRET_KEY`
    pub fn from_env() -> ClientResult<Self> {
        let public_key = std::env::var(PUBLIC_KEY_ENV)
            .map_err(|_| ClientError::EnvVarNotSet(PUBLIC_KEY_ENV.to_string()))?;
        let secret_key = std::env::var(SECRET_KEY_ENV)
            .map_err(|_| ClientError::EnvVarNotSet(SECRET_KEY_ENV.to_string()))?;

        Ok(Self::new(Some(&public_key), Some(&secret_key)))
    }

    /// Get the public key
    pub fn public_key(&self) -> &str {
        &self.public_key
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Computes the signature for a given Unix timestamp
///
/// Pure function of its inputs: `payload = "<timestamp>.<public_key>"`,
/// signature = `payload + "." + lowercase_hex(HMAC-SHA256(secret_key, payload))`.
pub fn sign(timestamp: i64, credentials: &Credentials) -> String {
    let payload = format!("{}.{}", timestamp, credentials.public_key);

    let mut mac = HmacSha256::new_from_slice(credentials.secret_key.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    let hex_hash = hex::encode(mac.finalize().into_bytes());

    format!("{}.{}", payload, hex_hash)
}

/// HTTP method and signature header attached to every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    method: Method,
    timestamp: i64,
    signature: String,
}

impl AuthContext {
    /// Signs with the current Unix time
    pub fn new(credentials: &Credentials) -> Self {
        Self::at(Utc::now().timestamp(), credentials)
    }

    /// Signs with an explicit Unix time
    pub fn at(timestamp: i64, credentials: &Credentials) -> Self {
        Self {
            method: Method::GET,
            timestamp,
            signature: sign(timestamp, credentials),
        }
    }

    /// Always GET
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Unix time the signature was computed for
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Header name, `X-Signature`
    pub fn header_name(&self) -> &'static str {
        SIGNATURE_HEADER
    }

    /// Header value, the full signature string
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// The complete header line, `X-Signature: <signature>`
    pub fn header(&self) -> String {
        format!("{}: {}", SIGNATURE_HEADER, self.signature)
    }
}
