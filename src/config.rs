//! Client configuration

use crate::constants::{BASE_URL, REQUEST_TIMEOUT_SECS, USER_AGENT};

/// When the `X-Signature` header is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureMode {
    /// Signed once at construction and reused for the client's lifetime.
    ///
    /// A long-lived client keeps sending the construction timestamp, which the
    /// API may eventually reject as stale.
    #[default]
    Fixed,
    /// Signed again with the current time before every request
    PerRequest,
}

/// Configuration for [`BitcoinAverageClient`](crate::client::BitcoinAverageClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API origin every endpoint template is prefixed with
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent sent with each request
    pub user_agent: String,
    /// Signature lifetime
    pub signature_mode: SignatureMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: REQUEST_TIMEOUT_SECS,
            user_agent: USER_AGENT.to_string(),
            signature_mode: SignatureMode::Fixed,
        }
    }
}

impl ClientConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL (e.g. a local mock server)
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the signature mode
    pub fn signature_mode(mut self, mode: SignatureMode) -> Self {
        self.signature_mode = mode;
        self
    }
}
