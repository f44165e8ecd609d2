//! HTTP transport abstraction
//!
//! The client only needs "GET this URL with this auth header and give me the
//! body". Keeping that behind a trait lets tests swap in a canned transport.

use crate::{
    auth::AuthContext,
    config::ClientConfig,
    error::RequestError,
};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Trait for HTTP transports
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs the request described by `auth` against `url`
    ///
    /// # Returns
    /// The raw response body, or an error if the transport failed or the
    /// status was not a success
    async fn get(&self, url: &str, auth: &AuthContext) -> Result<String, RequestError>;

    /// Returns the name of this transport
    fn transport_name(&self) -> &'static str;
}

/// Transport backed by a reqwest client
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a new transport from the client configuration
    pub fn new(config: &ClientConfig) -> Result<Self, RequestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(RequestError::Network)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, auth: &AuthContext) -> Result<String, RequestError> {
        let response = self
            .client
            .request(auth.method().clone(), url)
            .header(auth.header_name(), auth.signature())
            .send()
            .await
            .map_err(RequestError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::status(
                status.as_u16(),
                response.text().await.unwrap_or_default(),
            ));
        }

        response.text().await.map_err(RequestError::from_reqwest)
    }

    fn transport_name(&self) -> &'static str {
        "reqwest"
    }
}
