//! # BitcoinAverage SDK
//!
//! Client for the [BitcoinAverage](https://bitcoinaverage.com/) price index API.
//!
//! Requests are signed with the `X-Signature` header
//! (`<unix_time>.<public_key>.<hex HMAC-SHA256>`), endpoint URLs are built from
//! templates, and responses come back as untyped [`serde_json::Value`]s.
//!
//! ## Usage
//!
//! ```no_run
//! use bitcoinaverage_sdk::{BitcoinAverageClient, ConvertQuery, TickerQuery};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = BitcoinAverageClient::new(Some("public"), Some("secret"))?;
//!
//! // EUR/BTC on the global index
//! let ticker = client.ticker(&TickerQuery::default()).await?;
//! println!("{}", ticker);
//!
//! // 2.5 BTC in USD
//! let converted = client
//!     .convert(&ConvertQuery::new("BTC", "USD", 2.5, "global"))
//!     .await?;
//! println!("{}", converted["price"]);
//!
//! println!("{}", client.format_price(1234.5, "BTC")); // 1.234,50000000
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! ```no_run
//! use bitcoinaverage_sdk::{BitcoinAverageClient, ClientError, TickerQuery};
//!
//! # async fn example() -> Result<(), ClientError> {
//! let client = BitcoinAverageClient::new(None, None)?;
//!
//! match client.ticker(&TickerQuery::new("XYZ", "BTC", "local")).await {
//!     Ok(value) => println!("{}", value),
//!     Err(ClientError::EmptyResult { url }) => println!("No data for {}", url),
//!     Err(ClientError::Request(e)) => eprintln!("API unreachable: {}", e),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Signature lifetime
//!
//! By default the signature is computed once, when the client is built, and
//! reused for every request. Long-lived clients can opt into
//! [`SignatureMode::PerRequest`] through [`ClientConfig`].

pub mod auth;
pub mod client;
pub mod config;
pub mod constants;
pub mod endpoints;
pub mod error;
pub mod format;
pub mod transport;

// Re-export commonly used types
pub use auth::{AuthContext, Credentials};
pub use client::{BitcoinAverageClient, ConvertQuery, TickerQuery};
pub use config::{ClientConfig, SignatureMode};
pub use error::{ClientError, ClientResult, RequestError};
pub use format::format_price;
pub use transport::{ReqwestTransport, Transport};
