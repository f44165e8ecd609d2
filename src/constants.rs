//! Constants for the BitcoinAverage client
//!
//! Compile-time defaults. Anything a caller may want to override lives in
//! [`ClientConfig`](crate::config::ClientConfig) and starts from these values.

/// BitcoinAverage API base URL
pub const BASE_URL: &str = "https://apiv2.bitcoinaverage.com";

/// HTTP request timeout (in seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// User agent for HTTP requests
pub const USER_AGENT: &str = "bitcoinaverage-sdk/0.1.0";

/// Name of the authentication header
pub const SIGNATURE_HEADER: &str = "X-Signature";

/// Body the API returns when it has no data for the requested parameters
pub const EMPTY_RESULT_BODY: &str = "{}";

/// Environment variable holding the public key
pub const PUBLIC_KEY_ENV: &str = "BITCOINAVERAGE_PUBLIC_KEY";

/// Environment variable holding the secret key
pub const SECRET_KEY_ENV: &str = "BITCOINAVERAGE_SECRET_KEY";

/// Default fiat currency for ticker and conversion queries
pub const DEFAULT_FIAT: &str = "EUR";

/// Default crypto currency for ticker and conversion queries
pub const DEFAULT_CRYPTO: &str = "BTC";

/// Default market (global price index)
pub const DEFAULT_MARKET: &str = "global";

/// Default conversion amount
pub const DEFAULT_AMOUNT: f64 = 1.0;

/// Currency that is formatted with satoshi precision
pub const BTC_CURRENCY: &str = "BTC";

/// Decimal places used when formatting BTC amounts
pub const BTC_DECIMALS: usize = 8;

/// Decimal places used when formatting any other currency
pub const FIAT_DECIMALS: usize = 2;
