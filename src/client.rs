//! BitcoinAverage API client
//!
//! Holds the credentials, the resolved endpoint templates and the auth
//! context. Each public call builds one URL, performs one GET and decodes the
//! body as untyped JSON.

use crate::{
    auth::{AuthContext, Credentials},
    config::{ClientConfig, SignatureMode},
    constants::{
        DEFAULT_AMOUNT, DEFAULT_CRYPTO, DEFAULT_FIAT, DEFAULT_MARKET, EMPTY_RESULT_BODY,
    },
    endpoints::{Endpoint, EndpointTable},
    error::{ClientError, ClientResult},
    format::{format_amount, format_price},
    transport::{ReqwestTransport, Transport},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Instant;

/// Parameters for the ticker endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerQuery {
    /// Fiat currency code, or a comma separated list of them
    pub fiat: String,
    /// Crypto currency code, or a comma separated list of them
    pub crypto: String,
    /// `global` or `local`
    pub market: String,
}

impl Default for TickerQuery {
    fn default() -> Self {
        Self::new(DEFAULT_FIAT, DEFAULT_CRYPTO, DEFAULT_MARKET)
    }
}

impl TickerQuery {
    pub fn new(
        fiat: impl Into<String>,
        crypto: impl Into<String>,
        market: impl Into<String>,
    ) -> Self {
        Self {
            fiat: fiat.into(),
            crypto: crypto.into(),
            market: market.into(),
        }
    }
}

/// Parameters for the convert endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertQuery {
    /// Source currency
    pub from: String,
    /// Target currency
    pub to: String,
    /// Amount of the source currency
    ///
    /// Rendered into the URL with at most 14 significant digits.
    pub amount: f64,
    /// `global` or `local`
    pub market: String,
}

impl Default for ConvertQuery {
    fn default() -> Self {
        Self::new(DEFAULT_CRYPTO, DEFAULT_FIAT, DEFAULT_AMOUNT, DEFAULT_MARKET)
    }
}

impl ConvertQuery {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        amount: f64,
        market: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
            market: market.into(),
        }
    }
}

/// BitcoinAverage API client
///
/// # Example
/// ```no_run
/// use bitcoinaverage_sdk::{BitcoinAverageClient, TickerQuery};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = BitcoinAverageClient::new(Some("public"), Some("secret"))?;
/// let ticker = client.ticker(&TickerQuery::new("USD,EUR", "BTC", "global")).await?;
/// println!("{}", ticker["BTCUSD"]["last"]);
/// # Ok(())
/// # }
/// ```
pub struct BitcoinAverageClient {
    credentials: Credentials,
    auth: AuthContext,
    endpoints: EndpointTable,
    transport: Arc<dyn Transport>,
    signature_mode: SignatureMode,
}

impl BitcoinAverageClient {
    /// Creates a client for the public API with default configuration
    ///
    /// Signs once and resolves the endpoint templates; no network I/O happens here.
    pub fn new(public_key: Option<&str>, secret_key: Option<&str>) -> ClientResult<Self> {
        Self::with_config(
            Credentials::new(public_key, secret_key),
            ClientConfig::default(),
        )
    }

    /// Creates a client with a custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> ClientResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(&config)?);
        Ok(Self::with_transport(credentials, config, transport))
    }

    /// Creates a client with a custom transport
    ///
    /// This is primarily for testing with mock transports.
    pub fn with_transport(
        credentials: Credentials,
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let auth = AuthContext::new(&credentials);
        let endpoints = EndpointTable::new(&config.base_url);

        tracing::info!(
            base_url = %config.base_url,
            transport = transport.transport_name(),
            signature_mode = ?config.signature_mode,
            "Created BitcoinAverage client"
        );

        Self {
            credentials,
            auth,
            endpoints,
            transport,
            signature_mode: config.signature_mode,
        }
    }

    /// Auth context computed at construction
    pub fn auth_context(&self) -> &AuthContext {
        &self.auth
    }

    /// Returns the configured signature mode
    pub fn signature_mode(&self) -> SignatureMode {
        self.signature_mode
    }

    /// Builds the ticker request URL
    pub fn ticker_url(&self, query: &TickerQuery) -> String {
        self.endpoints.resolve(
            Endpoint::Ticker,
            &[
                ("fiat", query.fiat.as_str()),
                ("crypto", query.crypto.as_str()),
                ("market", query.market.as_str()),
            ],
        )
    }

    /// Builds the convert request URL
    pub fn convert_url(&self, query: &ConvertQuery) -> String {
        let amount = format_amount(query.amount);
        self.endpoints.resolve(
            Endpoint::Convert,
            &[
                ("source_cur", query.from.as_str()),
                ("target_cur", query.to.as_str()),
                ("amount", amount.as_str()),
                ("market", query.market.as_str()),
            ],
        )
    }

    /// Gets ticker data for the given currencies and market
    pub async fn ticker(&self, query: &TickerQuery) -> ClientResult<Value> {
        let url = self.ticker_url(query);
        self.output(&self.request(Endpoint::Ticker, &url).await?)
    }

    /// Converts an amount between two currencies
    pub async fn convert(&self, query: &ConvertQuery) -> ClientResult<Value> {
        let url = self.convert_url(query);
        self.output(&self.request(Endpoint::Convert, &url).await?)
    }

    /// Lists all symbols the API knows about
    pub async fn symbols(&self) -> ClientResult<Value> {
        let url = self.endpoints.resolve(Endpoint::Symbols, &[]);
        self.output(&self.request(Endpoint::Symbols, &url).await?)
    }

    /// Lists the symbols available in one market
    pub async fn symbols_market(&self, market: &str) -> ClientResult<Value> {
        let url = self
            .endpoints
            .resolve(Endpoint::SymbolsMarket, &[("market", market)]);
        self.output(&self.request(Endpoint::SymbolsMarket, &url).await?)
    }

    /// Gets the ticker for a single symbol, e.g. `BTCUSD`
    pub async fn ticker_symbol(&self, market: &str, symbol: &str) -> ClientResult<Value> {
        let url = self.endpoints.resolve(
            Endpoint::TickerSymbol,
            &[("market", market), ("symbol", symbol)],
        );
        self.output(&self.request(Endpoint::TickerSymbol, &url).await?)
    }

    /// Formats an amount with the API's display convention
    pub fn format_price(&self, amount: f64, currency: &str) -> String {
        format_price(amount, currency)
    }

    /// Performs a signed GET and returns the raw body
    async fn request(&self, endpoint: Endpoint, url: &str) -> ClientResult<String> {
        let auth = match self.signature_mode {
            SignatureMode::Fixed => Cow::Borrowed(&self.auth),
            SignatureMode::PerRequest => Cow::Owned(AuthContext::new(&self.credentials)),
        };

        let endpoint = endpoint.name();
        tracing::debug!(endpoint, url, "Requesting BitcoinAverage endpoint");
        let start = Instant::now();

        let body = self.transport.get(url, &auth).await.map_err(|e| {
            tracing::warn!(endpoint, url, error = %e, "BitcoinAverage request failed");
            ClientError::from(e)
        })?;

        tracing::debug!(
            endpoint,
            url,
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Received BitcoinAverage response"
        );

        if body == EMPTY_RESULT_BODY {
            return Err(ClientError::empty_result(url));
        }

        Ok(body)
    }

    /// Decodes a response body
    fn output(&self, text: &str) -> ClientResult<Value> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sign;
    use crate::error::RequestError;
    use crate::transport::mock::{MockResponse, MockTransport};
    use serde_json::json;

    fn client_with(mock: &MockTransport, mode: SignatureMode) -> BitcoinAverageClient {
        BitcoinAverageClient::with_transport(
            Credentials::new(Some("pub_key"), Some("secret_key")),
            ClientConfig::new().signature_mode(mode),
            Arc::new(mock.clone()),
        )
    }

    fn client(mock: &MockTransport) -> BitcoinAverageClient {
        client_with(mock, SignatureMode::Fixed)
    }

    #[test]
    fn test_new_does_not_touch_network() {
        let client = BitcoinAverageClient::new(Some("pub_key"), Some("secret_key")).unwrap();
        assert!(client.auth_context().signature().contains(".pub_key."));
    }

    #[test]
    fn test_ticker_url_substitutes_all_placeholders() {
        let client = client(&MockTransport::new());
        let url = client.ticker_url(&TickerQuery::new("USD", "BTC", "global"));

        assert_eq!(
            url,
            "https://apiv2.bitcoinaverage.com/indices/global/ticker/all?crypto=BTC&fiat=USD"
        );
        assert!(!url.contains('{') && !url.contains('}'));
    }

    #[test]
    fn test_default_queries() {
        let client = client(&MockTransport::new());

        assert_eq!(
            client.ticker_url(&TickerQuery::default()),
            "https://apiv2.bitcoinaverage.com/indices/global/ticker/all?crypto=BTC&fiat=EUR"
        );
        assert_eq!(
            client.convert_url(&ConvertQuery::default()),
            "https://apiv2.bitcoinaverage.com/convert/global?from=BTC&to=EUR&amount=1"
        );
    }

    #[test]
    fn test_convert_url_renders_fractional_amount() {
        let client = client(&MockTransport::new());
        let url = client.convert_url(&ConvertQuery::new("ETH", "USD", 2.5, "local"));
        assert_eq!(
            url,
            "https://apiv2.bitcoinaverage.com/convert/local?from=ETH&to=USD&amount=2.5"
        );
    }

    #[test]
    fn test_queries_deserialize_with_defaults() {
        let ticker: TickerQuery = serde_json::from_str(r#"{"fiat":"USD"}"#).unwrap();
        assert_eq!(ticker, TickerQuery::new("USD", "BTC", "global"));

        let convert: ConvertQuery = serde_json::from_str(r#"{"amount":0.25}"#).unwrap();
        assert_eq!(convert, ConvertQuery::new("BTC", "EUR", 0.25, "global"));
    }

    #[tokio::test]
    async fn test_ticker_decodes_body() {
        let mock = MockTransport::with_body(r#"{"BTC":{"last":50000}}"#);
        let client = client(&mock);

        let value = client
            .ticker(&TickerQuery::new("USD", "BTC", "global"))
            .await
            .unwrap();

        assert_eq!(value, json!({"BTC": {"last": 50000}}));
        assert_eq!(
            mock.urls(),
            vec!["https://apiv2.bitcoinaverage.com/indices/global/ticker/all?crypto=BTC&fiat=USD"]
        );
    }

    #[tokio::test]
    async fn test_empty_object_is_empty_result() {
        let mock = MockTransport::with_body("{}");
        let client = client(&mock);

        let err = client.ticker(&TickerQuery::default()).await.unwrap_err();
        assert!(err.is_empty_result());
    }

    #[tokio::test]
    async fn test_empty_object_with_whitespace_decodes() {
        let mock = MockTransport::with_body("{ }");
        let client = client(&mock);

        let value = client.ticker(&TickerQuery::default()).await.unwrap();
        assert_eq!(value, json!({}));
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let mock = MockTransport::with_body("<html>502 Bad Gateway</html>");
        let client = client(&mock);

        let err = client.convert(&ConvertQuery::default()).await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_transport_failures_are_request_errors() {
        let mock = MockTransport::new();
        mock.push_response(MockResponse::Status(401, "invalid signature".to_string()));
        mock.push_response(MockResponse::Timeout);
        let client = client(&mock);

        let status = client.symbols().await.unwrap_err();
        assert!(matches!(
            status,
            ClientError::Request(RequestError::Status { status: 401, .. })
        ));

        let timeout = client.symbols().await.unwrap_err();
        assert!(matches!(timeout, ClientError::Request(RequestError::Timeout)));
    }

    #[tokio::test]
    async fn test_convert_is_idempotent() {
        let mock = MockTransport::with_body(r#"{"price":42.1}"#);
        let client = client(&mock);
        let query = ConvertQuery::new("BTC", "USD", 3.0, "global");

        client.convert(&query).await.unwrap();
        client.convert(&query).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], requests[1]);
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BitcoinAverageClient>();
    }

    #[tokio::test]
    async fn test_concurrent_converts_share_auth() {
        let mock = MockTransport::with_body(r#"{"price":42.1}"#);
        let client = Arc::new(client(&mock));
        let query = ConvertQuery::new("BTC", "USD", 0.1 + 0.2, "global");

        let (a, b) = tokio::join!(client.convert(&query), client.convert(&query));
        assert_eq!(a.unwrap(), b.unwrap());

        let handle = {
            let client = client.clone();
            let query = query.clone();
            tokio::spawn(async move { client.convert(&query).await })
        };
        handle.await.unwrap().unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 3);
        assert!(requests.iter().all(|r| r == &requests[0]));
        assert_eq!(
            requests[0].url,
            "https://apiv2.bitcoinaverage.com/convert/global?from=BTC&to=USD&amount=0.3"
        );
    }

    #[tokio::test]
    async fn test_fixed_mode_reuses_construction_signature() {
        let mock = MockTransport::new();
        let client = client(&mock);
        let credentials = Credentials::new(Some("pub_key"), Some("secret_key"));
        let expected = format!(
            "X-Signature: {}",
            sign(client.auth_context().timestamp(), &credentials)
        );

        client.symbols().await.unwrap();
        client.symbols_market("local").await.unwrap();

        for request in mock.requests() {
            assert_eq!(request.method, "GET");
            assert_eq!(request.header, expected);
        }
    }

    #[tokio::test]
    async fn test_per_request_mode_signs_each_call() {
        let mock = MockTransport::new();
        let client = client_with(&mock, SignatureMode::PerRequest);
        let constructed_at = client.auth_context().timestamp();

        client.symbols().await.unwrap();

        let header = &mock.requests()[0].header;
        let signature = header.strip_prefix("X-Signature: ").unwrap();
        let timestamp: i64 = signature.split('.').next().unwrap().parse().unwrap();
        assert!(timestamp >= constructed_at);
        assert!(signature.contains(".pub_key."));
    }

    #[tokio::test]
    async fn test_thin_endpoint_urls() {
        let mock = MockTransport::new();
        let client = client(&mock);

        client.symbols().await.unwrap();
        client.symbols_market("local").await.unwrap();
        client.ticker_symbol("global", "BTCUSD").await.unwrap();

        assert_eq!(
            mock.urls(),
            vec![
                "https://apiv2.bitcoinaverage.com/constants/symbols",
                "https://apiv2.bitcoinaverage.com/constants/symbols/local",
                "https://apiv2.bitcoinaverage.com/indices/global/ticker/BTCUSD",
            ]
        );
    }

    #[test]
    fn test_format_price_delegates() {
        let client = client(&MockTransport::new());
        assert_eq!(client.format_price(1234.5, "BTC"), "1.234,50000000");
    }
}
