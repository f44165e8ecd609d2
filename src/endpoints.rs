//! Endpoint templates and URL placeholder substitution

/// API endpoints known to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// All supported symbols
    Symbols,
    /// Symbols for one market
    SymbolsMarket,
    /// Tickers for a set of crypto/fiat currencies
    Ticker,
    /// Ticker for a single symbol
    TickerSymbol,
    /// Price conversion
    Convert,
}

impl Endpoint {
    /// Symbolic name of the endpoint
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Symbols => "symbols",
            Endpoint::SymbolsMarket => "symbolsMarket",
            Endpoint::Ticker => "ticker",
            Endpoint::TickerSymbol => "tickerSymbol",
            Endpoint::Convert => "convert",
        }
    }

    /// Path template relative to the API base URL
    pub fn path_template(&self) -> &'static str {
        match self {
            Endpoint::Symbols => "/constants/symbols",
            Endpoint::SymbolsMarket => "/constants/symbols/{market}",
            Endpoint::Ticker => "/indices/{market}/ticker/all?crypto={crypto}&fiat={fiat}",
            Endpoint::TickerSymbol => "/indices/{market}/ticker/{symbol}",
            Endpoint::Convert => {
                "/convert/{market}?from={source_cur}&to={target_cur}&amount={amount}"
            }
        }
    }

    /// Get all endpoints
    pub fn all() -> &'static [Endpoint] {
        &[
            Endpoint::Symbols,
            Endpoint::SymbolsMarket,
            Endpoint::Ticker,
            Endpoint::TickerSymbol,
            Endpoint::Convert,
        ]
    }
}

/// Endpoint templates resolved against a base URL
///
/// Built once per client; the table is never modified afterwards.
#[derive(Debug, Clone)]
pub struct EndpointTable {
    // Indexed by `Endpoint as usize`, same order as `Endpoint::all()`
    urls: Vec<String>,
}

impl EndpointTable {
    /// Prefixes every template with `base_url`
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        let urls = Endpoint::all()
            .iter()
            .map(|endpoint| format!("{}{}", base_url, endpoint.path_template()))
            .collect();

        Self { urls }
    }

    /// Absolute URL template for an endpoint, placeholders still in place
    pub fn template(&self, endpoint: Endpoint) -> &str {
        &self.urls[endpoint as usize]
    }

    /// Fills the placeholders of an endpoint template
    pub fn resolve(&self, endpoint: Endpoint, params: &[(&str, &str)]) -> String {
        prep_all_url(params, self.template(endpoint))
    }
}

/// Replaces every occurrence of `{key}` in `url` with `value`
///
/// Plain substitution: the value is inserted as-is, without URL encoding.
pub fn prep_url(key: &str, value: &str, url: &str) -> String {
    url.replace(&format!("{{{}}}", key), value)
}

/// Applies [`prep_url`] once per parameter, in order
pub fn prep_all_url(params: &[(&str, &str)], url: &str) -> String {
    params
        .iter()
        .fold(url.to_string(), |url, (key, value)| prep_url(key, value, &url))
}
