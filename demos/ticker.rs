use bitcoinaverage_sdk::{
    BitcoinAverageClient, ClientConfig, ClientError, ConvertQuery, Credentials, SignatureMode,
    TickerQuery,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("BitcoinAverage Ticker Example");
    println!("=============================");

    // Falls back to unsigned requests when the keys are not in the environment
    let credentials = Credentials::from_env().unwrap_or_default();
    let config = ClientConfig::new().signature_mode(SignatureMode::PerRequest);
    let client = BitcoinAverageClient::with_config(credentials, config)?;

    let query = TickerQuery::new("USD,EUR", "BTC", "global");
    println!("GET {}", client.ticker_url(&query));

    match client.ticker(&query).await {
        Ok(ticker) => {
            for symbol in ["BTCUSD", "BTCEUR"] {
                if let Some(last) = ticker[symbol]["last"].as_f64() {
                    let fiat = &symbol[3..];
                    println!("{:<8} {} {}", symbol, client.format_price(last, fiat), fiat);
                }
            }
        }
        Err(ClientError::EmptyResult { url }) => println!("No data for {}", url),
        Err(e) => eprintln!("Ticker request failed: {}", e),
    }

    let convert = ConvertQuery::new("BTC", "USD", 0.5, "global");
    match client.convert(&convert).await {
        Ok(result) => println!("\n0.5 BTC -> USD: {}", result),
        Err(e) => eprintln!("Convert request failed: {}", e),
    }

    Ok(())
}
