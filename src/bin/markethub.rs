use markethub::config::Config;
use markethub::providers::{
    AlphaVantageClient, CoinGeckoClient, MarketAuxClient, YahooFinanceClient,
};
use markethub::server::{self, AppState};

use clap::{App, Arg};
use log::info;
use std::error::Error;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    let matches = App::new("MarketHub")
        .version("0.1.0")
        .author("MarketHub Team")
        .about("Market data aggregation service")
        .arg(
            Arg::with_name("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .help("Port to listen on")
                .takes_value(true)
                .default_value("3000"),
        )
        .arg(
            Arg::with_name("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .help("Per-call timeout for upstream requests")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("fx-key")
                .long("fx-key")
                .value_name("KEY")
                .help("FX provider API key (falls back to MARKETHUB_FX_KEY)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("news-token")
                .long("news-token")
                .value_name("TOKEN")
                .help("News provider API token (falls back to MARKETHUB_NEWS_TOKEN)")
                .takes_value(true),
        )
        .get_matches();

    let port = matches
        .value_of("port")
        .unwrap_or("3000")
        .parse::<u16>()
        .unwrap_or(3000);
    let timeout = matches
        .value_of("timeout")
        .unwrap_or("10")
        .parse::<u64>()
        .unwrap_or(10);

    let fx_key = matches
        .value_of("fx-key")
        .map(str::to_string)
        .or_else(|| std::env::var("MARKETHUB_FX_KEY").ok())
        .unwrap_or_default();
    let news_token = matches
        .value_of("news-token")
        .map(str::to_string)
        .or_else(|| std::env::var("MARKETHUB_NEWS_TOKEN").ok())
        .unwrap_or_default();

    let config = Config::new()
        .with_bind_addr(&format!("0.0.0.0:{}", port))
        .with_request_timeout_secs(timeout)
        .with_fx_api_key(&fx_key)
        .with_news_api_token(&news_token);

    info!("Using upstream timeout of {}s", config.request_timeout_secs);

    let state = Arc::new(AppState {
        quotes: Arc::new(YahooFinanceClient::new(
            &config.quote_base_url,
            config.request_timeout_secs,
        )?),
        supply: Arc::new(CoinGeckoClient::new(
            &config.supply_base_url,
            config.request_timeout_secs,
        )?),
        fx: Arc::new(AlphaVantageClient::new(
            &config.fx_base_url,
            &config.fx_api_key,
            config.request_timeout_secs,
        )?),
        news: Arc::new(MarketAuxClient::new(
            &config.news_base_url,
            &config.news_api_token,
            config.request_timeout_secs,
        )?),
    });

    server::serve(&config.bind_addr, state).await?;

    Ok(())
}
