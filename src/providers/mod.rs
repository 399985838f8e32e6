pub mod alphavantage;
pub mod base;
pub mod coingecko;
pub mod marketaux;
pub mod yahoo;

pub use alphavantage::AlphaVantageClient;
pub use base::{
    FxProvider, NewsProvider, QuoteProvider, RawArticle, RawCoin, RawFxBar, RawFxRate,
    RawFxSeries, RawQuote, SupplyProvider,
};
pub use coingecko::CoinGeckoClient;
pub use marketaux::MarketAuxClient;
pub use yahoo::YahooFinanceClient;
