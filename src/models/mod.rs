pub mod market;
pub mod news;

pub use market::{CryptoAsset, CurrencyPair, MarketIndex, StockQuote};
pub use news::NewsItem;
