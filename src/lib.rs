// Publicly exported modules
pub mod errors;
pub mod models;

// Kept public so the binary can wire everything together,
// but these are internal modules in library usage
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod normalize;
#[doc(hidden)]
pub mod providers;
#[doc(hidden)]
pub mod server;
#[doc(hidden)]
pub mod symbols;

// Re-export common types for convenience
pub use errors::{MarketHubError, Result};
pub use models::{CryptoAsset, CurrencyPair, MarketIndex, NewsItem, StockQuote};
