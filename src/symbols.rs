//! Ticker symbol conversion utilities
//!
//! The quote provider keys crypto assets by ticker (e.g. "BTC-USD") while
//! the supply provider uses its own slug scheme (e.g. "bitcoin"). The table
//! below covers the top assets; anything else falls back to a heuristic.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Mapping from quote-provider tickers to supply-provider ids.
/// A few entries carry the quote provider's numeric disambiguation
/// suffix (TON11419, UNI7083), which both appear in the wild.
static TICKER_TO_SUPPLY_ID: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("BTC-USD", "bitcoin"),
        ("ETH-USD", "ethereum"),
        ("BNB-USD", "binancecoin"),
        ("USDT-USD", "tether"),
        ("USDC-USD", "usd-coin"),
        ("SOL-USD", "solana"),
        ("ADA-USD", "cardano"),
        ("XRP-USD", "ripple"),
        ("DOGE-USD", "dogecoin"),
        ("AVAX-USD", "avalanche-2"),
        ("MATIC-USD", "matic-network"),
        ("TRX-USD", "tron"),
        ("DOT-USD", "polkadot"),
        ("SHIB-USD", "shiba-inu"),
        ("WBTC-USD", "wrapped-bitcoin"),
        ("BCH-USD", "bitcoin-cash"),
        ("LINK-USD", "chainlink"),
        ("LTC-USD", "litecoin"),
        ("TON11419-USD", "the-open-network"),
        ("TON-USD", "the-open-network"),
        ("ICP-USD", "internet-computer"),
        ("DAI-USD", "dai"),
        ("UNI7083-USD", "uniswap"),
        ("UNI-USD", "uniswap"),
        ("XLM-USD", "stellar"),
        ("APT-USD", "aptos"),
        ("ATOM-USD", "cosmos"),
        ("FIL-USD", "filecoin"),
        ("OKB-USD", "okb"),
        ("ETC-USD", "ethereum-classic"),
        ("LEO-USD", "leo-token"),
        ("CRO-USD", "crypto-com-chain"),
        ("ARB-USD", "arbitrum"),
        ("NEAR-USD", "near"),
        ("OP-USD", "optimism"),
        ("HBAR-USD", "hedera-hashgraph"),
        ("VET-USD", "vechain"),
        ("MKR-USD", "maker"),
        ("GRT-USD", "the-graph"),
        ("QNT-USD", "quant-network"),
        ("AAVE-USD", "aave"),
        ("ALGO-USD", "algorand"),
        ("STX-USD", "stacks"),
        ("EGLD-USD", "multiversx"),
        ("SAND-USD", "the-sandbox"),
        ("XTZ-USD", "tezos"),
    ])
});

/// Resolve the supply-provider id for a quote-provider ticker.
///
/// Never fails: unmapped tickers yield a best-effort guess by stripping
/// the "-USD" suffix and lowercasing the remainder. Callers treat a
/// failed supply lookup for a bad guess as supply = 0, not as an error.
///
/// # Examples
/// - "BTC-USD" -> "bitcoin"
/// - "ETH-USD" -> "ethereum"
/// - "ZZZ-USD" -> "zzz" (fallback)
pub fn supply_id(ticker: &str) -> String {
    let ticker = ticker.trim().to_uppercase();

    if let Some(id) = TICKER_TO_SUPPLY_ID.get(ticker.as_str()) {
        return id.to_string();
    }

    ticker
        .strip_suffix("-USD")
        .unwrap_or(&ticker)
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_tickers() {
        assert_eq!(supply_id("BTC-USD"), "bitcoin");
        assert_eq!(supply_id("ETH-USD"), "ethereum");
        assert_eq!(supply_id("AVAX-USD"), "avalanche-2");
        assert_eq!(supply_id("TON11419-USD"), "the-open-network");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(supply_id("eth-usd"), "ethereum");
        assert_eq!(supply_id(" btc-usd "), "bitcoin");
    }

    #[test]
    fn test_unmapped_falls_back_to_suffix_strip() {
        assert_eq!(supply_id("ZZZ-USD"), "zzz");
        assert_eq!(supply_id("PEPE-USD"), "pepe");
    }

    #[test]
    fn test_no_usd_suffix() {
        // No suffix to strip, just lowercase
        assert_eq!(supply_id("BTC"), "btc");
        assert_eq!(supply_id("BTC-EUR"), "btc-eur");
    }
}
