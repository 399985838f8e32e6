pub struct Config {
    pub bind_addr: String,
    pub request_timeout_secs: u64,
    pub quote_base_url: String,
    pub supply_base_url: String,
    pub fx_base_url: String,
    pub news_base_url: String,
    pub fx_api_key: String,
    pub news_api_token: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            request_timeout_secs: 10,
            quote_base_url: "https://query1.finance.yahoo.com".to_string(),
            supply_base_url: "https://api.coingecko.com".to_string(),
            fx_base_url: "https://www.alphavantage.co".to_string(),
            news_base_url: "https://api.marketaux.com".to_string(),
            fx_api_key: String::new(),
            news_api_token: String::new(),
        }
    }

    pub fn with_bind_addr(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_fx_api_key(mut self, key: &str) -> Self {
        self.fx_api_key = key.to_string();
        self
    }

    pub fn with_news_api_token(mut self, token: &str) -> Self {
        self.news_api_token = token.to_string();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
