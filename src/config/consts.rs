// src/config/consts.rs

// Net config
pub const HOST: &str = "finance.yahoo.com";
pub const QUOTE_PREFIX: &str = "/quote/";
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/18.6 Safari/605.1.15";
pub const TIMEOUT_SECS: u64 = 20;

// Chain layout: page order of the quote tables
pub const CALLS_TABLE: usize = 0;
pub const PUTS_TABLE: usize = 1;
pub const CHAIN_COLUMNS: usize = 11;

// Demo default, same symbol the upstream page documents
pub const DEFAULT_TICKER: &str = "SPY";
