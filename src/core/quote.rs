// src/core/quote.rs

/// One contract row, cleaned and typed. `last_trade_date` stays verbatim as
/// the page quotes it; the chain never parses it into a calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionQuote {
    pub contract: String,
    pub last_trade_date: String,
    pub strike: f64,
    pub last_price: f64,
    pub bid: f64,
    pub ask: f64,
    pub change: f64,
    pub percent_change: f64,
    pub volume: u64,
    pub open_interest: u64,
    pub implied_volatility: f64,
}

/// Both sides of a chain, rebuilt from scratch on every fetch.
/// Calls are sorted strike-ascending and puts strike-descending; the
/// asymmetry lets the OTM scan take the first element on each side.
#[derive(Debug, Clone)]
pub struct OptionChain {
    pub calls: Vec<OptionQuote>,
    pub puts: Vec<OptionQuote>,
}

/// Spot price as quoted on the page. Transient; no history kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub price: f64,
    /// Percent units, sign preserved, `%` stripped.
    pub percent_change: f64,
}
