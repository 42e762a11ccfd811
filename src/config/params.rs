// src/config/params.rs
use crate::config::consts::DEFAULT_TICKER;

#[derive(Clone, Debug)]
pub struct Params {
    pub ticker: String,             // equity symbol to scrape
    pub expiration: Option<String>, // epoch-seconds id to pin one chain page
}

impl Params {
    pub fn new() -> Self {
        Self {
            ticker: DEFAULT_TICKER.to_string(),
            expiration: None,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
