// src/core/mod.rs

pub mod dom;
pub mod error;
pub mod extract;
pub mod net;
pub mod quote;
pub mod sanitize;

pub use error::{ScrapeError, ScrapeResult};
pub use quote::{OptionChain, OptionQuote, PriceQuote};
