// src/chain/filter.rs

use crate::core::error::{ScrapeError, ScrapeResult};
use crate::core::quote::OptionQuote;

/// OTM subsets of both sides plus the boundary quote on each. Both legs are
/// cut at the call-side boundary strike, so the two at-the-money records
/// always agree on where the money is.
#[derive(Debug, Clone)]
pub struct OtmPartition {
    pub atm_call: OptionQuote,
    pub atm_put: OptionQuote,
    pub otm_calls: Vec<OptionQuote>,
    pub otm_puts: Vec<OptionQuote>,
}

/// Partition the chain around `price`. Calls above the price are OTM
/// (strict); puts at or below the call-side boundary strike are OTM (loose).
/// Input order is preserved: calls ascending, puts descending, so the first
/// element of each subset is the boundary quote.
pub fn filter_otm(
    price: f64,
    calls: &[OptionQuote],
    puts: &[OptionQuote],
) -> ScrapeResult<OtmPartition> {
    let otm_calls: Vec<OptionQuote> = calls.iter().filter(|q| q.strike > price).cloned().collect();
    let atm_call = otm_calls.first().cloned().ok_or(ScrapeError::NoOtmCalls)?;

    let boundary = atm_call.strike;
    let otm_puts: Vec<OptionQuote> = puts
        .iter()
        .filter(|q| q.strike <= boundary)
        .cloned()
        .collect();
    let atm_put = otm_puts.first().cloned().ok_or(ScrapeError::NoOtmPuts)?;

    Ok(OtmPartition {
        atm_call,
        atm_put,
        otm_calls,
        otm_puts,
    })
}
