// src/chain/parse.rs

// Table rows → typed quotes. One code path covers calls and puts; the chain
// builder pins which page table is which and applies the sort contract.

use crate::config::consts::{CALLS_TABLE, CHAIN_COLUMNS, PUTS_TABLE};
use crate::core::dom;
use crate::core::error::{ScrapeError, ScrapeResult};
use crate::core::quote::{OptionChain, OptionQuote};
use crate::core::sanitize::clean_cell;

/// Build the chain from the raw page. Page order is a contract here: table 0
/// is calls, table 1 is puts. Calls come out strike-ascending and puts
/// strike-descending, so the first quote past the money on each side is the
/// at-the-money boundary.
pub fn parse_chain(page: &str) -> ScrapeResult<OptionChain> {
    let tables = dom::tables(page);
    tracing::debug!(tables = tables.len(), "scanning quote tables");

    let calls_rows = tables
        .get(CALLS_TABLE)
        .ok_or(ScrapeError::MissingTable(CALLS_TABLE))?;
    let puts_rows = tables
        .get(PUTS_TABLE)
        .ok_or(ScrapeError::MissingTable(PUTS_TABLE))?;

    let mut calls = parse_rows(calls_rows)?;
    let mut puts = parse_rows(puts_rows)?;
    tracing::debug!(calls = calls.len(), puts = puts.len(), "chain parsed");

    calls.sort_by(|a, b| a.strike.total_cmp(&b.strike));
    puts.sort_by(|a, b| b.strike.total_cmp(&a.strike));

    Ok(OptionChain { calls, puts })
}

/// Parse one table's rows into quotes. The first row is the header and is
/// skipped by position.
pub fn parse_rows(rows: &[Vec<String>]) -> ScrapeResult<Vec<OptionQuote>> {
    rows.iter().skip(1).map(|cells| parse_row(cells)).collect()
}

// Source schema, left to right:
// contract, lastTradeDate, strike, lastPrice, bid, ask, change,
// percentChange, volume, openInterest, iv
fn parse_row(cells: &[String]) -> ScrapeResult<OptionQuote> {
    if cells.len() != CHAIN_COLUMNS {
        return Err(ScrapeError::RowShape {
            expected: CHAIN_COLUMNS,
            got: cells.len(),
        });
    }

    let c: Vec<String> = cells.iter().map(|cell| clean_cell(cell)).collect();

    Ok(OptionQuote {
        contract: c[0].clone(),
        last_trade_date: c[1].clone(),
        strike: decimal("strike", &c[2])?,
        last_price: decimal("lastPrice", &c[3])?,
        bid: decimal("bid", &c[4])?,
        ask: decimal("ask", &c[5])?,
        change: decimal("change", &c[6])?,
        percent_change: decimal("percentChange", &c[7])?,
        volume: integer("volume", &c[8])?,
        open_interest: integer("openInterest", &c[9])?,
        implied_volatility: decimal("iv", &c[10])?,
    })
}

fn decimal(field: &'static str, value: &str) -> ScrapeResult<f64> {
    value.parse().map_err(|_| ScrapeError::TypeCoercion {
        field,
        value: value.to_string(),
    })
}

fn integer(field: &'static str, value: &str) -> ScrapeResult<u64> {
    value.parse().map_err(|_| ScrapeError::TypeCoercion {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn header() -> Vec<String> {
        Vec::new() // header rows surface as empty from the DOM layer
    }

    #[test]
    fn cleans_and_types_a_full_row() {
        let rows = vec![
            header(),
            row(&[
                "SPY240119C00400000",
                "2024-01-10",
                "400.00",
                "12,345.67",
                "-",
                "13.20",
                "+1.50",
                "+12.5%",
                "-",
                "1,200",
                "18.2%",
            ]),
        ];

        let quotes = parse_rows(&rows).unwrap();
        assert_eq!(quotes.len(), 1);
        let q = &quotes[0];
        assert_eq!(q.contract, "SPY240119C00400000");
        assert_eq!(q.last_trade_date, "2024-01-10");
        assert_eq!(q.strike, 400.00);
        assert_eq!(q.last_price, 12345.67);
        assert_eq!(q.bid, 0.0);
        assert_eq!(q.ask, 13.20);
        assert_eq!(q.change, 1.50);
        assert_eq!(q.percent_change, 12.5);
        assert_eq!(q.volume, 0);
        assert_eq!(q.open_interest, 1200);
        assert_eq!(q.implied_volatility, 18.2);
    }

    #[test]
    fn bad_cell_names_column_and_value() {
        let rows = vec![
            header(),
            row(&[
                "C1", "d1", "400.00", "1.0", "1.0", "1.0", "1.0", "1.0", "n/a", "0", "1.0%",
            ]),
        ];
        let err = parse_rows(&rows).unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::TypeCoercion { field: "volume", ref value } if value == "n/a"
        ));
    }

    #[test]
    fn short_row_is_a_shape_error() {
        let rows = vec![header(), row(&["only", "three", "cells"])];
        let err = parse_rows(&rows).unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::RowShape {
                expected: 11,
                got: 3
            }
        ));
    }

    #[test]
    fn chain_sorts_calls_up_and_puts_down() {
        let table = |strikes: &[&str]| -> String {
            let mut t = String::from("<table><thead><tr><th>h</th></tr></thead><tbody>");
            for s in strikes {
                t.push_str(&format!(
                    "<tr><td>c{s}</td><td>d</td><td>{s}</td><td>1.0</td><td>1.0</td>\
                     <td>1.0</td><td>0.5</td><td>0.5%</td><td>1</td><td>1</td><td>9.9%</td></tr>"
                ));
            }
            t.push_str("</tbody></table>");
            t
        };
        let page = format!(
            "<html><body>{}{}</body></html>",
            table(&["450", "440", "460"]),
            table(&["440", "460", "450"]),
        );

        let chain = parse_chain(&page).unwrap();
        let call_strikes: Vec<f64> = chain.calls.iter().map(|q| q.strike).collect();
        let put_strikes: Vec<f64> = chain.puts.iter().map(|q| q.strike).collect();
        assert_eq!(call_strikes, vec![440.0, 450.0, 460.0]);
        assert_eq!(put_strikes, vec![460.0, 450.0, 440.0]);
    }

    #[test]
    fn one_table_is_not_a_chain() {
        let page = "<html><body><table><tr><td>x</td></tr></table></body></html>";
        let err = parse_chain(page).unwrap_err();
        assert!(matches!(err, ScrapeError::MissingTable(1)));
    }
}
