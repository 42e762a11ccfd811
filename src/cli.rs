// src/cli.rs
use std::env;

use chrono::Utc;
use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

use crate::chain::{Period, expiration_date, filter_otm, parse_chain, select_periods};
use crate::config::consts::DEFAULT_TICKER;
use crate::config::params::Params;
use crate::core::quote::OptionQuote;
use crate::core::{extract, net};

/// Scrape one ticker and print the demo report: every expiration with its
/// decoded date, the named period picks, then the at-the-money legs.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let params = parse_cli()?;

    let page = net::fetch_options_page(&params.ticker, params.expiration.as_deref())?;
    let quote = extract::price_quote(&page)?;
    let expirations = extract::expirations(&page)?;
    let chain = parse_chain(&page)?;

    println!(
        "{} {} ({:+.2}%)",
        params.ticker, quote.price, quote.percent_change
    );
    println!();

    for exp in &expirations {
        match expiration_date(exp) {
            Some(date) => println!("{exp} {date}"),
            None => println!("{exp} (undecodable)"),
        }
    }

    let periods = select_periods(Utc::now().date_naive(), &expirations);
    println!();
    for period in [Period::Weekly, Period::Monthly, Period::Yearly] {
        if let Some(exp) = periods.get(period) {
            match expiration_date(exp) {
                Some(date) => println!("{:<8} {exp} {date}", period.as_str()),
                None => println!("{:<8} {exp}", period.as_str()),
            }
        }
    }

    let filtered = filter_otm(quote.price, &chain.calls, &chain.puts)?;
    println!();
    println!("atm call");
    print_quote(&filtered.atm_call);
    println!();
    println!("atm put");
    print_quote(&filtered.atm_put);

    Ok(())
}

fn parse_cli() -> Result<Params> {
    let mut params = Params::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-h" | "--help" => {
                eprintln!("Usage: oc_scrape [TICKER]");
                eprintln!();
                eprintln!("Scrapes the options chain for TICKER (default {DEFAULT_TICKER}).");
                std::process::exit(0);
            }
            sym if !sym.starts_with('-') => params.ticker = sym.to_ascii_uppercase(),
            other => return Err(eyre!("Unknown arg: {}", other)),
        }
    }

    Ok(params)
}

fn print_quote(q: &OptionQuote) {
    println!("  contract       {}", q.contract);
    println!("  last trade     {}", q.last_trade_date);
    println!("  strike         {}", q.strike);
    println!("  last price     {}", q.last_price);
    println!("  bid            {}", q.bid);
    println!("  ask            {}", q.ask);
    println!("  change         {} ({:+.2}%)", q.change, q.percent_change);
    println!("  volume         {}", q.volume);
    println!("  open interest  {}", q.open_interest);
    println!("  implied vol    {}%", q.implied_volatility);
}
