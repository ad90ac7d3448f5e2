// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ProfileField;
use crate::session::Session;
use crate::store::Store;
use crate::utils::{fmt_money, fmt_pct, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Result, bail};

pub fn handle<S: Store>(session: &mut Session<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(session, sub)?,
        Some(("update", sub)) => update(session, sub)?,
        _ => {}
    }
    Ok(())
}

fn show<S: Store>(session: &Session<S>, sub: &clap::ArgMatches) -> Result<()> {
    let allocation = session.profile().allocation();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &allocation)? {
        return Ok(());
    }
    let rows = allocation
        .iter()
        .map(|s| vec![s.bucket.to_string(), fmt_money(&s.value), fmt_pct(&s.share)])
        .collect();
    println!("{}", pretty_table(&["Bucket", "Value", "Share"], rows));
    println!("Net worth: {}", fmt_money(&session.profile().total_assets()));
    Ok(())
}

fn update<S: Store>(session: &mut Session<S>, sub: &clap::ArgMatches) -> Result<()> {
    let flags = [
        ("cash", ProfileField::CashBalance),
        ("strategy-capital", ProfileField::StrategyCapital),
        ("strategy-profit", ProfileField::StrategyRealizedProfit),
        ("fund-holdings", ProfileField::FundHoldingsValue),
    ];
    let mut updates = Vec::new();
    for (arg, field) in flags {
        if let Some(raw) = sub.get_one::<String>(arg) {
            updates.push((field, parse_decimal(raw)?));
        }
    }
    if updates.is_empty() {
        bail!("Nothing to update; pass at least one of --cash, --strategy-capital, --strategy-profit, --fund-holdings");
    }
    session.set_fields(&updates)?;
    println!(
        "Assets updated, net worth now {}",
        fmt_money(&session.profile().total_assets())
    );
    Ok(())
}
