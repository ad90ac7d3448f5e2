// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::Session;
use crate::store::Store;
use anyhow::{Result, bail};

pub fn handle<S: Store>(session: &Session<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => export_expenses(session, sub),
        _ => Ok(()),
    }
}

fn export_expenses<S: Store>(session: &Session<S>, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let entries = session.ledger().entries();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "category", "description", "amount"])?;
            for e in entries {
                wtr.write_record([
                    e.date.to_string(),
                    e.category.to_string(),
                    e.description.clone(),
                    e.amount.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(entries)?)?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported {} expenses to {}", entries.len(), out);
    Ok(())
}
