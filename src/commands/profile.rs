// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ProfileField;
use crate::session::Session;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result};

pub fn handle<S: Store>(session: &mut Session<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(session, sub)?,
        Some(("set", sub)) => set(session, sub)?,
        _ => {}
    }
    Ok(())
}

/// Writes the current (possibly default) state so the data file exists.
pub fn init<S: Store>(session: &mut Session<S>) -> Result<()> {
    session.save().context("Failed to write data file")
}

fn show<S: Store>(session: &Session<S>, sub: &clap::ArgMatches) -> Result<()> {
    let profile = session.profile();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), profile)? {
        return Ok(());
    }
    let rows = ProfileField::ALL
        .iter()
        .map(|f| vec![f.key().to_string(), fmt_money(&profile.get(*f))])
        .collect();
    println!("{}", pretty_table(&["Field", "Value"], rows));
    Ok(())
}

fn set<S: Store>(session: &mut Session<S>, sub: &clap::ArgMatches) -> Result<()> {
    let field: ProfileField = sub.get_one::<String>("field").unwrap().parse()?;
    let value = parse_decimal(sub.get_one::<String>("value").unwrap())?;
    session
        .set_field(field, value)
        .with_context(|| format!("Could not set {}", field))?;
    println!("{} = {}", field, fmt_money(&value));
    Ok(())
}
