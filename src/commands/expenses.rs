// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog::{PRESETS, find_preset, presets_for};
use crate::models::{Category, ExpenseEntry};
use crate::session::Session;
use crate::store::Store;
use crate::utils::{
    fmt_money, fmt_pct, maybe_print_json, parse_date, parse_decimal, pretty_table, today,
    user_index,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle<S: Store>(session: &mut Session<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(session, sub)?,
        Some(("quick", sub)) => quick(session, sub)?,
        Some(("presets", sub)) => presets(sub)?,
        Some(("list", sub)) => list(session, sub)?,
        Some(("edit", sub)) => edit(session, sub)?,
        Some(("rm", sub)) => remove(session, sub)?,
        Some(("undo", _)) => undo(session)?,
        Some(("clear", _)) => {
            session.clear_expenses()?;
            println!("Cleared all expenses");
        }
        Some(("by-category", sub)) => by_category(session, sub)?,
        _ => {}
    }
    Ok(())
}

fn date_or_today(sub: &clap::ArgMatches) -> Result<NaiveDate> {
    match sub.get_one::<String>("date") {
        Some(raw) => parse_date(raw),
        None => Ok(today()),
    }
}

fn add<S: Store>(session: &mut Session<S>, sub: &clap::ArgMatches) -> Result<()> {
    let date = date_or_today(sub)?;
    let category: Category = sub.get_one::<String>("category").unwrap().parse()?;
    let description = sub.get_one::<String>("description").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;

    let entry = ExpenseEntry::new(date, category, description, amount)?;
    let line = format!(
        "Recorded {} on {} for '{}' ({})",
        fmt_money(&entry.amount),
        entry.date,
        entry.description,
        entry.category
    );
    session.add_expense(entry)?;
    println!("{}", line);
    Ok(())
}

fn quick<S: Store>(session: &mut Session<S>, sub: &clap::ArgMatches) -> Result<()> {
    let category: Category = sub.get_one::<String>("category").unwrap().parse()?;
    let preset = find_preset(category, sub.get_one::<String>("item").unwrap())?;
    let amount = sub
        .get_one::<String>("amount")
        .map(|raw| parse_decimal(raw))
        .transpose()?;
    let entry = preset.to_entry(date_or_today(sub)?, amount)?;
    let line = format!(
        "Recorded {} for '{}' ({})",
        fmt_money(&entry.amount),
        entry.description,
        entry.category
    );
    session.add_expense(entry)?;
    println!("{}", line);
    Ok(())
}

fn presets(sub: &clap::ArgMatches) -> Result<()> {
    let rows = match sub.get_one::<String>("category") {
        Some(raw) => {
            let category: Category = raw.parse()?;
            presets_for(category).collect::<Vec<_>>()
        }
        None => PRESETS.iter().collect(),
    }
    .into_iter()
    .map(|p| {
        vec![
            p.category.to_string(),
            p.item.to_string(),
            fmt_money(&p.default_amount),
        ]
    })
    .collect();
    println!("{}", pretty_table(&["Category", "Item", "Default"], rows));
    Ok(())
}

#[derive(Serialize)]
pub struct ExpenseRow {
    pub row: usize,
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: Decimal,
}

pub fn rows<S: Store>(session: &Session<S>) -> Vec<ExpenseRow> {
    session
        .ledger()
        .entries()
        .iter()
        .enumerate()
        .map(|(i, e)| ExpenseRow {
            row: i + 1,
            date: e.date.to_string(),
            category: e.category.to_string(),
            description: e.description.clone(),
            amount: e.amount,
        })
        .collect()
}

fn list<S: Store>(session: &Session<S>, sub: &clap::ArgMatches) -> Result<()> {
    let data = rows(session);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let table_rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.row.to_string(),
                    r.date.clone(),
                    r.category.clone(),
                    r.description.clone(),
                    fmt_money(&r.amount),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["#", "Date", "Category", "Description", "Amount"], table_rows)
        );
        println!("Total: {}", fmt_money(&session.ledger().total()));
    }
    Ok(())
}

fn edit<S: Store>(session: &mut Session<S>, sub: &clap::ArgMatches) -> Result<()> {
    let row = *sub.get_one::<usize>("index").unwrap();
    let index = user_index(row)?;
    let mut entry = session
        .ledger()
        .get(index)
        .with_context(|| format!("No expense at row {}", row))?
        .clone();

    if let Some(raw) = sub.get_one::<String>("category") {
        entry.category = raw.parse()?;
    }
    if let Some(raw) = sub.get_one::<String>("description") {
        entry.description = raw.trim().to_string();
    }
    if let Some(raw) = sub.get_one::<String>("amount") {
        entry.amount = parse_decimal(raw)?;
    }
    if let Some(raw) = sub.get_one::<String>("date") {
        entry.date = parse_date(raw)?;
    }
    session.update_expense(index, entry)?;
    println!("Updated row {}", row);
    Ok(())
}

fn remove<S: Store>(session: &mut Session<S>, sub: &clap::ArgMatches) -> Result<()> {
    let row = *sub.get_one::<usize>("index").unwrap();
    let removed = session
        .remove_expense(user_index(row)?)
        .with_context(|| format!("No expense at row {}", row))?;
    println!(
        "Removed '{}' ({})",
        removed.description,
        fmt_money(&removed.amount)
    );
    Ok(())
}

fn undo<S: Store>(session: &mut Session<S>) -> Result<()> {
    match session.undo_last_expense()? {
        Some(e) => println!("Undid '{}' ({})", e.description, fmt_money(&e.amount)),
        None => println!("Nothing to undo"),
    }
    Ok(())
}

#[derive(Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
    pub share: Decimal,
}

pub fn category_totals<S: Store>(session: &Session<S>) -> Vec<CategoryTotal> {
    let ledger = session.ledger();
    let total = ledger.total();
    ledger
        .totals_by_category()
        .into_iter()
        .map(|(category, sum)| CategoryTotal {
            category: category.to_string(),
            total: sum,
            share: if total.is_zero() {
                Decimal::ZERO
            } else {
                sum / total
            },
        })
        .collect()
}

fn by_category<S: Store>(session: &Session<S>, sub: &clap::ArgMatches) -> Result<()> {
    let data = category_totals(session);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let table_rows = data
            .iter()
            .map(|c| vec![c.category.clone(), fmt_money(&c.total), fmt_pct(&c.share)])
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Spent", "Share"], table_rows)
        );
    }
    Ok(())
}
