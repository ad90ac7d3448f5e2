// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::YearlyMilestone;
use crate::projection::{final_net_worth, yearly_rollup};
use crate::schedule::default_schedule;
use crate::session::Session;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Result, bail};
use rust_decimal::Decimal;
use serde::Serialize;

pub const FUND_RATE_RANGE: (i64, i64) = (4, 15);
pub const STRATEGY_RATE_RANGE: (i64, i64) = (5, 20);

fn rate_arg(sub: &clap::ArgMatches, name: &str, (lo, hi): (i64, i64)) -> Result<Decimal> {
    let rate = parse_decimal(sub.get_one::<String>(name).unwrap())?;
    if rate < Decimal::from(lo) || rate > Decimal::from(hi) {
        bail!("--{} must be between {} and {} percent, got {}", name, lo, hi, rate);
    }
    Ok(rate)
}

pub fn handle<S: Store>(session: &Session<S>, sub: &clap::ArgMatches) -> Result<()> {
    let fund_rate = rate_arg(sub, "fund-rate", FUND_RATE_RANGE)?;
    let strategy_rate = rate_arg(sub, "strategy-rate", STRATEGY_RATE_RANGE)?;
    let months = *sub.get_one::<u32>("months").unwrap();
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let points = session.project(fund_rate, strategy_rate, months);

    if sub.get_flag("yearly") {
        let milestones = yearly_rollup(&points);
        if !maybe_print_json(json_flag, jsonl_flag, &milestones)? {
            println!("{}", milestone_report(&milestones, months));
        }
    } else if !maybe_print_json(json_flag, jsonl_flag, &points)? {
        let changes = default_schedule().regime_changes();
        let rows = points
            .iter()
            .map(|p| {
                let marker = if changes.contains(&p.month_index) {
                    "raise"
                } else {
                    ""
                };
                vec![
                    p.month_index.to_string(),
                    fmt_money(&p.contribution_this_month),
                    fmt_money(&p.fund_value),
                    fmt_money(&p.strategy_value),
                    fmt_money(&p.total_net_worth),
                    marker.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Month", "Contribution", "Fund", "Strategy", "Net worth", ""],
                rows
            )
        );
    }

    if !json_flag && !jsonl_flag {
        if let Some(total) = final_net_worth(&points) {
            println!("Projected net worth after {} months: {}", months, fmt_money(&total));
        }
    }
    Ok(())
}

/// Year-end table, or a note when the horizon holds no complete year.
pub fn milestone_report(milestones: &[YearlyMilestone], months: u32) -> String {
    if milestones.is_empty() {
        return format!("No full year within the {}-month horizon.", months);
    }
    let rows = milestones
        .iter()
        .map(|y| {
            vec![
                y.label.clone(),
                fmt_money(&y.contribution),
                fmt_money(&y.fund_value),
                fmt_money(&y.strategy_value),
                fmt_money(&y.total_net_worth),
            ]
        })
        .collect();
    pretty_table(
        &["Year", "Monthly contribution", "Fund", "Strategy", "Net worth"],
        rows,
    )
    .to_string()
}

#[derive(Serialize)]
struct StepRow {
    from_month: u32,
    through_month: Option<u32>,
    amount: Decimal,
}

pub fn schedule(sub: &clap::ArgMatches) -> Result<()> {
    let mut from_month = 1;
    let mut data = Vec::new();
    for step in default_schedule().steps() {
        data.push(StepRow {
            from_month,
            through_month: step.through_month,
            amount: step.amount,
        });
        from_month = step.through_month.map_or(from_month, |m| m + 1);
    }
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|s| {
                let through = s
                    .through_month
                    .map_or_else(|| "onward".to_string(), |m| m.to_string());
                vec![s.from_month.to_string(), through, fmt_money(&s.amount)]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["From month", "Through month", "Contribution"], rows)
        );
    }
    Ok(())
}
