// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::Session;
use crate::store::Store;
use crate::utils::{fmt_money, fmt_pct, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MonthlySnapshot {
    pub income: Decimal,
    pub recorded_expenses: Decimal,
    pub planned_contribution: Decimal,
    pub spendable_budget: Decimal,
    pub free_cash_flow: Decimal,
    pub deficit: bool,
    pub monthly_budget: Decimal,
    pub remaining_budget: Decimal,
    pub budget_used_fraction: Decimal,
    pub total_assets: Decimal,
}

pub fn snapshot<S: Store>(session: &Session<S>) -> MonthlySnapshot {
    let p = session.profile();
    let ledger = session.ledger();
    MonthlySnapshot {
        income: p.salary,
        recorded_expenses: ledger.total(),
        planned_contribution: p.monthly_contribution,
        spendable_budget: p.spendable_budget(),
        free_cash_flow: p.free_cash_flow(ledger),
        deficit: p.is_deficit(ledger),
        monthly_budget: p.monthly_budget,
        remaining_budget: p.remaining_budget(ledger),
        budget_used_fraction: p.budget_used_fraction(ledger),
        total_assets: p.total_assets(),
    }
}

pub fn handle<S: Store>(session: &Session<S>, sub: &clap::ArgMatches) -> Result<()> {
    let snap = snapshot(session);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &snap)? {
        return Ok(());
    }
    let status = if snap.deficit { "DEFICIT" } else { "SAFE" };
    let rows = vec![
        vec!["Income".into(), fmt_money(&snap.income)],
        vec!["Recorded expenses".into(), fmt_money(&snap.recorded_expenses)],
        vec![
            "Planned contribution".into(),
            fmt_money(&snap.planned_contribution),
        ],
        vec![
            "Available for spending".into(),
            fmt_money(&snap.spendable_budget),
        ],
        vec![
            "Free cash flow".into(),
            format!("{} ({})", fmt_money(&snap.free_cash_flow), status),
        ],
        vec!["Monthly budget".into(), fmt_money(&snap.monthly_budget)],
        vec!["Remaining budget".into(), fmt_money(&snap.remaining_budget)],
        vec!["Budget used".into(), fmt_pct(&snap.budget_used_fraction)],
        vec!["Net worth".into(), fmt_money(&snap.total_assets)],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], rows));
    Ok(())
}
