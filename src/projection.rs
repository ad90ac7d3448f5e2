// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::models::{ProjectionPoint, YearlyMilestone};
use crate::schedule::ContributionSchedule;

pub const DEFAULT_HORIZON_MONTHS: u32 = 96;
/// Longest horizon the `project` command accepts (100 years).
pub const MAX_HORIZON_MONTHS: u32 = 1200;

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionInputs {
    pub start_fund_value: Decimal,
    pub start_strategy_value: Decimal,
    pub cash_balance: Decimal,
    pub fund_annual_rate_pct: Decimal,
    pub strategy_annual_rate_pct: Decimal,
    pub horizon_months: u32,
}

fn monthly_factor(annual_rate_pct: Decimal) -> Decimal {
    Decimal::ONE.saturating_add(annual_rate_pct / Decimal::ONE_HUNDRED / Decimal::from(12))
}

/// Month-by-month compounding forecast.
///
/// Each month the fund compounds on its prior balance and then receives that
/// month's contribution; the strategy only compounds; cash is added flat.
///
/// Values that would leave the `Decimal` range saturate at its bounds, so the
/// series always has exactly `horizon_months` points.
pub fn project<S>(inputs: &ProjectionInputs, schedule: &S) -> Vec<ProjectionPoint>
where
    S: ContributionSchedule + ?Sized,
{
    let fund_factor = monthly_factor(inputs.fund_annual_rate_pct);
    let strategy_factor = monthly_factor(inputs.strategy_annual_rate_pct);

    let mut fund_value = inputs.start_fund_value;
    let mut strategy_value = inputs.start_strategy_value;
    let mut points = Vec::with_capacity(inputs.horizon_months.min(MAX_HORIZON_MONTHS) as usize);
    let mut saturated = false;

    for month in 1..=inputs.horizon_months {
        let contribution = schedule.contribution_for_month(month);
        fund_value = fund_value
            .saturating_mul(fund_factor)
            .saturating_add(contribution);
        strategy_value = strategy_value.saturating_mul(strategy_factor);
        let total_net_worth = fund_value
            .saturating_add(strategy_value)
            .saturating_add(inputs.cash_balance);
        if !saturated && [fund_value, strategy_value, total_net_worth].contains(&Decimal::MAX) {
            saturated = true;
            tracing::warn!(month, "projection exceeded the decimal range, values capped");
        }
        points.push(ProjectionPoint {
            month_index: month,
            fund_value,
            strategy_value,
            total_net_worth,
            contribution_this_month: contribution,
        });
    }
    tracing::debug!(
        months = inputs.horizon_months,
        fund_rate = %inputs.fund_annual_rate_pct,
        strategy_rate = %inputs.strategy_annual_rate_pct,
        "projection computed"
    );
    points
}

/// Every twelfth month, labelled "Year 1", "Year 2", ... by occurrence.
pub fn yearly_rollup(points: &[ProjectionPoint]) -> Vec<YearlyMilestone> {
    points
        .iter()
        .filter(|p| p.month_index % 12 == 0)
        .enumerate()
        .map(|(i, p)| YearlyMilestone {
            label: format!("Year {}", i + 1),
            month_index: p.month_index,
            contribution: p.contribution_this_month,
            fund_value: p.fund_value,
            strategy_value: p.strategy_value,
            total_net_worth: p.total_net_worth,
        })
        .collect()
}

pub fn final_net_worth(points: &[ProjectionPoint]) -> Option<Decimal> {
    points.last().map(|p| p.total_net_worth)
}
