// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use wealthdash::projection::{
    DEFAULT_HORIZON_MONTHS, MAX_HORIZON_MONTHS, ProjectionInputs, final_net_worth, project,
    yearly_rollup,
};
use wealthdash::schedule::{
    ContributionSchedule, ScheduleStep, StepSchedule, contribution_for_month, default_schedule,
};

fn d(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap()
}

fn inputs(horizon_months: u32) -> ProjectionInputs {
    ProjectionInputs {
        start_fund_value: Decimal::ZERO,
        start_strategy_value: Decimal::from(410_000),
        cash_balance: Decimal::ZERO,
        fund_annual_rate_pct: d("10.0"),
        strategy_annual_rate_pct: d("12.0"),
        horizon_months,
    }
}

#[test]
fn raise_schedule_steps() {
    assert_eq!(contribution_for_month(1), Decimal::from(20_000));
    assert_eq!(contribution_for_month(4), Decimal::from(20_000));
    assert_eq!(contribution_for_month(5), Decimal::from(23_000));
    assert_eq!(contribution_for_month(16), Decimal::from(23_000));
    assert_eq!(contribution_for_month(17), Decimal::from(24_500));
    assert_eq!(contribution_for_month(28), Decimal::from(24_500));
    assert_eq!(contribution_for_month(29), Decimal::from(26_000));
    assert_eq!(contribution_for_month(40), Decimal::from(26_000));
    assert_eq!(contribution_for_month(41), Decimal::from(44_500));
    assert_eq!(contribution_for_month(96), Decimal::from(44_500));
}

#[test]
fn raise_schedule_regime_changes() {
    assert_eq!(default_schedule().regime_changes(), vec![5, 17, 29, 41]);
}

#[test]
fn first_month_scenario() {
    let points = project(&inputs(1), &contribution_for_month);
    assert_eq!(points.len(), 1);
    let p = &points[0];
    assert_eq!(p.month_index, 1);
    assert_eq!(p.fund_value, Decimal::from(20_000));
    assert_eq!(p.strategy_value, Decimal::from(414_100));
    assert_eq!(p.total_net_worth, Decimal::from(434_100));
    assert_eq!(p.contribution_this_month, Decimal::from(20_000));
}

#[test]
fn contribution_does_not_earn_in_its_own_month() {
    let mut inp = inputs(2);
    inp.start_strategy_value = Decimal::ZERO;
    inp.fund_annual_rate_pct = Decimal::from(12);
    let flat = |_m: u32| Decimal::from(1_000);
    let points = project(&inp, &flat);
    // month 2: 1000 * 1.01 + 1000
    assert_eq!(points[1].fund_value, Decimal::from(2_010));
}

#[test]
fn cash_is_added_flat_every_month() {
    let mut inp = inputs(24);
    inp.cash_balance = Decimal::from(75_000);
    let points = project(&inp, default_schedule());
    for p in &points {
        assert_eq!(
            p.total_net_worth,
            p.fund_value + p.strategy_value + Decimal::from(75_000)
        );
    }
}

#[test]
fn produces_exactly_horizon_points() {
    let points = project(&inputs(DEFAULT_HORIZON_MONTHS), default_schedule());
    assert_eq!(points.len(), 96);
    assert_eq!(points.first().unwrap().month_index, 1);
    assert_eq!(points.last().unwrap().month_index, 96);
    assert!(project(&inputs(0), default_schedule()).is_empty());
}

#[test]
fn projection_is_deterministic() {
    let a = project(&inputs(96), default_schedule());
    let b = project(&inputs(96), default_schedule());
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn fund_value_never_decreases_with_non_negative_inputs() {
    let points = project(&inputs(96), default_schedule());
    for w in points.windows(2) {
        assert!(w[1].fund_value >= w[0].fund_value);
    }
}

#[test]
fn engine_is_schedule_agnostic() {
    let mut inp = inputs(12);
    inp.fund_annual_rate_pct = Decimal::ZERO;
    inp.strategy_annual_rate_pct = Decimal::ZERO;
    let schedule = StepSchedule::new(vec![
        ScheduleStep {
            through_month: Some(6),
            amount: Decimal::from(100),
        },
        ScheduleStep {
            through_month: None,
            amount: Decimal::from(200),
        },
    ]);
    assert_eq!(schedule.contribution_for_month(7), Decimal::from(200));
    let points = project(&inp, &schedule);
    assert_eq!(points[11].fund_value, Decimal::from(1_800));
    assert_eq!(points[11].strategy_value, Decimal::from(410_000));
}

#[test]
fn negative_rates_are_accepted() {
    let mut inp = inputs(1);
    inp.strategy_annual_rate_pct = d("-12");
    let points = project(&inp, &contribution_for_month);
    assert_eq!(points[0].strategy_value, Decimal::from(405_900));
}

#[test]
fn yearly_rollup_labels_by_occurrence() {
    let points = project(&inputs(96), default_schedule());
    let years = yearly_rollup(&points);
    assert_eq!(years.len(), 8);
    assert_eq!(years[0].label, "Year 1");
    assert_eq!(years[0].month_index, 12);
    assert_eq!(years[7].label, "Year 8");
    assert_eq!(years[7].month_index, 96);
    assert_eq!(years[7].contribution, Decimal::from(44_500));
    assert_eq!(years[7].total_net_worth, points[95].total_net_worth);
}

#[test]
fn yearly_rollup_skips_partial_year() {
    let points = project(&inputs(11), default_schedule());
    assert!(yearly_rollup(&points).is_empty());
}

#[test]
fn final_net_worth_is_last_point() {
    let points = project(&inputs(96), default_schedule());
    assert_eq!(final_net_worth(&points), Some(points[95].total_net_worth));
    assert_eq!(final_net_worth(&[]), None);
}

#[test]
fn long_horizon_caps_values_instead_of_overflowing() {
    let points = project(&inputs(6_000), default_schedule());
    assert_eq!(points.len(), 6_000);
    let last = points.last().unwrap();
    assert_eq!(last.strategy_value, Decimal::MAX);
    assert_eq!(last.total_net_worth, Decimal::MAX);
    assert!(
        points
            .windows(2)
            .all(|w| w[1].total_net_worth >= w[0].total_net_worth)
    );
}

#[test]
fn start_value_at_decimal_max_stays_there() {
    let mut start = inputs(MAX_HORIZON_MONTHS);
    start.start_fund_value = Decimal::MAX;
    start.cash_balance = Decimal::MAX;
    let points = project(&start, default_schedule());
    assert_eq!(points.len(), MAX_HORIZON_MONTHS as usize);
    assert!(points.iter().all(|p| p.fund_value == Decimal::MAX));
    assert!(points.iter().all(|p| p.total_net_worth == Decimal::MAX));
}
