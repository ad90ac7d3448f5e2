// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;

/// Maps a 1-based month index to the amount contributed that month.
pub trait ContributionSchedule {
    fn contribution_for_month(&self, month: u32) -> Decimal;
}

impl<F> ContributionSchedule for F
where
    F: Fn(u32) -> Decimal,
{
    fn contribution_for_month(&self, month: u32) -> Decimal {
        self(month)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleStep {
    /// Last month (inclusive) this amount applies to; `None` for the open tail.
    pub through_month: Option<u32>,
    pub amount: Decimal,
}

/// Step function over month indices, steps ordered by `through_month`.
#[derive(Debug, Clone, PartialEq)]
pub struct StepSchedule {
    steps: Vec<ScheduleStep>,
}

impl StepSchedule {
    pub fn new(steps: Vec<ScheduleStep>) -> Self {
        StepSchedule { steps }
    }

    pub fn steps(&self) -> &[ScheduleStep] {
        &self.steps
    }

    /// First month of every step after the first, i.e. where the amount changes.
    pub fn regime_changes(&self) -> Vec<u32> {
        self.steps
            .windows(2)
            .filter_map(|w| match w[0].through_month {
                Some(last) if w[0].amount != w[1].amount => Some(last + 1),
                _ => None,
            })
            .collect()
    }
}

impl ContributionSchedule for StepSchedule {
    fn contribution_for_month(&self, month: u32) -> Decimal {
        self.steps
            .iter()
            .find(|s| s.through_month.is_none_or(|last| month <= last))
            .or_else(|| self.steps.last())
            .map(|s| s.amount)
            .unwrap_or(Decimal::ZERO)
    }
}

static RAISE_SCHEDULE: Lazy<StepSchedule> = Lazy::new(|| {
    let step = |through_month: Option<u32>, amount: i64| ScheduleStep {
        through_month,
        amount: Decimal::from(amount),
    };
    StepSchedule::new(vec![
        step(Some(4), 20_000),
        step(Some(16), 23_000),
        step(Some(28), 24_500),
        step(Some(40), 26_000),
        step(None, 44_500),
    ])
});

/// The pre-set raise schedule used when the caller supplies none.
pub fn default_schedule() -> &'static StepSchedule {
    &RAISE_SCHEDULE
}

pub fn contribution_for_month(month: u32) -> Decimal {
    RAISE_SCHEDULE.contribution_for_month(month)
}
