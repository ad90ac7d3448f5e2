// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::errors::{Error, Result};
use crate::ledger::Ledger;
use crate::models::{FinanceProfile, ProfileField};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationSlice {
    pub bucket: &'static str,
    pub value: Decimal,
    pub share: Decimal,
}

impl FinanceProfile {
    pub fn get(&self, field: ProfileField) -> Decimal {
        match field {
            ProfileField::Salary => self.salary,
            ProfileField::MonthlyContribution => self.monthly_contribution,
            ProfileField::MonthlyBudget => self.monthly_budget,
            ProfileField::CashBalance => self.cash_balance,
            ProfileField::StrategyCapital => self.strategy_capital,
            ProfileField::StrategyRealizedProfit => self.strategy_realized_profit,
            ProfileField::FundHoldingsValue => self.fund_holdings_value,
        }
    }

    /// Sets a single field. No cross-field checks: a contribution larger
    /// than the salary is allowed and simply shows up as a deficit.
    pub fn set(&mut self, field: ProfileField, value: Decimal) -> Result<()> {
        if value < Decimal::ZERO {
            return Err(Error::InvalidValue {
                field: field.key(),
                value,
            });
        }
        let slot = match field {
            ProfileField::Salary => &mut self.salary,
            ProfileField::MonthlyContribution => &mut self.monthly_contribution,
            ProfileField::MonthlyBudget => &mut self.monthly_budget,
            ProfileField::CashBalance => &mut self.cash_balance,
            ProfileField::StrategyCapital => &mut self.strategy_capital,
            ProfileField::StrategyRealizedProfit => &mut self.strategy_realized_profit,
            ProfileField::FundHoldingsValue => &mut self.fund_holdings_value,
        };
        *slot = value;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        for field in ProfileField::ALL {
            let value = self.get(field);
            if value < Decimal::ZERO {
                return Err(Error::InvalidValue {
                    field: field.key(),
                    value,
                });
            }
        }
        Ok(())
    }

    pub fn total_assets(&self) -> Decimal {
        self.cash_balance
            .saturating_add(self.strategy_capital)
            .saturating_add(self.strategy_realized_profit)
            .saturating_add(self.fund_holdings_value)
    }

    /// Capital and realized profit compound together in the options strategy.
    pub fn strategy_start_value(&self) -> Decimal {
        self.strategy_capital.saturating_add(self.strategy_realized_profit)
    }

    pub fn spendable_budget(&self) -> Decimal {
        self.salary.saturating_sub(self.monthly_contribution)
    }

    pub fn remaining_budget(&self, ledger: &Ledger) -> Decimal {
        self.monthly_budget.saturating_sub(ledger.total())
    }

    pub fn free_cash_flow(&self, ledger: &Ledger) -> Decimal {
        self.spendable_budget().saturating_sub(ledger.total())
    }

    pub fn is_deficit(&self, ledger: &Ledger) -> bool {
        self.free_cash_flow(ledger) < Decimal::ZERO
    }

    /// Fraction of the monthly budget already spent, capped at 1. A zero
    /// budget, or one too small to divide by, counts as fully used.
    pub fn budget_used_fraction(&self, ledger: &Ledger) -> Decimal {
        if self.monthly_budget <= Decimal::ZERO {
            return Decimal::ONE;
        }
        ledger
            .total()
            .checked_div(self.monthly_budget)
            .unwrap_or(Decimal::ONE)
            .clamp(Decimal::ZERO, Decimal::ONE)
    }

    pub fn allocation(&self) -> Vec<AllocationSlice> {
        let total = self.total_assets();
        [
            ("Index fund", self.fund_holdings_value),
            ("Strategy capital", self.strategy_capital),
            ("Strategy profit", self.strategy_realized_profit),
            ("Cash", self.cash_balance),
        ]
        .into_iter()
        .map(|(bucket, value)| AllocationSlice {
            bucket,
            value,
            share: if total.is_zero() {
                Decimal::ZERO
            } else {
                value / total
            },
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_field_fails_validation() {
        let mut p = FinanceProfile::default();
        p.cash_balance = Decimal::from(-1);
        assert!(matches!(
            p.validate(),
            Err(Error::InvalidValue { field: "cash_balance", .. })
        ));
    }

    #[test]
    fn allocation_shares_are_zero_without_assets() {
        let mut p = FinanceProfile::default();
        p.strategy_capital = Decimal::ZERO;
        assert!(p.allocation().iter().all(|s| s.share.is_zero()));
    }
}
