// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::ledger::Ledger;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Housing,
    Entertainment,
    Shopping,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Housing,
        Category::Entertainment,
        Category::Shopping,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Housing => "Housing",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::UnknownCategory(needle.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub date: NaiveDate,
    pub category: Category,
    pub description: String,
    pub amount: Decimal,
}

impl ExpenseEntry {
    pub fn new(
        date: NaiveDate,
        category: Category,
        description: &str,
        amount: Decimal,
    ) -> Result<Self> {
        let entry = ExpenseEntry {
            date,
            category,
            description: description.trim().to_string(),
            amount,
        };
        entry.validate()?;
        Ok(entry)
    }

    pub fn validate(&self) -> Result<()> {
        if self.amount < Decimal::ZERO {
            return Err(Error::InvalidEntry(format!(
                "amount {} is negative",
                self.amount
            )));
        }
        if self.description.trim().is_empty() {
            return Err(Error::InvalidEntry("description is empty".into()));
        }
        Ok(())
    }
}

/// The user's editable settings and balances. All fields are non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceProfile {
    pub salary: Decimal,
    pub monthly_contribution: Decimal,
    pub monthly_budget: Decimal,
    pub cash_balance: Decimal,
    pub strategy_capital: Decimal,
    pub strategy_realized_profit: Decimal,
    pub fund_holdings_value: Decimal,
}

impl Default for FinanceProfile {
    fn default() -> Self {
        FinanceProfile {
            salary: Decimal::from(56_000),
            monthly_contribution: Decimal::from(20_000),
            monthly_budget: Decimal::from(36_000),
            cash_balance: Decimal::ZERO,
            strategy_capital: Decimal::from(410_000),
            strategy_realized_profit: Decimal::ZERO,
            fund_holdings_value: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Salary,
    MonthlyContribution,
    MonthlyBudget,
    CashBalance,
    StrategyCapital,
    StrategyRealizedProfit,
    FundHoldingsValue,
}

impl ProfileField {
    pub const ALL: [ProfileField; 7] = [
        ProfileField::Salary,
        ProfileField::MonthlyContribution,
        ProfileField::MonthlyBudget,
        ProfileField::CashBalance,
        ProfileField::StrategyCapital,
        ProfileField::StrategyRealizedProfit,
        ProfileField::FundHoldingsValue,
    ];

    /// Name used in the persisted `finances` section.
    pub fn key(&self) -> &'static str {
        match self {
            ProfileField::Salary => "salary",
            ProfileField::MonthlyContribution => "monthly_contribution",
            ProfileField::MonthlyBudget => "monthly_budget",
            ProfileField::CashBalance => "cash_balance",
            ProfileField::StrategyCapital => "strategy_capital",
            ProfileField::StrategyRealizedProfit => "strategy_realized_profit",
            ProfileField::FundHoldingsValue => "fund_holdings_value",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProfileField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        ProfileField::ALL
            .into_iter()
            .find(|f| f.key() == normalized)
            .ok_or_else(|| Error::UnknownField(s.trim().to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub month_index: u32,
    pub fund_value: Decimal,
    pub strategy_value: Decimal,
    pub total_net_worth: Decimal,
    pub contribution_this_month: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyMilestone {
    pub label: String,
    pub month_index: u32,
    pub contribution: Decimal,
    pub fund_value: Decimal,
    pub strategy_value: Decimal,
    pub total_net_worth: Decimal,
}

/// Everything that gets persisted: `{ "finances": {...}, "expenses": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub finances: FinanceProfile,
    pub expenses: Ledger,
}
