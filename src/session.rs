// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::errors::Result;
use crate::ledger::Ledger;
use crate::models::{AppState, ExpenseEntry, FinanceProfile, ProfileField, ProjectionPoint};
use crate::projection::{ProjectionInputs, project};
use crate::schedule::{ContributionSchedule, default_schedule};
use crate::store::Store;

/// The single application state plus the store it is persisted to.
///
/// Every mutator writes the full state back to the store before returning.
/// If that save fails the in-memory change is kept and the error returned.
pub struct Session<S> {
    state: AppState,
    store: S,
}

impl<S: Store> Session<S> {
    /// Loads persisted state, falling back to defaults when the store is
    /// empty, unreadable, or malformed.
    pub fn open(store: S) -> Self {
        let state = match store.load() {
            Ok(Some(state)) => {
                tracing::info!(expenses = state.expenses.len(), "loaded saved state");
                state
            }
            Ok(None) => {
                tracing::info!("no saved state, starting from defaults");
                AppState::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "saved state unusable, starting from defaults");
                AppState::default()
            }
        };
        Session { state, store }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn profile(&self) -> &FinanceProfile {
        &self.state.finances
    }

    pub fn ledger(&self) -> &Ledger {
        &self.state.expenses
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Writes the current state to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.state)
    }

    pub fn set_field(&mut self, field: ProfileField, value: Decimal) -> Result<()> {
        self.state.finances.set(field, value)?;
        tracing::debug!(%field, %value, "profile field updated");
        self.save()
    }

    /// Applies several field updates, saving once when all are accepted.
    pub fn set_fields(&mut self, updates: &[(ProfileField, Decimal)]) -> Result<()> {
        let mut next = self.state.finances.clone();
        for &(field, value) in updates {
            next.set(field, value)?;
        }
        self.state.finances = next;
        tracing::debug!(fields = updates.len(), "profile fields updated");
        self.save()
    }

    pub fn add_expense(&mut self, entry: ExpenseEntry) -> Result<()> {
        self.state.expenses.add(entry)?;
        tracing::debug!(len = self.state.expenses.len(), "expense added");
        self.save()
    }

    pub fn update_expense(&mut self, index: usize, entry: ExpenseEntry) -> Result<()> {
        self.state.expenses.update(index, entry)?;
        tracing::debug!(index, "expense updated");
        self.save()
    }

    pub fn remove_expense(&mut self, index: usize) -> Result<ExpenseEntry> {
        let removed = self.state.expenses.remove(index)?;
        tracing::debug!(index, "expense removed");
        self.save()?;
        Ok(removed)
    }

    pub fn undo_last_expense(&mut self) -> Result<Option<ExpenseEntry>> {
        let removed = self.state.expenses.undo_last();
        if removed.is_some() {
            tracing::debug!("last expense undone");
            self.save()?;
        }
        Ok(removed)
    }

    pub fn clear_expenses(&mut self) -> Result<()> {
        self.state.expenses.clear();
        tracing::debug!("expenses cleared");
        self.save()
    }

    /// Forecast from the current balances under the default raise schedule.
    pub fn project(
        &self,
        fund_rate_pct: Decimal,
        strategy_rate_pct: Decimal,
        horizon_months: u32,
    ) -> Vec<ProjectionPoint> {
        self.project_with(
            fund_rate_pct,
            strategy_rate_pct,
            horizon_months,
            default_schedule(),
        )
    }

    pub fn project_with<C>(
        &self,
        fund_rate_pct: Decimal,
        strategy_rate_pct: Decimal,
        horizon_months: u32,
        schedule: &C,
    ) -> Vec<ProjectionPoint>
    where
        C: ContributionSchedule + ?Sized,
    {
        let p = &self.state.finances;
        let inputs = ProjectionInputs {
            start_fund_value: p.fund_holdings_value,
            start_strategy_value: p.strategy_start_value(),
            cash_balance: p.cash_balance,
            fund_annual_rate_pct: fund_rate_pct,
            strategy_annual_rate_pct: strategy_rate_pct,
            horizon_months,
        };
        project(&inputs, schedule)
    }
}
