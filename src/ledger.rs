// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::models::{Category, ExpenseEntry};

/// Expense entries for the current period, in insertion order.
///
/// Deserialization re-validates every entry, so a stored negative amount or
/// blank description is rejected the same way as on entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ExpenseEntry>", into = "Vec<ExpenseEntry>")]
pub struct Ledger {
    entries: Vec<ExpenseEntry>,
}

impl TryFrom<Vec<ExpenseEntry>> for Ledger {
    type Error = Error;

    fn try_from(entries: Vec<ExpenseEntry>) -> Result<Self> {
        for e in &entries {
            e.validate()?;
        }
        Ok(Ledger { entries })
    }
}

impl From<Ledger> for Vec<ExpenseEntry> {
    fn from(ledger: Ledger) -> Self {
        ledger.entries
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ExpenseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&ExpenseEntry> {
        self.entries.get(index).ok_or(Error::OutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    pub fn add(&mut self, entry: ExpenseEntry) -> Result<()> {
        entry.validate()?;
        self.entries.push(entry);
        Ok(())
    }

    pub fn update(&mut self, index: usize, entry: ExpenseEntry) -> Result<()> {
        entry.validate()?;
        let len = self.entries.len();
        let slot = self
            .entries
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })?;
        *slot = entry;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<ExpenseEntry> {
        if index >= self.entries.len() {
            return Err(Error::OutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Drops the most recently added entry, if any.
    pub fn undo_last(&mut self) -> Option<ExpenseEntry> {
        self.entries.pop()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn total(&self) -> Decimal {
        self.entries
            .iter()
            .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.amount))
    }

    /// Only categories with at least one entry appear in the result.
    pub fn totals_by_category(&self) -> BTreeMap<Category, Decimal> {
        let mut totals = BTreeMap::new();
        for e in &self.entries {
            let sum = totals.entry(e.category).or_insert(Decimal::ZERO);
            *sum = sum.saturating_add(e.amount);
        }
        totals
    }
}
