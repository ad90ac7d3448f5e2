// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::errors::{Error, Result};
use crate::models::{Category, ExpenseEntry};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Preset {
    pub category: Category,
    pub item: &'static str,
    pub default_amount: Decimal,
}

const fn preset(category: Category, item: &'static str, amount: i64) -> Preset {
    Preset {
        category,
        item,
        default_amount: Decimal::from_parts(amount as u32, 0, 0, false, 0),
    }
}

pub static PRESETS: [Preset; 16] = [
    preset(Category::Food, "Breakfast", 35),
    preset(Category::Food, "Lunch", 65),
    preset(Category::Food, "Dinner", 120),
    preset(Category::Food, "Coffee", 40),
    preset(Category::Food, "Groceries", 300),
    preset(Category::Transport, "MTR", 15),
    preset(Category::Transport, "Taxi", 80),
    preset(Category::Transport, "Octopus top-up", 200),
    preset(Category::Housing, "Rent", 15000),
    preset(Category::Housing, "Utilities", 800),
    preset(Category::Housing, "Phone plan", 150),
    preset(Category::Entertainment, "Movie", 100),
    preset(Category::Entertainment, "Drinks", 250),
    preset(Category::Entertainment, "Streaming", 80),
    preset(Category::Shopping, "Clothing", 500),
    preset(Category::Shopping, "Household", 200),
];

pub fn presets_for(category: Category) -> impl Iterator<Item = &'static Preset> {
    PRESETS.iter().filter(move |p| p.category == category)
}

pub fn find_preset(category: Category, item: &str) -> Result<&'static Preset> {
    let item = item.trim();
    presets_for(category)
        .find(|p| p.item.eq_ignore_ascii_case(item))
        .ok_or_else(|| Error::UnknownPreset(format!("{} / {}", category, item)))
}

impl Preset {
    /// Builds an entry from this preset, optionally overriding the amount.
    pub fn to_entry(&self, date: NaiveDate, amount: Option<Decimal>) -> Result<ExpenseEntry> {
        ExpenseEntry::new(
            date,
            self.category,
            self.item,
            amount.unwrap_or(self.default_amount),
        )
    }
}
