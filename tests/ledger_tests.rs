// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use wealthdash::errors::Error;
use wealthdash::ledger::Ledger;
use wealthdash::models::{Category, ExpenseEntry};

fn d(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap()
}

fn entry(category: Category, description: &str, amount: &str) -> ExpenseEntry {
    ExpenseEntry::new(
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        category,
        description,
        d(amount),
    )
    .unwrap()
}

fn sample() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.add(entry(Category::Food, "Lunch", "65.50")).unwrap();
    ledger.add(entry(Category::Transport, "Taxi", "80")).unwrap();
    ledger.add(entry(Category::Food, "Coffee", "38.20")).unwrap();
    ledger
}

#[test]
fn empty_ledger_totals_zero() {
    let ledger = Ledger::new();
    assert!(ledger.total().is_zero());
    assert!(ledger.totals_by_category().is_empty());
}

#[test]
fn total_is_sum_of_amounts() {
    let ledger = sample();
    assert_eq!(ledger.total(), d("183.70"));
    assert_eq!(ledger.len(), 3);
}

#[test]
fn remove_decreases_total_by_entry_amount() {
    let mut ledger = sample();
    let before = ledger.total();
    let removed = ledger.remove(1).unwrap();
    assert_eq!(removed.description, "Taxi");
    assert_eq!(ledger.total(), before - removed.amount);
    assert_eq!(ledger.entries()[1].description, "Coffee");
}

#[test]
fn remove_out_of_range_is_an_error() {
    let mut ledger = sample();
    let err = ledger.remove(3).unwrap_err();
    assert!(matches!(err, Error::OutOfRange { index: 3, len: 3 }));
    assert_eq!(ledger.len(), 3);
}

#[test]
fn clear_empties_ledger() {
    let mut ledger = sample();
    ledger.clear();
    assert!(ledger.is_empty());
    assert!(ledger.total().is_zero());
}

#[test]
fn category_totals_sum_to_total() {
    let ledger = sample();
    let by_cat = ledger.totals_by_category();
    assert_eq!(by_cat.len(), 2);
    assert_eq!(by_cat[&Category::Food], d("103.70"));
    assert_eq!(by_cat[&Category::Transport], d("80"));
    assert!(!by_cat.contains_key(&Category::Shopping));
    let sum: Decimal = by_cat.values().copied().sum();
    assert_eq!(sum, ledger.total());
}

#[test]
fn negative_amount_rejected() {
    let err = ExpenseEntry::new(
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        Category::Other,
        "Refund",
        d("-5"),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidEntry(_)));
}

#[test]
fn blank_description_rejected_on_add() {
    let mut ledger = Ledger::new();
    let bad = ExpenseEntry {
        date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        category: Category::Food,
        description: "   ".into(),
        amount: d("10"),
    };
    assert!(ledger.add(bad).is_err());
    assert!(ledger.is_empty());
}

#[test]
fn zero_amount_is_allowed() {
    let mut ledger = Ledger::new();
    ledger.add(entry(Category::Other, "Free sample", "0")).unwrap();
    assert_eq!(ledger.len(), 1);
}

#[test]
fn update_replaces_entry_in_place() {
    let mut ledger = sample();
    ledger
        .update(0, entry(Category::Shopping, "Shoes", "400"))
        .unwrap();
    assert_eq!(ledger.entries()[0].category, Category::Shopping);
    assert_eq!(ledger.total(), d("518.20"));
    assert!(matches!(
        ledger.update(9, entry(Category::Food, "X", "1")),
        Err(Error::OutOfRange { index: 9, .. })
    ));
}

#[test]
fn undo_last_pops_most_recent() {
    let mut ledger = sample();
    let undone = ledger.undo_last().unwrap();
    assert_eq!(undone.description, "Coffee");
    assert_eq!(ledger.len(), 2);

    let mut empty = Ledger::new();
    assert!(empty.undo_last().is_none());
}

#[test]
fn category_parses_case_insensitively() {
    assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
    assert_eq!(" HOUSING ".parse::<Category>().unwrap(), Category::Housing);
    assert!(matches!(
        "pets".parse::<Category>(),
        Err(Error::UnknownCategory(_))
    ));
}

#[test]
fn totals_saturate_at_decimal_max() {
    let mut ledger = Ledger::new();
    for description in ["Deposit", "Another deposit"] {
        ledger
            .add(
                ExpenseEntry::new(
                    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                    Category::Housing,
                    description,
                    Decimal::MAX,
                )
                .unwrap(),
            )
            .unwrap();
    }
    assert_eq!(ledger.total(), Decimal::MAX);
    assert_eq!(ledger.totals_by_category()[&Category::Housing], Decimal::MAX);
}
