// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;
use tempfile::tempdir;
use wealthdash::models::{Category, ExpenseEntry};
use wealthdash::session::Session;
use wealthdash::store::MemoryStore;
use wealthdash::{cli, commands::exporter};

fn session() -> Session<MemoryStore> {
    let mut session = Session::open(MemoryStore::new());
    session
        .add_expense(
            ExpenseEntry::new(
                NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
                Category::Food,
                "Corner shop, weekly run",
                Decimal::from_str_exact("12.34").unwrap(),
            )
            .unwrap(),
        )
        .unwrap();
    session
}

fn export(session: &Session<MemoryStore>, format: &str, out: &str) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from([
        "wealthdash",
        "export",
        "expenses",
        "--format",
        format,
        "--out",
        out,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(session, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_expenses_pretty_json() {
    let session = session();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    export(&session, "json", &out_path.to_string_lossy()).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "date": "2025-01-02",
                "category": "Food",
                "description": "Corner shop, weekly run",
                "amount": "12.34"
            }
        ])
    );
}

#[test]
fn export_expenses_csv_quotes_commas() {
    let session = session();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    export(&session, "CSV", &out_path.to_string_lossy()).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("date,category,description,amount"));
    assert_eq!(
        lines.next(),
        Some("2025-01-02,Food,\"Corner shop, weekly run\",12.34")
    );
}

#[test]
fn export_expenses_rejects_unknown_format() {
    let session = session();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    assert!(export(&session, "xml", &out_path.to_string_lossy()).is_err());
    assert!(!out_path.exists());
}
