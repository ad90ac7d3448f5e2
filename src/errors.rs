// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised by the ledger, profile, and store.
#[derive(Debug, Error)]
pub enum Error {
    #[error("index {index} out of range (ledger holds {len} entries)")]
    OutOfRange { index: usize, len: usize },
    #[error("invalid expense entry: {0}")]
    InvalidEntry(String),
    #[error("invalid value {value} for {field}: must be non-negative")]
    InvalidValue { field: &'static str, value: Decimal },
    #[error("unknown profile field '{0}'")]
    UnknownField(String),
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("no quick-add preset named '{0}'")]
    UnknownPreset(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
