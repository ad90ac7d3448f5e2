// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod errors;
pub mod ledger;
pub mod models;
pub mod profile;
pub mod projection;
pub mod schedule;
pub mod session;
pub mod store;
pub mod utils;
