// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, command, value_parser};

use crate::projection::MAX_HORIZON_MONTHS;

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    ]
}

fn index_arg() -> Arg {
    Arg::new("index")
        .required(true)
        .value_parser(value_parser!(usize))
        .help("Row number as shown by `expense list`")
}

fn expense_command() -> Command {
    Command::new("expense")
        .about("Record and review this period's expenses")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Add an expense")
                .arg(Arg::new("category").long("category").required(true))
                .arg(Arg::new("description").long("description").required(true))
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(Arg::new("date").long("date").help("YYYY-MM-DD, defaults to today")),
        )
        .subcommand(
            Command::new("quick")
                .about("Add an expense from the preset catalog")
                .arg(Arg::new("category").required(true))
                .arg(Arg::new("item").required(true))
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .help("Override the preset amount"),
                )
                .arg(Arg::new("date").long("date")),
        )
        .subcommand(
            Command::new("presets")
                .about("List quick-add presets")
                .arg(Arg::new("category").long("category")),
        )
        .subcommand(
            Command::new("list")
                .about("List recorded expenses")
                .args(json_args()),
        )
        .subcommand(
            Command::new("edit")
                .about("Edit fields of a recorded expense")
                .arg(index_arg())
                .arg(Arg::new("category").long("category"))
                .arg(Arg::new("description").long("description"))
                .arg(Arg::new("amount").long("amount"))
                .arg(Arg::new("date").long("date")),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete a recorded expense")
                .arg(index_arg()),
        )
        .subcommand(Command::new("undo").about("Remove the most recently added expense"))
        .subcommand(Command::new("clear").about("Delete every recorded expense"))
        .subcommand(
            Command::new("by-category")
                .about("Spending grouped by category")
                .args(json_args()),
        )
}

pub fn build_cli() -> Command {
    command!()
        .name("wealthdash")
        .about("Personal budget, asset allocation, and net-worth projection")
        .arg(
            Arg::new("data")
                .long("data")
                .global(true)
                .value_parser(value_parser!(std::path::PathBuf))
                .help("Data file (defaults to $WEALTHDASH_DATA or the platform data dir)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(Command::new("init").about("Create the data file with defaults"))
        .subcommand(
            Command::new("summary")
                .about("This month's cash-flow snapshot")
                .args(json_args()),
        )
        .subcommand(
            Command::new("profile")
                .about("Income, budget, and contribution settings")
                .subcommand_required(true)
                .subcommand(Command::new("show").args(json_args()))
                .subcommand(
                    Command::new("set")
                        .about("Set one field, e.g. `profile set salary 58000`")
                        .arg(Arg::new("field").required(true))
                        .arg(Arg::new("value").required(true)),
                ),
        )
        .subcommand(
            Command::new("assets")
                .about("Asset buckets and net worth")
                .subcommand_required(true)
                .subcommand(Command::new("show").args(json_args()))
                .subcommand(
                    Command::new("update")
                        .about("Update one or more asset balances")
                        .arg(Arg::new("cash").long("cash"))
                        .arg(Arg::new("strategy-capital").long("strategy-capital"))
                        .arg(Arg::new("strategy-profit").long("strategy-profit"))
                        .arg(Arg::new("fund-holdings").long("fund-holdings")),
                ),
        )
        .subcommand(expense_command())
        .subcommand(
            Command::new("project")
                .about("Project net worth month by month")
                .arg(
                    Arg::new("fund-rate")
                        .long("fund-rate")
                        .default_value("10.0")
                        .help("Index fund annual return, percent (4-15)"),
                )
                .arg(
                    Arg::new("strategy-rate")
                        .long("strategy-rate")
                        .default_value("12.0")
                        .help("Options strategy annual return, percent (5-20)"),
                )
                .arg(
                    Arg::new("months")
                        .long("months")
                        .default_value("96")
                        .value_parser(value_parser!(u32).range(1..=i64::from(MAX_HORIZON_MONTHS)))
                        .help("Projection horizon in months (1-1200)"),
                )
                .arg(
                    Arg::new("yearly")
                        .long("yearly")
                        .action(ArgAction::SetTrue)
                        .help("Only show year-end milestones"),
                )
                .args(json_args()),
        )
        .subcommand(
            Command::new("schedule")
                .about("Show the contribution raise schedule")
                .args(json_args()),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand_required(true)
                .subcommand(
                    Command::new("expenses")
                        .arg(Arg::new("format").long("format").default_value("csv"))
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
}
