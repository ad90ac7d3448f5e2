// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use wealthdash::session::Session;
use wealthdash::store::{self, JsonStore};
use wealthdash::{cli, commands, utils};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    utils::init_tracing(matches.get_flag("verbose"));

    let path = store::data_path(matches.get_one::<std::path::PathBuf>("data").map(|p| p.as_path()))?;
    let mut session = Session::open(JsonStore::new(&path));

    match matches.subcommand() {
        Some(("init", _)) => {
            commands::profile::init(&mut session)?;
            println!("Data file ready at {}", path.display());
        }
        Some(("summary", sub)) => commands::summary::handle(&session, sub)?,
        Some(("profile", sub)) => commands::profile::handle(&mut session, sub)?,
        Some(("assets", sub)) => commands::assets::handle(&mut session, sub)?,
        Some(("expense", sub)) => commands::expenses::handle(&mut session, sub)?,
        Some(("project", sub)) => commands::projection::handle(&session, sub)?,
        Some(("schedule", sub)) => commands::projection::schedule(sub)?,
        Some(("export", sub)) => commands::exporter::handle(&session, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
