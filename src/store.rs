// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use directories::ProjectDirs;

use crate::errors::Result;
use crate::models::AppState;

const APP: (&str, &str, &str) = ("com.wealthdash", "Wealthdash", "wealthdash");

pub const DATA_ENV: &str = "WEALTHDASH_DATA";

/// Resolves the data file: explicit path, then `WEALTHDASH_DATA`, then the
/// platform data dir.
pub fn data_path(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }
    if let Some(p) = std::env::var_os(DATA_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(p));
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("wealthdash.json"))
}

/// Load-at-start / save-on-mutation persistence for the whole state.
pub trait Store {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<AppState>>;
    /// Overwrites whatever was stored before.
    fn save(&mut self, state: &AppState) -> Result<()>;
}

pub fn decode(text: &str) -> Result<AppState> {
    let state: AppState = serde_json::from_str(text)?;
    state.finances.validate()?;
    Ok(state)
}

pub fn encode(state: &AppState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl Store for JsonStore {
    fn load(&self) -> Result<Option<AppState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)?;
        decode(&text).map(Some)
    }

    fn save(&mut self, state: &AppState) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.tmp_path();
        fs::write(&tmp, encode(state)?)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "state saved");
        Ok(())
    }
}

/// Keeps the encoded state in memory and counts saves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contents: Option<String>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with raw stored text, well-formed or not.
    pub fn with_contents(text: impl Into<String>) -> Self {
        MemoryStore {
            contents: Some(text.into()),
            saves: 0,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Option<AppState>> {
        self.contents.as_deref().map(decode).transpose()
    }

    fn save(&mut self, state: &AppState) -> Result<()> {
        self.contents = Some(encode(state)?);
        self.saves += 1;
        Ok(())
    }
}
