//! Driver configuration loaded from TOML

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use kq_core::Glyphs;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "kq_puzzle.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PuzzleConfig {
    /// Fixed seed for the opponent (None = fresh entropy every run)
    pub seed: Option<u64>,
    /// Draw boards with ASCII letters instead of chess symbols
    pub ascii: bool,
    /// Tracing filter used when RUST_LOG is unset
    pub log_level: String,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            seed: None,
            ascii: false,
            log_level: "warn".to_string(),
        }
    }
}

impl PuzzleConfig {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("Failed to parse configuration")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("In {}", path.display()))
    }

    /// Loads `explicit` if given, else the default file if it exists, else
    /// defaults.
    pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn glyphs(&self) -> Glyphs {
        if self.ascii {
            Glyphs::ascii()
        } else {
            Glyphs::unicode()
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
