//! Engine settings loaded from `config.toml`.
//!
//! Every field has a default, so a partial file (or no file at all) still yields a
//! usable configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Names of the verbs the engine handles itself when no reaction claims the turn.
///
/// Games may rename these (e.g. `walk` instead of `go`); the names must also be
/// registered as actions for the player to be able to type them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuiltinVerbs {
    #[serde(rename = "use")]
    pub use_verb: String,
    pub go: String,
    pub look: String,
    pub take: String,
    pub drop: String,
    pub inventory: String,
}

impl Default for BuiltinVerbs {
    fn default() -> Self {
        Self {
            use_verb: "use".to_string(),
            go: "go".to_string(),
            look: "look".to_string(),
            take: "take".to_string(),
            drop: "drop".to_string(),
            inventory: "inventory".to_string(),
        }
    }
}

impl BuiltinVerbs {
    /// All builtin verb names, in dispatch order.
    pub fn all(&self) -> [&str; 6] {
        [
            self.use_verb.as_str(),
            self.go.as_str(),
            self.look.as_str(),
            self.take.as_str(),
            self.drop.as_str(),
            self.inventory.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub verbs: BuiltinVerbs,
    /// Lowercase player input before it is tokenized.
    pub normalize_case: bool,
    pub prompt: String,
    /// Where the REPL keeps its line history. No history is kept if unset.
    pub history_file: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            verbs: BuiltinVerbs::default(),
            normalize_case: true,
            prompt: "> ".to_string(),
            history_file: None,
        }
    }
}

/// Load engine settings, falling back to defaults if the file is missing or malformed.
///
/// # Logging
/// - `info!` on successful load
/// - `warn!` if the file cannot be read or parsed
pub fn load_config(toml_path: &Path) -> EngineConfig {
    match try_load_config(toml_path) {
        Ok(config) => {
            info!("engine config loaded from '{}'", toml_path.display());
            config
        },
        Err(e) => {
            warn!(
                "Could not load engine config from '{}': {e:#}. Using defaults.",
                toml_path.display()
            );
            EngineConfig::default()
        },
    }
}

fn try_load_config(toml_path: &Path) -> Result<EngineConfig> {
    let text = fs::read_to_string(toml_path)
        .with_context(|| format!("reading engine config from '{}'", toml_path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing engine config from '{}'", toml_path.display()))
}
