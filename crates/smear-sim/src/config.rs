use serde::{Deserialize, Serialize};
use smear_core::model::deck::DECK_SIZE;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

const DEFAULT_CARDS_TO_DEAL: usize = 6;
const DEFAULT_TARGET_SCORE: i32 = 11;
const RUN_ID_ALLOWED: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789._-";

/// Root simulation configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SimConfig {
    pub run_id: String,
    pub games: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub rules: RulesConfig,
    pub players: Vec<PlayerConfig>,
    pub outputs: OutputsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: SimConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        validate_run_id(&self.run_id)?;

        if self.games == 0 {
            return Err(ValidationError::InvalidField {
                field: "games".to_string(),
                message: "number of games must be greater than zero".to_string(),
            });
        }

        self.rules.validate(self.players.len())?;
        self.outputs.validate(&self.run_id)?;
        self.logging.normalize();
        validate_players(&self.players)?;
        Ok(())
    }

    /// Number of seats at the table, one per configured player.
    pub fn seats(&self) -> usize {
        self.players.len()
    }

    /// Resolve output templates (`{run_id}` placeholders) into paths.
    pub fn resolved_outputs(&self) -> ResolvedOutputs {
        ResolvedOutputs {
            jsonl: resolve_template(&self.run_id, &self.outputs.jsonl),
            summary_md: resolve_template(&self.run_id, &self.outputs.summary_md),
        }
    }
}

/// Table rules block; defaults match the classic three-handed game to 11.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RulesConfig {
    #[serde(default = "default_cards_to_deal")]
    pub cards_to_deal: usize,
    #[serde(default = "default_target_score")]
    pub target_score: i32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            cards_to_deal: default_cards_to_deal(),
            target_score: default_target_score(),
        }
    }
}

impl RulesConfig {
    fn validate(&self, seats: usize) -> Result<(), ValidationError> {
        if self.cards_to_deal == 0 {
            return Err(ValidationError::InvalidField {
                field: "rules.cards_to_deal".to_string(),
                message: "cards_to_deal must be greater than zero".to_string(),
            });
        }

        if seats * self.cards_to_deal > DECK_SIZE {
            return Err(ValidationError::InvalidField {
                field: "rules.cards_to_deal".to_string(),
                message: format!(
                    "{seats} seats x {} cards exceeds the {DECK_SIZE}-card deck",
                    self.cards_to_deal
                ),
            });
        }

        if self.target_score <= 0 {
            return Err(ValidationError::InvalidField {
                field: "rules.target_score".to_string(),
                message: "target score must be positive".to_string(),
            });
        }

        Ok(())
    }
}

fn default_cards_to_deal() -> usize {
    DEFAULT_CARDS_TO_DEAL
}

fn default_target_score() -> i32 {
    DEFAULT_TARGET_SCORE
}

/// One seat at the table.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PlayerConfig {
    pub name: String,
    pub policy: PolicyKind,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    Greedy,
    Cautious,
}

/// Output artifact configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputsConfig {
    pub jsonl: String,
    pub summary_md: String,
}

impl OutputsConfig {
    fn validate(&self, run_id: &str) -> Result<(), ValidationError> {
        for (label, value) in [
            ("outputs.jsonl", &self.jsonl),
            ("outputs.summary_md", &self.summary_md),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::InvalidField {
                    field: label.to_string(),
                    message: "path must not be empty".to_string(),
                });
            }

            let resolved = resolve_template(run_id, value);
            if resolved.components().count() == 0 {
                return Err(ValidationError::InvalidField {
                    field: label.to_string(),
                    message: "resolved path is invalid".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Logging configuration defaults to disabled structured logs.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: default_tracing_level(),
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

fn validate_run_id(run_id: &str) -> Result<(), ValidationError> {
    if run_id.trim().is_empty() {
        return Err(ValidationError::InvalidField {
            field: "run_id".to_string(),
            message: "run_id must not be empty".to_string(),
        });
    }

    if !run_id.chars().all(|c| RUN_ID_ALLOWED.contains(c)) {
        return Err(ValidationError::InvalidField {
            field: "run_id".to_string(),
            message: "run_id may only contain alphanumeric characters, '.', '_' or '-'".to_string(),
        });
    }

    Ok(())
}

fn validate_players(players: &[PlayerConfig]) -> Result<(), ValidationError> {
    if players.len() < 2 {
        return Err(ValidationError::InvalidField {
            field: "players".to_string(),
            message: "at least two players must be specified".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for player in players {
        if player.name.trim().is_empty() {
            return Err(ValidationError::InvalidField {
                field: "players.name".to_string(),
                message: "player name must not be empty".to_string(),
            });
        }

        if !seen.insert(player.name.clone()) {
            return Err(ValidationError::InvalidField {
                field: "players".to_string(),
                message: format!("player name '{}' defined more than once", player.name),
            });
        }
    }

    Ok(())
}

fn resolve_template(run_id: &str, template: &str) -> PathBuf {
    let replaced = template.replace("{run_id}", run_id);
    PathBuf::from(replaced)
}

/// Fully resolved output paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOutputs {
    pub jsonl: PathBuf,
    pub summary_md: PathBuf,
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
