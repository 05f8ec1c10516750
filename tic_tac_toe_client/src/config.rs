use anyhow::{bail, Context, Result};
use std::env;

use tic_tac_toe_engine::game::players::DEFAULT_PLAYER1_NAME;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_filter: String,
    pub player1_name: String,
    /// Unset means the name follows the computer checkbox.
    pub player2_name: Option<String>,
    pub vs_computer: bool,
    /// Fixed seed for the computer's random fallback; entropy when unset.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_filter: "info".to_string(),
            player1_name: DEFAULT_PLAYER1_NAME.to_string(),
            player2_name: None,
            vs_computer: true,
            seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = AppConfig::default();

        let vs_computer = match lookup("TTT_VS_COMPUTER") {
            Some(value) => parse_bool(&value).context("Invalid TTT_VS_COMPUTER")?,
            None => defaults.vs_computer,
        };

        let seed = lookup("TTT_SEED")
            .map(|value| {
                value
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("Invalid TTT_SEED {:?}", value))
            })
            .transpose()?;

        Ok(AppConfig {
            log_filter: lookup("TTT_LOG").unwrap_or(defaults.log_filter),
            player1_name: lookup("TTT_PLAYER1").unwrap_or(defaults.player1_name),
            player2_name: lookup("TTT_PLAYER2"),
            vs_computer,
            seed,
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => bail!("expected true/false, got {:?}", other),
    }
}
