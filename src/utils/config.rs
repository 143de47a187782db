use std::env;

use dotenvy::dotenv;
use thiserror::Error;

use super::consts;

/// Session-scoped settings for the draft holder.
///
/// With no variables set, the defaults keep the documented initial state:
/// no prefill, and the draft is reset when the session ends.
#[derive(Clone)]
pub struct Config {
    prefill_email: Option<String>,
    reset_on_session_end: bool,
}

impl Config {
    pub fn prefill_email(&self) -> Option<&str> {
        self.prefill_email.as_deref()
    }

    pub fn reset_on_session_end(&self) -> bool {
        self.reset_on_session_end
    }

    pub fn new(prefill_email: Option<String>, reset_on_session_end: bool) -> Self {
        Self {
            prefill_email,
            reset_on_session_end,
        }
    }

    pub fn default() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let prefill_email = opt_var(consts::env::PREFILL_EMAIL_ENV_VAR);
        let reset_on_session_end = parse_opt_bool(
            consts::env::RESET_ON_SESSION_END_ENV_VAR,
            opt_var(consts::env::RESET_ON_SESSION_END_ENV_VAR),
        )?
        .unwrap_or(true);

        Ok(Self {
            prefill_email,
            reset_on_session_end,
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid env var {0}")]
    Invalid(&'static str),
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn parse_opt_bool(
    key: &'static str,
    raw: Option<String>,
) -> Result<Option<bool>, ConfigError> {
    match raw {
        None => Ok(None),
        Some(v) => match v.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(Some(true)),
            "false" | "0" => Ok(Some(false)),
            _ => Err(ConfigError::Invalid(key)),
        },
    }
}
