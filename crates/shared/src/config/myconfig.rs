use anyhow::{Context, Result, anyhow};
use std::{path::PathBuf, str::FromStr};

pub const DEFAULT_CARD_LENGTH: usize = 16;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// Longest card number in circulation.
const MAX_CARD_LENGTH: usize = 19;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub is_dev: bool,
    pub card_length: usize,
    pub max_attempts: u32,
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            is_dev: false,
            card_length: DEFAULT_CARD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            log_dir: None,
        }
    }
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_dev = match var("DEV_MODE").as_deref() {
            None | Some("") | Some("false") | Some("0") => false,
            Some("true") | Some("1") => true,
            Some(other) => {
                return Err(anyhow!("DEV_MODE must be 'true' or 'false', got '{other}'"));
            }
        };

        let card_length: usize = parse_or(&var, "CARD_LENGTH", DEFAULT_CARD_LENGTH)?;
        if !(2..=MAX_CARD_LENGTH).contains(&card_length) {
            return Err(anyhow!(
                "CARD_LENGTH must be between 2 and {MAX_CARD_LENGTH}, got {card_length}"
            ));
        }

        let max_attempts: u32 = parse_or(&var, "ISSUE_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?;
        if max_attempts == 0 {
            return Err(anyhow!("ISSUE_MAX_ATTEMPTS must be at least 1"));
        }

        let log_dir = var("LOG_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| is_dev.then(|| PathBuf::from("./logs")));

        Ok(Self {
            is_dev,
            card_length,
            max_attempts,
            log_dir,
        })
    }
}

fn parse_or<F, T>(var: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(key) {
        Some(raw) if !raw.is_empty() => raw
            .trim()
            .parse::<T>()
            .context(format!("{key} must be a valid integer")),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]).unwrap(), Config::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CARD_LENGTH", "19"),
            ("ISSUE_MAX_ATTEMPTS", "5"),
            ("LOG_DIR", "/tmp/creditcard"),
        ])
        .unwrap();

        assert_eq!(config.card_length, 19);
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/creditcard")));
        assert!(!config.is_dev);
    }

    #[test]
    fn test_dev_mode_logs_locally() {
        let config = config_from(&[("DEV_MODE", "1")]).unwrap();

        assert!(config.is_dev);
        assert_eq!(config.log_dir, Some(PathBuf::from("./logs")));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(config_from(&[("DEV_MODE", "maybe")]).is_err());
        assert!(config_from(&[("CARD_LENGTH", "sixteen")]).is_err());
        assert!(config_from(&[("CARD_LENGTH", "1")]).is_err());
        assert!(config_from(&[("CARD_LENGTH", "20")]).is_err());
        assert!(config_from(&[("ISSUE_MAX_ATTEMPTS", "0")]).is_err());
    }
}
