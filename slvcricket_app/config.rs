use dotenvy::dotenv;
use std::{env, path::PathBuf};

pub const DEFAULT_STORAGE_KEY: &str = "slvCricket_players";

/// Browsers usually grant around 5 MiB per origin.
pub const DEFAULT_STORAGE_QUOTA: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub storage_quota: usize,
    pub export_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let data_dir = match env::var("SLVCRICKET_DATA_DIR") {
            Ok(val) if !val.trim().is_empty() => PathBuf::from(val),
            _ => PathBuf::from("data"),
        };

        let storage_key = match env::var("SLVCRICKET_STORAGE_KEY") {
            Ok(val) if !val.trim().is_empty() => val,
            _ => DEFAULT_STORAGE_KEY.to_string(),
        };

        let storage_quota = parse_quota(env::var("SLVCRICKET_STORAGE_QUOTA").ok());

        let export_dir = match env::var("SLVCRICKET_EXPORT_DIR") {
            Ok(val) if !val.trim().is_empty() => PathBuf::from(val),
            _ => PathBuf::from("."),
        };

        Self {
            data_dir,
            storage_key,
            storage_quota,
            export_dir,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            storage_quota: DEFAULT_STORAGE_QUOTA,
            export_dir: PathBuf::from("."),
        }
    }
}

fn parse_quota(value: Option<String>) -> usize {
    value
        .and_then(|val| val.trim().parse::<usize>().ok())
        .filter(|quota| *quota > 0)
        .unwrap_or(DEFAULT_STORAGE_QUOTA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quota() {
        assert_eq!(parse_quota(None), DEFAULT_STORAGE_QUOTA);
        assert_eq!(parse_quota(Some("1024".to_string())), 1024);
        assert_eq!(parse_quota(Some(" 2048 ".to_string())), 2048);
        assert_eq!(parse_quota(Some("lots".to_string())), DEFAULT_STORAGE_QUOTA);
        assert_eq!(parse_quota(Some("0".to_string())), DEFAULT_STORAGE_QUOTA);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.storage_key, "slvCricket_players");
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }
}
