use std::{fs, io, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Word that ends the game when typed instead of a square.
    pub quit_command: String,
    pub empty_square: char,
    pub show_captures: bool,
    pub show_coordinates: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quit_command: "exit".into(),
            empty_square: '-',
            show_captures: true,
            show_coordinates: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl Config {
    /// Load from `path`. A missing path or file gives the defaults.
    pub fn load(path: Option<&PathBuf>) -> Result<Self, ConfigError> {
        match path {
            Some(p) if p.exists() => {
                let content = fs::read_to_string(p).map_err(|source| ConfigError::Read {
                    path: p.clone(),
                    source,
                })?;
                Self::from_yaml(&content)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = Config::from_yaml("quit_command: quit\n").unwrap();
        assert_eq!(cfg.quit_command, "quit");
        assert_eq!(cfg.empty_square, '-');
        assert!(cfg.show_captures);
    }

    #[test]
    fn full_config_parses() {
        let yaml = "quit_command: q\nempty_square: '.'\nshow_captures: false\nshow_coordinates: false\n";
        let cfg = Config::from_yaml(yaml).unwrap();
        assert_eq!(
            cfg,
            Config {
                quit_command: "q".into(),
                empty_square: '.',
                show_captures: false,
                show_coordinates: false,
            }
        );
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(matches!(
            Config::from_yaml("show_captures: [1, 2"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn nonexistent_path_gives_defaults() {
        let path = PathBuf::from("/nonexistent/rchess.yaml");
        assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());
        assert_eq!(Config::load(None).unwrap(), Config::default());
    }
}
