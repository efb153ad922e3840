use anyhow::{Result, bail};
use chrono::FixedOffset;
use clap::Parser;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "wishboard")]
#[command(about = "Runs the wish board service", long_about = None)]
pub struct Cli {
    #[arg(short = 'c', long = "config")]
    pub config_path: Option<String>,

    /// Overrides `app.port` from the config file.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,
}

pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".wishboard")
}

pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.yaml")
}

#[derive(Debug, Deserialize, Clone)]
pub struct App {
    #[serde(default = "default_database")]
    database: String,
    #[serde(default = "default_port")]
    port: u16,
}

fn default_database() -> String {
    "wishes.db".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for App {
    fn default() -> Self {
        App {
            database: default_database(),
            port: default_port(),
        }
    }
}

impl App {
    pub fn get_db(&self) -> &str {
        &self.database
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub fn set_port(&mut self, port: u16) {
        self.port = port;
    }
}

/// Tunables for the board itself. Every field has a default so an empty
/// `board:` section (or none at all) behaves like the stock service.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct Board {
    #[serde(default = "default_list_limit")]
    pub list_limit: u32,
    #[serde(default = "default_max_content_chars")]
    pub max_content_chars: usize,
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_list_limit() -> u32 {
    50
}

fn default_max_content_chars() -> usize {
    100
}

fn default_utc_offset_hours() -> i32 {
    9
}

fn default_max_body_bytes() -> usize {
    16 * 1024
}

impl Default for Board {
    fn default() -> Self {
        Board {
            list_limit: default_list_limit(),
            max_content_chars: default_max_content_chars(),
            utc_offset_hours: default_utc_offset_hours(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Board {
    /// Offset used when stamping `created_at`.
    pub fn utc_offset(&self) -> Result<FixedOffset> {
        match FixedOffset::east_opt(self.utc_offset_hours * 3600) {
            Some(offset) => Ok(offset),
            None => bail!("board.utc_offset_hours out of range: {}", self.utc_offset_hours),
        }
    }

    fn validate(&self) -> Result<()> {
        if !(1..=500).contains(&self.list_limit) {
            bail!("board.list_limit must be between 1 and 500, got {}", self.list_limit);
        }
        if self.max_content_chars == 0 {
            bail!("board.max_content_chars must be at least 1");
        }
        if !(-23..=23).contains(&self.utc_offset_hours) {
            bail!(
                "board.utc_offset_hours must be between -23 and 23, got {}",
                self.utc_offset_hours
            );
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub app: App,
    #[serde(default)]
    pub board: Board,
}

impl Config {
    /// Loads the config at `path`. A missing file yields the defaults.
    pub fn new(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::warn!(path = ?path, "config file not found, using defaults");
            return Ok(Config::default());
        }
        let yaml_str = fs::read_to_string(path)?;
        Config::from_yaml(&yaml_str)
    }

    pub fn from_yaml(yaml_str: &str) -> Result<Self> {
        let yaml_with_env = Config::substitute_env_vars(yaml_str);
        let config: Config = serde_yaml::from_str(&yaml_with_env)?;
        config.board.validate()?;
        Ok(config)
    }

    /// Expands `${VAR}` and `${VAR:-default}` references.
    fn substitute_env_vars(yaml_str: &str) -> String {
        let mut result = yaml_str.to_string();
        let mut offset = 0;

        while let Some(start) = result[offset..].find("${") {
            let actual_start = offset + start;
            let Some(end) = result[actual_start..].find('}') else {
                break;
            };
            let reference = &result[actual_start + 2..actual_start + end];

            let value = match reference.split_once(":-") {
                Some((name, fallback)) => env::var(name).unwrap_or_else(|_| fallback.to_string()),
                None => env::var(reference).unwrap_or_else(|_| {
                    tracing::warn!(var = reference, "environment variable not set");
                    String::new()
                }),
            };

            result.replace_range(actual_start..actual_start + end + 1, &value);
            offset = actual_start + value.len();
        }

        result
    }
}
