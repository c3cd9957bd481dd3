//! Command line settings read from the environment.
//!
//! `main` loads `.env` through `dotenv` first, so every value can also live
//! in a `.env` file next to the binary.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Path of the log4rs config file.
pub const ENV_LOG_CONFIG: &str = "SUBNET_SUMMARY_LOG_CONFIG";
/// Output format: `table`, `csv` or `json`.
pub const ENV_OUTPUT: &str = "SUBNET_SUMMARY_OUTPUT";
/// Log level used when no log4rs config file is found.
pub const ENV_LOG_LEVEL: &str = "SUBNET_SUMMARY_LOG_LEVEL";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{other}', expected table, csv or json"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        write!(f, "{name}")
    }
}

/// Settings for the command line front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_config: String,
    pub output: OutputFormat,
    pub log_level: log::LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            output: OutputFormat::Table,
            log_level: log::LevelFilter::Warn,
        }
    }
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Settings, Box<dyn Error>> {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`; unset or blank keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Settings, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut settings = Settings::default();

        if let Some(path) = get(ENV_LOG_CONFIG) {
            settings.log_config = path.trim().to_string();
        }
        if let Some(output) = get(ENV_OUTPUT) {
            settings.output = output.parse()?;
        }
        if let Some(level) = get(ENV_LOG_LEVEL) {
            settings.log_level = level
                .trim()
                .parse()
                .map_err(|_| format!("invalid {ENV_LOG_LEVEL} '{level}'"))?;
        }
        Ok(settings)
    }
}
