use std::{env, str::FromStr};

use crate::error::{CliError, Result};

pub const FORMAT_KEY: &str = "EDIT_DISTANCE_FORMAT";
pub const TRACE_KEY: &str = "EDIT_DISTANCE_TRACE";
pub const RECOMPARE_KEY: &str = "EDIT_DISTANCE_RECOMPARE";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

/// Output settings read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    /// Print the edit script after each table.
    pub trace: bool,
    /// Replacement `from` sequence for a second comparison.
    pub recompare: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup(FORMAT_KEY) {
            Some(value) => {
                value.parse::<OutputFormat>().map_err(|_| CliError::InvalidConfig {
                    key: FORMAT_KEY,
                    value,
                })?
            }
            None => OutputFormat::default(),
        };
        let trace = match lookup(TRACE_KEY) {
            Some(value) => parse_flag(&value).ok_or(CliError::InvalidConfig {
                key: TRACE_KEY,
                value,
            })?,
            None => false,
        };
        let recompare = lookup(RECOMPARE_KEY);
        Ok(Self {
            format,
            trace,
            recompare,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
