//! Environment-driven server configuration

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{Error, Result};

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_REFERENCE_CSV: &str = "data/no_fault.csv";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

/// Runtime settings for the `gearscope-server` binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub reference_csv: PathBuf,
    pub max_upload_bytes: usize,
    pub max_sessions: usize,
    pub chart_width: u32,
    pub chart_height: u32,
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            reference_csv: PathBuf::from(DEFAULT_REFERENCE_CSV),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_sessions: DEFAULT_MAX_SESSIONS,
            chart_width: gearscope_viz::DEFAULT_WIDTH,
            chart_height: gearscope_viz::DEFAULT_HEIGHT,
            log_json: false,
        }
    }
}

impl ServerConfig {
    /// Read `GEARSCOPE_*` variables from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    ///
    /// Unset variables take their defaults. A malformed bind address is an
    /// error; malformed numbers and flags fall back to the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let bind_raw = lookup("GEARSCOPE_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw.parse::<SocketAddr>().map_err(|e| Error::Config {
            name: "GEARSCOPE_BIND",
            value: bind_raw.clone(),
            reason: e.to_string(),
        })?;

        let config = Self {
            bind,
            reference_csv: lookup("GEARSCOPE_REFERENCE_CSV")
                .map(PathBuf::from)
                .unwrap_or(defaults.reference_csv),
            max_upload_bytes: parse_or(&lookup, "GEARSCOPE_MAX_UPLOAD_BYTES", defaults.max_upload_bytes),
            max_sessions: parse_or(&lookup, "GEARSCOPE_MAX_SESSIONS", defaults.max_sessions),
            chart_width: parse_or(&lookup, "GEARSCOPE_CHART_WIDTH", defaults.chart_width),
            chart_height: parse_or(&lookup, "GEARSCOPE_CHART_HEIGHT", defaults.chart_height),
            log_json: flag_or(&lookup, "GEARSCOPE_LOG_JSON", defaults.log_json),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let checks: [(&'static str, usize); 4] = [
            ("GEARSCOPE_MAX_UPLOAD_BYTES", self.max_upload_bytes),
            ("GEARSCOPE_MAX_SESSIONS", self.max_sessions),
            ("GEARSCOPE_CHART_WIDTH", self.chart_width as usize),
            ("GEARSCOPE_CHART_HEIGHT", self.chart_height as usize),
        ];
        for (name, value) in checks {
            if value == 0 {
                return Err(Error::Config {
                    name,
                    value: value.to_string(),
                    reason: "must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(name)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn flag_or<F>(lookup: &F, name: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}
