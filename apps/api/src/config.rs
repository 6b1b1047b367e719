use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::matching::SkipPolicy;

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Scratch directory uploads are written to before extraction.
    pub upload_dir: PathBuf,
    pub skip_policy: SkipPolicy,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            upload_dir: PathBuf::from("uploads"),
            skip_policy: SkipPolicy::default(),
            max_upload_bytes: 16 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. `from_env` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let port = match lookup("PORT") {
            Some(v) => v.parse::<u16>().context("PORT must be a valid port number")?,
            None => defaults.port,
        };

        let skip_policy = match lookup("SKIP_POLICY") {
            Some(v) => v.parse::<SkipPolicy>().map_err(|e| anyhow!(e))?,
            None => defaults.skip_policy,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_MB") {
            Some(v) => {
                let mb = v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_MB must be a whole number of megabytes")?;
                mb.checked_mul(1024 * 1024)
                    .context("MAX_UPLOAD_MB is too large")?
            }
            None => defaults.max_upload_bytes,
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            skip_policy,
            max_upload_bytes,
        })
    }
}
