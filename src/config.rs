use anyhow::{Context, Result};
use std::{env, path::PathBuf, str::FromStr};

/// How Get and Delete report a missing comment.
///
/// Update always answers a miss with 404.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotFoundPolicy {
    /// Get and Delete answer a miss with `null` and 200.
    #[default]
    Legacy,
    /// All item operations answer a miss with 404 `Comment not found`.
    Strict,
}

impl FromStr for NotFoundPolicy {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "strict" => Ok(Self::Strict),
            _ => Err(anyhow::anyhow!(
                "not-found policy must be one of: legacy, strict"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub seed_file: Option<PathBuf>,
    pub not_found_policy: NotFoundPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            seed_file: None,
            not_found_policy: NotFoundPolicy::Legacy,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let host = env::var("APP_HOST").unwrap_or(defaults.host);

        let port = match env::var("APP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .context("APP_PORT must be a valid u16")?,
            Err(_) => defaults.port,
        };

        let seed_file = env::var_os("COMMENTS_SEED_FILE")
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        let not_found_policy = match env::var("COMMENTS_NOT_FOUND_POLICY") {
            Ok(raw) => raw
                .parse::<NotFoundPolicy>()
                .context("COMMENTS_NOT_FOUND_POLICY is invalid")?,
            Err(_) => defaults.not_found_policy,
        };

        Ok(Self {
            host,
            port,
            seed_file,
            not_found_policy,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
