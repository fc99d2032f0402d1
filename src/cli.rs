use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::config::{AppConfig, NotFoundPolicy};

/// Command-line overrides layered on top of the environment configuration.
#[derive(Debug, Default, Parser)]
#[command(name = "comment-store")]
#[command(about = "In-memory comment REST service")]
pub struct Cli {
    #[arg(long)]
    pub host: Option<String>,
    #[arg(long)]
    pub port: Option<u16>,
    /// JSON array of comments loaded at startup instead of the built-in seed.
    #[arg(long)]
    pub seed_file: Option<PathBuf>,
    /// `legacy` answers missing comments with null, `strict` with 404.
    #[arg(long)]
    pub not_found_policy: Option<String>,
}

impl Cli {
    pub fn apply(self, mut config: AppConfig) -> Result<AppConfig> {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(seed_file) = self.seed_file {
            config.seed_file = Some(seed_file);
        }
        if let Some(policy) = self.not_found_policy {
            config.not_found_policy = policy
                .parse::<NotFoundPolicy>()
                .context("--not-found-policy is invalid")?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use crate::config::{AppConfig, NotFoundPolicy};
    use clap::Parser;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "comment-store",
            "--port",
            "8081",
            "--not-found-policy",
            "strict",
        ]);

        let config = cli.apply(AppConfig::default()).expect("flags are valid");
        assert_eq!(config.port, 8081);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.not_found_policy, NotFoundPolicy::Strict);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let cli = Cli {
            not_found_policy: Some("lenient".to_string()),
            ..Cli::default()
        };

        assert!(cli.apply(AppConfig::default()).is_err());
    }
}
