//! Command-line and environment configuration.

use chrono_tz::Tz;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

use league_common::{LeagueError, LeagueResult};

#[derive(Parser, Debug, Clone)]
#[command(name = "league-api")]
#[command(about = "Head-to-head preview and league content API server")]
pub struct Args {
    /// Listen address
    #[arg(short, long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    pub listen: String,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Number of tokio worker threads (default: number of CPU cores)
    #[arg(long, env = "TOKIO_WORKER_THREADS")]
    pub worker_threads: Option<usize>,

    /// Directory rendered previews are written to
    #[arg(long, env = "UPLOAD_DIR", default_value = "./uploads")]
    pub upload_dir: PathBuf,

    /// Directory relative team logo paths resolve against
    #[arg(long, env = "MEDIA_ROOT")]
    pub media_root: Option<PathBuf>,

    /// Redis URL for preview pointers; in-process pointers when unset
    #[arg(long, env = "REDIS_URL")]
    pub redis_url: Option<String>,

    /// Namespace prepended to Redis pointer keys
    #[arg(long, env = "REDIS_PREFIX", default_value = storage::DEFAULT_PREFIX)]
    pub redis_prefix: String,

    /// YAML content catalog
    #[arg(long, env = "CATALOG_PATH", default_value = "./catalog.yaml")]
    pub catalog: PathBuf,

    /// Public base URL used in sharing metadata
    #[arg(long, env = "SITE_URL", default_value = "http://localhost:8080")]
    pub site_url: String,

    /// IANA timezone event dates are expressed in
    #[arg(long, env = "SITE_TIMEZONE", default_value = "UTC")]
    pub timezone: String,

    /// Token required on officials write-backs
    #[arg(long, env = "ADMIN_TOKEN")]
    pub admin_token: Option<String>,
}

impl Args {
    pub fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }

    pub fn site(&self) -> LeagueResult<SiteConfig> {
        let timezone = self
            .timezone
            .parse::<Tz>()
            .map_err(|e| LeagueError::InvalidParameter {
                param: "SITE_TIMEZONE".to_string(),
                message: e.to_string(),
            })?;

        Ok(SiteConfig::new(&self.site_url, timezone).with_admin_token(self.admin_token.clone()))
    }
}

/// Site-wide settings shared by every handler.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Base URL without a trailing slash.
    pub url: String,
    pub timezone: Tz,
    pub admin_token: Option<String>,
}

impl SiteConfig {
    pub fn new(url: &str, timezone: Tz) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            timezone,
            admin_token: None,
        }
    }

    pub fn with_admin_token(mut self, token: Option<String>) -> Self {
        self.admin_token = token.filter(|t| !t.is_empty());
        self
    }

    /// Public URL of an event's head-to-head preview.
    pub fn preview_url(&self, id: impl std::fmt::Display) -> String {
        format!("{}/head-to-head?post={}", self.url, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["league-api"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_site_url_trailing_slash() {
        let site = SiteConfig::new("https://league.example/", Tz::UTC);
        assert_eq!(site.preview_url(100), "https://league.example/head-to-head?post=100");
    }

    #[test]
    fn test_timezone_parsed() {
        let site = args(&["--timezone", "America/Chicago"]).site().unwrap();
        assert_eq!(site.timezone, chrono_tz::America::Chicago);
    }

    #[test]
    fn test_bad_timezone_rejected() {
        assert!(args(&["--timezone", "Mars/Olympus"]).site().is_err());
    }

    #[test]
    fn test_empty_admin_token_disabled() {
        let site = args(&["--admin-token", ""]).site().unwrap();
        assert_eq!(site.admin_token, None);
    }

    #[test]
    fn test_redis_prefix_default() {
        assert_eq!(args(&[]).redis_prefix, "league:");
        assert_eq!(args(&["--redis-prefix", "staging:"]).redis_prefix, "staging:");
    }

    #[test]
    fn test_log_level() {
        assert_eq!(args(&["--log-level", "DEBUG"]).level(), Level::DEBUG);
        assert_eq!(args(&["--log-level", "chatty"]).level(), Level::INFO);
    }
}
