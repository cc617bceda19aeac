//! Runtime configuration drawn from the process environment.

use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use tracing::{info, warn};

/// Port the HTTP server listens on when `PORT` is unset.
const DEFAULT_PORT: u16 = 3000;
/// Location of the persisted state document when `STATE_FILE` is unset.
const DEFAULT_STATE_FILE: &str = "data/state.json";
/// Directory of static display assets when `PUBLIC_DIR` is unset.
const DEFAULT_PUBLIC_DIR: &str = "public";
/// Poll cadence in milliseconds when `REMOTE_POLL_MS` is unset.
const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Path of the persisted state document.
    pub state_file: PathBuf,
    /// Directory served as static display assets.
    pub public_dir: PathBuf,
    /// Remote sync settings, absent when no source URL is configured.
    pub remote_sync: Option<RemoteSyncConfig>,
}

#[derive(Debug, Clone)]
/// Settings of the background remote sync loop.
pub struct RemoteSyncConfig {
    /// URL of the remote scoreboard feed.
    pub url: String,
    /// Delay between consecutive poll cycles.
    pub poll_interval: Duration,
}

impl AppConfig {
    /// Assemble the configuration from environment variables, falling back to
    /// built-in defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let port = parse_var("PORT", DEFAULT_PORT);
        let state_file = env_path("STATE_FILE", DEFAULT_STATE_FILE);
        let public_dir = env_path("PUBLIC_DIR", DEFAULT_PUBLIC_DIR);

        let remote_sync = match non_empty_var("REMOTE_SOURCE_URL") {
            Some(url) => {
                let poll_ms = parse_var("REMOTE_POLL_MS", DEFAULT_POLL_INTERVAL_MS);
                Some(RemoteSyncConfig {
                    url,
                    poll_interval: Duration::from_millis(poll_ms),
                })
            }
            None => {
                info!("REMOTE_SOURCE_URL not set; remote sync disabled");
                None
            }
        };

        Self {
            port,
            state_file,
            public_dir,
            remote_sync,
        }
    }
}

/// Read an environment variable, treating the empty string as unset.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

/// Parse an environment variable, logging and falling back on bad values.
fn parse_var<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = non_empty_var(name) else {
        return default;
    };

    match raw.parse() {
        Ok(value) => value,
        Err(err) => {
            warn!(
                variable = name,
                value = %raw,
                error = %err,
                "unparsable environment variable; using default"
            );
            default
        }
    }
}

fn env_path(name: &str, default: &str) -> PathBuf {
    non_empty_var(name).map_or_else(|| PathBuf::from(default), PathBuf::from)
}
