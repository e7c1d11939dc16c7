// Config module: settings read once from the environment at startup.

use std::env;
use std::path::PathBuf;

/// Origin used when `PATHBOT_ORIGIN` is not set.
pub const DEFAULT_ORIGIN: &str = "https://api.noopschallenge.com";

/// Client configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base origin every request path is appended to, without a trailing `/`.
    pub origin: String,
    /// Print the exit direction/distance hint under the exits list.
    pub show_hint: bool,
    /// Show a spinner on stderr while a request is in flight.
    pub spinner: bool,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            show_hint: false,
            spinner: true,
            log_dir: default_log_dir(),
        }
    }
}

impl Config {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PATHBOT_ORIGIN` - Server origin (default: `https://api.noopschallenge.com`)
    /// - `PATHBOT_SHOW_HINT` - Print the maze exit hint (default: false)
    /// - `PATHBOT_SPINNER` - Show a spinner during requests (default: true)
    /// - `PATHBOT_LOG_DIR` - Log file directory (default: `<cache dir>/pathbot/logs`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(origin) = lookup("PATHBOT_ORIGIN") {
            let origin = origin.trim().trim_end_matches('/');
            if !origin.is_empty() {
                config.origin = origin.to_string();
            }
        }
        if let Some(show) = lookup("PATHBOT_SHOW_HINT").as_deref().and_then(parse_bool) {
            config.show_hint = show;
        }
        if let Some(show) = lookup("PATHBOT_SPINNER").as_deref().and_then(parse_bool) {
            config.spinner = show;
        }
        if let Some(dir) = lookup("PATHBOT_LOG_DIR").filter(|d| !d.is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }

        config
    }
}

fn default_log_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("pathbot").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
