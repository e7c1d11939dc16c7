// API client module: a small blocking HTTP client for the maze server.
// One request is in flight at a time and every failure is returned to the
// caller as an `ExplorerError`; nothing is retried here.

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use serde::Serialize;
use std::time::Duration;

use crate::config::Config;
use crate::error::{ExplorerError, Result};
use crate::location::{DirectionCommand, Location};

/// Path of the session-creation endpoint.
pub const START_PATH: &str = "/pathbot/start";

/// The two calls a maze session needs. `ApiClient` talks HTTP; tests
/// provide scripted implementations.
pub trait MazeApi {
    /// Create a session and return the entry location.
    fn start(&mut self) -> Result<Location>;

    /// Post one move to the continuation path of the current location.
    fn submit(&mut self, path: &str, command: &DirectionCommand) -> Result<Location>;
}

/// Blocking client holding the reqwest client and the configured origin.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    spinner: bool,
}

/// Empty JSON object sent to the start endpoint.
#[derive(Serialize)]
struct StartRequest {}

impl ApiClient {
    /// Create an ApiClient for the origin in `config`.
    ///
    /// Requests never time out: a stalled server blocks the turn until the
    /// process is interrupted.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: config.origin.clone(),
            spinner: config.spinner,
        })
    }

    /// Join the origin with a server-supplied path.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// POST `body` as JSON to `path` and decode the response as a Location.
    fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Location> {
        let url = self.url_for(path);
        tracing::debug!(%url, "POST");

        let spinner = self.spinner.then(|| waiting_spinner("Walking..."));
        let result = self.exchange(&url, body);
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        result
    }

    fn exchange<B: Serialize>(&self, url: &str, body: &B) -> Result<Location> {
        let transport = |source| ExplorerError::Transport {
            url: url.to_string(),
            source,
        };

        let res = self.client.post(url).json(body).send().map_err(transport)?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().unwrap_or_default();
            tracing::warn!(%status, %body, "server rejected request");
            return Err(ExplorerError::Protocol { status, body });
        }
        let bytes = res.bytes().map_err(transport)?;
        Location::from_json(&bytes)
    }
}

impl MazeApi for ApiClient {
    fn start(&mut self) -> Result<Location> {
        self.post(START_PATH, &StartRequest {})
    }

    fn submit(&mut self, path: &str, command: &DirectionCommand) -> Result<Location> {
        self.post(path, command)
    }
}

fn waiting_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
