// Error module: every failure the explorer can hit ends up in one enum.
// None of them are recovered locally; the binary prints the error and
// exits with a non-zero status.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while talking to the maze server or reading a direction.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Connection, DNS or body read failure.
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {body}")]
    Protocol { status: StatusCode, body: String },

    /// The response body is not a location.
    #[error("could not decode location from server response")]
    Decode(#[source] serde_json::Error),

    /// A location that is not finished but carries no continuation path.
    #[error("location with status {status:?} has no locationPath to continue from")]
    MissingLocationPath { status: String },

    /// End of input, an empty line, or a terminal read failure.
    #[error("input error: {0}")]
    Input(String),

    /// Writing to the terminal failed.
    #[error("could not write to terminal")]
    Output(#[from] std::io::Error),
}

impl ExplorerError {
    pub(crate) fn input(message: impl Into<String>) -> Self {
        ExplorerError::Input(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
