// Entrypoint for the maze client.
// - Reads configuration once, sets up file logging, then hands an API
//   client to the explorer loop.
// - Any error ends the process with a message and a non-zero status.

use anyhow::Context;
use pathbot_cli::{api::ApiClient, config::Config, logging, ui::run_session};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // Logging is optional: the maze is still playable without a log file.
    let _guard = match logging::setup_logging(&config.log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled: {e:#}");
            None
        }
    };
    tracing::info!(origin = %config.origin, "starting maze session");

    let api = ApiClient::new(&config)?;
    run_session(api, &config).context("maze session aborted")?;
    Ok(())
}
