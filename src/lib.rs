// Library root
// -----------
// The binary (`main.rs`) wires these modules into one maze session.
//
// Module responsibilities:
// - `api`: HTTP calls to the maze server (start a session, submit a move).
// - `location`: wire types and direction normalization.
// - `ui`: location display, direction prompt and the explorer loop.
// - `config`, `error`, `logging`: environment settings, the error
//   taxonomy and the tracing subscriber.
//
// The loop only sees the `MazeApi` and `DirectionSource` traits, so it can
// be driven without a network or a terminal.
pub mod api;
pub mod config;
pub mod error;
pub mod location;
pub mod logging;
pub mod ui;

pub use api::{ApiClient, MazeApi};
pub use config::Config;
pub use error::{ExplorerError, Result};
pub use location::{DirectionCommand, Location};
