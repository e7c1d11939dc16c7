// UI layer: prints locations, asks for a direction and drives the
// explorer loop until the server reports the maze as finished.

pub mod prompt;

use std::io::{self, IsTerminal, Write};
use std::time::Instant;

use crate::api::MazeApi;
use crate::config::Config;
use crate::error::Result;
use crate::location::{DirectionCommand, Location};
use prompt::{DirectionSource, LineSource, TerminalSource};

/// Line printed before the list of exits.
pub const PROMPT: &str = "What direction will you go?";

/// Outcome of a completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Moves submitted to the server.
    pub turns: u32,
    pub final_message: String,
}

/// Print a blank separator, then the message and description verbatim.
pub fn print_location<W: Write>(out: &mut W, location: &Location) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", location.message)?;
    writeln!(out, "{}", location.description)
}

/// Print the prompt line followed by the exits exactly as the server sent them.
pub fn print_prompt<W: Write>(out: &mut W, exits: &[String]) -> io::Result<()> {
    writeln!(out, "{PROMPT}")?;
    writeln!(out, "[{}]", exits.join(" "))
}

/// Print the exit direction/distance hint. Nothing is printed when the
/// server sent no direction.
pub fn print_hint<W: Write>(out: &mut W, location: &Location) -> io::Result<()> {
    let direction = location.maze_exit_direction.as_str();
    if direction.is_empty() {
        return Ok(());
    }
    writeln!(
        out,
        "Exit hint: {} {} ({} away)",
        arrow(direction),
        direction,
        location.maze_exit_distance
    )
}

fn arrow(direction: &str) -> char {
    match direction {
        "N" => '↑',
        "S" => '↓',
        "E" => '→',
        "W" => '←',
        "NE" => '↗',
        "NW" => '↖',
        "SE" => '↘',
        "SW" => '↙',
        _ => '?',
    }
}

/// Run one maze session: start it, then display/prompt/submit until the
/// current location is finished.
///
/// Exactly one location is live at a time; each response replaces it and
/// its `locationPath` is only used for the very next submission. Once a
/// finished location is rendered no further request is made.
pub fn explore<A, S, W>(
    api: &mut A,
    source: &mut S,
    out: &mut W,
    show_hint: bool,
) -> Result<SessionSummary>
where
    A: MazeApi + ?Sized,
    S: DirectionSource + ?Sized,
    W: Write,
{
    let mut location = api.start()?;
    tracing::info!(status = %location.status, exits = ?location.exits, "session started");
    let mut turns = 0;

    loop {
        print_location(out, &location)?;

        if location.is_finished() {
            writeln!(out, "{}", location.message)?;
            out.flush()?;
            return Ok(SessionSummary {
                turns,
                final_message: location.message,
            });
        }

        print_prompt(out, &location.exits)?;
        if show_hint {
            print_hint(out, &location)?;
        }
        out.flush()?;

        let raw = source.read_direction()?;
        let command = DirectionCommand::from_input(&raw)?;
        let path = location.continuation()?;
        tracing::info!(direction = %command.direction, path, "submitting turn");

        location = api.submit(path, &command)?;
        turns += 1;
        tracing::info!(status = %location.status, exits = ?location.exits, "location received");
    }
}

/// Run a session on the real terminal. The interactive prompt is used when
/// stdin is a terminal; piped input is read line by line.
pub fn run_session<A: MazeApi>(mut api: A, config: &Config) -> Result<SessionSummary> {
    let started = Instant::now();
    let mut source: Box<dyn DirectionSource> = if io::stdin().is_terminal() {
        Box::new(TerminalSource)
    } else {
        Box::new(LineSource::new(io::stdin().lock()))
    };
    let mut out = io::stdout().lock();

    let result = explore(&mut api, source.as_mut(), &mut out, config.show_hint);
    match &result {
        Ok(summary) => tracing::info!(
            turns = summary.turns,
            elapsed = ?started.elapsed(),
            "maze finished"
        ),
        Err(err) => tracing::error!(error = %err, elapsed = ?started.elapsed(), "session aborted"),
    }
    result
}
