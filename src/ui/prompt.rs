// Direction input: one raw line per turn, either from a plain reader
// (pipes, tests) or from an interactive `dialoguer` prompt.

use dialoguer::Input;
use std::io::BufRead;

use crate::error::{ExplorerError, Result};

/// Source of one raw direction line per turn.
pub trait DirectionSource {
    /// Block until the user enters a line and return it without its line
    /// terminator. End of input is an error.
    fn read_direction(&mut self) -> Result<String>;
}

/// Newline-terminated lines from any buffered reader.
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> DirectionSource for LineSource<R> {
    fn read_direction(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| ExplorerError::input(e.to_string()))?;
        if read == 0 {
            return Err(ExplorerError::input("end of input while waiting for a direction"));
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

/// Interactive terminal prompt. Empty answers are accepted here so that
/// they fail in normalization like any other empty line.
#[derive(Default)]
pub struct TerminalSource;

impl DirectionSource for TerminalSource {
    fn read_direction(&mut self) -> Result<String> {
        Input::<String>::new()
            .with_prompt("Direction")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ExplorerError::input(e.to_string()))
    }
}
