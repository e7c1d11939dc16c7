// Data model for the maze wire format.
//
// A `Location` is decoded from every server response and replaced
// wholesale on the next turn. A `DirectionCommand` is the only body the
// client ever sends besides the empty start object.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ExplorerError, Result};

/// Status value that ends the session.
pub const FINISHED: &str = "finished";

/// Snapshot of the player's position as reported by the server.
///
/// Missing fields (and explicit `null`s) decode to the type's zero value;
/// unknown fields are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub exits: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub maze_exit_direction: String,
    #[serde(deserialize_with = "null_as_default")]
    pub maze_exit_distance: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub location_path: String,
}

impl Location {
    /// Decode a location from a raw response body.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(ExplorerError::Decode)
    }

    pub fn is_finished(&self) -> bool {
        self.status == FINISHED
    }

    /// The path the next move must be posted to.
    pub fn continuation(&self) -> Result<&str> {
        if self.location_path.is_empty() {
            return Err(ExplorerError::MissingLocationPath {
                status: self.status.clone(),
            });
        }
        Ok(&self.location_path)
    }
}

/// Body of a turn submission: `{"direction": "N"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DirectionCommand {
    pub direction: String,
}

impl DirectionCommand {
    /// Build a command from one raw input line.
    ///
    /// Only the first character is kept and uppercased. Nothing is checked
    /// against the advertised exits; the server decides whether a move is legal.
    pub fn from_input(raw: &str) -> Result<Self> {
        Ok(DirectionCommand {
            direction: normalize_direction(raw)?,
        })
    }
}

/// Take the first character of `raw` and uppercase it. The result is always
/// one character: when uppercasing expands (`ß` -> `SS`) only the first is kept.
pub fn normalize_direction(raw: &str) -> Result<String> {
    let first = raw
        .chars()
        .next()
        .ok_or_else(|| ExplorerError::input("empty direction, expected one of the listed exits"))?;
    Ok(first.to_uppercase().take(1).collect())
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
