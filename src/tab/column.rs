// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Columns: one vertical time-slice across all strings.
//!
//! A column holds exactly one [`Position`] per tuning string, string 1
//! first. Positions live behind an `Arc`, so cloning a column is cheap
//! and untouched columns are shared between successive sections.
//! Every edit builds a new column.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::debug;

use super::position::Position;
use crate::error::{Result, TabError};
use crate::music::Tuning;

/// An ordered-by-string collection of positions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    positions: Arc<[Position]>,
}

impl Column {
    /// Create a column with one empty position per tuning string
    pub fn create(tuning: &Tuning) -> Self {
        Self {
            positions: vec![Position::empty(); tuning.len()].into(),
        }
    }

    /// Create a column from fret labels, string 1 first.
    ///
    /// The labels are fitted to `tuning`: missing strings are left
    /// empty and extra labels are dropped.
    pub fn from_frets<I, S>(frets: I, tuning: &Tuning) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let positions: Vec<Position> = frets.into_iter().map(Position::new).collect();
        Self {
            positions: reconcile(positions, tuning.len()),
        }
    }

    /// Rebuild a column from its JSON form, `{ "positions": [string, ...] }`.
    ///
    /// The tuning is not stored per column; the stored labels are
    /// re-joined against the supplied one.
    pub fn from_json(json: &Value, tuning: &Tuning) -> Result<Self> {
        let positions = json
            .get("positions")
            .and_then(Value::as_array)
            .ok_or_else(|| TabError::malformed("column has no positions array"))?;

        let frets = positions
            .iter()
            .map(|p| {
                p.as_str()
                    .ok_or_else(|| TabError::malformed("column position is not a string"))
            })
            .collect::<Result<Vec<_>>>()?;

        if frets.len() != tuning.len() {
            debug!(
                stored = frets.len(),
                strings = tuning.len(),
                "fitting stored column to tuning"
            );
        }

        Ok(Self::from_frets(frets, tuning))
    }

    /// Re-key the column to a different tuning.
    ///
    /// Strings present in both tunings keep their positions, new strings
    /// get empty positions, and removed trailing strings are dropped.
    pub fn set_tuning(&self, tuning: &Tuning) -> Self {
        if self.positions.len() == tuning.len() {
            return self.clone();
        }
        Self {
            positions: reconcile(self.positions.to_vec(), tuning.len()),
        }
    }

    /// All positions, string 1 first
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of strings in this column
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false for a column built from a tuning
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position on a 1-based string number
    pub fn string_position(&self, string: usize) -> Result<&Position> {
        let index = TabError::check_string(string, self.len())?;
        Ok(&self.positions[index])
    }

    /// Return a copy with the position on a 1-based string replaced
    pub fn set_string_position(&self, string: usize, position: Position) -> Result<Self> {
        let index = TabError::check_string(string, self.len())?;
        let mut positions = self.positions.to_vec();
        positions[index] = position;
        Ok(Self {
            positions: positions.into(),
        })
    }

    /// Return a copy with the fret label on a 1-based string replaced
    pub fn set_fret(&self, string: usize, fret: impl Into<String>) -> Result<Self> {
        self.set_string_position(string, Position::new(fret))
    }

    /// Minimum render width: the widest fret label, at least 1
    pub fn character_width(&self) -> usize {
        self.positions
            .iter()
            .map(Position::character_width)
            .max()
            .unwrap_or(0)
            .max(1)
    }

    /// Check if any string in this column is played
    pub fn is_populated(&self) -> bool {
        self.positions.iter().any(|p| !p.is_empty())
    }

    /// Serialize as `{ "positions": [string, ...] }`
    pub fn to_json(&self) -> Value {
        let frets: Vec<&str> = self.positions.iter().map(Position::fret).collect();
        json!({ "positions": frets })
    }
}

/// Truncate from the end or pad with empty positions to `strings` entries
fn reconcile(mut positions: Vec<Position>, strings: usize) -> Arc<[Position]> {
    positions.resize(strings, Position::empty());
    positions.into()
}
