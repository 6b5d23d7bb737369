// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Sections: named blocks of tablature with their own tempo and tuning.
//!
//! A section is an immutable value. Every edit returns a new section
//! and leaves the original untouched, so an editor can keep earlier
//! versions around as undo snapshots or hand them to other threads.
//!
//! Edits that take a column index are tolerant: an index that matches
//! no column leaves the section unchanged. Lookups by string number are
//! strict and fail with [`TabError::StringIndexOutOfRange`].

use std::fmt;

use serde_json::{json, Value};
use tracing::debug;

use super::column::Column;
use super::render;
use crate::error::{Result, TabError};
use crate::music::{Note, Tuning};

/// Name given to sections created without one
pub const DEFAULT_SECTION_NAME: &str = "New Tab Section";

/// Tempo given to sections created without one
pub const DEFAULT_BPM: f64 = 150.0;

/// A named, tempo-tagged block of tab with its own tuning
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    name: String,
    columns: Vec<Column>,
    tuning: Tuning,
    bpm: f64,
}

impl Section {
    /// Create a section from all of its parts.
    ///
    /// Columns are fitted to `tuning` so that every column holds exactly
    /// one position per string.
    pub fn new(name: impl Into<String>, columns: Vec<Column>, tuning: Tuning, bpm: f64) -> Self {
        let columns = columns
            .into_iter()
            .map(|column| column.set_tuning(&tuning))
            .collect();

        Self {
            name: name.into(),
            columns,
            tuning,
            bpm,
        }
    }

    /// Create a section with default name and tempo and one empty column
    pub fn create(tuning: Tuning) -> Self {
        let column = Column::create(&tuning);
        Self::new(DEFAULT_SECTION_NAME, vec![column], tuning, DEFAULT_BPM)
    }

    /// Rebuild a section from its JSON form.
    ///
    /// The document must have a numeric `bpm`, a string `name` and a
    /// `columns` array. The tuning is not part of the document; the one
    /// supplied here is authoritative.
    pub fn from_json(json: &Value, tuning: Tuning) -> Result<Self> {
        let (Some(bpm), Some(name), Some(columns)) = (
            json.get("bpm").and_then(Value::as_f64),
            json.get("name").and_then(Value::as_str),
            json.get("columns").and_then(Value::as_array),
        ) else {
            debug!("rejecting section document without bpm, name and columns");
            return Err(TabError::malformed(
                "expected a number bpm, a string name and a columns array",
            ));
        };

        let columns = columns
            .iter()
            .map(|column| Column::from_json(column, &tuning))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(name, columns, tuning, bpm))
    }

    /// Parse JSON text and rebuild a section from it
    pub fn from_json_str(json: &str, tuning: Tuning) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| TabError::malformed(format!("invalid JSON: {}", e)))?;
        Self::from_json(&value, tuning)
    }

    /// Get section name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get columns in playback order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get column by 0-based index
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Get tuning
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Get tempo in BPM
    pub fn bpm(&self) -> f64 {
        self.bpm
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the section has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Check if any position in any column has a fret label
    pub fn is_populated(&self) -> bool {
        self.columns.iter().any(Column::is_populated)
    }

    /// Open note of a 1-based string number
    pub fn root_note_for_string(&self, string: usize) -> Result<Note> {
        self.tuning.note_for_string(string)
    }

    /// Replace the tuning, fitting every column to the new string count
    #[must_use]
    pub fn set_tuning(&self, tuning: Tuning) -> Self {
        if tuning.len() != self.tuning.len() {
            debug!(
                from = self.tuning.len(),
                to = tuning.len(),
                "changing section string count"
            );
        }
        Self::new(self.name.clone(), self.columns.clone(), tuning, self.bpm)
    }

    /// Replace the tempo
    #[must_use]
    pub fn set_bpm(&self, bpm: f64) -> Self {
        Self {
            name: self.name.clone(),
            columns: self.columns.clone(),
            tuning: self.tuning.clone(),
            bpm,
        }
    }

    /// Insert an empty column immediately after `index`.
    ///
    /// `-1` inserts at the front. Indices past the last column append,
    /// indices below `-1` insert at the front.
    #[must_use]
    pub fn add_column(&self, index: isize) -> Self {
        let at = index
            .saturating_add(1)
            .clamp(0, self.columns.len() as isize) as usize;

        let mut columns = self.columns.clone();
        columns.insert(at, Column::create(&self.tuning));
        self.with_columns(columns)
    }

    /// Remove the column at `index`; unchanged if there is none
    #[must_use]
    pub fn delete_column(&self, index: usize) -> Self {
        let mut columns = self.columns.clone();
        if index < columns.len() {
            columns.remove(index);
        }
        self.with_columns(columns)
    }

    /// Replace the column at `index`; unchanged if there is none
    #[must_use]
    pub fn set_column(&self, column: Column, index: usize) -> Self {
        let mut columns = self.columns.clone();
        if let Some(slot) = columns.get_mut(index) {
            *slot = column.set_tuning(&self.tuning);
        }
        self.with_columns(columns)
    }

    /// Replace the name
    #[must_use]
    pub fn update_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: self.columns.clone(),
            tuning: self.tuning.clone(),
            bpm: self.bpm,
        }
    }

    fn with_columns(&self, columns: Vec<Column>) -> Self {
        Self {
            name: self.name.clone(),
            columns,
            tuning: self.tuning.clone(),
            bpm: self.bpm,
        }
    }

    /// Serialize as `{ "name", "columns", "bpm" }`; the tuning is not included
    pub fn to_json(&self) -> Value {
        let columns: Vec<Value> = self.columns.iter().map(Column::to_json).collect();
        json!({
            "name": self.name,
            "columns": columns,
            "bpm": self.bpm,
        })
    }

    /// Serialize to compact JSON text
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    /// Serialize to indented JSON text
    pub fn to_json_pretty(&self) -> String {
        // Serializing a Value cannot fail
        serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
    }

    /// Render as an aligned ASCII tab diagram
    pub fn to_text(&self) -> String {
        render::render_text(self)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_text(f, self)
    }
}
