// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! A single string's fretting within one column.

use std::fmt;

/// Filler used for rests and column padding in rendered tab
pub const REST: char = '-';

/// One string's fret label at one time-slice.
///
/// The label is opaque text: usually digits, but instrument-specific
/// symbols (`x`, `h7`, `<12>`) are kept as written. An empty label
/// means the string is not played.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Position {
    fret: String,
}

impl Position {
    /// Create a position with the given fret label
    pub fn new(fret: impl Into<String>) -> Self {
        Self { fret: fret.into() }
    }

    /// Create a position where the string is not played
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the fret label
    pub fn fret(&self) -> &str {
        &self.fret
    }

    /// Check if the string is not played
    pub fn is_empty(&self) -> bool {
        self.fret.is_empty()
    }

    /// Width of the label in characters
    pub fn character_width(&self) -> usize {
        self.fret.chars().count()
    }

    /// Left-justify the label and pad it with [`REST`] to `width` characters.
    ///
    /// Labels wider than `width` are returned whole.
    pub fn pad_fret(&self, width: usize) -> String {
        let padding = width.saturating_sub(self.character_width());
        let mut padded = String::with_capacity(self.fret.len() + padding);
        padded.push_str(&self.fret);
        padded.extend(std::iter::repeat(REST).take(padding));
        padded
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fret)
    }
}

impl From<&str> for Position {
    fn from(fret: &str) -> Self {
        Position::new(fret)
    }
}

impl From<String> for Position {
    fn from(fret: String) -> Self {
        Position::new(fret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_position() {
        let position = Position::empty();
        assert!(position.is_empty());
        assert_eq!(position.fret(), "");
        assert_eq!(position.character_width(), 0);
    }

    #[test]
    fn test_pad_fret() {
        assert_eq!(Position::new("0").pad_fret(2), "0-");
        assert_eq!(Position::new("12").pad_fret(2), "12");
        assert_eq!(Position::empty().pad_fret(2), "--");
        assert_eq!(Position::empty().pad_fret(1), "-");
    }

    #[test]
    fn test_pad_fret_never_truncates() {
        assert_eq!(Position::new("12").pad_fret(1), "12");
        assert_eq!(Position::new("h7").pad_fret(0), "h7");
    }

    #[test]
    fn test_width_counts_characters() {
        let position = Position::new("½");
        assert_eq!(position.character_width(), 1);
        assert_eq!(position.pad_fret(3), "½--");
    }
}
