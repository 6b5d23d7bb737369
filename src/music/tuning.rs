// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Instrument tunings.
//!
//! A tuning is the ordered list of open-string notes of an instrument,
//! index 0 being string 1. It is the join key between a section and
//! every column in it: each column holds exactly one position per
//! tuning string.

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::note::Note;
use crate::error::{Result, TabError};

/// Names accepted by [`Tuning::preset`]
pub const PRESET_NAMES: [&str; 5] = [
    "standard_guitar",
    "drop_d",
    "seven_string",
    "standard_bass",
    "standard_ukulele",
];

/// Ordered, non-empty list of open-string notes.
///
/// Notes are shared behind an `Arc`, so clones are cheap and every
/// section and column built from a tuning points at the same data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Note>", into = "Vec<Note>")]
pub struct Tuning {
    notes: Arc<[Note]>,
}

impl Tuning {
    /// Create a tuning; fails when `notes` is empty
    pub fn new(notes: Vec<Note>) -> Result<Self> {
        if notes.is_empty() {
            return Err(TabError::EmptyTuning);
        }
        Ok(Self {
            notes: notes.into(),
        })
    }

    /// Parse a tuning from note names, string 1 first
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let notes = names
            .iter()
            .map(|name| Note::parse(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(notes)
    }

    /// Look up a built-in tuning by name
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "standard_guitar" | "guitar" | "standard" => Some(Self::standard_guitar()),
            "drop_d" => Some(Self::drop_d()),
            "seven_string" => Some(Self::seven_string()),
            "standard_bass" | "bass" => Some(Self::standard_bass()),
            "standard_ukulele" | "ukulele" => Some(Self::standard_ukulele()),
            _ => None,
        }
    }

    /// Six-string guitar in standard tuning (E A D G B E)
    pub fn standard_guitar() -> Self {
        Self::from_static(&["E4", "B3", "G3", "D3", "A2", "E2"])
    }

    /// Six-string guitar with the low string dropped to D
    pub fn drop_d() -> Self {
        Self::from_static(&["E4", "B3", "G3", "D3", "A2", "D2"])
    }

    /// Seven-string guitar with a low B
    pub fn seven_string() -> Self {
        Self::from_static(&["E4", "B3", "G3", "D3", "A2", "E2", "B1"])
    }

    /// Four-string bass in standard tuning (E A D G)
    pub fn standard_bass() -> Self {
        Self::from_static(&["G2", "D2", "A1", "E1"])
    }

    /// Re-entrant ukulele tuning (G C E A)
    pub fn standard_ukulele() -> Self {
        Self::from_static(&["A4", "E4", "C4", "G4"])
    }

    fn from_static(names: &[&str]) -> Self {
        let notes: Vec<Note> = names
            .iter()
            .filter_map(|name| Note::parse(name).ok())
            .collect();
        Self {
            notes: notes.into(),
        }
    }

    /// Number of strings
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Always false: a tuning has at least one string
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Open-string notes, string 1 first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Iterate over the open-string notes
    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    /// Note at a 0-based index
    pub fn get(&self, index: usize) -> Option<Note> {
        self.notes.get(index).copied()
    }

    /// Open note of a 1-based string number
    pub fn note_for_string(&self, string: usize) -> Result<Note> {
        let index = TabError::check_string(string, self.len())?;
        Ok(self.notes[index])
    }

    /// Shift every string by the same number of semitones
    pub fn transpose(&self, semitones: i8) -> Self {
        Self {
            notes: self.notes.iter().map(|n| n.transpose(semitones)).collect(),
        }
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard_guitar()
    }
}

impl Index<usize> for Tuning {
    type Output = Note;

    fn index(&self, index: usize) -> &Note {
        &self.notes[index]
    }
}

impl<'a> IntoIterator for &'a Tuning {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<Note>> for Tuning {
    type Error = TabError;

    fn try_from(notes: Vec<Note>) -> Result<Self> {
        Tuning::new(notes)
    }
}

impl From<Tuning> for Vec<Note> {
    fn from(tuning: Tuning) -> Self {
        tuning.notes.to_vec()
    }
}

impl fmt::Display for Tuning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, note) in self.notes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", note)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::PitchClass;

    #[test]
    fn test_empty_tuning_rejected() {
        assert_eq!(Tuning::new(Vec::new()), Err(TabError::EmptyTuning));
    }

    #[test]
    fn test_standard_guitar() {
        let tuning = Tuning::standard_guitar();
        assert_eq!(tuning.len(), 6);
        assert_eq!(tuning.to_string(), "E4 B3 G3 D3 A2 E2");
        assert_eq!(tuning[5], Note::new(PitchClass::E, 2));
    }

    #[test]
    fn test_presets() {
        for name in PRESET_NAMES {
            assert!(Tuning::preset(name).is_some(), "missing preset {}", name);
        }
        assert_eq!(Tuning::preset("bass"), Some(Tuning::standard_bass()));
        assert_eq!(Tuning::preset("drop_d"), Some(Tuning::drop_d()));
        assert_eq!(Tuning::preset("seven_string").unwrap().len(), 7);
        assert_eq!(Tuning::preset("banjo"), None);
    }

    #[test]
    fn test_note_for_string() {
        let tuning = Tuning::standard_bass();
        assert_eq!(tuning.note_for_string(1).unwrap(), Note::new(PitchClass::G, 2));
        assert_eq!(tuning.note_for_string(4).unwrap(), Note::new(PitchClass::E, 1));
        assert_eq!(
            tuning.note_for_string(5),
            Err(TabError::StringIndexOutOfRange { string: 5, strings: 4 })
        );
        assert!(tuning.note_for_string(0).is_err());
    }

    #[test]
    fn test_parse_invalid_note() {
        assert!(matches!(
            Tuning::parse(&["E4", "Q3"]),
            Err(TabError::InvalidNote(_))
        ));
    }

    #[test]
    fn test_transpose_half_step_down() {
        let tuning = Tuning::standard_guitar().transpose(-1);
        assert_eq!(tuning.to_string(), "D#4 A#3 F#3 C#3 G#2 D#2");
    }

    #[test]
    fn test_serde_round_trip() {
        let tuning = Tuning::drop_d();
        let json = serde_json::to_string(&tuning).unwrap();
        assert_eq!(json, r#"["E4","B3","G3","D3","A2","D2"]"#);
        let parsed: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tuning);
        assert!(serde_json::from_str::<Tuning>("[]").is_err());
    }

    #[test]
    fn test_clone_shares_notes() {
        let tuning = Tuning::standard_guitar();
        let copy = tuning.clone();
        assert!(std::ptr::eq(tuning.notes(), copy.notes()));
    }
}
