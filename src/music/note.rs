// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes and octave-qualified notes.
//!
//! Notes are the tuning data of a tab: each instrument string is
//! identified by the note it sounds when played open.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TabError};

/// MIDI note number type (0-127)
pub type MidiNote = u8;

/// Semitone offset type
pub type Semitones = i8;

/// Octave assumed when a note name carries none
pub const DEFAULT_OCTAVE: i8 = 4;

/// Note names (pitch classes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PitchClass {
    C,
    Cs, // C# / Db
    D,
    Ds, // D# / Eb
    E,
    F,
    Fs, // F# / Gb
    G,
    Gs, // G# / Ab
    A,
    As, // A# / Bb
    B,
}

impl PitchClass {
    /// All pitch classes in chromatic order
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Get the pitch class number (0-11)
    pub fn pitch_class(self) -> u8 {
        self as u8
    }

    /// Get pitch class from its number
    pub fn from_pitch_class(pc: u8) -> Self {
        PitchClass::ALL[(pc % 12) as usize]
    }

    /// Parse a pitch class name (e.g., "C", "C#", "Db", "f#")
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim().to_uppercase();
        match s.as_str() {
            "C" | "B#" => Some(PitchClass::C),
            "C#" | "DB" => Some(PitchClass::Cs),
            "D" => Some(PitchClass::D),
            "D#" | "EB" => Some(PitchClass::Ds),
            "E" | "FB" => Some(PitchClass::E),
            "F" | "E#" => Some(PitchClass::F),
            "F#" | "GB" => Some(PitchClass::Fs),
            "G" => Some(PitchClass::G),
            "G#" | "AB" => Some(PitchClass::Gs),
            "A" => Some(PitchClass::A),
            "A#" | "BB" => Some(PitchClass::As),
            "B" | "CB" => Some(PitchClass::B),
            _ => None,
        }
    }

    /// Transpose by semitones
    pub fn transpose(self, semitones: Semitones) -> Self {
        let new_pc = (self.pitch_class() as i16 + semitones as i16).rem_euclid(12) as u8;
        PitchClass::from_pitch_class(new_pc)
    }

    /// Display name using sharps
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable pitch: pitch class plus octave.
///
/// Octaves follow the MIDI convention, so middle C is `C4` (MIDI 60).
/// Serializes as its display form (`"E2"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note {
    pitch_class: PitchClass,
    octave: i8,
}

impl Note {
    /// Create a note from pitch class and octave
    pub fn new(pitch_class: PitchClass, octave: i8) -> Self {
        Self {
            pitch_class,
            octave,
        }
    }

    /// Create a note from a MIDI note number
    pub fn from_midi(midi: MidiNote) -> Self {
        Self::from_semitones(midi as i16)
    }

    fn from_semitones(semitones: i16) -> Self {
        Self {
            pitch_class: PitchClass::from_pitch_class(semitones.rem_euclid(12) as u8),
            octave: (semitones.div_euclid(12) - 1) as i8,
        }
    }

    fn semitones(self) -> i16 {
        (self.octave as i16 + 1) * 12 + self.pitch_class.pitch_class() as i16
    }

    /// Parse a note such as "E2", "c#3", "Bb1" or "C-1".
    ///
    /// The octave is optional and defaults to [`DEFAULT_OCTAVE`].
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || TabError::InvalidNote(s.to_string());
        let trimmed = s.trim();

        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        let natural = PitchClass::from_name(&letter.to_string()).ok_or_else(invalid)?;

        let rest = chars.as_str();
        let (accidental, octave_str) = match rest.chars().next() {
            Some('#') => (1i16, &rest[1..]),
            Some('b') | Some('B') => (-1i16, &rest[1..]),
            _ => (0i16, rest),
        };

        let octave = if octave_str.is_empty() {
            DEFAULT_OCTAVE
        } else {
            octave_str.parse::<i8>().map_err(|_| invalid())?
        };

        let semitones = Note::new(natural, octave).semitones() + accidental;
        Ok(Self::from_semitones(semitones))
    }

    /// Get the pitch class
    pub fn pitch_class(self) -> PitchClass {
        self.pitch_class
    }

    /// Get the octave
    pub fn octave(self) -> i8 {
        self.octave
    }

    /// MIDI note number, if within 0-127
    pub fn midi_number(self) -> Option<MidiNote> {
        let semitones = self.semitones();
        if (0..=127).contains(&semitones) {
            Some(semitones as MidiNote)
        } else {
            None
        }
    }

    /// Transpose by semitones, carrying across octaves
    pub fn transpose(self, semitones: Semitones) -> Self {
        Self::from_semitones(self.semitones() + semitones as i16)
    }

    /// Canonical short display form, e.g. `E2` or `C#4`
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class, self.octave)
    }
}

impl FromStr for Note {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self> {
        Note::parse(s)
    }
}

impl TryFrom<String> for Note {
    type Error = TabError;

    fn try_from(value: String) -> Result<Self> {
        Note::parse(&value)
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.as_string()
    }
}
