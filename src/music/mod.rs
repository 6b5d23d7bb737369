// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch and tuning data for tablature.
//!
//! This module provides the note values that identify instrument
//! strings and the tunings built from them.

pub mod note;
pub mod tuning;

pub use note::{MidiNote, Note, PitchClass, Semitones, DEFAULT_OCTAVE};
pub use tuning::{Tuning, PRESET_NAMES};
