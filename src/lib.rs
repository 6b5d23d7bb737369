// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Tablature document model.
//!
//! A score is a tree of immutable values: a [`Section`] holds ordered
//! [`Column`]s, each with one [`Position`] per string of the section's
//! [`Tuning`]. Edits return new values, sections round-trip through
//! JSON, and render to aligned ASCII tab.

pub mod config;
pub mod error;
pub mod music;
pub mod tab;

pub use config::EditorConfig;
pub use error::{Result, TabError};
pub use music::{Note, PitchClass, Tuning};
pub use tab::{Column, Position, Section};
