// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Plain-text tab rendering.
//!
//! A section renders as a header line, one row per string, and a
//! trailing blank line:
//!
//! ```text
//! Section Name: Riff
//! E4|--0--3
//! B3|--12--
//! G3|-----5
//!
//! ```
//!
//! Each column is padded to its own width, so a column's fret labels
//! line up vertically across all strings regardless of neighbouring
//! columns.

use std::fmt::{self, Write};

use super::position::REST;
use super::section::Section;

/// Prefix of the header line
pub const HEADER_PREFIX: &str = "Section Name: ";

/// Marker between a string's note label and its first column
pub const TRACK_START: &str = "|-";

/// Render a section to a `String`
pub fn render_text(section: &Section) -> String {
    let mut out = String::new();
    // Writing into a String never fails
    let _ = write_text(&mut out, section);
    out
}

/// Write the rendered section into any formatter or string buffer
pub fn write_text<W: Write>(out: &mut W, section: &Section) -> fmt::Result {
    writeln!(out, "{}{}", HEADER_PREFIX, section.name())?;

    let widths: Vec<usize> = section
        .columns()
        .iter()
        .map(|column| column.character_width())
        .collect();

    for (index, note) in section.tuning().iter().enumerate() {
        out.write_str(&note.as_string())?;
        out.write_str(TRACK_START)?;

        for (column, &width) in section.columns().iter().zip(&widths) {
            out.write_char(REST)?;
            if let Some(position) = column.positions().get(index) {
                out.write_str(&position.pad_fret(width))?;
            }
        }

        out.write_char('\n')?;
    }

    out.write_char('\n')
}
