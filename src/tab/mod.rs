// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Tablature document model.
//!
//! This module provides:
//! - Positions: one string's fret label at one time-slice
//! - Columns: one position per tuning string
//! - Sections: named, tempo-tagged runs of columns with a tuning
//! - Rendering of sections to aligned ASCII tab

pub mod column;
pub mod position;
pub mod render;
pub mod section;

pub use column::Column;
pub use position::{Position, REST};
pub use render::render_text;
pub use section::{Section, DEFAULT_BPM, DEFAULT_SECTION_NAME};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::Tuning;

    #[test]
    fn test_section_creation() {
        let section = Section::create(Tuning::standard_guitar());
        assert_eq!(section.name(), "New Tab Section");
        assert_eq!(section.columns().len(), 1);
    }

    #[test]
    fn test_column_creation() {
        let column = Column::create(&Tuning::standard_bass());
        assert_eq!(column.len(), 4);
    }

    #[test]
    fn test_position_creation() {
        let position = Position::new("7");
        assert_eq!(position.fret(), "7");
    }

    #[test]
    fn test_values_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Section>();
        assert_send_sync::<Column>();
        assert_send_sync::<Position>();
        assert_send_sync::<Tuning>();
    }
}
