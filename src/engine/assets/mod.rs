// Asset descriptions
//
// Sprite sheets are sliced into fixed-size frames laid out on a grid. The
// renderer owns the texture itself; this module only knows the layout.

mod sprite_sheet;

pub use sprite_sheet::{AnimationSegment, Frame, FrameRegion, SpriteSheet};

/// Sprite sheet setup errors
#[derive(Debug, thiserror::Error)]
pub enum SpriteSheetError {
    #[error("Frame ({x}, {y}) lies outside the {columns}x{rows} sheet grid")]
    FrameOutOfSheet {
        x: u32,
        y: u32,
        columns: u32,
        rows: u32,
    },

    #[error("Segment ends at frame {end} before it starts at frame {start}")]
    EndBeforeStart { start: u32, end: u32 },

    #[error("Unknown segment index {index} ({count} segments defined)")]
    UnknownSegment { index: usize, count: usize },

    #[error("Sheet has no segment for the {state} state (index {index})")]
    MissingSegment { state: &'static str, index: usize },

    #[error("Sheet image is {actual_width}x{actual_height}, expected {expected_width}x{expected_height}")]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("Failed to read sheet image: {0}")]
    Image(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_sheet_error_display() {
        let err = SpriteSheetError::MissingSegment {
            state: "sleep",
            index: 3,
        };
        assert_eq!(
            err.to_string(),
            "Sheet has no segment for the sleep state (index 3)"
        );
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = SpriteSheetError::DimensionMismatch {
            expected_width: 4032,
            expected_height: 960,
            actual_width: 512,
            actual_height: 512,
        };
        assert_eq!(
            err.to_string(),
            "Sheet image is 512x512, expected 4032x960"
        );
    }
}
