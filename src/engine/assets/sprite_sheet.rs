// Sprite sheet layout: a grid of equally sized frames split into segments

use std::path::Path;
use std::time::Duration;

use glam::{UVec2, Vec2};

use super::SpriteSheetError;

/// Column/row coordinate of a frame within the sheet grid
pub type Frame = UVec2;

/// A run of frames played as one animation
///
/// Frames run row-major: from `start` to the end of its row, wrapping onto
/// the next row, until `end` (inclusive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSegment {
    /// Size of one frame in pixels
    pub frame_size: UVec2,
    pub start: Frame,
    pub end: Frame,
    /// Time each frame stays on screen
    pub frame_duration: Duration,
}

/// A region of the sheet image covering one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRegion {
    /// Position in the sheet (pixels)
    pub x: u32,
    pub y: u32,

    /// Size of the region (pixels)
    pub width: u32,
    pub height: u32,

    /// UV coordinates (0.0 to 1.0)
    pub uv_min: Vec2,
    pub uv_max: Vec2,
}

/// Layout of a sprite sheet image
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    /// Grid size in frames (columns, rows)
    grid: UVec2,
    segments: Vec<AnimationSegment>,
    current: usize,
}

impl SpriteSheet {
    /// Create an empty sheet with the given grid size in frames
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            grid: UVec2::new(columns, rows),
            segments: Vec::new(),
            current: 0,
        }
    }

    /// The Glitch character sheet: 21x6 frames of 192x160 pixels
    ///
    /// Segment order matches `CharacterState::segment_index`.
    pub fn glitch() -> Result<Self, SpriteSheetError> {
        let frame_size = UVec2::new(192, 160);
        let frame_duration = Duration::from_millis(50);

        let mut sheet = Self::new(21, 6);
        // walk
        sheet.add_segment(frame_size, Frame::new(0, 0), Frame::new(11, 0), frame_duration)?;
        // climb
        sheet.add_segment(frame_size, Frame::new(0, 1), Frame::new(18, 1), frame_duration)?;
        // jump
        sheet.add_segment(frame_size, Frame::new(0, 2), Frame::new(11, 3), frame_duration)?;
        // sleep
        sheet.add_segment(frame_size, Frame::new(0, 4), Frame::new(20, 5), frame_duration)?;
        Ok(sheet)
    }

    /// Add a segment, returning its index
    pub fn add_segment(
        &mut self,
        frame_size: UVec2,
        start: Frame,
        end: Frame,
        frame_duration: Duration,
    ) -> Result<usize, SpriteSheetError> {
        self.check_in_grid(start)?;
        self.check_in_grid(end)?;

        let (start_index, end_index) = (self.linear_index(start), self.linear_index(end));
        if end_index < start_index {
            return Err(SpriteSheetError::EndBeforeStart {
                start: start_index,
                end: end_index,
            });
        }

        self.segments.push(AnimationSegment {
            frame_size,
            start,
            end,
            frame_duration,
        });
        Ok(self.segments.len() - 1)
    }

    fn check_in_grid(&self, frame: Frame) -> Result<(), SpriteSheetError> {
        if frame.x >= self.grid.x || frame.y >= self.grid.y {
            return Err(SpriteSheetError::FrameOutOfSheet {
                x: frame.x,
                y: frame.y,
                columns: self.grid.x,
                rows: self.grid.y,
            });
        }
        Ok(())
    }

    /// Select the segment used for playback
    pub fn set_current_segment(
        &mut self,
        index: usize,
    ) -> Result<&AnimationSegment, SpriteSheetError> {
        if index >= self.segments.len() {
            return Err(SpriteSheetError::UnknownSegment {
                index,
                count: self.segments.len(),
            });
        }
        self.current = index;
        Ok(&self.segments[index])
    }

    /// The selected segment, if any segment exists
    pub fn current_segment(&self) -> Option<&AnimationSegment> {
        self.segments.get(self.current)
    }

    #[allow(dead_code)]
    pub fn current_segment_index(&self) -> usize {
        self.current
    }

    pub fn segment(&self, index: usize) -> Option<&AnimationSegment> {
        self.segments.get(index)
    }

    #[allow(dead_code)]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    #[allow(dead_code)]
    pub fn columns(&self) -> u32 {
        self.grid.x
    }

    #[allow(dead_code)]
    pub fn rows(&self) -> u32 {
        self.grid.y
    }

    /// Row-major position of a frame in the grid
    pub fn linear_index(&self, frame: Frame) -> u32 {
        frame.y * self.grid.x + frame.x
    }

    fn frame_at(&self, index: u32) -> Frame {
        Frame::new(index % self.grid.x, index / self.grid.x)
    }

    /// Frame following `frame` within `segment`
    ///
    /// The end frame, and any frame outside the segment, lead back to the
    /// segment start.
    pub fn next_frame(&self, segment: &AnimationSegment, frame: Frame) -> Frame {
        let index = self.linear_index(frame);
        let start = self.linear_index(segment.start);
        let end = self.linear_index(segment.end);

        if index < start || index >= end {
            segment.start
        } else {
            self.frame_at(index + 1)
        }
    }

    /// Full image size in pixels, based on the largest segment frame size
    pub fn pixel_size(&self) -> Option<UVec2> {
        self.segments
            .iter()
            .map(|s| s.frame_size)
            .reduce(UVec2::max)
            .map(|frame_size| frame_size * self.grid)
    }

    /// Source region of `frame` for the given frame size
    pub fn region(&self, frame: Frame, frame_size: UVec2) -> FrameRegion {
        let x = frame.x * frame_size.x;
        let y = frame.y * frame_size.y;
        let sheet = self
            .pixel_size()
            .unwrap_or(frame_size * self.grid)
            .max(UVec2::ONE)
            .as_vec2();

        FrameRegion {
            x,
            y,
            width: frame_size.x,
            height: frame_size.y,
            uv_min: Vec2::new(x as f32, y as f32) / sheet,
            uv_max: Vec2::new((x + frame_size.x) as f32, (y + frame_size.y) as f32) / sheet,
        }
    }

    /// Check that an image file matches this sheet's pixel layout
    pub fn verify_image(&self, path: impl AsRef<Path>) -> Result<(), SpriteSheetError> {
        let path = path.as_ref();
        let (width, height) = image::image_dimensions(path)?;

        let Some(expected) = self.pixel_size() else {
            log::warn!("Sheet has no segments; skipping size check of {:?}", path);
            return Ok(());
        };

        if expected != UVec2::new(width, height) {
            return Err(SpriteSheetError::DimensionMismatch {
                expected_width: expected.x,
                expected_height: expected.y,
                actual_width: width,
                actual_height: height,
            });
        }

        log::info!("Sprite sheet {:?} matches {}x{} layout", path, width, height);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(sheet: &SpriteSheet, index: usize) -> AnimationSegment {
        *sheet.segment(index).unwrap()
    }

    #[test]
    fn test_glitch_sheet_layout() {
        let sheet = SpriteSheet::glitch().unwrap();
        assert_eq!(sheet.columns(), 21);
        assert_eq!(sheet.rows(), 6);
        assert_eq!(sheet.segment_count(), 4);
        assert_eq!(sheet.pixel_size(), Some(UVec2::new(4032, 960)));

        let jump = segment(&sheet, 2);
        assert_eq!(jump.start, Frame::new(0, 2));
        assert_eq!(jump.end, Frame::new(11, 3));
        assert_eq!(jump.frame_duration, Duration::from_millis(50));
    }

    #[test]
    fn test_add_segment_returns_index() {
        let mut sheet = SpriteSheet::new(4, 4);
        let size = UVec2::new(32, 32);
        let ms = Duration::from_millis(100);

        assert_eq!(sheet.add_segment(size, Frame::new(0, 0), Frame::new(3, 0), ms).unwrap(), 0);
        assert_eq!(sheet.add_segment(size, Frame::new(0, 1), Frame::new(1, 2), ms).unwrap(), 1);
    }

    #[test]
    fn test_add_segment_outside_grid() {
        let mut sheet = SpriteSheet::new(4, 4);
        let result = sheet.add_segment(
            UVec2::new(32, 32),
            Frame::new(0, 0),
            Frame::new(4, 0),
            Duration::from_millis(100),
        );
        assert!(matches!(
            result,
            Err(SpriteSheetError::FrameOutOfSheet { x: 4, y: 0, .. })
        ));
    }

    #[test]
    fn test_add_segment_end_before_start() {
        let mut sheet = SpriteSheet::new(4, 4);
        let result = sheet.add_segment(
            UVec2::new(32, 32),
            Frame::new(2, 1),
            Frame::new(3, 0),
            Duration::from_millis(100),
        );
        assert!(matches!(
            result,
            Err(SpriteSheetError::EndBeforeStart { start: 6, end: 3 })
        ));
    }

    #[test]
    fn test_set_current_segment() {
        let mut sheet = SpriteSheet::glitch().unwrap();
        let climb = sheet.set_current_segment(1).unwrap();
        assert_eq!(climb.end, Frame::new(18, 1));
        assert_eq!(sheet.current_segment_index(), 1);

        assert!(matches!(
            sheet.set_current_segment(9),
            Err(SpriteSheetError::UnknownSegment { index: 9, count: 4 })
        ));
        // failed selection keeps the previous segment
        assert_eq!(sheet.current_segment_index(), 1);
    }

    #[test]
    fn test_next_frame_wraps_rows() {
        let sheet = SpriteSheet::glitch().unwrap();
        let jump = segment(&sheet, 2);

        assert_eq!(sheet.next_frame(&jump, Frame::new(0, 2)), Frame::new(1, 2));
        assert_eq!(sheet.next_frame(&jump, Frame::new(20, 2)), Frame::new(0, 3));
    }

    #[test]
    fn test_next_frame_loops_at_end() {
        let sheet = SpriteSheet::glitch().unwrap();
        let walk = segment(&sheet, 0);
        assert_eq!(sheet.next_frame(&walk, Frame::new(11, 0)), Frame::new(0, 0));
    }

    #[test]
    fn test_next_frame_outside_segment_restarts() {
        let sheet = SpriteSheet::glitch().unwrap();
        let walk = segment(&sheet, 0);
        // idle frame sits after the walk cycle on the same row
        assert_eq!(sheet.next_frame(&walk, Frame::new(14, 0)), Frame::new(0, 0));
    }

    #[test]
    fn test_frame_region() {
        let sheet = SpriteSheet::glitch().unwrap();
        let region = sheet.region(Frame::new(1, 2), UVec2::new(192, 160));

        assert_eq!((region.x, region.y), (192, 320));
        assert_eq!((region.width, region.height), (192, 160));
        approx::assert_relative_eq!(region.uv_min.x, 192.0 / 4032.0);
        approx::assert_relative_eq!(region.uv_min.y, 320.0 / 960.0);
        approx::assert_relative_eq!(region.uv_max.x, 384.0 / 4032.0);
        approx::assert_relative_eq!(region.uv_max.y, 480.0 / 960.0);
    }

    #[test]
    fn test_pixel_size_empty_sheet() {
        let sheet = SpriteSheet::new(4, 4);
        assert_eq!(sheet.pixel_size(), None);
        assert!(sheet.current_segment().is_none());
    }

    #[test]
    fn test_verify_missing_image() {
        let sheet = SpriteSheet::glitch().unwrap();
        let result = sheet.verify_image("definitely/not/here.png");
        assert!(matches!(result, Err(SpriteSheetError::Image(_))));
    }
}
