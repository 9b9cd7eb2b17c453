// Character animation playback over sprite sheet segments

use std::time::Duration;

use crate::engine::assets::{AnimationSegment, Frame, FrameRegion, SpriteSheet};

/// Plays the selected segment of a sprite sheet
#[derive(Debug)]
pub struct AnimationPlayer {
    sheet: SpriteSheet,
    /// Frame currently on screen
    current_frame: Frame,
    /// Time elapsed in current frame
    frame_timer: Duration,
    paused: bool,
}

impl AnimationPlayer {
    /// Create a player showing the start of the sheet's first segment
    pub fn new(sheet: SpriteSheet) -> Self {
        let current_frame = sheet
            .segment(0)
            .map(|segment| segment.start)
            .unwrap_or(Frame::ZERO);

        Self {
            sheet,
            current_frame,
            frame_timer: Duration::ZERO,
            paused: false,
        }
    }

    /// Switch to a segment and play it from its first frame
    pub fn select_segment(&mut self, index: usize) {
        match self.sheet.set_current_segment(index) {
            Ok(segment) => {
                self.current_frame = segment.start;
                self.frame_timer = Duration::ZERO;
                self.paused = false;
            }
            Err(err) => log::warn!("Keeping current animation: {}", err),
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance the animation (called every update)
    pub fn update(&mut self, elapsed: Duration) {
        if self.paused {
            return;
        }

        let Some(segment) = self.sheet.current_segment().copied() else {
            return;
        };
        if segment.frame_duration.is_zero() {
            return;
        }

        self.frame_timer += elapsed;

        while self.frame_timer >= segment.frame_duration {
            self.frame_timer -= segment.frame_duration;
            self.current_frame = self.sheet.next_frame(&segment, self.current_frame);

            // Hold the last frame until the next update has seen it
            if self.current_frame == segment.end {
                self.frame_timer = Duration::ZERO;
                break;
            }
        }
    }

    pub fn current_frame(&self) -> Frame {
        self.current_frame
    }

    /// Show a specific frame; playback continues from there
    pub fn set_frame(&mut self, frame: Frame) {
        self.current_frame = frame;
    }

    pub fn segment(&self) -> Option<&AnimationSegment> {
        self.sheet.current_segment()
    }

    #[allow(dead_code)]
    pub fn segment_index(&self) -> usize {
        self.sheet.current_segment_index()
    }

    pub fn is_at_segment_end(&self) -> bool {
        self.segment()
            .is_some_and(|segment| segment.end == self.current_frame)
    }

    /// Sheet region for the renderer
    pub fn frame_region(&self) -> Option<FrameRegion> {
        self.segment()
            .map(|segment| self.sheet.region(self.current_frame, segment.frame_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::UVec2;

    const TICK: Duration = Duration::from_millis(50);

    fn glitch_player() -> AnimationPlayer {
        AnimationPlayer::new(SpriteSheet::glitch().unwrap())
    }

    #[test]
    fn test_starts_on_first_segment() {
        let player = glitch_player();
        assert_eq!(player.segment_index(), 0);
        assert_eq!(player.current_frame(), Frame::new(0, 0));
        assert!(!player.is_paused());
    }

    #[test]
    fn test_update_advances_per_frame_duration() {
        let mut player = glitch_player();

        player.update(Duration::from_millis(75)); // 1.5 frames worth
        assert_eq!(player.current_frame(), Frame::new(1, 0));

        player.update(Duration::from_millis(25));
        assert_eq!(player.current_frame(), Frame::new(2, 0));
    }

    #[test]
    fn test_segment_loops() {
        let mut player = glitch_player();
        // walk cycle has 12 frames
        player.update(TICK * 11);
        assert_eq!(player.current_frame(), Frame::new(11, 0));

        player.update(TICK);
        assert_eq!(player.current_frame(), Frame::new(0, 0));
    }

    #[test]
    fn test_long_update_stops_on_last_frame() {
        let mut player = glitch_player();
        player.select_segment(2);
        player.update(TICK * 100);
        assert_eq!(player.current_frame(), Frame::new(11, 3));

        // the next update wraps as usual, with no leftover time
        player.update(TICK);
        assert_eq!(player.current_frame(), Frame::new(0, 2));
    }

    #[test]
    fn test_paused_holds_frame() {
        let mut player = glitch_player();
        player.pause();
        player.update(TICK * 4);
        assert_eq!(player.current_frame(), Frame::new(0, 0));

        player.resume();
        player.update(TICK);
        assert_eq!(player.current_frame(), Frame::new(1, 0));
    }

    #[test]
    fn test_select_segment_resets_playback() {
        let mut player = glitch_player();
        player.update(Duration::from_millis(80));
        player.pause();

        player.select_segment(2);
        assert_eq!(player.current_frame(), Frame::new(0, 2));
        assert!(!player.is_paused());

        // leftover frame time from the old segment is gone
        player.update(Duration::from_millis(40));
        assert_eq!(player.current_frame(), Frame::new(0, 2));
    }

    #[test]
    fn test_select_unknown_segment_keeps_state() {
        let mut player = glitch_player();
        player.select_segment(1);
        player.update(TICK);
        player.select_segment(42);

        assert_eq!(player.segment_index(), 1);
        assert_eq!(player.current_frame(), Frame::new(1, 1));
    }

    #[test]
    fn test_segment_end_detection() {
        let mut player = glitch_player();
        player.select_segment(3);
        assert!(!player.is_at_segment_end());

        player.set_frame(Frame::new(20, 5));
        assert!(player.is_at_segment_end());
    }

    #[test]
    fn test_resumes_from_frame_outside_segment() {
        let mut player = glitch_player();
        player.set_frame(Frame::new(14, 0));
        player.update(TICK);
        assert_eq!(player.current_frame(), Frame::new(0, 0));
    }

    #[test]
    fn test_frame_region() {
        let mut player = glitch_player();
        player.select_segment(1);
        player.update(TICK * 2);

        let region = player.frame_region().unwrap();
        assert_eq!((region.x, region.y), (384, 160));
        assert_eq!(UVec2::new(region.width, region.height), UVec2::new(192, 160));
    }

    #[test]
    fn test_empty_sheet_is_inert() {
        let mut player = AnimationPlayer::new(SpriteSheet::new(2, 2));
        player.update(TICK);
        assert_eq!(player.current_frame(), Frame::ZERO);
        assert!(player.frame_region().is_none());
        assert!(!player.is_at_segment_end());
    }
}
