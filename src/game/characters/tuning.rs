// Character tuning - hand-picked numbers for the Glitch sprite sheet
// All distances are screen pixels per update, +y pointing down

use glam::Vec2;
use std::time::Duration;

use crate::engine::assets::Frame;

/// Movement and timing constants for the player character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerTuning {
    // Movement
    /// Distance moved per update for a unit input direction
    pub move_speed: Vec2,
    /// Extra horizontal distance per update while jumping, times input x
    pub jump_drift: f32,
    /// Upward distance per update during the rising part of the jump
    pub jump_lift: f32,

    // Physics
    /// Downward distance per update while walking or jumping
    pub gravity: f32,
    /// Gravity stops once the character is this far below the play area bottom
    pub ground_margin: f32,

    // Animation
    /// Rising part of the jump: frames in this row...
    pub jump_lift_row: u32,
    /// ...with a column below this
    pub jump_lift_columns: u32,
    /// Frame shown while standing still
    pub idle_frame: Frame,

    // Behavior
    /// Standing still this long puts the character to sleep
    pub sleep_delay: Duration,
}

/// The tuning the Glitch sheet was drawn for
pub const BASE_TUNING: PlayerTuning = PlayerTuning {
    move_speed: Vec2::new(2.0, 2.0),
    jump_drift: 2.0,
    jump_lift: 5.0,

    gravity: 3.0,
    ground_margin: 15.0,

    jump_lift_row: 2,
    jump_lift_columns: 15,
    idle_frame: Frame::new(14, 0),

    sleep_delay: Duration::from_millis(3000),
};

impl Default for PlayerTuning {
    fn default() -> Self {
        BASE_TUNING
    }
}

impl PlayerTuning {
    /// Whether the jump animation is still in its rising frames
    pub fn is_lift_frame(&self, frame: Frame) -> bool {
        frame.y == self.jump_lift_row && frame.x < self.jump_lift_columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning() {
        let tuning = PlayerTuning::default();
        assert_eq!(tuning.gravity, 3.0);
        assert_eq!(tuning.move_speed, Vec2::new(2.0, 2.0));
        assert_eq!(tuning.sleep_delay, Duration::from_secs(3));
    }

    #[test]
    fn test_lift_frames() {
        let tuning = BASE_TUNING;
        assert!(tuning.is_lift_frame(Frame::new(0, 2)));
        assert!(tuning.is_lift_frame(Frame::new(14, 2)));
        assert!(!tuning.is_lift_frame(Frame::new(15, 2)));
        // second jump row is the way down
        assert!(!tuning.is_lift_frame(Frame::new(3, 3)));
    }
}
