// The Glitch player character

use glam::Vec2;

use crate::core::math::{clamp, Rect};
use crate::engine::assets::{Frame, FrameRegion, SpriteSheet, SpriteSheetError};
use crate::engine::game_loop::GameTime;
use crate::engine::input::ControllerInput;

use super::animation::AnimationPlayer;
use super::state::{CharacterState, CharacterStateMachine};
use super::tuning::PlayerTuning;

/// Where the character is and where the player is steering it
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Motion {
    /// Top-left corner of the sprite in screen space
    pub position: Vec2,
    /// Input direction for the current update, each axis -1, 0 or 1
    pub direction: Vec2,
}

impl Motion {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            direction: Vec2::ZERO,
        }
    }
}

/// A user-controlled character driven by a sprite sheet state machine
#[derive(Debug)]
pub struct GlitchPlayer {
    motion: Motion,
    tuning: PlayerTuning,
    state_machine: CharacterStateMachine,
    animation: AnimationPlayer,
}

impl GlitchPlayer {
    /// Create a character from a sheet with one segment per state
    pub fn new(sheet: SpriteSheet, position: Vec2) -> Result<Self, SpriteSheetError> {
        for state in CharacterState::ALL {
            let index = state.segment_index();
            if sheet.segment(index).is_none() {
                return Err(SpriteSheetError::MissingSegment {
                    state: state.animation_name(),
                    index,
                });
            }
        }

        let mut player = Self {
            motion: Motion::at(position),
            tuning: PlayerTuning::default(),
            state_machine: CharacterStateMachine::new(),
            animation: AnimationPlayer::new(sheet),
        };
        player.switch_state(CharacterState::Walking);
        Ok(player)
    }

    /// Create a character using the standard Glitch sheet layout
    #[allow(dead_code)]
    pub fn glitch(position: Vec2) -> Result<Self, SpriteSheetError> {
        Self::new(SpriteSheet::glitch()?, position)
    }

    #[allow(dead_code)]
    pub fn with_tuning(mut self, tuning: PlayerTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Advance the character by one update
    pub fn update(&mut self, time: &GameTime, input: &ControllerInput, bounds: &Rect) {
        self.motion.direction = input.direction;

        self.apply_gravity(bounds);

        self.state_machine.update(
            time.elapsed,
            &mut self.motion,
            &mut self.animation,
            &self.tuning,
        );

        if input.jump {
            self.jump();
        }

        self.apply_movement(bounds);
        self.animation.update(time.elapsed);
    }

    fn apply_gravity(&mut self, bounds: &Rect) {
        if !self.state().has_gravity() {
            return;
        }

        if self.motion.position.y < bounds.bottom() + self.tuning.ground_margin {
            self.motion.position.y += self.tuning.gravity;
        }
    }

    /// Move along the input direction, keeping the sprite inside the play area horizontally
    fn apply_movement(&mut self, bounds: &Rect) {
        self.motion.position += self.motion.direction * self.tuning.move_speed;

        let width = self
            .animation
            .segment()
            .map(|segment| segment.frame_size.x as f32)
            .unwrap_or(0.0);
        self.motion.position.x = clamp(
            self.motion.position.x,
            bounds.left(),
            bounds.right() - width,
        );
    }

    /// Start a jump from whatever the character is doing
    pub fn jump(&mut self) {
        self.switch_state(CharacterState::Jumping);
    }

    fn switch_state(&mut self, state: CharacterState) {
        self.state_machine.transition(state, &mut self.animation);
    }

    /// Shove the character, e.g. from another body bumping into it
    #[allow(dead_code)]
    pub fn push(&mut self, offset: Vec2) {
        self.motion.position += offset;
    }

    /// Teleport the character
    #[allow(dead_code)]
    pub fn set_position(&mut self, position: Vec2) {
        self.motion.position = position;
    }

    pub fn position(&self) -> Vec2 {
        self.motion.position
    }

    #[allow(dead_code)]
    pub fn direction(&self) -> Vec2 {
        self.motion.direction
    }

    pub fn state(&self) -> CharacterState {
        self.state_machine.state()
    }

    #[allow(dead_code)]
    pub fn current_frame(&self) -> Frame {
        self.animation.current_frame()
    }

    #[allow(dead_code)]
    pub fn is_animation_paused(&self) -> bool {
        self.animation.is_paused()
    }

    /// Sheet region to draw this update
    pub fn frame_region(&self) -> Option<FrameRegion> {
        self.animation.frame_region()
    }

    #[allow(dead_code)]
    pub fn tuning(&self) -> &PlayerTuning {
        &self.tuning
    }
}
