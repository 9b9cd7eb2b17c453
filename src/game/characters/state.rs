// Character state machine

use std::time::Duration;

use glam::Vec2;

use super::animation::AnimationPlayer;
use super::character::Motion;
use super::tuning::PlayerTuning;

/// Represents the current behavior of the character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterState {
    /// On the ground, moving or standing still
    #[default]
    Walking,
    /// Moving along a vertical surface
    Climbing,
    /// Playing the jump arc
    Jumping,
    /// Dozing after standing still for a while
    Sleeping,
}

impl CharacterState {
    pub const ALL: [CharacterState; 4] = [
        Self::Walking,
        Self::Climbing,
        Self::Jumping,
        Self::Sleeping,
    ];

    /// Index of this state's segment in the sprite sheet
    pub fn segment_index(&self) -> usize {
        match self {
            Self::Walking => 0,
            Self::Climbing => 1,
            Self::Jumping => 2,
            Self::Sleeping => 3,
        }
    }

    /// Get the animation name for this state
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Walking => "walk",
            Self::Climbing => "climb",
            Self::Jumping => "jump",
            Self::Sleeping => "sleep",
        }
    }

    /// Check if gravity pulls the character down in this state
    pub fn has_gravity(&self) -> bool {
        matches!(self, Self::Walking | Self::Jumping)
    }
}

/// State machine that handles character state transitions
#[derive(Debug)]
pub struct CharacterStateMachine {
    current_state: CharacterState,
    previous_state: CharacterState,
    state_time: Duration,
    /// Time without movement input while walking; survives jumps and climbs
    idle_time: Duration,
    /// Position recorded on the first sleeping update
    sleep_anchor: Option<Vec2>,
}

impl Default for CharacterStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterStateMachine {
    pub fn new() -> Self {
        Self {
            current_state: CharacterState::Walking,
            previous_state: CharacterState::Walking,
            state_time: Duration::ZERO,
            idle_time: Duration::ZERO,
            sleep_anchor: None,
        }
    }

    pub fn state(&self) -> CharacterState {
        self.current_state
    }

    #[allow(dead_code)]
    pub fn previous_state(&self) -> CharacterState {
        self.previous_state
    }

    /// Time spent in the current state
    #[allow(dead_code)]
    pub fn state_time(&self) -> Duration {
        self.state_time
    }

    #[allow(dead_code)]
    pub fn idle_time(&self) -> Duration {
        self.idle_time
    }

    /// Enter `new_state`, even if it is already active
    ///
    /// Plays the state's segment from its first frame, un-paused.
    pub fn transition(&mut self, new_state: CharacterState, animation: &mut AnimationPlayer) {
        log::debug!(
            "Character state {:?} -> {:?}",
            self.current_state,
            new_state
        );

        self.previous_state = self.current_state;
        self.current_state = new_state;
        self.state_time = Duration::ZERO;
        self.sleep_anchor = None;

        animation.select_segment(new_state.segment_index());
    }

    /// Run the active state's logic for one update
    pub fn update(
        &mut self,
        elapsed: Duration,
        motion: &mut Motion,
        animation: &mut AnimationPlayer,
        tuning: &PlayerTuning,
    ) {
        self.state_time += elapsed;

        let next = match self.current_state {
            CharacterState::Walking => self.update_walking(elapsed, motion, animation, tuning),
            CharacterState::Sleeping => self.update_sleeping(motion, animation),
            CharacterState::Jumping => Self::update_jumping(motion, animation, tuning),
            CharacterState::Climbing => Self::update_climbing(motion, animation),
        };

        if let Some(state) = next {
            self.transition(state, animation);
        }
    }

    fn update_walking(
        &mut self,
        elapsed: Duration,
        motion: &Motion,
        animation: &mut AnimationPlayer,
        tuning: &PlayerTuning,
    ) -> Option<CharacterState> {
        let direction = motion.direction;

        if direction == Vec2::ZERO {
            // Stand still on the idle frame
            animation.pause();
            animation.set_frame(tuning.idle_frame);
        } else {
            self.idle_time = Duration::ZERO;
            animation.resume();
        }

        if direction.x == 0.0 && direction.y != 0.0 {
            return Some(CharacterState::Climbing);
        }

        self.idle_time += elapsed;
        if self.idle_time > tuning.sleep_delay {
            self.idle_time = Duration::ZERO;
            return Some(CharacterState::Sleeping);
        }

        None
    }

    fn update_sleeping(
        &mut self,
        motion: &Motion,
        animation: &mut AnimationPlayer,
    ) -> Option<CharacterState> {
        let anchor = *self.sleep_anchor.get_or_insert(motion.position);

        if animation.is_at_segment_end() {
            animation.pause();
        }

        // Pushed or moved since dozing off
        if motion.position != anchor {
            return Some(CharacterState::Walking);
        }

        None
    }

    fn update_jumping(
        motion: &mut Motion,
        animation: &mut AnimationPlayer,
        tuning: &PlayerTuning,
    ) -> Option<CharacterState> {
        animation.resume();
        motion.position.x += tuning.jump_drift * motion.direction.x;

        if tuning.is_lift_frame(animation.current_frame()) {
            motion.position.y -= tuning.jump_lift;
        }

        if animation.is_at_segment_end() {
            return Some(CharacterState::Walking);
        }

        None
    }

    fn update_climbing(
        motion: &Motion,
        animation: &mut AnimationPlayer,
    ) -> Option<CharacterState> {
        animation.set_paused(motion.direction == Vec2::ZERO);

        if motion.direction.x != 0.0 {
            return Some(CharacterState::Walking);
        }

        // Keep climbing until horizontal input arrives
        let start = animation.segment().map(|segment| segment.start);
        if let (true, Some(start)) = (animation.is_at_segment_end(), start) {
            animation.set_frame(start);
        }

        None
    }
}
