// Per-tick input state of the local player

use super::action::Action;
use glam::Vec2;
use std::collections::HashSet;

/// What the character controller reads from the player each tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerInput {
    /// Screen-space movement direction, each axis -1, 0 or 1
    pub direction: Vec2,
    /// Jump was pressed this tick
    pub jump: bool,
}

impl ControllerInput {
    #[allow(dead_code)]
    pub fn idle() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn moving(x: f32, y: f32) -> Self {
        Self {
            direction: Vec2::new(x, y),
            jump: false,
        }
    }

    #[allow(dead_code)]
    pub fn jump() -> Self {
        Self {
            direction: Vec2::ZERO,
            jump: true,
        }
    }
}

/// Pressed/released state of every action for the current tick
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions currently held down
    pressed: HashSet<Action>,

    /// Actions pressed since the last `update`
    just_pressed: HashSet<Action>,

    /// Actions released since the last `update`
    just_released: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    #[allow(dead_code)]
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Start a new tick: forget press/release edges, keep held actions
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Drop all state, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Movement direction in screen space (+x right, +y down)
    ///
    /// Opposite keys cancel out; each axis is -1, 0 or 1.
    pub fn direction(&self) -> Vec2 {
        let mut direction = Vec2::ZERO;

        if self.is_pressed(Action::MoveLeft) {
            direction.x -= 1.0;
        }
        if self.is_pressed(Action::MoveRight) {
            direction.x += 1.0;
        }
        if self.is_pressed(Action::MoveUp) {
            direction.y -= 1.0;
        }
        if self.is_pressed(Action::MoveDown) {
            direction.y += 1.0;
        }

        direction
    }

    /// Snapshot for the character controller; jump fires on the press edge only
    pub fn controller_input(&self) -> ControllerInput {
        ControllerInput {
            direction: self.direction(),
            jump: self.just_pressed(Action::Jump),
        }
    }
}
