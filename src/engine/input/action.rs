// Game action definitions and mappings

use gilrs::Button;
use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Jump,

    // Meta actions
    Pause,
    Menu,
}

/// Represents an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    GamepadButton(Button),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a gamepad button input source
    pub fn button(button: Button) -> Self {
        Self::GamepadButton(button)
    }
}

/// Default keyboard and gamepad bindings for the player
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        // Arrows
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::ArrowUp), Action::MoveUp),
        (InputSource::key(KeyCode::ArrowDown), Action::MoveDown),
        // WASD
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::KeyW), Action::MoveUp),
        (InputSource::key(KeyCode::KeyS), Action::MoveDown),
        (InputSource::key(KeyCode::Space), Action::Jump),
        // Gamepad
        (InputSource::button(Button::DPadLeft), Action::MoveLeft),
        (InputSource::button(Button::DPadRight), Action::MoveRight),
        (InputSource::button(Button::DPadUp), Action::MoveUp),
        (InputSource::button(Button::DPadDown), Action::MoveDown),
        (InputSource::button(Button::South), Action::Jump),
    ]
}

/// Bindings that work regardless of the player mapping
pub fn global_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::Escape), Action::Menu),
        (InputSource::key(KeyCode::KeyP), Action::Pause),
        (InputSource::button(Button::Start), Action::Pause),
    ]
}
