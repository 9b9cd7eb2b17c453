// Input manager - routes window keyboard and gamepad events into player input state

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::player::{ControllerInput, PlayerInput};
use gilrs::EventType;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Owns the key bindings and the local player's input state
#[derive(Debug)]
pub struct InputManager {
    /// Rebindable player layout
    config: InputConfig,

    /// Menu/pause keys, consulted when the player layout has no match
    global: InputConfig,

    player: PlayerInput,
}

impl InputManager {
    pub fn new() -> Self {
        Self::with_config(InputConfig::player_defaults())
    }

    pub fn with_config(config: InputConfig) -> Self {
        Self {
            config,
            global: InputConfig::global(),
            player: PlayerInput::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(InputSource::key(key_code), event.state, event.repeat);
        }
    }

    /// Process a gamepad event from gilrs
    pub fn process_gamepad_event(&mut self, event: &EventType) {
        match event {
            EventType::ButtonPressed(button, _) => {
                self.process_source(InputSource::button(*button), true)
            }
            EventType::ButtonReleased(button, _) => {
                self.process_source(InputSource::button(*button), false)
            }
            EventType::Disconnected => {
                log::info!("Gamepad disconnected, releasing input");
                self.reset();
            }
            _ => {}
        }
    }

    fn process_key(&mut self, source: InputSource, state: ElementState, repeat: bool) {
        match state {
            ElementState::Pressed if !repeat => self.process_source(source, true),
            ElementState::Pressed => {}
            ElementState::Released => self.process_source(source, false),
        }
    }

    fn process_source(&mut self, source: InputSource, pressed: bool) {
        let Some(action) = self.action_for(source) else {
            return;
        };

        if pressed {
            self.player.press(action);
        } else {
            self.player.release(action);
        }
    }

    fn action_for(&self, source: InputSource) -> Option<Action> {
        self.config
            .get_action(source)
            .or_else(|| self.global.get_action(source))
    }

    /// Start a new tick
    /// Call this once after the tick's fixed updates have read the input
    pub fn update(&mut self) {
        self.player.update();
    }

    #[allow(dead_code)]
    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    #[allow(dead_code)]
    pub fn player_mut(&mut self) -> &mut PlayerInput {
        &mut self.player
    }

    pub fn controller_input(&self) -> ControllerInput {
        self.player.controller_input()
    }

    #[allow(dead_code)]
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    #[allow(dead_code)]
    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.player.just_pressed(action)
    }

    /// Release everything, e.g. on focus loss
    pub fn reset(&mut self) {
        self.player.reset();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
