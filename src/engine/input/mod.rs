// Input handling system
//
// Keyboard events from the window and gamepad events from gilrs are
// mapped to game actions through rebindable bindings, then sampled once
// per tick into a `ControllerInput` for the character controller.
//
// - `action`: game actions and default key/button bindings
// - `config`: rebindable source -> action mapping
// - `player`: per-tick pressed/just-pressed state
// - `manager`: routes winit and gilrs events through the bindings
//
// ```rust
// let mut input = InputManager::new();
// input.process_keyboard_event(&key_event);
// input.process_gamepad_event(&gamepad_event.event);
//
// for _ in 0..updates {
//     player.update(&time, &input.controller_input(), &bounds);
// }
// input.update();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

pub use action::Action;
pub use manager::InputManager;
pub use player::ControllerInput;
