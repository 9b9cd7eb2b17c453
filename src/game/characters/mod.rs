// Character system
//
// - Character data and the per-update entry point
// - Tuning constants for movement and timing
// - State machine for character behavior
// - Animation playback over sprite sheet segments

pub mod animation;
pub mod character;
pub mod state;
pub mod tuning;

pub use character::GlitchPlayer;
