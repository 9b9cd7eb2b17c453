// Gameplay: characters and their behavior

pub mod characters;
