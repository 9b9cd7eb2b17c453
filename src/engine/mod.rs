// Engine modules: assets, game loop, input

pub mod assets;
pub mod game_loop;
pub mod input;
