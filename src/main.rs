use anyhow::Result;
use gilrs::Gilrs;
use glam::Vec2;
use log::info;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use crate::core::Rect;
use engine::assets::SpriteSheet;
use engine::game_loop::GameLoop;
use engine::input::{Action, InputManager};
use game::characters::GlitchPlayer;

fn main() -> Result<()> {
    // RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting Glitch...");

    let sheet = SpriteSheet::glitch()?;
    if let Some(path) = std::env::args().nth(1) {
        sheet.verify_image(&path)?;
    }
    let mut player = GlitchPlayer::new(sheet, Vec2::ZERO)?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Glitch")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    // Keyboard still works without a gamepad backend
    let mut gamepads = match Gilrs::new() {
        Ok(gilrs) => Some(gilrs),
        Err(e) => {
            log::warn!("Gamepad support unavailable: {}", e);
            None
        }
    };

    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();
    let mut last_state = player.state();
    let mut jump_queued = false;
    let mut last_time = std::time::Duration::ZERO;

    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                if let Some(gilrs) = gamepads.as_mut() {
                    while let Some(gilrs::Event { event, .. }) = gilrs.next_event() {
                        input.process_gamepad_event(&event);
                    }
                }

                if input.just_pressed(Action::Menu) {
                    info!("Menu pressed, shutting down...");
                    elwt.exit();
                    return;
                }
                if input.just_pressed(Action::Pause) {
                    game_loop.toggle_pause();
                }

                let size = window.inner_size();
                let bounds = Rect::from_size(size.width as f32, size.height as f32);

                // A press between ticks still reaches the next update
                jump_queued |= input.controller_input().jump;
                if game_loop.is_paused() {
                    jump_queued = false;
                }

                for _ in 0..game_loop.begin_frame() {
                    let time = game_loop.next_update();
                    let mut controls = input.controller_input();
                    controls.jump = std::mem::take(&mut jump_queued);
                    player.update(&time, &controls, &bounds);
                    last_time = time.total;
                }

                if player.state() != last_state {
                    info!(
                        "[{:.2}s] Glitch is now {} at ({:.0}, {:.0})",
                        last_time.as_secs_f32(),
                        player.state().animation_name(),
                        player.position().x,
                        player.position().y
                    );
                    last_state = player.state();
                }
                if let Some(region) = player.frame_region() {
                    log::trace!(
                        "Drawing {}x{} at ({}, {}), uv {:?}..{:?}",
                        region.width,
                        region.height,
                        region.x,
                        region.y,
                        region.uv_min,
                        region.uv_max
                    );
                }

                input.update();
            }
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        }
    }).map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
