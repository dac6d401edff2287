use std::sync::Arc;
use std::time::Instant;

use portfolio_core::input::pointer_ndc;
use portfolio_core::{build_scene, AppState, Direction, LogPresenter};
use portfolio_render::GpuState;
use winit::event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorIcon, WindowBuilder};

fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::KeyW => Some(Direction::Forward),
        KeyCode::KeyS => Some(Direction::Backward),
        KeyCode::KeyA => Some(Direction::Left),
        KeyCode::KeyD => Some(Direction::Right),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Desert Portfolio (native)")
            .build(&event_loop)?,
    );
    let size = window.inner_size();

    let scene = build_scene(&mut rand::thread_rng());
    let aspect = size.width.max(1) as f32 / size.height.max(1) as f32;
    let mut app = AppState::new(scene, aspect);
    let mut panel = LogPresenter::default();
    let mut gpu = pollster::block_on(GpuState::new(
        Arc::clone(&window),
        size.width,
        size.height,
        &app.scene,
    ))?;
    log::info!("[native] WASD to move, click a marker to open it, Escape to close");

    let mut last = Instant::now();
    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                gpu.resize_if_needed(size.width, size.height);
                app.resize(size.width, size.height);
            }
            WindowEvent::Focused(false) => app.input.release_all(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        repeat,
                        ..
                    },
                ..
            } => {
                if code == KeyCode::Escape && state == ElementState::Pressed && !repeat {
                    app.close_panel(&mut panel);
                } else if let Some(dir) = direction_for(code) {
                    match state {
                        ElementState::Pressed => app.key_down(dir),
                        ElementState::Released => app.key_up(dir),
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let size = window.inner_size();
                let ndc = pointer_ndc(
                    position.x as f32,
                    position.y as f32,
                    size.width as f32,
                    size.height as f32,
                );
                app.pointer_move(ndc);
            }
            WindowEvent::CursorLeft { .. } => app.pointer_leave(),
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                app.click(&mut panel);
            }
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            let dt = (now - last).as_secs_f32();
            last = now;
            app.tick(dt);
            window.set_cursor_icon(if app.hovered().is_some() {
                CursorIcon::Pointer
            } else {
                CursorIcon::Default
            });
            match gpu.render(&app.scene, &app.camera) {
                Ok(()) => window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[native] out of GPU memory");
                    elwt.exit();
                }
                Err(e) => log::warn!("[native] surface error: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_keys_map_like_the_web_codes() {
        for (code, name) in [
            (KeyCode::KeyW, "KeyW"),
            (KeyCode::KeyS, "KeyS"),
            (KeyCode::KeyA, "KeyA"),
            (KeyCode::KeyD, "KeyD"),
        ] {
            assert_eq!(direction_for(code), Direction::from_key_code(name));
        }
        assert_eq!(direction_for(KeyCode::Space), None);
    }
}
