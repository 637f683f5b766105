//! Windowed driver for the effect.
//!
//! Opens a window purely to source keyboard input and a per-frame tick;
//! drawing is the host's business via the [`Visual`]s it supplies. Each
//! redraw the runner updates the clock, steps the effect, syncs the visuals
//! and clears the input edges.

use crate::effect::CubeEffect;
use crate::error::RunError;
use crate::input::Input;
use crate::time::Time;
use crate::visual::Visual;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Run the effect in a winit event loop until the window closes.
///
/// `parent` is the visual for the rotating volume; `cube_visuals` should
/// hold one visual per pooled cube.
pub fn run<V: Visual>(
    effect: CubeEffect,
    parent: V,
    cube_visuals: Vec<V>,
) -> Result<(), RunError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        effect,
        parent,
        cube_visuals,
        input: Input::new(),
        time: Time::new(),
        window: None,
        failure: None,
    };
    event_loop.run_app(&mut app)?;

    match app.failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct App<V: Visual> {
    effect: CubeEffect,
    parent: V,
    cube_visuals: Vec<V>,
    input: Input,
    time: Time,
    window: Option<Window>,
    failure: Option<RunError>,
}

impl<V: Visual> ApplicationHandler for App<V> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("cubeburst")
            .with_inner_size(winit::dpi::LogicalSize::new(800, 600));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                log::info!(
                    "effect running: {} pooled cubes, fire key {:?}",
                    self.effect.pool().len(),
                    self.effect.config().fire_key
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                self.failure = Some(RunError::Window(e));
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { .. } => {
                self.input.handle_event(&event);
            }
            WindowEvent::RedrawRequested => {
                let (_, delta) = self.time.update();
                self.effect.update(delta, &self.input);
                self.effect
                    .sync_visuals(&mut self.parent, &mut self.cube_visuals);
                self.input.begin_frame();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
