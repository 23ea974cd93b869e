//! First sample: a window, an OpenGL context, and the frame loop.
//!
//! Nothing is uploaded and nothing is drawn. Each frame resets the fixed
//! render state and presents, until the window is closed.

use std::process;

use glutin::event::{Event, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use log::error;

use gl_primer::graphics::opengl::reset_render_state;
use gl_primer::{Display, FrameState, InputEvent};

const SCREEN_WIDTH: f64 = 640.0;
const SCREEN_HEIGHT: f64 = 480.0;
const CLEAR_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];

fn main() {
    gl_primer::logging::init();

    match Display::new("Hello Window", SCREEN_WIDTH, SCREEN_HEIGHT) {
        Ok((event_loop, display)) => run(event_loop, display),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}

/// The frame loop: input, state reset, (no draw), present. Exits the
/// process with status 0 once the quit event is observed.
fn run(event_loop: EventLoop<()>, display: Display) -> ! {
    let mut state = FrameState::new();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => {
                state.observe(InputEvent::from_window_event(&event));
                if let WindowEvent::Resized(size) = event {
                    display.resize(size);
                }
            }
            Event::MainEventsCleared => display.request_redraw(),
            Event::RedrawRequested(_) => {
                reset_render_state(display.viewport_size(), CLEAR_COLOR);
                if let Err(err) = display.swap_buffers() {
                    error!("failed to present frame: {}", err);
                    state.quit();
                }
            }
            _ => {}
        }

        if state.should_quit() {
            *control_flow = ControlFlow::Exit;
        }
    })
}
