//! Second sample: two triangles with per-vertex colors, drawn sequentially.
//!
//! Six position triples and six color triples go into two vertex buffers;
//! the pipeline comes from the shader pair under `shaders/`; the draw call
//! walks all six vertices in order.

use std::process;

use anyhow::Result;
use glutin::event::{Event, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use log::{error, warn};

use gl_primer::graphics::opengl::reset_render_state;
use gl_primer::{Display, FrameState, GlProgram, InputEvent, Mesh};

const SCREEN_WIDTH: f64 = 640.0;
const SCREEN_HEIGHT: f64 = 480.0;
const CLEAR_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];

const VERTEX_SHADER_PATH: &str = "shaders/vert.glsl";
const FRAGMENT_SHADER_PATH: &str = "shaders/frag.glsl";

// Two triangles, listed vertex by vertex; all coordinates in [-1, 1].
#[rustfmt::skip]
const QUAD_POSITIONS: [f32; 18] = [
    // x, y, z
    -0.8, -0.8, 0.0, // bottom left
     0.8, -0.8, 0.0, // bottom right
    -0.8,  0.8, 0.0, // top left
    -0.8,  0.8, 0.0, // top left
     0.8,  0.8, 0.0, // top right
     0.8, -0.8, 0.0, // bottom right
];

// One color per vertex above; all channels in [0, 1].
#[rustfmt::skip]
const QUAD_COLORS: [f32; 18] = [
    // r, g, b
    1.0, 0.0, 0.0,
    1.0, 1.0, 0.0,
    0.0, 0.0, 1.0,
    0.0, 0.0, 1.0,
    0.0, 1.0, 0.0,
    1.0, 1.0, 0.0,
];

struct Sample {
    display: Display,
    mesh: Mesh,
    pipeline: GlProgram,
    state: FrameState,
}

fn main() {
    gl_primer::logging::init();

    match setup() {
        Ok((event_loop, sample)) => run(event_loop, sample),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}

/// Phases one through three: context, geometry upload, pipeline.
fn setup() -> Result<(EventLoop<()>, Sample)> {
    let (event_loop, display) = Display::new("Hello Quad", SCREEN_WIDTH, SCREEN_HEIGHT)?;

    let mesh = Mesh::with_colors(&QUAD_POSITIONS, &QUAD_COLORS);

    let pipeline = GlProgram::from_files(VERTEX_SHADER_PATH, FRAGMENT_SHADER_PATH)?;
    if let Err(err) =
        pipeline.set_uniform_2f("u_resolution", SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32)
    {
        // Drivers are free to optimize an unused uniform away.
        warn!("{}", err);
    }

    Ok((
        event_loop,
        Sample {
            display,
            mesh,
            pipeline,
            state: FrameState::new(),
        },
    ))
}

/// The frame loop: input, state reset, one sequential draw call, present.
fn run(event_loop: EventLoop<()>, mut sample: Sample) -> ! {
    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => {
                sample.state.observe(InputEvent::from_window_event(&event));
                if let WindowEvent::Resized(size) = event {
                    sample.display.resize(size);
                }
            }
            Event::MainEventsCleared => sample.display.request_redraw(),
            Event::RedrawRequested(_) => {
                reset_render_state(sample.display.viewport_size(), CLEAR_COLOR);
                sample.pipeline.set_used();
                sample.mesh.draw();
                if let Err(err) = sample.display.swap_buffers() {
                    error!("failed to present frame: {}", err);
                    sample.state.quit();
                }
            }
            _ => {}
        }

        if sample.state.should_quit() {
            *control_flow = ControlFlow::Exit;
        }
    })
}
