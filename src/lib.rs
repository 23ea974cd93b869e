//! A progressive set of minimal OpenGL samples.
//!
//! Three binaries build on each other: `hello_window` opens a window with an
//! OpenGL 4.1 core-profile context and runs the frame loop with nothing to
//! draw; `hello_quad` uploads two triangles with per-vertex colors and draws
//! them sequentially; `indexed_quad` draws the same quad from four unique
//! vertices and an index list.
//!
//! The library underneath is a small set of safe wrappers over raw OpenGL
//! calls plus the window/context bring-up. Every sample runs the same five
//! phases in strict order: context initialization, resource upload, pipeline
//! construction, frame loop, teardown. There is deliberately no engine here;
//! each wrapper exists to make one unsafe call sequence readable and to tie
//! GPU object lifetimes to Rust ownership.

pub mod display;
pub mod frame;
pub mod graphics;
pub mod logging;

pub use display::Display;
pub use frame::{FrameState, InputEvent};
pub use graphics::error::GraphicsError;
pub use graphics::mesh::Mesh;
pub use graphics::opengl::{GlProgram, GlShader, GlShaderType};
