use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use super::opengl::GlShaderType;

/// Everything that can go wrong while bringing up the rendering state.
///
/// The C samples these programs are modeled after print a message and call
/// `exit(1)` at each failure site. Returning a value instead leaves that
/// decision to the caller and lets already-acquired resources drop cleanly
/// on the way out.
#[derive(Debug)]
pub enum GraphicsError {
    /// The window could not be created.
    Window(String),
    /// The OpenGL context could not be created or made current.
    Context(String),
    /// A shader source file could not be read.
    ShaderFile { path: PathBuf, source: io::Error },
    /// A shader stage failed to compile; carries the driver's info log.
    ShaderCompile { stage: GlShaderType, log: String },
    /// The program object failed to link; carries the driver's info log.
    ProgramLink(String),
    /// A named uniform is not active in the linked program.
    UniformNotFound(String),
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphicsError::Window(msg) => write!(f, "window creation failed: {}", msg),
            GraphicsError::Context(msg) => write!(f, "OpenGL context unavailable: {}", msg),
            GraphicsError::ShaderFile { path, source } => {
                write!(f, "could not read shader {}: {}", path.display(), source)
            }
            GraphicsError::ShaderCompile { stage, log } => {
                write!(f, "{} shader failed to compile: {}", stage, log)
            }
            GraphicsError::ProgramLink(log) => {
                write!(f, "shader program failed to link: {}", log)
            }
            GraphicsError::UniformNotFound(name) => {
                write!(f, "uniform {} not found in program", name)
            }
        }
    }
}

impl Error for GraphicsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GraphicsError::ShaderFile { source, .. } => Some(source),
            _ => None,
        }
    }
}
