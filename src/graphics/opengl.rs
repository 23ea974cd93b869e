//! Safe wrappers around the raw OpenGL object model.
//!
//! Every GPU object the samples touch — shader, program, vertex array,
//! vertex and element buffers — gets a small owning type whose `Drop`
//! releases the GL name, so teardown happens on every exit path without
//! bookkeeping. None of this tries to be a rendering library; each wrapper
//! covers exactly the call sequence the samples need and nothing more.

use std::ffi::CString;
use std::fmt;
use std::mem::size_of;
use std::path::Path;

use gl;
use gl::types::*;
use log::warn;

use super::error::GraphicsError;
use super::utils::{load_shader_source, program_info_log, shader_from_source};

/// The two programmable stages the samples use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlShaderType {
    Vertex = gl::VERTEX_SHADER as isize,
    Fragment = gl::FRAGMENT_SHADER as isize,
}

impl fmt::Display for GlShaderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlShaderType::Vertex => f.write_str("vertex"),
            GlShaderType::Fragment => f.write_str("fragment"),
        }
    }
}

/// A compiled shader stage.
pub struct GlShader {
    id: GLuint,
}

impl GlShader {
    pub fn id(&self) -> GLuint {
        self.id
    }

    /// Compiles `source` as the given stage, surfacing the driver's info
    /// log if compilation fails.
    pub fn from_source(source: &str, kind: GlShaderType) -> Result<Self, GraphicsError> {
        let source = CString::new(source).map_err(|_| GraphicsError::ShaderCompile {
            stage: kind,
            log: String::from("source contains an interior NUL byte"),
        })?;

        let id = shader_from_source(&source, kind as GLenum)
            .map_err(|log| GraphicsError::ShaderCompile { stage: kind, log })?;

        Ok(Self { id })
    }

    /// Reads a source file and compiles it as the given stage.
    pub fn from_file<P: AsRef<Path>>(path: P, kind: GlShaderType) -> Result<Self, GraphicsError> {
        let source = load_shader_source(path)?;
        Self::from_source(&source, kind)
    }
}

impl Drop for GlShader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteShader(self.id);
        }
    }
}

/// The graphics pipeline: one vertex stage and one fragment stage linked
/// into a single executable program object.
pub struct GlProgram {
    id: GLuint,
}

impl GlProgram {
    pub fn id(&self) -> GLuint {
        self.id
    }

    /// Links the given stages into one program object.
    ///
    /// The link status is checked and surfaced. Validation runs right after
    /// linking, but a false validate status only logs a warning: its result
    /// depends on the GL state bound at call time, not on the program alone.
    pub fn from_shaders(shaders: &[GlShader]) -> Result<Self, GraphicsError> {
        let id = unsafe { gl::CreateProgram() };

        unsafe {
            for shader in shaders {
                gl::AttachShader(id, shader.id());
            }

            gl::LinkProgram(id);
        }

        let mut success: GLint = 1;
        unsafe {
            gl::GetProgramiv(id, gl::LINK_STATUS, &mut success);
        }

        if success == 0 {
            let log = program_info_log(id);
            unsafe {
                gl::DeleteProgram(id);
            }
            return Err(GraphicsError::ProgramLink(log));
        }

        let mut valid: GLint = 1;
        unsafe {
            gl::ValidateProgram(id);
            gl::GetProgramiv(id, gl::VALIDATE_STATUS, &mut valid);
        }
        if valid == 0 {
            warn!("program validation failed: {}", program_info_log(id));
        }

        unsafe {
            for shader in shaders {
                gl::DetachShader(id, shader.id());
            }
        }

        Ok(Self { id })
    }

    /// Builds the whole pipeline from a vertex and a fragment source file.
    pub fn from_files<P: AsRef<Path>>(vert: P, frag: P) -> Result<Self, GraphicsError> {
        let vert_shader = GlShader::from_file(vert, GlShaderType::Vertex)?;
        let frag_shader = GlShader::from_file(frag, GlShaderType::Fragment)?;
        Self::from_shaders(&[vert_shader, frag_shader])
    }

    pub fn set_used(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }

    /// Sets a `vec2` uniform by name, leaving no program bound afterwards.
    ///
    /// Intended for one-shot setup right after linking. Looking up a name
    /// the linker discarded (or never saw) is reported to the caller; GL
    /// drivers are free to optimize unused uniforms away.
    pub fn set_uniform_2f(&self, name: &str, x: f32, y: f32) -> Result<(), GraphicsError> {
        let c_name =
            CString::new(name).map_err(|_| GraphicsError::UniformNotFound(name.to_string()))?;

        let location = unsafe { gl::GetUniformLocation(self.id, c_name.as_ptr()) };
        if location < 0 {
            return Err(GraphicsError::UniformNotFound(name.to_string()));
        }

        unsafe {
            gl::UseProgram(self.id);
            gl::Uniform2f(location, x, y);
            gl::UseProgram(0);
        }

        Ok(())
    }
}

impl Drop for GlProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

pub enum GlBufferType {
    Array = gl::ARRAY_BUFFER as isize,
    Element = gl::ELEMENT_ARRAY_BUFFER as isize,
}

/// A vertex array object. Records the attribute layout and element-buffer
/// binding set up while it is bound.
pub struct GlVertexArray {
    id: GLuint,
}

impl GlVertexArray {
    pub fn new() -> Self {
        let mut id: GLuint = 0;
        unsafe { gl::GenVertexArrays(1, &mut id) };
        Self { id }
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn bind(&self) {
        unsafe { gl::BindVertexArray(self.id) };
    }

    pub fn unbind(&self) {
        unsafe { gl::BindVertexArray(0) };
    }
}

impl Default for GlVertexArray {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for GlVertexArray {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.id);
        }
    }
}

/// A GPU-resident array of per-vertex floats, uploaded once as static data
/// and never written again.
pub struct GlVertexBuffer {
    id: GLuint,
}

impl GlVertexBuffer {
    pub fn init(data: &[f32]) -> Self {
        let vbo = Self::generate();
        vbo.bind();
        unsafe {
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (data.len() * size_of::<GLfloat>()) as GLsizeiptr,
                data.as_ptr() as *const GLvoid,
                gl::STATIC_DRAW,
            );
        }

        vbo
    }

    pub fn generate() -> Self {
        let mut vbo: GLuint = 0;
        unsafe { gl::GenBuffers(1, &mut vbo) };
        Self { id: vbo }
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn bind(&self) {
        unsafe { gl::BindBuffer(gl::ARRAY_BUFFER, self.id) };
    }
}

impl Drop for GlVertexBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.id);
        }
    }
}

/// A GPU-resident list of vertex indices, bound as element storage so a
/// draw call can reuse vertices instead of repeating them.
pub struct GlElementBuffer {
    id: GLuint,
}

impl GlElementBuffer {
    pub fn init(data: &[u32]) -> Self {
        let ebo = Self::generate();
        ebo.bind();
        unsafe {
            gl::BufferData(
                gl::ELEMENT_ARRAY_BUFFER,
                (data.len() * size_of::<GLuint>()) as GLsizeiptr,
                data.as_ptr() as *const GLvoid,
                gl::STATIC_DRAW,
            );
        }

        ebo
    }

    pub fn generate() -> Self {
        let mut ebo: GLuint = 0;
        unsafe { gl::GenBuffers(1, &mut ebo) };
        Self { id: ebo }
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn bind(&self) {
        unsafe { gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, self.id) };
    }
}

impl Drop for GlElementBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.id);
        }
    }
}

pub fn unbind_buffers(buffer_type: GlBufferType) {
    unsafe { gl::BindBuffer(buffer_type as GLenum, 0) };
}

/// Tells the pipeline how to read one vertex attribute from the buffer
/// bound at call time: input slot, float components per vertex, and the
/// stride/offset in elements.
pub fn set_vertex_attrib(index: GLuint, offset: usize, size: GLint, stride: usize) {
    unsafe {
        gl::EnableVertexAttribArray(index);
        gl::VertexAttribPointer(
            index,
            size,
            gl::FLOAT,
            gl::FALSE,
            (stride * size_of::<GLfloat>()) as GLsizei,
            (offset * size_of::<GLfloat>()) as *const GLvoid,
        );
    }
}

/// Fixed per-frame state reset: depth test and face culling off, viewport
/// to the framebuffer size, color and depth buffers cleared.
pub fn reset_render_state(viewport: (i32, i32), clear_color: [f32; 4]) {
    let (width, height) = viewport;
    unsafe {
        gl::Disable(gl::DEPTH_TEST);
        gl::Disable(gl::CULL_FACE);
        gl::Viewport(0, 0, width, height);
        gl::ClearColor(
            clear_color[0],
            clear_color[1],
            clear_color[2],
            clear_color[3],
        );
        gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
    }
}
