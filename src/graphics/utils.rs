//! The unsafe plumbing shared by the object wrappers: shader compilation,
//! info-log retrieval, and shader source loading.

use std::ffi::{CStr, CString};
use std::fs;
use std::path::Path;
use std::ptr::{null, null_mut};

use gl;
use gl::types::*;

use super::error::GraphicsError;

/// Compiles `source` as a shader of the given kind.
///
/// The compile status is checked and the driver's info log is returned on
/// failure; the half-built shader object is released before returning.
pub fn shader_from_source(source: &CStr, kind: GLenum) -> Result<GLuint, String> {
    let id: GLuint = unsafe { gl::CreateShader(kind) };
    unsafe {
        gl::ShaderSource(id, 1, &source.as_ptr(), null());
        gl::CompileShader(id);
    }

    let mut success: GLint = 1;
    unsafe {
        gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut success);
    }

    if success == 0 {
        let mut len: GLint = 0;
        unsafe {
            gl::GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut len);
        }

        let error = create_ws_cstring_with_len(len as usize);
        unsafe {
            gl::GetShaderInfoLog(id, len, null_mut(), error.as_ptr() as *mut GLchar);
            gl::DeleteShader(id);
        }

        return Err(error.to_string_lossy().into_owned());
    }

    Ok(id)
}

/// Reads a program object's info log, e.g. after a link or validate query.
pub fn program_info_log(id: GLuint) -> String {
    let mut len: GLint = 0;
    unsafe {
        gl::GetProgramiv(id, gl::INFO_LOG_LENGTH, &mut len);
    }

    let log = create_ws_cstring_with_len(len as usize);
    unsafe {
        gl::GetProgramInfoLog(id, len, null_mut(), log.as_ptr() as *mut GLchar);
    }

    log.to_string_lossy().into_owned()
}

/// Allocates a whitespace-filled `CString` for GL to write an info log into.
pub fn create_ws_cstring_with_len(len: usize) -> CString {
    let mut buf: Vec<u8> = Vec::with_capacity(len + 1);
    buf.extend([b' '].iter().cycle().take(len));
    unsafe { CString::from_vec_unchecked(buf) }
}

/// Looks up one of the GL identification strings (vendor, renderer, ...).
///
/// Only meaningful once a context is current; a driver that has nothing to
/// say yields a placeholder rather than a crash.
pub fn gl_string(name: GLenum) -> String {
    unsafe {
        let ptr = gl::GetString(name);
        if ptr.is_null() {
            return String::from("(unavailable)");
        }
        CStr::from_ptr(ptr as *const GLchar)
            .to_string_lossy()
            .into_owned()
    }
}

/// Loads a shader source file, normalizing line endings.
pub fn load_shader_source<P: AsRef<Path>>(path: P) -> Result<String, GraphicsError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| GraphicsError::ShaderFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(normalize_source(&raw))
}

/// Rebuilds `raw` line by line, so CRLF input reaches the compiler as plain
/// LF and the source always ends with a newline.
pub fn normalize_source(raw: &str) -> String {
    let mut source = String::with_capacity(raw.len() + 1);
    for line in raw.lines() {
        source.push_str(line);
        source.push('\n');
    }
    source
}
