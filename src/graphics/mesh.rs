//! GPU-side geometry: the vertex buffers, their layout, and the draw call.

use std::ptr::null;

use gl;
use gl::types::*;
use log::debug;

use super::opengl::{
    set_vertex_attrib, unbind_buffers, GlBufferType, GlElementBuffer, GlVertexArray,
    GlVertexBuffer,
};

/// Components per vertex attribute; positions and colors are both xyz/rgb
/// triples.
pub const VERTEX_COMPONENTS: usize = 3;

/// Attribute slot the vertex shader reads positions from.
const POSITION_SLOT: GLuint = 0;
/// Attribute slot the vertex shader reads colors from.
const COLOR_SLOT: GLuint = 1;

/// Number of vertices described by a flat attribute array.
///
/// Plain integer division, exactly like the samples this is ported from: an
/// array whose length is not a multiple of [`VERTEX_COMPONENTS`] silently
/// loses its trailing components, and what a draw call produces for such
/// input is undefined. Callers are expected to supply well-formed arrays.
pub fn vertex_count(component_count: usize) -> usize {
    component_count / VERTEX_COMPONENTS
}

/// One uploaded piece of geometry: a vertex array object, a position buffer
/// on slot 0, an optional color buffer on slot 1, and an optional index
/// buffer.
///
/// Everything is uploaded once with `STATIC_DRAW` during construction and
/// never written again; the GPU objects are released when the `Mesh` drops.
pub struct Mesh {
    vao: GlVertexArray,
    positions: GlVertexBuffer,
    colors: Option<GlVertexBuffer>,
    indices: Option<GlElementBuffer>,
    vertex_count: usize,
    index_count: usize,
}

impl Mesh {
    /// Uploads position data only.
    pub fn from_positions(positions: &[f32]) -> Self {
        Self::build(positions, None, None)
    }

    /// Uploads positions plus one color per vertex.
    pub fn with_colors(positions: &[f32], colors: &[f32]) -> Self {
        Self::build(positions, Some(colors), None)
    }

    /// Uploads positions, colors, and a triangle index list; [`Mesh::draw`]
    /// switches to indexed drawing.
    pub fn with_colors_indexed(positions: &[f32], colors: &[f32], indices: &[u32]) -> Self {
        Self::build(positions, Some(colors), Some(indices))
    }

    fn build(positions: &[f32], colors: Option<&[f32]>, indices: Option<&[u32]>) -> Self {
        let vao = GlVertexArray::new();
        vao.bind();

        let position_buffer = GlVertexBuffer::init(positions);
        set_vertex_attrib(POSITION_SLOT, 0, VERTEX_COMPONENTS as GLint, 0);

        let color_buffer = colors.map(|data| {
            let buffer = GlVertexBuffer::init(data);
            set_vertex_attrib(COLOR_SLOT, 0, VERTEX_COMPONENTS as GLint, 0);
            buffer
        });

        // The element binding is recorded by the VAO, so it stays bound.
        let index_buffer = indices.map(GlElementBuffer::init);

        vao.unbind();
        unbind_buffers(GlBufferType::Array);

        let vertex_count = vertex_count(positions.len());
        let index_count = indices.map_or(0, |data| data.len());
        debug!(
            "mesh uploaded: {} vertices, {} indices",
            vertex_count, index_count
        );

        Mesh {
            vao,
            positions: position_buffer,
            colors: color_buffer,
            indices: index_buffer,
            vertex_count,
            index_count,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn index_count(&self) -> usize {
        self.index_count
    }

    pub fn has_colors(&self) -> bool {
        self.colors.is_some()
    }

    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    /// Issues the one draw call for this geometry: `index_count` indexed
    /// vertex references when an index buffer was uploaded, `vertex_count`
    /// sequential vertices otherwise.
    pub fn draw(&self) {
        self.vao.bind();
        self.positions.bind();

        unsafe {
            match self.indices {
                Some(_) => gl::DrawElements(
                    gl::TRIANGLES,
                    self.index_count as GLsizei,
                    gl::UNSIGNED_INT,
                    null(),
                ),
                None => gl::DrawArrays(gl::TRIANGLES, 0, self.vertex_count as GLsizei),
            }
        }
    }
}
