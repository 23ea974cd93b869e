//! Window and OpenGL context bring-up.

use glutin::dpi::{LogicalSize, PhysicalSize};
use glutin::event_loop::EventLoop;
use glutin::window::{Window, WindowBuilder};
use glutin::{
    Api, ContextBuilder, ContextError, GlProfile, GlRequest, PossiblyCurrent, WindowedContext,
};
use log::info;

use crate::graphics::error::GraphicsError;
use crate::graphics::utils::gl_string;

/// OpenGL version the samples request.
const GL_VERSION: (u8, u8) = (4, 1);
/// Depth bits requested for the default framebuffer.
const DEPTH_BITS: u8 = 24;

/// The one window-plus-context pair a sample owns.
///
/// Creating a `Display` is the first phase of every sample: nothing may
/// talk to the GPU until the context is current and the function pointers
/// are loaded, both of which happen inside [`Display::new`]. Dropping the
/// `Display` tears the window and context down with it.
pub struct Display {
    context: WindowedContext<PossiblyCurrent>,
}

impl Display {
    /// Opens a window of the given logical size and brings up a core-profile,
    /// double-buffered OpenGL context for it.
    ///
    /// Returns the event loop alongside the display: glutin hands out
    /// windows per event loop, and the sample's frame loop consumes it.
    pub fn new(
        title: &str,
        width: f64,
        height: f64,
    ) -> Result<(EventLoop<()>, Display), GraphicsError> {
        let event_loop = EventLoop::new();
        let window = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(LogicalSize::new(width, height));

        let context = ContextBuilder::new()
            .with_gl(GlRequest::Specific(Api::OpenGl, GL_VERSION))
            .with_gl_profile(GlProfile::Core)
            .with_double_buffer(Some(true))
            .with_depth_buffer(DEPTH_BITS)
            .build_windowed(window, &event_loop)
            .map_err(|err| GraphicsError::Window(err.to_string()))?;

        let context = unsafe { context.make_current() }
            .map_err(|(_, err)| GraphicsError::Context(err.to_string()))?;

        gl::load_with(|symbol| context.get_proc_address(symbol) as *const std::ffi::c_void);

        log_context_info();

        Ok((event_loop, Display { context }))
    }

    pub fn window(&self) -> &Window {
        self.context.window()
    }

    /// Physical framebuffer size, for the viewport.
    pub fn viewport_size(&self) -> (i32, i32) {
        let size = self.context.window().inner_size();
        (size.width as i32, size.height as i32)
    }

    /// Asks for another frame; the loop draws on the resulting redraw event.
    pub fn request_redraw(&self) {
        self.context.window().request_redraw();
    }

    /// Keeps the context's notion of the framebuffer in sync with the
    /// window after a resize.
    pub fn resize(&self, size: PhysicalSize<u32>) {
        self.context.resize(size);
    }

    /// Presents the finished frame.
    pub fn swap_buffers(&self) -> Result<(), ContextError> {
        self.context.swap_buffers()
    }
}

/// Reports which driver we ended up talking to.
fn log_context_info() {
    info!("Vendor: {}", gl_string(gl::VENDOR));
    info!("Renderer: {}", gl_string(gl::RENDERER));
    info!("Version: {}", gl_string(gl::VERSION));
    info!("Shading Language: {}", gl_string(gl::SHADING_LANGUAGE_VERSION));
}
