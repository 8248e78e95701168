//! The traits a renderer implements.

use std::ffi::c_void;
use std::fmt;

use dpi::PhysicalSize;

use crate::error::RendererError;

/// A renderer driven by a platform surface.
///
/// All methods except construction and destruction run on the thread that owns the current GL
/// context. The [`Context`] guarantees that [`draw_frame`] is only called after a successful
/// [`initialize_gl`].
///
/// [`Context`]: crate::context::Context
/// [`draw_frame`]: Self::draw_frame
/// [`initialize_gl`]: Self::initialize_gl
pub trait Renderer: Send {
    /// Create GL resources. A GL context is current.
    ///
    /// Called once per surface creation. On platforms that recreate their GL context (Android
    /// after the activity loses its EGL context), this is called again on the new context and
    /// any objects created on the previous one are already gone: forget them, do not delete
    /// them.
    fn initialize_gl(&mut self) -> Result<(), RendererError>;

    /// Delete GL resources. A GL context is current.
    fn release_gl(&mut self);

    /// The surface now has the given size in physical pixels. Never called with a zero area.
    fn set_viewport(&mut self, size: PhysicalSize<u32>);

    /// Draw one frame into the current surface.
    fn draw_frame(&mut self) -> Result<(), RendererError>;
}

/// Creates renderers on request.
pub trait RendererFactory: Send + Sync {
    fn create(&self) -> Box<dyn Renderer>;
}

impl<F> RendererFactory for F
where
    F: Fn() -> Box<dyn Renderer> + Send + Sync,
{
    fn create(&self) -> Box<dyn Renderer> {
        self()
    }
}

/// Resolves GL entry points for the context current on the calling thread.
pub trait ProcAddressLoader: Send + Sync {
    /// Returns a null pointer when the symbol is unknown.
    fn get_proc_address(&self, name: &str) -> *const c_void;
}

impl fmt::Debug for dyn ProcAddressLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.pad("ProcAddressLoader")
    }
}

impl fmt::Debug for dyn RendererFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.pad("RendererFactory")
    }
}

impl fmt::Debug for dyn Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.pad("Renderer")
    }
}
