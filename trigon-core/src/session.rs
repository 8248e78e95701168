//! Per-renderer lifecycle state.

use dpi::PhysicalSize;
use tracing::{debug, trace};

use crate::error::RendererError;
use crate::renderer::Renderer;

/// Whether tearing a session down may issue GL calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// The session's GL context is current on this thread: delete GL objects.
    Current,
    /// The GL context is gone (or owned by a stopped thread): drop without GL calls.
    ContextLost,
}

/// A renderer together with the lifecycle state the [`Context`] tracks for it.
///
/// [`Context`]: crate::context::Context
#[derive(Debug)]
pub struct Session {
    renderer: Box<dyn Renderer>,
    initialized: bool,
    viewport: Option<PhysicalSize<u32>>,
    frames: u64,
}

impl Session {
    pub fn new(renderer: Box<dyn Renderer>) -> Self {
        Self { renderer, initialized: false, viewport: None, frames: 0 }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn viewport(&self) -> Option<PhysicalSize<u32>> {
        self.viewport
    }

    /// Frames drawn since the session was created.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// A surface (and with it a GL context) was created.
    ///
    /// If the session was already initialized the previous context is gone; the renderer is
    /// initialized again and the last viewport re-applied.
    pub fn surface_created(&mut self) -> Result<(), RendererError> {
        if self.initialized {
            debug!("surface recreated, reinitializing GL resources");
        }
        self.initialized = false;
        self.renderer.initialize_gl()?;
        self.initialized = true;

        if let Some(size) = self.viewport.filter(|size| has_area(*size)) {
            self.renderer.set_viewport(size);
        }
        Ok(())
    }

    /// The surface changed size.
    ///
    /// The size is always recorded; it only reaches the renderer when it has an area and GL is
    /// initialized. Otherwise it is applied on the next [`surface_created`].
    ///
    /// [`surface_created`]: Self::surface_created
    pub fn surface_changed(&mut self, size: PhysicalSize<u32>) {
        self.viewport = Some(size);
        if !has_area(size) {
            trace!(?size, "ignoring zero-area viewport");
            return;
        }
        if self.initialized {
            self.renderer.set_viewport(size);
        }
    }

    /// Draw a frame, returning the number of frames drawn so far.
    pub fn draw_frame(&mut self) -> Result<u64, RendererError> {
        if !self.initialized {
            return Err(RendererError::lifecycle("draw_frame"));
        }
        self.renderer.draw_frame()?;
        self.frames += 1;
        Ok(self.frames)
    }

    /// The GL context is about to go away; no GL objects survive it.
    pub fn surface_destroyed(&mut self, release: Release) {
        if self.initialized && release == Release::Current {
            self.renderer.release_gl();
        }
        self.initialized = false;
    }

    /// Tear the session down.
    pub fn destroy(mut self, release: Release) {
        self.surface_destroyed(release);
    }
}

fn has_area(size: PhysicalSize<u32>) -> bool {
    size.width != 0 && size.height != 0
}
