//! The renderer registry and session table.

use dpi::PhysicalSize;
use tracing::{debug, warn};

use crate::error::{NotSupportedError, RendererError};
use crate::handle::{Handle, HandleTable};
use crate::renderer::RendererFactory;
use crate::session::{Release, Session};

/// Owns the registered [`RendererFactory`] and every live renderer.
///
/// Each platform entry point maps onto one method here; the context turns handles back into
/// sessions and refuses calls that arrive out of lifecycle order.
#[derive(Debug, Default)]
pub struct Context {
    factory: Option<Box<dyn RendererFactory>>,
    sessions: HandleTable<Session>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the factory used by [`create_renderer`], returning the one it replaces.
    ///
    /// Renderers created by the previous factory stay alive.
    ///
    /// [`create_renderer`]: Self::create_renderer
    pub fn register(
        &mut self,
        factory: Box<dyn RendererFactory>,
    ) -> Option<Box<dyn RendererFactory>> {
        let previous = self.factory.replace(factory);
        if previous.is_some() {
            debug!("replaced registered renderer factory");
        }
        previous
    }

    pub fn renderer_factory(&self) -> Option<&dyn RendererFactory> {
        self.factory.as_deref()
    }

    /// Create a renderer with the registered factory.
    pub fn create_renderer(&mut self) -> Result<Handle, RendererError> {
        let factory = self.factory.as_ref().ok_or(RendererError::NotRegistered)?;
        let session = Session::new(factory.create());
        let handle = self
            .sessions
            .insert(session)
            .ok_or_else(|| NotSupportedError::new("renderer handles exhausted"))?;
        debug!(%handle, "created renderer");
        Ok(handle)
    }

    /// A surface was created for `handle`'s renderer.
    pub fn initialize_gl(&mut self, handle: Handle) -> Result<(), RendererError> {
        self.session_mut(handle)?.surface_created().map_err(|e| e.with_handle(handle))?;
        debug!(%handle, "initialized GL");
        Ok(())
    }

    pub fn set_viewport(
        &mut self,
        handle: Handle,
        size: PhysicalSize<u32>,
    ) -> Result<(), RendererError> {
        self.session_mut(handle)?.surface_changed(size);
        Ok(())
    }

    /// Draw a frame, returning the number of frames `handle` has drawn so far.
    pub fn draw_frame(&mut self, handle: Handle) -> Result<u64, RendererError> {
        self.session_mut(handle)?.draw_frame().map_err(|e| e.with_handle(handle))
    }

    /// The surface backing `handle` is going away; the renderer itself stays alive.
    pub fn surface_destroyed(
        &mut self,
        handle: Handle,
        release: Release,
    ) -> Result<(), RendererError> {
        self.session_mut(handle)?.surface_destroyed(release);
        Ok(())
    }

    /// Destroy `handle`'s renderer. The handle is invalid afterwards.
    pub fn destroy_renderer(
        &mut self,
        handle: Handle,
        release: Release,
    ) -> Result<(), RendererError> {
        let session = self.sessions.remove(handle).ok_or(RendererError::InvalidHandle(handle))?;
        debug!(%handle, frames = session.frames(), ?release, "destroying renderer");
        session.destroy(release);
        Ok(())
    }

    /// Destroy every live renderer.
    pub fn release_all(&mut self, release: Release) {
        for (handle, session) in self.sessions.drain() {
            warn!(%handle, "renderer still alive at teardown");
            session.destroy(release);
        }
    }

    pub fn session(&self, handle: Handle) -> Option<&Session> {
        self.sessions.get(handle)
    }

    /// Number of live renderers.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn session_mut(&mut self, handle: Handle) -> Result<&mut Session, RendererError> {
        self.sessions.get_mut(handle).ok_or(RendererError::InvalidHandle(handle))
    }
}
