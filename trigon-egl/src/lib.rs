//! EGL plumbing for trigon.
//!
//! Loads `libEGL` at runtime, then walks the usual sequence: get and initialize a display,
//! choose a config, create a window surface from a native window, create an OpenGL ES context
//! and make it current. Every EGL call that can fail is checked and reported as an
//! [`EglError`] naming the function that failed.
//!
//! Objects keep their display alive: the display is terminated once the last surface and
//! context created from it have been dropped.

mod config;
mod display;
mod error;
mod native;

use std::ffi::c_void;
use std::sync::Arc;

use khronos_egl as egl;
use tracing::debug;
use trigon_core::renderer::ProcAddressLoader;

pub use crate::config::ConfigTemplate;
pub use crate::display::{Display, GlContext, WindowSurface};
pub use crate::error::EglError;
pub use crate::native::{native_display, native_window};
pub use khronos_egl::{Config, NativeDisplayType, NativeWindowType, DEFAULT_DISPLAY};

pub(crate) type Instance = egl::DynamicInstance<egl::EGL1_4>;

/// A loaded EGL library.
#[derive(Clone)]
pub struct Egl {
    instance: Arc<Instance>,
}

impl Egl {
    /// Load `libEGL` from the system.
    pub fn load() -> Result<Egl, EglError> {
        let instance = unsafe { Instance::load_required() }.map_err(EglError::Load)?;
        debug!("loaded libEGL");
        Ok(Egl { instance: Arc::new(instance) })
    }

    pub(crate) fn instance(&self) -> &Instance {
        &self.instance
    }

    /// Get and initialize the display for `native_display`.
    ///
    /// # Safety
    ///
    /// `native_display` must be a valid native display (or [`egl::DEFAULT_DISPLAY`]) that
    /// outlives the returned [`Display`].
    pub unsafe fn display(
        &self,
        native_display: egl::NativeDisplayType,
    ) -> Result<Display, EglError> {
        Display::new(self.clone(), native_display)
    }

    /// A loader resolving GL entry points through `eglGetProcAddress`.
    pub fn loader(&self) -> Arc<dyn ProcAddressLoader> {
        Arc::new(EglLoader { egl: self.clone() })
    }
}

impl std::fmt::Debug for Egl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Egl").finish_non_exhaustive()
    }
}

struct EglLoader {
    egl: Egl,
}

impl ProcAddressLoader for EglLoader {
    fn get_proc_address(&self, name: &str) -> *const c_void {
        match self.egl.instance().get_proc_address(name) {
            Some(address) => address as *const c_void,
            None => std::ptr::null(),
        }
    }
}
