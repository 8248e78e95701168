use std::sync::Arc;

use khronos_egl as egl;
use tracing::{debug, warn};

use crate::config::ConfigTemplate;
use crate::error::EglError;
use crate::Egl;

struct DisplayInner {
    egl: Egl,
    raw: egl::Display,
}

impl Drop for DisplayInner {
    fn drop(&mut self) {
        if let Err(error) = self.egl.instance().terminate(self.raw) {
            warn!(%error, "eglTerminate failed");
        }
    }
}

/// An initialized EGL display.
pub struct Display {
    inner: Arc<DisplayInner>,
    version: (egl::Int, egl::Int),
}

impl std::fmt::Debug for Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Display").field("version", &self.version).finish_non_exhaustive()
    }
}

impl Display {
    pub(crate) unsafe fn new(
        egl: Egl,
        native_display: egl::NativeDisplayType,
    ) -> Result<Display, EglError> {
        let raw = egl.instance().get_display(native_display).ok_or(EglError::NoDisplay)?;
        let version = egl.instance().initialize(raw).map_err(EglError::call("eglInitialize"))?;
        debug!(major = version.0, minor = version.1, "initialized EGL display");
        Ok(Display { inner: Arc::new(DisplayInner { egl, raw }), version })
    }

    /// EGL version reported by `eglInitialize`.
    pub fn version(&self) -> (egl::Int, egl::Int) {
        self.version
    }

    /// Pick the first config matching `template`.
    pub fn choose_config(&self, template: &ConfigTemplate) -> Result<egl::Config, EglError> {
        self.inner
            .egl
            .instance()
            .choose_first_config(self.inner.raw, &template.config_attributes())
            .map_err(EglError::call("eglChooseConfig"))?
            .ok_or(EglError::NoConfig)
    }

    /// Create a window surface drawing into `native_window`.
    ///
    /// # Safety
    ///
    /// `native_window` must be a valid native window for this display that outlives the
    /// returned surface.
    pub unsafe fn create_window_surface(
        &self,
        config: egl::Config,
        native_window: egl::NativeWindowType,
    ) -> Result<WindowSurface, EglError> {
        let raw = self
            .inner
            .egl
            .instance()
            .create_window_surface(self.inner.raw, config, native_window, None)
            .map_err(EglError::call("eglCreateWindowSurface"))?;
        Ok(WindowSurface { display: self.inner.clone(), raw })
    }

    /// Create an OpenGL ES context.
    pub fn create_context(
        &self,
        config: egl::Config,
        template: &ConfigTemplate,
    ) -> Result<GlContext, EglError> {
        let instance = self.inner.egl.instance();
        instance.bind_api(egl::OPENGL_ES_API).map_err(EglError::call("eglBindAPI"))?;
        let raw = instance
            .create_context(self.inner.raw, config, None, &template.context_attributes())
            .map_err(EglError::call("eglCreateContext"))?;
        debug!(client_version = template.client_version, "created EGL context");
        Ok(GlContext { display: self.inner.clone(), raw })
    }
}

/// A surface backed by a native window.
pub struct WindowSurface {
    display: Arc<DisplayInner>,
    raw: egl::Surface,
}

impl std::fmt::Debug for WindowSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowSurface").finish_non_exhaustive()
    }
}

impl WindowSurface {
    /// Present the back buffer.
    pub fn swap_buffers(&self) -> Result<(), EglError> {
        self.display
            .egl
            .instance()
            .swap_buffers(self.display.raw, self.raw)
            .map_err(EglError::call("eglSwapBuffers"))
    }

    /// Set how many vertical blanks a swap waits for. The context must be current.
    pub fn set_swap_interval(&self, interval: egl::Int) -> Result<(), EglError> {
        self.display
            .egl
            .instance()
            .swap_interval(self.display.raw, interval)
            .map_err(EglError::call("eglSwapInterval"))
    }
}

impl Drop for WindowSurface {
    fn drop(&mut self) {
        let instance = self.display.egl.instance();
        // The surface may still be bound; unbinding is deferred by EGL until it is released.
        if let Err(error) = instance.destroy_surface(self.display.raw, self.raw) {
            warn!(%error, "eglDestroySurface failed");
        }
    }
}

/// An OpenGL ES context.
pub struct GlContext {
    display: Arc<DisplayInner>,
    raw: egl::Context,
}

impl std::fmt::Debug for GlContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlContext").field("current", &self.is_current()).finish_non_exhaustive()
    }
}

impl GlContext {
    /// Bind the context and `surface` to the calling thread.
    pub fn make_current(&self, surface: &WindowSurface) -> Result<(), EglError> {
        self.display
            .egl
            .instance()
            .make_current(self.display.raw, Some(surface.raw), Some(surface.raw), Some(self.raw))
            .map_err(EglError::call("eglMakeCurrent"))
    }

    /// Release the context from the calling thread.
    pub fn make_not_current(&self) -> Result<(), EglError> {
        self.display
            .egl
            .instance()
            .make_current(self.display.raw, None, None, None)
            .map_err(EglError::call("eglMakeCurrent"))
    }

    pub fn is_current(&self) -> bool {
        self.display.egl.instance().get_current_context() == Some(self.raw)
    }
}

impl Drop for GlContext {
    fn drop(&mut self) {
        // Only unbind when bound to this thread; another thread's binding is not ours to touch.
        if self.is_current() {
            if let Err(error) = self.make_not_current() {
                warn!(%error, "failed to release EGL context");
            }
        }
        if let Err(error) = self.display.egl.instance().destroy_context(self.display.raw, self.raw)
        {
            warn!(%error, "eglDestroyContext failed");
        }
    }
}
