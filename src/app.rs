//! The winit side of trigon.
//!
//! [`TriangleApp`] maps winit's lifecycle onto a [`Context`]:
//!
//! | winit                         | context                              |
//! |-------------------------------|--------------------------------------|
//! | first `resumed`               | `create_renderer`                    |
//! | `resumed`                     | `initialize_gl` + `set_viewport`     |
//! | `WindowEvent::Resized`        | `set_viewport`                       |
//! | `WindowEvent::RedrawRequested`| `draw_frame`, then swap              |
//! | `suspended`                   | `surface_destroyed`                  |
//! | `exiting`                     | `destroy_renderer`                   |
//!
//! The window is closed by the close button or a left click.

use rwh_06::{HasDisplayHandle, HasWindowHandle};
use tracing::{debug, error, info};
use trigon_core::attributes::RendererAttributes;
use trigon_core::context::Context;
use trigon_core::handle::Handle;
use trigon_core::session::Release;
use trigon_egl::{Config, ConfigTemplate, Display, Egl, GlContext, WindowSurface};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::error::AppError;

/// Run [`TriangleApp`] on `event_loop` until the window is closed.
pub fn run(event_loop: EventLoop<()>, attributes: RendererAttributes) -> Result<(), AppError> {
    let mut app = TriangleApp::new(attributes);
    event_loop.run_app(&mut app)?;
    app.into_result()
}

/// EGL objects that outlive a single surface.
struct Gpu {
    context: GlContext,
    config: Config,
    display: Display,
    handle: Handle,
}

/// Draws the triangle into a winit window.
pub struct TriangleApp {
    attributes: RendererAttributes,
    renderers: Context,
    // Field order is drop order: the surface goes before the window it draws into.
    surface: Option<WindowSurface>,
    gpu: Option<Gpu>,
    window: Option<Window>,
    failure: Option<AppError>,
}

impl std::fmt::Debug for TriangleApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriangleApp")
            .field("attributes", &self.attributes)
            .field("renderers", &self.renderers.len())
            .field("has_surface", &self.surface.is_some())
            .finish_non_exhaustive()
    }
}

impl TriangleApp {
    pub fn new(attributes: RendererAttributes) -> Self {
        Self {
            attributes,
            renderers: Context::new(),
            surface: None,
            gpu: None,
            window: None,
            failure: None,
        }
    }

    /// The handle of the renderer, once the first surface was created.
    pub fn handle(&self) -> Option<Handle> {
        self.gpu.as_ref().map(|gpu| gpu.handle)
    }

    /// The error that stopped the application, if any.
    pub fn into_result(self) -> Result<(), AppError> {
        match self.failure {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, failure: AppError) {
        error!(%failure, "stopping");
        self.failure.get_or_insert(failure);
        event_loop.exit();
    }

    /// Load EGL, register the triangle renderer and create its handle.
    fn init_gpu(&mut self, window: &Window) -> Result<Gpu, AppError> {
        let egl = Egl::load()?;
        let native_display = trigon_egl::native_display(window.display_handle()?.as_raw())?;
        let display = unsafe { egl.display(native_display)? };
        let template = ConfigTemplate::from(&self.attributes);
        let config = display.choose_config(&template)?;
        let context = display.create_context(config, &template)?;

        trigon_triangle::startup(&mut self.renderers, egl.loader(), self.attributes.clone());
        let handle = self.renderers.create_renderer()?;
        let egl_version = display.version();
        info!(%handle, ?egl_version, "renderer ready");

        Ok(Gpu { context, config, display, handle })
    }

    /// Create a surface for the window and bring the renderer up on it.
    fn create_surface(&mut self) -> Result<(), AppError> {
        let (Some(window), Some(gpu)) = (self.window.as_ref(), self.gpu.as_ref()) else {
            return Ok(());
        };
        let native_window = trigon_egl::native_window(window.window_handle()?.as_raw())?;
        let surface = unsafe { gpu.display.create_window_surface(gpu.config, native_window)? };
        gpu.context.make_current(&surface)?;
        if let Err(error) = surface.set_swap_interval(1) {
            debug!(%error, "vsync unavailable");
        }

        self.renderers.initialize_gl(gpu.handle)?;
        self.renderers.set_viewport(gpu.handle, window.inner_size())?;
        window.request_redraw();
        self.surface = Some(surface);
        Ok(())
    }

    fn redraw(&mut self) -> Result<(), AppError> {
        let (Some(surface), Some(gpu)) = (self.surface.as_ref(), self.gpu.as_ref()) else {
            return Ok(());
        };
        self.renderers.draw_frame(gpu.handle)?;
        surface.swap_buffers()?;
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
        Ok(())
    }

    fn destroy_surface(&mut self) {
        let Some(surface) = self.surface.take() else {
            return;
        };
        if let Some(gpu) = self.gpu.as_ref() {
            // The context is still current on the old surface, so GL objects can be deleted.
            if let Err(error) = self.renderers.surface_destroyed(gpu.handle, Release::Current) {
                error!(%error, "failed to release renderer from surface");
            }
            if let Err(error) = gpu.context.make_not_current() {
                error!(%error, "failed to release context from surface");
            }
        }
        drop(surface);
    }
}

impl ApplicationHandler for TriangleApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title(self.attributes.title.clone())
                .with_inner_size(self.attributes.inner_size);
            match event_loop.create_window(window_attributes) {
                Ok(window) => self.window = Some(window),
                Err(error) => return self.fail(event_loop, error.into()),
            }
        }

        if self.gpu.is_none() {
            let Some(window) = self.window.take() else {
                return;
            };
            let gpu = self.init_gpu(&window);
            self.window = Some(window);
            match gpu {
                Ok(gpu) => self.gpu = Some(gpu),
                Err(error) => return self.fail(event_loop, error),
            }
        }

        if let Err(error) = self.create_surface() {
            self.fail(event_loop, error);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::Resized(size) => {
                if let Some(gpu) = self.gpu.as_ref() {
                    if let Err(error) = self.renderers.set_viewport(gpu.handle, size) {
                        error!(%error, "failed to resize viewport");
                    }
                }
            },
            WindowEvent::RedrawRequested => {
                if let Err(error) = self.redraw() {
                    self.fail(event_loop, error);
                }
            },
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                debug!("window closed");
                event_loop.exit();
            },
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                debug!("clicked, exiting");
                event_loop.exit();
            },
            _ => (),
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        debug!("suspended, dropping surface");
        self.destroy_surface();
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        let Some(gpu) = self.gpu.as_ref() else {
            return;
        };
        let release = match self.surface.as_ref() {
            Some(surface) if gpu.context.make_current(surface).is_ok() => Release::Current,
            _ => Release::ContextLost,
        };
        if let Err(error) = self.renderers.destroy_renderer(gpu.handle, release) {
            error!(%error, "failed to destroy renderer");
        }
        self.renderers.release_all(release);

        self.surface = None;
        self.gpu = None;
        self.window = None;
    }
}
