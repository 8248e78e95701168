//! The process-wide [`Context`] behind the JNI entry points.
//!
//! `GLSurfaceView` calls in from its GL thread while create and destroy come from the UI
//! thread, so every call takes the context lock for its whole duration.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::{debug, error};
use trigon_core::attributes::RendererAttributes;
use trigon_core::context::Context;
use trigon_core::dpi::PhysicalSize;
use trigon_core::handle::Handle;
use trigon_core::session::Release;
use trigon_egl::Egl;

use crate::error::BridgeError;

static CONTEXT: OnceLock<Mutex<Context>> = OnceLock::new();

/// Run `f` with the global context locked.
///
/// A panic caught by [`guarded`] may have poisoned the lock; the context itself is left
/// consistent by every operation, so the poison is ignored.
pub(crate) fn with_context<R>(f: impl FnOnce(&mut Context) -> R) -> R {
    let context = CONTEXT.get_or_init(|| Mutex::new(Context::new()));
    let mut context = context.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut context)
}

/// Run `f`, turning a panic into [`BridgeError::Panic`] so it never unwinds into the JVM.
pub(crate) fn guarded<T>(
    operation: &'static str,
    f: impl FnOnce() -> Result<T, BridgeError>,
) -> Result<T, BridgeError> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => Err(BridgeError::Panic { operation, message: panic_message(&*payload) }),
    }
}

/// [`guarded`], logging the error and returning `None` on failure.
pub(crate) fn report<T>(
    operation: &'static str,
    f: impl FnOnce() -> Result<T, BridgeError>,
) -> Option<T> {
    match guarded(operation, f) {
        Ok(value) => Some(value),
        Err(error) => {
            error!(%error, operation, "native call failed");
            None
        },
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("unknown panic payload")
    }
}

pub(crate) fn handle(raw: i64) -> Result<Handle, BridgeError> {
    Handle::from_raw(raw).ok_or(BridgeError::InvalidRaw(raw))
}

/// Load EGL and register the triangle renderer, resolving GL through `eglGetProcAddress`.
pub(crate) fn load() -> Result<(), BridgeError> {
    let egl = Egl::load()?;
    with_context(|context| {
        trigon_triangle::startup(context, egl.loader(), RendererAttributes::default())
    });
    Ok(())
}

pub(crate) fn create_renderer() -> Result<Handle, BridgeError> {
    Ok(with_context(Context::create_renderer)?)
}

pub(crate) fn initialize_gl(raw: i64) -> Result<(), BridgeError> {
    let handle = handle(raw)?;
    Ok(with_context(|context| context.initialize_gl(handle))?)
}

pub(crate) fn set_viewport(raw: i64, width: i32, height: i32) -> Result<(), BridgeError> {
    let handle = handle(raw)?;
    let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(BridgeError::InvalidSize { width, height });
    };
    Ok(with_context(|context| context.set_viewport(handle, PhysicalSize::new(w, h)))?)
}

/// Draw a frame and return the renderer's frame count as a Java `long`.
pub(crate) fn draw_frame(raw: i64) -> Result<i64, BridgeError> {
    let handle = handle(raw)?;
    let frames = with_context(|context| context.draw_frame(handle))?;
    Ok(i64::try_from(frames).unwrap_or(i64::MAX))
}

/// Destroy a renderer from the UI thread.
///
/// `GLSurfaceView` has already stopped its GL thread and dropped the EGL context, so the
/// renderer's GL objects are gone with it.
pub(crate) fn destroy_renderer(raw: i64) -> Result<(), BridgeError> {
    let handle = handle(raw)?;
    with_context(|context| context.destroy_renderer(handle, Release::ContextLost))?;
    debug!(%handle, "renderer destroyed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use trigon_core::error::RendererError;
    use trigon_core::renderer::Renderer;

    use super::*;

    struct Counting {
        releases: Arc<AtomicUsize>,
    }

    impl Renderer for Counting {
        fn initialize_gl(&mut self) -> Result<(), RendererError> {
            Ok(())
        }

        fn release_gl(&mut self) {
            self.releases.fetch_add(1, Ordering::SeqCst);
        }

        fn set_viewport(&mut self, _: PhysicalSize<u32>) {}

        fn draw_frame(&mut self) -> Result<(), RendererError> {
            Ok(())
        }
    }

    #[test]
    fn activity_lifecycle_through_raw_handles() {
        let releases = Arc::new(AtomicUsize::new(0));
        let factory_releases = releases.clone();
        with_context(|context| {
            context.register(Box::new(move || -> Box<dyn Renderer> {
                Box::new(Counting { releases: factory_releases.clone() })
            }))
        });

        let raw = create_renderer().unwrap().into_raw();
        assert!(raw > 0);

        assert!(matches!(
            draw_frame(raw),
            Err(BridgeError::Renderer(RendererError::Lifecycle { .. }))
        ));
        initialize_gl(raw).unwrap();
        set_viewport(raw, 1080, 2340).unwrap();
        assert_eq!(draw_frame(raw).unwrap(), 1);
        assert_eq!(draw_frame(raw).unwrap(), 2);

        destroy_renderer(raw).unwrap();
        // The GL context is gone by the time the activity destroys the renderer.
        assert_eq!(releases.load(Ordering::SeqCst), 0);
        assert!(matches!(
            draw_frame(raw),
            Err(BridgeError::Renderer(RendererError::InvalidHandle(_)))
        ));
    }

    #[test]
    fn zero_and_negative_handles_are_refused() {
        assert!(matches!(initialize_gl(0), Err(BridgeError::InvalidRaw(0))));
        assert!(matches!(draw_frame(-5), Err(BridgeError::InvalidRaw(-5))));
        assert!(matches!(destroy_renderer(0), Err(BridgeError::InvalidRaw(0))));
    }

    #[test]
    fn negative_sizes_are_refused() {
        assert!(matches!(
            set_viewport(1, -1, 10),
            Err(BridgeError::InvalidSize { width: -1, height: 10 })
        ));
    }

    #[test]
    fn panics_are_caught() {
        let result: Result<(), _> = guarded("nativeDrawFrame", || panic!("boom"));
        match result {
            Err(BridgeError::Panic { operation, message }) => {
                assert_eq!(operation, "nativeDrawFrame");
                assert_eq!(message, "boom");
            },
            other => panic!("unexpected {other:?}"),
        }

        let owned: Option<()> = report("nativeInitializeGl", || panic!("{}", 42));
        assert!(owned.is_none());
    }

    #[test]
    fn poisoned_context_stays_usable() {
        let _ = guarded("poison", || -> Result<(), BridgeError> {
            with_context(|_| panic!("while locked"))
        });
        with_context(|context| {
            let _ = context.len();
        });
    }
}
