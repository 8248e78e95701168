use std::ffi::c_void;
use std::sync::Arc;
use std::time::Duration;

use trigon::attributes::RendererAttributes;
use trigon::context::Context;
use trigon::dpi::PhysicalSize;
use trigon::renderer::ProcAddressLoader;
use trigon::session::Release;
use trigon::RendererError;

struct NoGl;

impl ProcAddressLoader for NoGl {
    fn get_proc_address(&self, _: &str) -> *const c_void {
        std::ptr::null()
    }
}

fn context() -> Context {
    let mut context = Context::new();
    let attributes = RendererAttributes::default().with_fade_period(Duration::from_secs(4));
    trigon::triangle::startup(&mut context, Arc::new(NoGl), attributes);
    context
}

#[test]
fn triangle_refuses_to_draw_before_gl() {
    let mut context = context();
    let handle = context.create_renderer().unwrap();

    context.set_viewport(handle, PhysicalSize::new(640, 480)).unwrap();
    assert_eq!(context.session(handle).unwrap().viewport(), Some(PhysicalSize::new(640, 480)));

    let error = context.draw_frame(handle).unwrap_err();
    assert!(matches!(error, RendererError::Lifecycle { handle: Some(h), .. } if h == handle));
    assert_eq!(context.session(handle).unwrap().frames(), 0);

    context.destroy_renderer(handle, Release::ContextLost).unwrap();
    assert!(context.is_empty());
}

#[test]
fn each_create_returns_a_new_handle() {
    let mut context = context();
    let first = context.create_renderer().unwrap();
    let second = context.create_renderer().unwrap();
    assert_ne!(first, second);

    context.destroy_renderer(first, Release::ContextLost).unwrap();
    let third = context.create_renderer().unwrap();
    assert_ne!(third, first);
    assert_eq!(context.len(), 2);

    context.release_all(Release::ContextLost);
    assert!(context.is_empty());
}

#[test]
fn triangle_app_starts_idle() {
    let app = trigon::TriangleApp::new(RendererAttributes::default());
    assert!(app.handle().is_none());
    assert!(app.into_result().is_ok());
}
