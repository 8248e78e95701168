use std::sync::{Arc, Mutex};

use trigon_core::context::Context;
use trigon_core::dpi::PhysicalSize;
use trigon_core::error::RendererError;
use trigon_core::renderer::{Renderer, RendererFactory};
use trigon_core::session::Release;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Initialize,
    Viewport(u32, u32),
    Draw,
    Release,
}

type Log = Arc<Mutex<Vec<Call>>>;

struct Recording {
    log: Log,
    fail_initialize: bool,
}

impl Renderer for Recording {
    fn initialize_gl(&mut self) -> Result<(), RendererError> {
        self.log.lock().unwrap().push(Call::Initialize);
        if self.fail_initialize {
            return Err(RendererError::Gl("no context".into()));
        }
        Ok(())
    }

    fn release_gl(&mut self) {
        self.log.lock().unwrap().push(Call::Release);
    }

    fn set_viewport(&mut self, size: PhysicalSize<u32>) {
        self.log.lock().unwrap().push(Call::Viewport(size.width, size.height));
    }

    fn draw_frame(&mut self) -> Result<(), RendererError> {
        self.log.lock().unwrap().push(Call::Draw);
        Ok(())
    }
}

fn context(fail_initialize: bool) -> (Context, Log) {
    let log = Log::default();
    let factory_log = log.clone();
    let factory = move || {
        Box::new(Recording { log: factory_log.clone(), fail_initialize }) as Box<dyn Renderer>
    };
    let mut context = Context::new();
    context.register(Box::new(factory) as Box<dyn RendererFactory>);
    (context, log)
}

fn calls(log: &Log) -> Vec<Call> {
    log.lock().unwrap().clone()
}

#[test]
fn calls_reach_renderer_in_lifecycle_order() {
    let (mut context, log) = context(false);

    let handle = context.create_renderer().unwrap();
    context.initialize_gl(handle).unwrap();
    context.set_viewport(handle, PhysicalSize::new(640, 480)).unwrap();
    context.draw_frame(handle).unwrap();
    context.draw_frame(handle).unwrap();
    context.destroy_renderer(handle, Release::Current).unwrap();

    assert_eq!(
        calls(&log),
        vec![Call::Initialize, Call::Viewport(640, 480), Call::Draw, Call::Draw, Call::Release]
    );
    assert!(context.is_empty());
}

#[test]
fn draw_before_initialize_is_refused() {
    let (mut context, log) = context(false);
    let handle = context.create_renderer().unwrap();

    let error = context.draw_frame(handle).unwrap_err();
    assert!(matches!(
        error,
        RendererError::Lifecycle { handle: Some(h), operation: "draw_frame" } if h == handle
    ));
    assert!(calls(&log).is_empty());
}

#[test]
fn failed_initialize_leaves_session_uninitialized() {
    let (mut context, log) = context(true);
    let handle = context.create_renderer().unwrap();

    assert!(matches!(context.initialize_gl(handle), Err(RendererError::Gl(_))));
    assert!(!context.session(handle).unwrap().is_initialized());
    assert!(context.draw_frame(handle).is_err());

    // Nothing was created, so nothing is released.
    context.destroy_renderer(handle, Release::Current).unwrap();
    assert_eq!(calls(&log), vec![Call::Initialize]);
}

#[test]
fn viewport_before_surface_is_applied_on_creation() {
    let (mut context, log) = context(false);
    let handle = context.create_renderer().unwrap();

    context.set_viewport(handle, PhysicalSize::new(300, 200)).unwrap();
    assert!(calls(&log).is_empty());

    context.initialize_gl(handle).unwrap();
    assert_eq!(calls(&log), vec![Call::Initialize, Call::Viewport(300, 200)]);
}

#[test]
fn zero_area_viewport_is_not_forwarded() {
    let (mut context, log) = context(false);
    let handle = context.create_renderer().unwrap();
    context.initialize_gl(handle).unwrap();

    context.set_viewport(handle, PhysicalSize::new(0, 0)).unwrap();
    context.set_viewport(handle, PhysicalSize::new(800, 0)).unwrap();

    assert_eq!(calls(&log), vec![Call::Initialize]);
    assert_eq!(context.session(handle).unwrap().viewport(), Some(PhysicalSize::new(800, 0)));
}

#[test]
fn recreated_surface_reinitializes_and_restores_viewport() {
    let (mut context, log) = context(false);
    let handle = context.create_renderer().unwrap();
    context.initialize_gl(handle).unwrap();
    context.set_viewport(handle, PhysicalSize::new(100, 50)).unwrap();

    context.initialize_gl(handle).unwrap();

    assert_eq!(
        calls(&log),
        vec![
            Call::Initialize,
            Call::Viewport(100, 50),
            Call::Initialize,
            Call::Viewport(100, 50)
        ]
    );
}

#[test]
fn lost_context_is_not_released() {
    let (mut context, log) = context(false);
    let handle = context.create_renderer().unwrap();
    context.initialize_gl(handle).unwrap();
    context.draw_frame(handle).unwrap();

    context.destroy_renderer(handle, Release::ContextLost).unwrap();
    assert_eq!(calls(&log), vec![Call::Initialize, Call::Draw]);
}

#[test]
fn surface_destroyed_keeps_the_handle() {
    let (mut context, log) = context(false);
    let handle = context.create_renderer().unwrap();
    context.initialize_gl(handle).unwrap();

    context.surface_destroyed(handle, Release::Current).unwrap();
    assert!(context.draw_frame(handle).is_err());

    context.initialize_gl(handle).unwrap();
    assert_eq!(context.draw_frame(handle).unwrap(), 1);
    assert_eq!(
        calls(&log),
        vec![Call::Initialize, Call::Release, Call::Initialize, Call::Draw]
    );
}

#[test]
fn renderers_are_independent() {
    let (mut context, _log) = context(false);
    let a = context.create_renderer().unwrap();
    let b = context.create_renderer().unwrap();
    context.initialize_gl(a).unwrap();

    assert_eq!(context.draw_frame(a).unwrap(), 1);
    assert!(context.draw_frame(b).is_err());

    context.destroy_renderer(a, Release::Current).unwrap();
    assert!(context.session(b).is_some());
}
