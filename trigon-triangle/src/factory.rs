use std::sync::Arc;

use tracing::debug;
use trigon_core::attributes::RendererAttributes;
use trigon_core::context::Context;
use trigon_core::renderer::{ProcAddressLoader, Renderer, RendererFactory};

use crate::renderer::TriangleRenderer;

/// Creates [`TriangleRenderer`]s that share one GL loader and one set of attributes.
#[derive(Debug)]
pub struct TriangleFactory {
    loader: Arc<dyn ProcAddressLoader>,
    attributes: RendererAttributes,
}

impl TriangleFactory {
    pub fn new(loader: Arc<dyn ProcAddressLoader>, attributes: RendererAttributes) -> Self {
        Self { loader, attributes }
    }
}

impl RendererFactory for TriangleFactory {
    fn create(&self) -> Box<dyn Renderer> {
        Box::new(TriangleRenderer::new(self.loader.clone(), &self.attributes))
    }
}

/// Register the triangle renderer with `context`, replacing any previous factory.
pub fn startup(
    context: &mut Context,
    loader: Arc<dyn ProcAddressLoader>,
    attributes: RendererAttributes,
) {
    debug!(?attributes, "registering triangle renderer");
    context.register(Box::new(TriangleFactory::new(loader, attributes)));
}

#[cfg(test)]
mod tests {
    use std::ffi::c_void;

    use super::*;

    struct NoGl;

    impl ProcAddressLoader for NoGl {
        fn get_proc_address(&self, _: &str) -> *const c_void {
            std::ptr::null()
        }
    }

    #[test]
    fn startup_registers_a_factory() {
        let mut context = Context::new();
        assert!(context.renderer_factory().is_none());

        startup(&mut context, Arc::new(NoGl), RendererAttributes::default());
        assert!(context.renderer_factory().is_some());

        let handle = context.create_renderer().unwrap();
        assert!(!context.session(handle).unwrap().is_initialized());
    }

    #[test]
    fn drawing_without_gl_is_a_lifecycle_error() {
        let mut renderer = TriangleRenderer::new(Arc::new(NoGl), &RendererAttributes::default());
        assert!(renderer.draw_frame().is_err());
        // Releasing without resources is a no-op.
        renderer.release_gl();
    }

    #[test]
    fn viewport_updates_ratio_without_gl() {
        let mut renderer = TriangleRenderer::new(Arc::new(NoGl), &RendererAttributes::default());
        renderer.set_viewport(trigon_core::dpi::PhysicalSize::new(200, 100));
        assert_eq!(renderer.aspect_ratio(), 2.0);
    }
}
