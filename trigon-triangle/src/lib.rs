//! A single colour-interpolated triangle that fades in and out, drawn with OpenGL ES 2.
//!
//! Register it with a [`Context`] through [`startup`]:
//!
//! ```no_run
//! use std::ffi::c_void;
//! use std::sync::Arc;
//!
//! use trigon_core::attributes::RendererAttributes;
//! use trigon_core::context::Context;
//! use trigon_core::renderer::ProcAddressLoader;
//!
//! struct NoGl;
//!
//! impl ProcAddressLoader for NoGl {
//!     fn get_proc_address(&self, _: &str) -> *const c_void {
//!         std::ptr::null()
//!     }
//! }
//!
//! let mut context = Context::new();
//! trigon_triangle::startup(&mut context, Arc::new(NoGl), RendererAttributes::default());
//! let handle = context.create_renderer().unwrap();
//! ```
//!
//! [`Context`]: trigon_core::context::Context

mod factory;
mod renderer;
pub mod scene;
mod shader;

pub use factory::{startup, TriangleFactory};
pub use renderer::TriangleRenderer;
