//! Base types for a trigon renderer.
//!
//! This crate contains the platform independent half of trigon: the [`Renderer`] and
//! [`RendererFactory`] traits a renderer implements, the opaque [`Handle`] handed out across
//! native boundaries, and the [`Context`] that ties the two together and enforces the
//! lifecycle order
//!
//! ```text
//! create_renderer -> initialize_gl -> (set_viewport) -> draw_frame* -> destroy_renderer
//! ```
//!
//! Platform crates (desktop, Android) only translate their own callbacks into calls on a
//! [`Context`].
//!
//! [`Renderer`]: renderer::Renderer
//! [`RendererFactory`]: renderer::RendererFactory
//! [`Handle`]: handle::Handle
//! [`Context`]: context::Context

pub mod attributes;
pub mod context;
pub mod error;
pub mod handle;
pub mod renderer;
pub mod session;

#[doc(inline)]
pub use dpi;
