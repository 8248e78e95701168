//! trigon draws a fading, colour-interpolated triangle with OpenGL ES 2.
//!
//! The workspace is split the way the renderer's lifecycle is:
//!
//! - [`renderer`], [`handle`] and [`context`] hold the [`Renderer`] trait, the opaque
//!   [`Handle`] and the [`Context`] that creates renderers and drives them in order.
//! - [`triangle`] is the renderer itself.
//! - [`egl`] sets up displays, surfaces and contexts.
//! - [`app`] ties them to a winit event loop.
//!
//! The `trigon-android` crate exposes the same [`Context`] to a Java activity over JNI.
//!
//! # Running
//!
//! ```no_run
//! use trigon::attributes::RendererAttributes;
//! use winit::event_loop::EventLoop;
//!
//! fn main() -> Result<(), trigon::AppError> {
//!     let event_loop = EventLoop::new()?;
//!     trigon::run(event_loop, RendererAttributes::default())
//! }
//! ```
//!
//! # Features
//!
//! - `x11` (default): build the desktop binary against winit's X11 backend.
//! - `android-native-activity`: enable winit's NativeActivity backend.
//! - `serde`: implement `Serialize`/`Deserialize` for the attribute types.
//!
//! [`Renderer`]: crate::renderer::Renderer
//! [`Handle`]: crate::handle::Handle
//! [`Context`]: crate::context::Context

pub mod app;
mod error;

pub use trigon_core::error::{NotSupportedError, RendererError};
pub use trigon_core::{attributes, context, dpi, handle, renderer, session};
pub use trigon_egl as egl;
pub use trigon_triangle as triangle;
pub use winit;

pub use crate::app::{run, TriangleApp};
pub use crate::error::AppError;
