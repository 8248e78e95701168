//! The `native-lib` library loaded by the simple triangle activity.
//!
//! The activity owns a `GLSurfaceView` and forwards its callbacks here:
//!
//! | Java                                      | native                        |
//! |-------------------------------------------|-------------------------------|
//! | `onCreate` → `nativeCreateRenderer`       | `Context::create_renderer`    |
//! | `onSurfaceCreated` → `nativeInitializeGl` | `Context::initialize_gl`      |
//! | `onSurfaceChanged` → `nativeSetViewport`  | `Context::set_viewport`       |
//! | `onDrawFrame` → `nativeDrawFrame`         | `Context::draw_frame`         |
//! | `onDestroy` → `nativeDestroyRenderer`     | `Context::destroy_renderer`   |
//!
//! Create returns the new handle and draw returns the frame count.
//!
//! The handle is kept in a `long` field on the Java side and passed back untouched. `0` is
//! never a valid handle.
//!
//! `JNI_OnLoad` sets up `logcat` output and registers the triangle renderer. Errors never cross
//! into the JVM as unwinds: they are logged, and `nativeCreateRenderer` additionally throws
//! `IllegalStateException`.
//!
//! With the `native-activity` feature the library also exports `android_main`, running the
//! same renderer through winit's `NativeActivity` backend.

mod bridge;
mod error;
mod exports;
mod logging;
#[cfg(all(target_os = "android", feature = "native-activity"))]
mod native_activity;

pub use crate::error::BridgeError;
