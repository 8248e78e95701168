use khronos_egl as egl;
use rwh_06::{RawDisplayHandle, RawWindowHandle};

use crate::error::EglError;

/// The native display EGL expects for `handle`.
pub fn native_display(handle: RawDisplayHandle) -> Result<egl::NativeDisplayType, EglError> {
    match handle {
        RawDisplayHandle::Xlib(handle) => {
            Ok(handle.display.map_or(egl::DEFAULT_DISPLAY, |display| display.as_ptr()))
        },
        RawDisplayHandle::Android(_) => Ok(egl::DEFAULT_DISPLAY),
        RawDisplayHandle::Wayland(_) => Err(EglError::UnsupportedHandle("Wayland")),
        RawDisplayHandle::Xcb(_) => Err(EglError::UnsupportedHandle("XCB")),
        _ => Err(EglError::UnsupportedHandle("this platform's")),
    }
}

/// The native window EGL expects for `handle`.
pub fn native_window(handle: RawWindowHandle) -> Result<egl::NativeWindowType, EglError> {
    match handle {
        RawWindowHandle::Xlib(handle) => Ok(handle.window as egl::NativeWindowType),
        RawWindowHandle::AndroidNdk(handle) => Ok(handle.a_native_window.as_ptr()),
        RawWindowHandle::Wayland(_) => Err(EglError::UnsupportedHandle("Wayland")),
        RawWindowHandle::Xcb(_) => Err(EglError::UnsupportedHandle("XCB")),
        _ => Err(EglError::UnsupportedHandle("this platform's")),
    }
}
