use std::{error, fmt};

use trigon_core::error::RendererError;
use trigon_egl::EglError;

/// A general error that may occur while running the trigon application.
#[derive(Debug)]
pub enum AppError {
    /// The event loop failed or could not be created.
    EventLoop(winit::error::EventLoopError),
    /// The OS could not create the window.
    Os(winit::error::OsError),
    /// The window did not expose a usable handle.
    Handle(rwh_06::HandleError),
    /// EGL setup or presentation failed.
    Egl(EglError),
    /// The renderer failed.
    Renderer(RendererError),
}

impl From<winit::error::EventLoopError> for AppError {
    fn from(value: winit::error::EventLoopError) -> Self {
        Self::EventLoop(value)
    }
}

impl From<winit::error::OsError> for AppError {
    fn from(value: winit::error::OsError) -> Self {
        Self::Os(value)
    }
}

impl From<rwh_06::HandleError> for AppError {
    fn from(value: rwh_06::HandleError) -> Self {
        Self::Handle(value)
    }
}

impl From<EglError> for AppError {
    fn from(value: EglError) -> Self {
        Self::Egl(value)
    }
}

impl From<RendererError> for AppError {
    fn from(value: RendererError) -> Self {
        Self::Renderer(value)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            AppError::EventLoop(e) => write!(f, "event loop error: {e}"),
            AppError::Os(e) => write!(f, "failed to create window: {e}"),
            AppError::Handle(e) => write!(f, "window handle unavailable: {e}"),
            AppError::Egl(e) => e.fmt(f),
            AppError::Renderer(e) => e.fmt(f),
        }
    }
}

impl error::Error for AppError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            AppError::EventLoop(e) => Some(e),
            AppError::Os(e) => Some(e),
            AppError::Handle(e) => Some(e),
            AppError::Egl(e) => Some(e),
            AppError::Renderer(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_errors_pass_through() {
        let error = AppError::from(RendererError::NotRegistered);
        assert_eq!(error.to_string(), RendererError::NotRegistered.to_string());
        assert!(error::Error::source(&error).is_some());
    }

    #[test]
    fn ensure_fmt_does_not_panic() {
        let _ = format!(
            "{:?}, {}",
            AppError::Egl(EglError::NoConfig),
            AppError::Handle(rwh_06::HandleError::Unavailable)
        );
    }
}
