use std::{error, fmt};

use trigon_core::error::RendererError;
use trigon_egl::EglError;

/// An error raised while serving a call from the Java side.
#[derive(Debug)]
pub enum BridgeError {
    /// The `long` passed in can never be a handle (zero or negative).
    InvalidRaw(i64),
    /// `onSurfaceChanged` reported a negative size.
    InvalidSize { width: i32, height: i32 },
    Renderer(RendererError),
    Egl(EglError),
    /// The native side panicked; the panic was caught at the boundary.
    Panic { operation: &'static str, message: String },
}

impl From<RendererError> for BridgeError {
    fn from(value: RendererError) -> Self {
        Self::Renderer(value)
    }
}

impl From<EglError> for BridgeError {
    fn from(value: EglError) -> Self {
        Self::Egl(value)
    }
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            BridgeError::InvalidRaw(raw) => write!(f, "{raw} is not a renderer handle"),
            BridgeError::InvalidSize { width, height } => {
                write!(f, "invalid surface size {width}x{height}")
            },
            BridgeError::Renderer(e) => e.fmt(f),
            BridgeError::Egl(e) => e.fmt(f),
            BridgeError::Panic { operation, message } => {
                write!(f, "`{operation}` panicked: {message}")
            },
        }
    }
}

impl error::Error for BridgeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            BridgeError::Renderer(e) => Some(e),
            BridgeError::Egl(e) => Some(e),
            _ => None,
        }
    }
}
