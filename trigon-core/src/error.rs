//! Common error types.

use std::{error, fmt};

use crate::handle::Handle;

/// The error type for when the requested operation is not supported by the backend.
#[derive(Clone)]
pub struct NotSupportedError {
    reason: &'static str,
}

impl NotSupportedError {
    /// Create a new [`NotSupportedError`].
    #[inline]
    pub fn new(reason: &'static str) -> NotSupportedError {
        NotSupportedError { reason }
    }
}

impl fmt::Debug for NotSupportedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_struct("NotSupportedError").field("reason", &self.reason).finish()
    }
}

impl fmt::Display for NotSupportedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "the requested operation is not supported: {}", self.reason)
    }
}

impl error::Error for NotSupportedError {}

/// Shader stage a compile error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            ShaderStage::Vertex => f.pad("vertex"),
            ShaderStage::Fragment => f.pad("fragment"),
        }
    }
}

/// A general error that may occur while driving a renderer.
#[derive(Debug)]
pub enum RendererError {
    /// No [`RendererFactory`] has been registered with the context.
    ///
    /// [`RendererFactory`]: crate::renderer::RendererFactory
    NotRegistered,
    /// The handle does not name a live renderer.
    InvalidHandle(Handle),
    /// The operation is not valid in the renderer's current lifecycle state.
    Lifecycle {
        handle: Option<Handle>,
        operation: &'static str,
    },
    /// A shader failed to compile.
    Shader { stage: ShaderStage, log: String },
    /// The shader program failed to link.
    Link { log: String },
    /// The GL implementation reported an error.
    Gl(String),
    /// The operation is not supported by the backend.
    NotSupported(NotSupportedError),
}

impl RendererError {
    pub(crate) fn lifecycle(operation: &'static str) -> Self {
        RendererError::Lifecycle { handle: None, operation }
    }

    /// Attach the handle of the session the error came from.
    pub fn with_handle(self, handle: Handle) -> Self {
        match self {
            RendererError::Lifecycle { operation, .. } => {
                RendererError::Lifecycle { handle: Some(handle), operation }
            },
            other => other,
        }
    }
}

impl From<NotSupportedError> for RendererError {
    fn from(value: NotSupportedError) -> Self {
        Self::NotSupported(value)
    }
}

impl fmt::Display for RendererError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            RendererError::NotRegistered => write!(f, "no renderer factory has been registered"),
            RendererError::InvalidHandle(handle) => write!(f, "invalid renderer handle {handle}"),
            RendererError::Lifecycle { handle: Some(handle), operation } => {
                write!(f, "`{operation}` called on renderer {handle} before GL was initialized")
            },
            RendererError::Lifecycle { handle: None, operation } => {
                write!(f, "`{operation}` called before GL was initialized")
            },
            RendererError::Shader { stage, log } => {
                write!(f, "{stage} shader failed to compile: {log}")
            },
            RendererError::Link { log } => write!(f, "shader program failed to link: {log}"),
            RendererError::Gl(message) => write!(f, "GL error: {message}"),
            RendererError::NotSupported(e) => e.fmt(f),
        }
    }
}

impl error::Error for RendererError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            RendererError::NotSupported(e) => Some(e),
            _ => None,
        }
    }
}
