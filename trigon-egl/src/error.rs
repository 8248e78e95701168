use std::{error, fmt};

use khronos_egl as egl;

/// An error raised while setting up or using EGL.
#[derive(Debug)]
pub enum EglError {
    /// `libEGL` could not be loaded.
    Load(egl::LoadError<libloading::Error>),
    /// No display connection is available for the native display.
    NoDisplay,
    /// No config matches the requested template.
    NoConfig,
    /// An EGL call failed.
    Call { function: &'static str, error: egl::Error },
    /// The window or display handle belongs to a platform EGL can't be used with here.
    UnsupportedHandle(&'static str),
}

impl EglError {
    pub(crate) fn call(function: &'static str) -> impl FnOnce(egl::Error) -> EglError {
        move |error| EglError::Call { function, error }
    }
}

impl fmt::Display for EglError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            EglError::Load(e) => write!(f, "failed to load libEGL: {e}"),
            EglError::NoDisplay => write!(f, "no EGL display connection available"),
            EglError::NoConfig => write!(f, "eglChooseConfig returned no available config"),
            EglError::Call { function, error } => write!(f, "{function} failed: {error}"),
            EglError::UnsupportedHandle(kind) => {
                write!(f, "{kind} handles can't be used to create an EGL surface")
            },
        }
    }
}

impl error::Error for EglError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            EglError::Load(e) => Some(e),
            EglError::Call { error, .. } => Some(error),
            _ => None,
        }
    }
}
