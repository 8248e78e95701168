use khronos_egl as egl;
use trigon_core::attributes::{RendererAttributes, SurfaceConfig};

/// `EGL_OPENGL_ES3_BIT`, only named by EGL 1.5 headers.
const OPENGL_ES3_BIT: egl::Int = 0x0040;

/// What to ask `eglChooseConfig` and `eglCreateContext` for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigTemplate {
    pub config: SurfaceConfig,
    /// Major OpenGL ES version.
    pub client_version: u8,
}

impl Default for ConfigTemplate {
    fn default() -> Self {
        Self { config: SurfaceConfig::default(), client_version: 2 }
    }
}

impl From<&RendererAttributes> for ConfigTemplate {
    fn from(attributes: &RendererAttributes) -> Self {
        Self { config: attributes.config, client_version: attributes.client_version }
    }
}

impl ConfigTemplate {
    fn renderable_type(&self) -> egl::Int {
        if self.client_version >= 3 {
            OPENGL_ES3_BIT
        } else {
            egl::OPENGL_ES2_BIT
        }
    }

    /// The `EGL_NONE` terminated attribute list for `eglChooseConfig`.
    pub fn config_attributes(&self) -> Vec<egl::Int> {
        let c = &self.config;
        vec![
            egl::SURFACE_TYPE,
            egl::WINDOW_BIT,
            egl::RENDERABLE_TYPE,
            self.renderable_type(),
            egl::RED_SIZE,
            c.red.into(),
            egl::GREEN_SIZE,
            c.green.into(),
            egl::BLUE_SIZE,
            c.blue.into(),
            egl::ALPHA_SIZE,
            c.alpha.into(),
            egl::DEPTH_SIZE,
            c.depth.into(),
            egl::STENCIL_SIZE,
            c.stencil.into(),
            egl::NONE,
        ]
    }

    /// The `EGL_NONE` terminated attribute list for `eglCreateContext`.
    pub fn context_attributes(&self) -> [egl::Int; 3] {
        [egl::CONTEXT_CLIENT_VERSION, self.client_version.into(), egl::NONE]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(attributes: &[egl::Int], key: egl::Int) -> Option<egl::Int> {
        attributes.chunks(2).find(|pair| pair[0] == key).map(|pair| pair[1])
    }

    #[test]
    fn default_template_asks_for_rgb888_gles2_window() {
        let attributes = ConfigTemplate::default().config_attributes();
        assert_eq!(attributes.last(), Some(&egl::NONE));
        assert_eq!(attributes.len() % 2, 1);
        assert_eq!(value_of(&attributes, egl::SURFACE_TYPE), Some(egl::WINDOW_BIT));
        assert_eq!(value_of(&attributes, egl::RENDERABLE_TYPE), Some(egl::OPENGL_ES2_BIT));
        assert_eq!(value_of(&attributes, egl::RED_SIZE), Some(8));
        assert_eq!(value_of(&attributes, egl::GREEN_SIZE), Some(8));
        assert_eq!(value_of(&attributes, egl::BLUE_SIZE), Some(8));
        assert_eq!(value_of(&attributes, egl::ALPHA_SIZE), Some(0));
        assert_eq!(value_of(&attributes, egl::DEPTH_SIZE), Some(0));
    }

    #[test]
    fn template_follows_attributes() {
        let attributes = RendererAttributes::default()
            .with_config(SurfaceConfig { alpha: 8, depth: 24, ..Default::default() })
            .with_client_version(3);
        let template = ConfigTemplate::from(&attributes);
        let list = template.config_attributes();
        assert_eq!(value_of(&list, egl::ALPHA_SIZE), Some(8));
        assert_eq!(value_of(&list, egl::DEPTH_SIZE), Some(24));
        assert_eq!(value_of(&list, egl::RENDERABLE_TYPE), Some(OPENGL_ES3_BIT));
        assert_eq!(template.context_attributes(), [egl::CONTEXT_CLIENT_VERSION, 3, egl::NONE]);
    }
}
