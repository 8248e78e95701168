//! Types used in renderer and surface construction.

use std::time::Duration;

use dpi::PhysicalSize;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Channel sizes requested from the platform when choosing a surface configuration.
///
/// The default asks for 8 bits per colour channel and no alpha, depth or stencil buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceConfig {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
    pub depth: u8,
    pub stencil: u8,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self { red: 8, green: 8, blue: 8, alpha: 0, depth: 0, stencil: 0 }
    }
}

/// Attributes used when creating a renderer and the surface it draws into.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RendererAttributes {
    pub title: String,
    pub inner_size: PhysicalSize<u32>,
    pub clear_color: [f32; 4],
    /// Time for the triangle to fade out and back in.
    #[cfg_attr(feature = "serde", serde(with = "duration_secs"))]
    pub fade_period: Duration,
    pub config: SurfaceConfig,
    /// Major version of the OpenGL ES context to request.
    pub client_version: u8,
}

impl Default for RendererAttributes {
    fn default() -> Self {
        Self {
            title: "Simple Triangle".to_owned(),
            inner_size: PhysicalSize::new(1024, 768),
            clear_color: [0.2, 0.2, 0.2, 1.0],
            fade_period: Duration::from_secs(10),
            config: SurfaceConfig::default(),
            client_version: 2,
        }
    }
}

impl RendererAttributes {
    /// Requests the window to be of a specific title.
    #[inline]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Requests the surface to be of specific dimensions.
    #[inline]
    pub fn with_inner_size(mut self, size: PhysicalSize<u32>) -> Self {
        self.inner_size = size;
        self
    }

    #[inline]
    pub fn with_clear_color(mut self, clear_color: [f32; 4]) -> Self {
        self.clear_color = clear_color;
        self
    }

    /// Sets the fade period. A zero period disables fading.
    #[inline]
    pub fn with_fade_period(mut self, fade_period: Duration) -> Self {
        self.fade_period = fade_period;
        self
    }

    #[inline]
    pub fn with_config(mut self, config: SurfaceConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn with_client_version(mut self, client_version: u8) -> Self {
        self.client_version = client_version;
        self
    }
}

#[cfg(feature = "serde")]
mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(duration.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_surface() {
        let attributes = RendererAttributes::default();
        assert_eq!(attributes.title, "Simple Triangle");
        assert_eq!(attributes.inner_size, PhysicalSize::new(1024, 768));
        assert_eq!(attributes.client_version, 2);
        assert_eq!(attributes.fade_period, Duration::from_secs(10));
        assert_eq!(
            attributes.config,
            SurfaceConfig { red: 8, green: 8, blue: 8, alpha: 0, depth: 0, stencil: 0 }
        );
    }

    #[test]
    fn defaults_cover_every_field() {
        let expected = RendererAttributes {
            title: "Simple Triangle".to_owned(),
            inner_size: PhysicalSize::new(1024, 768),
            clear_color: [0.2, 0.2, 0.2, 1.0],
            fade_period: Duration::from_secs(10),
            config: SurfaceConfig::default(),
            client_version: 2,
        };
        assert_eq!(RendererAttributes::default(), expected);
    }

    #[test]
    fn builder_overrides_fields() {
        let attributes = RendererAttributes::default()
            .with_title("t")
            .with_inner_size(PhysicalSize::new(10, 20))
            .with_fade_period(Duration::ZERO)
            .with_client_version(3);
        assert_eq!(attributes.title, "t");
        assert_eq!(attributes.inner_size, PhysicalSize::new(10, 20));
        assert_eq!(attributes.fade_period, Duration::ZERO);
        assert_eq!(attributes.client_version, 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_config_fills_defaults() {
        let attributes: RendererAttributes =
            serde_json::from_str(r#"{ "title": "from file", "fade_period": 2.5 }"#).unwrap();
        assert_eq!(attributes.title, "from file");
        assert_eq!(attributes.fade_period, Duration::from_millis(2500));
        assert_eq!(attributes.inner_size, PhysicalSize::new(1024, 768));
    }
}
