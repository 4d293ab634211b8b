use crate::error::{FrostError, FrostResult};

/// Tunable knobs for the frosted-glass effect.
///
/// Out-of-range values never fail: each `effective_*` accessor clamps into
/// the documented range at the point of use.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Pre-blur scale factor in (0, 1]. Lower = faster + more blur effect.
    pub scale_factor: f32,
    /// Blur radius in pixels, [1, 25]. Higher = more blur.
    pub blur_radius: u32,
    /// Darken overlay alpha in [0, 1]. Higher = darker.
    pub darken_alpha: f32,
}

pub const DEFAULT_SCALE_FACTOR: f32 = 0.2;
pub const DEFAULT_BLUR_RADIUS: u32 = 20;
pub const DEFAULT_DARKEN_ALPHA: f32 = 0.18;

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
            blur_radius: DEFAULT_BLUR_RADIUS,
            darken_alpha: DEFAULT_DARKEN_ALPHA,
        }
    }
}

impl PipelineConfig {
    pub fn from_json_str(s: &str) -> FrostResult<Self> {
        serde_json::from_str(s).map_err(|e| FrostError::serde(e.to_string()))
    }

    pub fn effective_scale_factor(&self) -> f32 {
        if self.scale_factor.is_finite() {
            self.scale_factor.clamp(0.0, 1.0)
        } else {
            DEFAULT_SCALE_FACTOR
        }
    }

    pub fn effective_blur_radius(&self) -> u32 {
        self.blur_radius.clamp(1, 25)
    }

    pub fn effective_darken_alpha(&self) -> f32 {
        if self.darken_alpha.is_finite() {
            self.darken_alpha.clamp(0.0, 1.0)
        } else {
            DEFAULT_DARKEN_ALPHA
        }
    }
}
