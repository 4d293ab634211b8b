use std::time::Instant;

use crate::{
    blur::stack_blur, config::PipelineConfig, darken::darken, raster::Raster, scale::scale,
};

/// A stage boundary of the frosted-glass pipeline, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    ScaleDown,
    Blur,
    ScaleUp,
    Darken,
}

impl Stage {
    /// Human-readable progress label for orchestrators that surface status.
    pub fn label(self) -> &'static str {
        match self {
            Stage::ScaleDown => "Scaling down...",
            Stage::Blur => "Applying blur...",
            Stage::ScaleUp => "Scaling up...",
            Stage::Darken => "Applying darken effect...",
        }
    }
}

/// Called just before each stage runs. The pipeline renders no UI itself;
/// an orchestrator hooks this to report progress.
pub trait StageObserver {
    fn on_stage(&mut self, stage: Stage);
}

impl<F: FnMut(Stage)> StageObserver for F {
    fn on_stage(&mut self, stage: Stage) {
        self(stage)
    }
}

/// Run the full frosted-glass transform: scale down, stack blur, scale back
/// up, darken. The result has the input's dimensions.
pub fn process(src: &Raster, config: &PipelineConfig) -> Raster {
    process_with_observer(src, config, &mut |_: Stage| {})
}

#[tracing::instrument(skip(src, config, observer), fields(width = src.width(), height = src.height()))]
pub fn process_with_observer(
    src: &Raster,
    config: &PipelineConfig,
    observer: &mut dyn StageObserver,
) -> Raster {
    let softened = blur_with_observer(src, config, observer);

    observer.on_stage(Stage::Darken);
    let alpha = config.effective_darken_alpha();
    let start = Instant::now();
    let result = darken(&softened, alpha);
    tracing::debug!(
        alpha,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "darken done"
    );
    result
}

/// The rescale-blur sandwich on its own (no darken): scale down by the
/// configured factor, stack blur, scale back to the input dimensions. The
/// final upscale contributes to the softening, it is not just a size restore.
pub fn blur(src: &Raster, config: &PipelineConfig) -> Raster {
    blur_with_observer(src, config, &mut |_: Stage| {})
}

fn blur_with_observer(
    src: &Raster,
    config: &PipelineConfig,
    observer: &mut dyn StageObserver,
) -> Raster {
    let factor = config.effective_scale_factor();
    let scaled_w = scaled_dim(src.width(), factor);
    let scaled_h = scaled_dim(src.height(), factor);

    observer.on_stage(Stage::ScaleDown);
    tracing::debug!(scaled_w, scaled_h, factor, "scaling down");
    let down = scale(src, scaled_w, scaled_h);

    observer.on_stage(Stage::Blur);
    let radius = config.effective_blur_radius();
    let start = Instant::now();
    let blurred = stack_blur(&down, radius);
    tracing::debug!(
        radius,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "stack blur done"
    );

    observer.on_stage(Stage::ScaleUp);
    scale(&blurred, src.width(), src.height())
}

// max(1, round(dim * factor)): never hand a zero-area raster to a stage.
fn scaled_dim(dim: u32, factor: f32) -> u32 {
    ((dim as f32) * factor).round().max(1.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Argb8;

    #[test]
    fn stages_fire_in_order() {
        let src = Raster::filled(16, 16, Argb8::opaque(50, 100, 150)).unwrap();
        let mut seen = Vec::new();
        let _ = process_with_observer(&src, &PipelineConfig::default(), &mut |s: Stage| {
            seen.push(s)
        });
        assert_eq!(
            seen,
            vec![Stage::ScaleDown, Stage::Blur, Stage::ScaleUp, Stage::Darken]
        );
    }

    #[test]
    fn process_preserves_dimensions() {
        let src = Raster::filled(101, 43, Argb8::opaque(9, 9, 9)).unwrap();
        let out = process(&src, &PipelineConfig::default());
        assert_eq!((out.width(), out.height()), (101, 43));
    }

    #[test]
    fn blur_without_darken_keeps_uniform_color() {
        let px = Argb8::opaque(120, 130, 140);
        let src = Raster::filled(25, 25, px).unwrap();
        let out = blur(&src, &PipelineConfig::default());
        assert!(out.pixels().iter().all(|&p| p == px.to_packed()));
    }

    #[test]
    fn tiny_rasters_survive_aggressive_downscale() {
        let cfg = PipelineConfig {
            scale_factor: 0.01,
            ..PipelineConfig::default()
        };
        let src = Raster::filled(3, 2, Argb8::opaque(10, 20, 30)).unwrap();
        let out = process(&src, &cfg);
        assert_eq!((out.width(), out.height()), (3, 2));
    }

    #[test]
    fn scaled_dim_coerces_to_at_least_one() {
        assert_eq!(scaled_dim(100, 0.2), 20);
        assert_eq!(scaled_dim(3, 0.2), 1);
        assert_eq!(scaled_dim(2, 0.2), 1);
        assert_eq!(scaled_dim(1, 1.0), 1);
    }

    #[test]
    fn stage_labels_are_stable() {
        assert_eq!(Stage::Blur.label(), "Applying blur...");
        assert_eq!(Stage::Darken.label(), "Applying darken effect...");
    }
}
