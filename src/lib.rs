//! Frosted-glass image filtering: scale down, stack blur, scale back up,
//! then composite a uniform darkening layer.
//!
//! The pipeline is a pure, synchronous computation over packed-ARGB
//! [`Raster`] buffers. Every stage consumes one raster and produces a new
//! one; nothing is cached or shared between calls, so concurrent invocations
//! on independent rasters need no locking.
//!
//! 1. **Scale down**: bilinear resize by [`PipelineConfig::scale_factor`]
//! 2. **Blur**: separable triangular-kernel stack blur, O(1) per pixel
//! 3. **Scale up**: bilinear resize back to the input dimensions
//! 4. **Darken**: black overlay at [`PipelineConfig::darken_alpha`]
//!
//! [`pipeline::process`] runs all four stages;
//! [`pipeline::process_with_observer`] additionally reports stage boundaries
//! so a caller can surface progress.

#![forbid(unsafe_code)]

pub mod blur;
pub mod codec;
pub mod config;
pub mod darken;
pub mod error;
pub mod pipeline;
pub mod raster;
pub mod scale;

pub use blur::stack_blur;
pub use codec::{decode_raster, encode_png};
pub use config::PipelineConfig;
pub use darken::darken;
pub use error::{FrostError, FrostResult};
pub use pipeline::{Stage, StageObserver, process, process_with_observer};
pub use raster::{Argb8, Raster};
pub use scale::scale;
