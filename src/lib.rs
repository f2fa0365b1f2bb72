//! riso-fx is a deterministic post-render image-effect pipeline.
//!
//! Given an RGBA8 frame, a theme's `effects` section and a seed identifier, the pipeline rewrites
//! the frame's color channels in place and produces byte-identical output across runs, processes
//! and machines. The main entry points are:
//!
//! - [`apply_effect_pipeline`] for an owned [`FrameRgba`]
//! - [`apply_effect_pipeline_rgba8`] for a caller-owned byte slice
//! - [`DebouncedPipeline`] for interactive callers that submit bursts of updates
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Post-render effects and their configuration.
pub mod effects;
/// Seeded noise primitives.
pub mod noise;
/// Effect pipeline orchestration.
pub mod pipeline;

pub use crate::foundation::core::{Canvas, FrameRgba, Offset, Rgb8};
pub use crate::foundation::error::{FxError, FxResult};

pub use crate::effects::color::parse_hex_rgb;
pub use crate::effects::config::{
    ChannelSpec, EffectsConfig, GrainConfig, RisographConfig, has_enabled_effects,
};
pub use crate::effects::risograph::apply_risograph;
pub use crate::noise::prng::Mulberry32;
pub use crate::noise::seed::{DEFAULT_SEED, seed_from_str};
pub use crate::noise::texture::{NoiseTexture, generate_noise_texture};
pub use crate::pipeline::apply::{
    EffectKind, PipelineOpts, PipelineReport, apply_effect_pipeline, apply_effect_pipeline_rgba8,
    apply_effect_pipeline_with_report,
};
pub use crate::pipeline::debounce::{
    DebounceOpts, DebouncedPipeline, Debouncer, EffectJob, EffectOutcome,
};
pub use crate::pipeline::threading::Threading;
