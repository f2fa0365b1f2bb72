use crate::{
    effects::config::{EffectsConfig, RisographConfig},
    effects::risograph::apply_risograph_with,
    foundation::core::{Canvas, FrameRgba},
    foundation::error::{FxError, FxResult},
    pipeline::threading::{Exec, Threading, build_thread_pool},
};

/// Post-render effects, listed in the order the pipeline applies them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EffectKind {
    /// Risograph print simulation.
    Risograph,
}

impl EffectKind {
    /// Every effect in application order.
    pub const ORDER: &'static [EffectKind] = &[EffectKind::Risograph];

    /// Key of this effect inside the theme's `effects` section.
    pub fn key(self) -> &'static str {
        match self {
            Self::Risograph => "risograph",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Options for one pipeline invocation.
pub struct PipelineOpts {
    /// Row-parallelism controls.
    pub threading: Threading,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// What a pipeline invocation did.
pub struct PipelineReport {
    /// Effects that mutated the buffer, in application order.
    pub applied: Vec<EffectKind>,
}

impl PipelineReport {
    /// `true` when at least one effect mutated the buffer.
    pub fn modified(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// Apply the configured effects to `frame` in place.
///
/// Returns `Ok(false)` without touching the frame when `effects` is absent or nothing is enabled.
/// Alpha is never modified.
pub fn apply_effect_pipeline(
    frame: &mut FrameRgba,
    effects: Option<&EffectsConfig>,
    seed: Option<&str>,
) -> FxResult<bool> {
    let canvas = frame.canvas();
    apply_effect_pipeline_rgba8(&mut frame.data, canvas, effects, seed, &PipelineOpts::default())
}

/// Slice variant of [`apply_effect_pipeline`] for callers that own a raw RGBA8 buffer.
pub fn apply_effect_pipeline_rgba8(
    data: &mut [u8],
    canvas: Canvas,
    effects: Option<&EffectsConfig>,
    seed: Option<&str>,
    opts: &PipelineOpts,
) -> FxResult<bool> {
    apply_effect_pipeline_with_report(data, canvas, effects, seed, opts).map(|r| r.modified())
}

/// Apply the configured effects and report which ones ran.
#[tracing::instrument(
    skip(data, effects, opts),
    fields(width = canvas.width, height = canvas.height, parallel = opts.threading.parallel)
)]
pub fn apply_effect_pipeline_with_report(
    data: &mut [u8],
    canvas: Canvas,
    effects: Option<&EffectsConfig>,
    seed: Option<&str>,
    opts: &PipelineOpts,
) -> FxResult<PipelineReport> {
    let mut report = PipelineReport::default();
    let Some(effects) = effects else {
        return Ok(report);
    };

    let risograph = effects
        .risograph()
        .map(RisographConfig::normalize)
        .filter(|cfg| cfg.enabled);
    if risograph.is_none() {
        tracing::trace!("no enabled effects");
        return Ok(report);
    }

    let expected = canvas.rgba_len()?;
    if data.len() != expected {
        return Err(FxError::validation(format!(
            "pipeline buffer length {} does not match {}x{} RGBA8 (expected {expected})",
            data.len(),
            canvas.width,
            canvas.height
        )));
    }

    let pool = if opts.threading.parallel {
        Some(build_thread_pool(opts.threading.threads)?)
    } else {
        None
    };
    let exec = pool.as_ref().map_or(Exec::Sequential, Exec::Pool);

    for kind in EffectKind::ORDER {
        let applied = match kind {
            EffectKind::Risograph => match risograph.as_ref() {
                Some(cfg) => apply_risograph_with(exec, data, canvas, cfg, seed)?,
                None => false,
            },
        };
        if applied {
            report.applied.push(*kind);
        }
    }

    tracing::debug!(applied = ?report.applied, "effect pipeline finished");
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/apply.rs"]
mod tests;
