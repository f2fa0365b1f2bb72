use serde_json::Value;

use crate::{
    effects::color::parse_hex_rgb,
    foundation::core::{Offset, Rgb8},
    foundation::error::FxResult,
    foundation::math::round_offset,
    noise::seed::seed_from_str,
};

/// Grain opacity used when the configured value is missing, zero or unparsable.
pub const DEFAULT_GRAIN_OPACITY: f64 = 0.06;
/// Blend mode used when none is configured.
pub const DEFAULT_BLEND_MODE: &str = "multiply";

/// The `effects` section of a theme, as supplied by the caller.
///
/// Kept loose: each effect entry is normalized on use, and malformed entries
/// degrade to defaults instead of failing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectsConfig(Value);

impl EffectsConfig {
    /// Wrap an already-parsed `effects` value.
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Parse the `effects` section from JSON text.
    pub fn from_json_str(s: &str) -> FxResult<Self> {
        Ok(Self(serde_json::from_str(s)?))
    }

    /// Extract `theme.effects`, if the theme has one.
    pub fn from_theme(theme: &Value) -> Option<Self> {
        theme.get("effects").cloned().map(Self)
    }

    /// The raw value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// The raw `risograph` entry, if present and not null.
    pub fn risograph(&self) -> Option<&Value> {
        self.0.get("risograph").filter(|v| !v.is_null())
    }

    /// `true` when at least one known effect is switched on.
    pub fn has_enabled_effects(&self) -> bool {
        self.risograph()
            .and_then(|r| r.get("enabled"))
            .is_some_and(truthy)
    }
}

/// `true` when `theme.effects` switches on at least one known effect.
pub fn has_enabled_effects(theme: &Value) -> bool {
    EffectsConfig::from_theme(theme).is_some_and(|effects| effects.has_enabled_effects())
}

/// One simulated ink drum: an unparsed color and a registration offset.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ChannelSpec {
    /// Ink color as configured (`#RRGGBB`). Parsed by [`RisographConfig::resolve_channels`].
    pub color: String,
    /// Whole-pixel misregistration.
    pub offset: Offset,
}

impl ChannelSpec {
    fn new(color: &str, x: i32, y: i32) -> Self {
        Self {
            color: color.to_string(),
            offset: Offset::new(x, y),
        }
    }
}

/// A channel whose color has been parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedChannel {
    /// Ink color.
    pub color: Rgb8,
    /// Whole-pixel misregistration.
    pub offset: Offset,
}

/// Grain settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GrainConfig {
    /// Noise strength. Not clamped; values `<= 0` disable grain.
    pub opacity: f64,
    /// Seed identifier overriding the pipeline seed.
    ///
    /// Only non-empty strings are kept. A non-string seed (for example a bare number) is ignored
    /// and the pipeline seed is used instead, whereas loosely typed theme runtimes would hash it to
    /// seed 0.
    pub seed: Option<String>,
}

impl Default for GrainConfig {
    fn default() -> Self {
        Self {
            opacity: DEFAULT_GRAIN_OPACITY,
            seed: None,
        }
    }
}

/// Canonical risograph settings, produced only by [`RisographConfig::normalize`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RisographConfig {
    /// Whether the effect runs.
    pub enabled: bool,
    /// Ink channels in application order. Never empty.
    pub channels: Vec<ChannelSpec>,
    /// Grain settings.
    pub grain: GrainConfig,
    /// Blend mode name, passed through unvalidated.
    pub blend_mode: String,
}

/// The built-in pair of drums: red/pink shifted (2, 1) and cyan/teal shifted (-1, 2).
pub fn default_channels() -> Vec<ChannelSpec> {
    vec![
        ChannelSpec::new("#e84855", 2, 1),
        ChannelSpec::new("#2d9cdb", -1, 2),
    ]
}

impl Default for RisographConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            channels: default_channels(),
            grain: GrainConfig::default(),
            blend_mode: DEFAULT_BLEND_MODE.to_string(),
        }
    }
}

impl RisographConfig {
    /// Normalize arbitrary JSON into a usable config. Never fails.
    ///
    /// Coercions follow the theme format's loose typing: `enabled` is truthiness-based, offsets
    /// accept numbers and numeric strings (rounded half-up), opacity accepts a numeric prefix and
    /// falls back to [`DEFAULT_GRAIN_OPACITY`] when the result is zero or unparsable.
    pub fn normalize(raw: &Value) -> Self {
        let enabled = raw.get("enabled").is_some_and(truthy);

        let blend_mode = match raw.get("blendMode") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            _ => DEFAULT_BLEND_MODE.to_string(),
        };

        let channels = match raw.get("channels").filter(|v| truthy(v)) {
            None => default_channels(),
            Some(v) => {
                let channels = normalize_channels(v);
                if channels.is_empty() {
                    tracing::debug!("risograph: no usable channels, using defaults");
                    default_channels()
                } else {
                    channels
                }
            }
        };

        let grain = match raw.get("grain") {
            Some(g @ (Value::Object(_) | Value::Array(_))) => GrainConfig {
                opacity: g
                    .get("opacity")
                    .and_then(parse_float)
                    .filter(|v| *v != 0.0)
                    .unwrap_or(DEFAULT_GRAIN_OPACITY),
                seed: match g.get("seed") {
                    Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
                    _ => None,
                },
            },
            _ => GrainConfig::default(),
        };

        Self {
            enabled,
            channels,
            grain,
            blend_mode,
        }
    }

    /// Parse every channel color, failing on the first unusable one.
    pub fn resolve_channels(&self) -> FxResult<Vec<ResolvedChannel>> {
        self.channels
            .iter()
            .map(|ch| {
                Ok(ResolvedChannel {
                    color: parse_hex_rgb(&ch.color)?,
                    offset: ch.offset,
                })
            })
            .collect()
    }

    /// Numeric grain seed: the configured grain seed, else `fallback`, else the default seed.
    pub fn grain_seed(&self, fallback: Option<&str>) -> u32 {
        let id = self.grain.seed.as_deref().or(fallback);
        seed_from_str(id)
    }
}

fn normalize_channels(v: &Value) -> Vec<ChannelSpec> {
    let Some(entries) = v.as_array() else {
        tracing::debug!("risograph: channels is not an array");
        return Vec::new();
    };

    let mut out = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let Some(obj) = entry.as_object() else {
            tracing::debug!(index = i, "risograph: dropping non-object channel");
            continue;
        };
        let color = match obj.get("color") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            _ => {
                tracing::debug!(index = i, "risograph: dropping channel without a color");
                continue;
            }
        };
        let offset = obj.get("offset").filter(|o| truthy(o));
        let axis = |key: &str| offset.and_then(|o| o.get(key)).map_or(0, coerce_offset);
        out.push(ChannelSpec {
            color,
            offset: Offset::new(axis("x"), axis("y")),
        });
    }
    out
}

/// Loose truthiness used by theme files: `null`, `false`, `0`, `NaN` and `""` are false.
pub(crate) fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn coerce_offset(v: &Value) -> i32 {
    let n = match v {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().unwrap_or(0.0)
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    };
    round_offset(n)
}

fn parse_float(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_float_prefix(s),
        _ => None,
    }
    .filter(|f| !f.is_nan())
}

/// Parse the longest decimal prefix of `s` after leading whitespace, like a lenient `atof`.
fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        let sign = if bytes.first() == Some(&b'-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/config.rs"]
mod tests;
