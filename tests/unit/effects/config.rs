use super::*;
use serde_json::json;

#[test]
fn empty_object_normalizes_to_disabled_defaults() {
    let cfg = RisographConfig::normalize(&json!({}));
    assert_eq!(cfg, RisographConfig::default());
    assert!(!cfg.enabled);
    assert_eq!(cfg.channels.len(), 2);
    assert_eq!(cfg.grain.opacity, DEFAULT_GRAIN_OPACITY);
    assert_eq!(cfg.grain.seed, None);
    assert_eq!(cfg.blend_mode, "multiply");
}

#[test]
fn default_channels_are_pink_then_cyan() {
    let chans = default_channels();
    assert_eq!(chans[0].color, "#e84855");
    assert_eq!(chans[0].offset, Offset::new(2, 1));
    assert_eq!(chans[1].color, "#2d9cdb");
    assert_eq!(chans[1].offset, Offset::new(-1, 2));
}

#[test]
fn empty_channel_list_falls_back_like_missing_list() {
    let explicit_empty = RisographConfig::normalize(&json!({ "enabled": true, "channels": [] }));
    let missing = RisographConfig::normalize(&json!({ "enabled": true }));
    assert_eq!(explicit_empty.channels, missing.channels);
    assert_eq!(explicit_empty.channels, default_channels());
}

#[test]
fn malformed_channels_are_dropped_individually() {
    let cfg = RisographConfig::normalize(&json!({
        "enabled": true,
        "channels": [
            null,
            "red",
            [1, 2],
            { "offset": { "x": 3, "y": 3 } },
            { "color": "", "offset": { "x": 1 } },
            { "color": 123456 },
            { "color": "#ffe800", "offset": { "x": 1.5, "y": -2.5 } },
            { "color": "#000000" }
        ]
    }));
    assert_eq!(
        cfg.channels,
        vec![
            ChannelSpec {
                color: "#ffe800".to_string(),
                offset: Offset::new(2, -2),
            },
            ChannelSpec {
                color: "#000000".to_string(),
                offset: Offset::new(0, 0),
            },
        ]
    );
}

#[test]
fn all_invalid_channels_fall_back_to_defaults() {
    let cfg = RisographConfig::normalize(&json!({ "channels": [1, "x", {}] }));
    assert_eq!(cfg.channels, default_channels());

    let cfg = RisographConfig::normalize(&json!({ "channels": { "color": "#ffffff" } }));
    assert_eq!(cfg.channels, default_channels());
}

#[test]
fn offsets_coerce_loosely() {
    let cfg = RisographConfig::normalize(&json!({
        "channels": [
            { "color": "#111111", "offset": { "x": "3", "y": " -4 " } },
            { "color": "#222222", "offset": { "x": "abc", "y": null } },
            { "color": "#333333", "offset": { "x": true, "y": [5] } },
            { "color": "#444444", "offset": 7 },
            { "color": "#555555", "offset": { "x": 1e12, "y": -0.5 } }
        ]
    }));
    let offsets: Vec<Offset> = cfg.channels.iter().map(|c| c.offset).collect();
    assert_eq!(
        offsets,
        vec![
            Offset::new(3, -4),
            Offset::new(0, 0),
            Offset::new(1, 0),
            Offset::new(0, 0),
            Offset::new(i32::MAX, 0),
        ]
    );
}

#[test]
fn enabled_uses_truthiness() {
    for (raw, expected) in [
        (json!(true), true),
        (json!(false), false),
        (json!(1), true),
        (json!(0), false),
        (json!("yes"), true),
        (json!(""), false),
        (json!(null), false),
        (json!({}), true),
    ] {
        let cfg = RisographConfig::normalize(&json!({ "enabled": raw }));
        assert_eq!(cfg.enabled, expected, "enabled = {raw}");
    }
}

#[test]
fn grain_opacity_parses_or_defaults() {
    let opacity = |g: serde_json::Value| {
        RisographConfig::normalize(&json!({ "grain": g }))
            .grain
            .opacity
    };

    assert_eq!(opacity(json!({ "opacity": 0.2 })), 0.2);
    assert_eq!(opacity(json!({ "opacity": "0.15" })), 0.15);
    assert_eq!(opacity(json!({ "opacity": "  0.3px" })), 0.3);
    assert_eq!(opacity(json!({ "opacity": ".5" })), 0.5);
    assert_eq!(opacity(json!({ "opacity": "2e-1" })), 0.2);
    assert_eq!(opacity(json!({ "opacity": -1 })), -1.0);
    assert_eq!(opacity(json!({ "opacity": 3 })), 3.0);
    assert_eq!(opacity(json!({ "opacity": "Infinity" })), f64::INFINITY);

    // Zero and unparsable values fall back.
    assert_eq!(opacity(json!({ "opacity": 0 })), DEFAULT_GRAIN_OPACITY);
    assert_eq!(opacity(json!({ "opacity": "0" })), DEFAULT_GRAIN_OPACITY);
    assert_eq!(opacity(json!({ "opacity": "heavy" })), DEFAULT_GRAIN_OPACITY);
    assert_eq!(opacity(json!({ "opacity": true })), DEFAULT_GRAIN_OPACITY);
    assert_eq!(opacity(json!({ "opacity": "." })), DEFAULT_GRAIN_OPACITY);
    assert_eq!(opacity(json!({})), DEFAULT_GRAIN_OPACITY);
    assert_eq!(opacity(json!(0.5)), DEFAULT_GRAIN_OPACITY);
    assert_eq!(opacity(json!(null)), DEFAULT_GRAIN_OPACITY);
}

#[test]
fn grain_seed_only_accepts_non_empty_strings() {
    let seed = |s: serde_json::Value| {
        RisographConfig::normalize(&json!({ "grain": { "seed": s } }))
            .grain
            .seed
    };
    assert_eq!(seed(json!("A2_Paper_v1")), Some("A2_Paper_v1".to_string()));
    assert_eq!(seed(json!("")), None);
    assert_eq!(seed(json!(17)), None);
    assert_eq!(seed(json!(null)), None);
}

#[test]
fn grain_seed_prefers_config_then_fallback_then_default() {
    let with_seed = RisographConfig::normalize(&json!({ "grain": { "seed": "A2_Paper_v1" } }));
    assert_eq!(with_seed.grain_seed(Some("test")), 800_295_268);

    let without = RisographConfig::normalize(&json!({}));
    assert_eq!(without.grain_seed(Some("test")), 3_556_498);
    assert_eq!(without.grain_seed(None), 42);
    assert_eq!(without.grain_seed(Some("")), 42);
}

#[test]
fn blend_mode_passes_through() {
    let cfg = RisographConfig::normalize(&json!({ "blendMode": "screen" }));
    assert_eq!(cfg.blend_mode, "screen");
    let cfg = RisographConfig::normalize(&json!({ "blendMode": 5 }));
    assert_eq!(cfg.blend_mode, "multiply");
}

#[test]
fn non_object_input_is_tolerated() {
    for raw in [json!(null), json!(42), json!("risograph"), json!([1, 2])] {
        let cfg = RisographConfig::normalize(&raw);
        assert!(!cfg.enabled);
        assert_eq!(cfg.channels, default_channels());
    }
}

#[test]
fn resolve_channels_parses_colors() {
    let cfg = RisographConfig::normalize(&json!({ "enabled": true }));
    let resolved = cfg.resolve_channels().unwrap();
    assert_eq!(resolved[0].color, Rgb8::new(0xe8, 0x48, 0x55));
    assert_eq!(resolved[1].offset, Offset::new(-1, 2));
}

#[test]
fn resolve_channels_surfaces_bad_colors() {
    let cfg = RisographConfig::normalize(&json!({
        "channels": [{ "color": "#e84855" }, { "color": "teal" }]
    }));
    let err = cfg.resolve_channels().unwrap_err();
    assert!(err.to_string().contains("teal"));
}

#[test]
fn effects_envelope_helpers() {
    let theme = json!({
        "name": "riso-night",
        "effects": { "risograph": { "enabled": true } }
    });
    assert!(has_enabled_effects(&theme));
    let effects = EffectsConfig::from_theme(&theme).unwrap();
    assert!(effects.has_enabled_effects());
    assert!(effects.risograph().is_some());

    assert!(!has_enabled_effects(&json!({ "name": "plain" })));
    assert!(!has_enabled_effects(&json!({ "effects": { "risograph": { "enabled": false } } })));
    assert!(!has_enabled_effects(&json!({ "effects": null })));
    assert!(EffectsConfig::from_theme(&json!({})).is_none());

    let effects = EffectsConfig::from_json_str(r#"{ "risograph": null }"#).unwrap();
    assert!(effects.risograph().is_none());
    assert!(!effects.has_enabled_effects());

    assert!(EffectsConfig::from_json_str("{ nope").is_err());
}

#[test]
fn normalized_config_serializes_with_theme_field_names() {
    let cfg = RisographConfig::normalize(&json!({ "enabled": true }));
    let v = serde_json::to_value(&cfg).unwrap();
    assert_eq!(v["blendMode"], "multiply");
    assert_eq!(v["channels"][0]["offset"]["x"], 2);
    assert_eq!(v["grain"]["seed"], serde_json::Value::Null);
}

#[test]
fn non_string_grain_seed_uses_pipeline_seed() {
    let cfg = RisographConfig::normalize(&json!({ "grain": { "seed": 123 } }));
    assert_eq!(cfg.grain.seed, None);
    assert_eq!(cfg.grain_seed(Some("test")), 3_556_498);
    assert_eq!(cfg.grain_seed(None), 42);
}

#[test]
fn theme_and_envelope_enabled_checks_agree() {
    for theme in [
        json!({ "effects": { "risograph": { "enabled": "yes" } } }),
        json!({ "effects": { "risograph": { "enabled": 0 } } }),
        json!({ "effects": { "risograph": null } }),
        json!({ "effects": [] }),
        json!({ "effects": null }),
        json!({}),
    ] {
        let via_envelope =
            EffectsConfig::from_theme(&theme).is_some_and(|e| e.has_enabled_effects());
        assert_eq!(has_enabled_effects(&theme), via_envelope, "theme = {theme}");
    }
}
