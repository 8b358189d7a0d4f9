use std::sync::Arc;

use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use tint_core::hue_from_hex;
use tint_theme::{
    Contrast, Layout, MemoryStore, Mode, Preset, ShadeScale, ThemeStore, DEFAULT_PRESET,
};

fn open_store() -> ThemeStore {
    ThemeStore::open(Box::new(MemoryStore::default()))
}

/// Pull `(l, c, h)` out of a `oklch(l c h)` value string.
fn parse_oklch(value: &str) -> (f32, f32, f32) {
    let inner = value
        .strip_prefix("oklch(")
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or_else(|| panic!("not an oklch value: {value:?}"));
    let parts: Vec<f32> = inner
        .split_whitespace()
        .map(|part| part.parse().unwrap())
        .collect();
    (parts[0], parts[1], parts[2])
}

#[test]
fn applying_an_unknown_preset_activates_default_variables() {
    let store = open_store();
    store.apply_preset("definitely-not-real");

    assert_eq!(store.settings().preset_name, DEFAULT_PRESET);
    assert_eq!(
        store.scope().var("color-primary-500").as_deref(),
        Some("oklch(0.64 0.20 166)")
    );
}

#[test]
fn repeated_apply_reuses_the_cached_fragment() {
    let store = open_store();

    store.apply_preset("ocean");
    let first = store.scope().current();

    store.apply_preset("ocean");
    let second = store.scope().current();

    // Same Arc: the second call hit the cache instead of regenerating,
    // so the output is byte-identical by construction.
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.resolved(Mode::Light), second.resolved(Mode::Light));
}

#[test]
fn ghost_accents_diverge_by_mode_and_share_the_primary_hue() {
    let store = open_store();
    for name in store.preset_names() {
        store.apply_preset(&name);
        let fragment = store.scope().current();

        let light = parse_oklch(&fragment.mode_vars(Mode::Light)["accent"]);
        let dark = parse_oklch(&fragment.mode_vars(Mode::Dark)["accent"]);
        let primary_hue = hue_from_hex(store.resolve_preset(&name).primary.default_value());

        assert!(
            (light.0 - dark.0).abs() > 0.1,
            "preset {name:?}: ghost lightness must differ between modes"
        );
        assert!(
            (light.2 - primary_hue).abs() < 0.5,
            "preset {name:?}: light ghost hue {} != primary hue {}",
            light.2,
            primary_hue
        );
        assert!(
            (dark.2 - primary_hue).abs() < 0.5,
            "preset {name:?}: dark ghost hue {} != primary hue {}",
            dark.2,
            primary_hue
        );
    }
}

#[test]
fn ghost_chroma_stays_in_the_subtle_band() {
    let store = open_store();
    for name in store.preset_names() {
        store.apply_preset(&name);
        let fragment = store.scope().current();
        for mode in [Mode::Light, Mode::Dark] {
            let (_, c, _) = parse_oklch(&fragment.mode_vars(mode)["accent"]);
            assert!(
                (0.02..=0.06).contains(&c),
                "preset {name:?} {mode:?}: ghost chroma {c} out of band"
            );
        }
    }
}

#[test]
fn mode_switch_changes_only_mode_dependent_variables() {
    let store = open_store();
    store.apply_preset(DEFAULT_PRESET);

    let fragment = store.scope().current();
    let light = fragment.resolved(Mode::Light);
    let dark = fragment.resolved(Mode::Dark);

    // The documented mapping for #10b981.
    assert_eq!(light["color-primary-500"], "oklch(0.64 0.20 166)");

    // Scale variables are mode-independent.
    for (name, value) in &light {
        if name.starts_with("color-") {
            assert_eq!(&dark[name], value, "{name} must not depend on mode");
        }
    }

    // Ghost accents are mode-dependent.
    assert_ne!(light["accent"], dark["accent"]);
    assert_ne!(light["accent-foreground"], dark["accent-foreground"]);
}

#[test]
fn set_mode_never_touches_the_fragment() {
    let store = open_store();
    store.apply_preset("violet");

    let before = store.scope().current();
    store.set_mode(Mode::Dark);
    let after = store.scope().current();

    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(store.scope().mode(), Mode::Dark);
}

#[test]
fn every_scale_step_has_a_generated_variable() {
    let store = open_store();
    store.apply_preset("ember");
    let fragment = store.scope().current();

    for family in ["primary", "secondary", "accent"] {
        for step in ["50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950"] {
            let name = format!("color-{family}-{step}");
            assert!(
                fragment.scale().contains_key(&name),
                "missing generated variable {name}"
            );
        }
        assert!(fragment.scale().contains_key(&format!("color-{family}")));
    }
}

#[test]
fn overrides_merge_into_the_live_fragment_without_poisoning_the_cache() {
    let store = open_store();
    store.apply_preset(DEFAULT_PRESET);

    let mut light = IndexMap::new();
    light.insert("background".to_string(), "oklch(0.98 0.01 166)".to_string());
    store.apply_override(light, IndexMap::new());

    assert_eq!(
        store.scope().var("background").as_deref(),
        Some("oklch(0.98 0.01 166)")
    );
    // Scale variables survive the merge.
    assert_eq!(
        store.scope().var("color-primary-500").as_deref(),
        Some("oklch(0.64 0.20 166)")
    );

    // Re-applying the preset restores pristine output from the cache.
    store.apply_preset(DEFAULT_PRESET);
    assert_eq!(
        store.scope().var("background").as_deref(),
        Some("oklch(1.00 0.00 0)")
    );
}

#[test]
fn imported_presets_are_normalized_and_applied() {
    let store = open_store();
    let before = store.preset_names().len();

    let mut primary = ShadeScale::from_hex([
        "#fdf4ff", "#fae8ff", "#f5d0fe", "#f0abfc", "#e879f9", "#d946ef", "#c026d3", "#a21caf",
        "#86198f", "#701a75", "#4a044e",
    ]);
    // A document may carry a stale DEFAULT; import re-pins it.
    primary.default = "#000000".to_string();

    store.import_preset(Preset {
        name: "corporate".to_string(),
        label: "Corporate".to_string(),
        primary,
        secondary: ShadeScale::from_hex([
            "#fafafa", "#f4f4f5", "#e4e4e7", "#d4d4d8", "#a1a1aa", "#71717a", "#52525b",
            "#3f3f46", "#27272a", "#18181b", "#09090b",
        ]),
        accent: ShadeScale::from_hex([
            "#fdf2f8", "#fce7f3", "#fbcfe8", "#f9a8d4", "#f472b6", "#ec4899", "#db2777",
            "#be185d", "#9d174d", "#831843", "#500724",
        ]),
    });

    assert_eq!(store.preset_names().len(), before + 1);
    assert_eq!(store.settings().preset_name, "corporate");
    assert_eq!(
        store.resolve_preset("corporate").primary.default_value(),
        "#d946ef"
    );
    assert!(store.scope().var("color-primary-500").is_some());
}

#[test]
fn display_preferences_are_co_persisted() {
    let store = open_store();
    store.set_stretch(true);
    store.set_layout(Layout::Horizontal);
    store.set_contrast(Contrast::High);

    let settings = store.settings();
    assert!(settings.stretch);
    assert_eq!(settings.layout, Layout::Horizontal);
    assert_eq!(settings.contrast, Contrast::High);
}

#[test]
fn reset_restores_defaults() {
    let store = open_store();
    store.apply_preset("rose");
    store.set_mode(Mode::Dark);
    store.set_stretch(true);

    store.reset();

    let settings = store.settings();
    assert_eq!(settings.preset_name, DEFAULT_PRESET);
    assert_eq!(settings.mode, Mode::Light);
    assert!(!settings.stretch);
    assert_eq!(store.scope().mode(), Mode::Light);
}
