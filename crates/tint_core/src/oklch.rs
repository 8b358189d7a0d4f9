//! Hex → OKLCH conversion
//!
//! Generated theme variables are expressed in OKLCH (perceptually uniform
//! lightness/chroma/hue). Conversion is table-first: the shipped preset key
//! colors carry documented mappings, everything else goes through the
//! computed sRGB → linear → OKLab → LCh path. The computed path is a
//! hue-preserving approximation of the documented values.

use std::fmt;

use crate::Color;

/// A color in OKLCH space.
///
/// `l` in `[0, 1]`, `c` in `[0, ~0.4]`, `h` in degrees `[0, 360)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oklch {
    pub l: f32,
    pub c: f32,
    pub h: f32,
}

/// Substitute for colors that fail to parse. Conversion never errors.
pub const NEUTRAL_GRAY: Oklch = Oklch::new(0.64, 0.02, 260.0);

impl Oklch {
    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }
}

impl fmt::Display for Oklch {
    /// CSS `oklch()` syntax: `oklch(0.64 0.20 166)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({:.2} {:.2} {:.0})", self.l, self.c, self.h)
    }
}

/// Documented mappings for the shipped preset key colors.
///
/// Keys are bare lowercase hex. The table is a fast path only: any color not
/// listed here falls back to [`srgb_to_oklch`].
const DOCUMENTED: &[(&str, Oklch)] = &[
    // emerald
    ("10b981", Oklch::new(0.64, 0.20, 166.0)),
    ("059669", Oklch::new(0.60, 0.17, 163.0)),
    // blue
    ("3b82f6", Oklch::new(0.62, 0.21, 259.0)),
    ("2563eb", Oklch::new(0.55, 0.22, 263.0)),
    // violet
    ("8b5cf6", Oklch::new(0.61, 0.22, 293.0)),
    ("7c3aed", Oklch::new(0.54, 0.25, 294.0)),
    // orange
    ("f97316", Oklch::new(0.70, 0.19, 48.0)),
    ("ea580c", Oklch::new(0.65, 0.21, 41.0)),
    // rose
    ("f43f5e", Oklch::new(0.65, 0.22, 13.0)),
    ("e11d48", Oklch::new(0.59, 0.22, 12.0)),
    // teal
    ("14b8a6", Oklch::new(0.70, 0.15, 183.0)),
    ("0d9488", Oklch::new(0.60, 0.13, 185.0)),
    // indigo
    ("6366f1", Oklch::new(0.59, 0.20, 277.0)),
    ("4f46e5", Oklch::new(0.51, 0.23, 277.0)),
    // zinc
    ("71717a", Oklch::new(0.55, 0.02, 286.0)),
    ("52525b", Oklch::new(0.44, 0.02, 286.0)),
    // neutral families used as secondaries
    ("64748b", Oklch::new(0.55, 0.04, 257.0)),
    ("78716c", Oklch::new(0.55, 0.01, 56.0)),
    ("737373", Oklch::new(0.55, 0.00, 0.0)),
    ("6b7280", Oklch::new(0.55, 0.03, 264.0)),
];

fn documented(hex: &str) -> Option<Oklch> {
    let bare = hex.strip_prefix('#').unwrap_or(hex).to_ascii_lowercase();
    DOCUMENTED
        .iter()
        .find(|(key, _)| *key == bare)
        .map(|(_, value)| *value)
}

/// Convert a 6-digit hex string to OKLCH.
///
/// Table-first; unlisted colors are converted on the fly. Malformed input
/// yields [`NEUTRAL_GRAY`] so theme application continues for the remaining
/// shades.
pub fn hex_to_oklch(hex: &str) -> Oklch {
    if let Some(value) = documented(hex) {
        return value;
    }
    match Color::parse_hex(hex) {
        Some(color) => srgb_to_oklch(color),
        None => {
            tracing::warn!("hex_to_oklch: malformed color {hex:?}, substituting neutral gray");
            NEUTRAL_GRAY
        }
    }
}

/// Extract only the hue channel of a hex color.
///
/// Used for derived colors that borrow the primary's hue (ghost accents).
pub fn hue_from_hex(hex: &str) -> f32 {
    hex_to_oklch(hex).h
}

/// Computed conversion: sRGB → linear RGB → OKLab → LCh.
pub fn srgb_to_oklch(color: Color) -> Oklch {
    let r = srgb_to_linear(color.r);
    let g = srgb_to_linear(color.g);
    let b = srgb_to_linear(color.b);

    // Linear sRGB to OKLab (Ottosson's LMS matrices).
    let l = 0.412_221_47 * r + 0.536_332_54 * g + 0.051_445_995 * b;
    let m = 0.211_903_5 * r + 0.680_699_55 * g + 0.107_396_96 * b;
    let s = 0.088_302_46 * r + 0.281_718_85 * g + 0.629_978_7 * b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    let lab_l = 0.210_454_26 * l_ + 0.793_617_79 * m_ - 0.004_072_047 * s_;
    let lab_a = 1.977_998_5 * l_ - 2.428_592_2 * m_ + 0.450_593_7 * s_;
    let lab_b = 0.025_904_037 * l_ + 0.782_771_77 * m_ - 0.808_675_77 * s_;

    let chroma = (lab_a * lab_a + lab_b * lab_b).sqrt();
    let hue = if chroma < 1e-5 {
        // Achromatic: hue is meaningless, pin it to zero.
        0.0
    } else {
        let degrees = lab_b.atan2(lab_a).to_degrees();
        degrees.rem_euclid(360.0)
    };

    Oklch::new(lab_l.clamp(0.0, 1.0), chroma, hue)
}

fn srgb_to_linear(channel: f32) -> f32 {
    if channel <= 0.04045 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn documented_mapping_wins_for_preset_key_colors() {
        assert_eq!(hex_to_oklch("#10b981"), Oklch::new(0.64, 0.20, 166.0));
        // Case and prefix insensitive.
        assert_eq!(hex_to_oklch("10B981"), Oklch::new(0.64, 0.20, 166.0));
    }

    #[test]
    fn computed_path_matches_reference_values() {
        // #ff0000 is not in the table; reference OKLCH ~ (0.628, 0.258, 29.2).
        let red = hex_to_oklch("#ff0000");
        assert!((red.l - 0.628).abs() < 0.01, "l = {}", red.l);
        assert!((red.c - 0.258).abs() < 0.01, "c = {}", red.c);
        assert!((red.h - 29.2).abs() < 1.0, "h = {}", red.h);
    }

    #[test]
    fn computed_path_handles_achromatic_colors() {
        let white = hex_to_oklch("#ffffff");
        assert!((white.l - 1.0).abs() < 0.01);
        assert!(white.c < 0.01);

        let black = hex_to_oklch("#000000");
        assert!(black.l < 0.01);
        assert!(black.c < 0.01);
    }

    #[test]
    fn computed_lightness_tracks_shade_order() {
        // A lighter shade of the same hue must come out with higher L.
        let light = srgb_to_oklch(Color::parse_hex("#d1fae5").unwrap());
        let dark = srgb_to_oklch(Color::parse_hex("#065f46").unwrap());
        assert!(light.l > dark.l);
    }

    #[test]
    fn malformed_input_degrades_to_neutral_gray() {
        assert_eq!(hex_to_oklch(""), NEUTRAL_GRAY);
        assert_eq!(hex_to_oklch("#12"), NEUTRAL_GRAY);
        assert_eq!(hex_to_oklch("zzzzzz"), NEUTRAL_GRAY);
    }

    #[test]
    fn hue_helper_reads_the_documented_hue() {
        assert_eq!(hue_from_hex("#10b981"), 166.0);
        assert_eq!(hue_from_hex("garbage"), NEUTRAL_GRAY.h);
    }

    #[test]
    fn display_uses_css_oklch_syntax() {
        assert_eq!(
            Oklch::new(0.64, 0.20, 166.0).to_string(),
            "oklch(0.64 0.20 166)"
        );
        assert_eq!(Oklch::new(1.0, 0.0, 0.0).to_string(), "oklch(1.00 0.00 0)");
    }
}
