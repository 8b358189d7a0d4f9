//! Shade scales
//!
//! A scale is one color family (primary, secondary, or accent) mapped over
//! eleven lightness steps plus a `DEFAULT` alias. Interop keys match the
//! exported document shape: `"50"` through `"950"` and `"DEFAULT"`.

use serde::{Deserialize, Serialize};

/// One lightness step within a shade scale.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Shade {
    /// All steps, light to dark.
    pub const ALL: [Shade; 11] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
        Shade::S950,
    ];

    /// Interop key for this step (`"50"` .. `"950"`).
    pub fn key(self) -> &'static str {
        match self {
            Shade::S50 => "50",
            Shade::S100 => "100",
            Shade::S200 => "200",
            Shade::S300 => "300",
            Shade::S400 => "400",
            Shade::S500 => "500",
            Shade::S600 => "600",
            Shade::S700 => "700",
            Shade::S800 => "800",
            Shade::S900 => "900",
            Shade::S950 => "950",
        }
    }
}

/// A complete shade scale: hex color per step plus the `DEFAULT` alias.
///
/// Invariant: `DEFAULT` equals the `500` step. Deserialized scales may omit
/// `DEFAULT`; [`ShadeScale::normalized`] re-pins it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadeScale {
    #[serde(rename = "50")]
    pub s50: String,
    #[serde(rename = "100")]
    pub s100: String,
    #[serde(rename = "200")]
    pub s200: String,
    #[serde(rename = "300")]
    pub s300: String,
    #[serde(rename = "400")]
    pub s400: String,
    #[serde(rename = "500")]
    pub s500: String,
    #[serde(rename = "600")]
    pub s600: String,
    #[serde(rename = "700")]
    pub s700: String,
    #[serde(rename = "800")]
    pub s800: String,
    #[serde(rename = "900")]
    pub s900: String,
    #[serde(rename = "950")]
    pub s950: String,
    #[serde(rename = "DEFAULT", default)]
    pub default: String,
}

impl ShadeScale {
    /// Build a scale from eleven hex values, light to dark.
    ///
    /// `DEFAULT` is pinned to the 500 step.
    pub fn from_hex(steps: [&str; 11]) -> Self {
        Self {
            s50: steps[0].to_string(),
            s100: steps[1].to_string(),
            s200: steps[2].to_string(),
            s300: steps[3].to_string(),
            s400: steps[4].to_string(),
            s500: steps[5].to_string(),
            s600: steps[6].to_string(),
            s700: steps[7].to_string(),
            s800: steps[8].to_string(),
            s900: steps[9].to_string(),
            s950: steps[10].to_string(),
            default: steps[5].to_string(),
        }
    }

    /// Hex value for one step.
    pub fn get(&self, shade: Shade) -> &str {
        match shade {
            Shade::S50 => &self.s50,
            Shade::S100 => &self.s100,
            Shade::S200 => &self.s200,
            Shade::S300 => &self.s300,
            Shade::S400 => &self.s400,
            Shade::S500 => &self.s500,
            Shade::S600 => &self.s600,
            Shade::S700 => &self.s700,
            Shade::S800 => &self.s800,
            Shade::S900 => &self.s900,
            Shade::S950 => &self.s950,
        }
    }

    /// The `DEFAULT` alias value (the 500 step once normalized).
    pub fn default_value(&self) -> &str {
        &self.default
    }

    /// Ordered `(step, hex)` iteration, light to dark.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, &str)> + '_ {
        Shade::ALL.into_iter().map(move |shade| (shade, self.get(shade)))
    }

    /// Re-pin `DEFAULT` to the 500 step.
    ///
    /// Applied to every imported scale so the invariant holds regardless of
    /// what the document claimed.
    pub fn normalized(mut self) -> Self {
        self.default = self.s500.clone();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scale() -> ShadeScale {
        ShadeScale::from_hex([
            "#ecfdf5", "#d1fae5", "#a7f3d0", "#6ee7b7", "#34d399", "#10b981", "#059669",
            "#047857", "#065f46", "#064e3b", "#022c22",
        ])
    }

    #[test]
    fn default_alias_equals_the_500_step() {
        let s = scale();
        assert_eq!(s.default_value(), s.get(Shade::S500));
    }

    #[test]
    fn serde_uses_interop_keys() {
        let json = serde_json::to_value(scale()).unwrap();
        assert_eq!(json["50"], "#ecfdf5");
        assert_eq!(json["950"], "#022c22");
        assert_eq!(json["DEFAULT"], "#10b981");
    }

    #[test]
    fn missing_default_is_normalized() {
        let mut json = serde_json::to_value(scale()).unwrap();
        json.as_object_mut().unwrap().remove("DEFAULT");
        let parsed: ShadeScale = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.default_value(), "");
        assert_eq!(parsed.normalized().default_value(), "#10b981");
    }

    #[test]
    fn iteration_is_light_to_dark() {
        let s = scale();
        let keys: Vec<&str> = s.iter().map(|(shade, _)| shade.key()).collect();
        assert_eq!(
            keys,
            vec!["50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950"]
        );
    }
}
