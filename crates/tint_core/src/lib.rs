//! Tint color primitives
//!
//! The foundation layer of the Tint theme kit:
//!
//! - [`Color`]: an sRGB color with f32 components, hex parsing and
//!   interpolation
//! - [`Oklch`]: a color in the perceptually uniform OKLCH space, displayed
//!   in CSS `oklch()` syntax
//! - [`hex_to_oklch`] / [`hue_from_hex`]: the conversion pipeline used by
//!   the theme engine to turn preset hex scales into generated variables
//!
//! Conversion never fails: malformed input degrades to a neutral gray so a
//! single bad color can never block theme application.

mod color;
mod oklch;

pub use color::Color;
pub use oklch::{hex_to_oklch, hue_from_hex, srgb_to_oklch, Oklch, NEUTRAL_GRAY};
