// File: crates/axis-core/src/theme.rs
// Summary: Color scales and color providers mapping sample values to colors, with scheme presets.

use crate::error::{AxisError, Result};
use crate::geometry::clamp;
use crate::grid::linspace;
use crate::tick::AxisBounds;
use crate::types::NumericValue;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self { Self { a, r, g, b } }

    /// Opaque color from hue (degrees), saturation and value in `[0, 1]`.
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = saturation.clamp(0.0, 1.0);
        let v = value.clamp(0.0, 1.0);
        let c = v * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = v - c;
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        Self::from_argb(255, channel(r + m), channel(g + m), channel(b + m))
    }

    /// Linear blend: `t = 0` gives `self`, `t = 1` gives `other`.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let t = clamp(t, 0.0, 1.0);
        let mix = |p: u8, q: u8| (f64::from(p) + (f64::from(q) - f64::from(p)) * t).round() as u8;
        Color::from_argb(mix(self.a, other.a), mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

fn channel(unit: f32) -> u8 { (unit.clamp(0.0, 1.0) * 255.0).round() as u8 }

/// Bounded linear scale over `[min, max]`.
///
/// A discrete scale snaps samples to whole steps from `min` before mapping,
/// so integral data shows one flat color per representable value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScale {
    min: f64,
    max: f64,
    difference: f64,
    discrete: bool,
}

impl ColorScale {
    pub fn new(min: f64, max: f64) -> Result<Self> { Self::build(min, max, false) }

    pub fn discrete(min: f64, max: f64) -> Result<Self> { Self::build(min, max, true) }

    fn build(min: f64, max: f64, discrete: bool) -> Result<Self> {
        if !(min <= max) || !min.is_finite() || !max.is_finite() {
            return Err(AxisError::InvalidBounds { min: min.to_string(), max: max.to_string() });
        }
        Ok(Self { min, max, difference: max - min, discrete })
    }

    /// Scale over axis bounds; integral kinds yield a discrete scale.
    pub fn from_bounds(bounds: &AxisBounds) -> Self {
        Self {
            min: bounds.min().as_f64(),
            max: bounds.max().as_f64(),
            difference: bounds.span(),
            discrete: bounds.kind().is_integral(),
        }
    }

    pub fn min(&self) -> f64 { self.min }
    pub fn max(&self) -> f64 { self.max }
    pub fn difference(&self) -> f64 { self.difference }
    pub fn is_discrete(&self) -> bool { self.discrete }

    /// Position of `sample` on the scale in `[0, 1]`; out-of-range samples clamp.
    pub fn fraction(&self, sample: f64) -> f64 {
        if self.difference <= 0.0 || sample.is_nan() {
            return 0.0;
        }
        let offset = clamp(sample, self.min, self.max) - self.min;
        let offset = if self.discrete { offset.round() } else { offset };
        clamp(offset / self.difference, 0.0, 1.0)
    }

    /// `n` evenly spaced sample values across the scale, for legends.
    pub fn stops(&self, n: usize) -> Vec<f64> { linspace(self.min, self.max, n) }
}

/// Maps samples to colors along a [`ColorScale`].
pub trait ColorProvider {
    fn scale(&self) -> &ColorScale;

    /// Color at `fraction` in `[0, 1]` along the scale.
    fn color_at(&self, fraction: f64) -> Color;

    /// Tone reached at weight 0.
    fn neutral(&self) -> Color;

    fn color(&self, sample: f64) -> Color { self.color_at(self.scale().fraction(sample)) }

    fn color_of(&self, sample: &NumericValue) -> Color { self.color(sample.as_f64()) }

    /// Blend from the neutral tone (`weight = 0`) to the scale color (`weight = 1`).
    fn weighted_color(&self, sample: f64, weight: f64) -> Color {
        let weight = if weight.is_nan() { 0.0 } else { clamp(weight, 0.0, 1.0) };
        self.neutral().lerp(self.color(sample), weight)
    }
}

/// HSV endpoints swept linearly across a scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScheme {
    pub name: &'static str,
    /// `(hue, saturation, value)` at the scale minimum.
    pub low: (f32, f32, f32),
    /// `(hue, saturation, value)` at the scale maximum.
    pub high: (f32, f32, f32),
    pub neutral: Color,
}

impl ColorScheme {
    /// Blue through green to red.
    pub fn rainbow() -> Self {
        Self {
            name: "rainbow",
            low: (240.0, 1.0, 1.0),
            high: (0.0, 1.0, 1.0),
            neutral: Color::from_argb(255, 230, 230, 235),
        }
    }

    pub fn heat() -> Self {
        Self {
            name: "heat",
            low: (0.0, 1.0, 0.35),
            high: (60.0, 0.9, 1.0),
            neutral: Color::from_argb(255, 40, 40, 45),
        }
    }

    pub fn cool() -> Self {
        Self {
            name: "cool",
            low: (180.0, 1.0, 1.0),
            high: (300.0, 1.0, 1.0),
            neutral: Color::from_argb(255, 230, 230, 235),
        }
    }

    pub fn grayscale() -> Self {
        Self {
            name: "grayscale",
            low: (0.0, 0.0, 0.1),
            high: (0.0, 0.0, 0.95),
            neutral: Color::from_argb(255, 128, 128, 128),
        }
    }

    fn at(&self, fraction: f64) -> Color {
        let t = clamp(fraction, 0.0, 1.0) as f32;
        let mix = |lo: f32, hi: f32| lo + (hi - lo) * t;
        Color::from_hsv(mix(self.low.0, self.high.0), mix(self.low.1, self.high.1), mix(self.low.2, self.high.2))
    }
}

impl Default for ColorScheme {
    fn default() -> Self { Self::rainbow() }
}

/// Return a list of built-in scheme presets.
pub fn presets() -> Vec<ColorScheme> {
    vec![ColorScheme::rainbow(), ColorScheme::heat(), ColorScheme::cool(), ColorScheme::grayscale()]
}

/// Find a scheme by its `name`, falling back to rainbow.
pub fn find(name: &str) -> ColorScheme {
    for s in presets() { if s.name.eq_ignore_ascii_case(name) { return s; } }
    ColorScheme::rainbow()
}

/// Default provider: sweeps a [`ColorScheme`] in HSV across the scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HueColorProvider {
    scale: ColorScale,
    scheme: ColorScheme,
}

impl HueColorProvider {
    pub fn new(scale: ColorScale) -> Self { Self { scale, scheme: ColorScheme::default() } }

    pub fn with_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Same scheme over new bounds.
    pub fn rescaled(&self, scale: ColorScale) -> Self { Self { scale, scheme: self.scheme } }

    pub fn scheme(&self) -> &ColorScheme { &self.scheme }
}

impl ColorProvider for HueColorProvider {
    fn scale(&self) -> &ColorScale { &self.scale }

    fn color_at(&self, fraction: f64) -> Color { self.scheme.at(fraction) }

    fn neutral(&self) -> Color { self.scheme.neutral }
}
