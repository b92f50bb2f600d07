//! Plotting capability.
//!
//! The engine publishes genomes to a consumer that usually plots them.
//! Rather than depending on a graphics stack, drawable data implements
//! [`PlotData`] and emits line strips into a consumer-provided
//! [`PlotSurface`].

use super::genome::Polynomial;
use super::sampling::sample_param;

/// RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorA {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorA {
    pub const WHITE: ColorA = ColorA::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for ColorA {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Drawing sink implemented by the embedding GUI.
pub trait PlotSurface {
    /// Draws a connected line through `points` in plot coordinates.
    ///
    /// `stippled` requests a dashed stroke (used for derivative curves).
    fn line_strip(&mut self, points: &[(f64, f64)], color: ColorA, stroke_weight: f64, stippled: bool);
}

/// Data that a plot widget can draw, clone, and restyle.
///
/// Implemented by [`Polynomial`] and [`PolyLineData`].
pub trait PlotData: Send + Sync {
    fn draw(&self, surface: &mut dyn PlotSurface);

    /// Returns an independent copy behind a fresh box.
    fn clone_box(&self) -> Box<dyn PlotData>;

    fn stroke_color(&self) -> ColorA;

    fn set_stroke_color(&mut self, color: ColorA);

    fn stroke_weight(&self) -> f64;

    fn set_stroke_weight(&mut self, weight: f64);
}

impl Clone for Box<dyn PlotData> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl PlotData for Polynomial {
    fn draw(&self, surface: &mut dyn PlotSurface) {
        let samples = self.draw_samples();
        if samples == 0 {
            return;
        }
        let (range_in, range_out) = self.draw_range();
        let param = |i: usize| sample_param(range_in, range_out, i, samples);

        if self.draws_formula() {
            let points: Vec<(f64, f64)> = (0..samples)
                .map(|i| {
                    let t = param(i);
                    (t, self.value(t))
                })
                .collect();
            surface.line_strip(&points, self.color(), self.stroke(), false);
        }
        if self.draws_derivative() {
            let points: Vec<(f64, f64)> = (0..samples)
                .map(|i| {
                    let t = param(i);
                    (t, self.derivative_value(t))
                })
                .collect();
            surface.line_strip(&points, self.color(), self.stroke(), true);
        }
    }

    fn clone_box(&self) -> Box<dyn PlotData> {
        Box::new(self.clone())
    }

    fn stroke_color(&self) -> ColorA {
        self.color()
    }

    fn set_stroke_color(&mut self, color: ColorA) {
        self.set_color(color);
    }

    fn stroke_weight(&self) -> f64 {
        self.stroke()
    }

    fn set_stroke_weight(&mut self, weight: f64) {
        self.set_stroke(weight);
    }
}

/// A precomputed polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyLineData {
    points: Vec<(f64, f64)>,
    color: ColorA,
    stroke_weight: f64,
}

impl PolyLineData {
    pub fn new(points: Vec<(f64, f64)>, color: ColorA, stroke_weight: f64) -> Self {
        Self {
            points,
            color,
            stroke_weight,
        }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }
}

impl Default for PolyLineData {
    fn default() -> Self {
        Self::new(Vec::new(), ColorA::WHITE, 3.0)
    }
}

impl PlotData for PolyLineData {
    fn draw(&self, surface: &mut dyn PlotSurface) {
        surface.line_strip(&self.points, self.color, self.stroke_weight, false);
    }

    fn clone_box(&self) -> Box<dyn PlotData> {
        Box::new(self.clone())
    }

    fn stroke_color(&self) -> ColorA {
        self.color
    }

    fn set_stroke_color(&mut self, color: ColorA) {
        self.color = color;
    }

    fn stroke_weight(&self) -> f64 {
        self.stroke_weight
    }

    fn set_stroke_weight(&mut self, weight: f64) {
        self.stroke_weight = weight;
    }
}
