//! Rendering seam: the core hands each live star's outline to a `Renderer`.
//!
//! Window, projection and pixel output belong to the host; the core only
//! decides *what* to draw and in which order.

use crate::polygon::Vec4;

/// Star color. Channels are not clamped to `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Global presentation toggle: outline (line loop) or filled polygon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawMode {
    #[default]
    Outline,
    Fill,
}

impl DrawMode {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            DrawMode::Outline => DrawMode::Fill,
            DrawMode::Fill => DrawMode::Outline,
        }
    }
}

/// Sink for ordered vertex loops.
pub trait Renderer {
    fn draw_loop(&mut self, color: Rgb, vertices: &[Vec4], mode: DrawMode);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        let m = DrawMode::default();
        assert_eq!(m, DrawMode::Outline);
        assert_eq!(m.toggled(), DrawMode::Fill);
        assert_eq!(m.toggled().toggled(), m);
    }
}
