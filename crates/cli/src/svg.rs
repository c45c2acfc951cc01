//! Headless renderer: collects star outlines into a single SVG document.
//!
//! The viewport is the field bounds with `y` pointing up, matching the
//! orthographic projection the interactive front end uses.

use astaroids::prelude::{Bounds, DrawMode, Renderer, Rgb, Vec4};
use std::fmt::Write as _;

pub struct SvgRenderer {
    bounds: Bounds,
    size: u32,
    body: String,
}

impl SvgRenderer {
    pub fn new(bounds: Bounds, size: u32) -> Self {
        Self {
            bounds,
            size,
            body: String::new(),
        }
    }

    /// Forget everything drawn so far.
    pub fn clear(&mut self) {
        self.body.clear();
    }

    pub fn finish(&self) -> String {
        let s = self.size;
        let open = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{s}\" height=\"{s}\" \
             viewBox=\"0 0 {s} {s}\">"
        );
        let backdrop = format!("<rect width=\"{s}\" height=\"{s}\" fill=\"black\"/>");
        format!("{open}\n{backdrop}\n{}</svg>\n", self.body)
    }

    fn to_pixels(&self, v: &Vec4) -> (f64, f64) {
        let b = &self.bounds;
        let s = self.size as f64;
        let x = (v.x - b.low_x) / (b.high_x - b.low_x) * s;
        let y = (b.high_y - v.y) / (b.high_y - b.low_y) * s;
        (x, y)
    }
}

/// Display channels saturate at `[0, 1]`; the stored color is left untouched.
fn channel(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn hex(color: Rgb) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}

impl Renderer for SvgRenderer {
    fn draw_loop(&mut self, color: Rgb, vertices: &[Vec4], mode: DrawMode) {
        let points: Vec<String> = vertices
            .iter()
            .map(|v| {
                let (x, y) = self.to_pixels(v);
                format!("{x:.2},{y:.2}")
            })
            .collect();
        let color = hex(color);
        let paint = match mode {
            DrawMode::Fill => format!("fill=\"{color}\" stroke=\"none\""),
            DrawMode::Outline => format!("fill=\"none\" stroke=\"{color}\" stroke-width=\"2\""),
        };
        let _ = writeln!(self.body, "<polygon points=\"{}\" {paint}/>", points.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astaroids::prelude::point;

    #[test]
    fn outline_maps_unit_square_with_y_up() {
        let mut r = SvgRenderer::new(Bounds::UNIT, 100);
        r.draw_loop(
            Rgb::new(1.0, 0.0, 7.5),
            &[point(0.0, 0.0), point(1.0, 0.0), point(0.5, 1.0)],
            DrawMode::Outline,
        );
        let svg = r.finish();
        assert!(svg.contains("points=\"0.00,100.00 100.00,100.00 50.00,0.00\""));
        assert!(svg.contains("stroke=\"#ff00ff\""));
        assert!(svg.contains("fill=\"none\""));
    }

    #[test]
    fn fill_and_clear() {
        let mut r = SvgRenderer::new(Bounds::UNIT, 10);
        r.draw_loop(Rgb::new(0.0, 1.0, 0.0), &[point(0.0, 0.0)], DrawMode::Fill);
        assert!(r.finish().contains("fill=\"#00ff00\""));
        r.clear();
        assert!(!r.finish().contains("<polygon"));
    }
}
