//! Sources of random star parameters for placement.
//!
//! `StarSampler` is the seam between the placement algorithm and its
//! randomness: production uses `RandomSampler` (seeded `StdRng`), tests can
//! script exact positions and scales.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::cfg::{
    BLUE_LEVELS, GREEN_LEVELS, RED_LEVELS, ROTATION_SPEED_MAX, SCALE_MIN, SCALE_SPAN,
    VELOCITY_SPAN,
};
use super::star::StarTraits;
use crate::polygon::Bounds;
use crate::render::Rgb;

/// Draws consumed by placement, in the order: `traits`, `position`, then
/// `scale` once per attempt (and `position` again after an out-of-bounds attempt).
pub trait StarSampler {
    fn traits(&mut self) -> StarTraits;
    fn position(&mut self, bounds: &Bounds) -> Vector2<f64>;
    fn scale(&mut self) -> f64;
}

/// Uniform draws from any `Rng`.
#[derive(Clone, Debug)]
pub struct RandomSampler<R = StdRng> {
    rng: R,
}

impl RandomSampler<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    #[inline]
    fn channel(&mut self, levels: u32) -> f64 {
        let u: f64 = self.rng.gen();
        let k = self.rng.gen::<u32>() % levels;
        u * k as f64
    }
}

impl<R: Rng> StarSampler for RandomSampler<R> {
    fn traits(&mut self) -> StarTraits {
        let rotation_speed = self.rng.gen::<f64>() * ROTATION_SPEED_MAX;
        let vx = self.rng.gen::<f64>() * VELOCITY_SPAN - VELOCITY_SPAN / 2.0;
        let vy = self.rng.gen::<f64>() * VELOCITY_SPAN - VELOCITY_SPAN / 2.0;
        let r = self.channel(RED_LEVELS);
        let g = self.channel(GREEN_LEVELS);
        let b = self.channel(BLUE_LEVELS);
        StarTraits {
            rotation_speed,
            velocity: Vector2::new(vx, vy),
            color: Rgb::new(r, g, b),
        }
    }

    fn position(&mut self, bounds: &Bounds) -> Vector2<f64> {
        let ux: f64 = self.rng.gen();
        let uy: f64 = self.rng.gen();
        Vector2::new(
            bounds.low_x + ux * (bounds.high_x - bounds.low_x),
            bounds.low_y + uy * (bounds.high_y - bounds.low_y),
        )
    }

    fn scale(&mut self) -> f64 {
        self.rng.gen::<f64>() * SCALE_SPAN + SCALE_MIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_documented_ranges() {
        let mut s = RandomSampler::seeded(7);
        for _ in 0..500 {
            let t = s.traits();
            assert!((0.0..ROTATION_SPEED_MAX).contains(&t.rotation_speed));
            assert!(t.velocity.x.abs() <= VELOCITY_SPAN / 2.0);
            assert!(t.velocity.y.abs() <= VELOCITY_SPAN / 2.0);
            assert!(t.color.r >= 0.0 && t.color.r < RED_LEVELS as f64);
            assert!(t.color.g >= 0.0 && t.color.g < GREEN_LEVELS as f64);
            assert!(t.color.b >= 0.0 && t.color.b < BLUE_LEVELS as f64);
            let p = s.position(&Bounds::UNIT);
            assert!(Bounds::UNIT.contains(p.x, p.y));
            let sc = s.scale();
            assert!(sc >= SCALE_MIN && sc < SCALE_MIN + SCALE_SPAN);
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = RandomSampler::seeded(11);
        let mut b = RandomSampler::seeded(11);
        assert_eq!(a.traits(), b.traits());
        assert_eq!(a.position(&Bounds::UNIT), b.position(&Bounds::UNIT));
        assert_eq!(a.scale(), b.scale());
    }
}
