//! Star field: rejection-sampled placement and the per-tick update.
//!
//! Purpose
//! - Own every star of the field plus the shared base outline, and expose the
//!   two lifecycle points a host needs: `new`/`reset` (placement) and `step`.
//! - Report what happened in a tick (`TickOutcome`) so hosts can log or react
//!   without the core doing any I/O.
//!
//! Model
//! - Placement, per star `i`: draw traits and a position, then repeatedly draw a
//!   scale and build the star. Out of bounds → redraw the position. Crossing an
//!   already-placed star `j < i` → nudge right by `4 · scale_j`. Otherwise done.
//!   There is no attempt cap; placement relies on the field being sparse.
//! - Tick, stars in index order: advance, then invalidate on leaving the bounds,
//!   else invalidate both `i` and the first live `j < i` whose snapshot crosses.
//!   Collision resolution is order-dependent; index order is part of the contract.
//!
//! Code cross-refs: `Star`, `StarSampler`, `polygon::Polygon::{intersects,within_bounds}`.

mod cfg;
mod sampler;
mod star;

pub use sampler::{RandomSampler, StarSampler};
pub use star::{Star, StarState, StarTraits};

use crate::matrix::MatrixError;
use crate::polygon::{point, Bounds, Polygon};
use crate::render::{DrawMode, Renderer};

/// Field configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldCfg {
    pub star_count: usize,
    /// Viewport; stars leaving it are invalidated.
    pub bounds: Bounds,
}

impl Default for FieldCfg {
    fn default() -> Self {
        Self {
            star_count: 50,
            bounds: Bounds::UNIT,
        }
    }
}

/// Events of one `Field::step`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// 1-based tick counter since the last placement.
    pub tick: u64,
    /// `(j, i)` with `j < i`: both stars were invalidated this tick.
    pub collisions: Vec<(usize, usize)>,
    /// Stars invalidated for leaving the bounds.
    pub escaped: Vec<usize>,
}

/// The shared eight-point star outline at unit scale.
pub fn base_outline() -> Polygon {
    let pts: Vec<_> = cfg::BASE_OUTLINE
        .iter()
        .map(|&[x, y]| point(x, y))
        .collect();
    Polygon::from_points(&pts)
}

/// All stars of the simulation plus the sampler used to (re)place them.
#[derive(Clone, Debug)]
pub struct Field<S = RandomSampler> {
    cfg: FieldCfg,
    base: Polygon,
    stars: Vec<Star>,
    sampler: S,
    tick: u64,
}

impl Field<RandomSampler> {
    /// Place `cfg.star_count` stars drawn from a `StdRng` seeded with `seed`.
    pub fn seeded(cfg: FieldCfg, seed: u64) -> Result<Self, MatrixError> {
        Self::new(cfg, RandomSampler::seeded(seed))
    }
}

impl<S: StarSampler> Field<S> {
    pub fn new(cfg: FieldCfg, mut sampler: S) -> Result<Self, MatrixError> {
        let base = base_outline();
        let stars = place_stars(&cfg, &base, &mut sampler)?;
        Ok(Self {
            cfg,
            base,
            stars,
            sampler,
            tick: 0,
        })
    }

    /// Adopt an explicit layout. `reset` still re-places from `sampler`.
    pub fn from_stars(cfg: FieldCfg, stars: Vec<Star>, sampler: S) -> Self {
        Self {
            cfg,
            base: base_outline(),
            stars,
            sampler,
            tick: 0,
        }
    }

    /// Drop every star and run placement again.
    pub fn reset(&mut self) -> Result<(), MatrixError> {
        self.stars = place_stars(&self.cfg, &self.base, &mut self.sampler)?;
        self.tick = 0;
        Ok(())
    }

    /// Advance every live star by one tick.
    ///
    /// The tick counter only moves once every star has been updated.
    pub fn step(&mut self) -> Result<TickOutcome, MatrixError> {
        let mut outcome = TickOutcome {
            tick: self.tick + 1,
            ..TickOutcome::default()
        };
        for i in 0..self.stars.len() {
            let (earlier, rest) = self.stars.split_at_mut(i);
            let star = &mut rest[0];
            if !star.is_valid() {
                continue;
            }
            star.advance()?;
            if !star.snapshot().within_bounds(&self.cfg.bounds) {
                star.invalidate();
                outcome.escaped.push(i);
                continue;
            }
            let hit = earlier
                .iter()
                .position(|other| other.is_valid() && star.snapshot().intersects(other.snapshot()));
            if let Some(j) = hit {
                star.invalidate();
                earlier[j].invalidate();
                outcome.collisions.push((j, i));
            }
        }
        self.tick = outcome.tick;
        Ok(outcome)
    }

    /// Draw every live star's snapshot, in index order.
    pub fn render<R: Renderer>(&self, renderer: &mut R, mode: DrawMode) {
        for star in self.stars.iter().filter(|s| s.is_valid()) {
            renderer.draw_loop(star.traits().color, &star.snapshot().vertices(), mode);
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn live_count(&self) -> usize {
        self.stars.iter().filter(|s| s.is_valid()).count()
    }

    /// Ticks since the last placement.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn cfg(&self) -> &FieldCfg {
        &self.cfg
    }

    pub fn base(&self) -> &Polygon {
        &self.base
    }
}

fn place_stars<S: StarSampler>(
    cfg: &FieldCfg,
    base: &Polygon,
    sampler: &mut S,
) -> Result<Vec<Star>, MatrixError> {
    let mut stars: Vec<Star> = Vec::with_capacity(cfg.star_count);
    for _ in 0..cfg.star_count {
        let traits = sampler.traits();
        let mut position = sampler.position(&cfg.bounds);
        let star = loop {
            let candidate = Star::new(traits, position, sampler.scale(), base)?;
            if !candidate.snapshot().within_bounds(&cfg.bounds) {
                position = sampler.position(&cfg.bounds);
                continue;
            }
            match stars
                .iter()
                .find(|placed| candidate.snapshot().intersects(placed.snapshot()))
            {
                Some(placed) => position.x += cfg::NUDGE_FACTOR * placed.scale(),
                None => break candidate,
            }
        };
        stars.push(star);
    }
    Ok(stars)
}
