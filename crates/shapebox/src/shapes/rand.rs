//! Random shapes (uniform extents + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic shape sampler for the CLI, property tests
//!   and benches. Draws are reproducible and indexable.
//!
//! Model
//! - Pick a variant uniformly among those allowed by `KindMix`, then draw each
//!   extent (radius, side, width/height, triangle base/height) uniformly from
//!   `[min_extent, max_extent]`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Circle, Rectangle, Shape, ShapeKind, Square, Triangle};

/// Which variants a draw may produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindMix {
    All,
    NoCircles,
    Only(ShapeKind),
}

impl KindMix {
    fn sample<R: Rng>(&self, rng: &mut R) -> ShapeKind {
        match *self {
            KindMix::All => ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())],
            KindMix::NoCircles => {
                const REST: [ShapeKind; 3] =
                    [ShapeKind::Square, ShapeKind::Rectangle, ShapeKind::Triangle];
                REST[rng.gen_range(0..REST.len())]
            }
            KindMix::Only(k) => k,
        }
    }
}

/// Largest extent the sampler will draw.
pub const EXTENT_CAP: f64 = 1e6;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub kinds: KindMix,
    /// Smallest extent drawn. Clamped to [1e-9, `EXTENT_CAP`]; NaN reads as 1e-9.
    pub min_extent: f64,
    /// Largest extent drawn. Clamped to [`min_extent`, `EXTENT_CAP`]; NaN and
    /// +inf read as `EXTENT_CAP`.
    pub max_extent: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            kinds: KindMix::All,
            min_extent: 0.5,
            max_extent: 5.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one shape for the given token.
pub fn draw_shape(cfg: SampleCfg, tok: ReplayToken) -> Shape {
    let mut rng = tok.to_std_rng();
    // f64::max/min return the non-NaN operand, so NaN falls onto the bounds.
    let lo = cfg.min_extent.max(1e-9).min(EXTENT_CAP);
    let hi = cfg.max_extent.min(EXTENT_CAP).max(lo);
    let extent = |rng: &mut StdRng| rng.gen_range(lo..=hi);
    let shape = match cfg.kinds.sample(&mut rng) {
        ShapeKind::Circle => Circle::new(extent(&mut rng)).into(),
        ShapeKind::Square => Square::new(extent(&mut rng)).into(),
        ShapeKind::Rectangle => {
            let w = extent(&mut rng);
            let h = extent(&mut rng);
            Rectangle::new(w, h).into()
        }
        ShapeKind::Triangle => {
            let base = extent(&mut rng);
            let height = extent(&mut rng);
            let apex_x = rng.gen::<f64>() * base;
            Triangle::new(
                Vector2::zeros(),
                Vector2::new(base, 0.0),
                Vector2::new(apex_x, height),
            )
            .into()
        }
    };
    debug_assert!(Shape::is_valid(&shape));
    shape
}

/// Draw `n` shapes with tokens `(seed, 0..n)`.
pub fn draw_shapes(cfg: SampleCfg, seed: u64, n: usize) -> Vec<Shape> {
    (0..n as u64)
        .map(|index| draw_shape(cfg, ReplayToken { seed, index }))
        .collect()
}
