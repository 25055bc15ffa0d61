//! Seeded point clouds (replay tokens) for tests, benches and the CLI.
//!
//! Model
//! - Each draw is fully determined by a `ReplayToken { seed, index }` mixed
//!   into a single `StdRng`, so a failing cloud can be regenerated from the
//!   two integers alone.
//! - `Lattice` draws integer coordinates: exact predicates, plenty of
//!   duplicates, shared x and collinear runs.
//! - `Circle` puts every point on the hull (worst case for merge sizes).

use nalgebra::point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
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

/// Shape of the sampled cloud.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointCloud {
    /// Uniform in `[-half_width, half_width]²`.
    Square { half_width: f64 },
    /// Uniform in the disk of the given radius.
    Disk { radius: f64 },
    /// Uniform over integer points in `[-half_width, half_width]²`.
    Lattice { half_width: i32 },
    /// Uniform angles on the circle of the given radius.
    Circle { radius: f64 },
}

impl Default for PointCloud {
    fn default() -> Self {
        PointCloud::Square { half_width: 1.0 }
    }
}

/// Draw `n` points (unsorted) from `cloud`.
pub fn draw_points(cloud: PointCloud, n: usize, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    (0..n).map(|_| sample(cloud, &mut rng)).collect()
}

fn sample<R: Rng>(cloud: PointCloud, rng: &mut R) -> Point {
    match cloud {
        PointCloud::Square { half_width } => {
            let h = half_width.abs().max(1e-9);
            point![rng.gen_range(-h..=h), rng.gen_range(-h..=h)]
        }
        PointCloud::Disk { radius } => {
            let r0 = radius.abs().max(1e-9);
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            let r = r0 * rng.gen::<f64>().sqrt();
            point![r * th.cos(), r * th.sin()]
        }
        PointCloud::Lattice { half_width } => {
            let h = half_width.abs();
            point![
                rng.gen_range(-h..=h) as f64,
                rng.gen_range(-h..=h) as f64
            ]
        }
        PointCloud::Circle { radius } => {
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            point![radius * th.cos(), radius * th.sin()]
        }
    }
}
