//! Random loop grids with known answers (rectangle loop + noisy terrain).
//!
//! Model
//! - Draw grid dimensions, then an axis-aligned rectangle loop of `rw × rh`
//!   tiles (`rw, rh >= 2`) at a random offset, drawn with `F 7 L J - |`.
//! - Every other cell is ground or, with probability `noise`, a random pipe.
//! - The start replaces a random perimeter tile. Off-loop neighbours of the
//!   start are cleared to ground so only the rectangle connects to it.
//! - Closed forms: distance `rw + rh - 2`, enclosed cells `(rw - 2)(rh - 2)`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `find_loop`, `interior_area`, benches/loop_bench.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{Direction, Location};

const PIPES: [u8; 6] = [b'|', b'-', b'L', b'J', b'7', b'F'];

/// Size distribution for one grid axis.
#[derive(Clone, Copy, Debug)]
pub enum Extent {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl Extent {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            Extent::Fixed(n) => n.max(2),
            Extent::Uniform { min, max } => {
                let lo = min.max(2);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Loop-grid sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct LoopGridCfg {
    pub width: Extent,
    pub height: Extent,
    /// Probability that an off-loop cell holds a random pipe. Clamped to [0, 1].
    pub noise: f64,
}

impl Default for LoopGridCfg {
    fn default() -> Self {
        Self {
            width: Extent::Uniform { min: 2, max: 40 },
            height: Extent::Uniform { min: 2, max: 40 },
            noise: 0.5,
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
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// A generated grid together with its expected answers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawnGrid {
    /// Grid text, `\n` after every row.
    pub text: String,
    pub width: usize,
    pub height: usize,
    pub start: Location,
    pub distance: u64,
    pub area: u64,
}

/// Draw a random grid holding exactly one rectangle loop through the start.
pub fn draw_loop_grid(cfg: LoopGridCfg, tok: ReplayToken) -> DrawnGrid {
    let mut rng = tok.to_std_rng();
    let width = cfg.width.sample(&mut rng);
    let height = cfg.height.sample(&mut rng);
    let noise = if cfg.noise.is_finite() {
        cfg.noise.clamp(0.0, 1.0)
    } else {
        0.0
    };

    let mut cells: Vec<u8> = (0..width * height)
        .map(|_| {
            if rng.gen_bool(noise) {
                PIPES[rng.gen_range(0..PIPES.len())]
            } else {
                b'.'
            }
        })
        .collect();

    let rw = rng.gen_range(2..=width);
    let rh = rng.gen_range(2..=height);
    let ox = rng.gen_range(0..=width - rw);
    let oy = rng.gen_range(0..=height - rh);

    let perimeter = rect_perimeter(ox, oy, rw, rh);
    for &at in &perimeter {
        cells[at.y * width + at.x] = rect_tile(at, ox, oy, rw, rh);
    }
    let start = perimeter[rng.gen_range(0..perimeter.len())];
    cells[start.y * width + start.x] = b'S';
    for dir in Direction::ALL {
        if let Some(nb) = start.step(dir, width, height) {
            if !on_rect_border(nb, ox, oy, rw, rh) {
                cells[nb.y * width + nb.x] = b'.';
            }
        }
    }

    let mut text = String::with_capacity((width + 1) * height);
    for row in cells.chunks(width) {
        text.extend(row.iter().map(|&b| b as char));
        text.push('\n');
    }
    DrawnGrid {
        text,
        width,
        height,
        start,
        distance: (rw + rh - 2) as u64,
        area: ((rw - 2) * (rh - 2)) as u64,
    }
}

/// Perimeter cells, top and bottom rows first, then the side columns.
fn rect_perimeter(ox: usize, oy: usize, rw: usize, rh: usize) -> Vec<Location> {
    let mut out = Vec::with_capacity(2 * (rw + rh));
    for x in ox..ox + rw {
        out.push(Location::new(x, oy));
        out.push(Location::new(x, oy + rh - 1));
    }
    for y in oy + 1..oy + rh - 1 {
        out.push(Location::new(ox, y));
        out.push(Location::new(ox + rw - 1, y));
    }
    out
}

fn on_rect_border(at: Location, ox: usize, oy: usize, rw: usize, rh: usize) -> bool {
    let inside_x = (ox..ox + rw).contains(&at.x);
    let inside_y = (oy..oy + rh).contains(&at.y);
    inside_x && inside_y && (at.x == ox || at.x == ox + rw - 1 || at.y == oy || at.y == oy + rh - 1)
}

fn rect_tile(at: Location, ox: usize, oy: usize, rw: usize, rh: usize) -> u8 {
    let left = at.x == ox;
    let right = at.x == ox + rw - 1;
    let top = at.y == oy;
    let bottom = at.y == oy + rh - 1;
    match (left, right, top, bottom) {
        (true, _, true, _) => b'F',
        (_, true, true, _) => b'7',
        (true, _, _, true) => b'L',
        (_, true, _, true) => b'J',
        (_, _, true, _) | (_, _, _, true) => b'-',
        _ => b'|',
    }
}
