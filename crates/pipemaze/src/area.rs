//! Enclosed-cell counting for a closed loop.
//!
//! - `interior_area`: shoelace sum over the loop's lattice vertices, then
//!   Pick's theorem `A = I + B/2 - 1` solved for `I`. Integer-only: with
//!   `2A` from the shoelace and `B` the vertex count, `I = (2A - B + 2) / 2`.
//! - `interior_area_scanline`: even-odd sweep along each row, toggling on
//!   loop tiles that open to the north. Independent of the polygon route and
//!   used to cross-check it.

use crate::grid::{Direction, Grid, Location, Tile};
use crate::walk::Loop;

/// Which enclosed-cell counter to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AreaMethod {
    /// Shoelace formula plus Pick's theorem.
    #[default]
    Shoelace,
    /// Row sweep with north-opening crossings.
    Scanline,
}

/// Number of cells strictly inside `lp`.
///
/// Pre: `lp` is a closed simple lattice loop (as produced by `find_loop`).
/// Post: non-negative; `0` for loops with fewer than 4 vertices.
pub fn interior_area(lp: &Loop) -> u64 {
    let vs = lp.vertices();
    let boundary = vs.len() as u64;
    if boundary < 4 {
        return 0;
    }
    let twice_signed: i64 = vs
        .iter()
        .zip(vs.iter().cycle().skip(1))
        .map(|(p, q)| p.to_lattice().perp(&q.to_lattice()))
        .sum();
    let twice_area = twice_signed.unsigned_abs();
    (twice_area + 2).saturating_sub(boundary) / 2
}

/// Number of cells strictly inside `lp`, by row sweep over `grid`.
pub fn interior_area_scanline(grid: &Grid, lp: &Loop) -> u64 {
    let width = grid.width();
    let on_loop = lp.mask(grid);
    let start_north = start_opens_north(lp);
    let mut count = 0;
    for y in 0..grid.height() {
        let mut inside = false;
        for x in 0..width {
            if on_loop[y * width + x] {
                let opens_north = match grid.get(Location::new(x, y)) {
                    Some(Tile::Start) => start_north,
                    Some(tile) => tile.exit(Direction::North).is_some(),
                    None => false,
                };
                if opens_north {
                    inside = !inside;
                }
            } else if inside {
                count += 1;
            }
        }
    }
    count
}

/// Run the counter selected by `method`.
pub fn measure(grid: &Grid, lp: &Loop, method: AreaMethod) -> u64 {
    match method {
        AreaMethod::Shoelace => interior_area(lp),
        AreaMethod::Scanline => interior_area_scanline(grid, lp),
    }
}

/// The start connects to its two loop neighbours: the side the walk closed
/// through (`arrivals[0]`) and the side facing the first step.
fn start_opens_north(lp: &Loop) -> bool {
    let arrivals = lp.arrivals();
    arrivals.first() == Some(&Direction::North) || arrivals.get(1) == Some(&Direction::South)
}
