//! Loop discovery from the start marker.

use crate::grid::{Direction, Grid, Location};

/// Start neighbours are probed in this order; the first closed walk wins.
pub const PROBE_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::West,
    Direction::East,
];

/// Closed pipe loop through the start.
///
/// Invariants:
/// - `vertices[0]` is the start; the start is not repeated at the end.
/// - Vertices are distinct and consecutive ones (including last → first) are
///   grid neighbours.
/// - `arrivals[i]` is the side `vertices[i]` was entered from; `arrivals[0]`
///   is the side the walk re-entered the start from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Loop {
    vertices: Vec<Location>,
    arrivals: Vec<Direction>,
}

impl Loop {
    #[inline]
    pub fn vertices(&self) -> &[Location] {
        &self.vertices
    }

    #[inline]
    pub fn arrivals(&self) -> &[Direction] {
        &self.arrivals
    }

    /// Number of distinct vertices (start counted once).
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Location {
        self.vertices[0]
    }

    /// Steps from the start to the farthest point along the loop.
    #[inline]
    pub fn farthest_distance(&self) -> u64 {
        (self.vertices.len() / 2) as u64
    }

    /// Row-major membership mask over `grid` (index `y * width + x`).
    pub fn mask(&self, grid: &Grid) -> Vec<bool> {
        let mut mask = vec![false; grid.width() * grid.height()];
        for v in &self.vertices {
            mask[v.y * grid.width() + v.x] = true;
        }
        mask
    }

    /// Grid text with every non-loop cell blanked to `.`.
    pub fn render(&self, grid: &Grid) -> String {
        let mask = self.mask(grid);
        let mut out = String::with_capacity((grid.width() + 1) * grid.height());
        for (at, tile) in grid.cells() {
            if mask[at.y * grid.width() + at.x] {
                out.push(tile.to_byte() as char);
            } else {
                out.push('.');
            }
            if at.x + 1 == grid.width() {
                out.push('\n');
            }
        }
        out
    }

    /// The same cycle walked the other way round from the start.
    #[cfg(test)]
    pub(crate) fn reversed(&self) -> Loop {
        let n = self.vertices.len();
        // Vertex `i` is entered from the side its old successor was entered
        // from, flipped.
        let order = std::iter::once(0).chain((1..n).rev());
        let (vertices, arrivals) = order
            .map(|i| (self.vertices[i], self.arrivals[(i + 1) % n].opposite()))
            .unzip();
        Loop { vertices, arrivals }
    }
}

/// Find the loop through the start, or `None` if no start neighbour leads back.
pub fn find_loop(grid: &Grid) -> Option<Loop> {
    let start = grid.start();
    PROBE_ORDER.iter().find_map(|&dir| {
        let (first, side) = grid.enter(start, dir)?;
        walk_from(grid, first, side)
    })
}

/// Follow the transition function from `first` until it re-enters the start.
///
/// The step budget `width * height` bounds the walk on malformed input.
fn walk_from(grid: &Grid, first: Location, side: Direction) -> Option<Loop> {
    let start = grid.start();
    let budget = grid.width() * grid.height();
    let mut vertices = vec![start, first];
    let mut arrivals = vec![side];
    let (mut cur, mut from) = (first, side);
    for _ in 0..budget {
        let (next, next_from) = grid.next_location(cur, from)?;
        if next == start {
            let arrivals = std::iter::once(next_from).chain(arrivals).collect();
            return Some(Loop { vertices, arrivals });
        }
        vertices.push(next);
        arrivals.push(next_from);
        cur = next;
        from = next_from;
    }
    None
}
