//! Entry points consumed by the command-line and foreign-call layers.
//!
//! The core keeps three outcomes apart: a parse failure (`Err`), a valid grid
//! without a loop (`Ok` with `None` answers) and a real answer that happens to
//! be zero. Collapsing everything to `0` is left to the outer shims.

use crate::area::{measure, AreaMethod};
use crate::grid::{Grid, ParseError};
use crate::walk::{find_loop, Loop};

/// Solver configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct SolveCfg {
    pub method: AreaMethod,
}

/// Both answers for one grid; `None` when the grid has no loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Answer {
    pub distance: Option<u64>,
    pub area: Option<u64>,
}

impl Answer {
    /// `(distance, area)` with "no loop" read as zero.
    #[inline]
    pub fn or_zero(self) -> (u64, u64) {
        (self.distance.unwrap_or(0), self.area.unwrap_or(0))
    }
}

/// Pre: `bytes` is a `\n`-separated grid of `|-LJ7FS.` glyphs.
/// Post: the rectangular grid and its unique start, or the first problem found.
pub fn parse(bytes: &[u8]) -> Result<Grid, ParseError> {
    Grid::parse(bytes)
}

/// Steps to the point of the loop farthest from the start (`len / 2`).
pub fn loop_distance(grid: &Grid) -> Option<u64> {
    find_loop(grid).map(|lp| lp.farthest_distance())
}

/// Cells strictly enclosed by the loop (shoelace + Pick).
pub fn enclosed_area(grid: &Grid) -> Option<u64> {
    find_loop(grid).map(|lp| measure(grid, &lp, AreaMethod::Shoelace))
}

/// Both answers from one loop discovery.
pub fn answer(grid: &Grid, cfg: SolveCfg) -> Answer {
    match find_loop(grid) {
        Some(lp) => answer_for_loop(grid, &lp, cfg),
        None => Answer::default(),
    }
}

/// Both answers for a loop the caller already found on `grid`.
///
/// Pre: `lp` came from `find_loop(grid)`.
pub fn answer_for_loop(grid: &Grid, lp: &Loop, cfg: SolveCfg) -> Answer {
    Answer {
        distance: Some(lp.farthest_distance()),
        area: Some(measure(grid, lp, cfg.method)),
    }
}

/// Parse and answer with the default configuration.
pub fn solve(bytes: &[u8]) -> Result<Answer, ParseError> {
    solve_with(bytes, SolveCfg::default())
}

/// Parse and answer with an explicit configuration.
///
/// Post: `Err` only for a malformed grid; a grid without a loop yields
/// `Answer::default()`.
pub fn solve_with(bytes: &[u8], cfg: SolveCfg) -> Result<Answer, ParseError> {
    let grid = parse(bytes)?;
    Ok(answer(&grid, cfg))
}
