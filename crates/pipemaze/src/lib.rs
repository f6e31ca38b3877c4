//! Pipe-maze loop analysis.
//!
//! Parse an ASCII grid of pipe tiles, find the single loop through the start
//! marker `S`, and report
//! - the distance from the start to the farthest loop tile (`len / 2`), and
//! - the number of cells strictly enclosed by the loop.
//!
//! Layout
//! - `grid`: tile alphabet, locations, parser and bounds-checked lookup.
//! - `walk`: table-driven transition function and loop finder.
//! - `area`: shoelace/Pick counter and a scanline cross-check.
//! - `gen`: reproducible random loop grids with known answers.
//! - `api`: entry points used by the CLI and the foreign-call shim.
//!
//! Everything here is pure and synchronous; no I/O happens in this crate.

pub mod api;
pub mod area;
pub mod gen;
pub mod grid;
pub mod walk;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use api::{
    answer, answer_for_loop, enclosed_area, loop_distance, parse, solve, solve_with, Answer,
    SolveCfg,
};
pub use area::{interior_area, interior_area_scanline, AreaMethod};
pub use grid::{Direction, Grid, Location, ParseError, Tile};
pub use walk::{find_loop, Loop};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{answer, parse, solve, solve_with, Answer, SolveCfg};
    pub use crate::area::AreaMethod;
    pub use crate::gen::{draw_loop_grid, DrawnGrid, Extent, LoopGridCfg, ReplayToken};
    pub use crate::grid::{Grid, Location, ParseError};
    pub use crate::walk::{find_loop, Loop};
}
