//! Pipe walking: transition function and loop finder.
//!
//! Purpose
//! - `transition`: decide, per step, where a traveller goes next given the
//!   tile underfoot and the side it came in from. Both directions of a
//!   connection are checked so mismatched neighbours never form false loops.
//! - `finder`: probe the start's neighbours in a fixed order and walk each
//!   candidate until the start is re-entered.
//!
//! Code cross-refs: `grid::{Grid, Tile, Direction}`, `area::interior_area`.

mod finder;
mod transition;

pub use finder::{find_loop, Loop, PROBE_ORDER};

#[cfg(test)]
mod tests;
