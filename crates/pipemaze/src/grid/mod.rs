//! Grid model: tile alphabet, locations and the rectangular buffer.
//!
//! Purpose
//! - Turn raw bytes into an immutable `Grid` with a known start location.
//! - Offer bounds-checked tile lookup so off-grid probes read as "absent".
//!
//! Code cross-refs: `walk` (transition function and loop finder), `area`.

mod parse;
mod types;

pub use parse::{Grid, ParseError};
pub use types::{Direction, Location, Tile};
