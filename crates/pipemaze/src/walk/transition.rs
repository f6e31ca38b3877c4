//! Table-driven transition function.
//!
//! Two tables replace per-glyph branching:
//! - `EXIT[tile][arrival]`: the side a traveller leaves through after entering
//!   `tile` from `arrival` (`None` if the tile does not connect on that side).
//! - `ACCEPTS[arrival][tile]`: whether `tile` may be entered from `arrival`.
//!   The start accepts every side; its shape is never resolved.
//!
//! A step succeeds only if both sides agree: the current tile must lead out
//! towards the neighbour and the neighbour must connect back.

use crate::grid::{Direction, Grid, Location, Tile};

use crate::grid::Direction::{East as E, North as N, South as S, West as W};

/// Rows follow `Tile::ALL`, columns follow `Direction::ALL` (N, E, S, W).
const EXIT: [[Option<Direction>; 4]; 8] = [
    // |
    [Some(S), None, Some(N), None],
    // -
    [None, Some(W), None, Some(E)],
    // L
    [Some(E), Some(N), None, None],
    // J
    [Some(W), None, None, Some(N)],
    // 7
    [None, None, Some(W), Some(S)],
    // F
    [None, Some(S), Some(E), None],
    // S
    [None; 4],
    // .
    [None; 4],
];

/// Rows follow `Direction::ALL`, columns follow `Tile::ALL` (| - L J 7 F S .).
const ACCEPTS: [[bool; 8]; 4] = [
    // from north: S | L J
    [true, false, true, true, false, false, true, false],
    // from east: S - L F
    [false, true, true, false, false, true, true, false],
    // from south: S | 7 F
    [true, false, false, false, true, true, true, false],
    // from west: S - J 7
    [false, true, false, true, true, false, true, false],
];

impl Tile {
    /// Side this tile is left through after entering from `arrived_from`.
    #[inline]
    pub fn exit(self, arrived_from: Direction) -> Option<Direction> {
        EXIT[self.index()][arrived_from.index()]
    }

    /// Whether this tile can be entered from `side`.
    #[inline]
    pub fn accepts_arrival(self, side: Direction) -> bool {
        ACCEPTS[side.index()][self.index()]
    }
}

impl Grid {
    /// One walk step.
    ///
    /// Pre: the traveller stands on `current`, having entered it from `arrived_from`.
    /// Post: `Some((next, side))` where `next` is the neighbour reached through
    /// the current tile's other opening and `side` is the side `next` is
    /// entered from; `None` on ground, a mismatched arrival side, the grid
    /// border, or a neighbour that does not connect back.
    pub fn next_location(
        &self,
        current: Location,
        arrived_from: Direction,
    ) -> Option<(Location, Direction)> {
        let exit = self.get(current)?.exit(arrived_from)?;
        self.enter(current, exit)
    }

    /// Move from `from` towards `exit` if the neighbour accepts the entry.
    pub(crate) fn enter(&self, from: Location, exit: Direction) -> Option<(Location, Direction)> {
        let next = from.step(exit, self.width(), self.height())?;
        let side = exit.opposite();
        self.get(next)?
            .accepts_arrival(side)
            .then_some((next, side))
    }
}
