//! Basic grid types: locations, arrival sides and the eight tile kinds.
//!
//! - `Location`: zero-based `(x, y)` cell coordinate, row-major.
//! - `Direction`: the side a tile is entered *from* (travel reversed).
//! - `Tile`: decoded glyph with its pipe-connection semantics.
//!
//! References
//! - Code cross-refs: `walk::transition` (exit/accept tables), `Grid::get`

use std::fmt;

use nalgebra::Vector2;

/// Grid cell coordinate; `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub x: usize,
    pub y: usize,
}

impl Location {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Neighbour one step towards `dir`, if it stays inside a `width × height` grid.
    pub fn step(self, dir: Direction, width: usize, height: usize) -> Option<Location> {
        match dir {
            Direction::North if self.y > 0 => Some(Location::new(self.x, self.y - 1)),
            Direction::South if self.y + 1 < height => Some(Location::new(self.x, self.y + 1)),
            Direction::West if self.x > 0 => Some(Location::new(self.x - 1, self.y)),
            Direction::East if self.x + 1 < width => Some(Location::new(self.x + 1, self.y)),
            _ => None,
        }
    }

    /// Lattice point used by the shoelace sum.
    #[inline]
    pub fn to_lattice(self) -> Vector2<i64> {
        Vector2::new(self.x as i64, self.y as i64)
    }
}

impl From<(usize, usize)> for Location {
    fn from((x, y): (usize, usize)) -> Self {
        Location { x, y }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal side. In walk state this is the side the current tile was entered from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Row index into the transition tables.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// One grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// `|`
    Vertical,
    /// `-`
    Horizontal,
    /// `L`
    BendNE,
    /// `J`
    BendNW,
    /// `7`
    BendSW,
    /// `F`
    BendSE,
    /// `S`; shape is never materialized.
    Start,
    /// `.`
    Ground,
}

impl Tile {
    pub const ALL: [Tile; 8] = [
        Tile::Vertical,
        Tile::Horizontal,
        Tile::BendNE,
        Tile::BendNW,
        Tile::BendSW,
        Tile::BendSE,
        Tile::Start,
        Tile::Ground,
    ];

    pub fn from_byte(b: u8) -> Option<Tile> {
        match b {
            b'|' => Some(Tile::Vertical),
            b'-' => Some(Tile::Horizontal),
            b'L' => Some(Tile::BendNE),
            b'J' => Some(Tile::BendNW),
            b'7' => Some(Tile::BendSW),
            b'F' => Some(Tile::BendSE),
            b'S' => Some(Tile::Start),
            b'.' => Some(Tile::Ground),
            _ => None,
        }
    }

    pub const fn to_byte(self) -> u8 {
        match self {
            Tile::Vertical => b'|',
            Tile::Horizontal => b'-',
            Tile::BendNE => b'L',
            Tile::BendNW => b'J',
            Tile::BendSW => b'7',
            Tile::BendSE => b'F',
            Tile::Start => b'S',
            Tile::Ground => b'.',
        }
    }

    /// The two sides a pipe connects; `None` for ground and start.
    pub const fn sides(self) -> Option<[Direction; 2]> {
        use Direction::*;
        match self {
            Tile::Vertical => Some([North, South]),
            Tile::Horizontal => Some([East, West]),
            Tile::BendNE => Some([North, East]),
            Tile::BendNW => Some([North, West]),
            Tile::BendSW => Some([South, West]),
            Tile::BendSE => Some([South, East]),
            Tile::Start | Tile::Ground => None,
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_byte() as char)
    }
}
