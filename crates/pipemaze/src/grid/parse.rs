//! Byte-buffer parser producing an immutable `Grid`.
//!
//! Layout
//! - Rows are separated by a single `\n`; a `\r` right before it is dropped.
//! - The final row may omit its terminator.
//! - The owned buffer keeps one terminator byte per row, so the cell at
//!   `(x, y)` lives at `y * (width + 1) + x`.

use std::fmt;
use std::str::FromStr;

use super::types::{Location, Tile};

/// Errors surfaced by `Grid::parse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The buffer has no row separator (this includes the empty buffer).
    NoLineTerminatorFound,
    /// No `S` anywhere in the buffer.
    NoStartMarkerFound,
    /// A second `S` was found; only one start is supported.
    MultipleStartMarkers { first: Location, second: Location },
    /// A row's width differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// A byte outside the tile alphabet `|-LJ7FS.`.
    InvalidTile { at: Location, byte: u8 },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NoLineTerminatorFound => write!(f, "no line terminator found"),
            ParseError::NoStartMarkerFound => write!(f, "no start marker 'S' found"),
            ParseError::MultipleStartMarkers { first, second } => write!(
                f,
                "multiple start markers: first at {first}, another at {second}"
            ),
            ParseError::RaggedRow {
                row,
                expected,
                actual,
            } => write!(
                f,
                "row {row} has width {actual}, expected {expected} (grid must be rectangular)"
            ),
            ParseError::InvalidTile { at, byte } => {
                write!(f, "invalid tile byte 0x{byte:02x} at {at}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Immutable rectangular pipe grid plus its start location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    width: usize,
    height: usize,
    start: Location,
}

impl Grid {
    /// Parse a raw buffer (one ASCII glyph per cell, `\n`-separated rows).
    ///
    /// Checks run in this order: terminator, start marker, start uniqueness,
    /// row widths and glyphs.
    pub fn parse(bytes: &[u8]) -> Result<Grid, ParseError> {
        let first_nl = bytes
            .iter()
            .position(|&b| b == b'\n')
            .ok_or(ParseError::NoLineTerminatorFound)?;
        let width = if first_nl > 0 && bytes[first_nl - 1] == b'\r' {
            first_nl - 1
        } else {
            first_nl
        };
        if !bytes.contains(&b'S') {
            return Err(ParseError::NoStartMarkerFound);
        }

        let mut body = bytes;
        while let Some((&last, rest)) = body.split_last() {
            if last == b'\n' || last == b'\r' {
                body = rest;
            } else {
                break;
            }
        }

        let mut cells = Vec::with_capacity(body.len() + 1);
        let mut start: Option<Location> = None;
        let mut height = 0;
        for (y, raw) in body.split(|&b| b == b'\n').enumerate() {
            let row = raw.strip_suffix(b"\r").unwrap_or(raw);
            if row.len() != width {
                return Err(ParseError::RaggedRow {
                    row: y,
                    expected: width,
                    actual: row.len(),
                });
            }
            for (x, &b) in row.iter().enumerate() {
                let at = Location::new(x, y);
                match Tile::from_byte(b) {
                    Some(Tile::Start) => {
                        if let Some(first) = start {
                            return Err(ParseError::MultipleStartMarkers { first, second: at });
                        }
                        start = Some(at);
                    }
                    Some(_) => {}
                    None => return Err(ParseError::InvalidTile { at, byte: b }),
                }
            }
            cells.extend_from_slice(row);
            cells.push(b'\n');
            height += 1;
        }

        let start = start.ok_or(ParseError::NoStartMarkerFound)?;
        Ok(Grid {
            cells,
            width,
            height,
            start,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn start(&self) -> Location {
        self.start
    }

    /// Tile at `at`, or `None` when `at` is outside `[0,width) × [0,height)`.
    ///
    /// Panics on a byte outside the tile alphabet; `parse` rejects those, so
    /// hitting one means the buffer was corrupted after construction.
    pub fn get(&self, at: Location) -> Option<Tile> {
        if at.x >= self.width || at.y >= self.height {
            return None;
        }
        let b = self.cells[self.offset(at)];
        match Tile::from_byte(b) {
            Some(tile) => Some(tile),
            None => unreachable!("corrupt grid byte 0x{b:02x} at {at}"),
        }
    }

    #[inline]
    fn offset(&self, at: Location) -> usize {
        at.y * (self.width + 1) + at.x
    }

    /// Row-major iterator over every cell.
    pub fn cells(&self) -> impl Iterator<Item = (Location, Tile)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).filter_map(move |x| {
                let at = Location::new(x, y);
                self.get(at).map(|t| (at, t))
            })
        })
    }

    /// Grid text as parsed (CR stripped, one `\n` after every row).
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s.as_bytes())
    }
}
