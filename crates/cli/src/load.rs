//! File-loading shim: path -> bytes -> `pipemaze` answers.
//!
//! `answers_from_path` is the convenience boundary where every failure
//! (unreadable file, malformed grid, no loop) is reported as `0`.

use anyhow::{Context, Result};
use pipemaze::{answer_for_loop, find_loop, Answer, Grid, Loop, SolveCfg};
use std::fs;
use std::path::Path;

/// One file read, parsed and searched once.
#[derive(Debug)]
pub struct Solved {
    pub grid: Grid,
    pub lp: Option<Loop>,
    pub answer: Answer,
}

/// Read and parse a grid file; errors carry the path.
pub fn read_grid(path: &Path) -> Result<Grid> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Grid::parse(&bytes).with_context(|| format!("parsing {}", path.display()))
}

/// Grid, loop and answers for `path`; `None` when the grid is unavailable.
pub fn solve_path(path: &Path, cfg: SolveCfg) -> Option<Solved> {
    let grid = match read_grid(path) {
        Ok(grid) => grid,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %format!("{err:#}"), "grid_unavailable");
            return None;
        }
    };
    let lp = find_loop(&grid);
    let answer = match &lp {
        Some(lp) => answer_for_loop(&grid, lp, cfg),
        None => {
            tracing::warn!(path = %path.display(), start = %grid.start(), "no_loop");
            Answer::default()
        }
    };
    Some(Solved { grid, lp, answer })
}

/// `(distance, area)` for the grid at `path`, `(0, 0)` on any failure.
pub fn answers_from_path(path: &Path, cfg: SolveCfg) -> (u64, u64) {
    solve_path(path, cfg).map_or((0, 0), |s| s.answer.or_zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipemaze::{AreaMethod, ParseError};
    use tempfile::tempdir;

    #[test]
    fn answers_for_sample_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "..F7.\n.FJ|.\nSJ.L7\n|F--J\nLJ...\n").unwrap();
        assert_eq!(answers_from_path(&path, SolveCfg::default()), (8, 1));
        let scan = SolveCfg {
            method: AreaMethod::Scanline,
        };
        assert_eq!(answers_from_path(&path, scan), (8, 1));
    }

    #[test]
    fn solved_file_keeps_grid_and_loop() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("square.txt");
        fs::write(&path, ".S-7.\n.|.|.\n.L-J.\n").unwrap();
        let solved = solve_path(&path, SolveCfg::default()).unwrap();
        let lp = solved.lp.as_ref().expect("loop");
        assert_eq!(lp.len(), 8);
        assert_eq!(solved.answer.or_zero(), (4, 1));
        assert_eq!(lp.render(&solved.grid), ".S-7.\n.|.|.\n.L-J.\n");
    }

    #[test]
    fn loopless_file_keeps_grid_without_loop() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.txt");
        fs::write(&path, ".S-7.\n...|.\n.L-J.\n").unwrap();
        let solved = solve_path(&path, SolveCfg::default()).unwrap();
        assert!(solved.lp.is_none());
        assert_eq!(solved.grid.width(), 5);
        assert_eq!(solved.answer, Answer::default());
    }

    #[test]
    fn missing_file_reads_as_zero() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        assert_eq!(answers_from_path(&path, SolveCfg::default()), (0, 0));
        assert!(solve_path(&path, SolveCfg::default()).is_none());
        let err = read_grid(&path).unwrap_err();
        assert!(err.to_string().contains("absent.txt"));
    }

    #[test]
    fn malformed_grid_reads_as_zero() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_start.txt");
        fs::write(&path, "F7\nLJ\n").unwrap();
        assert_eq!(answers_from_path(&path, SolveCfg::default()), (0, 0));
        let err = read_grid(&path).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ParseError>(),
            Some(&ParseError::NoStartMarkerFound)
        );
    }
}
