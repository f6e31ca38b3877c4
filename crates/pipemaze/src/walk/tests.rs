//! Transition tables and loop discovery on small hand-drawn grids.

use super::*;
use crate::grid::{Direction, Grid, Location, Tile};

const SQUARE: &str = ".S-7.\n.|.|.\n.L-J.";
const WINDING: &str = "..F7.\n.FJ|.\nSJ.L7\n|F--J\nLJ...";
const BROKEN: &str = ".S-7.\n...|.\n.L-J.";
const NOISY: &str = "-L|F7\n7S-7|\nL|7||\n-L-J|\nL|-JF\n";

fn grid(text: &str) -> Grid {
    Grid::parse(text.as_bytes()).expect("test grid parses")
}

/// Tiles enterable from `side`, in `Tile::ALL` order.
fn accepting(side: Direction) -> impl Iterator<Item = Tile> {
    Tile::ALL
        .into_iter()
        .filter(move |t| t.accepts_arrival(side))
}

#[test]
fn exit_table_matches_tile_sides() {
    for tile in Tile::ALL {
        for side in Direction::ALL {
            let expected = tile.sides().and_then(|[a, b]| {
                if side == a {
                    Some(b)
                } else if side == b {
                    Some(a)
                } else {
                    None
                }
            });
            assert_eq!(tile.exit(side), expected, "{tile} entered from {side:?}");
        }
    }
}

#[test]
fn accept_table_is_symmetric_with_exits() {
    for tile in Tile::ALL {
        for side in Direction::ALL {
            if let Some(out) = tile.exit(side) {
                // A pipe accepts entry on both of its openings and routes back.
                assert!(tile.accepts_arrival(side));
                assert!(tile.accepts_arrival(out));
                assert_eq!(tile.exit(out), Some(side));
            } else if tile != Tile::Start {
                assert!(!tile.accepts_arrival(side), "{tile} from {side:?}");
            }
        }
    }
    assert!(Direction::ALL.iter().all(|&d| Tile::Start.accepts_arrival(d)));
    assert!(Direction::ALL.iter().all(|&d| !Tile::Ground.accepts_arrival(d)));
}

#[test]
fn accepting_lists_match_table() {
    let north: Vec<_> = accepting(Direction::North).collect();
    assert_eq!(
        north,
        vec![Tile::Vertical, Tile::BendNE, Tile::BendNW, Tile::Start]
    );
    let west: Vec<_> = accepting(Direction::West).collect();
    assert_eq!(
        west,
        vec![Tile::Horizontal, Tile::BendNW, Tile::BendSW, Tile::Start]
    );
}

#[test]
fn next_location_follows_bends() {
    let g = grid(SQUARE);
    // `7` at (3,0) entered from the west leaves south into `|`.
    assert_eq!(
        g.next_location(Location::new(3, 0), Direction::West),
        Some((Location::new(3, 1), Direction::North))
    );
    // Wrong arrival side for `7`.
    assert_eq!(g.next_location(Location::new(3, 0), Direction::North), None);
    // Ground never transitions.
    assert_eq!(g.next_location(Location::new(0, 0), Direction::East), None);
}

#[test]
fn next_location_stops_at_border() {
    let g = grid("S-\n||\n");
    assert_eq!(g.next_location(Location::new(1, 0), Direction::West), None);
}

#[test]
fn next_location_requires_reciprocal_neighbour() {
    // `-` at (1,2) points east into `|`, which has no west opening.
    let g = grid("S-7\n|.|\nL-|\n");
    assert_eq!(g.next_location(Location::new(1, 2), Direction::West), None);
    assert!(find_loop(&g).is_none());
}

#[test]
fn square_loop() {
    let g = grid(SQUARE);
    let lp = find_loop(&g).expect("loop");
    assert_eq!(lp.len(), 8);
    assert_eq!(lp.start(), Location::new(1, 0));
    assert_eq!(lp.farthest_distance(), 4);
    assert_eq!(
        lp.vertices(),
        &[
            Location::new(1, 0),
            Location::new(1, 1),
            Location::new(1, 2),
            Location::new(2, 2),
            Location::new(3, 2),
            Location::new(3, 1),
            Location::new(3, 0),
            Location::new(2, 0),
        ]
    );
    assert_eq!(lp.arrivals()[0], Direction::East);
    assert_eq!(lp.arrivals()[1], Direction::North);
}

#[test]
fn winding_loop() {
    let g = grid(WINDING);
    let lp = find_loop(&g).expect("loop");
    assert_eq!(lp.len(), 16);
    assert_eq!(lp.farthest_distance(), 8);
}

#[test]
fn broken_loop_is_absent() {
    assert!(find_loop(&grid(BROKEN)).is_none());
}

#[test]
fn isolated_start_has_no_loop() {
    assert!(find_loop(&grid("...\n.S.\n...\n")).is_none());
    assert!(find_loop(&grid("S\n")).is_none());
}

#[test]
fn noise_around_loop_is_ignored() {
    let g = grid(NOISY);
    let lp = find_loop(&g).expect("loop");
    assert_eq!(lp.len(), 8);
    assert_eq!(lp.vertices()[1], Location::new(1, 2));
}

#[test]
fn probe_order_prefers_south_over_east() {
    let g = grid("S--7\n|..|\nL--J\n");
    let lp = find_loop(&g).unwrap();
    assert_eq!(lp.vertices()[1], Location::new(0, 1));
    assert_eq!(lp.vertices()[lp.len() - 1], Location::new(1, 0));
}

#[test]
fn loop_is_deterministic_and_closed() {
    for text in [SQUARE, WINDING, NOISY] {
        let g = grid(text);
        let a = find_loop(&g).unwrap();
        let b = find_loop(&g).unwrap();
        assert_eq!(a, b);

        let n = a.len();
        let last = a.vertices()[n - 1];
        assert_eq!(
            g.next_location(last, a.arrivals()[n - 1]),
            Some((a.start(), a.arrivals()[0]))
        );
        for i in 1..n - 1 {
            assert_eq!(
                g.next_location(a.vertices()[i], a.arrivals()[i]),
                Some((a.vertices()[i + 1], a.arrivals()[i + 1]))
            );
        }

        let mut seen = a.vertices().to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), n, "vertices are distinct");
    }
}

#[test]
fn dead_end_candidate_is_abandoned_for_the_next() {
    // North of the start is a `|` that runs off the grid; south closes.
    let g = grid(".|..\n.S-7\n.|.|\n.L-J\n");
    assert_eq!(
        g.enter(g.start(), Direction::North),
        Some((Location::new(1, 0), Direction::South))
    );
    assert_eq!(g.next_location(Location::new(1, 0), Direction::South), None);
    let lp = find_loop(&g).expect("loop via the south candidate");
    assert_eq!(lp.len(), 8);
    assert_eq!(lp.vertices()[1], Location::new(1, 2));
}

#[test]
fn reversed_loop_is_closed_walk() {
    let g = grid(WINDING);
    let lp = find_loop(&g).unwrap();
    let rev = lp.reversed();
    let n = rev.len();
    assert_eq!(n, lp.len());
    assert_eq!(rev.start(), lp.start());
    assert_eq!(rev.vertices()[1], lp.vertices()[n - 1]);
    for i in 1..n {
        let next = (i + 1) % n;
        assert_eq!(
            g.next_location(rev.vertices()[i], rev.arrivals()[i]),
            Some((rev.vertices()[next], rev.arrivals()[next]))
        );
    }
    assert_eq!(rev.reversed(), lp);
}

#[test]
fn render_blanks_non_loop_cells() {
    let g = grid(NOISY);
    let lp = find_loop(&g).unwrap();
    assert_eq!(lp.render(&g), ".....\n.S-7.\n.|.|.\n.L-J.\n.....\n");
}
