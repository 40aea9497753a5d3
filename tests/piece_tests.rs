use std::collections::HashSet;

use blockfall::constants::{BOARD_WIDTH, SPAWN_X, SPAWN_Y};
use blockfall::game::piece::{def, pick_random, ActivePiece, PieceKind};
use blockfall::game::{Shape, CATALOG};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn cells(shape: &Shape) -> HashSet<(i32, i32)> {
    shape.cells().collect()
}

/// Normalize to the bounding box origin so orientations can be compared.
fn normalized(shape: &Shape) -> Vec<(i32, i32)> {
    let cells: Vec<_> = shape.cells().collect();
    let min_x = cells.iter().map(|c| c.0).min().unwrap();
    let min_y = cells.iter().map(|c| c.1).min().unwrap();
    let mut out: Vec<_> = cells.iter().map(|(x, y)| (x - min_x, y - min_y)).collect();
    out.sort();
    out
}

fn is_connected(shape: &Shape) -> bool {
    let all = cells(shape);
    let start = *all.iter().next().unwrap();
    let mut seen = HashSet::from([start]);
    let mut stack = vec![start];
    while let Some((x, y)) = stack.pop() {
        for n in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
            if all.contains(&n) && seen.insert(n) {
                stack.push(n);
            }
        }
    }
    seen.len() == all.len()
}

#[test]
fn catalog_has_seven_distinct_kinds() {
    assert_eq!(CATALOG.len(), 7);
    let kinds: Vec<_> = CATALOG.iter().map(|p| p.kind).collect();
    for (i, kind) in kinds.iter().enumerate() {
        assert!(!kinds[i + 1..].contains(kind), "{kind:?} listed twice");
    }
}

#[test]
fn every_catalog_shape_is_a_tetromino() {
    for piece in CATALOG.iter() {
        assert_eq!(piece.shape.cell_count(), 4, "{:?}", piece.kind);
        assert!(is_connected(&piece.shape), "{:?} is not connected", piece.kind);
    }
}

#[test]
fn catalog_shapes_are_distinct_up_to_rotation() {
    let mut orientations: Vec<HashSet<Vec<(i32, i32)>>> = Vec::new();
    for piece in CATALOG.iter() {
        let mut set = HashSet::new();
        let mut shape = piece.shape;
        for _ in 0..4 {
            set.insert(normalized(&shape));
            shape = shape.rotate_clockwise();
        }
        assert!(
            orientations.iter().all(|other| other.is_disjoint(&set)),
            "{:?} duplicates another piece",
            piece.kind
        );
        orientations.push(set);
    }
}

#[test]
fn def_looks_up_by_kind() {
    use PieceKind::*;
    for kind in [I, O, Z, S, L, J, T] {
        assert_eq!(def(kind).kind, kind);
    }
}

#[test]
fn rotate_moves_cells_clockwise() {
    // (x, y) -> (3 - y, x)
    let i = def(PieceKind::I).shape.rotate_clockwise();
    assert_eq!(cells(&i), HashSet::from([(3, 0), (3, 1), (3, 2), (3, 3)]));

    let o = def(PieceKind::O).shape.rotate_clockwise();
    assert_eq!(cells(&o), HashSet::from([(2, 0), (3, 0), (2, 1), (3, 1)]));
}

#[test]
fn four_rotations_are_identity() {
    for piece in CATALOG.iter() {
        let turned = piece
            .shape
            .rotate_clockwise()
            .rotate_clockwise()
            .rotate_clockwise()
            .rotate_clockwise();
        assert_eq!(turned, piece.shape, "{:?}", piece.kind);
    }
}

#[test]
fn counter_clockwise_undoes_clockwise() {
    for piece in CATALOG.iter() {
        assert_eq!(piece.shape.rotate_clockwise().rotate_counter_clockwise(), piece.shape);
    }
}

#[test]
fn rotation_keeps_the_cell_count() {
    for piece in CATALOG.iter() {
        assert_eq!(piece.shape.rotate_clockwise().cell_count(), 4);
    }
}

#[test]
fn spawn_position() {
    assert_eq!(SPAWN_X, BOARD_WIDTH as i32 / 2 - 2);
    let piece = ActivePiece::spawn(def(PieceKind::T));
    assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
    assert_eq!(piece.color, def(PieceKind::T).color);

    let absolute: HashSet<_> = piece.cells().collect();
    assert_eq!(absolute, HashSet::from([(3, 0), (4, 0), (5, 0), (4, 1)]));
}

#[test]
fn pick_random_reaches_every_entry() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen = HashSet::new();
    for _ in 0..500 {
        seen.insert(pick_random(&mut rng).kind as usize);
    }
    assert_eq!(seen.len(), CATALOG.len());
}

#[test]
fn pick_random_is_repeatable_for_a_seed() {
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        assert_eq!(pick_random(&mut a).kind, pick_random(&mut b).kind);
    }
}
