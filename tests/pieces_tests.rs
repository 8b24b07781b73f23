//! Piece catalog and mask rotation tests

use blockfall::core::{mask_of, Mask};
use blockfall::types::PieceKind;
use proptest::prelude::*;

#[test]
fn test_catalog_has_seven_four_cell_masks() {
    for kind in PieceKind::ALL {
        assert_eq!(mask_of(kind).cells().count(), 4, "{kind:?}");
    }
}

#[test]
fn test_catalog_masks_match_reference_shapes() {
    // Spot checks against the canonical table.
    let i_cells: Vec<(usize, usize)> = mask_of(PieceKind::I).cells().collect();
    assert_eq!(i_cells, vec![(2, 0), (2, 1), (2, 2), (2, 3)]);

    let t_cells: Vec<(usize, usize)> = mask_of(PieceKind::T).cells().collect();
    assert_eq!(t_cells, vec![(1, 1), (0, 2), (1, 2), (2, 2)]);

    let l_cells: Vec<(usize, usize)> = mask_of(PieceKind::L).cells().collect();
    assert_eq!(l_cells, vec![(2, 1), (0, 2), (1, 2), (2, 2)]);
}

#[test]
fn test_catalog_masks_are_distinct() {
    for a in PieceKind::ALL {
        for b in PieceKind::ALL {
            if a != b {
                assert_ne!(mask_of(a), mask_of(b), "{a:?} vs {b:?}");
            }
        }
    }
}

#[test]
fn test_rotation_formula() {
    // rotated[col][3 - row] = mask[row][col]
    let mask = Mask::from_rows([
        [1, 1, 0, 0],
        [0, 1, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]);
    let rotated = mask.rotated_cw();
    assert!(rotated.is_occupied(3, 0));
    assert!(rotated.is_occupied(3, 1));
    assert!(rotated.is_occupied(2, 1));
    assert_eq!(rotated.cells().count(), 3);
}

proptest! {
    #[test]
    fn prop_four_rotations_are_identity(
        rows in proptest::array::uniform4(proptest::array::uniform4(0u8..=1)),
    ) {
        let mask = Mask::from_rows(rows);
        let back = mask.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
        prop_assert_eq!(back, mask);
    }

    #[test]
    fn prop_rotation_preserves_cell_count(
        rows in proptest::array::uniform4(proptest::array::uniform4(0u8..=1)),
    ) {
        let mask = Mask::from_rows(rows);
        prop_assert_eq!(mask.rotated_cw().cells().count(), mask.cells().count());
    }
}
