use routerjig_joints::{
    adjoining_cuts, validate_joint, Board, ConfigurationError, Cut, EqualSpacing, GeometryError,
    RouterBit, SpacingConfig, SpacingStrategy,
};

fn footprints_within(cut: &Cut, bit: &RouterBit, lo: i32, hi: i32) -> bool {
    cut.passes()
        .iter()
        .all(|p| p - bit.halfwidth() >= lo && p + bit.halfwidth() <= hi)
}

#[test]
fn test_full_width_cut_passes() {
    let bit = RouterBit::new(16, 32, 0.0).unwrap();
    let board = Board::with_width(100).unwrap();
    let mut cut = Cut::new(0, 100);
    cut.make_router_passes(&bit, &board).unwrap();

    assert_eq!(cut.passes(), &[8, 12, 28, 44, 60, 76, 92]);
    assert_eq!(cut.mid_pass(), Some(92));
    assert!(footprints_within(&cut, &bit, 0, 100));
}

#[test]
fn test_dovetail_offset_and_neck() {
    let bit = RouterBit::new(16, 24, 9.0).unwrap();
    assert_eq!(bit.offset(), 4);
    assert_eq!(bit.neck(), 16 - 8);

    let bit = RouterBit::new(24, 24, 9.0).unwrap();
    assert_eq!(bit.neck(), 24 - 8);
}

#[test]
fn test_centered_equal_spacing_symmetric() {
    let bit = RouterBit::new(16, 32, 0.0).unwrap();
    let board = Board::with_width(120).unwrap();
    let equal = EqualSpacing::new(&bit, &board, &SpacingConfig::default()).unwrap();
    let cuts = equal.cuts();

    assert_eq!(cuts.len(), 5);
    for pair in cuts.windows(2) {
        assert!(pair[1].left > pair[0].right);
    }
    for (a, b) in cuts.iter().zip(cuts.iter().rev()) {
        assert_eq!(a.left - 60, 60 - b.right);
    }
}

#[test]
fn test_narrow_interior_cut_rejected() {
    let bit = RouterBit::new(16, 32, 0.0).unwrap();
    let board = Board::with_width(100).unwrap();
    let mut cut = Cut::new(10, 15);
    let err = cut.make_router_passes(&bit, &board).unwrap_err();
    assert!(matches!(err, GeometryError::BitTooWide { bit_width: 16, .. }));
    assert!(err.to_string().contains("Bit width too large for this cut"));
}

#[test]
fn test_odd_bit_width_rejected() {
    let err = RouterBit::new(17, 32, 0.0).unwrap_err();
    assert_eq!(err, ConfigurationError::OddBitWidth { width: 17 });
    assert!(err.to_string().contains("must be even"));
}

#[test]
fn test_adjoining_of_symmetric_layout_is_symmetric() {
    for (width, angle) in [(16, 0.0), (16, 9.0), (24, 7.0)] {
        let bit = RouterBit::new(width, 24, angle).unwrap();
        let board = Board::with_width(240).unwrap();
        let equal = EqualSpacing::new(&bit, &board, &SpacingConfig::default()).unwrap();
        let b_cuts = adjoining_cuts(equal.cuts(), &bit, &board).unwrap();
        for (a, b) in b_cuts.iter().zip(b_cuts.iter().rev()) {
            assert_eq!(a.left, 240 - b.right, "bit {width} at {angle} degrees");
        }
    }
}

#[test]
fn test_single_cut_narrower_board() {
    let bit = RouterBit::new(16, 32, 0.0).unwrap();
    for width in [10, 12, 16] {
        let board = Board::with_width(width).unwrap();
        let mut cut = Cut::new(0, width);
        cut.make_router_passes(&bit, &board).unwrap();
        assert_eq!(cut.passes().len(), 1, "board width {width}");
    }

    let board = Board::with_width(50).unwrap();
    let mut cut = Cut::new(0, 50);
    cut.make_router_passes(&bit, &board).unwrap();
    assert!(cut.passes().len() > 1);
    assert!(footprints_within(&cut, &bit, 0, 50));
}

#[test]
fn test_revalidation_is_stable() {
    let bit = RouterBit::new(16, 24, 9.0).unwrap();
    let board = Board::with_width(240).unwrap();
    let equal = EqualSpacing::new(&bit, &board, &SpacingConfig::default()).unwrap();
    for _ in 0..3 {
        assert!(validate_joint(equal.cuts(), &bit, &board).is_ok());
    }

    let mut cut = equal.cuts()[1].clone();
    cut.make_router_passes(&bit, &board).unwrap();
    let first = cut.passes().to_vec();
    cut.make_router_passes(&bit, &board).unwrap();
    assert_eq!(cut.passes(), first.as_slice());
}
