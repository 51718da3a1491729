use routerjig_joints::{validate_cut_sequence, Board, Cut, GeometryError, RouterBit};

fn bit() -> RouterBit {
    RouterBit::new(16, 32, 0.0).unwrap()
}

#[test]
fn test_wide_interior_cut_walks_both_ways() {
    let board = Board::with_width(200).unwrap();
    let mut cut = Cut::new(50, 110);
    cut.make_router_passes(&bit(), &board).unwrap();
    // middle window [72, 88], then out to 50 on the left and 110 on the right
    assert_eq!(cut.mid_pass(), Some(80));
    assert_eq!(cut.passes(), &[58, 64, 80, 96, 102]);
}

#[test]
fn test_passes_sorted_and_cover_cut() {
    let bit = bit();
    let board = Board::with_width(300).unwrap();
    for (left, right) in [(0, 17), (0, 300), (31, 47), (40, 133), (250, 300), (283, 300)] {
        let cut = Cut::new(left, right).with_router_passes(&bit, &board).unwrap();
        let passes = cut.passes();
        assert!(passes.windows(2).all(|w| w[0] <= w[1]));
        assert!(passes.windows(2).all(|w| w[1] - w[0] <= bit.width()));
        let first = passes[0];
        let last = passes[passes.len() - 1];
        assert!(first - bit.halfwidth() <= left, "cut [{left}, {right}]");
        assert!(last + bit.halfwidth() >= right, "cut [{left}, {right}]");
    }
}

#[test]
fn test_with_router_passes_leaves_input_untouched() {
    let board = Board::with_width(100).unwrap();
    let cut = Cut::new(20, 60);
    let with = cut.with_router_passes(&bit(), &board).unwrap();
    assert!(cut.passes().is_empty());
    assert_eq!(with.bounds(), cut.bounds());
    assert_eq!(with.passes(), &[28, 40, 52]);
}

#[test]
fn test_failed_passes_keep_previous() {
    let mut board = Board::with_width(100).unwrap();
    let mut cut = Cut::new(80, 100);
    cut.make_router_passes(&bit(), &board).unwrap();
    let before = cut.passes().to_vec();

    board.set_width(120).unwrap();
    // no longer on the edge, recentered as an interior cut
    cut.make_router_passes(&bit(), &board).unwrap();
    assert_eq!(before, vec![88, 92]);
    assert_eq!(cut.passes(), &[88, 90, 92]);

    board.set_width(90).unwrap();
    let err = cut.make_router_passes(&bit(), &board).unwrap_err();
    assert!(matches!(err, GeometryError::RightOutOfBounds { board_width: 90, .. }));
    assert_eq!(cut.passes(), &[88, 90, 92]);
}

#[test]
fn test_sequence_errors_name_offender() {
    let board = Board::with_width(100).unwrap();
    let cuts = [Cut::new(0, 20), Cut::new(40, 60), Cut::new(55, 80)];
    let err = validate_cut_sequence(&cuts, &bit(), &board).unwrap_err();
    assert_eq!(
        err,
        GeometryError::Overlap {
            index: 2,
            left: 55,
            previous: 1,
            previous_right: 60
        }
    );
}

#[test]
fn test_narrow_edge_cuts_overhang_board() {
    let bit = bit();
    let board = Board::with_width(100).unwrap();

    // a single pass, with the bit hanging past the board edge
    let left = Cut::new(0, 5).with_router_passes(&bit, &board).unwrap();
    assert_eq!(left.passes(), &[-3]);
    assert_eq!(left.mid_pass(), Some(-3));

    let right = Cut::new(95, 100).with_router_passes(&bit, &board).unwrap();
    assert_eq!(right.passes(), &[103]);

    // a narrow interior cut is still rejected
    assert!(Cut::new(40, 45).with_router_passes(&bit, &board).is_err());
}
