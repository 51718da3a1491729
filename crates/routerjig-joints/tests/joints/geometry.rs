use routerjig_joints::{
    Board, EqualSpacing, IncraTemplate, JointGeometry, Margins, Point, RouterBit, SpacingConfig,
    SpacingStrategy, Units, VariableSpacing,
};

fn ys(points: &[Point]) -> Vec<i32> {
    let mut ys: Vec<i32> = points.iter().map(|p| p.y).collect();
    ys.sort_unstable();
    ys.dedup();
    ys
}

#[test]
fn test_dovetail_outlines() {
    let units = Units::default();
    let bit = RouterBit::new(16, 24, 9.0).unwrap();
    let board = Board::new(240, 48, 24).unwrap();
    let config = SpacingConfig::new(units);
    let spacing = VariableSpacing::new(&bit, &board, &config).unwrap();
    let template = IncraTemplate::new(&board, &units);
    let margins = Margins::default();
    let geom = JointGeometry::new(template, &board, &bit, &spacing, margins).unwrap();

    let b = geom.board_b();
    assert_eq!(ys(geom.outline_b()), vec![b.y_bottom(), b.y_top() - 24, b.y_top()]);
    let a = geom.board_a();
    assert_eq!(ys(geom.outline_a()), vec![a.y_bottom(), a.y_bottom() + 24, a.y_top()]);
    assert_eq!(a.y_bottom(), b.y_top() + margins.sep);

    for outline in [geom.outline_a(), geom.outline_b()] {
        assert_eq!(outline.first(), outline.last());
        assert!(outline
            .iter()
            .all(|p| p.x >= b.x_left() && p.x <= b.x_right()));
    }
}

#[test]
fn test_cuts_carry_passes() {
    let units = Units::default();
    let bit = RouterBit::new(16, 32, 0.0).unwrap();
    let board = Board::with_width(240).unwrap();
    let spacing = EqualSpacing::new(&bit, &board, &SpacingConfig::new(units)).unwrap();
    let geom = JointGeometry::new(
        IncraTemplate::new(&board, &units),
        &board,
        &bit,
        &spacing,
        Margins::default(),
    )
    .unwrap();

    assert_eq!(geom.a_cuts().len(), spacing.cuts().len());
    assert!(spacing.cuts().iter().all(|c| c.passes().is_empty()));
    for cut in geom.a_cuts().iter().chain(geom.b_cuts()) {
        assert_eq!(cut.mid_pass().is_some(), !cut.passes().is_empty());
    }
    // cuts stay relative to the board, only the boards are shifted
    assert_eq!(geom.b_cuts()[0].left, 0);
    assert_eq!(geom.board_b().x_left(), geom.board_t().x_left);
}

#[test]
fn test_geometry_serializes() {
    let units = Units::default();
    let bit = RouterBit::new(16, 32, 0.0).unwrap();
    let board = Board::with_width(120).unwrap();
    let spacing = EqualSpacing::new(&bit, &board, &SpacingConfig::new(units)).unwrap();
    let geom = JointGeometry::new(
        IncraTemplate::new(&board, &units),
        &board,
        &bit,
        &spacing,
        Margins::default(),
    )
    .unwrap();

    let json = serde_json::to_value(&geom).unwrap();
    assert_eq!(json["a_cuts"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["a_cuts"][1]["passes"][0], 28);
    assert_eq!(json["rect_t"]["width"], 184);
}
