use routerjig_joints::{
    Board, Cut, EditSpacing, Editable, RouterBit, SpacingConfig, SpacingKind, SpacingParams,
    SpacingStrategy, Units, VariableSpacing,
};

fn bounds<S: SpacingStrategy>(spacing: &S) -> Vec<(i32, i32)> {
    spacing.cuts().iter().map(Cut::bounds).collect()
}

fn seeded(config: &SpacingConfig) -> EditSpacing {
    let bit = RouterBit::new(16, 32, 0.0).unwrap();
    let board = Board::with_width(120).unwrap();
    let variable = VariableSpacing::new(&bit, &board, config).unwrap();
    EditSpacing::new(&bit, &board, config, variable.cuts()).unwrap()
}

#[test]
fn test_seeded_from_variable() {
    let edit = seeded(&SpacingConfig::default());
    assert_eq!(edit.kind(), SpacingKind::Edit);
    assert_eq!(bounds(&edit), vec![(16, 42), (78, 104)]);
    assert!(!edit.changes_made());
}

#[test]
fn test_edit_session() {
    let mut edit = seeded(&SpacingConfig::default());

    edit.cut_increment_cursor(1);
    assert_eq!(edit.cut_toggle(), "Cut 1 active");
    edit.cut_widen_left();
    assert_eq!(bounds(&edit), vec![(15, 42), (77, 104)]);
    edit.cut_trim_right();
    assert_eq!(bounds(&edit), vec![(15, 41), (77, 103)]);
    assert!(edit.changes_made());

    for _ in 0..4 {
        assert_eq!(edit.undo(), "Undo");
    }
    assert_eq!(bounds(&edit), vec![(16, 42), (78, 104)]);
    assert_eq!(edit.state().active(), &[true, false]);
    assert_eq!(edit.undo(), "Nothing to undo");
}

#[test]
fn test_undo_depth_is_bounded() {
    let config = SpacingConfig {
        undo_depth: 2,
        ..SpacingConfig::new(Units::default())
    };
    let mut edit = seeded(&config);
    edit.cut_move_right();
    edit.cut_move_right();
    edit.cut_move_right();
    assert_eq!(bounds(&edit)[0], (19, 45));

    assert_eq!(edit.undo(), "Undo");
    assert_eq!(edit.undo(), "Undo");
    assert_eq!(edit.undo(), "Nothing to undo");
    assert_eq!(bounds(&edit)[0], (17, 43));
    assert!(edit.changes_made());
}

#[test]
fn test_add_fills_first_wide_gap() {
    let bit = RouterBit::new(16, 32, 0.0).unwrap();
    let board = Board::with_width(240).unwrap();
    let config = SpacingConfig::default();
    let variable = VariableSpacing::with_fingers(&bit, &board, &config, 2).unwrap();
    let mut edit = EditSpacing::new(&bit, &board, &config, variable.cuts()).unwrap();
    assert_eq!(bounds(&edit), vec![(16, 72), (168, 224)]);

    // the edge gaps are only one bit wide, so the cut goes in the middle
    assert_eq!(edit.cut_add(), "Added cut 1");
    assert_eq!(bounds(&edit), vec![(16, 72), (112, 128), (168, 224)]);
    assert_eq!(edit.state().cursor(), 1);
    assert_eq!(edit.state().active(), &[false, true, false]);
    assert_eq!(
        edit.params(),
        SpacingParams::Edit {
            cuts: vec![(16, 72), (112, 128), (168, 224)]
        }
    );

    // now every gap is too narrow
    let msg = edit.cut_add();
    assert!(msg.starts_with("Unable to add"));
    assert_eq!(edit.cuts().len(), 3);
}

#[test]
fn test_move_into_neighbor_refused() {
    let bit = RouterBit::new(16, 32, 0.0).unwrap();
    let board = Board::with_width(120).unwrap();
    let seed = [Cut::new(0, 20), Cut::new(36, 60)];
    let mut edit = EditSpacing::new(&bit, &board, &SpacingConfig::default(), &seed).unwrap();
    edit.cut_increment_cursor(1);
    edit.cut_all_not_active();
    edit.cut_toggle();

    let msg = edit.cut_move_left();
    assert!(msg.starts_with("Unable to move left"), "{msg}");
    assert_eq!(bounds(&edit), vec![(0, 20), (36, 60)]);
}

#[test]
fn test_reseed_clears_history() {
    let mut edit = seeded(&SpacingConfig::default());
    edit.cut_move_left();
    assert!(edit.can_undo());
    edit.reseed(&[Cut::new(0, 40), Cut::new(80, 120)]).unwrap();
    assert!(!edit.can_undo());
    assert!(!edit.changes_made());
    assert!(edit.reseed(&[Cut::new(10, 15)]).is_err());
    assert_eq!(bounds(&edit), vec![(0, 40), (80, 120)]);
}
