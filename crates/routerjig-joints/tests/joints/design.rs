use routerjig_joints::{
    Board, Cut, DesignError, JointDesign, JointParams, Margins, RouterBit, Spacing, SpacingConfig,
    SpacingKind, SpacingParams, SpacingStrategy, Units,
};

fn design(width: i32) -> JointDesign {
    let units = Units::default();
    JointDesign::new(
        &SpacingConfig::new(units),
        units,
        RouterBit::new(16, 24, 0.0).unwrap(),
        Board::new(width, 32, 24).unwrap(),
        Margins::default(),
    )
    .unwrap()
}

fn bounds(design: &JointDesign) -> Vec<(i32, i32)> {
    design.spacing().cuts().iter().map(Cut::bounds).collect()
}

#[test]
fn test_params_json_round_trip() {
    let mut design = design(240);
    if let Spacing::Equal(equal) = design.spacing_mut() {
        equal.set_width(24).unwrap();
        equal.set_centered(false).unwrap();
    }
    let json = design.params().to_json().unwrap();
    assert!(json.contains("\"type\": \"equal\""));

    let params = JointParams::from_json(&json).unwrap();
    let restored = JointDesign::from_params(&params, design.config(), Margins::default()).unwrap();
    assert_eq!(bounds(&restored), bounds(&design));
    assert_eq!(restored.params(), design.params());
}

#[test]
fn test_edited_cuts_persist() {
    let mut design = design(240);
    design.select_spacing(SpacingKind::Edit, false).unwrap();
    let editor = design.editor().unwrap();
    editor.cut_widen_left();
    assert!(editor.changes_made());
    let edited = bounds(&design);

    let params = design.params();
    assert!(matches!(params.spacing, SpacingParams::Edit { .. }));
    let restored =
        JointDesign::from_params(&params, &SpacingConfig::default(), Margins::default()).unwrap();
    assert_eq!(restored.kind(), SpacingKind::Edit);
    assert_eq!(bounds(&restored), edited);
}

#[test]
fn test_edit_seeded_from_current_strategy() {
    let mut design = design(240);
    design.select_spacing(SpacingKind::Variable, false).unwrap();
    let variable = bounds(&design);
    design.select_spacing(SpacingKind::Edit, false).unwrap();
    assert_eq!(bounds(&design), variable);

    // leaving an untouched editor needs no confirmation
    design.select_spacing(SpacingKind::Equal, false).unwrap();
    assert_eq!(design.kind(), SpacingKind::Equal);
}

#[test]
fn test_leaving_editor_with_changes() {
    let mut design = design(240);
    design.select_spacing(SpacingKind::Edit, false).unwrap();
    design.editor().unwrap().cut_widen_left();
    let edited = bounds(&design);

    let err = design.select_spacing(SpacingKind::Equal, false).unwrap_err();
    assert!(matches!(err, DesignError::UnsavedEdits));
    assert!(err.to_string().contains("discard"));
    assert_eq!(bounds(&design), edited);

    design.select_spacing(SpacingKind::Equal, true).unwrap();
    assert_ne!(bounds(&design), edited);
}

#[test]
fn test_dimension_change_rebuilds_spacing() {
    let mut design = design(240);
    design.select_spacing(SpacingKind::Variable, false).unwrap();
    let before = bounds(&design);
    design.set_bit_width_from_str("3/4").unwrap();
    assert_eq!(design.bit().width(), 24);
    assert_eq!(design.kind(), SpacingKind::Variable);
    assert_ne!(bounds(&design), before);

    let err = design.set_bit_width(23).unwrap_err();
    assert!(err.to_string().contains("must be even"));
    assert_eq!(design.bit().width(), 24);

    design.set_bit_angle(9.0).unwrap();
    assert_eq!(design.bit().offset(), 4);
    assert!(design.geometry().is_ok());
}

#[test]
fn test_reinit_resets_sliders() {
    let mut design = design(240);
    let defaults = bounds(&design);
    if let Spacing::Equal(equal) = design.spacing_mut() {
        equal.set_spacing(30).unwrap();
    }
    assert_ne!(bounds(&design), defaults);
    design.reinit_spacing().unwrap();
    assert_eq!(bounds(&design), defaults);
}

#[test]
fn test_design_file_with_zero_resolution_rejected() {
    let json = design(240)
        .params()
        .to_json()
        .unwrap()
        .replace("\"increments_per_inch\": 32", "\"increments_per_inch\": 0");
    assert!(json.contains("\"increments_per_inch\": 0"));
    let params = JointParams::from_json(&json).unwrap();

    let err = JointDesign::from_params(&params, &SpacingConfig::default(), Margins::default())
        .unwrap_err();
    assert!(matches!(err, DesignError::Joint(e) if e.is_configuration_error()));
}
