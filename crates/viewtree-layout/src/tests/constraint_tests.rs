use super::*;

#[test]
fn make_accepts_every_known_mode() {
    assert_eq!(
        Constraint::make(10, 0),
        Ok(Constraint::new(10, MeasureMode::Unspecified))
    );
    assert_eq!(Constraint::make(10, 1), Ok(Constraint::exactly(10)));
    assert_eq!(Constraint::make(10, 2), Ok(Constraint::at_most(10)));
}

#[test]
fn make_rejects_unknown_mode() {
    let err = Constraint::make(100, 99).unwrap_err();
    assert_eq!(err, ConstraintError::InvalidArgument { mode: 99 });
    assert!(err.to_string().contains("invalid argument"));
    assert!(Constraint::make(100, -1).is_err());
}

#[test]
fn accessors_return_what_was_stored() {
    let constraint = Constraint::at_most(1920);
    assert_eq!(constraint.size(), 1920);
    assert_eq!(constraint.mode(), MeasureMode::AtMost);
    assert!(constraint.is_bounded());
    assert!(!Constraint::unspecified(1920).is_bounded());
}

#[test]
fn pack_uses_top_bits_for_mode() {
    assert_eq!(Constraint::exactly(1080).pack(), (1 << 30) | 1080);
    assert_eq!(Constraint::at_most(5).pack(), (2 << 30) | 5);
    assert_eq!(
        Constraint::unpack((2 << 30) | 3000),
        Ok(Constraint::at_most(3000))
    );
}

#[test]
fn pack_truncates_oversized_values() {
    let packed = Constraint::exactly(u32::MAX).pack();
    let unpacked = Constraint::unpack(packed).unwrap();
    assert_eq!(unpacked.size(), MAX_PACKED_SIZE);
    assert_eq!(unpacked.mode(), MeasureMode::Exactly);
}

#[test]
fn unpack_rejects_reserved_mode_bits() {
    assert_eq!(
        Constraint::unpack(3 << 30),
        Err(ConstraintError::InvalidArgument { mode: 3 })
    );
}

#[test]
fn display_matches_measure_spec_format() {
    assert_eq!(
        Constraint::exactly(1080).to_string(),
        "MeasureSpec: [1080, EXACTLY]"
    );
    assert_eq!(
        Constraint::at_most(600).to_string(),
        "MeasureSpec: [600, AT_MOST]"
    );
    assert_eq!(
        Constraint::unspecified(0).to_string(),
        "MeasureSpec: [0, UNSPECIFIED]"
    );
}
