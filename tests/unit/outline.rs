use super::*;

#[test]
fn parses_compact_and_spaced_forms_alike() {
    let a = Outline::parse("M10,20L30,40Q1,2,3,4Z");
    let b = Outline::parse("M 10 20 L 30, 40 Q1 2,3 4 Z");
    assert_eq!(a, b);
    assert_eq!(a.len(), 4);
    assert_eq!(a.commands()[0].tag, CommandTag::MoveTo);
    assert_eq!(a.commands()[2].current.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    assert!(a.commands()[3].is_close());
    assert!(a.commands().iter().all(DrawCommand::is_well_formed));
}

#[test]
fn base_and_current_start_equal() {
    let o = Outline::parse("M1.5,-2L3e1,4");
    for cmd in o.commands() {
        assert_eq!(cmd.current, cmd.base);
    }
    assert_eq!(o.commands()[1].current.as_slice(), &[30.0, 4.0]);
}

#[test]
fn malformed_tokens_are_dropped_not_fatal() {
    let o = Outline::parse("M10,abc,20L5,,6,x Z");
    assert_eq!(o.len(), 3);
    assert_eq!(o.commands()[0].current.as_slice(), &[10.0, 20.0]);
    assert_eq!(o.commands()[1].current.as_slice(), &[5.0, 6.0]);
}

#[test]
fn relative_commands_keep_their_case() {
    let o = Outline::parse("m1,2l3,4z");
    assert!(o.commands().iter().all(|c| c.relative));
    assert_eq!(o.serialize(), "m1,2l3,4z");
}

#[test]
fn empty_description_is_an_empty_outline() {
    let o = Outline::parse("");
    assert!(o.is_empty());
    assert_eq!(o.serialize(), "");
    assert_eq!(o.subpath_count(), 0);
    assert!(o.bounds().is_none());
}

#[test]
fn serialize_is_idempotent_after_reparse() {
    let original = Outline::new(vec![
        DrawCommand::new(CommandTag::MoveTo, &[0.1, 0.2]),
        DrawCommand::new(CommandTag::QuadTo, &[1.0 / 3.0, 2.0, -4.25, 1e-7]),
        DrawCommand::close(),
    ]);
    let once = original.serialize();
    let twice = Outline::parse(&once).serialize();
    assert_eq!(once, twice);
    assert_eq!(Outline::parse(&once), original);
}

#[test]
fn serialize_emits_current_not_base() {
    let mut o = Outline::parse("M0,0L10,0Z");
    o.commands_mut()[1].current[0] = 12.5;
    assert_eq!(o.serialize(), "M0,0L12.5,0Z");
    assert_eq!(o.at_rest().serialize(), "M0,0L10,0Z");
}

#[test]
fn bez_path_resolves_relative_commands() {
    let o = Outline::parse("M10,10l5,0l0,5z");
    let r = o.bounds().unwrap();
    assert_eq!(r, Rect::new(10.0, 10.0, 15.0, 15.0));
}

#[test]
fn subpaths_are_counted_by_moves() {
    let o = Outline::parse("M0,0L1,0L1,1ZM5,5L6,5L6,6Z");
    assert_eq!(o.subpath_count(), 2);
}
