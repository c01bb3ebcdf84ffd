use super::*;

#[test]
fn screen_mapping_rescales_by_element_size() {
    let vp = Viewport::new(200.0, 100.0);
    let element = Rect::new(50.0, 20.0, 150.0, 70.0);

    let p = vp.map_from_screen(Point::new(50.0, 20.0), element).unwrap();
    assert_eq!(p, Point::new(0.0, 0.0));

    let p = vp.map_from_screen(Point::new(100.0, 45.0), element).unwrap();
    assert!((p.x - 100.0).abs() < 1e-9);
    assert!((p.y - 50.0).abs() < 1e-9);
}

#[test]
fn screen_mapping_rejects_degenerate_elements() {
    let vp = Viewport::new(200.0, 100.0);
    assert!(
        vp.map_from_screen(Point::new(1.0, 1.0), Rect::new(0.0, 0.0, 0.0, 10.0))
            .is_none()
    );
    assert!(
        vp.map_from_screen(Point::new(1.0, 1.0), Rect::new(0.0, 0.0, 10.0, 0.0))
            .is_none()
    );
}

#[test]
fn fallback_is_the_default() {
    assert_eq!(Viewport::default(), Viewport::FALLBACK);
    assert_eq!(Viewport::FALLBACK.rect().width(), 100.0);
}
