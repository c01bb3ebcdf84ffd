use super::*;

struct NoMetrics;

impl TextMetrics for NoMetrics {
    fn advance_width(&mut self, _ch: char, _font: &str, _font_size: f64) -> Option<f64> {
        None
    }
}

#[test]
fn two_letters_concatenate_in_order() {
    let out = layout_text("AB", "Arial", 72.0, &mut ApproxMetrics::new());
    assert_eq!(out.letters.len(), 2);
    assert_eq!(out.full, format!("{}{}", out.letters[0], out.letters[1]));
}

#[test]
fn cursor_advances_by_measured_width() {
    let mut m = ApproxMetrics::new();
    let out = layout_text("AB", "Arial", 72.0, &mut m);
    let a_width = m.advance_width('A', "Arial", 72.0).unwrap();
    let b_width = m.advance_width('B', "Arial", 72.0).unwrap();

    let expect_b = outline_for('B', GlyphBox::new(LEFT_MARGIN + a_width, 82.0, b_width, 72.0));
    assert_eq!(out.letters[1], expect_b);
    assert!((out.text_width - (a_width + b_width)).abs() < 1e-9);
    assert_eq!(out.baseline, 82.0);
    assert!((out.viewport.width - (a_width + b_width + VIEWPORT_MARGIN)).abs() < 1e-9);
    assert_eq!(out.viewport.height, 92.0);
}

#[test]
fn spaces_keep_their_slot_but_draw_nothing() {
    let out = layout_text("a b", "Arial", 40.0, &mut ApproxMetrics::new());
    assert_eq!(out.letters.len(), 3);
    assert!(out.letters[1].is_empty());

    let spaces = layout_text("   ", "Arial", 40.0, &mut ApproxMetrics::new());
    assert!(!spaces.has_outline());
    assert_eq!(spaces.to_base().full.subpath_count(), 0);
    assert!(spaces.viewport.width > VIEWPORT_MARGIN);
}

#[test]
fn layout_is_deterministic() {
    let a = layout_text("Hello, World!", "Arial", 72.0, &mut ApproxMetrics::new());
    let b = layout_text("Hello, World!", "Arial", 72.0, &mut ApproxMetrics::new());
    assert_eq!(a, b);
    assert_eq!(a.to_base(), b.to_base());
}

#[test]
fn missing_metrics_degrade_to_empty_layout() {
    let out = layout_text("Hello", "Arial", 72.0, &mut NoMetrics);
    assert!(!out.has_outline());
    assert!(out.letters.is_empty());
    assert_eq!(out.viewport, Viewport::FALLBACK);
}

#[test]
fn empty_text_has_margin_only_viewport() {
    let out = layout_text("", "Arial", 72.0, &mut ApproxMetrics::new());
    assert!(!out.has_outline());
    assert_eq!(out.viewport, Viewport::new(VIEWPORT_MARGIN, 92.0));
}
