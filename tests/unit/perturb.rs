use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::glyph::{GlyphBox, outline_for};

fn sample() -> Outline {
    Outline::parse(&outline_for('B', GlyphBox::new(10.0, 82.0, 48.0, 72.0)))
}

#[test]
fn jitter_stays_within_intensity_of_base() {
    let base = sample();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let out = jitter(&base, 1.5, &mut rng);
        assert_eq!(out.len(), base.len());
        for (cmd, orig) in out.commands().iter().zip(base.commands()) {
            assert_eq!(cmd.base, orig.base);
            assert_eq!(cmd.tag, orig.tag);
            for (c, b) in cmd.current.iter().zip(&cmd.base) {
                assert!((c - b).abs() <= 1.5 + 1e-9);
            }
        }
    }
}

#[test]
fn jitter_is_not_cumulative() {
    let base = sample();
    let mut rng = StdRng::seed_from_u64(1);
    let mut out = base.clone();
    for _ in 0..50 {
        // Feeding the previous result back in must not drift, only `base` matters.
        out = jitter(&out, 2.0, &mut rng);
    }
    for cmd in out.commands() {
        for (c, b) in cmd.current.iter().zip(&cmd.base) {
            assert!((c - b).abs() <= 2.0 + 1e-9);
        }
    }
}

#[test]
fn close_commands_are_never_perturbed() {
    let base = Outline::parse("M0,0L10,0L10,10Z");
    let out = jitter(&base, 5.0, &mut StdRng::seed_from_u64(3));
    let close = &out.commands()[3];
    assert!(close.is_close());
    assert!(close.current.is_empty());
}

#[test]
fn zero_intensity_reproduces_base() {
    let base = sample();
    let out = jitter(&base, 0.0, &mut StdRng::seed_from_u64(9));
    assert_eq!(out.serialize(), base.serialize());
}

#[test]
fn jitter_is_reproducible_for_a_seed() {
    let base = sample();
    let a = jitter(&base, 1.0, &mut StdRng::seed_from_u64(42));
    let b = jitter(&base, 1.0, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
    assert_ne!(a.serialize(), base.serialize());
}

#[test]
fn pointer_falloff_is_monotonic_and_bounded() {
    let field = PointerField::new(50.0, 15.0);
    let pointer = Point::new(100.0, 100.0);
    let mut last = f64::INFINITY;
    for step in 1..=70 {
        let p = Point::new(100.0 + step as f64, 100.0);
        let mag = field.displacement(p, pointer).hypot();
        assert!(mag <= last + 1e-12, "grew at distance {step}");
        assert!(mag <= 15.0);
        if step >= 50 {
            assert_eq!(mag, 0.0);
        }
        last = mag;
    }
}

#[test]
fn pointer_pushes_away_from_itself() {
    let field = PointerField::new(50.0, 10.0);
    let d = field.displacement(Point::new(110.0, 100.0), Point::new(100.0, 100.0));
    assert!((d.x - 8.0).abs() < 1e-9);
    assert_eq!(d.y, 0.0);
}

#[test]
fn coincident_pointer_leaves_point_alone() {
    let field = PointerField::new(50.0, 15.0);
    let base = Outline::parse("M20,30L40,30Z");
    let out = field.apply(&base, Point::new(20.0, 30.0));
    let mv = &out.commands()[0];
    assert_eq!(mv.current.as_slice(), &[20.0, 30.0]);
    assert!(mv.current.iter().all(|v| v.is_finite()));
    // The other point is within range and does move.
    assert!(out.commands()[1].current[0] > 40.0);
}

#[test]
fn pointer_push_stacks_on_top_of_jitter() {
    let base = Outline::parse("M10,10L12,10Z");
    let jittered = jitter(&base, 1.0, &mut StdRng::seed_from_u64(5));
    let field = PointerField::new(30.0, 4.0);
    let pushed = field.apply(&jittered, Point::new(0.0, 10.0));
    for (p, j) in pushed.commands().iter().zip(jittered.commands()) {
        assert_eq!(p.base, j.base);
        if !p.is_close() {
            assert!(p.current[0] > j.current[0]);
        }
    }
}

#[test]
fn unpaired_operand_is_left_alone() {
    let base = Outline::parse("L5,5,7Z");
    let out = PointerField::new(100.0, 10.0).apply(&base, Point::new(0.0, 0.0));
    assert_eq!(out.commands()[0].current[2], 7.0);
}

#[test]
fn wave_factor_stays_in_unit_range() {
    for i in -2000..2000 {
        let t = i as f64 * 0.37;
        let f = wave_intensity_factor(t, 0.0);
        assert!((0.0..=1.0).contains(&f));
    }
    assert!((wave_intensity_factor(300.0, 300.0) - 0.5).abs() < 1e-12);
}

#[test]
fn letters_lag_by_wave_delay() {
    let elapsed = 100.0;
    let p0 = wave_phase(0, 100.0);
    let p1 = wave_phase(1, 100.0);
    assert_eq!(p0, 0.0);
    assert_eq!(p1, 100.0);

    let f0 = wave_intensity_factor(elapsed, p0);
    let f1 = wave_intensity_factor(elapsed, p1);
    let expect = |phase: f64| {
        0.5 + 0.5 * (std::f64::consts::PI * (elapsed - phase) / WAVE_HALF_PERIOD_MS).sin()
    };
    assert!((f0 - expect(p0)).abs() < 1e-12);
    assert!((f1 - expect(p1)).abs() < 1e-12);
    assert_ne!(f0, f1);
}

#[test]
fn huge_finite_intensity_stays_finite_and_bounded() {
    let base = sample();
    let out = jitter(&base, 1e308, &mut StdRng::seed_from_u64(1));
    for (cmd, orig) in out.commands().iter().zip(base.commands()) {
        for (c, b) in cmd.current.iter().zip(&orig.base) {
            assert!(c.is_finite());
            assert!((c - b).abs() <= 1e308);
        }
    }
}
