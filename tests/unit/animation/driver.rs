use super::*;
use crate::layout::{ApproxMetrics, layout_text};
use crate::perturb::PointerField;

fn base(text: &str) -> BaseOutlines {
    layout_text(text, "Arial", 72.0, &mut ApproxMetrics::new()).to_base()
}

fn seeded(config: AnimationConfig) -> AnimationDriver {
    AnimationDriver::new(AnimationConfig {
        seed: Some(11),
        ..config
    })
}

#[test]
fn idle_until_started() {
    let b = base("Hi");
    let mut d = seeded(AnimationConfig::default());
    let scene = Scene {
        base: &b,
        pointer: None,
        elapsed_ms: 0.0,
    };
    assert!(!d.is_running());
    assert_eq!(d.on_frame(FrameHandle(0), 0.0, &scene), TickOutcome::Idle);

    let h = d.start();
    assert!(matches!(d.on_frame(h, 0.0, &scene), TickOutcome::Applied(_)));
    d.stop();
    assert_eq!(d.on_frame(h, 100.0, &scene), TickOutcome::Idle);
}

#[test]
fn updates_are_throttled_to_speed() {
    let b = base("Hi");
    let mut d = seeded(AnimationConfig {
        speed: 60.0,
        ..Default::default()
    });
    let scene = Scene {
        base: &b,
        pointer: None,
        elapsed_ms: 0.0,
    };
    let h = d.start();

    let mut applied = 0;
    // 60 Hz display for one second.
    for frame in 0..60 {
        let now = frame as f64 * (1000.0 / 60.0);
        if let TickOutcome::Applied(_) = d.on_frame(h, now, &scene) {
            applied += 1;
        }
    }
    // At 60 Hz only every fourth display frame (66.7 ms) clears a 60 ms interval.
    assert_eq!(applied, 15);
}

#[test]
fn restart_cancels_the_previous_loop() {
    let b = base("Hi");
    let mut d = seeded(AnimationConfig::default());
    let scene = Scene {
        base: &b,
        pointer: None,
        elapsed_ms: 0.0,
    };
    let old = d.start();
    let new = d.start();
    assert_ne!(old, new);
    assert_eq!(d.handle(), Some(new));
    assert_eq!(d.on_frame(old, 0.0, &scene), TickOutcome::Cancelled);
    assert!(matches!(d.on_frame(new, 0.0, &scene), TickOutcome::Applied(_)));
}

#[test]
fn reconfigure_only_runs_when_useful() {
    let mut d = seeded(AnimationConfig::default());
    let off = AnimationConfig {
        animated: false,
        interacts_with_mouse: false,
        ..Default::default()
    };
    assert!(d.reconfigure(off.clone(), true).is_none());
    assert!(!d.is_running());

    assert!(d.reconfigure(AnimationConfig::default(), false).is_none());
    assert!(d.reconfigure(AnimationConfig::default(), true).is_some());

    let pointer_only = AnimationConfig {
        animated: false,
        interacts_with_mouse: true,
        ..Default::default()
    };
    assert!(d.reconfigure(pointer_only, true).is_some());
}

#[test]
fn zero_intensity_without_pointer_shows_base() {
    let b = base("Hello");
    let mut d = seeded(AnimationConfig {
        intensity: 0.0,
        ..Default::default()
    });
    let scene = Scene {
        base: &b,
        pointer: Some(Point::new(30.0, 40.0)),
        elapsed_ms: 0.0,
    };
    let h = d.start();
    for i in 0..5 {
        let TickOutcome::Applied(out) = d.on_frame(h, i as f64 * 100.0, &scene) else {
            panic!("expected an applied tick");
        };
        assert_eq!(out, b.full.serialize());
    }
}

#[test]
fn disabled_animation_only_pushes_near_pointer() {
    let b = base("O");
    let pointer = Point::new(40.0, 50.0);
    let config = AnimationConfig {
        animated: false,
        interacts_with_mouse: true,
        ..Default::default()
    };
    let mut d = seeded(config.clone());
    let scene = Scene {
        base: &b,
        pointer: Some(pointer),
        elapsed_ms: 0.0,
    };
    let expect = PointerField::new(config.mouse_radius, config.mouse_strength)
        .apply(&b.full, pointer)
        .serialize();
    assert_eq!(d.compose(&scene), expect);
    assert_ne!(expect, b.full.serialize());
}

#[test]
fn wave_mode_scales_each_letter_by_its_envelope() {
    let b = base("AB");
    let mut d = seeded(AnimationConfig {
        wave_mode: true,
        wave_delay: 100.0,
        intensity: 3.0,
        ..Default::default()
    });
    // At 300 ms letter 0 sits at sin(3pi/2): factor 0, so it rests; letter 1 is at sin(pi).
    let scene = Scene {
        base: &b,
        pointer: None,
        elapsed_ms: 300.0,
    };
    assert!(wave_intensity_factor(300.0, 0.0).abs() < 1e-12);
    let out = d.compose(&scene);
    let letter0 = b.letters[0].serialize();
    assert!(out.starts_with(&letter0));
    assert_ne!(out, b.full.serialize());
}

#[test]
fn wave_output_concatenates_letters() {
    let b = base("A B");
    let mut d = seeded(AnimationConfig {
        wave_mode: true,
        intensity: 0.0,
        ..Default::default()
    });
    let scene = Scene {
        base: &b,
        pointer: None,
        elapsed_ms: 50.0,
    };
    assert_eq!(d.compose(&scene), b.full.serialize());
}

#[test]
fn same_seed_same_frames() {
    let b = base("Hi");
    let scene = Scene {
        base: &b,
        pointer: None,
        elapsed_ms: 0.0,
    };
    let mut a = seeded(AnimationConfig::default());
    let mut c = seeded(AnimationConfig::default());
    for _ in 0..3 {
        assert_eq!(a.compose(&scene), c.compose(&scene));
    }
}

#[test]
fn clock_moving_backwards_applies_immediately() {
    let b = base("Hi");
    let mut d = seeded(AnimationConfig::default());
    let scene = Scene {
        base: &b,
        pointer: None,
        elapsed_ms: 0.0,
    };
    let h = d.start();
    assert!(matches!(d.on_frame(h, 1_000.0, &scene), TickOutcome::Applied(_)));
    assert_eq!(d.on_frame(h, 1_010.0, &scene), TickOutcome::Throttled);
    assert!(matches!(d.on_frame(h, 0.0, &scene), TickOutcome::Applied(_)));
    assert_eq!(d.on_frame(h, 20.0, &scene), TickOutcome::Throttled);
}
