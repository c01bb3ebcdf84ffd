use super::*;
use crate::animation::AnimationConfig;
use crate::component::JigglyTextProps;
use crate::encode::sink::InMemorySink;
use crate::layout::ApproxMetrics;

fn text(animation: AnimationConfig) -> JigglyText {
    let props = JigglyTextProps {
        text: "Hey".into(),
        animation: AnimationConfig {
            seed: Some(9),
            ..animation
        },
        ..Default::default()
    };
    JigglyText::new(props, Box::new(ApproxMetrics::new()), 0.0).unwrap()
}

#[test]
fn frame_count_includes_both_ends() {
    let opts = FrameLoopOpts::default();
    assert_eq!(opts.frame_count(), 61);
    let zero = FrameLoopOpts {
        duration_ms: 0.0,
        ..Default::default()
    };
    assert_eq!(zero.frame_count(), 1);
    assert_eq!(zero.frame_time(0), 0.0);
}

#[test]
fn invalid_opts_are_rejected() {
    for opts in [
        FrameLoopOpts {
            refresh_hz: 0.0,
            ..Default::default()
        },
        FrameLoopOpts {
            duration_ms: -1.0,
            ..Default::default()
        },
        FrameLoopOpts {
            start_ms: f64::INFINITY,
            ..Default::default()
        },
    ] {
        assert!(FrameLoop::new(opts).is_err(), "{opts:?}");
    }
}

#[test]
fn one_second_at_60hz_is_paced_by_speed() {
    let mut t = text(AnimationConfig {
        speed: 60.0,
        ..Default::default()
    });
    let mut sink = InMemorySink::new();
    let stats = FrameLoop::new(FrameLoopOpts::default())
        .unwrap()
        .run(&mut t, &mut sink)
        .unwrap();

    // Every fourth refresh (66.7 ms) clears a 60 ms interval: frames 0, 4, ..., 60.
    assert_eq!(
        stats,
        LoopStats {
            frames_total: 61,
            frames_applied: 16,
            frames_throttled: 45,
        }
    );
    assert!(sink.is_ended());
    assert_eq!(sink.config().map(|c| c.viewport), Some(t.viewport()));
    assert_eq!(sink.frames.len(), 16);
    for (i, f) in sink.frames.iter().enumerate() {
        assert_eq!(f.tick, i as u64 + 1);
        assert!(f.svg.contains(&f.outline));
    }
    assert_eq!(sink.frames.last().map(|f| f.outline.as_str()), Some(t.displayed_outline()));
}

#[test]
fn scripted_pointer_pushes_only_after_it_arrives() {
    let mut t = text(AnimationConfig {
        animated: false,
        interacts_with_mouse: true,
        ..Default::default()
    });
    let base = t.base().full.serialize();
    let keys = vec![
        PointerKey {
            time_ms: 500.0,
            position: Some(Point::new(30.0, 50.0)),
        },
        PointerKey {
            time_ms: 0.0,
            position: None,
        },
    ];
    let mut sink = InMemorySink::new();
    FrameLoop::new(FrameLoopOpts::default())
        .unwrap()
        .with_pointer_path(keys)
        .run(&mut t, &mut sink)
        .unwrap();

    for f in &sink.frames {
        if f.time_ms < 500.0 {
            assert_eq!(f.outline, base, "at {}", f.time_ms);
        } else {
            assert_ne!(f.outline, base, "at {}", f.time_ms);
        }
    }
    assert_eq!(t.pointer(), Some(Point::new(30.0, 50.0)));
}

#[test]
fn nothing_to_animate_runs_no_frames() {
    let mut t = text(AnimationConfig {
        animated: false,
        interacts_with_mouse: false,
        ..Default::default()
    });
    let mut sink = InMemorySink::new();
    let stats = FrameLoop::new(FrameLoopOpts::default())
        .unwrap()
        .run(&mut t, &mut sink)
        .unwrap();
    assert_eq!(stats, LoopStats::default());
    assert!(sink.frames.is_empty());
    assert!(sink.is_ended());
}

#[test]
fn advance_leaves_component_at_last_update() {
    let mut a = text(AnimationConfig::default());
    let mut b = text(AnimationConfig::default());
    let lp = FrameLoop::new(FrameLoopOpts {
        duration_ms: 300.0,
        ..Default::default()
    })
    .unwrap();

    let mut sink = InMemorySink::new();
    lp.run(&mut a, &mut sink).unwrap();
    let stats = lp.advance(&mut b).unwrap();

    assert_eq!(stats.frames_applied as usize, sink.frames.len());
    assert_eq!(a.displayed_outline(), b.displayed_outline());
    assert_ne!(b.displayed_outline(), b.layout().full);
}

#[test]
fn oversized_spans_are_rejected_not_overflowed() {
    let huge = FrameLoopOpts {
        duration_ms: 1e300,
        ..Default::default()
    };
    assert!(huge.validate().is_err());
    assert!(FrameLoop::new(huge).is_err());
    assert_eq!(huge.frame_count(), MAX_FRAMES);

    let fast = FrameLoopOpts {
        refresh_hz: 1e308,
        duration_ms: 1e10,
        ..Default::default()
    };
    assert!(fast.validate().is_err());
}

#[test]
fn second_run_from_the_start_is_not_throttled_away() {
    let mut t = text(AnimationConfig::default());
    let lp = FrameLoop::new(FrameLoopOpts {
        duration_ms: 200.0,
        ..Default::default()
    })
    .unwrap();
    let first = lp.advance(&mut t).unwrap();
    let second = lp.advance(&mut t).unwrap();
    assert!(first.frames_applied > 0);
    assert_eq!(second.frames_applied, first.frames_applied);
}
