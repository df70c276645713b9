// Host-side tests for parallax offsets and atmosphere easing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fx {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod parallax {
        include!("../src/core/parallax.rs");
    }
    pub mod state {
        include!("../src/core/state.rs");
    }
}

use fx::config::{AtmosphereConfig, DriftConfig, ParallaxConfig};
use fx::parallax::*;
use fx::state::ScrollState;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

type Marker = (&'static str, Option<&'static str>);

fn scheduler(targets: Vec<Marker>) -> ParallaxScheduler<&'static str> {
    ParallaxScheduler::new(
        ParallaxConfig::default(),
        ScrollState::new(1280.0, 800.0),
        targets,
    )
}

#[test]
fn smoothstep_endpoints_and_midpoint() {
    assert_eq!(smoothstep(0.0), 0.0);
    assert_eq!(smoothstep(1.0), 1.0);
    assert!(approx(smoothstep(0.5), 0.5));
    assert_eq!(smoothstep(-2.0), 0.0);
    assert_eq!(smoothstep(3.0), 1.0);
}

#[test]
fn eased_atmosphere_is_bounded_and_monotonic() {
    let vh = 800.0_f32;
    let cfg = AtmosphereConfig::default();
    let full = vh * cfg.threshold;
    let mut prev = 0.0_f32;
    let mut y = 0.0_f32;
    while y <= full {
        let e = smoothstep(atmosphere_progress(y, vh, cfg.threshold));
        assert!((0.0..=1.0).contains(&e), "eased {} out of range at {}", e, y);
        assert!(e >= prev, "eased value decreased at scrollY={}", y);
        prev = e;
        y += 1.0;
    }
    assert_eq!(smoothstep(atmosphere_progress(0.0, vh, cfg.threshold)), 0.0);
    assert_eq!(smoothstep(atmosphere_progress(full, vh, cfg.threshold)), 1.0);
    assert_eq!(smoothstep(atmosphere_progress(full * 3.0, vh, cfg.threshold)), 1.0);
}

#[test]
fn zero_height_viewport_does_not_divide_by_zero() {
    let mut p: ParallaxScheduler<&str> = ParallaxScheduler::new(
        ParallaxConfig::default(),
        ScrollState::new(0.0, 0.0),
        Vec::<Marker>::new(),
    );
    let at_top = p.recompute(0.0).atmosphere;
    assert_eq!(at_top.eased, 0.0);
    let scrolled = p.recompute(10.0).atmosphere;
    assert!(scrolled.eased.is_finite());
    assert_eq!(scrolled.eased, 1.0);
    assert!(scrolled.opacity.is_finite());
}

#[test]
fn empty_target_list_still_eases_atmosphere() {
    let mut p = scheduler(vec![]);
    let frame = p.recompute(360.0);
    assert!(frame.layers.is_empty());
    assert!(approx(frame.atmosphere.eased, 0.5));
}

#[test]
fn atmosphere_projection_is_linear_in_eased_value() {
    let cfg = AtmosphereConfig::default();
    let top = AtmosphereFrame::from_eased(0.0, &cfg);
    assert_eq!(top.translate_y, 0.0);
    assert_eq!(top.scale, 1.0);
    assert!(approx(top.opacity, 0.62));

    let done = AtmosphereFrame::from_eased(1.0, &cfg);
    assert!(approx(done.translate_y, -220.0));
    assert!(approx(done.scale, 1.08));
    assert!(approx(done.opacity, 0.0));

    let half = AtmosphereFrame::from_eased(0.5, &cfg);
    let props = half.style_properties();
    assert_eq!(props[0], ("--sky-y", "-110.00px".to_string()));
    assert_eq!(props[1], ("--sky-s", "1.0400".to_string()));
    assert_eq!(props[2], ("--sky-a", "0.3100".to_string()));
}

#[test]
fn layer_offsets_scale_with_speed_and_amplitude() {
    let mut p = scheduler(vec![("far", Some("0.1")), ("near", Some("0.5")), ("still", Some("0"))]);
    let frame = p.recompute(100.0);
    let ys: Vec<f32> = frame.layers.iter().map(|(_, t)| t.y).collect();
    assert!(approx(ys[0], 600.0));
    assert!(approx(ys[1], 3000.0));
    assert_eq!(ys[2], 0.0);
    assert_eq!(*frame.layers[1].0, "near");
    assert!(frame.layers.iter().all(|(_, t)| t.x == 0.0));
}

#[test]
fn per_axis_speeds_drive_horizontal_offset() {
    let mut p = scheduler(vec![("cloud", Some("0.2 -0.1"))]);
    let t = p.recompute(50.0).layers[0].1;
    assert!(approx(t.y, 600.0));
    assert!(approx(t.x, -300.0));
}

#[test]
fn malformed_markers_are_skipped_not_fatal() {
    let p = scheduler(vec![
        ("ok", Some("0.3")),
        ("word", Some("fast")),
        ("missing", None),
        ("nan", Some("NaN")),
        ("blank", Some("   ")),
        ("three", Some("1 2 3")),
        ("pair", Some("0.2,0.4")),
    ]);
    let kept: Vec<&str> = p.targets().iter().map(|t| t.handle).collect();
    assert_eq!(kept, vec!["ok", "pair"]);
    assert_eq!(p.targets()[1].index, 1);

    let rejected: Vec<usize> = p.rejected().iter().map(|(i, _)| *i).collect();
    assert_eq!(rejected, vec![1, 2, 3, 4, 5]);
    assert_eq!(p.rejected()[0].1, TargetError::NotANumber("fast".to_string()));
    assert_eq!(p.rejected()[1].1, TargetError::Missing);
    assert!(matches!(p.rejected()[2].1, TargetError::NotFinite(_)));
}

#[test]
fn parse_accepts_signed_and_per_axis_values() {
    assert_eq!(
        LayerParams::parse(Some(" -0.25 ")),
        Ok(LayerParams { speed_y: -0.25, speed_x: 0.0 })
    );
    assert_eq!(
        LayerParams::parse(Some("0.5 0.125")),
        Ok(LayerParams { speed_y: 0.5, speed_x: 0.125 })
    );
}

#[test]
fn drift_adds_phase_shifted_sway() {
    let cfg = ParallaxConfig {
        drift: Some(DriftConfig {
            amplitude: 10.0,
            frequency: 0.01,
            phase_step: std::f32::consts::FRAC_PI_2,
        }),
        ..ParallaxConfig::default()
    };
    let mut p = ParallaxScheduler::new(
        cfg,
        ScrollState::new(1280.0, 800.0),
        vec![("a", Some("0")), ("b", Some("0"))],
    );
    let frame = p.recompute(0.0);
    assert!(approx(frame.layers[0].1.x, 0.0));
    assert!(approx(frame.layers[1].1.x, 10.0));
}

#[test]
fn resize_updates_viewport_only() {
    let mut p = scheduler(vec![("a", Some("0.1"))]);
    p.recompute(200.0);
    p.resize(640.0, 400.0);
    let s = p.scroll();
    assert_eq!(s.viewport_width, 640.0);
    assert_eq!(s.viewport_height, 400.0);
    assert_eq!(s.scroll_y, 200.0);
    // 200 / (400 * 0.9) with the new height
    let e = p.recompute(200.0).atmosphere.eased;
    assert!(approx(e, smoothstep(200.0 / 360.0)));
}

#[test]
fn transform_string_uses_translate3d() {
    let t = Translation { x: 0.0, y: 12.5 };
    assert_eq!(t.transform(), "translate3d(0.00px, 12.50px, 0)");
}
