// Host-side tests for ambient particle generation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fx {
    pub mod ambient {
        include!("../src/core/ambient.rs");
    }
    pub mod capability {
        include!("../src/core/capability.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
}

use fx::ambient::*;
use fx::capability::Capabilities;
use fx::config::{AmbientConfig, ParticleRanges};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn within(spec: &ParticleSpec, r: &ParticleRanges) -> bool {
    r.delay.contains(spec.delay)
        && r.duration.contains(spec.duration)
        && r.offset.contains(spec.start_offset)
        && r.size.contains(spec.size)
        && r.opacity.contains(spec.opacity)
}

#[test]
fn generates_both_pools_in_order() {
    let cfg = AmbientConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    let specs = generate_particles(&mut rng, &cfg);

    assert_eq!(specs.len(), cfg.wind_count + cfg.sparkle_count);
    let (wind, sparkles) = specs.split_at(cfg.wind_count);
    assert!(wind.iter().all(|s| s.kind == ParticleKind::Wind));
    assert!(sparkles.iter().all(|s| s.kind == ParticleKind::Sparkle));
}

#[test]
fn every_parameter_stays_inside_its_range() {
    let cfg = AmbientConfig {
        wind_count: 200,
        sparkle_count: 200,
        ..AmbientConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(42);
    for spec in generate_particles(&mut rng, &cfg) {
        let ranges = match spec.kind {
            ParticleKind::Wind => &cfg.wind,
            ParticleKind::Sparkle => &cfg.sparkle,
        };
        assert!(within(&spec, ranges), "{:?} escaped its range", spec);
    }
}

#[test]
fn same_seed_same_particles() {
    let cfg = AmbientConfig::default();
    let a = generate_particles(&mut StdRng::seed_from_u64(3), &cfg);
    let b = generate_particles(&mut StdRng::seed_from_u64(3), &cfg);
    let c = generate_particles(&mut StdRng::seed_from_u64(4), &cfg);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn reduced_motion_emits_nothing() {
    let caps = Capabilities {
        reduced_motion: true,
        ..Capabilities::default()
    };
    let specs = emit(&mut StdRng::seed_from_u64(1), &AmbientConfig::default(), &caps);
    assert!(specs.is_empty());

    let specs = emit(
        &mut StdRng::seed_from_u64(1),
        &AmbientConfig::default(),
        &Capabilities::default(),
    );
    assert!(!specs.is_empty());
}

#[test]
fn empty_pools_are_allowed() {
    let cfg = AmbientConfig {
        wind_count: 0,
        sparkle_count: 0,
        ..AmbientConfig::default()
    };
    assert!(generate_particles(&mut StdRng::seed_from_u64(9), &cfg).is_empty());
}

#[test]
fn particle_style_properties() {
    let spec = ParticleSpec {
        kind: ParticleKind::Sparkle,
        delay: 1.5,
        duration: 3.25,
        start_offset: 40.0,
        size: 4.0,
        opacity: 0.5,
    };
    let props = spec.style_properties();
    assert_eq!(props[0], ("--delay", "1.50s".to_string()));
    assert_eq!(props[1], ("--duration", "3.25s".to_string()));
    assert_eq!(props[2], ("--offset", "40.00%".to_string()));
    assert_eq!(props[3], ("--size", "4.0px".to_string()));
    assert_eq!(props[4], ("--opacity", "0.500".to_string()));
    assert_eq!(spec.kind.class_name(), "sparkle");
}
