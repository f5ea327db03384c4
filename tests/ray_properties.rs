use proptest::prelude::*;

use circuit_engine::{AgentState, Hitbox, Point, TrackConfig, TrackCore, TrackLayout};

/// Square ring: inner wall 0..100, outer wall -100..200.
fn ring_track() -> TrackCore {
    let square = |lo: f64, hi: f64| {
        vec![
            Point::new(lo, lo),
            Point::new(lo, hi),
            Point::new(hi, hi),
            Point::new(hi, lo),
        ]
    };
    let layout = TrackLayout::new(square(0.0, 100.0), square(-100.0, 200.0), vec![]);
    let config = TrackConfig::new(300.0, 300.0, 25.0).with_origin(-100.0, -100.0);
    let mut track = TrackCore::new();
    track.build(&layout, config).unwrap();
    track
}

proptest! {
    #[test]
    fn rays_leaving_the_inner_ring_always_hit(
        x in 1.0f64..99.0,
        y in 1.0f64..99.0,
        angle in 0.0f64..std::f64::consts::TAU,
    ) {
        let mut track = ring_track();
        let mut agent = AgentState::new();
        let origin = Point::new(x, y);
        let target = Point::new(x + 1000.0 * angle.cos(), y + 1000.0 * angle.sin());
        let result = track.query(&mut agent, &[target], origin, &Hitbox::around(origin, 0.5, 0.5));

        let hit = result.rays[0];
        prop_assert!(hit.distance.is_finite());
        // The inner ring is the first wall out of the box.
        prop_assert!(hit.distance <= 100.0 * std::f64::consts::SQRT_2 + 1e-6);
        prop_assert!((origin.distance(hit.point) - hit.distance).abs() < 1e-6);
    }

    #[test]
    fn rays_that_stay_inside_the_ring_never_hit(
        x in 1.0f64..99.0,
        y in 1.0f64..99.0,
        tx in 1.0f64..99.0,
        ty in 1.0f64..99.0,
    ) {
        let mut track = ring_track();
        let mut agent = AgentState::new();
        let origin = Point::new(x, y);
        let result = track.query(&mut agent, &[Point::new(tx, ty)], origin, &Hitbox::around(origin, 0.5, 0.5));

        prop_assert_eq!(result.rays[0].distance, f64::INFINITY);
        prop_assert!(!result.rays[0].point.is_finite());
        prop_assert!(!result.player_hit);
    }

    #[test]
    fn hitbox_on_the_track_band_never_collides(
        x in -95.0f64..195.0,
        y in -95.0f64..-5.0,
    ) {
        let mut track = ring_track();
        let mut agent = AgentState::new();
        let pos = Point::new(x, y);
        let result = track.query(&mut agent, &[], pos, &Hitbox::around(pos, 2.0, 2.0));
        prop_assert!(!result.player_hit);
    }
}
