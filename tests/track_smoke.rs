use circuit_engine::{Agent, Track};

const INNER: [f64; 8] = [0.0, 0.0, 0.0, 100.0, 100.0, 100.0, 100.0, 0.0];
const OUTER: [f64; 8] = [-50.0, -50.0, -50.0, 150.0, 150.0, 150.0, 150.0, -50.0];
const GATES: [f64; 4] = [50.0, -50.0, 50.0, 0.0];

fn hitbox(x: f64, y: f64) -> [f64; 8] {
    [x - 2.0, y - 2.0, x + 2.0, y - 2.0, x + 2.0, y + 2.0, x - 2.0, y + 2.0]
}

#[test]
fn track_smoke_build_and_query() {
    let mut track = Track::new();
    track.build(&INNER, &OUTER, &GATES, 50.0, -50.0, -50.0, 150.0, 150.0).unwrap();
    assert_eq!(track.wall_count(), 8);
    assert_eq!(track.checkpoint_count(), 1);
    assert_eq!(track.total_chunks(), 16);

    // Agent on the bottom straight, left of the gate, looking down and right.
    let out = track
        .query(&[25.0, -200.0, 200.0, -25.0], 25.0, -25.0, &hitbox(25.0, -25.0))
        .unwrap();
    let d = out.distances();
    assert_eq!(d.len(), 2);
    assert!(d.iter().all(|v| v.is_finite()));
    assert!(!out.player_hit());
    assert!(!out.checkpoint_hit());

    // Drive onto the gate.
    let out = track.query(&[], 50.0, -25.0, &hitbox(50.0, -25.0)).unwrap();
    assert!(out.checkpoint_hit());
    // Single gate: crossing it is a full lap.
    assert_eq!(track.cursor(), 0);
    assert_eq!(track.laps(), 1);
}

#[test]
fn track_smoke_host_agents() {
    let mut track = Track::new();
    track.build(&INNER, &OUTER, &GATES, 50.0, -50.0, -50.0, 150.0, 150.0).unwrap();

    let mut a = Agent::new();
    let b = Agent::new();
    track.query_agent(&mut a, &[], 50.0, -25.0, &hitbox(50.0, -25.0)).unwrap();
    assert_eq!(a.laps(), 1);
    assert_eq!(b.laps(), 0);
    assert_eq!(track.laps(), 0);
}

#[test]
fn track_smoke_summary_json() {
    let mut track = Track::new();
    track
        .build_from_json(
            r#"{"inner": [[0,0],[0,100],[100,100],[100,0]],
                "outer": [[-50,-50],[-50,150],[150,150],[150,-50]],
                "config": {"origin_x": -50, "origin_y": -50, "width": 200, "height": 200, "cell_size": 50}}"#
                .to_string(),
        )
        .unwrap();
    let summary: serde_json::Value = serde_json::from_str(&track.index_summary_json()).unwrap();
    assert_eq!(summary["wall_count"], 8);
    assert_eq!(summary["chunks_x"], 5);
    assert_eq!(summary["gate_count"], 0);
}
