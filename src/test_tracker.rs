use crate::error::Error;
use crate::geometry::{BoundingBox, Position};
use crate::tracker::{Tracker, TrackerConfig};

fn tracker() -> Tracker {
    Tracker::default()
}

#[test]
fn single_entity_keeps_its_id_across_frames() {
    let mut tracker = tracker();

    // Same object drifting well below the 100 px threshold per frame.
    let frames = [
        BoundingBox::new(10, 10, 20, 20),
        BoundingBox::new(18, 14, 20, 20),
        BoundingBox::new(25, 20, 20, 20),
        BoundingBox::new(30, 28, 20, 20),
    ];

    let mut ids = Vec::new();
    for bbox in frames {
        tracker.update(&[bbox]);
        assert_eq!(tracker.entities().len(), 1);
        ids.push(tracker.entities().ids().next().unwrap());
    }

    assert!(ids.iter().all(|&id| id == ids[0]));

    let entity = tracker.get(ids[0]).unwrap();
    assert_eq!(entity.history_len(), frames.len());
}

#[test]
fn far_detection_spawns_a_new_entity() {
    let mut tracker = tracker();

    tracker.update(&[BoundingBox::new(10, 10, 20, 20)]);
    let first = tracker.entities().ids().next().unwrap();

    // Second detection sits 180 px from the existing centroid.
    let report = tracker.update(&[
        BoundingBox::new(10, 10, 20, 20),
        BoundingBox::new(190, 10, 20, 20),
    ]);

    assert_eq!(report.matched, 1);
    assert_eq!(report.created, 1);
    assert_eq!(tracker.entities().len(), 2);

    let ids: Vec<_> = tracker.entities().ids().collect();
    assert!(ids.contains(&first));
    assert!(ids.iter().any(|&id| id != first));
}

#[test]
fn concrete_scenario_from_the_counting_camera() {
    let mut tracker = tracker();

    // Frame 1: one box, centroid (20, 20).
    tracker.update(&[BoundingBox::new(10, 10, 20, 20)]);
    assert_eq!(tracker.entities().len(), 1);
    let id = tracker.entities().ids().next().unwrap();
    let entity = tracker.get(id).unwrap();
    assert_eq!(entity.centroid, Position::new(20, 20));
    assert_eq!(
        entity.history().copied().collect::<Vec<_>>(),
        vec![Position::new(20, 20)]
    );

    // Frame 2: moved ~7.2 px, same id, trail grows.
    tracker.update(&[BoundingBox::new(15, 12, 20, 20)]);
    let entity = tracker.get(id).unwrap();
    assert_eq!(entity.centroid, Position::new(25, 22));
    assert_eq!(
        entity.history().copied().collect::<Vec<_>>(),
        vec![Position::new(20, 20), Position::new(25, 22)]
    );

    // Frame 3: no detections, entity is dropped the same frame.
    let report = tracker.update(&[]);
    assert_eq!(report.lost, 1);
    assert!(tracker.entities().is_empty());

    // Frame 4: same box again gets a fresh id, never the old one.
    tracker.update(&[BoundingBox::new(15, 12, 20, 20)]);
    let reborn = tracker.entities().ids().next().unwrap();
    assert_ne!(reborn, id);
    assert_eq!(tracker.get(reborn).unwrap().history_len(), 1);
}

#[test]
fn previous_entity_is_consumed_at_most_once() {
    let mut tracker = tracker();

    tracker.update(&[BoundingBox::new(100, 100, 20, 20)]);
    let first = tracker.entities().ids().next().unwrap();

    // Both detections are within the threshold of the lone entity.
    let report = tracker.update(&[
        BoundingBox::new(110, 100, 20, 20),
        BoundingBox::new(90, 100, 20, 20),
    ]);

    assert_eq!(report.matched, 1);
    assert_eq!(report.created, 1);
    assert_eq!(tracker.entities().len(), 2);

    // The earlier detection inherits the id.
    assert_eq!(
        tracker.get(first).unwrap().bbox,
        BoundingBox::new(110, 100, 20, 20)
    );
}

#[test]
fn detection_order_decides_a_contested_match() {
    let near = BoundingBox::new(110, 100, 20, 20);
    let far = BoundingBox::new(150, 100, 20, 20);

    // First fit, not best fit: whichever qualifying detection comes
    // first inherits the id, deterministically for a fixed input order.
    for (frame, winner) in [([near, far], near), ([far, near], far)] {
        let mut tracker = tracker();
        tracker.update(&[BoundingBox::new(100, 100, 20, 20)]);
        let id = tracker.entities().ids().next().unwrap();

        tracker.update(&frame);
        assert_eq!(tracker.get(id).unwrap().bbox, winner);
    }
}

#[test]
fn empty_frame_yields_empty_registry() {
    let mut tracker = tracker();

    let report = tracker.update(&[]);
    assert!(tracker.entities().is_empty());
    assert_eq!(report, Default::default());

    tracker.update(&[BoundingBox::new(0, 0, 10, 10), BoundingBox::new(200, 0, 10, 10)]);
    let report = tracker.update(&[]);
    assert_eq!(report.lost, 2);
    assert!(tracker.entities().is_empty());
}

#[test]
fn invalid_detection_does_not_abort_the_frame() {
    let mut tracker = tracker();

    let report = tracker.update(&[
        BoundingBox::new(0, 0, 10, 10),
        BoundingBox::new(50, 50, -5, 10),
        BoundingBox::new(300, 300, 10, 10),
    ]);

    assert_eq!(
        report.rejected,
        vec![Error::InvalidDetection {
            index: 1,
            width: -5,
            height: 10
        }]
    );
    assert_eq!(report.created, 2);
    assert_eq!(tracker.entities().len(), 2);
}

#[test]
fn ids_are_monotonic_and_never_reused() {
    let mut tracker = tracker();

    tracker.update(&[BoundingBox::new(0, 0, 10, 10), BoundingBox::new(500, 0, 10, 10)]);
    let mut seen: Vec<_> = tracker.entities().ids().collect();

    // Drop everything, then repopulate twice.
    tracker.update(&[]);
    for _ in 0..2 {
        tracker.update(&[BoundingBox::new(0, 0, 10, 10)]);
        seen.extend(tracker.entities().ids());
        tracker.update(&[]);
    }

    let mut sorted = seen.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), seen.len());
}

#[test]
fn tracks_snapshot_exposes_trail_and_color() {
    let mut tracker = Tracker::new(TrackerConfig {
        distance_threshold: 100.0,
        history_cap: 8,
    });

    assert_eq!(tracker.config().history_cap, 8);
    assert_eq!(tracker.config().distance_threshold, 100.0);

    tracker.update(&[BoundingBox::new(10, 10, 20, 20)]);
    tracker.update(&[BoundingBox::new(15, 12, 20, 20)]);

    let tracks = tracker.tracks();
    assert_eq!(tracks.len(), 1);

    let track = &tracks[0];
    assert_eq!(track.bbox, BoundingBox::new(15, 12, 20, 20));
    assert_eq!(track.centroid, Position::new(25, 22));
    assert_eq!(
        track.trail,
        vec![Position::new(20, 20), Position::new(25, 22)]
    );
    assert!(track.color.r >= 50 && track.color.g >= 50 && track.color.b >= 50);
}

#[test]
fn threshold_is_strictly_below() {
    let mut tracker = Tracker::new(TrackerConfig {
        distance_threshold: 100.0,
        history_cap: 8,
    });

    tracker.update(&[BoundingBox::new(0, 0, 20, 20)]);
    let id = tracker.entities().ids().next().unwrap();

    // Exactly 100 px away does not match.
    let report = tracker.update(&[BoundingBox::new(100, 0, 20, 20)]);
    assert_eq!(report.matched, 0);
    assert_eq!(report.created, 1);
    assert!(tracker.get(id).is_none());
}
