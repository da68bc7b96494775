//! Animation scheduling and convergence guarantees.

use marina_conformance::{item_center, standard_config, standard_dock, standard_tools};

use marina::{Dock, DockDriver};

#[test]
fn rest_invariant_after_pointer_leaves() {
    let mut driver = DockDriver::new(standard_dock());
    let c = item_center(0);
    driver.pointer_move(c.x, c.y);
    for _ in 0..30 {
        driver.step_frame();
    }
    driver.pointer_leave();

    let frames = driver.run_until_settled(2000);
    assert!(frames < 2000, "engine failed to settle");

    let snapshot = driver.dock().snapshot();
    assert!(!snapshot.animating);
    for (index, item) in snapshot.items.iter().enumerate() {
        assert_eq!(item.scale, 1.0, "{} not at rest scale", item.id);
        let pitch = 56.0;
        let expected_x = (index % 3) as f64 * pitch;
        let expected_y = (index / 3) as f64 * pitch;
        assert_eq!(item.x, expected_x, "{} off resting x", item.id);
        assert_eq!(item.y, expected_y, "{} off resting y", item.id);
    }
}

#[test]
fn convergence_shrinks_distance_by_constant_ratio() {
    let mut dock = standard_dock();
    let c = item_center(0);
    dock.on_pointer_move(c.x, c.y);

    let factor = dock.config().active_lerp;
    let target = 1.6;

    let mut previous_gap = target - dock.snapshot().items[0].scale;
    for _ in 0..20 {
        dock.update(dock.frame_msg());
        let gap = target - dock.snapshot().items[0].scale;
        let expected = previous_gap * (1.0 - factor);
        assert!(
            (gap - expected).abs() < 1e-9,
            "gap {gap} should be {expected}"
        );
        assert!(gap >= 0.0, "scale overshot its target");
        previous_gap = gap;
    }
}

#[test]
fn loop_stops_only_when_converged_and_pointer_absent() {
    let mut dock = standard_dock();
    let c = item_center(0);
    dock.on_pointer_move(c.x, c.y);

    // Fully converged under a stationary pointer: the loop stays alive
    for _ in 0..300 {
        assert!(dock.update(dock.frame_msg()).is_some());
    }

    // Pointer gone: the loop runs until converged back to rest, then parks
    dock.on_pointer_leave();
    let mut parked_after = None;
    for frame in 0..2000 {
        if dock.update(dock.frame_msg()).is_none() {
            parked_after = Some(frame);
            break;
        }
    }
    let parked_after = parked_after.expect("loop never parked");
    assert!(parked_after > 0);

    assert!(dock.is_settled());
    assert!(!dock.is_animating());
}

#[test]
fn at_most_one_frame_is_ever_pending() {
    let mut dock = standard_dock();

    // The first input schedules a frame; everything after piggybacks on it
    assert!(dock.on_pointer_move(10.0, 10.0).is_some());
    assert!(dock.on_pointer_move(11.0, 10.0).is_none());
    assert!(dock.on_pointer_leave().is_none());
    assert!(dock.on_pointer_move(12.0, 10.0).is_none());

    // Consuming the frame lets exactly one new frame be scheduled
    assert!(dock.update(dock.frame_msg()).is_some());
    assert!(dock.on_pointer_move(13.0, 10.0).is_none());
}

#[test]
fn shutdown_cancels_in_flight_frames() {
    let mut dock = standard_dock();
    dock.on_pointer_move(10.0, 10.0);
    dock.on_activate("brush");

    // Capture callbacks "in flight", then tear down
    let stale_frame = dock.frame_msg();
    let stale_tick = dock.particle_msg();
    dock.shutdown();

    assert!(!dock.is_animating());
    assert!(dock.update(stale_frame).is_none());
    assert!(dock.update(stale_tick).is_none());

    // State is exactly as the teardown left it
    let snapshot = dock.snapshot();
    assert_eq!(snapshot.items[0].scale, 1.0);
    assert_eq!(snapshot.particles.len(), 12, "no further integration");
}

#[test]
fn disabled_animations_snap_to_target() {
    let mut config = standard_config();
    config.animations_enabled = false;
    let mut dock = Dock::with_seed(standard_tools(), config, 7);

    let c = item_center(0);
    dock.on_pointer_move(c.x, c.y);

    // One frame snaps and parks
    assert!(dock.update(dock.frame_msg()).is_none());
    let snapshot = dock.snapshot();
    assert!((snapshot.items[0].scale - 1.6).abs() < 1e-9);
}

#[test]
fn idle_dock_schedules_nothing() {
    let dock = standard_dock();
    assert!(dock.is_settled());
    assert!(!dock.is_animating());
    assert!(!dock.snapshot().animating);
}

#[test]
fn pointer_events_never_tick_synchronously() {
    let mut dock = standard_dock();
    let c = item_center(0);

    // However many events arrive, current values move only on frames
    dock.on_pointer_move(c.x, c.y);
    dock.on_pointer_move(c.x + 1.0, c.y);
    dock.on_pointer_move(c.x, c.y);
    assert_eq!(dock.snapshot().items[0].scale, 1.0);

    dock.update(dock.frame_msg());
    assert!(dock.snapshot().items[0].scale > 1.0);
}
