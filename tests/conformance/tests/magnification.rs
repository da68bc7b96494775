//! Magnification numerics for the written-out reference scenario:
//! 6 items, 3 columns, 48px items, 8px spacing, 200px radius, 1.6x max.

use marina_conformance::{item_center, standard_dock, standard_driver};

use marina::magnify::scale_at;

/// Drives frames until the target is effectively reached.
fn converge(driver: &mut marina::DockDriver, frames: usize) {
    for _ in 0..frames {
        driver.step_frame();
    }
}

#[test]
fn item_under_pointer_reaches_max_magnification() {
    let mut driver = standard_driver();
    let c = item_center(0);
    driver.pointer_move(c.x, c.y);
    converge(&mut driver, 200);

    let snapshot = driver.dock().snapshot();
    assert!(
        (snapshot.items[0].scale - 1.6).abs() < 0.001,
        "expected 1.6, got {}",
        snapshot.items[0].scale
    );
}

#[test]
fn one_step_neighbor_keeps_most_of_the_magnification() {
    let mut driver = standard_driver();
    let c = item_center(0);
    driver.pointer_move(c.x, c.y);
    converge(&mut driver, 200);

    // Item 1 sits one grid step (56px) to the right; the cosine falloff is
    // flat near the cursor, so it lands just above 1.5
    let snapshot = driver.dock().snapshot();
    let expected = scale_at(56.0, 200.0, 1.6);
    assert!(expected > 1.5 && expected < 1.56, "analytic value {expected}");
    assert!(
        (snapshot.items[1].scale - expected).abs() < 0.001,
        "expected {}, got {}",
        expected,
        snapshot.items[1].scale
    );
}

#[test]
fn items_beyond_the_radius_stay_at_rest() {
    let mut driver = standard_driver();
    // 300px left of the grid: every item center is farther than 200px
    driver.pointer_move(-300.0, 24.0);
    converge(&mut driver, 200);

    let snapshot = driver.dock().snapshot();
    for item in &snapshot.items {
        assert_eq!(item.scale, 1.0, "{} moved at rest distance", item.id);
    }
}

#[test]
fn magnification_orders_by_distance() {
    let mut driver = standard_driver();
    let c = item_center(0);
    driver.pointer_move(c.x, c.y);
    converge(&mut driver, 200);

    let snapshot = driver.dock().snapshot();
    // Pointer on item 0: item 1 (56px) closer than item 2 (112px),
    // item 4 on the diagonal (~79px) sits between them.
    assert!(snapshot.items[0].scale > snapshot.items[1].scale);
    assert!(snapshot.items[1].scale > snapshot.items[4].scale);
    assert!(snapshot.items[4].scale > snapshot.items[2].scale);
    assert!(snapshot.items[2].scale > 1.0);
}

#[test]
fn magnified_row_spreads_apart() {
    let mut driver = standard_driver();
    let c = item_center(1); // middle column
    driver.pointer_move(c.x, c.y);
    converge(&mut driver, 200);

    let snapshot = driver.dock().snapshot();
    // Column 0 leans left of its resting x, column 2 leans right
    assert!(snapshot.items[0].x < 0.0);
    assert!(snapshot.items[2].x > 112.0);
    // The midline column holds its x
    assert!((snapshot.items[1].x - 56.0).abs() < 0.001);
}

#[test]
fn zero_radius_disables_magnification_entirely() {
    let mut dock = standard_dock();
    let mut config = dock.config().clone();
    config.effect_radius = 0.0;
    dock.set_config(config);

    let mut driver = marina::DockDriver::new(dock);
    let c = item_center(0);
    driver.pointer_move(c.x, c.y);
    converge(&mut driver, 100);

    let snapshot = driver.dock().snapshot();
    assert!(snapshot.items.iter().all(|item| item.scale == 1.0));
}
