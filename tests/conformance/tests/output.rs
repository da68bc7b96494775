//! Snapshot output contract: plain data, stable shape, serializable.

use marina_conformance::{item_center, standard_driver};

#[test]
fn snapshot_is_plain_serializable_data() {
    let mut driver = standard_driver();
    let c = item_center(0);
    driver.pointer_move(c.x, c.y);
    driver.step_frame();
    driver.activate("brush");

    let snapshot = driver.dock().snapshot();
    let json = serde_json::to_value(&snapshot).unwrap();

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 6);
    assert_eq!(items[0]["id"], "brush");
    assert_eq!(items[0]["color"], "#bf4d14");
    assert!(items[0]["scale"].as_f64().unwrap() > 1.0);

    let particles = json["particles"].as_array().unwrap();
    assert_eq!(particles.len(), 12);
    assert!(particles[0]["opacity"].as_f64().unwrap() <= 1.0);

    assert_eq!(json["animating"], true);
}

#[test]
fn snapshot_is_detached_from_engine_state() {
    let mut driver = standard_driver();
    let c = item_center(0);
    driver.pointer_move(c.x, c.y);
    driver.step_frame();

    let before = driver.dock().snapshot();
    let scale_before = before.items[0].scale;

    // Stepping the engine must not reach back into a snapshot already taken
    for _ in 0..50 {
        driver.step_frame();
    }
    assert_eq!(before.items[0].scale, scale_before);
    assert!(driver.dock().snapshot().items[0].scale > scale_before);
}

#[test]
fn items_render_in_tool_order() {
    let driver = standard_driver();
    let snapshot = driver.dock().snapshot();
    let ids: Vec<&str> = snapshot
        .items
        .iter()
        .map(|item| item.id.as_str())
        .collect();
    assert_eq!(ids, ["brush", "eraser", "fill", "pick", "zoom", "pan"]);
}
