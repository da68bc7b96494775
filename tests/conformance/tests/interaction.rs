//! Interaction eligibility: disabled exclusion, loading mutual exclusion,
//! click flash lifecycle, and the activation notification contract.

use marina_conformance::{init_tracing, item_center, standard_config, standard_tools};

use marina::{Dock, DockDriver};

fn driver_with_disabled(index: usize) -> DockDriver {
    init_tracing();
    let mut tools = standard_tools();
    tools[index] = tools[index].clone().disabled();
    DockDriver::new(Dock::with_seed(tools, standard_config(), 7))
}

#[test]
fn disabled_item_is_excluded_from_magnification_and_activation() {
    let mut driver = driver_with_disabled(0);

    // Pointer dead on the disabled item
    let c = item_center(0);
    driver.pointer_move(c.x, c.y);
    for _ in 0..200 {
        driver.step_frame();
    }

    let snapshot = driver.dock().snapshot();
    assert_eq!(snapshot.items[0].scale, 1.0, "disabled item magnified");
    assert!(!snapshot.items[0].hovered);
    assert!(snapshot.items[1].scale > 1.0, "enabled neighbor unaffected");

    // Clicks are no-ops: no notification, no flash, no burst
    assert!(!driver.activate("brush"));
    assert!(driver.activations().is_empty());
    let snapshot = driver.dock().snapshot();
    assert!(!snapshot.items[0].clicked);
    assert!(snapshot.particles.is_empty());
}

#[test]
fn loading_suppresses_activations_dock_wide() {
    let mut driver = DockDriver::new(Dock::with_seed(
        standard_tools(),
        standard_config(),
        7,
    ));

    driver.dock_mut().set_loading(true);
    assert!(!driver.activate("brush"));
    assert!(!driver.activate("eraser"));
    assert!(driver.activations().is_empty());

    // Magnification is not affected by the latch
    let c = item_center(0);
    driver.pointer_move(c.x, c.y);
    for _ in 0..50 {
        driver.step_frame();
    }
    assert!(driver.dock().snapshot().items[0].scale > 1.0);

    // Clearing the latch restores activation
    driver.dock_mut().set_loading(false);
    assert!(driver.activate("brush"));
    assert_eq!(driver.take_activations(), ["brush".to_string()]);
}

#[test]
fn activation_notifies_exactly_once_per_click() {
    let mut driver = DockDriver::new(Dock::with_seed(
        standard_tools(),
        standard_config(),
        7,
    ));

    driver.activate("brush");
    driver.activate("eraser");
    driver.activate("brush");

    assert_eq!(
        driver.take_activations(),
        ["brush".to_string(), "eraser".to_string(), "brush".to_string()]
    );
    // Nothing left over after the drain
    driver.run_until_settled(2000);
    assert!(driver.activations().is_empty());
}

#[test]
fn click_flash_arms_and_expires() {
    let mut driver = DockDriver::new(Dock::with_seed(
        standard_tools(),
        standard_config(),
        7,
    ));

    // activate() executes the whole batch, flash expiry included (the
    // standard config shrinks the flash to 1ms)
    driver.activate("brush");
    assert!(!driver.dock().snapshot().items[0].clicked);

    // Arm manually and observe the flash before its expiry is delivered
    let cmd = driver.dock_mut().on_activate("eraser");
    assert!(cmd.is_some());
    assert!(driver.dock().snapshot().items[1].clicked);
}

#[test]
fn hover_tracks_only_enabled_items() {
    let mut driver = driver_with_disabled(1);

    let c = item_center(1);
    driver.pointer_move(c.x, c.y);
    assert!(driver.dock().snapshot().items.iter().all(|i| !i.hovered));

    let c = item_center(2);
    driver.pointer_move(c.x, c.y);
    let snapshot = driver.dock().snapshot();
    assert!(snapshot.items[2].hovered);
    assert_eq!(
        snapshot.items.iter().filter(|i| i.hovered).count(),
        1,
        "hover is exclusive"
    );
}
