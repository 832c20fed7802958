//! Integration tests for the gpui window bridge driving the window controls
//!
//! The bridge's platform side is exercised through `update_maximized()` and
//! `take_commands()`, which is what the title bar feeds from and into gpui.

use std::rc::Rc;

use casement::casement::{
    ui::window_bridge::{GpuiWindowBridge, WindowCommand},
    window_controls::{ControlKind, WindowControls, WindowControlsConfig, WindowService},
};

#[test]
fn test_controls_follow_platform_state() {
    let bridge = Rc::new(GpuiWindowBridge::new(false));
    let mut controls = WindowControls::new(bridge.clone(), WindowControlsConfig::default());
    controls.activate();

    assert!(bridge.update_maximized(true));
    assert!(controls.is_maximized());
    assert!(bridge.update_maximized(false));
    assert!(!controls.is_maximized());
}

#[test]
fn test_maximize_button_queues_the_right_command() {
    let bridge = Rc::new(GpuiWindowBridge::new(false));
    let controls = WindowControls::new(bridge.clone(), WindowControlsConfig::default());

    controls.press(ControlKind::Maximize);
    assert_eq!(bridge.take_commands(), vec![WindowCommand::Maximize]);

    bridge.update_maximized(true);
    controls.press(ControlKind::Maximize);
    assert_eq!(bridge.take_commands(), vec![WindowCommand::Unmaximize]);
}

#[test]
fn test_not_maximizable_queues_nothing() {
    let bridge = Rc::new(GpuiWindowBridge::new(false));
    bridge.set_maximizable(false);
    let controls = WindowControls::new(bridge.clone(), WindowControlsConfig::default());
    controls.press(ControlKind::Maximize);
    assert!(bridge.take_commands().is_empty());
    assert!(!bridge.is_maximizable());
}

#[test]
fn test_deactivated_controls_ignore_platform_changes() {
    let bridge = Rc::new(GpuiWindowBridge::new(false));
    let mut controls = WindowControls::new(bridge.clone(), WindowControlsConfig::default());
    controls.activate();
    controls.deactivate();

    bridge.update_maximized(true);
    assert!(!controls.is_maximized());
}

#[test]
fn test_minimize_and_close_commands() {
    let bridge = Rc::new(GpuiWindowBridge::new(false));
    let controls = WindowControls::new(bridge.clone(), WindowControlsConfig::default());
    controls.minimize();
    controls.close();
    assert_eq!(
        bridge.take_commands(),
        vec![WindowCommand::Minimize, WindowCommand::Close]
    );
}
