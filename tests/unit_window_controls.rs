//! Unit tests for the window control buttons
//!
//! `FakeWindow` stands in for the window manager: it records every call and lets the
//! tests fire maximize notifications by hand.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use casement::casement::window_controls::{
    ControlGlyph, ControlKind, ListenerRegistry, WindowControls, WindowControlsConfig,
    WindowEvent, WindowListener, WindowService,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    Minimize,
    Maximize,
    Unmaximize,
    Close,
}

struct FakeWindow {
    maximized: Cell<bool>,
    maximizable: Cell<bool>,
    calls: RefCell<Vec<Call>>,
    listeners: ListenerRegistry,
}

impl FakeWindow {
    fn new(maximized: bool) -> Rc<Self> {
        Rc::new(Self {
            maximized: Cell::new(maximized),
            maximizable: Cell::new(true),
            calls: RefCell::new(Vec::new()),
            listeners: ListenerRegistry::new(),
        })
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Change the platform state without notifying anyone
    fn set_maximized_silently(&self, maximized: bool) {
        self.maximized.set(maximized);
    }

    fn notify(&self, event: WindowEvent) {
        self.listeners.emit(event);
    }
}

impl WindowService for FakeWindow {
    fn minimize(&self) {
        self.calls.borrow_mut().push(Call::Minimize);
    }

    fn maximize(&self) {
        self.calls.borrow_mut().push(Call::Maximize);
    }

    fn unmaximize(&self) {
        self.calls.borrow_mut().push(Call::Unmaximize);
    }

    fn close(&self) {
        self.calls.borrow_mut().push(Call::Close);
    }

    fn is_maximized(&self) -> bool {
        self.maximized.get()
    }

    fn is_maximizable(&self) -> bool {
        self.maximizable.get()
    }

    fn add_listener(&self, event: WindowEvent, listener: WindowListener) {
        self.listeners.add(event, listener);
    }

    fn remove_listener(&self, event: WindowEvent, listener: &WindowListener) {
        self.listeners.remove(event, listener);
    }
}

fn controls(window: &Rc<FakeWindow>, config: WindowControlsConfig) -> WindowControls {
    WindowControls::new(window.clone(), config)
}

#[test]
fn test_initial_state_comes_from_service() {
    let window = FakeWindow::new(true);
    assert!(controls(&window, WindowControlsConfig::default()).is_maximized());
    let window = FakeWindow::new(false);
    assert!(!controls(&window, WindowControlsConfig::default()).is_maximized());
}

#[test]
fn test_notifications_update_state_while_active() {
    let window = FakeWindow::new(false);
    let mut controls = controls(&window, WindowControlsConfig::default());
    controls.activate();

    window.notify(WindowEvent::Maximize);
    assert!(controls.is_maximized());
    window.notify(WindowEvent::Unmaximize);
    assert!(!controls.is_maximized());
}

#[test]
fn test_notifications_before_activation_are_ignored() {
    let window = FakeWindow::new(false);
    let controls = controls(&window, WindowControlsConfig::default());
    window.notify(WindowEvent::Maximize);
    assert!(!controls.is_maximized());
}

#[test]
fn test_deactivate_removes_exactly_the_registered_handlers() {
    let window = FakeWindow::new(false);
    let mut controls = controls(&window, WindowControlsConfig::default());
    controls.activate();
    controls.activate();
    assert_eq!(window.listeners.count(WindowEvent::Maximize), 1);
    assert_eq!(window.listeners.count(WindowEvent::Unmaximize), 1);

    controls.deactivate();
    assert_eq!(window.listeners.count(WindowEvent::Maximize), 0);
    assert_eq!(window.listeners.count(WindowEvent::Unmaximize), 0);

    window.notify(WindowEvent::Maximize);
    assert!(!controls.is_maximized());
}

#[test]
fn test_reactivation_after_deactivate() {
    let window = FakeWindow::new(false);
    let mut controls = controls(&window, WindowControlsConfig::default());
    controls.activate();
    controls.deactivate();
    controls.activate();
    window.notify(WindowEvent::Maximize);
    assert!(controls.is_maximized());
    assert_eq!(window.listeners.count(WindowEvent::Maximize), 1);
}

#[test]
fn test_drop_unsubscribes() {
    let window = FakeWindow::new(false);
    {
        let mut controls = controls(&window, WindowControlsConfig::default());
        controls.activate();
        assert_eq!(window.listeners.count(WindowEvent::Maximize), 1);
    }
    assert_eq!(window.listeners.count(WindowEvent::Maximize), 0);
    assert_eq!(window.listeners.count(WindowEvent::Unmaximize), 0);
}

#[test]
fn test_toggle_uses_service_state_not_cached_state() {
    let window = FakeWindow::new(false);
    let controls = controls(&window, WindowControlsConfig::default());
    // The platform maximized the window but no notification reached the widget.
    window.set_maximized_silently(true);
    assert!(!controls.is_maximized());

    controls.toggle_maximize();
    assert_eq!(window.calls(), vec![Call::Unmaximize]);

    window.set_maximized_silently(false);
    controls.toggle_maximize();
    assert_eq!(window.calls(), vec![Call::Unmaximize, Call::Maximize]);
}

#[test]
fn test_toggle_does_nothing_when_not_maximizable() {
    let window = FakeWindow::new(false);
    window.maximizable.set(false);
    let controls = controls(&window, WindowControlsConfig::default());
    controls.toggle_maximize();
    assert!(window.calls().is_empty());
}

#[test]
fn test_disabled_minimize_is_not_interactive_but_still_minimizes() {
    let window = FakeWindow::new(false);
    let config = WindowControlsConfig {
        disable_minimize: true,
        disable_maximize: false,
    };
    let controls = controls(&window, config);
    let [minimize, maximize, close] = controls.buttons();
    assert_eq!(minimize.kind, ControlKind::Minimize);
    assert!(!minimize.interactive);
    assert!(maximize.interactive);
    assert!(close.interactive);

    controls.minimize();
    assert_eq!(window.calls(), vec![Call::Minimize]);
}

#[test]
fn test_disabled_maximize_button() {
    let window = FakeWindow::new(false);
    let config = WindowControlsConfig {
        disable_minimize: false,
        disable_maximize: true,
    };
    let [minimize, maximize, _] = controls(&window, config).buttons();
    assert!(minimize.interactive);
    assert!(!maximize.interactive);
}

#[test]
fn test_close_is_unconditional() {
    let window = FakeWindow::new(false);
    let config = WindowControlsConfig {
        disable_minimize: true,
        disable_maximize: true,
    };
    let controls = controls(&window, config);
    controls.press(ControlKind::Close);
    assert_eq!(window.calls(), vec![Call::Close]);
    assert!(controls.buttons()[2].interactive);
}

#[test]
fn test_maximize_glyph_follows_state() {
    let window = FakeWindow::new(false);
    let mut controls = controls(&window, WindowControlsConfig::default());
    controls.activate();
    assert_eq!(controls.buttons()[1].glyph, ControlGlyph::Maximize);
    window.notify(WindowEvent::Maximize);
    assert_eq!(controls.buttons()[1].glyph, ControlGlyph::Restore);
}

#[test]
fn test_press_dispatches_each_kind() {
    let window = FakeWindow::new(false);
    let controls = controls(&window, WindowControlsConfig::default());
    controls.press(ControlKind::Minimize);
    controls.press(ControlKind::Maximize);
    controls.press(ControlKind::Close);
    assert_eq!(window.calls(), vec![Call::Minimize, Call::Maximize, Call::Close]);
}
