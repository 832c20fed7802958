//! Minimize / maximize / close buttons for a borderless window.
//!
//! The widget never talks to a platform window directly. Everything goes through an
//! injected [`WindowService`], which also delivers maximize state notifications.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Maximize state notifications emitted by a [`WindowService`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowEvent {
    Maximize,
    Unmaximize,
}

/// Notification handler. Removal matches by pointer identity, so the same `Rc` must be
/// passed to `add_listener` and `remove_listener`.
pub type WindowListener = Rc<dyn Fn()>;

/// The window manager operations the title bar relies on
pub trait WindowService {
    fn minimize(&self);
    fn maximize(&self);
    fn unmaximize(&self);
    fn close(&self);
    fn is_maximized(&self) -> bool;
    fn is_maximizable(&self) -> bool;
    fn add_listener(&self, event: WindowEvent, listener: WindowListener);
    fn remove_listener(&self, event: WindowEvent, listener: &WindowListener);
}

/// Listener bookkeeping for [`WindowService`] implementations
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: RefCell<Vec<(WindowEvent, WindowListener)>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, event: WindowEvent, listener: WindowListener) {
        self.listeners.borrow_mut().push((event, listener));
    }

    /// Remove the first registration of `listener` for `event`
    ///
    /// ### Returns
    /// - `true`: If a matching registration was found
    pub fn remove(&self, event: WindowEvent, listener: &WindowListener) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        match listeners
            .iter()
            .position(|(e, l)| *e == event && Rc::ptr_eq(l, listener))
        {
            Some(position) => {
                listeners.remove(position);
                true
            }
            None => false,
        }
    }

    /// Call every listener registered for `event`
    pub fn emit(&self, event: WindowEvent) {
        // Listeners may register or remove others while running.
        let matching: Vec<WindowListener> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(e, _)| *e == event)
            .map(|(_, l)| l.clone())
            .collect();
        for listener in matching {
            listener();
        }
    }

    pub fn count(&self, event: WindowEvent) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|(e, _)| *e == event)
            .count()
    }
}

/// Which window control buttons accept clicks
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowControlsConfig {
    pub disable_minimize: bool,
    pub disable_maximize: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Minimize,
    Maximize,
    Close,
}

/// The symbol drawn on a control button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlGlyph {
    Minimize,
    Maximize,
    Restore,
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlButton {
    pub kind: ControlKind,
    pub glyph: ControlGlyph,
    pub interactive: bool,
}

/// The window control buttons and their view of the maximize state
pub struct WindowControls {
    service: Rc<dyn WindowService>,
    config: WindowControlsConfig,
    is_maximized: Rc<Cell<bool>>,
    on_maximize: WindowListener,
    on_unmaximize: WindowListener,
    active: bool,
}

impl WindowControls {
    /// Create the window controls, reading the current maximize state from the service
    ///
    /// ### Arguments
    /// - `service`: The window manager service
    /// - `config`: Which buttons are disabled
    ///
    /// ### Returns
    /// - `WindowControls`: The controls, not yet subscribed to notifications
    pub fn new(service: Rc<dyn WindowService>, config: WindowControlsConfig) -> Self {
        let is_maximized = Rc::new(Cell::new(service.is_maximized()));
        let on_maximize: WindowListener = {
            let is_maximized = is_maximized.clone();
            Rc::new(move || is_maximized.set(true))
        };
        let on_unmaximize: WindowListener = {
            let is_maximized = is_maximized.clone();
            Rc::new(move || is_maximized.set(false))
        };
        Self {
            service,
            config,
            is_maximized,
            on_maximize,
            on_unmaximize,
            active: false,
        }
    }

    /// Subscribe to maximize state notifications. Does nothing if already subscribed.
    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        self.service
            .add_listener(WindowEvent::Maximize, self.on_maximize.clone());
        self.service
            .add_listener(WindowEvent::Unmaximize, self.on_unmaximize.clone());
        self.active = true;
        log::debug!("Window controls subscribed to maximize notifications");
    }

    /// Remove the handlers registered by [`Self::activate`]. Does nothing if not subscribed.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        self.service
            .remove_listener(WindowEvent::Maximize, &self.on_maximize);
        self.service
            .remove_listener(WindowEvent::Unmaximize, &self.on_unmaximize);
        self.active = false;
        log::debug!("Window controls unsubscribed from maximize notifications");
    }

    pub fn is_maximized(&self) -> bool {
        self.is_maximized.get()
    }

    /// Minimize the window. The `disable_minimize` flag is not checked here; it only
    /// controls whether the button accepts clicks.
    pub fn minimize(&self) {
        self.service.minimize();
    }

    /// Maximize or restore the window depending on the state the service reports
    pub fn toggle_maximize(&self) {
        if !self.service.is_maximizable() {
            log::debug!("Window is not maximizable, ignoring maximize request");
            return;
        }
        if self.service.is_maximized() {
            self.service.unmaximize();
        } else {
            self.service.maximize();
        }
    }

    pub fn close(&self) {
        self.service.close();
    }

    /// Run the operation behind a button
    pub fn press(&self, kind: ControlKind) {
        match kind {
            ControlKind::Minimize => self.minimize(),
            ControlKind::Maximize => self.toggle_maximize(),
            ControlKind::Close => self.close(),
        }
    }

    /// Describe the three buttons in display order
    ///
    /// ### Returns
    /// - `[ControlButton; 3]`: Minimize, maximize (or restore) and close
    pub fn buttons(&self) -> [ControlButton; 3] {
        [
            ControlButton {
                kind: ControlKind::Minimize,
                glyph: ControlGlyph::Minimize,
                interactive: !self.config.disable_minimize,
            },
            ControlButton {
                kind: ControlKind::Maximize,
                glyph: if self.is_maximized() {
                    ControlGlyph::Restore
                } else {
                    ControlGlyph::Maximize
                },
                interactive: !self.config.disable_maximize,
            },
            ControlButton {
                kind: ControlKind::Close,
                glyph: ControlGlyph::Close,
                interactive: true,
            },
        ]
    }
}

impl Drop for WindowControls {
    fn drop(&mut self) {
        self.deactivate();
    }
}
