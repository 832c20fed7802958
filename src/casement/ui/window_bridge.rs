//! [`WindowService`] backed by a gpui window.
//!
//! gpui only hands out `&mut Window` inside callbacks, so the bridge keeps a snapshot of
//! the window state and queues commands. The title bar calls [`GpuiWindowBridge::sync`]
//! before running a button's operation and [`GpuiWindowBridge::flush`] right after.

use std::cell::{Cell, RefCell};

use gpui::Window;

use crate::casement::window_controls::{
    ListenerRegistry, WindowEvent, WindowListener, WindowService,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowCommand {
    Minimize,
    Maximize,
    Unmaximize,
    Close,
}

pub struct GpuiWindowBridge {
    maximized: Cell<bool>,
    maximizable: Cell<bool>,
    pending: RefCell<Vec<WindowCommand>>,
    listeners: ListenerRegistry,
}

impl GpuiWindowBridge {
    /// Create a bridge for a window in the given maximize state
    pub fn new(maximized: bool) -> Self {
        Self {
            maximized: Cell::new(maximized),
            maximizable: Cell::new(true),
            pending: RefCell::new(Vec::new()),
            listeners: ListenerRegistry::new(),
        }
    }

    pub fn set_maximizable(&self, maximizable: bool) {
        self.maximizable.set(maximizable);
    }

    /// Record the platform's maximize state, notifying listeners when it changed
    ///
    /// ### Arguments
    /// - `maximized`: The state reported by the platform window
    ///
    /// ### Returns
    /// - `true`: If the state changed and listeners were notified
    pub fn update_maximized(&self, maximized: bool) -> bool {
        if self.maximized.replace(maximized) == maximized {
            return false;
        }
        log::debug!("Window maximize state changed: {}", maximized);
        self.listeners.emit(if maximized {
            WindowEvent::Maximize
        } else {
            WindowEvent::Unmaximize
        });
        true
    }

    /// Read the maximize state from a gpui window
    pub fn sync(&self, window: &Window) -> bool {
        self.update_maximized(window.is_maximized())
    }

    /// Take the queued commands, oldest first
    pub fn take_commands(&self) -> Vec<WindowCommand> {
        self.pending.borrow_mut().drain(..).collect()
    }

    /// Apply the queued commands to a gpui window
    pub fn flush(&self, window: &mut Window) {
        for command in self.take_commands() {
            log::debug!("Applying window command {:?}", command);
            match command {
                WindowCommand::Minimize => window.minimize_window(),
                // gpui only exposes a toggle, so skip it when the window is already there.
                WindowCommand::Maximize => {
                    if !window.is_maximized() {
                        window.zoom_window();
                    }
                }
                WindowCommand::Unmaximize => {
                    if window.is_maximized() {
                        window.zoom_window();
                    }
                }
                WindowCommand::Close => {
                    window.remove_window();
                    return;
                }
            }
        }
        self.sync(window);
    }

    fn queue(&self, command: WindowCommand) {
        self.pending.borrow_mut().push(command);
    }
}

impl WindowService for GpuiWindowBridge {
    fn minimize(&self) {
        self.queue(WindowCommand::Minimize);
    }

    fn maximize(&self) {
        self.queue(WindowCommand::Maximize);
    }

    fn unmaximize(&self) {
        self.queue(WindowCommand::Unmaximize);
    }

    fn close(&self) {
        self.queue(WindowCommand::Close);
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
        if !self.listeners.remove(event, listener) {
            log::warn!("Tried to remove an unknown {:?} listener", event);
        }
    }
}
