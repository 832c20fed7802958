//! Open/close state of the top-level menu bar.

use serde::{Deserialize, Serialize};

use crate::casement::menu::item::MenuItemConfig;

/// A top-level entry of the menu bar, e.g. "File"
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub label: String,
    #[serde(default)]
    pub items: Vec<MenuItemConfig>,
}

impl Menu {
    pub fn new(label: impl Into<String>, items: Vec<MenuItemConfig>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }
}

/// Tracks which dropdown of the menu bar is open.
///
/// Clicking a title opens its dropdown, or closes it if it was already open. While a
/// dropdown is open, hovering another title switches to it.
#[derive(Clone, Debug, Default)]
pub struct MenuBarState {
    menus: Vec<Menu>,
    open_index: Option<usize>,
    title_spans: Vec<Option<TitleSpan>>,
}

impl MenuBarState {
    pub fn new(menus: Vec<Menu>) -> Self {
        let title_spans = vec![None; menus.len()];
        Self {
            menus,
            open_index: None,
            title_spans,
        }
    }

    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open_index
    }

    pub fn open_menu(&self) -> Option<&Menu> {
        self.open_index.and_then(|index| self.menus.get(index))
    }

    pub fn is_open(&self) -> bool {
        self.open_index.is_some()
    }

    /// Handle a click on the title at `index`
    ///
    /// ### Arguments
    /// - `index`: The position of the clicked title
    ///
    /// ### Returns
    /// - `true`: If the open dropdown changed
    /// - `false`: If the index is out of range
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.menus.len() {
            return false;
        }
        self.open_index = if self.open_index == Some(index) {
            None
        } else {
            Some(index)
        };
        log::debug!("Menu bar open dropdown: {:?}", self.open_index);
        true
    }

    /// Handle the pointer entering the title at `index`
    ///
    /// ### Returns
    /// - `true`: If another dropdown was open and the bar switched to `index`
    /// - `false`: Otherwise
    pub fn hover(&mut self, index: usize) -> bool {
        match self.open_index {
            Some(open) if open != index && index < self.menus.len() => {
                self.open_index = Some(index);
                true
            }
            _ => false,
        }
    }

    /// Handle a mouse press that landed outside every open menu panel
    ///
    /// ### Arguments
    /// - `title`: The title under the pointer, if the press hit one
    ///
    /// ### Returns
    /// - `true`: If the open dropdown changed
    pub fn press_outside(&mut self, title: Option<usize>) -> bool {
        match title {
            Some(index) => self.toggle(index),
            None => self.close(),
        }
    }

    /// Record where the title at `index` was laid out
    pub fn set_title_span(&mut self, index: usize, span: TitleSpan) {
        if let Some(slot) = self.title_spans.get_mut(index) {
            *slot = Some(span);
        }
    }

    /// Left edge of the title at `index`, or `fallback` until it has been laid out
    pub fn title_left(&self, index: usize, fallback: f32) -> f32 {
        self.title_spans
            .get(index)
            .copied()
            .flatten()
            .map_or(fallback, |span| span.left)
    }

    /// The laid out title containing the horizontal position `x`
    pub fn title_at(&self, x: f32) -> Option<usize> {
        self.title_spans
            .iter()
            .position(|span| span.is_some_and(|span| span.contains(x)))
    }

    /// Close the open dropdown
    ///
    /// ### Returns
    /// - `true`: If a dropdown was open
    pub fn close(&mut self) -> bool {
        self.open_index.take().is_some()
    }
}

/// Horizontal extent of a laid out menu bar title, in window coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitleSpan {
    pub left: f32,
    pub right: f32,
}

impl TitleSpan {
    pub fn contains(&self, x: f32) -> bool {
        x >= self.left && x < self.right
    }
}

/// Right edge of a dropdown panel hanging below a menu bar title
///
/// ### Arguments
/// - `title_left`: The x position of the title's left edge
/// - `menu_width`: The width of the dropdown panel
///
/// ### Returns
/// - `f32`: The right edge used as the anchor for the dropdown's submenus
pub fn dropdown_right_edge(title_left: f32, menu_width: f32) -> f32 {
    title_left + menu_width
}

/// Estimated width of a menu bar title
///
/// ### Arguments
/// - `label`: The title text
/// - `char_width`: The average glyph advance of the title font
/// - `padding`: The horizontal padding on both sides of the text combined
pub fn title_width(label: &str, char_width: f32, padding: f32) -> f32 {
    label.chars().count() as f32 * char_width + padding
}

/// Left edge of every title of the menu bar, starting at `origin`
pub fn title_offsets(menus: &[Menu], origin: f32, char_width: f32, padding: f32) -> Vec<f32> {
    menus
        .iter()
        .scan(origin, |left, menu| {
            let offset = *left;
            *left += title_width(&menu.label, char_width, padding);
            Some(offset)
        })
        .collect()
}
