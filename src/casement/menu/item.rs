//! Menu item records.
//!
//! Callers describe their menus with [`MenuItemConfig`], where every field is optional.
//! Before anything is laid out or rendered, each record is merged with the shared
//! [`MenuItemDefaults`] into a fully-populated [`MenuItem`].

use serde::{Deserialize, Serialize};

/// The kind of a menu entry
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuItemKind {
    #[default]
    Normal,
    Checkbox,
    Radio,
    Separator,
    Submenu,
}

/// A menu entry as supplied by the caller. Missing fields fall back to [`MenuItemDefaults`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItemConfig {
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<MenuItemKind>,
    pub id: Option<String>,
    pub enabled: Option<bool>,
    pub visible: Option<bool>,
    pub checked: Option<bool>,
    pub accelerator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submenu: Option<Vec<MenuItemConfig>>,
}

impl MenuItemConfig {
    /// Create a normal entry with the given label
    ///
    /// ### Arguments
    /// - `label`: The text shown for the entry
    ///
    /// ### Returns
    /// - `MenuItemConfig`: The entry, every other field left to the defaults
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    /// Create an entry opening a nested submenu
    ///
    /// ### Arguments
    /// - `label`: The text shown for the entry
    /// - `items`: The entries of the nested submenu
    ///
    /// ### Returns
    /// - `MenuItemConfig`: The submenu entry
    pub fn submenu(label: impl Into<String>, items: Vec<MenuItemConfig>) -> Self {
        Self {
            label: Some(label.into()),
            submenu: Some(items),
            ..Default::default()
        }
    }

    pub fn separator() -> Self {
        Self {
            kind: Some(MenuItemKind::Separator),
            ..Default::default()
        }
    }

    pub fn checkbox(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: Some(label.into()),
            kind: Some(MenuItemKind::Checkbox),
            checked: Some(checked),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_accelerator(mut self, accelerator: impl Into<String>) -> Self {
        self.accelerator = Some(accelerator.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = Some(false);
        self
    }

    /// Whether the entry declares a nested submenu. An empty submenu still counts.
    pub fn has_submenu(&self) -> bool {
        self.submenu.is_some()
    }
}

/// The shared default record merged under every caller entry.
///
/// | field         | default    |
/// |---------------|------------|
/// | `label`       | `""`       |
/// | `kind`        | `Normal`   |
/// | `enabled`     | `true`     |
/// | `visible`     | `true`     |
/// | `checked`     | `false`    |
/// | `accelerator` | none       |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItemDefaults {
    pub label: String,
    pub kind: MenuItemKind,
    pub enabled: bool,
    pub visible: bool,
    pub checked: bool,
    pub accelerator: Option<String>,
}

impl Default for MenuItemDefaults {
    fn default() -> Self {
        Self {
            label: String::new(),
            kind: MenuItemKind::Normal,
            enabled: true,
            visible: true,
            checked: false,
            accelerator: None,
        }
    }
}

/// A fully-populated menu entry. Nested entries stay as caller records until their own
/// level is walked.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub label: String,
    pub kind: MenuItemKind,
    pub id: Option<String>,
    pub enabled: bool,
    pub visible: bool,
    pub checked: bool,
    pub accelerator: Option<String>,
    pub submenu: Vec<MenuItemConfig>,
}

impl MenuItem {
    pub fn is_submenu(&self) -> bool {
        self.kind == MenuItemKind::Submenu
    }

    pub fn is_separator(&self) -> bool {
        self.kind == MenuItemKind::Separator
    }
}

/// Merge a caller entry over the shared defaults.
///
/// Fields set on `config` win. An entry that declares a submenu is always of kind
/// [`MenuItemKind::Submenu`], whatever its declared type. An absent submenu merges to an
/// empty sequence.
///
/// ### Arguments
/// - `config`: The caller's entry
/// - `defaults`: The shared default record
///
/// ### Returns
/// - `MenuItem`: The merged entry
pub fn merge_item(config: &MenuItemConfig, defaults: &MenuItemDefaults) -> MenuItem {
    let kind = if config.has_submenu() {
        MenuItemKind::Submenu
    } else {
        config.kind.unwrap_or(defaults.kind)
    };
    MenuItem {
        label: config
            .label
            .clone()
            .unwrap_or_else(|| defaults.label.clone()),
        kind,
        id: config.id.clone(),
        enabled: config.enabled.unwrap_or(defaults.enabled),
        visible: config.visible.unwrap_or(defaults.visible),
        checked: config.checked.unwrap_or(defaults.checked),
        accelerator: config
            .accelerator
            .clone()
            .or_else(|| defaults.accelerator.clone()),
        submenu: config.submenu.clone().unwrap_or_default(),
    }
}
