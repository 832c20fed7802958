//! Turns a laid-out menu level into a render tree.
//!
//! Submenus become [`SubmenuNode`] containers carrying their placement. Everything else is
//! handed to a [`LeafRenderer`], which owns activation and checked-state behaviour.

use std::fmt;
use std::rc::Rc;

use crate::casement::menu::{
    item::{MenuItem, MenuItemConfig, MenuItemDefaults, MenuItemKind, merge_item},
    layout::{LayoutDecision, LayoutNode, SubmenuMetrics, layout_tree},
};

/// One step of the path from the menu root to an entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Index(usize),
    Submenu,
}

/// Location of an entry inside the menu tree.
///
/// A submenu at index `i` of a level with path `p` has path `p, i, submenu`. Leaves keep
/// the path of the level they sit in; their own index travels next to it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MenuPath(Vec<PathSegment>);

impl MenuPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Path of the submenu opened by the entry at `index` of this level
    pub fn submenu(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        segments.push(PathSegment::Submenu);
        Self(segments)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Whether `self` is `other` or one of its ancestors
    pub fn is_prefix_of(&self, other: &MenuPath) -> bool {
        other.0.starts_with(&self.0)
    }

    pub fn depth(&self) -> usize {
        self.0
            .iter()
            .filter(|segment| **segment == PathSegment::Submenu)
            .count()
    }

    /// Identifier of the entry at `index` of this level, e.g. `1/submenu/3`
    pub fn qualified_id(&self, index: usize) -> String {
        if self.0.is_empty() {
            index.to_string()
        } else {
            format!("{}/{}", self, index)
        }
    }
}

impl fmt::Display for MenuPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|segment| match segment {
                PathSegment::Index(index) => index.to_string(),
                PathSegment::Submenu => "submenu".to_string(),
            })
            .collect();
        write!(f, "{}", parts.join("/"))
    }
}

/// Notification sent by a leaf renderer when an entry is activated or toggled
#[derive(Clone, Debug, PartialEq)]
pub struct StateChange {
    pub path: MenuPath,
    pub index: usize,
    pub id: Option<String>,
    pub checked: bool,
}

impl StateChange {
    /// Notification for activating the leaf at `index` of the level at `path`.
    ///
    /// A checkbox reports its flipped state, a radio button always reports checked and
    /// other entries pass their current `checked` value through.
    pub fn activation(item: &MenuItem, index: usize, path: &MenuPath) -> Self {
        let checked = match item.kind {
            MenuItemKind::Checkbox => !item.checked,
            MenuItemKind::Radio => true,
            _ => item.checked,
        };
        Self {
            path: path.clone(),
            index,
            id: item.id.clone(),
            checked,
        }
    }
}

/// Callback shared by every level of a menu tree
pub type StateChangeHandler = Rc<dyn Fn(&StateChange)>;

/// Renders entries that do not open a submenu
pub trait LeafRenderer {
    type Output;

    /// Render one leaf entry
    ///
    /// ### Arguments
    /// - `item`: The merged entry
    /// - `index`: The position of the entry in its level
    /// - `path`: The path of the level holding the entry
    /// - `on_change`: The shared state change callback
    fn render_leaf(
        &self,
        item: &MenuItem,
        index: usize,
        path: &MenuPath,
        on_change: &StateChangeHandler,
    ) -> Self::Output;
}

/// A submenu container and its rendered entries
pub struct SubmenuNode<L> {
    pub item: MenuItem,
    pub index: usize,
    pub level: usize,
    pub path: MenuPath,
    pub decision: LayoutDecision,
    pub children: Vec<MenuNode<L>>,
}

pub enum MenuNode<L> {
    Submenu(SubmenuNode<L>),
    Leaf(L),
}

impl<L> MenuNode<L> {
    pub fn as_submenu(&self) -> Option<&SubmenuNode<L>> {
        match self {
            MenuNode::Submenu(node) => Some(node),
            MenuNode::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&L> {
        match self {
            MenuNode::Leaf(leaf) => Some(leaf),
            MenuNode::Submenu(_) => None,
        }
    }
}

/// Walks laid-out menu levels, merging defaults and delegating leaves
pub struct MenuTreeRenderer {
    defaults: MenuItemDefaults,
    on_change: StateChangeHandler,
}

impl MenuTreeRenderer {
    /// Create a new menu tree renderer
    ///
    /// ### Arguments
    /// - `defaults`: The default record merged under every entry
    /// - `on_change`: The callback handed unchanged to every leaf, at every depth
    ///
    /// ### Returns
    /// - `MenuTreeRenderer`: The renderer
    pub fn new(defaults: MenuItemDefaults, on_change: StateChangeHandler) -> Self {
        Self {
            defaults,
            on_change,
        }
    }

    /// Lay out and render the entries of one dropdown
    ///
    /// ### Arguments
    /// - `items`: The entries of the dropdown
    /// - `path`: The path of the dropdown, the root path for a standalone menu
    /// - `parent_right_edge`: The right edge of the dropdown panel
    /// - `metrics`: The viewport width, submenu width and overflow policy
    /// - `leaf_renderer`: The renderer for leaf entries
    ///
    /// ### Returns
    /// - `Vec<MenuNode<R::Output>>`: The render tree of the dropdown
    pub fn render_menu<R: LeafRenderer>(
        &self,
        items: &[MenuItemConfig],
        path: &MenuPath,
        parent_right_edge: f32,
        metrics: &SubmenuMetrics,
        leaf_renderer: &R,
    ) -> Vec<MenuNode<R::Output>> {
        let nodes = layout_tree(items, parent_right_edge, metrics);
        self.render_level(&nodes, path, 1, leaf_renderer)
    }

    /// Render one already laid-out level
    ///
    /// ### Arguments
    /// - `nodes`: The annotated entries of the level
    /// - `path`: The path of the level
    /// - `level`: The nesting level of the panel holding the entries, 1 for a dropdown
    /// - `leaf_renderer`: The renderer for leaf entries
    ///
    /// ### Returns
    /// - `Vec<MenuNode<R::Output>>`: One node per entry
    pub fn render_level<R: LeafRenderer>(
        &self,
        nodes: &[LayoutNode<'_>],
        path: &MenuPath,
        level: usize,
        leaf_renderer: &R,
    ) -> Vec<MenuNode<R::Output>> {
        nodes
            .iter()
            .map(|node| {
                let item = merge_item(node.item, &self.defaults);
                match node.decision {
                    Some(decision) => {
                        let submenu_path = path.submenu(node.index);
                        let children =
                            self.render_level(&node.children, &submenu_path, level + 1, leaf_renderer);
                        MenuNode::Submenu(SubmenuNode {
                            item,
                            index: node.index,
                            level: level + 1,
                            path: submenu_path,
                            decision,
                            children,
                        })
                    }
                    None => MenuNode::Leaf(leaf_renderer.render_leaf(
                        &item,
                        node.index,
                        path,
                        &self.on_change,
                    )),
                }
            })
            .collect()
    }
}
