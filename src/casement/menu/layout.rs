//! Flyout placement for nested submenus.
//!
//! A submenu opens to the right of its parent panel unless that would push it past the
//! right edge of the viewport. Each level only looks at its immediate parent's right edge,
//! so the decision is repeated independently all the way down the tree.

use serde::{Deserialize, Serialize};

use crate::casement::menu::item::MenuItemConfig;

/// The side of its parent panel a submenu opens on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderSide {
    Left,
    #[default]
    Right,
}

/// What to do when a submenu fits on neither side of its parent
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Stay on the right and let the panel overflow the viewport.
    KeepRight,
    /// Open towards the side with more room and pin the panel against that viewport edge.
    #[default]
    PinToRoomierEdge,
}

/// Placement of one submenu panel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutDecision {
    pub side: RenderSide,
    /// Offset of the panel's right boundary from the viewport origin, in pixels.
    pub right_edge: f32,
    /// Horizontal shift applied on top of the natural placement for `side`, in pixels.
    pub nudge: f32,
}

/// Fixed inputs shared by every level of a layout pass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubmenuMetrics {
    pub viewport_width: f32,
    pub submenu_width: f32,
    pub policy: OverflowPolicy,
}

/// Decide where a submenu opens relative to its parent panel
///
/// ### Arguments
/// - `parent_right_edge`: The right edge of the parent panel
/// - `viewport_width`: The current width of the viewport
/// - `submenu_width`: The width of every submenu panel
/// - `policy`: What to do when neither side has enough room
///
/// ### Returns
/// - `LayoutDecision`: The side the submenu opens on and its resulting right edge
pub fn place_submenu(
    parent_right_edge: f32,
    viewport_width: f32,
    submenu_width: f32,
    policy: OverflowPolicy,
) -> LayoutDecision {
    let right_edge = parent_right_edge + submenu_width;
    if right_edge <= viewport_width {
        return LayoutDecision {
            side: RenderSide::Right,
            right_edge,
            nudge: 0.0,
        };
    }
    let left_room = parent_right_edge - submenu_width;
    if submenu_width < left_room {
        return LayoutDecision {
            side: RenderSide::Left,
            right_edge: left_room,
            nudge: 0.0,
        };
    }
    match policy {
        OverflowPolicy::KeepRight => LayoutDecision {
            side: RenderSide::Right,
            right_edge,
            nudge: 0.0,
        },
        OverflowPolicy::PinToRoomierEdge => {
            let right_room = viewport_width - parent_right_edge;
            log::trace!(
                "Submenu fits on neither side (right room {}, left room {})",
                right_room,
                left_room
            );
            if right_room >= left_room {
                LayoutDecision {
                    side: RenderSide::Right,
                    right_edge: viewport_width,
                    nudge: viewport_width - right_edge,
                }
            } else {
                LayoutDecision {
                    side: RenderSide::Left,
                    right_edge: submenu_width,
                    nudge: submenu_width - left_room,
                }
            }
        }
    }
}

/// One entry of a menu level, annotated with the placement of its flyout if it has one
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutNode<'a> {
    pub index: usize,
    pub item: &'a MenuItemConfig,
    /// `None` for leaf entries
    pub decision: Option<LayoutDecision>,
    pub children: Vec<LayoutNode<'a>>,
}

impl LayoutNode<'_> {
    pub fn is_submenu(&self) -> bool {
        self.decision.is_some()
    }
}

/// Lay out every submenu below one menu level
///
/// ### Arguments
/// - `items`: The entries of the level, in display order
/// - `parent_right_edge`: The right edge of the panel holding `items`
/// - `metrics`: The viewport width, submenu width and overflow policy
///
/// ### Returns
/// - `Vec<LayoutNode>`: One node per entry, submenus carrying their placement and laid-out children
pub fn layout_tree<'a>(
    items: &'a [MenuItemConfig],
    parent_right_edge: f32,
    metrics: &SubmenuMetrics,
) -> Vec<LayoutNode<'a>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item.submenu.as_deref() {
            Some(submenu) => {
                let decision = place_submenu(
                    parent_right_edge,
                    metrics.viewport_width,
                    metrics.submenu_width,
                    metrics.policy,
                );
                LayoutNode {
                    index,
                    item,
                    decision: Some(decision),
                    children: layout_tree(submenu, decision.right_edge, metrics),
                }
            }
            None => LayoutNode {
                index,
                item,
                decision: None,
                children: Vec::new(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_exactly_on_the_right() {
        let decision = place_submenu(800.0, 1000.0, 200.0, OverflowPolicy::default());
        assert_eq!(decision.side, RenderSide::Right);
        assert_eq!(decision.right_edge, 1000.0);
    }

    #[test]
    fn test_keep_right_leaves_overflow_in_place() {
        let decision = place_submenu(300.0, 400.0, 200.0, OverflowPolicy::KeepRight);
        assert_eq!(decision.side, RenderSide::Right);
        assert_eq!(decision.right_edge, 500.0);
        assert_eq!(decision.nudge, 0.0);
    }

    #[test]
    fn test_pin_to_right_edge_when_right_has_more_room() {
        // right room 150, left room 100
        let decision = place_submenu(300.0, 450.0, 200.0, OverflowPolicy::PinToRoomierEdge);
        assert_eq!(decision.side, RenderSide::Right);
        assert_eq!(decision.right_edge, 450.0);
        assert_eq!(decision.nudge, -50.0);
    }

    #[test]
    fn test_pin_to_left_edge_when_left_has_more_room() {
        // right room 50, left room 150
        let decision = place_submenu(350.0, 400.0, 200.0, OverflowPolicy::PinToRoomierEdge);
        assert_eq!(decision.side, RenderSide::Left);
        assert_eq!(decision.right_edge, 200.0);
        assert_eq!(decision.nudge, 50.0);
    }

    #[test]
    fn test_layout_tree_annotates_only_submenus() {
        let items = vec![
            MenuItemConfig::new("New"),
            MenuItemConfig::submenu("Recent", vec![MenuItemConfig::new("a.txt")]),
        ];
        let metrics = SubmenuMetrics {
            viewport_width: 1000.0,
            submenu_width: 200.0,
            policy: OverflowPolicy::default(),
        };
        let nodes = layout_tree(&items, 200.0, &metrics);
        assert_eq!(nodes.len(), 2);
        assert!(!nodes[0].is_submenu());
        assert!(nodes[1].is_submenu());
        assert_eq!(nodes[1].decision.map(|d| d.right_edge), Some(400.0));
        assert_eq!(nodes[1].children.len(), 1);
    }
}
