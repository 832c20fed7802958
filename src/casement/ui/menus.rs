use gpui::{prelude::FluentBuilder, *};
use gpui_component::{ActiveTheme, StyledExt, h_flex, v_flex};

use crate::casement::menu::{
    bar::Menu,
    item::{MenuItem, MenuItemConfig, MenuItemKind},
    layout::RenderSide,
    tree::{LeafRenderer, MenuNode, MenuPath, StateChange, StateChangeHandler, SubmenuNode},
};
use crate::casement::ui::titlebar::CustomTitleBar;

pub const MENU_ROW_HEIGHT: f32 = 24.0;
pub const MENU_PANEL_PADDING: f32 = 5.0;
const SUBMENU_LABEL_HEIGHT: f32 = 20.0;

/// Colors used by menu panels, read once per render
#[derive(Clone, Copy)]
pub struct MenuColors {
    pub background: Hsla,
    pub foreground: Hsla,
    pub muted: Hsla,
    pub hover: Hsla,
    pub border: Hsla,
}

impl MenuColors {
    pub fn from_theme(cx: &App) -> Self {
        let theme = cx.theme();
        Self {
            background: theme.popover,
            foreground: theme.popover_foreground,
            muted: theme.muted_foreground,
            hover: theme.accent,
            border: theme.border,
        }
    }
}

/// Leaf renderer drawing plain gpui rows.
///
/// Clicking an enabled row fires the shared state change callback and closes the menu bar.
pub struct GpuiLeafRenderer {
    pub colors: MenuColors,
    pub title_bar: WeakEntity<CustomTitleBar>,
}

impl LeafRenderer for GpuiLeafRenderer {
    type Output = AnyElement;

    fn render_leaf(
        &self,
        item: &MenuItem,
        index: usize,
        path: &MenuPath,
        on_change: &StateChangeHandler,
    ) -> AnyElement {
        if !item.visible {
            return div().into_any_element();
        }
        if item.is_separator() {
            return div()
                .my_1()
                .h(px(1.0))
                .w_full()
                .bg(self.colors.border)
                .into_any_element();
        }
        let colors = self.colors;
        let marker = match item.kind {
            MenuItemKind::Checkbox if item.checked => "✓",
            MenuItemKind::Radio if item.checked => "•",
            _ => "",
        };
        let change = StateChange::activation(item, index, path);
        let on_change = on_change.clone();
        let title_bar = self.title_bar.clone();
        let hover_title_bar = self.title_bar.clone();
        let level_path = path.clone();
        h_flex()
            .id(SharedString::from(format!(
                "menu-item-{}",
                path.qualified_id(index)
            )))
            .h(px(MENU_ROW_HEIGHT))
            .px_2()
            .gap_2()
            .items_center()
            .text_sm()
            .text_color(if item.enabled {
                colors.foreground
            } else {
                colors.muted
            })
            .child(div().w_3().child(marker))
            .child(div().flex_1().child(item.label.clone()))
            .when_some(item.accelerator.clone(), |this, accelerator| {
                this.child(div().text_xs().text_color(colors.muted).child(accelerator))
            })
            // Hovering a leaf closes the flyouts opened from its siblings.
            .on_hover(move |hovered: &bool, _window, cx: &mut App| {
                if *hovered {
                    hover_title_bar
                        .update(cx, |title_bar, cx| {
                            title_bar.hover_submenu(level_path.clone(), cx);
                        })
                        .ok();
                }
            })
            .when(item.enabled, move |this| {
                this.hover(move |style| style.bg(colors.hover))
                    .on_click(move |_: &ClickEvent, _window, cx: &mut App| {
                        log::debug!("Menu item {} activated", change.path.qualified_id(index));
                        on_change(&change);
                        title_bar
                            .update(cx, |title_bar, cx| title_bar.close_menus(cx))
                            .ok();
                    })
            })
            .into_any_element()
    }
}

/// Turn a rendered menu level into gpui rows, attaching flyouts to submenu rows
///
/// ### Arguments
/// - `nodes`: The render tree of the level
/// - `hovered`: The deepest submenu currently hovered, if any
/// - `submenu_width`: The width of submenu panels
/// - `show_labels`: Whether submenu panels start with their label
/// - `colors`: The menu colors
/// - `cx`: The title bar context
///
/// ### Returns
/// - `Vec<AnyElement>`: One row per entry
pub fn render_nodes(
    nodes: Vec<MenuNode<AnyElement>>,
    hovered: Option<&MenuPath>,
    submenu_width: f32,
    show_labels: bool,
    colors: MenuColors,
    cx: &mut Context<CustomTitleBar>,
) -> Vec<AnyElement> {
    nodes
        .into_iter()
        .map(|node| match node {
            MenuNode::Leaf(element) => element,
            MenuNode::Submenu(submenu) => {
                render_submenu(submenu, hovered, submenu_width, show_labels, colors, cx)
            }
        })
        .collect()
}

fn render_submenu(
    submenu: SubmenuNode<AnyElement>,
    hovered: Option<&MenuPath>,
    submenu_width: f32,
    show_labels: bool,
    colors: MenuColors,
    cx: &mut Context<CustomTitleBar>,
) -> AnyElement {
    let is_open = hovered.is_some_and(|hovered| submenu.path.is_prefix_of(hovered));
    let path = submenu.path.clone();
    let row = h_flex()
        .id(SharedString::from(format!("submenu-{}", submenu.path)))
        .relative()
        .h(px(MENU_ROW_HEIGHT))
        .px_2()
        .gap_2()
        .items_center()
        .text_sm()
        .text_color(colors.foreground)
        .when(is_open, |this| this.bg(colors.hover))
        .hover(move |style| style.bg(colors.hover))
        .on_hover(cx.listener(move |this, hovered: &bool, _window, cx| {
            if *hovered {
                this.hover_submenu(path.clone(), cx);
            }
        }))
        .child(div().w_3())
        .child(div().flex_1().child(submenu.item.label.clone()))
        .child(div().text_xs().text_color(colors.muted).child("›"));
    if !is_open {
        return row.into_any_element();
    }

    let offset = match submenu.decision.side {
        RenderSide::Right => submenu_width,
        RenderSide::Left => -submenu_width,
    } + submenu.decision.nudge;
    let top = if show_labels {
        -(MENU_PANEL_PADDING + SUBMENU_LABEL_HEIGHT)
    } else {
        -MENU_PANEL_PADDING
    };
    let label = submenu.item.label.clone();
    let level = submenu.level;
    let children = render_nodes(
        submenu.children,
        hovered,
        submenu_width,
        show_labels,
        colors,
        cx,
    );
    let panel = v_flex()
        .occlude()
        .absolute()
        .top(px(top))
        .left(px(offset))
        .w(px(submenu_width))
        .py(px(MENU_PANEL_PADDING))
        .bg(colors.background)
        .border_1()
        .border_color(colors.border)
        .shadow_md()
        .when(show_labels, |this| {
            this.child(
                div()
                    .h(px(SUBMENU_LABEL_HEIGHT))
                    .mx_2()
                    .text_sm()
                    .font_semibold()
                    .text_color(colors.muted)
                    .overflow_hidden()
                    .text_ellipsis()
                    .child(label),
            )
        })
        .children(children);
    row.child(deferred(panel).with_priority(level))
        .into_any_element()
}

/// Build the menus of the demo application
///
/// ### Returns
/// - `Vec<Menu>`: The menus shown in the title bar
pub fn build_menus() -> Vec<Menu> {
    vec![
        Menu::new(
            "File",
            vec![
                MenuItemConfig::new("New").with_id("new").with_accelerator("Ctrl+N"),
                MenuItemConfig::new("Open...").with_id("open").with_accelerator("Ctrl+O"),
                MenuItemConfig::submenu(
                    "Open Recent",
                    vec![
                        MenuItemConfig::new("notes.md").with_id("recent-0"),
                        MenuItemConfig::new("todo.txt").with_id("recent-1"),
                        MenuItemConfig::separator(),
                        MenuItemConfig::new("Clear recent files").with_id("clear-recent"),
                    ],
                ),
                MenuItemConfig::separator(),
                MenuItemConfig::new("Save").with_id("save").with_accelerator("Ctrl+S"),
                MenuItemConfig::new("Save as...").with_id("save-as"),
                MenuItemConfig::separator(),
                MenuItemConfig::new("Quit").with_id("quit").with_accelerator("Ctrl+Q"),
            ],
        ),
        Menu::new(
            "Edit",
            vec![
                MenuItemConfig::new("Undo").with_id("undo").with_accelerator("Ctrl+Z"),
                MenuItemConfig::new("Redo").with_id("redo").with_accelerator("Ctrl+Y"),
                MenuItemConfig::separator(),
                MenuItemConfig::new("Cut").with_id("cut").with_accelerator("Ctrl+X"),
                MenuItemConfig::new("Copy").with_id("copy").with_accelerator("Ctrl+C"),
                MenuItemConfig::new("Paste").with_id("paste").with_accelerator("Ctrl+V"),
            ],
        ),
        Menu::new(
            "View",
            vec![
                MenuItemConfig::checkbox("Word wrap", false).with_id("word-wrap"),
                MenuItemConfig::checkbox("Line numbers", true).with_id("line-numbers"),
                MenuItemConfig::submenu(
                    "Appearance",
                    vec![
                        MenuItemConfig::submenu(
                            "Zoom",
                            vec![
                                MenuItemConfig::new("Zoom in").with_id("zoom-in"),
                                MenuItemConfig::new("Zoom out").with_id("zoom-out"),
                                MenuItemConfig::new("Reset zoom").with_id("zoom-reset"),
                            ],
                        ),
                        MenuItemConfig::new("Full screen").with_id("full-screen"),
                    ],
                ),
            ],
        ),
        Menu::new(
            "Help",
            vec![MenuItemConfig::new("About Casement").with_id("about")],
        ),
    ]
}
