// Custom title bar: application menu on the left, window controls on the right
use std::rc::Rc;

use gpui::{prelude::FluentBuilder, *};
use gpui_component::{ActiveTheme, StyledExt, h_flex, v_flex};

use crate::casement::{
    menu::{
        bar::{Menu, MenuBarState, TitleSpan, dropdown_right_edge, title_offsets},
        item::MenuItemDefaults,
        tree::{MenuPath, MenuTreeRenderer, StateChangeHandler},
    },
    settings::Settings,
    ui::{
        menus::{GpuiLeafRenderer, MENU_PANEL_PADDING, MenuColors, render_nodes},
        window_bridge::GpuiWindowBridge,
    },
    window_controls::{ControlButton, ControlGlyph, ControlKind, WindowControls},
};

pub const TITLE_BAR_HEIGHT: f32 = 32.0;
const CONTROL_BUTTON_WIDTH: f32 = 45.0;
const MENU_BAR_ORIGIN: f32 = 8.0;
const TITLE_CHAR_WIDTH: f32 = 7.0;
const TITLE_PADDING: f32 = 16.0;
const DEFAULT_TITLE: &str = "Casement";

pub struct CustomTitleBar {
    title: String,
    settings: Settings,
    menu_bar: MenuBarState,
    hovered_submenu: Option<MenuPath>,
    tree_renderer: MenuTreeRenderer,
    bridge: Rc<GpuiWindowBridge>,
    controls: WindowControls,
    _bounds_subscription: Subscription,
}

impl CustomTitleBar {
    /// Create a new custom title bar
    ///
    /// ### Arguments
    /// - `menus`: The menus shown in the menu bar
    /// - `settings`: The title bar settings
    /// - `on_change`: Called whenever a menu entry is activated or toggled
    /// - `window`: The window hosting the title bar
    /// - `cx`: The application context
    ///
    /// ### Returns
    /// - `Entity<CustomTitleBar>`: The new title bar
    pub fn new(
        menus: Vec<Menu>,
        settings: Settings,
        on_change: StateChangeHandler,
        window: &mut Window,
        cx: &mut App,
    ) -> Entity<Self> {
        let bridge = Rc::new(GpuiWindowBridge::new(window.is_maximized()));
        cx.new(|cx| {
            let mut controls = WindowControls::new(bridge.clone(), settings.window_controls);
            controls.activate();
            let _bounds_subscription =
                cx.observe_window_bounds(window, |this: &mut Self, window, cx| {
                    if this.bridge.sync(window) {
                        cx.notify();
                    }
                });
            Self {
                title: DEFAULT_TITLE.to_string(),
                settings,
                menu_bar: MenuBarState::new(menus),
                hovered_submenu: None,
                tree_renderer: MenuTreeRenderer::new(MenuItemDefaults::default(), on_change),
                bridge,
                controls,
                _bounds_subscription,
            }
        })
    }

    /// Set the title shown in the drag area and by the platform
    ///
    /// ### Arguments
    /// - `title`: The document title, `None` for the application name alone
    /// - `window`: The window hosting the title bar
    pub fn set_title(&mut self, title: Option<&str>, window: &mut Window) {
        self.title = match title {
            Some(title) => format!("{} - {}", title, DEFAULT_TITLE),
            None => DEFAULT_TITLE.to_string(),
        };
        window.set_window_title(&self.title);
    }

    pub fn close_menus(&mut self, cx: &mut Context<Self>) {
        if self.menu_bar.close() {
            self.hovered_submenu = None;
            cx.notify();
        }
    }

    pub fn hover_submenu(&mut self, path: MenuPath, cx: &mut Context<Self>) {
        if self.hovered_submenu.as_ref() != Some(&path) {
            self.hovered_submenu = Some(path);
            cx.notify();
        }
    }

    fn on_title_clicked(&mut self, index: usize, cx: &mut Context<Self>) {
        if self.menu_bar.toggle(index) {
            self.hovered_submenu = None;
            cx.notify();
        }
    }

    /// Handle a press that hit neither the dropdown nor one of its flyouts
    fn on_press_outside(&mut self, position: Point<Pixels>, cx: &mut Context<Self>) {
        let title = self.title_under(position);
        if self.menu_bar.press_outside(title) {
            self.hovered_submenu = None;
            cx.notify();
        }
    }

    fn title_under(&self, position: Point<Pixels>) -> Option<usize> {
        if f32::from(position.y) >= TITLE_BAR_HEIGHT {
            return None;
        }
        self.menu_bar.title_at(f32::from(position.x))
    }

    fn on_title_hovered(&mut self, index: usize, cx: &mut Context<Self>) {
        if self.menu_bar.hover(index) {
            self.hovered_submenu = None;
            cx.notify();
        }
    }

    fn on_control_clicked(&mut self, kind: ControlKind, window: &mut Window, cx: &mut Context<Self>) {
        self.bridge.sync(window);
        self.controls.press(kind);
        self.bridge.flush(window);
        cx.notify();
    }

    fn render_menu_bar(&mut self, window: &mut Window, cx: &mut Context<Self>) -> AnyElement {
        let offsets = title_offsets(
            self.menu_bar.menus(),
            MENU_BAR_ORIGIN,
            TITLE_CHAR_WIDTH,
            TITLE_PADDING,
        );
        let open_index = self.menu_bar.open_index();
        let colors = MenuColors::from_theme(cx);
        let view = cx.entity();
        let titles: Vec<AnyElement> = self
            .menu_bar
            .menus()
            .iter()
            .enumerate()
            .map(|(index, menu)| {
                let view = view.clone();
                h_flex()
                    .id(("menu-title", index))
                    .relative()
                    .h_full()
                    .px(px(TITLE_PADDING / 2.0))
                    .items_center()
                    .text_sm()
                    .when(open_index == Some(index), |this| this.bg(colors.hover))
                    .hover(move |style| style.bg(colors.hover))
                    .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                        this.on_title_clicked(index, cx);
                    }))
                    .child(menu.label.clone())
                    // Measure the laid out title, dropdowns hang below it.
                    .child(
                        canvas(
                            move |bounds, _window, cx| {
                                view.update(cx, |this, _cx| {
                                    this.menu_bar.set_title_span(
                                        index,
                                        TitleSpan {
                                            left: f32::from(bounds.left()),
                                            right: f32::from(bounds.right()),
                                        },
                                    );
                                });
                            },
                            |_, _, _, _| {},
                        )
                        .absolute()
                        .size_full(),
                    )
                    .into_any_element()
            })
            .collect();

        let dropdown = match (open_index, self.menu_bar.open_menu()) {
            (Some(index), Some(menu)) => {
                let submenu_width = self.settings.menu.submenu_width;
                let estimated_left = offsets.get(index).copied().unwrap_or(MENU_BAR_ORIGIN);
                let title_left = self.menu_bar.title_left(index, estimated_left);
                // Read on every render so resizing moves flyouts to the roomier side.
                let viewport = window.viewport_size();
                let viewport_width = f32::from(viewport.width);
                let metrics = self.settings.menu.metrics(viewport_width);
                let leaf_renderer = GpuiLeafRenderer {
                    colors,
                    title_bar: cx.entity().downgrade(),
                };
                let nodes = self.tree_renderer.render_menu(
                    &menu.items,
                    &MenuPath::root().submenu(index),
                    dropdown_right_edge(title_left, submenu_width),
                    &metrics,
                    &leaf_renderer,
                );
                let rows = render_nodes(
                    nodes,
                    self.hovered_submenu.as_ref(),
                    submenu_width,
                    self.settings.menu.show_submenu_labels,
                    colors,
                    cx,
                );
                // Presses that miss every panel land on the backdrop, which sits below them.
                let backdrop = deferred(
                    div()
                        .id("menu-backdrop")
                        .occlude()
                        .absolute()
                        .top_0()
                        .left_0()
                        .w(viewport.width)
                        .h(viewport.height)
                        .on_any_mouse_down(cx.listener(
                            |this, event: &MouseDownEvent, _window, cx| {
                                this.on_press_outside(event.position, cx);
                            },
                        ))
                        .on_mouse_move(cx.listener(
                            |this, event: &MouseMoveEvent, _window, cx| {
                                if let Some(index) = this.title_under(event.position) {
                                    this.on_title_hovered(index, cx);
                                }
                            },
                        )),
                )
                .with_priority(0);
                Some([
                    backdrop.into_any_element(),
                    deferred(
                        v_flex()
                            .id("menu-dropdown")
                            .occlude()
                            .absolute()
                            .top(px(TITLE_BAR_HEIGHT))
                            .left(px(title_left))
                            .w(px(submenu_width))
                            .py(px(MENU_PANEL_PADDING))
                            .bg(colors.background)
                            .border_1()
                            .border_color(colors.border)
                            .shadow_md()
                            .children(rows),
                    )
                    .with_priority(1)
                    .into_any_element(),
                ])
            }
            _ => None,
        };

        h_flex()
            .h_full()
            .pl(px(MENU_BAR_ORIGIN))
            .children(titles)
            .children(dropdown.into_iter().flatten())
            .into_any_element()
    }

    fn render_control(&self, button: ControlButton, cx: &mut Context<Self>) -> AnyElement {
        let theme = cx.theme();
        let (hover_bg, hover_fg) = match button.kind {
            ControlKind::Close => (theme.danger, theme.danger_foreground),
            _ => (theme.accent, theme.accent_foreground),
        };
        let glyph = match button.glyph {
            ControlGlyph::Minimize => "\u{2014}",
            ControlGlyph::Maximize => "\u{25A1}",
            ControlGlyph::Restore => "\u{2750}",
            ControlGlyph::Close => "\u{2715}",
        };
        let kind = button.kind;
        h_flex()
            .id(SharedString::from(format!("window-control-{:?}", kind)))
            .window_control_area(control_area(kind))
            .w(px(CONTROL_BUTTON_WIDTH))
            .h_full()
            .justify_center()
            .items_center()
            .text_color(theme.foreground)
            .opacity(0.5)
            .child(glyph)
            .when(button.interactive, |this| {
                this.hover(move |style| style.bg(hover_bg).text_color(hover_fg).opacity(1.0))
                    .on_mouse_down(MouseButton::Left, |_, _window, cx| cx.stop_propagation())
                    .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                        this.on_control_clicked(kind, window, cx);
                    }))
            })
            .into_any_element()
    }
}

/// Platform hit-test area of a window control, used for native snap layouts
fn control_area(kind: ControlKind) -> WindowControlArea {
    match kind {
        ControlKind::Minimize => WindowControlArea::Min,
        ControlKind::Maximize => WindowControlArea::Max,
        ControlKind::Close => WindowControlArea::Close,
    }
}

impl Render for CustomTitleBar {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let menu_bar = self.render_menu_bar(window, cx);
        let controls: Vec<AnyElement> = self
            .controls
            .buttons()
            .into_iter()
            .map(|button| self.render_control(button, cx))
            .collect();
        h_flex()
            .id("title-bar")
            .relative()
            .w_full()
            .h(px(TITLE_BAR_HEIGHT))
            .flex_shrink_0()
            .bg(cx.theme().title_bar)
            .border_b_1()
            .border_color(cx.theme().title_bar_border)
            .child(menu_bar)
            .child(
                h_flex()
                    .id("title-bar-drag-area")
                    .flex_1()
                    .h_full()
                    .justify_center()
                    .items_center()
                    .window_control_area(WindowControlArea::Drag)
                    .on_mouse_down(MouseButton::Left, |event, window, _cx| {
                        if event.click_count == 1 {
                            window.start_window_move();
                        }
                    })
                    .on_click(cx.listener(|this, event: &ClickEvent, window, cx| {
                        if event.click_count() == 2 {
                            this.on_control_clicked(ControlKind::Maximize, window, cx);
                        }
                    }))
                    .child(
                        div()
                            .text_sm()
                            .font_semibold()
                            .text_color(cx.theme().foreground)
                            .child(self.title.clone()),
                    ),
            )
            .child(h_flex().h_full().children(controls))
    }
}
