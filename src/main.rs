use std::rc::Rc;

use casement::casement::{
    menu::tree::{StateChange, StateChangeHandler},
    settings::Settings,
    ui::{menus::build_menus, titlebar::CustomTitleBar},
    utils::logger,
};
use gpui::*;
use gpui_component::{ActiveTheme, Root, v_flex};

struct Workspace {
    title_bar: Entity<CustomTitleBar>,
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .bg(cx.theme().background)
            .child(self.title_bar.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(cx.theme().muted_foreground)
                    .child("Resize the window and open View > Appearance > Zoom"),
            )
    }
}

fn on_menu_change(change: &StateChange) {
    log::info!(
        "Menu entry {} ({:?}) changed, checked: {}",
        change.path.qualified_id(change.index),
        change.id,
        change.checked
    );
}

fn main() {
    // The handle flushes the log file when dropped, keep it for the whole run.
    let _logger = match logger::init() {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Failed to initialize logger: {}", e);
            None
        }
    };
    let settings = Settings::load_or_default();
    let settings_on_exit = settings.clone();
    let app = gpui_platform::application();

    app.run(move |cx| {
        gpui_component::init(cx);
        cx.on_window_closed(move |cx| {
            if cx.windows().is_empty() {
                // Leaves an editable settings file behind after the first run.
                if let Err(e) = settings_on_exit.save() {
                    log::error!("Failed to save settings: {}", e);
                }
                cx.quit();
            }
        })
        .detach();

        cx.spawn(async move |cx| {
            let window_options = WindowOptions {
                titlebar: Some(gpui_component::TitleBar::title_bar_options()),
                window_decorations: Some(WindowDecorations::Client),
                ..Default::default()
            };
            let window = cx.open_window(window_options, move |window, cx| {
                let on_change: StateChangeHandler = Rc::new(on_menu_change);
                let title_bar = CustomTitleBar::new(build_menus(), settings, on_change, window, cx);
                title_bar.update(cx, |title_bar, _cx| title_bar.set_title(None, window));
                let view = cx.new(|_cx| Workspace { title_bar });
                cx.new(|cx| Root::new(view, window, cx))
            })?;
            window.update(cx, |_, window, _| {
                window.activate_window();
            })?;
            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });
}
