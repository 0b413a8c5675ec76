#![cfg(feature = "gui")]

use crate::core::config::Config;
use crate::core::telemetry::logging::init_logging;
use crate::models::icons::{IconKind, IconSet};
use crate::pages::{explorer::ExplorerPage, others::OthersPage, PageKind};
use crate::services::adb::{AdbExecutor, CommandExecutor};
use crate::ui::assets::Assets;
use crate::ui::components::layout::footer::{footer, FooterProps};
use crate::ui::theme::theme;

use gpui::Entity;
use gpui::{
    div, prelude::*, px, rgb, size, AnyElement, App, Application, Bounds, Context, FocusHandle,
    Focusable, IntoElement, Render, TitlebarOptions, Window, WindowBounds, WindowOptions,
};
use gpui_component::Root;
use std::rc::Rc;
use std::sync::Arc;
use tracing::info;

const WINDOW_TITLE: &str = "ADB Explorer";

pub struct AdbExplorerApp;

impl AdbExplorerApp {
    pub fn run(config: Config) {
        init_logging(&config.log_level);

        let assets = Assets::new(config.assets_dir.clone());
        let icons = Rc::new(IconSet::resolve(|path| assets.contains(path)));
        if icons.is_empty() {
            info!(dir = %config.assets_dir.display(), "no icons found, rendering text only");
        }
        let executor: Arc<dyn CommandExecutor> = Arc::new(AdbExecutor::from_config(&config));
        let device = config
            .serial
            .clone()
            .unwrap_or_else(|| "default device".to_string());
        info!(adb = %config.adb_program, %device, root = %config.start_path, "starting");

        Application::new().with_assets(assets).run(move |app: &mut App| {
            gpui_component::init(app);
            let bounds = Bounds::centered(None, size(px(800.0), px(600.0)), app);
            let window_options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some(WINDOW_TITLE.into()),
                    ..Default::default()
                }),
                ..Default::default()
            };

            app.open_window(window_options, move |window, cx| {
                let focus_handle = cx.focus_handle();

                let explorer = cx.new(|cx| {
                    ExplorerPage::new(
                        config.start_path.clone(),
                        executor.clone(),
                        icons.clone(),
                        cx,
                    )
                });
                let others = cx.new(|_cx| OthersPage::new(executor.clone(), icons.clone()));

                let view = cx.new(|_cx| RootView {
                    current_page: PageKind::Explorer,
                    focus_handle,
                    device,
                    icons,
                    explorer,
                    others,
                });

                cx.new(|cx| Root::new(view.into(), window, cx))
            })
            .expect("open window");
        });
    }
}

pub struct RootView {
    current_page: PageKind,
    focus_handle: FocusHandle,
    device: String,
    icons: Rc<IconSet>,
    explorer: Entity<ExplorerPage>,
    others: Entity<OthersPage>,
}

impl RootView {
    pub fn set_page(&mut self, page: PageKind, cx: &mut Context<Self>) {
        if self.current_page != page {
            self.current_page = page;
            cx.notify();
        }
    }
}

impl Focusable for RootView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for RootView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let status = self.footer_props(cx);

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(rgb(theme::BG))
            .relative()
            .track_focus(&self.focus_handle)
            .child(self.render_tabs(cx))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .min_h(px(0.0))
                    .child(self.render_active_page(window, cx)),
            )
            .child(footer(status))
            .children(Root::render_modal_layer(window, cx))
            .children(Root::render_notification_layer(window, cx))
    }
}

impl RootView {
    fn footer_props(&self, cx: &App) -> FooterProps {
        let explorer = self.explorer.read(cx);
        FooterProps {
            device: self.device.clone(),
            entry_count: explorer.explorer.entries().len(),
            current_path: explorer.explorer.current_path().to_string(),
            history_depth: explorer.explorer.navigation().depth(),
            busy: explorer.is_busy() || self.others.read(cx).is_busy(),
            device_icon: self.icons.get(IconKind::Device),
            folder_icon: self.icons.get(IconKind::Folder),
        }
    }

    fn render_tabs(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.current_page;

        div()
            .w_full()
            .flex()
            .items_end()
            .gap_1()
            .px(px(8.0))
            .pt(px(6.0))
            .bg(rgb(theme::TAB_BG))
            .border_b_1()
            .border_color(rgb(theme::BORDER))
            .children(
                PageKind::all()
                    .into_iter()
                    .map(|page| self.tab_button(page, active_page == page, cx)),
            )
    }

    fn tab_button(&self, page: PageKind, active: bool, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id(("tab", page as usize))
            .px(px(16.0))
            .py(px(6.0))
            .rounded_t(px(6.0))
            .cursor_pointer()
            .text_sm()
            .when(active, |this| {
                this.bg(rgb(theme::TAB_ACTIVE_BG))
                    .text_color(rgb(theme::TAB_ACTIVE_TEXT))
                    .font_weight(gpui::FontWeight::MEDIUM)
            })
            .when(!active, |this| {
                this.text_color(rgb(theme::TAB_TEXT))
                    .hover(|style| style.bg(rgb(theme::TAB_HOVER)))
            })
            .on_click(cx.listener(move |view, _event, _window, cx| {
                view.set_page(page, cx);
            }))
            .child(page.label())
    }

    fn render_active_page(&self, _window: &mut Window, _cx: &mut Context<Self>) -> AnyElement {
        match self.current_page {
            PageKind::Explorer => self.explorer.clone().into_any_element(),
            PageKind::Others => self.others.clone().into_any_element(),
        }
    }
}
