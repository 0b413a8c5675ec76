use crate::models::icons::{IconKind, IconSet};
use crate::services::adb::packages::{self, RootStatus};
use crate::services::adb::{CommandExecutor, DeviceCommand, PowerAction};
use crate::services::explorer::tasks::{ActionKind, InFlight};
use crate::ui::theme::theme;
use gpui::{div, prelude::*, px, rgb, AnyElement, Context, Render, Task, Window};
use gpui_component::Icon;
use std::rc::Rc;
use std::sync::Arc;
use tracing::{debug, info};

/// Device power controls and the root check.
pub struct OthersPage {
    executor: Arc<dyn CommandExecutor>,
    icons: Rc<IconSet>,
    tasks: InFlight<Task<()>>,
    root_status: Option<RootStatus>,
}

impl OthersPage {
    pub fn new(executor: Arc<dyn CommandExecutor>, icons: Rc<IconSet>) -> Self {
        Self {
            executor,
            icons,
            tasks: InFlight::default(),
            root_status: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.tasks.is_busy()
    }

    fn power(&mut self, action: PowerAction, cx: &mut Context<Self>) {
        let executor = self.executor.clone();
        let started = self.tasks.try_start(ActionKind::Power, || {
            cx.spawn(async move |this, cx| {
                cx.background_executor()
                    .spawn(async move {
                        executor.execute(&DeviceCommand::Power(action));
                    })
                    .await;
                this.update(cx, |this, cx| {
                    this.tasks.finish(ActionKind::Power);
                    cx.notify();
                })
                .ok();
            })
        });
        if started {
            info!(action = action.label(), "power action sent");
            cx.notify();
        } else {
            debug!("power action already running, ignoring");
        }
    }

    fn check_root(&mut self, cx: &mut Context<Self>) {
        let executor = self.executor.clone();
        let started = self.tasks.try_start(ActionKind::RootCheck, || {
            cx.spawn(async move |this, cx| {
                let status = cx
                    .background_executor()
                    .spawn(async move { packages::check_root(executor.as_ref()) })
                    .await;
                this.update(cx, |this, cx| {
                    this.tasks.finish(ActionKind::RootCheck);
                    info!(rooted = status.rooted, "root check finished");
                    this.root_status = Some(status);
                    cx.notify();
                })
                .ok();
            })
        });
        if started {
            cx.notify();
        }
    }

    fn render_power_buttons(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let icon = self.icons.get(IconKind::Power);
        let busy = self.tasks.is_running(ActionKind::Power);
        div().flex().gap_2().children(PowerAction::ALL.into_iter().map(|action| {
            action_button(("power", action as usize), icon, action.label(), !busy).when(
                !busy,
                |this| this.on_click(cx.listener(move |view, _, _, cx| view.power(action, cx))),
            )
        }))
    }

    fn render_root_check(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let checking = self.tasks.is_running(ActionKind::RootCheck);
        let status = match (&self.root_status, checking) {
            (_, true) => div()
                .text_sm()
                .text_color(rgb(theme::MUTED))
                .child("Checking…"),
            (Some(status), false) => div()
                .text_sm()
                .font_weight(gpui::FontWeight::MEDIUM)
                .text_color(rgb(if status.rooted {
                    theme::SUCCESS
                } else {
                    theme::DANGER
                }))
                .child(status.label()),
            (None, false) => div()
                .text_sm()
                .text_color(rgb(theme::MUTED))
                .child("Not checked"),
        };

        div()
            .flex()
            .items_center()
            .gap_4()
            .child(
                action_button("root-check", None, "Check root", !checking).when(
                    !checking,
                    |this| this.on_click(cx.listener(|view, _, _, cx| view.check_root(cx))),
                ),
            )
            .child(status)
    }
}

fn section(title: &'static str) -> gpui::Div {
    div().flex().flex_col().gap_3().child(
        div()
            .text_base()
            .font_weight(gpui::FontWeight::BOLD)
            .text_color(rgb(theme::FG))
            .child(title),
    )
}

fn action_button(
    id: impl Into<gpui::ElementId>,
    icon: Option<&'static str>,
    label: &'static str,
    enabled: bool,
) -> gpui::Stateful<gpui::Div> {
    div()
        .id(id)
        .flex()
        .items_center()
        .gap_2()
        .px(px(12.0))
        .py(px(6.0))
        .rounded(px(6.0))
        .border_1()
        .border_color(rgb(theme::BORDER))
        .when(enabled, |this| {
            this.cursor_pointer()
                .hover(|style| style.bg(rgb(theme::BG_HOVER)))
        })
        .when(!enabled, |this| this.opacity(0.4))
        .when_some(icon, |this, path| {
            this.child(
                Icon::new(Icon::empty())
                    .path(path)
                    .size_4()
                    .text_color(rgb(theme::GRAY_600)),
            )
        })
        .child(div().text_sm().text_color(rgb(theme::GRAY_700)).child(label))
}

impl Render for OthersPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_8()
            .p(px(24.0))
            .bg(rgb(theme::BG))
            .child(section("Power").child(self.render_power_buttons(cx)))
            .child(section("Root access").child(self.render_root_check(cx)))
    }
}

impl crate::pages::Page for OthersPage {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> AnyElement {
        <Self as Render>::render(self, window, cx).into_any_element()
    }
}
