use crate::models::icons::IconKind;
use crate::pages::explorer::ExplorerPage;
use crate::services::adb::paths;
use crate::ui::theme::theme;
use gpui::prelude::*;
use gpui::*;
use gpui_component::breadcrumb::{Breadcrumb, BreadcrumbItem};
use gpui_component::{Icon, ListItem};

const MAX_CRUMBS: usize = 5;

pub fn render(page: &mut ExplorerPage, cx: &mut Context<ExplorerPage>) -> impl IntoElement {
    let crumbs = paths::prefixes(page.explorer.current_path());
    let hidden = crumbs.len().saturating_sub(MAX_CRUMBS);

    let mut bc = Breadcrumb::new();
    if hidden > 0 {
        bc = bc.item(BreadcrumbItem::new("ellipsis", "…"));
    }
    for (i, (label, path)) in crumbs.into_iter().enumerate().skip(hidden) {
        bc = bc.item(
            BreadcrumbItem::new(("bc", i), label).on_click(cx.listener(
                move |this, _, _, cx| this.list_directory(path.clone(), cx),
            )),
        );
    }

    let can_go_back = page.explorer.navigation().can_go_back();
    let can_go_up = page.explorer.current_path() != "/";
    let entry_count = page.explorer.entries().len();
    let icons = page.icons.clone();

    div()
        .bg(rgb(theme::BG))
        .border_b_1()
        .border_color(rgb(theme::BORDER))
        .flex()
        .items_center()
        .text_color(rgb(theme::FG))
        .px(px(24.0))
        .py(px(12.0))
        .gap_2()
        .child(
            div()
                .flex()
                .items_center()
                .gap_2()
                .flex_shrink_0()
                .child(
                    nav_button("nav-back", icons.get(IconKind::Back), "Back", can_go_back)
                        .when(can_go_back, |this| {
                            this.on_click(cx.listener(|view, _, _, cx| view.go_back(cx)))
                        }),
                )
                .child(
                    nav_button("nav-up", icons.get(IconKind::Up), "Up", can_go_up).when(
                        can_go_up,
                        |this| this.on_click(cx.listener(|view, _, _, cx| view.go_up(cx))),
                    ),
                )
                .child(
                    nav_button("nav-refresh", icons.get(IconKind::Refresh), "Refresh", true)
                        .on_click(cx.listener(|view, _, _, cx| view.refresh(cx))),
                )
                .child(
                    div()
                        .w(px(1.0))
                        .h(px(20.0))
                        .bg(rgb(theme::BORDER))
                        .mx(px(4.0)),
                ),
        )
        .child(
            div()
                .flex_1()
                .overflow_hidden()
                .min_w(px(0.0))
                .child(div().flex().items_center().child(bc)),
        )
        .child(
            div()
                .text_xs()
                .text_color(rgb(theme::FG_SECONDARY))
                .whitespace_nowrap()
                .flex_shrink_0()
                .child(format!("{} items", entry_count)),
        )
}

fn nav_button(
    id: &'static str,
    icon: Option<&'static str>,
    label: &'static str,
    enabled: bool,
) -> ListItem {
    ListItem::new(id)
        .px(px(8.0))
        .py(px(6.0))
        .rounded(px(6.0))
        .when(!enabled, |this| this.opacity(0.3))
        .child(
            div()
                .flex()
                .items_center()
                .gap_1()
                .when_some(icon, |this, path| {
                    this.child(
                        Icon::new(Icon::empty())
                            .path(path)
                            .size_4()
                            .text_color(rgb(theme::GRAY_600)),
                    )
                })
                .child(div().text_sm().text_color(rgb(theme::GRAY_600)).child(label)),
        )
}
