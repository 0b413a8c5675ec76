use super::ROW_HEIGHT;
use crate::models::device_entry::{DeviceEntry, EntryKind};
use crate::pages::explorer::ExplorerPage;
use crate::ui::theme::theme;
use gpui::prelude::*;
use gpui::*;
use gpui_component::{Icon, ListItem};

pub fn render(
    page: &ExplorerPage,
    entry: &DeviceEntry,
    ix: usize,
    cx: &mut Context<ExplorerPage>,
) -> impl IntoElement {
    let icon = page.icons.for_entry(entry.kind);
    let icon_color = match entry.kind {
        EntryKind::Directory => rgb(theme::ACCENT),
        EntryKind::Unknown => rgb(theme::GRAY_500),
        EntryKind::File => rgb(theme::GRAY_600),
    };
    let is_selected = page.selected_index == Some(ix);
    let bg_color = if is_selected {
        theme::ACCENT_LIGHT
    } else if ix % 2 == 0 {
        theme::BG
    } else {
        theme::GRAY_50
    };

    div()
        .id(("entry-row", ix))
        .w_full()
        .on_mouse_down(
            MouseButton::Right,
            cx.listener(move |this, _event: &MouseDownEvent, _window, cx| {
                this.context_index = Some(ix);
                this.selected_index = Some(ix);
                cx.notify();
            }),
        )
        .child(
            ListItem::new(("entry", ix))
                .w_full()
                .h(px(ROW_HEIGHT))
                .px(px(24.0))
                .bg(rgb(bg_color))
                .on_click(cx.listener(move |this, event: &ClickEvent, _window, cx| {
                    if let ClickEvent::Mouse(mouse) = event {
                        if mouse.up.button == MouseButton::Left {
                            this.selected_index = Some(ix);
                            if mouse.up.click_count >= 2 {
                                this.open_entry(ix, cx);
                            }
                            cx.notify();
                        }
                    }
                }))
                .child(
                    div()
                        .flex()
                        .items_center()
                        .gap_2()
                        .w_full()
                        .h_full()
                        .child(match icon {
                            Some(path) => Icon::new(Icon::empty())
                                .path(path)
                                .size_4()
                                .text_color(icon_color)
                                .into_any_element(),
                            None => div().w(px(16.0)).into_any_element(),
                        })
                        .child(
                            div()
                                .text_sm()
                                .font_weight(FontWeight::MEDIUM)
                                .text_color(rgb(theme::FG))
                                .overflow_hidden()
                                .text_ellipsis()
                                .whitespace_nowrap()
                                .child(entry.name.clone()),
                        ),
                ),
        )
}
