use crate::pages::explorer::ExplorerPage;
use crate::ui::theme::theme;
use gpui::prelude::*;
use gpui::*;
use gpui_component::context_menu::ContextMenuExt;
use gpui_component::v_virtual_list;
use std::rc::Rc;

pub mod menu;
pub mod row;

pub const ROW_HEIGHT: f32 = 32.0;
const ROW_WIDTH: f32 = 1600.0;

pub fn render(page: &mut ExplorerPage, cx: &mut Context<ExplorerPage>) -> AnyElement {
    let icons = page.icons.clone();
    let focus_handle = page.focus_handle.clone();

    let body = if page.explorer.entries().is_empty() {
        render_placeholder(page).into_any_element()
    } else {
        render_rows(page, cx).into_any_element()
    };

    div()
        .id("device-listing")
        .size_full()
        .flex()
        .flex_col()
        .min_h(px(0.0))
        .overflow_hidden()
        // Runs before the row handlers, so a right click on empty space
        // leaves no entry targeted.
        .capture_any_mouse_down(cx.listener(|this, event: &MouseDownEvent, _window, _cx| {
            if event.button == MouseButton::Right {
                this.context_index = None;
            }
        }))
        .child(body)
        .context_menu(move |menu, _window, _cx| {
            menu::build(menu, &icons, focus_handle.clone())
        })
        .into_any_element()
}

fn render_rows(page: &mut ExplorerPage, cx: &mut Context<ExplorerPage>) -> impl IntoElement {
    let entity = cx.entity().clone();
    let sizes = Rc::new(vec![
        size(px(ROW_WIDTH), px(ROW_HEIGHT));
        page.explorer.entries().len()
    ]);
    let scroll_handle = page.virtual_scroll_handle.clone();

    div().flex_1().overflow_hidden().child(
        v_virtual_list(
            entity,
            "device-entries",
            sizes,
            move |view, visible_range, _window, cx| {
                visible_range
                    .filter_map(|ix| {
                        view.explorer
                            .entry(ix)
                            .cloned()
                            .map(|entry| row::render(view, &entry, ix, cx).into_any_element())
                    })
                    .collect()
            },
        )
        .track_scroll(&scroll_handle),
    )
}

fn render_placeholder(page: &ExplorerPage) -> impl IntoElement {
    let message = if page.is_busy() {
        "Loading…"
    } else {
        "Nothing to show"
    };
    div()
        .flex_1()
        .flex()
        .items_center()
        .justify_center()
        .text_sm()
        .text_color(rgb(theme::MUTED))
        .child(message)
}
