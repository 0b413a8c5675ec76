use crate::pages::explorer::ExplorerPage;
use crate::ui::theme::theme;
use gpui::*;

pub mod header;
pub mod listing;

pub fn render(
    page: &mut ExplorerPage,
    window: &mut Window,
    cx: &mut Context<ExplorerPage>,
) -> impl IntoElement {
    if !page.focus_requested {
        page.focus_requested = true;
        cx.focus_self(window);
    }

    div()
        .size_full()
        .flex()
        .flex_col()
        .bg(rgb(theme::BG))
        .relative()
        .track_focus(&page.focus_handle)
        .on_action(cx.listener(ExplorerPage::on_copy))
        .on_action(cx.listener(ExplorerPage::on_paste))
        .on_action(cx.listener(ExplorerPage::on_delete))
        .on_action(cx.listener(ExplorerPage::on_rename))
        .on_action(cx.listener(ExplorerPage::on_change_permissions))
        .on_action(cx.listener(ExplorerPage::on_new_folder))
        .on_key_down(cx.listener(|this, event: &gpui::KeyDownEvent, _window, cx| {
            match event.keystroke.key.as_str() {
                "backspace" => this.go_back(cx),
                "f5" => this.refresh(cx),
                "enter" => {
                    if let Some(ix) = this.selected_index {
                        this.open_entry(ix, cx);
                    }
                }
                _ => return,
            }
            cx.stop_propagation();
        }))
        .child(header::render(page, cx))
        .child(
            div()
                .flex_1()
                .flex()
                .flex_col()
                .min_h(px(0.0))
                .overflow_hidden()
                .child(listing::render(page, cx)),
        )
}
