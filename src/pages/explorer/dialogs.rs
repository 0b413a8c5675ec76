use super::ExplorerPage;
use crate::ui::theme::theme;
use gpui::{div, prelude::*, px, rgb, AppContext, Context, Window};
use gpui_component::input::{InputState, TextInput};
use gpui_component::ContextModal;
use std::rc::Rc;

/// Opens a modal with a single text field. `on_submit` runs with the
/// trimmed text when the user confirms; dismissing the modal does nothing.
pub fn prompt_text(
    window: &mut Window,
    cx: &mut Context<ExplorerPage>,
    title: &'static str,
    label: &'static str,
    initial: Option<String>,
    on_submit: impl Fn(&mut ExplorerPage, String, &mut Context<ExplorerPage>) + 'static,
) {
    let input = cx.new(|cx| {
        let state = InputState::new(window, cx);
        match initial {
            Some(value) => state.default_value(value),
            None => state,
        }
    });
    let page = cx.entity().downgrade();
    let on_submit = Rc::new(on_submit);

    window.open_modal(cx, move |modal, _window, _cx| {
        let input_for_ok = input.clone();
        let page = page.clone();
        let on_submit = on_submit.clone();
        modal
            .title(title)
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        div()
                            .text_sm()
                            .text_color(rgb(theme::FG_SECONDARY))
                            .child(label),
                    )
                    .child(div().mt(px(4.0)).child(TextInput::new(&input))),
            )
            .confirm()
            .on_ok(move |_, _window, cx| {
                let value = input_for_ok.read(cx).text().to_string();
                let value = value.trim().to_string();
                page.update(cx, |page, cx| on_submit(page, value, cx)).ok();
                true
            })
    });
}
