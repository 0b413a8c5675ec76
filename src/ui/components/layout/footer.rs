use crate::ui::theme::theme;
use gpui::{div, prelude::*, px, rgb, IntoElement, SharedString};
use gpui_component::Icon;

#[derive(Clone)]
pub struct FooterProps {
    pub device: String,
    pub entry_count: usize,
    pub current_path: String,
    pub history_depth: usize,
    pub busy: bool,
    pub device_icon: Option<&'static str>,
    pub folder_icon: Option<&'static str>,
}

impl Default for FooterProps {
    fn default() -> Self {
        Self {
            device: String::from("default device"),
            entry_count: 0,
            current_path: String::from("/"),
            history_depth: 1,
            busy: false,
            device_icon: None,
            folder_icon: None,
        }
    }
}

/// Status bar along the bottom of the window.
pub fn footer(props: FooterProps) -> impl IntoElement {
    div()
        .h(px(28.0))
        .w_full()
        .flex()
        .items_center()
        .justify_between()
        .px(px(8.0))
        .bg(rgb(theme::GRAY_200))
        .border_t_1()
        .border_color(rgb(theme::BORDER))
        .child(
            div()
                .flex()
                .items_center()
                .gap_2()
                .child(footer_item(props.device_icon, props.device.clone()))
                .child(footer_item(
                    None,
                    format!("{} items", props.entry_count),
                ))
                .when(props.history_depth > 1, |this| {
                    this.child(footer_item(
                        None,
                        format!("{} back", props.history_depth - 1),
                    ))
                })
                .when(props.busy, |this| {
                    this.child(
                        div()
                            .text_xs()
                            .text_color(rgb(theme::ACCENT))
                            .child("Working…"),
                    )
                }),
        )
        .child(footer_item(
            props.folder_icon,
            truncate_path(&props.current_path, 48),
        ))
}

fn footer_item(icon: Option<&'static str>, label: impl Into<SharedString>) -> impl IntoElement {
    div()
        .h(px(24.0))
        .px(px(8.0))
        .flex()
        .items_center()
        .gap_1()
        .rounded(px(4.0))
        .when_some(icon, |this, path| {
            this.child(
                Icon::new(Icon::empty())
                    .path(path)
                    .size_3()
                    .text_color(rgb(theme::GRAY_700)),
            )
        })
        .child(
            div()
                .text_xs()
                .text_color(rgb(theme::GRAY_700))
                .child(label.into()),
        )
}

/// Keeps the first and last segments of long paths.
pub fn truncate_path(path: &str, max_len: usize) -> String {
    if path.len() <= max_len {
        return path.to_string();
    }

    let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
    if parts.len() <= 2 {
        let tail: String = path
            .chars()
            .rev()
            .take(max_len)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        return format!("...{tail}");
    }

    format!("/{}/.../{}", parts[0], parts[parts.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::truncate_path;

    #[test]
    fn short_paths_are_untouched() {
        assert_eq!(truncate_path("/sdcard", 30), "/sdcard");
    }

    #[test]
    fn long_paths_keep_both_ends() {
        let path = "/storage/emulated/0/Android/data/com.example.app/files";
        assert_eq!(truncate_path(path, 20), "/storage/.../files");
    }
}
