use gpui::AnyElement;

pub mod explorer;
pub mod others;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PageKind {
    Explorer,
    Others,
}

impl PageKind {
    pub fn label(&self) -> &'static str {
        match self {
            PageKind::Explorer => "Explorer",
            PageKind::Others => "Others",
        }
    }

    pub fn all() -> Vec<PageKind> {
        vec![PageKind::Explorer, PageKind::Others]
    }
}

/// Trait for page rendering
pub trait Page {
    fn render(&mut self, window: &mut gpui::Window, cx: &mut gpui::Context<Self>) -> AnyElement
    where
        Self: Sized;
}
