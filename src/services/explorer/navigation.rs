/// Directories visited so far. The last element is the one on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack {
    paths: Vec<String>,
}

impl NavigationStack {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            paths: vec![root.into()],
        }
    }

    pub fn current(&self) -> &str {
        // Never empty: `new` seeds one path and `pop` keeps it.
        self.paths.last().map(String::as_str).unwrap_or("/")
    }

    /// Pushes without de-duplication, so listing the current path again
    /// still grows the stack.
    pub fn push(&mut self, path: impl Into<String>) {
        self.paths.push(path.into());
    }

    /// Pops the current path and returns the new top, or `None` when only
    /// one path remains.
    pub fn pop(&mut self) -> Option<&str> {
        if self.paths.len() > 1 {
            self.paths.pop();
            Some(self.current())
        } else {
            None
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.paths.len() > 1
    }

    pub fn depth(&self) -> usize {
        self.paths.len()
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_refuses_to_empty() {
        let mut nav = NavigationStack::new("/");
        assert_eq!(nav.pop(), None);
        assert_eq!(nav.current(), "/");
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn push_then_pop_restores() {
        let mut nav = NavigationStack::new("/");
        nav.push("/sdcard");
        nav.push("/sdcard/DCIM");
        assert_eq!(nav.pop(), Some("/sdcard"));
        assert_eq!(nav.pop(), Some("/"));
        assert!(!nav.can_go_back());
    }

    #[test]
    fn push_does_not_deduplicate() {
        let mut nav = NavigationStack::new("/");
        nav.push("/");
        assert_eq!(nav.paths(), ["/", "/"]);
    }
}
