use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Listing,
    Paste,
    Delete,
    Rename,
    Chmod,
    NewFolder,
    Power,
    RootCheck,
}

/// At most one running task per [`ActionKind`].
///
/// `T` is whatever handle keeps the task alive; dropping it cancels the task.
#[derive(Debug)]
pub struct InFlight<T> {
    tasks: HashMap<ActionKind, T>,
}

impl<T> Default for InFlight<T> {
    fn default() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }
}

impl<T> InFlight<T> {
    pub fn is_running(&self, kind: ActionKind) -> bool {
        self.tasks.contains_key(&kind)
    }

    pub fn is_busy(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Starts a task unless one of the same kind is still running.
    /// Returns whether `start` was called.
    pub fn try_start(&mut self, kind: ActionKind, start: impl FnOnce() -> T) -> bool {
        if self.is_running(kind) {
            return false;
        }
        self.tasks.insert(kind, start());
        true
    }

    /// Stores `task`, dropping (and so cancelling) any task of the same kind.
    pub fn replace(&mut self, kind: ActionKind, task: T) {
        self.tasks.insert(kind, task);
    }

    pub fn finish(&mut self, kind: ActionKind) {
        self.tasks.remove(&kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn second_start_of_same_kind_is_refused() {
        let mut tasks = InFlight::default();
        assert!(tasks.try_start(ActionKind::Delete, || 1));
        assert!(!tasks.try_start(ActionKind::Delete, || 2));
        assert!(tasks.try_start(ActionKind::Rename, || 3));
        tasks.finish(ActionKind::Delete);
        assert!(tasks.try_start(ActionKind::Delete, || 4));
    }

    struct DropFlag(Rc<Cell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn replace_drops_previous_task() {
        let dropped = Rc::new(Cell::new(false));
        let mut tasks = InFlight::default();
        tasks.replace(ActionKind::Listing, DropFlag(dropped.clone()));
        tasks.replace(ActionKind::Listing, DropFlag(Rc::new(Cell::new(false))));
        assert!(dropped.get());
        assert!(tasks.is_busy());
        tasks.finish(ActionKind::Listing);
        assert!(!tasks.is_busy());
    }
}
