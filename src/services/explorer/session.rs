use super::{Explorer, Plan};
use crate::models::device_entry::{DeviceEntry, EntryKind};
use crate::services::adb::command::{DeviceCommand, PowerAction};
use crate::services::adb::executor::CommandExecutor;
use crate::services::adb::packages::{self, RootStatus};
use tracing::info;

/// Runs explorer actions to completion on the calling thread.
pub struct Session<E: CommandExecutor> {
    explorer: Explorer,
    executor: E,
}

impl<E: CommandExecutor> Session<E> {
    pub fn new(executor: E, root: impl Into<String>) -> Self {
        Self {
            explorer: Explorer::new(root),
            executor,
        }
    }

    /// Lists the root the session was created with.
    pub fn start(&mut self) {
        let cmd = self.explorer.refresh();
        self.run_listing(cmd);
    }

    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Stands in for a listing of `dir` holding only `name`.
    pub fn seed_entry(&mut self, dir: &str, name: &str) {
        self.explorer
            .replace_entries(dir, vec![DeviceEntry::new(name, EntryKind::Unknown)]);
    }

    pub fn list_directory(&mut self, path: &str) {
        let cmd = self.explorer.list_directory(path);
        self.run_listing(cmd);
    }

    pub fn refresh(&mut self) {
        let cmd = self.explorer.refresh();
        self.run_listing(cmd);
    }

    pub fn open(&mut self, ix: usize) -> bool {
        match self.explorer.open(ix) {
            Some(cmd) => {
                self.run_listing(cmd);
                true
            }
            None => false,
        }
    }

    pub fn back(&mut self) -> bool {
        match self.explorer.back() {
            Some(cmd) => {
                self.run_listing(cmd);
                true
            }
            None => false,
        }
    }

    pub fn up(&mut self) -> bool {
        match self.explorer.up() {
            Some(cmd) => {
                self.run_listing(cmd);
                true
            }
            None => false,
        }
    }

    pub fn copy(&self, ix: usize) -> Option<String> {
        self.explorer.copy_path(ix)
    }

    pub fn paste(&mut self, clipboard: &str) -> bool {
        let plan = self.explorer.plan_paste(clipboard);
        self.run_plan(plan)
    }

    pub fn delete(&mut self, ix: usize) -> bool {
        let plan = self.explorer.plan_delete(ix);
        self.run_plan(plan)
    }

    pub fn rename(&mut self, ix: usize, new_name: &str) -> bool {
        let plan = self.explorer.plan_rename(ix, new_name);
        self.run_plan(plan)
    }

    pub fn change_permissions(&mut self, ix: usize, mode: &str) -> bool {
        match self.explorer.plan_chmod(ix, mode) {
            Some(cmd) => {
                self.executor.execute(&cmd);
                true
            }
            None => false,
        }
    }

    pub fn new_folder(&mut self, name: &str) -> bool {
        let plan = self.explorer.plan_new_folder(name);
        self.run_plan(plan)
    }

    pub fn power(&self, action: PowerAction) {
        info!(action = action.label(), "power action");
        self.executor.execute(&DeviceCommand::Power(action));
    }

    pub fn installed_packages(&self) -> Vec<String> {
        packages::installed_packages(&self.executor)
    }

    pub fn root_status(&self) -> RootStatus {
        packages::check_root(&self.executor)
    }

    fn run_plan(&mut self, plan: Option<Plan>) -> bool {
        let Some(plan) = plan else {
            return false;
        };
        for cmd in &plan.commands {
            self.executor.execute(cmd);
        }
        if let Some(cmd) = self.explorer.apply(&plan.outcome) {
            self.run_listing(cmd);
        }
        true
    }

    fn run_listing(&mut self, cmd: DeviceCommand) {
        let output = self.executor.execute(&cmd);
        if let DeviceCommand::List { path } = &cmd {
            self.explorer.apply_listing(path, &output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::adb::executor::MockCommandExecutor;
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn list(path: &str) -> DeviceCommand {
        DeviceCommand::List { path: path.into() }
    }

    #[test]
    fn start_lists_the_root() {
        let mut exec = MockCommandExecutor::new();
        exec.expect_execute()
            .with(eq(list("/")))
            .times(1)
            .returning(|_| "sdcard@\nsystem/".to_string());
        let mut session = Session::new(exec, "/");
        session.start();
        assert_eq!(session.explorer().entries().len(), 2);
        assert_eq!(session.explorer().navigation().depth(), 1);
    }

    #[test]
    fn delete_tries_rmdir_then_rm_without_relisting() {
        let mut seq = Sequence::new();
        let mut exec = MockCommandExecutor::new();
        exec.expect_execute()
            .with(eq(list("/")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| "foo/".to_string());
        exec.expect_execute()
            .with(eq(DeviceCommand::RemoveDir {
                path: "/foo".into(),
            }))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| String::new());
        exec.expect_execute()
            .with(eq(DeviceCommand::RemoveRecursive {
                path: "/foo".into(),
            }))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| String::new());

        let mut session = Session::new(exec, "/");
        session.start();
        assert!(session.delete(0));
        assert!(session.explorer().entries().is_empty());
    }

    #[test]
    fn new_folder_refreshes_without_pushing() {
        let mut exec = MockCommandExecutor::new();
        exec.expect_execute()
            .with(eq(DeviceCommand::MakeDir {
                path: "/sdcard/new".into(),
            }))
            .times(1)
            .returning(|_| String::new());
        exec.expect_execute()
            .with(eq(list("/sdcard")))
            .times(2)
            .returning(|_| "new/".to_string());

        let mut session = Session::new(exec, "/sdcard");
        session.start();
        assert!(session.new_folder("new"));
        assert_eq!(session.explorer().navigation().depth(), 1);
        assert_eq!(session.explorer().entries()[0].name, "new");
    }

    #[test]
    fn cancelled_or_empty_input_runs_nothing() {
        let mut exec = MockCommandExecutor::new();
        exec.expect_execute()
            .with(eq(list("/")))
            .times(1)
            .returning(|_| "a/".to_string());
        let mut session = Session::new(exec, "/");
        session.start();
        assert!(!session.new_folder(""));
        assert!(!session.rename(0, ""));
        assert!(!session.change_permissions(0, "abc"));
        assert!(!session.delete(5));
    }
}
