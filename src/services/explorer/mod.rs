//! Navigation state and action planning for the device browser.
//!
//! [`Explorer`] never talks to the device itself. Each action returns the
//! [`DeviceCommand`]s to run plus the [`Outcome`] to apply once they have
//! finished, so the GUI can run the commands on a worker while the blocking
//! [`session::Session`] runs them inline.

use crate::models::device_entry::{parse_listing, DeviceEntry};
use crate::services::adb::command::{is_valid_mode, DeviceCommand};
use crate::services::adb::paths;
use tracing::debug;

pub mod navigation;
pub mod session;
pub mod tasks;

pub use navigation::NavigationStack;

/// View update applied after a plan's commands have run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Re-list the current directory.
    Refresh,
    /// Drop `name` from the listing of `dir` without asking the device.
    RemoveEntry { dir: String, name: String },
    /// Relabel `from` as `to` in the listing of `dir` without asking the device.
    RenameEntry { dir: String, from: String, to: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub commands: Vec<DeviceCommand>,
    pub outcome: Outcome,
}

#[derive(Debug, Clone)]
pub struct Explorer {
    nav: NavigationStack,
    entries: Vec<DeviceEntry>,
}

impl Explorer {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            nav: NavigationStack::new(root),
            entries: Vec::new(),
        }
    }

    pub fn current_path(&self) -> &str {
        self.nav.current()
    }

    pub fn navigation(&self) -> &NavigationStack {
        &self.nav
    }

    pub fn entries(&self) -> &[DeviceEntry] {
        &self.entries
    }

    pub fn entry(&self, ix: usize) -> Option<&DeviceEntry> {
        self.entries.get(ix)
    }

    /// Full device path of the entry at `ix`.
    pub fn entry_path(&self, ix: usize) -> Option<String> {
        self.entry(ix)
            .map(|e| paths::join(self.current_path(), &e.name))
    }

    /// Clears the view, pushes `path` and returns its listing command.
    pub fn list_directory(&mut self, path: impl Into<String>) -> DeviceCommand {
        let path = path.into();
        self.entries.clear();
        self.nav.push(path.clone());
        DeviceCommand::List { path }
    }

    /// Listing command for the current directory. The stack is untouched.
    pub fn refresh(&self) -> DeviceCommand {
        DeviceCommand::List {
            path: self.current_path().to_string(),
        }
    }

    /// Fills the view from listing output. Results for a path that is no
    /// longer current are dropped and `false` is returned.
    pub fn apply_listing(&mut self, path: &str, output: &str) -> bool {
        self.replace_entries(path, parse_listing(output))
    }

    pub fn replace_entries(&mut self, path: &str, entries: Vec<DeviceEntry>) -> bool {
        if path != self.current_path() {
            debug!(path, current = self.current_path(), "dropping stale listing");
            return false;
        }
        self.entries = entries;
        true
    }

    /// Descends into the entry at `ix`. Files are not descended into.
    pub fn open(&mut self, ix: usize) -> Option<DeviceCommand> {
        let entry = self.entry(ix)?;
        if !entry.can_descend() {
            debug!(name = %entry.name, "not a directory, ignoring open");
            return None;
        }
        let child = paths::join(self.current_path(), &entry.name);
        Some(self.list_directory(child))
    }

    /// Pops back to the previous directory and re-lists it.
    pub fn back(&mut self) -> Option<DeviceCommand> {
        self.nav.pop()?;
        self.entries.clear();
        Some(self.refresh())
    }

    /// Lists the parent of the current directory.
    pub fn up(&mut self) -> Option<DeviceCommand> {
        let current = self.current_path();
        let parent = paths::parent(current);
        if parent == current {
            return None;
        }
        Some(self.list_directory(parent))
    }

    /// Path to stage on the clipboard for the entry at `ix`.
    pub fn copy_path(&self, ix: usize) -> Option<String> {
        self.entry_path(ix)
    }

    pub fn plan_paste(&self, clipboard: &str) -> Option<Plan> {
        let source = clipboard.trim();
        let name = paths::last_segment(source);
        if name.is_empty() {
            debug!("clipboard holds no path, ignoring paste");
            return None;
        }
        let target = paths::join(self.current_path(), name);
        Some(Plan {
            commands: vec![DeviceCommand::Copy {
                from: source.to_string(),
                to: target,
            }],
            outcome: Outcome::Refresh,
        })
    }

    /// Tries both `rmdir` and `rm -r` so files and directories alike go away.
    pub fn plan_delete(&self, ix: usize) -> Option<Plan> {
        let entry = self.entry(ix)?;
        let target = paths::join(self.current_path(), &entry.name);
        Some(Plan {
            commands: vec![
                DeviceCommand::RemoveDir {
                    path: target.clone(),
                },
                DeviceCommand::RemoveRecursive { path: target },
            ],
            outcome: Outcome::RemoveEntry {
                dir: self.current_path().to_string(),
                name: entry.name.clone(),
            },
        })
    }

    pub fn plan_rename(&self, ix: usize, new_name: &str) -> Option<Plan> {
        let entry = self.entry(ix)?;
        if new_name.is_empty() {
            debug!("empty name, ignoring rename");
            return None;
        }
        let dir = self.current_path();
        Some(Plan {
            commands: vec![DeviceCommand::Move {
                from: paths::join(dir, &entry.name),
                to: paths::join(dir, new_name),
            }],
            outcome: Outcome::RenameEntry {
                dir: dir.to_string(),
                from: entry.name.clone(),
                to: new_name.to_string(),
            },
        })
    }

    /// Permission changes leave the listing as it is, so there is no outcome.
    pub fn plan_chmod(&self, ix: usize, mode: &str) -> Option<DeviceCommand> {
        let entry = self.entry(ix)?;
        if !is_valid_mode(mode) {
            debug!(mode, "ignoring non-numeric permissions");
            return None;
        }
        Some(DeviceCommand::Chmod {
            mode: mode.to_string(),
            path: paths::join(self.current_path(), &entry.name),
        })
    }

    pub fn plan_new_folder(&self, name: &str) -> Option<Plan> {
        if name.is_empty() {
            debug!("empty name, ignoring new folder");
            return None;
        }
        Some(Plan {
            commands: vec![DeviceCommand::MakeDir {
                path: paths::join(self.current_path(), name),
            }],
            outcome: Outcome::Refresh,
        })
    }

    /// Applies a finished plan. Returns a listing command when the outcome
    /// asks for a refresh.
    pub fn apply(&mut self, outcome: &Outcome) -> Option<DeviceCommand> {
        match outcome {
            Outcome::Refresh => Some(self.refresh()),
            Outcome::RemoveEntry { dir, name } => {
                if dir == self.current_path() {
                    if let Some(pos) = self.entries.iter().position(|e| &e.name == name) {
                        self.entries.remove(pos);
                    }
                }
                None
            }
            Outcome::RenameEntry { dir, from, to } => {
                if dir == self.current_path() {
                    if let Some(entry) = self.entries.iter_mut().find(|e| &e.name == from) {
                        entry.name = to.clone();
                    }
                }
                None
            }
        }
    }
}
