use super::paths::{self, shell_quote};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerAction {
    Shutdown,
    Reboot,
    RebootRecovery,
}

impl PowerAction {
    pub const ALL: [PowerAction; 3] = [
        PowerAction::Shutdown,
        PowerAction::Reboot,
        PowerAction::RebootRecovery,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PowerAction::Shutdown => "Shut Down",
            PowerAction::Reboot => "Reboot",
            PowerAction::RebootRecovery => "Reboot to recovery",
        }
    }
}

/// Every operation the explorer performs on the device.
///
/// Rendered into an argument vector for `adb`, so nothing passes through a
/// host shell. Operations that need root are wrapped in `su -c` and their
/// paths are quoted for the device shell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeviceCommand {
    List { path: String },
    RemoveDir { path: String },
    RemoveRecursive { path: String },
    Copy { from: String, to: String },
    Move { from: String, to: String },
    Chmod { mode: String, path: String },
    MakeDir { path: String },
    Power(PowerAction),
    ListPackages,
}

impl DeviceCommand {
    pub fn args(&self) -> Vec<String> {
        match self {
            // The trailing slash makes `ls` follow a symlinked directory such
            // as `/sdcard` instead of describing the link itself.
            DeviceCommand::List { path } => elevated(&format!(
                "ls -F -- {}",
                shell_quote(&paths::join(path, ""))
            )),
            DeviceCommand::RemoveDir { path } => {
                elevated(&format!("rmdir -- {}", shell_quote(path)))
            }
            DeviceCommand::RemoveRecursive { path } => {
                elevated(&format!("rm -r -- {}", shell_quote(path)))
            }
            DeviceCommand::Copy { from, to } => elevated(&format!(
                "cp -r -- {} {}",
                shell_quote(from),
                shell_quote(to)
            )),
            DeviceCommand::Move { from, to } => elevated(&format!(
                "mv -- {} {}",
                shell_quote(from),
                shell_quote(to)
            )),
            // `mode` is digits only by construction, see `is_valid_mode`.
            DeviceCommand::Chmod { mode, path } => {
                elevated(&format!("chmod {} -- {}", mode, shell_quote(path)))
            }
            DeviceCommand::MakeDir { path } => {
                elevated(&format!("mkdir -- {}", shell_quote(path)))
            }
            DeviceCommand::Power(PowerAction::Shutdown) => elevated("reboot -p"),
            DeviceCommand::Power(PowerAction::Reboot) => vec!["reboot".to_string()],
            DeviceCommand::Power(PowerAction::RebootRecovery) => {
                vec!["reboot".to_string(), "recovery".to_string()]
            }
            DeviceCommand::ListPackages => ["shell", "pm", "list", "packages"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl fmt::Display for DeviceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args().join(" "))
    }
}

/// Accepts a non-empty run of ASCII digits. Nothing else is checked, so
/// `9999` passes.
pub fn is_valid_mode(mode: &str) -> bool {
    !mode.is_empty() && mode.bytes().all(|b| b.is_ascii_digit())
}

fn elevated(inner: &str) -> Vec<String> {
    vec![
        "shell".to_string(),
        "su".to_string(),
        "-c".to_string(),
        shell_quote(inner),
    ]
}
