use super::command::DeviceCommand;
use crate::core::config::Config;
use crate::core::errors::{Error, Result};
use std::process::{Command, Stdio};
use tracing::{debug, error};

/// Boundary between the explorer and the device.
///
/// `execute` never fails: errors are logged and reported as empty output,
/// which callers treat the same as "nothing to show".
#[cfg_attr(test, mockall::automock)]
pub trait CommandExecutor: Send + Sync {
    fn execute(&self, command: &DeviceCommand) -> String;
}

#[derive(Debug, Clone)]
pub struct AdbExecutor {
    program: String,
    serial: Option<String>,
}

impl AdbExecutor {
    pub fn new(program: impl Into<String>, serial: Option<String>) -> Self {
        Self {
            program: program.into(),
            serial,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.adb_program.clone(), config.serial.clone())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Full argument vector passed to the adb program.
    pub fn argv(&self, command: &DeviceCommand) -> Vec<String> {
        let mut argv = Vec::new();
        if let Some(serial) = &self.serial {
            argv.push("-s".to_string());
            argv.push(serial.clone());
        }
        argv.extend(command.args());
        argv
    }

    /// Runs `command` and waits for it. Any stderr output counts as failure,
    /// whatever the exit status says.
    pub fn run(&self, command: &DeviceCommand) -> Result<String> {
        let argv = self.argv(command);
        debug!(program = %self.program, ?argv, "running device command");

        let output = Command::new(&self.program)
            .args(&argv)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| Error::Launch {
                program: self.program.clone(),
                source,
            })?;

        if !output.stderr.is_empty() {
            return Err(Error::CommandFailed {
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl CommandExecutor for AdbExecutor {
    fn execute(&self, command: &DeviceCommand) -> String {
        match self.run(command) {
            Ok(out) => out,
            Err(e) => {
                error!(%command, "ADB command failed with error: {}", e);
                String::new()
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::services::adb::command::PowerAction;

    #[test]
    fn serial_is_forwarded_first() {
        let exec = AdbExecutor::new("adb", Some("emulator-5554".into()));
        let argv = exec.argv(&DeviceCommand::Power(PowerAction::Reboot));
        assert_eq!(argv, vec!["-s", "emulator-5554", "reboot"]);
    }

    #[test]
    fn stdout_is_trimmed() {
        // `echo` stands in for adb and prints its own arguments back.
        let exec = AdbExecutor::new("echo", None);
        assert_eq!(
            exec.execute(&DeviceCommand::ListPackages),
            "shell pm list packages"
        );
    }

    fn script(dir: &std::path::Path, name: &str, body: &str) -> String {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn stderr_discards_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let program = script(dir.path(), "adb", "echo listed\necho 'su: denied' >&2");
        let exec = AdbExecutor::new(program, None);
        let cmd = DeviceCommand::List {
            path: "/data".into(),
        };
        match exec.run(&cmd) {
            Err(Error::CommandFailed { stderr }) => assert_eq!(stderr, "su: denied"),
            other => panic!("expected CommandFailed, got {other:?}"),
        }
        assert_eq!(exec.execute(&cmd), "");
    }

    #[test]
    fn clean_stderr_keeps_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let program = script(dir.path(), "adb", "echo '  listed  '");
        let exec = AdbExecutor::new(program, None);
        assert_eq!(exec.execute(&DeviceCommand::ListPackages), "listed");
    }

    #[test]
    fn launch_failure_is_swallowed() {
        let exec = AdbExecutor::new("/nonexistent/adb-explorer-test", None);
        let cmd = DeviceCommand::ListPackages;
        assert!(matches!(exec.run(&cmd), Err(Error::Launch { .. })));
        assert_eq!(exec.execute(&cmd), "");
    }
}
