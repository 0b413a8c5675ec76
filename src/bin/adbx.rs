use adb_explorer::core::config::{Config, DeviceArgs};
use adb_explorer::core::telemetry::logging::init_logging;
use adb_explorer::services::adb::command::is_valid_mode;
use adb_explorer::services::adb::paths;
use adb_explorer::services::adb::{AdbExecutor, PowerAction};
use adb_explorer::services::explorer::session::Session;
use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};

/// Headless access to the ADB Explorer operations.
#[derive(Parser)]
#[command(name = "adbx", version)]
struct Cli {
    #[command(flatten)]
    device: DeviceArgs,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// List a directory as JSON
    Ls { path: String },
    /// Copy a path recursively into a directory
    Cp { src: String, dest_dir: String },
    /// Remove a file or directory
    Rm { path: String },
    /// Rename a path within its directory
    Mv { path: String, new_name: String },
    /// Change permissions using an octal mode
    Chmod { mode: String, path: String },
    /// Create a directory
    Mkdir { path: String },
    /// Shut down or reboot the device
    Power { action: PowerArg },
    /// List installed packages as JSON
    Packages,
    /// Report whether a known root manager is installed
    RootCheck,
}

#[derive(Clone, Copy, ValueEnum)]
enum PowerArg {
    Shutdown,
    Reboot,
    Recovery,
}

impl From<PowerArg> for PowerAction {
    fn from(arg: PowerArg) -> Self {
        match arg {
            PowerArg::Shutdown => PowerAction::Shutdown,
            PowerArg::Reboot => PowerAction::Reboot,
            PowerArg::Recovery => PowerAction::RebootRecovery,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from(cli.device);
    init_logging(&config.log_level);

    let executor = AdbExecutor::from_config(&config);

    match cli.command {
        Cmd::Ls { path } => {
            let mut session = Session::new(executor, path);
            session.start();
            println!("{}", serde_json::to_string_pretty(session.explorer().entries())?);
        }
        Cmd::Cp { src, dest_dir } => {
            let mut session = Session::new(executor, dest_dir);
            if !session.paste(&src) {
                bail!("nothing to copy from {src:?}");
            }
        }
        Cmd::Rm { path } => {
            let mut session = session_on_entry(executor, &path)?;
            session.delete(0);
        }
        Cmd::Mv { path, new_name } => {
            let mut session = session_on_entry(executor, &path)?;
            if !session.rename(0, &new_name) {
                bail!("new name must not be empty");
            }
        }
        Cmd::Chmod { mode, path } => {
            if !is_valid_mode(&mode) {
                bail!("permissions must be numeric, got {mode:?}");
            }
            let mut session = session_on_entry(executor, &path)?;
            session.change_permissions(0, &mode);
        }
        Cmd::Mkdir { path } => {
            let name = paths::last_segment(&path).to_string();
            let mut session = Session::new(executor, paths::parent(&path));
            if !session.new_folder(&name) {
                bail!("no folder name in {path:?}");
            }
        }
        Cmd::Power { action } => {
            Session::new(executor, config.start_path).power(action.into());
        }
        Cmd::Packages => {
            let session = Session::new(executor, config.start_path);
            println!("{}", serde_json::to_string_pretty(&session.installed_packages())?);
        }
        Cmd::RootCheck => {
            let session = Session::new(executor, config.start_path);
            println!("{}", serde_json::to_string_pretty(&session.root_status())?);
        }
    }
    Ok(())
}

/// Builds a session on the parent of `path` whose only entry is `path`
/// itself, so the entry-based actions can target it without a listing.
fn session_on_entry(executor: AdbExecutor, path: &str) -> Result<Session<AdbExecutor>> {
    let name = paths::last_segment(path);
    if name.is_empty() {
        bail!("refusing to operate on {path:?}");
    }
    let parent = paths::parent(path);
    let mut session = Session::new(executor, parent.clone());
    session.seed_entry(&parent, name);
    Ok(session)
}
