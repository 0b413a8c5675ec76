use clap::Args;
use std::path::PathBuf;

pub const DEFAULT_ADB: &str = "adb";
pub const DEFAULT_ROOT: &str = "/";
pub const DEFAULT_ASSETS_DIR: &str = "./assets";

/// Flags shared by the GUI and the `adbx` binary.
#[derive(Debug, Clone, Args)]
pub struct DeviceArgs {
    /// adb executable to invoke
    #[arg(long, env = "ADBX_ADB", default_value = DEFAULT_ADB)]
    pub adb: String,

    /// Target device serial (forwarded as `adb -s`)
    #[arg(short, long, env = "ANDROID_SERIAL")]
    pub serial: Option<String>,

    /// Directory listed at startup
    #[arg(long, env = "ADBX_ROOT", default_value = DEFAULT_ROOT)]
    pub root: String,

    /// Directory holding the icon files
    #[arg(long, env = "ADBX_ASSETS", default_value = DEFAULT_ASSETS_DIR)]
    pub assets: PathBuf,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub adb_program: String,
    pub serial: Option<String>,
    pub start_path: String,
    pub assets_dir: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            adb_program: DEFAULT_ADB.to_string(),
            serial: None,
            start_path: DEFAULT_ROOT.to_string(),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            log_level: "info".to_string(),
        }
    }
}

impl From<DeviceArgs> for Config {
    fn from(args: DeviceArgs) -> Self {
        let start_path = if args.root.trim().is_empty() {
            DEFAULT_ROOT.to_string()
        } else {
            args.root
        };
        Self {
            adb_program: args.adb,
            serial: args.serial.filter(|s| !s.trim().is_empty()),
            start_path,
            assets_dir: args.assets,
            log_level: args.log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        device: DeviceArgs,
    }

    #[test]
    fn flags_override_defaults() {
        let cli = TestCli::parse_from([
            "test", "--adb", "/opt/adb", "-s", "emulator-5554", "--root", "/sdcard",
        ]);
        let config = Config::from(cli.device);
        assert_eq!(config.adb_program, "/opt/adb");
        assert_eq!(config.serial.as_deref(), Some("emulator-5554"));
        assert_eq!(config.start_path, "/sdcard");
    }

    #[test]
    fn blank_root_and_serial_fall_back() {
        let cli = TestCli::parse_from(["test", "--root", " ", "--serial", ""]);
        let config = Config::from(cli.device);
        assert_eq!(config.start_path, "/");
        assert_eq!(config.serial, None);
    }
}
