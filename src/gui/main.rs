use adb_explorer::core::config::{Config, DeviceArgs};
use adb_explorer::ui::AdbExplorerApp;
use clap::Parser;

/// Browse an Android device's filesystem over adb.
#[derive(Parser)]
#[command(name = "ADB Explorer", version)]
struct Cli {
    #[command(flatten)]
    device: DeviceArgs,
}

fn main() {
    let cli = Cli::parse();
    AdbExplorerApp::run(Config::from(cli.device));
}
