pub mod command;
pub mod executor;
pub mod packages;
pub mod paths;

pub use command::{DeviceCommand, PowerAction};
pub use executor::{AdbExecutor, CommandExecutor};
