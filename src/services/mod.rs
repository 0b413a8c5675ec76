pub mod adb;
pub mod explorer;
