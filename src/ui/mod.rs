pub mod app;
pub mod assets;
pub mod components;
pub mod theme;

pub use app::AdbExplorerApp;
