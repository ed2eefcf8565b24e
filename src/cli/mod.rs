pub mod app;
pub mod menu;

pub use app::{Cli, LogLevel};
pub use menu::MenuSession;
