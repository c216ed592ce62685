//! Command implementations

mod config;
mod gate;
mod interval;
mod process;

pub use config::show_config;
pub use gate::gate;
pub use interval::interval;
pub use process::process;
