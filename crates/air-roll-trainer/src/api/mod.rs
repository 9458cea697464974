pub mod host;
pub mod plugin;
pub mod types;
