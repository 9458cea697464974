pub mod config;
pub mod store;

pub use config::{trainer_settings, TrainerConfig};
pub use store::{SettingChange, SettingSpec, SettingsError, SettingsManifest, SettingsStore};
