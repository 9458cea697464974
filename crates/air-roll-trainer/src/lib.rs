pub mod api;
pub mod core;
pub mod renderer;
pub mod settings;
pub mod systems;
pub mod trainer;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export key types at crate root for convenience
pub use api::host::Host;
pub use api::plugin::{Plugin, PluginContext, PluginInfo};
pub use api::types::{
    BallHandle, GameMode, OrientationBasis, RawInput, StickVector, VehicleHandle,
    VehicleTransform,
};
pub use crate::core::aim::{compute, AxisErrors, Recommendation, MIN_TARGET_DISTANCE};
pub use crate::core::run_state::{InactiveReason, RunState};
pub use crate::core::speed::{slowdown_rate, SpeedControl, SpeedState, NORMAL_RATE};
pub use crate::core::time::PeriodicTask;
pub use renderer::canvas::{Canvas, Rgba};
pub use renderer::draw_list::{DrawList, ShapeInstance, ShapeKind, TextLabel};
pub use settings::config::TrainerConfig;
pub use settings::store::{
    SettingChange, SettingSpec, SettingsError, SettingsManifest, SettingsStore,
};
pub use systems::overlay::{draw_overlay, OverlayFrame, OverlayLayout};
pub use trainer::AirRollTrainer;
