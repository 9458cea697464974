use crate::core::speed::{MAX_SLOWDOWN_PERCENT, MIN_SLOWDOWN_PERCENT};
use crate::settings::store::{SettingSpec, SettingsStore};

pub const ENABLED: &str = "art_enabled";
pub const SLOWDOWN_PERCENT: &str = "art_slowdown_pct";
pub const OVERLAY_ENABLED: &str = "art_overlay_enabled";
pub const HINT_SENSITIVITY: &str = "art_hint_sensitivity";

pub const DEFAULT_SLOWDOWN_PERCENT: f32 = 60.0;
pub const DEFAULT_HINT_SENSITIVITY: f32 = 0.25;

/// The four settings the trainer registers with the host.
pub fn trainer_settings() -> Vec<SettingSpec> {
    vec![
        SettingSpec::new(ENABLED, 1.0, 0.0, 1.0)
            .with_description("Enable or disable the air roll trainer"),
        SettingSpec::new(
            SLOWDOWN_PERCENT,
            DEFAULT_SLOWDOWN_PERCENT,
            MIN_SLOWDOWN_PERCENT,
            MAX_SLOWDOWN_PERCENT,
        )
        .with_description("Slowdown percentage applied to the game speed"),
        SettingSpec::new(OVERLAY_ENABLED, 1.0, 0.0, 1.0)
            .with_description("Show the input and guidance overlay"),
        SettingSpec::new(HINT_SENSITIVITY, DEFAULT_HINT_SENSITIVITY, 0.0, 1.0)
            .with_description("Minimum recommendation strength before drawing the arrow"),
    ]
}

/// Immutable per-tick view of the trainer settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainerConfig {
    pub enabled: bool,
    /// Percent of normal game speed while correcting, in [5, 100].
    pub slowdown_percent: f32,
    pub overlay_visible: bool,
    /// Minimum recommendation magnitude that gets drawn, in [0, 1].
    pub hint_sensitivity: f32,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            slowdown_percent: DEFAULT_SLOWDOWN_PERCENT,
            overlay_visible: true,
            hint_sensitivity: DEFAULT_HINT_SENSITIVITY,
        }
    }
}

impl TrainerConfig {
    /// Snapshot the settings. `None` if any entry has not been registered.
    pub fn from_settings(settings: &SettingsStore) -> Option<Self> {
        Some(Self {
            enabled: settings.get_bool(ENABLED)?,
            slowdown_percent: settings
                .get(SLOWDOWN_PERCENT)?
                .clamp(MIN_SLOWDOWN_PERCENT, MAX_SLOWDOWN_PERCENT),
            overlay_visible: settings.get_bool(OVERLAY_ENABLED)?,
            hint_sensitivity: settings.get(HINT_SENSITIVITY)?.clamp(0.0, 1.0),
        })
    }
}
