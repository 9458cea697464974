use crate::api::host::Host;
use crate::renderer::canvas::Canvas;
use crate::settings::store::{SettingChange, SettingsStore};

/// Static description of a plugin, provided by the plugin.
#[derive(Debug, Clone)]
pub struct PluginInfo {
    /// Name shown in the host's plugin list.
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    /// Seconds between ticks (default: 0.02, i.e. 50 Hz).
    pub tick_interval: f32,
    /// Most ticks run for a single host frame (default: 1).
    pub max_ticks_per_frame: u32,
}

impl Default for PluginInfo {
    fn default() -> Self {
        Self {
            name: "plugin",
            description: "",
            version: "0.0.0",
            tick_interval: 0.02,
            max_ticks_per_frame: 1,
        }
    }
}

/// The contract every plugin fulfills. Driven by a runner on the host's main thread;
/// callbacks never overlap.
pub trait Plugin {
    /// Return plugin metadata. Called once before load.
    fn info(&self) -> PluginInfo {
        PluginInfo::default()
    }

    /// Register settings and set up initial state.
    fn load(&mut self, ctx: &mut PluginContext);

    /// Fixed-interval update.
    fn tick(&mut self, ctx: &mut PluginContext, host: &mut dyn Host);

    /// Read-only draw pass, called at the host's frame rate.
    fn draw(&self, _ctx: &PluginContext, _host: &dyn Host, _canvas: &mut dyn Canvas) {}

    /// A setting changed value. Called as soon as the host writes it.
    fn setting_changed(
        &mut self,
        _ctx: &mut PluginContext,
        _host: &mut dyn Host,
        _change: &SettingChange,
    ) {
    }

    /// Tear down. Must leave the host as it was before load.
    fn unload(&mut self, _ctx: &mut PluginContext, _host: &mut dyn Host) {}
}

/// State owned on behalf of the plugin, passed to every callback.
pub struct PluginContext {
    pub settings: SettingsStore,
    ticks: u64,
}

impl PluginContext {
    pub fn new() -> Self {
        Self {
            settings: SettingsStore::new(),
            ticks: 0,
        }
    }

    /// Number of ticks run since load.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Count one tick. Called by the runner before `Plugin::tick`.
    pub fn advance(&mut self) {
        self.ticks += 1;
    }
}

impl Default for PluginContext {
    fn default() -> Self {
        Self::new()
    }
}
