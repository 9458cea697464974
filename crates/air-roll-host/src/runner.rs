use air_roll_trainer::{
    Canvas, Host, PeriodicTask, Plugin, PluginContext, PluginInfo, SettingsError,
};

use crate::logging;

/// Generic plugin runner that wires a [`Plugin`] to the host callbacks.
///
/// Each concrete plugin stores one runner in a `thread_local!` slot via
/// [`export_plugin!`](crate::export_plugin), because the host reaches the
/// plugin through free functions.
pub struct PluginRunner<P: Plugin> {
    plugin: P,
    ctx: PluginContext,
    task: PeriodicTask,
    info: PluginInfo,
    loaded: bool,
    draw_registered: bool,
}

impl<P: Plugin> PluginRunner<P> {
    pub fn new(plugin: P) -> Self {
        let info = plugin.info();
        let task = PeriodicTask::new(info.tick_interval, info.max_ticks_per_frame);
        Self {
            plugin,
            ctx: PluginContext::new(),
            task,
            info,
            loaded: false,
            draw_registered: false,
        }
    }

    /// Load the plugin, register its callbacks and start ticking.
    pub fn load(&mut self, host: &mut dyn Host) {
        if self.loaded {
            return;
        }
        self.plugin.load(&mut self.ctx);

        if !self.draw_registered {
            host.register_draw();
            self.draw_registered = true;
        }
        host.register_tick(self.info.tick_interval);
        self.task.start();
        self.loaded = true;

        log::info!("{} {}: loaded", self.info.name, self.info.version);
        logging::flush_to(host);
    }

    /// Host tick callback. `elapsed` is the time since the previous call.
    pub fn frame(&mut self, host: &mut dyn Host, elapsed: f32) {
        if !self.loaded {
            return;
        }
        let steps = self.task.accumulate(elapsed);
        for _ in 0..steps {
            self.ctx.advance();
            self.plugin.tick(&mut self.ctx, host);
        }
        logging::flush_to(host);
    }

    /// Host draw callback.
    pub fn draw(&mut self, host: &mut dyn Host, canvas: &mut dyn Canvas) {
        if !self.loaded {
            return;
        }
        self.plugin.draw(&self.ctx, &*host, canvas);
        logging::flush_to(host);
    }

    /// Write a setting on behalf of the host and deliver the change at once.
    pub fn set_setting(
        &mut self,
        host: &mut dyn Host,
        name: &str,
        value: f32,
    ) -> Result<bool, SettingsError> {
        let result = self.ctx.settings.set(name, value);
        self.dispatch_changes(host);
        logging::flush_to(host);
        result
    }

    /// Apply values persisted by the host. Returns how many changed.
    pub fn load_settings_json(
        &mut self,
        host: &mut dyn Host,
        json: &str,
    ) -> Result<usize, SettingsError> {
        let result = self.ctx.settings.load_values_json(json);
        self.dispatch_changes(host);
        logging::flush_to(host);
        result
    }

    /// Definitions of every registered setting, for the host to register.
    pub fn settings_manifest_json(&self) -> Result<String, SettingsError> {
        Ok(self.ctx.settings.manifest().to_json()?)
    }

    pub fn settings_values_json(&self) -> Result<String, SettingsError> {
        self.ctx.settings.values_json()
    }

    /// Tear down: let the plugin restore the host, stop ticking, drop callbacks.
    pub fn unload(&mut self, host: &mut dyn Host) {
        if !self.loaded {
            return;
        }
        self.plugin.unload(&mut self.ctx, host);
        self.task.stop();
        host.unregister_callbacks();
        self.draw_registered = false;
        self.loaded = false;

        log::info!("{}: unloaded after {} ticks", self.info.name, self.ctx.tick_count());
        logging::flush_to(host);
    }

    fn dispatch_changes(&mut self, host: &mut dyn Host) {
        for change in self.ctx.settings.drain_changes() {
            self.plugin.setting_changed(&mut self.ctx, host, &change);
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_ticking(&self) -> bool {
        self.task.is_running()
    }

    pub fn plugin(&self) -> &P {
        &self.plugin
    }

    pub fn context(&self) -> &PluginContext {
        &self.ctx
    }

    pub fn info(&self) -> &PluginInfo {
        &self.info
    }
}
