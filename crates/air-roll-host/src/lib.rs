pub mod logging;
pub mod runner;

pub use air_roll_trainer::{Canvas, Host, Plugin};
pub use log;
pub use runner::PluginRunner;

/// Run a host callback, containing any panic so it never unwinds into the host.
/// Returns `None` if `f` panicked. The panic itself is reported by the hook
/// that [`logging::init_with_level`] installs.
pub fn guard<R>(f: impl FnOnce() -> R) -> Option<R> {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)).ok()
}

/// Generate the host-facing entry points for a plugin.
///
/// Generates:
/// - `thread_local!` storage for the plugin's `PluginRunner`
/// - `with_runner()` helper
/// - `plugin_on_load`, `plugin_on_tick`, `plugin_on_draw`, `plugin_set_setting`,
///   `plugin_load_settings`, `plugin_settings_manifest`, `plugin_on_unload`
///
/// Every entry point is panic-guarded and is a no-op before load or after unload.
///
/// # Usage
///
/// ```ignore
/// use air_roll_trainer::AirRollTrainer;
///
/// air_roll_host::export_plugin!(AirRollTrainer, "air-roll-trainer");
/// ```
///
/// # Arguments
///
/// - `$plugin_type`: The plugin struct type; must implement `Plugin` and have `new()`
/// - `$plugin_name`: A string literal used in log messages
#[macro_export]
macro_rules! export_plugin {
    ($plugin_type:ty, $plugin_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::PluginRunner<$plugin_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::PluginRunner<$plugin_type>) -> R) -> Option<R> {
            RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
        }

        pub fn plugin_on_load(host: &mut dyn $crate::Host) {
            let _ = $crate::logging::init_with_level($crate::log::Level::Info);
            $crate::guard(|| {
                let loaded = RUNNER.with(|cell| cell.borrow().is_some());
                if loaded {
                    $crate::log::warn!("{}: already loaded", $plugin_name);
                    return;
                }
                let mut runner = $crate::PluginRunner::new(<$plugin_type>::new());
                runner.load(host);
                RUNNER.with(|cell| {
                    *cell.borrow_mut() = Some(runner);
                });
            });
            $crate::logging::flush_to(host);
        }

        pub fn plugin_on_tick(host: &mut dyn $crate::Host, elapsed: f32) {
            $crate::guard(|| with_runner(|r| r.frame(host, elapsed)));
            $crate::logging::flush_to(host);
        }

        pub fn plugin_on_draw(host: &mut dyn $crate::Host, canvas: &mut dyn $crate::Canvas) {
            $crate::guard(|| with_runner(|r| r.draw(host, canvas)));
            $crate::logging::flush_to(host);
        }

        pub fn plugin_set_setting(host: &mut dyn $crate::Host, name: &str, value: f32) -> bool {
            let result = $crate::guard(|| with_runner(|r| r.set_setting(host, name, value)));
            let ok = match result.flatten() {
                Some(Ok(_)) => true,
                Some(Err(e)) => {
                    $crate::log::warn!("{}: {}", $plugin_name, e);
                    false
                }
                None => false,
            };
            $crate::logging::flush_to(host);
            ok
        }

        pub fn plugin_load_settings(host: &mut dyn $crate::Host, json: &str) -> bool {
            let result = $crate::guard(|| with_runner(|r| r.load_settings_json(host, json)));
            let ok = match result.flatten() {
                Some(Ok(changed)) => {
                    $crate::log::debug!("{}: {} persisted settings applied", $plugin_name, changed);
                    true
                }
                Some(Err(e)) => {
                    $crate::log::warn!("{}: {}", $plugin_name, e);
                    false
                }
                None => false,
            };
            $crate::logging::flush_to(host);
            ok
        }

        pub fn plugin_settings_manifest() -> Option<String> {
            with_runner(|r| r.settings_manifest_json().ok()).flatten()
        }

        pub fn plugin_on_unload(host: &mut dyn $crate::Host) {
            $crate::guard(|| {
                let runner = RUNNER.with(|cell| cell.borrow_mut().take());
                if let Some(mut runner) = runner {
                    runner.unload(host);
                }
            });
            $crate::logging::flush_to(host);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_contains_panics() {
        assert_eq!(guard(|| 7), Some(7));
        assert_eq!(guard(|| -> i32 { panic!("boom") }), None);
    }

    mod exported {
        use air_roll_trainer::AirRollTrainer;

        crate::export_plugin!(AirRollTrainer, "air-roll-trainer");

        #[test]
        fn lifecycle_through_entry_points() {
            use air_roll_trainer::settings::config;
            use air_roll_trainer::testing::FakeHost;
            use air_roll_trainer::DrawList;
            use glam::IVec2;

            let mut host = FakeHost::freeplay();
            plugin_on_tick(&mut host, 0.02);
            assert!(host.rate_calls.is_empty());
            assert!(plugin_settings_manifest().is_none());

            plugin_on_load(&mut host);
            assert!(plugin_settings_manifest().is_some());
            plugin_on_tick(&mut host, 0.02);
            assert_eq!(host.rate, 0.6);

            assert!(plugin_set_setting(&mut host, config::SLOWDOWN_PERCENT, 40.0));
            assert_eq!(host.rate, 0.4);
            assert!(!plugin_set_setting(&mut host, "art_bogus", 1.0));
            assert!(plugin_load_settings(&mut host, r#"{ "art_hint_sensitivity": 0.5 }"#));
            assert!(!plugin_load_settings(&mut host, "{"));

            let mut list = DrawList::new(IVec2::new(1280, 720));
            plugin_on_draw(&mut host, &mut list);
            assert_eq!(list.labels().len(), 6);

            plugin_on_unload(&mut host);
            assert_eq!(host.rate, 1.0);
            assert!(host.unregistered);
            assert!(plugin_settings_manifest().is_none());
        }

        #[test]
        fn second_load_keeps_running_instance() {
            use air_roll_trainer::settings::config;
            use air_roll_trainer::testing::FakeHost;

            let mut host = FakeHost::freeplay();
            plugin_on_load(&mut host);
            plugin_on_tick(&mut host, 0.02);
            assert!(plugin_set_setting(&mut host, config::SLOWDOWN_PERCENT, 30.0));
            assert_eq!(host.rate, 0.3);

            plugin_on_load(&mut host);
            plugin_on_tick(&mut host, 0.02);
            assert_eq!(host.draw_registrations, 1);
            assert_eq!(host.rate, 0.3);

            plugin_on_unload(&mut host);
            plugin_on_load(&mut host);
            assert_eq!(host.draw_registrations, 2);
            plugin_on_unload(&mut host);
        }
    }

    mod panicking {
        use air_roll_trainer::{Host, Plugin, PluginContext};

        pub struct Exploding;

        impl Exploding {
            pub fn new() -> Self {
                Self
            }
        }

        impl Plugin for Exploding {
            fn load(&mut self, _ctx: &mut PluginContext) {}

            fn tick(&mut self, _ctx: &mut PluginContext, _host: &mut dyn Host) {
                panic!("tick exploded");
            }
        }

        crate::export_plugin!(Exploding, "exploding");

        #[test]
        fn tick_panic_reaches_console_once() {
            use air_roll_trainer::testing::FakeHost;

            let mut host = FakeHost::freeplay();
            plugin_on_load(&mut host);
            host.console.clear();

            plugin_on_tick(&mut host, 0.02);
            let reports = host
                .console
                .iter()
                .filter(|line| line.contains("tick exploded"))
                .count();
            assert_eq!(reports, 1);

            plugin_on_unload(&mut host);
        }
    }
}
