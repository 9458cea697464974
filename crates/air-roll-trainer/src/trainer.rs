use crate::api::host::Host;
use crate::api::plugin::{Plugin, PluginContext, PluginInfo};
use crate::api::types::RawInput;
use crate::core::aim::{self, Recommendation};
use crate::core::run_state::{InactiveReason, RunState};
use crate::core::speed::SpeedControl;
use crate::renderer::canvas::Canvas;
use crate::settings::config::{self, trainer_settings, TrainerConfig};
use crate::settings::store::SettingChange;
use crate::systems::overlay::{draw_overlay, OverlayFrame};

/// Directional air roll trainer.
///
/// Each tick: snapshot settings, capture the player's input, recommend the
/// stick input that aims the car at the ball, and slow the game down while
/// all of that is possible. The draw pass shows the last captured values.
pub struct AirRollTrainer {
    last_input: RawInput,
    recommendation: Recommendation,
    run_state: RunState,
    speed: SpeedControl,
}

impl AirRollTrainer {
    pub fn new() -> Self {
        Self {
            last_input: RawInput::default(),
            recommendation: Recommendation::NONE,
            run_state: RunState::default(),
            speed: SpeedControl::new(),
        }
    }

    pub fn last_input(&self) -> RawInput {
        self.last_input
    }

    pub fn recommendation(&self) -> Recommendation {
        self.recommendation
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn speed(&self) -> &SpeedControl {
        &self.speed
    }

    /// Read the host and refresh the cached input and recommendation.
    /// A missing vehicle leaves the cached values alone; a missing ball
    /// clears the recommendation.
    fn observe(&mut self, config: &TrainerConfig, host: &dyn Host) -> RunState {
        if !config.enabled {
            return RunState::Inactive(InactiveReason::Disabled);
        }
        if !host.is_eligible_mode() {
            return RunState::Inactive(InactiveReason::IneligibleMode);
        }
        let Some(vehicle) = host.local_vehicle() else {
            return RunState::Inactive(InactiveReason::NoVehicle);
        };
        self.last_input = host.current_input(vehicle);

        let Some(ball) = host.ball() else {
            self.recommendation = Recommendation::NONE;
            return RunState::Inactive(InactiveReason::NoBall);
        };
        let car = host.vehicle_transform(vehicle);
        self.recommendation = aim::compute(&car, host.ball_location(ball));
        RunState::Active
    }
}

impl Default for AirRollTrainer {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for AirRollTrainer {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: "AirRollTrainer",
            description: "Directional air roll trainer",
            version: env!("CARGO_PKG_VERSION"),
            ..PluginInfo::default()
        }
    }

    fn load(&mut self, ctx: &mut PluginContext) {
        for spec in trainer_settings() {
            ctx.settings.register(spec);
        }
        log::debug!("registered {} settings", ctx.settings.len());
    }

    fn tick(&mut self, ctx: &mut PluginContext, host: &mut dyn Host) {
        let Some(config) = TrainerConfig::from_settings(&ctx.settings) else {
            log::trace!("settings unavailable, tick skipped");
            return;
        };

        let run = self.observe(&config, host);
        if run != self.run_state {
            log::debug!("run state {:?} -> {:?}", self.run_state, run);
            self.run_state = run;
        }
        self.speed.update(host, run, config.slowdown_percent);
    }

    fn draw(&self, ctx: &PluginContext, host: &dyn Host, canvas: &mut dyn Canvas) {
        let Some(config) = TrainerConfig::from_settings(&ctx.settings) else {
            return;
        };
        if !config.enabled || !config.overlay_visible || !host.is_eligible_mode() {
            return;
        }
        let frame = OverlayFrame {
            input: self.last_input,
            recommendation: self.recommendation,
        };
        draw_overlay(canvas, &frame, config.hint_sensitivity);
    }

    fn setting_changed(
        &mut self,
        _ctx: &mut PluginContext,
        host: &mut dyn Host,
        change: &SettingChange,
    ) {
        match change.name.as_str() {
            config::ENABLED if change.new == 0.0 => {
                log::info!("trainer disabled");
                self.speed.reset(host);
            }
            config::SLOWDOWN_PERCENT if self.speed.is_slowed() => {
                self.speed.apply(host, change.new);
            }
            _ => {}
        }
    }

    fn unload(&mut self, _ctx: &mut PluginContext, host: &mut dyn Host) {
        self.speed.reset(host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{GameMode, StickVector};
    use crate::core::speed::SpeedState;
    use crate::renderer::draw_list::DrawList;
    use crate::testing::FakeHost;
    use glam::IVec2;

    fn loaded() -> (AirRollTrainer, PluginContext) {
        let mut trainer = AirRollTrainer::new();
        let mut ctx = PluginContext::new();
        trainer.load(&mut ctx);
        (trainer, ctx)
    }

    /// Write a setting and deliver the notification, the way a runner does.
    fn set(
        trainer: &mut AirRollTrainer,
        ctx: &mut PluginContext,
        host: &mut FakeHost,
        name: &str,
        value: f32,
    ) {
        ctx.settings.set(name, value).unwrap();
        for change in ctx.settings.drain_changes() {
            trainer.setting_changed(ctx, host, &change);
        }
    }

    fn drawn(trainer: &AirRollTrainer, ctx: &PluginContext, host: &FakeHost) -> DrawList {
        let mut list = DrawList::new(IVec2::new(1920, 1080));
        trainer.draw(ctx, host, &mut list);
        list
    }

    #[test]
    fn active_tick_recommends_and_slows() {
        let (mut trainer, mut ctx) = loaded();
        let mut host = FakeHost::freeplay();
        host.input.yaw = 0.4;

        trainer.tick(&mut ctx, &mut host);

        assert_eq!(trainer.run_state(), RunState::Active);
        assert_eq!(trainer.recommendation().stick, StickVector::new(0.0, 1.0));
        assert_eq!(trainer.last_input().yaw, 0.4);
        assert_eq!(host.rate, 0.6);
    }

    #[test]
    fn disabling_restores_speed_immediately() {
        let (mut trainer, mut ctx) = loaded();
        let mut host = FakeHost::freeplay();
        trainer.tick(&mut ctx, &mut host);
        assert_eq!(host.rate, 0.6);

        set(&mut trainer, &mut ctx, &mut host, config::ENABLED, 0.0);
        assert_eq!(host.rate, 1.0);

        trainer.tick(&mut ctx, &mut host);
        assert_eq!(trainer.run_state(), RunState::Inactive(InactiveReason::Disabled));
        assert_eq!(host.rate, 1.0);
    }

    #[test]
    fn slowdown_change_applies_while_active() {
        let (mut trainer, mut ctx) = loaded();
        let mut host = FakeHost::freeplay();
        trainer.tick(&mut ctx, &mut host);

        set(&mut trainer, &mut ctx, &mut host, config::SLOWDOWN_PERCENT, 5.0);
        assert_eq!(host.rate, 0.05);
        set(&mut trainer, &mut ctx, &mut host, config::SLOWDOWN_PERCENT, 150.0);
        assert_eq!(host.rate, 1.0);
        assert_eq!(trainer.speed().state(), SpeedState::Slowed { rate: 1.0 });
    }

    #[test]
    fn slowdown_change_while_inactive_waits_for_next_active_tick() {
        let (mut trainer, mut ctx) = loaded();
        let mut host = FakeHost::freeplay();
        host.mode = GameMode::Menu;
        trainer.tick(&mut ctx, &mut host);

        set(&mut trainer, &mut ctx, &mut host, config::SLOWDOWN_PERCENT, 30.0);
        assert!(host.rate_calls.is_empty());

        host.mode = GameMode::CustomTraining;
        trainer.tick(&mut ctx, &mut host);
        assert_eq!(host.rate, 0.3);
    }

    #[test]
    fn leaving_and_reentering_freeplay_round_trips_rate() {
        let (mut trainer, mut ctx) = loaded();
        let mut host = FakeHost::freeplay();
        trainer.tick(&mut ctx, &mut host);

        host.mode = GameMode::OnlineMatch;
        trainer.tick(&mut ctx, &mut host);
        assert_eq!(host.rate, 1.0);
        assert_eq!(
            trainer.run_state(),
            RunState::Inactive(InactiveReason::IneligibleMode)
        );

        host.mode = GameMode::Freeplay;
        trainer.tick(&mut ctx, &mut host);
        assert_eq!(host.rate, 0.6);
        assert_eq!(host.rate_calls, vec![0.6, 1.0, 0.6]);
    }

    #[test]
    fn missing_ball_clears_recommendation_and_speed() {
        let (mut trainer, mut ctx) = loaded();
        let mut host = FakeHost::freeplay();
        trainer.tick(&mut ctx, &mut host);

        host.ball = None;
        host.input.pitch = -0.7;
        trainer.tick(&mut ctx, &mut host);

        assert!(trainer.recommendation().is_none());
        assert_eq!(trainer.last_input().pitch, -0.7);
        assert_eq!(trainer.run_state(), RunState::Inactive(InactiveReason::NoBall));
        assert_eq!(host.rate, 1.0);
    }

    #[test]
    fn missing_vehicle_keeps_cached_values() {
        let (mut trainer, mut ctx) = loaded();
        let mut host = FakeHost::freeplay();
        host.input.roll = 1.0;
        trainer.tick(&mut ctx, &mut host);

        host.vehicle = None;
        host.input.roll = -1.0;
        trainer.tick(&mut ctx, &mut host);

        assert_eq!(trainer.last_input().roll, 1.0);
        assert!(!trainer.recommendation().is_none());
        assert_eq!(trainer.run_state(), RunState::Inactive(InactiveReason::NoVehicle));
        assert_eq!(host.rate, 1.0);
    }

    #[test]
    fn unload_restores_speed() {
        let (mut trainer, mut ctx) = loaded();
        let mut host = FakeHost::freeplay();
        trainer.tick(&mut ctx, &mut host);
        trainer.unload(&mut ctx, &mut host);
        assert_eq!(host.rate, 1.0);
        assert_eq!(trainer.speed().state(), SpeedState::Normal);
    }

    #[test]
    fn tick_before_load_does_nothing() {
        let mut trainer = AirRollTrainer::new();
        let mut ctx = PluginContext::new();
        let mut host = FakeHost::freeplay();
        trainer.tick(&mut ctx, &mut host);
        assert!(host.rate_calls.is_empty());
        assert!(drawn(&trainer, &ctx, &host).is_empty());
    }

    #[test]
    fn draw_respects_visibility() {
        let (mut trainer, mut ctx) = loaded();
        let mut host = FakeHost::freeplay();
        trainer.tick(&mut ctx, &mut host);

        let list = drawn(&trainer, &ctx, &host);
        assert_eq!(list.lines().count(), 2);
        assert_eq!(list.labels().len(), 6);

        set(&mut trainer, &mut ctx, &mut host, config::OVERLAY_ENABLED, 0.0);
        assert!(drawn(&trainer, &ctx, &host).is_empty());

        set(&mut trainer, &mut ctx, &mut host, config::OVERLAY_ENABLED, 1.0);
        host.mode = GameMode::Replay;
        assert!(drawn(&trainer, &ctx, &host).is_empty());

        host.mode = GameMode::Freeplay;
        set(&mut trainer, &mut ctx, &mut host, config::ENABLED, 0.0);
        assert!(drawn(&trainer, &ctx, &host).is_empty());
    }

    #[test]
    fn draw_uses_last_tick_values() {
        let (mut trainer, mut ctx) = loaded();
        let mut host = FakeHost::freeplay();
        trainer.tick(&mut ctx, &mut host);

        // The ball moves, but no tick runs before the draw.
        host.ball = Some(glam::Vec3::new(0.0, 50.0, 0.0));
        let list = drawn(&trainer, &ctx, &host);
        let hint = list.lines().nth(1).unwrap();
        assert_eq!(hint.to(), IVec2::new(1780, 730));
    }
}
