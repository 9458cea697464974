//! Recording fake host for tests.

use glam::Vec3;

use crate::api::host::Host;
use crate::api::types::{
    BallHandle, GameMode, OrientationBasis, RawInput, VehicleHandle, VehicleTransform,
};

/// In-memory host. Every game-time rate write is recorded in `rate_calls`.
#[derive(Debug, Clone)]
pub struct FakeHost {
    pub mode: GameMode,
    pub vehicle: Option<VehicleTransform>,
    pub ball: Option<Vec3>,
    pub input: RawInput,
    /// Whether a game session exists to receive rate writes.
    pub session: bool,
    pub rate: f32,
    pub rate_calls: Vec<f32>,
    pub tick_interval: Option<f32>,
    pub draw_registrations: u32,
    pub unregistered: bool,
    pub console: Vec<String>,
}

impl FakeHost {
    /// Freeplay session: car at the origin with the identity basis, ball straight overhead.
    pub fn freeplay() -> Self {
        Self {
            mode: GameMode::Freeplay,
            vehicle: Some(VehicleTransform::new(Vec3::ZERO, OrientationBasis::IDENTITY)),
            ball: Some(Vec3::new(0.0, 0.0, 10.0)),
            input: RawInput::default(),
            session: true,
            rate: 1.0,
            rate_calls: Vec::new(),
            tick_interval: None,
            draw_registrations: 0,
            unregistered: false,
            console: Vec::new(),
        }
    }
}

impl Host for FakeHost {
    fn game_mode(&self) -> GameMode {
        self.mode
    }

    fn local_vehicle(&self) -> Option<VehicleHandle> {
        self.vehicle.map(|_| VehicleHandle(1))
    }

    fn ball(&self) -> Option<BallHandle> {
        self.ball.map(|_| BallHandle(1))
    }

    fn vehicle_transform(&self, _vehicle: VehicleHandle) -> VehicleTransform {
        self.vehicle.unwrap_or_default()
    }

    fn ball_location(&self, _ball: BallHandle) -> Vec3 {
        self.ball.unwrap_or(Vec3::ZERO)
    }

    fn current_input(&self, _vehicle: VehicleHandle) -> RawInput {
        self.input
    }

    fn set_game_time_rate(&mut self, rate: f32) -> bool {
        if !self.session {
            return false;
        }
        self.rate = rate;
        self.rate_calls.push(rate);
        true
    }

    fn register_tick(&mut self, interval_secs: f32) {
        self.tick_interval = Some(interval_secs);
    }

    fn register_draw(&mut self) {
        self.draw_registrations += 1;
    }

    fn unregister_callbacks(&mut self) {
        self.unregistered = true;
        self.tick_interval = None;
    }

    fn console_log(&mut self, line: &str) {
        self.console.push(line.to_string());
    }
}
