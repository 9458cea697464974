//! The modding host as seen by a plugin.
//!
//! Everything the trainer needs from the game goes through [`Host`]; the real
//! binding lives outside this crate. Drawing goes through
//! [`Canvas`](crate::renderer::canvas::Canvas) instead, since the host only
//! hands out a drawing surface during its draw callback.

use glam::Vec3;

use crate::api::types::{BallHandle, GameMode, RawInput, VehicleHandle, VehicleTransform};

pub trait Host {
    /// Mode the local player is currently in.
    fn game_mode(&self) -> GameMode;

    /// Whether the current mode is a freeform practice mode.
    fn is_eligible_mode(&self) -> bool {
        self.game_mode().is_eligible()
    }

    fn local_vehicle(&self) -> Option<VehicleHandle>;

    fn ball(&self) -> Option<BallHandle>;

    fn vehicle_transform(&self, vehicle: VehicleHandle) -> VehicleTransform;

    fn ball_location(&self, ball: BallHandle) -> Vec3;

    fn current_input(&self, vehicle: VehicleHandle) -> RawInput;

    /// Set the authoritative game-time rate for the whole simulation.
    /// Returns `false` when there is no game session to apply it to.
    fn set_game_time_rate(&mut self, rate: f32) -> bool;

    /// Ask the host to call the tick callback roughly every `interval_secs`.
    fn register_tick(&mut self, _interval_secs: f32) {}

    /// Ask the host to call the draw callback every frame.
    fn register_draw(&mut self) {}

    /// Drop every callback registered by this plugin.
    fn unregister_callbacks(&mut self) {}

    /// Write one line to the host console.
    fn console_log(&mut self, _line: &str) {}
}
