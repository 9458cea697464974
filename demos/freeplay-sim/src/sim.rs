use air_roll_trainer::{
    compute, BallHandle, GameMode, Host, OrientationBasis, RawInput, VehicleHandle,
    VehicleTransform,
};
use glam::{Quat, Vec3};

/// Radians per second at full stick deflection.
const TURN_RATE: f32 = 5.5;
/// Fraction of the gap to the intended stick position closed per frame.
const RESPONSE: f32 = 0.15;
/// The simulated player only commits to part of the yaw they need.
const YAW_COMMITMENT: f32 = 0.6;

/// A one-car freeplay session with a crude player steering toward the ball.
pub struct SimHost {
    pub mode: GameMode,
    pub car: VehicleTransform,
    pub ball: Vec3,
    pub input: RawInput,
    /// Authoritative game-time rate, as set by the plugin.
    pub game_speed: f32,
    /// Whether a game session exists (false in menus).
    pub session: bool,
}

impl SimHost {
    pub fn new() -> Self {
        Self {
            mode: GameMode::Menu,
            car: VehicleTransform::new(Vec3::new(0.0, 0.0, 300.0), OrientationBasis::IDENTITY),
            ball: Vec3::new(1500.0, 800.0, 900.0),
            input: RawInput::default(),
            game_speed: 1.0,
            session: false,
        }
    }

    pub fn enter(&mut self, mode: GameMode) {
        self.mode = mode;
        self.session = mode != GameMode::Menu;
    }

    /// Advance `dt` seconds of wall time, scaled by the game speed.
    pub fn step(&mut self, dt: f32) {
        if !self.session {
            return;
        }
        let game_dt = dt * self.game_speed;

        let aim = compute(&self.car, self.ball);
        let target_yaw = aim.stick.x * YAW_COMMITMENT;
        let target_pitch = aim.stick.y;
        self.input.throttle = 1.0;
        self.input.yaw += (target_yaw - self.input.yaw) * RESPONSE;
        self.input.pitch += (target_pitch - self.input.pitch) * RESPONSE;

        let basis = self.car.basis;
        let turn = Quat::from_axis_angle(basis.up, self.input.yaw * TURN_RATE * game_dt)
            * Quat::from_axis_angle(basis.right, -self.input.pitch * TURN_RATE * game_dt);

        let forward = (turn * basis.forward).normalize();
        let up = turn * basis.up;
        let right = up.cross(forward).normalize();
        let up = forward.cross(right);
        self.car.basis = OrientationBasis::new(forward, right, up);
    }
}

impl Host for SimHost {
    fn game_mode(&self) -> GameMode {
        self.mode
    }

    fn local_vehicle(&self) -> Option<VehicleHandle> {
        self.session.then_some(VehicleHandle(0))
    }

    fn ball(&self) -> Option<BallHandle> {
        self.session.then_some(BallHandle(0))
    }

    fn vehicle_transform(&self, _vehicle: VehicleHandle) -> VehicleTransform {
        self.car
    }

    fn ball_location(&self, _ball: BallHandle) -> Vec3 {
        self.ball
    }

    fn current_input(&self, _vehicle: VehicleHandle) -> RawInput {
        self.input
    }

    fn set_game_time_rate(&mut self, rate: f32) -> bool {
        if !self.session {
            return false;
        }
        self.game_speed = rate;
        true
    }

    fn register_tick(&mut self, interval_secs: f32) {
        println!("[host] tick every {interval_secs}s");
    }

    fn register_draw(&mut self) {
        println!("[host] draw callback registered");
    }

    fn unregister_callbacks(&mut self) {
        println!("[host] callbacks unregistered");
    }

    fn console_log(&mut self, line: &str) {
        println!("[console] {line}");
    }
}
