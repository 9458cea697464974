use glam::Vec3;

/// Opaque handle to the local player's vehicle, issued by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VehicleHandle(pub u32);

/// Opaque handle to the ball, issued by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BallHandle(pub u32);

/// Game mode as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Menu,
    /// Unstructured practice.
    Freeplay,
    /// Custom training packs.
    CustomTraining,
    OnlineMatch,
    Replay,
    Spectating,
}

impl GameMode {
    /// Freeform practice modes the trainer is allowed to act in.
    pub const ELIGIBLE: [GameMode; 2] = [Self::Freeplay, Self::CustomTraining];

    pub fn is_eligible(self) -> bool {
        Self::ELIGIBLE.contains(&self)
    }
}

/// Snapshot of the player's analog axes for the current tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawInput {
    pub throttle: f32,
    pub steer: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

/// Local frame of the vehicle. Orthonormal when supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationBasis {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl OrientationBasis {
    /// Forward along +X, right along +Y, up along +Z.
    pub const IDENTITY: Self = Self {
        forward: Vec3::X,
        right: Vec3::Y,
        up: Vec3::Z,
    };

    pub fn new(forward: Vec3, right: Vec3, up: Vec3) -> Self {
        Self { forward, right, up }
    }
}

impl Default for OrientationBasis {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// World-space location plus orientation of a vehicle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VehicleTransform {
    pub location: Vec3,
    pub basis: OrientationBasis,
}

impl VehicleTransform {
    pub fn new(location: Vec3, basis: OrientationBasis) -> Self {
        Self { location, basis }
    }
}

/// Recommended stick deflection. `x` drives yaw, `y` drives pitch (positive = pitch up).
/// Zero means "no recommendation".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StickVector {
    pub x: f32,
    pub y: f32,
}

impl StickVector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean magnitude of the deflection.
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}
