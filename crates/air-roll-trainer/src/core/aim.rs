//! Stick recommendation that turns the vehicle's nose toward the ball.
//!
//! The rotation needed to bring `forward` onto the ball direction is
//! `forward × to_ball`. Projecting that axis onto the vehicle's own frame
//! splits it into yaw (up), pitch (right) and roll (forward) error.

use glam::Vec3;

use crate::api::types::{OrientationBasis, StickVector, VehicleTransform};

/// Below this car-to-ball distance no correction is meaningful.
pub const MIN_TARGET_DISTANCE: f32 = 1.0;

/// Floor for the yaw/pitch normalizer.
const AXIS_EPSILON: f32 = 1e-3;

/// Output of one evaluation: stick deflection plus roll hint, all in [-1, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Recommendation {
    pub stick: StickVector,
    pub roll_hint: f32,
}

impl Recommendation {
    pub const NONE: Self = Self {
        stick: StickVector::ZERO,
        roll_hint: 0.0,
    };

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

/// Rotation-axis error projected onto the vehicle frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisErrors {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl AxisErrors {
    /// `to_ball` must be a unit vector.
    pub fn between(basis: &OrientationBasis, to_ball: Vec3) -> Self {
        let axis = basis.forward.cross(to_ball);
        Self {
            yaw: axis.dot(basis.up),
            pitch: axis.dot(basis.right),
            roll: axis.dot(basis.forward),
        }
    }
}

/// Recommend the stick input that aims `car` at `ball_location`.
///
/// Yaw and pitch are scaled together so the larger one reaches full
/// deflection. The roll hint is the raw projected error, only clamped.
pub fn compute(car: &VehicleTransform, ball_location: Vec3) -> Recommendation {
    let delta = ball_location - car.location;
    let distance = delta.length();
    if distance < MIN_TARGET_DISTANCE {
        return Recommendation::NONE;
    }
    let to_ball = delta / distance;

    let errors = AxisErrors::between(&car.basis, to_ball);
    let max_component = errors.yaw.abs().max(errors.pitch.abs()).max(AXIS_EPSILON);

    Recommendation {
        stick: StickVector {
            x: (errors.yaw / max_component).clamp(-1.0, 1.0),
            y: (-errors.pitch / max_component).clamp(-1.0, 1.0),
        },
        roll_hint: errors.roll.clamp(-1.0, 1.0),
    }
}
