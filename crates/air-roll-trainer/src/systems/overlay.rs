//! Input overlay: a stick diagram comparing the player's yaw/pitch input
//! against the recommendation, with the raw axis values listed underneath.
//!
//! Pure layout. Values come from the last tick; nothing is recomputed here.

use glam::{IVec2, Vec2};

use crate::api::types::{RawInput, StickVector};
use crate::core::aim::Recommendation;
use crate::renderer::canvas::{Canvas, Rgba};

/// Side length of the square stick panel.
pub const PANEL_SIZE: i32 = 200;
/// Gap between the panel and the right edge of the surface.
pub const RIGHT_MARGIN: i32 = 40;
/// Gap between the panel and the bottom edge, leaving room for the stat text.
pub const BOTTOM_MARGIN: i32 = 160;
/// Full stick deflection stops this many pixels short of the panel edge.
const REACH_INSET: f32 = 10.0;
const TEXT_GAP: i32 = 10;
const LINE_HEIGHT: i32 = 18;

pub const PANEL_FILL: Rgba = Rgba::new(0, 0, 0, 140);
pub const PANEL_OUTLINE: Rgba = Rgba::new(255, 255, 255, 220);
pub const INPUT_COLOR: Rgba = Rgba::new(120, 200, 255, 255);
pub const HINT_COLOR: Rgba = Rgba::new(255, 140, 0, 255);
pub const TEXT_COLOR: Rgba = Rgba::WHITE;

const INPUT_MARKER: i32 = 6;
const HINT_MARKER: i32 = 8;

/// Panel placement for a given surface size, anchored bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLayout {
    pub origin: IVec2,
    pub size: IVec2,
    pub center: IVec2,
    /// Pixel distance from the center for a full deflection.
    pub reach: f32,
}

impl OverlayLayout {
    pub fn for_surface(surface: IVec2) -> Self {
        let panel = PANEL_SIZE as f32;
        let origin = IVec2::new(
            (surface.x as f32 - panel - RIGHT_MARGIN as f32) as i32,
            (surface.y as f32 - panel - BOTTOM_MARGIN as f32) as i32,
        );
        let size = IVec2::splat(PANEL_SIZE);
        Self {
            origin,
            size,
            center: origin + size / 2,
            reach: size.x as f32 * 0.5 - REACH_INSET,
        }
    }

    /// Screen position of a stick deflection. Positive `y` (pitch up) is drawn upward.
    pub fn stick_tip(&self, x: f32, y: f32) -> IVec2 {
        IVec2::new(
            (self.center.x as f32 + x * self.reach) as i32,
            (self.center.y as f32 - y * self.reach) as i32,
        )
    }

    /// Top-left of the first stat line.
    pub fn text_origin(&self) -> IVec2 {
        IVec2::new(self.origin.x, self.origin.y + self.size.y + TEXT_GAP)
    }
}

/// Everything the overlay shows, as of the last tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OverlayFrame {
    pub input: RawInput,
    pub recommendation: Recommendation,
}

impl OverlayFrame {
    /// Label/value rows listed under the panel.
    pub fn stats(&self) -> [(&'static str, f32); 6] {
        [
            ("Throttle", self.input.throttle),
            ("Steer", self.input.steer),
            ("Pitch", self.input.pitch),
            ("Yaw", self.input.yaw),
            ("Roll", self.input.roll),
            ("Roll hint", self.recommendation.roll_hint),
        ]
    }
}

/// Whether a recommendation is strong enough to draw. Inclusive at the threshold.
pub fn hint_visible(stick: StickVector, sensitivity: f32) -> bool {
    stick.length() >= sensitivity
}

pub fn format_stat(label: &str, value: f32) -> String {
    format!("{label}: {value:.2}")
}

/// Draw the full overlay onto `canvas`.
pub fn draw_overlay(canvas: &mut dyn Canvas, frame: &OverlayFrame, hint_sensitivity: f32) {
    let layout = OverlayLayout::for_surface(canvas.size());

    canvas.set_color(PANEL_FILL);
    canvas.fill_box(layout.origin, layout.size);
    canvas.set_color(PANEL_OUTLINE);
    canvas.draw_box(layout.origin, layout.size);

    let input_tip = layout.stick_tip(frame.input.yaw, frame.input.pitch);
    canvas.set_color(INPUT_COLOR);
    draw_pointer(canvas, layout.center, input_tip, INPUT_MARKER);

    let stick = frame.recommendation.stick;
    if hint_visible(stick, hint_sensitivity) {
        let hint_tip = layout.stick_tip(stick.x, stick.y);
        canvas.set_color(HINT_COLOR);
        draw_pointer(canvas, layout.center, hint_tip, HINT_MARKER);
    }

    canvas.set_color(TEXT_COLOR);
    let mut pos = layout.text_origin();
    for (label, value) in frame.stats() {
        canvas.draw_string(pos, &format_stat(label, value), Vec2::ONE);
        pos.y += LINE_HEIGHT;
    }
}

/// Line from the panel center with a square marker centered on the tip.
fn draw_pointer(canvas: &mut dyn Canvas, center: IVec2, tip: IVec2, marker: i32) {
    canvas.draw_line(center, tip);
    canvas.fill_box(tip - IVec2::splat(marker / 2), IVec2::splat(marker));
}
