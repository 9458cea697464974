//! Immediate-mode drawing surface handed out by the host during its draw callback.
//!
//! Coordinates are integer pixels with the origin at the top-left and y
//! pointing down.

use glam::{IVec2, Vec2};

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

pub trait Canvas {
    /// Surface size in pixels.
    fn size(&self) -> IVec2;

    /// Color used by subsequent draw calls.
    fn set_color(&mut self, color: Rgba);

    fn fill_box(&mut self, pos: IVec2, size: IVec2);

    /// One-pixel outline of a box.
    fn draw_box(&mut self, pos: IVec2, size: IVec2);

    fn draw_line(&mut self, from: IVec2, to: IVec2);

    fn draw_string(&mut self, pos: IVec2, text: &str, scale: Vec2);
}
