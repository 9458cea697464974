use bytemuck::{Pod, Zeroable};
use glam::{IVec2, Vec2};

use super::canvas::{Canvas, Rgba};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ShapeKind {
    FilledBox = 0,
    OutlinedBox = 1,
    Line = 2,
}

impl ShapeKind {
    fn from_f32(v: f32) -> Option<Self> {
        match v as u8 {
            0 => Some(Self::FilledBox),
            1 => Some(Self::OutlinedBox),
            2 => Some(Self::Line),
            _ => None,
        }
    }
}

/// One recorded shape. 9 floats = 36 bytes stride.
///
/// Boxes span `(x0, y0)..(x1, y1)`; lines run from `(x0, y0)` to `(x1, y1)`.
/// Color channels are normalized to 0.0-1.0.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ShapeInstance {
    pub kind: f32,
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ShapeInstance {
    pub const FLOATS: usize = 9;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    fn new(kind: ShapeKind, from: IVec2, to: IVec2, color: Rgba) -> Self {
        Self {
            kind: kind as u8 as f32,
            x0: from.x as f32,
            y0: from.y as f32,
            x1: to.x as f32,
            y1: to.y as f32,
            r: color.r as f32 / 255.0,
            g: color.g as f32 / 255.0,
            b: color.b as f32 / 255.0,
            a: color.a as f32 / 255.0,
        }
    }

    pub fn kind(&self) -> Option<ShapeKind> {
        ShapeKind::from_f32(self.kind)
    }

    pub fn from(&self) -> IVec2 {
        IVec2::new(self.x0 as i32, self.y0 as i32)
    }

    pub fn to(&self) -> IVec2 {
        IVec2::new(self.x1 as i32, self.y1 as i32)
    }

    pub fn color(&self) -> Rgba {
        let channel = |c: f32| (c * 255.0).round() as u8;
        Rgba::new(channel(self.r), channel(self.g), channel(self.b), channel(self.a))
    }
}

/// A text draw, kept apart from the POD shape buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub pos: IVec2,
    pub text: String,
    pub color: Rgba,
    pub scale: Vec2,
}

/// Recording [`Canvas`]. Hosts without an immediate-mode canvas read the
/// shapes as a flat `f32` buffer and the labels separately.
#[derive(Debug, Clone)]
pub struct DrawList {
    size: IVec2,
    color: Rgba,
    shapes: Vec<ShapeInstance>,
    labels: Vec<TextLabel>,
}

impl DrawList {
    pub fn new(size: IVec2) -> Self {
        Self {
            size,
            color: Rgba::WHITE,
            shapes: Vec::with_capacity(16),
            labels: Vec::with_capacity(8),
        }
    }

    /// Drop recorded draws and reset the color. Keeps the surface size.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.labels.clear();
        self.color = Rgba::WHITE;
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.labels.is_empty()
    }

    pub fn shapes(&self) -> &[ShapeInstance] {
        &self.shapes
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    pub fn lines(&self) -> impl Iterator<Item = &ShapeInstance> {
        self.shapes
            .iter()
            .filter(|s| s.kind() == Some(ShapeKind::Line))
    }

    /// Shape data as a flat slice, `ShapeInstance::FLOATS` per shape.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.shapes)
    }

    fn push(&mut self, kind: ShapeKind, from: IVec2, to: IVec2) {
        self.shapes.push(ShapeInstance::new(kind, from, to, self.color));
    }
}

impl Canvas for DrawList {
    fn size(&self) -> IVec2 {
        self.size
    }

    fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    fn fill_box(&mut self, pos: IVec2, size: IVec2) {
        self.push(ShapeKind::FilledBox, pos, pos + size);
    }

    fn draw_box(&mut self, pos: IVec2, size: IVec2) {
        self.push(ShapeKind::OutlinedBox, pos, pos + size);
    }

    fn draw_line(&mut self, from: IVec2, to: IVec2) {
        self.push(ShapeKind::Line, from, to);
    }

    fn draw_string(&mut self, pos: IVec2, text: &str, scale: Vec2) {
        self.labels.push(TextLabel {
            pos,
            text: text.to_string(),
            color: self.color,
            scale,
        });
    }
}
