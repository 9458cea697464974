pub mod canvas;
pub mod draw_list;

pub use canvas::{Canvas, Rgba};
pub use draw_list::{DrawList, ShapeInstance, ShapeKind, TextLabel};
