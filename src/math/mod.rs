pub mod color;
mod transform;

pub use color::Rgb;
pub use transform::TransformStack;
