pub mod camera;
pub mod cli;
pub mod config;
pub mod draw;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod input;
pub mod math;
pub mod renderer;
pub mod scenes;
pub mod session;
pub mod slider;
pub mod texture;
pub mod traits;
pub mod types;

pub use error::ViewerError;
pub use scenes::{create_house_scene, create_owl_scene, SceneKind};
pub use session::Session;
