use glam::{DMat4, DVec3};

/// Camera movement and control abstraction
pub trait CameraController {
    /// Advance camera state by the given number of ticks
    fn update(&mut self, ticks: f64);

    /// Get the view matrix for rendering
    fn view_matrix(&self) -> DMat4;

    /// Get the camera position in world space
    fn position(&self) -> DVec3;

    /// Get the camera forward direction
    fn forward(&self) -> DVec3;
}
