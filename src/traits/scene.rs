use crate::camera::CameraPose;
use crate::draw::{Painter, Pass, Viewport};
use crate::math::Rgb;
use crate::slider::Slider;

/// A composable 3D scene with its slider controls.
pub trait SceneProvider {
    /// Scene name for logs and window titles
    fn name(&self) -> &str;

    /// Where the camera starts
    fn start_pose(&self) -> CameraPose;

    fn clear_color(&self) -> Rgb;

    /// Window region used by the 3D view
    fn world_viewport(&self) -> Viewport;

    fn sliders(&self) -> &[Slider];

    fn sliders_mut(&mut self) -> &mut [Slider];

    /// Issue the 3D geometry for the current knob values
    fn compose(&self, painter: &mut Painter);

    /// Build the 2D control panel pass
    fn overlay(&self) -> Pass;
}
