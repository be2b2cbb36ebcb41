use glam::DVec2;

use crate::camera::{FlyCamera, SteerCommand, Steering};
use crate::draw::{Frame, Painter, Pass, Projection};
use crate::input::{DragCapture, InputEvent};
use crate::traits::{CameraController, SceneProvider};

/// Logical window size shared by both scenes.
pub const WINDOW_WIDTH: u32 = 600;
pub const WINDOW_HEIGHT: u32 = 600;

pub const WORLD_PROJECTION: Projection = Projection::Frustum {
    left: -1.0,
    right: 1.0,
    bottom: -1.0,
    top: 1.0,
    near: 1.0,
    far: 300.0,
};

/// All mutable viewer state: the camera, the scene with its knobs, and
/// which slider owns the pointer.
pub struct Session {
    camera: FlyCamera,
    scene: Box<dyn SceneProvider>,
    drag: DragCapture,
}

impl Session {
    pub fn new(scene: Box<dyn SceneProvider>, steering: Steering) -> Self {
        let camera = FlyCamera::new(scene.start_pose(), steering);
        Self {
            camera,
            scene,
            drag: DragCapture::new(),
        }
    }

    pub fn camera(&self) -> &FlyCamera {
        &self.camera
    }

    pub fn scene(&self) -> &dyn SceneProvider {
        self.scene.as_ref()
    }

    /// Index of the captured slider.
    pub fn captured(&self) -> Option<usize> {
        self.drag.target()
    }

    pub fn captured_name(&self) -> Option<&str> {
        self.drag
            .target()
            .and_then(|i| self.scene.sliders().get(i))
            .map(|s| s.knob.name.as_str())
    }

    pub fn knob_value(&self, index: usize) -> Option<f64> {
        self.scene.sliders().get(index).map(|s| s.value())
    }

    /// Advance the camera by `ticks` simulation ticks.
    pub fn update(&mut self, ticks: f64) {
        self.camera.update(ticks);
    }

    /// Apply one input event. Returns `false` when the viewer should close.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Steer(command) => self.steer(command),
            InputEvent::PointerDown { x, y } => self.pointer_pressed(x, y),
            InputEvent::PointerUp => self.pointer_released(),
            InputEvent::PointerMoved { x, .. } => self.pointer_moved(x),
            InputEvent::Quit => return false,
        }
        true
    }

    pub fn steer(&mut self, command: SteerCommand) {
        self.camera.steer(command);
    }

    /// Press at window pixel `(x, y)` with a top-left origin.
    pub fn pointer_pressed(&mut self, x: f64, y: f64) {
        let point = DVec2::new(x, WINDOW_HEIGHT as f64 - y);
        let before = self.drag.target();
        if let Some(index) = self.drag.press(self.scene.sliders(), point) {
            if before != Some(index) {
                log::debug!("Captured slider {}", self.scene.sliders()[index].knob.name);
            }
        }
    }

    pub fn pointer_released(&mut self) {
        if let Some(name) = self.captured_name() {
            log::debug!("Released slider {}", name);
        }
        self.drag.release();
    }

    /// Pointer motion. Only x matters while a slider is captured.
    pub fn pointer_moved(&mut self, x: f64) {
        self.drag.drag(self.scene.sliders_mut(), x);
    }

    /// World pass followed by the scene's control panel.
    pub fn render(&self) -> Frame {
        let mut painter = Painter::new();
        self.scene.compose(&mut painter);

        let world = Pass {
            viewport: self.scene.world_viewport(),
            projection: WORLD_PROJECTION,
            view: self.camera.view_matrix(),
            depth_test: true,
            ops: painter.finish(),
        };

        Frame {
            clear_color: self.scene.clear_color(),
            passes: vec![world, self.scene.overlay()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::SceneKind;

    #[test]
    fn test_quit_stops_session() {
        let mut session = Session::new(SceneKind::Owl.build(), Steering::default());
        assert!(session.handle(InputEvent::PointerUp));
        assert!(!session.handle(InputEvent::Quit));
    }

    #[test]
    fn test_render_has_world_then_panel() {
        let session = Session::new(SceneKind::House.build(), Steering::default());
        let frame = session.render();
        assert_eq!(frame.passes.len(), 2);
        assert!(frame.passes[0].depth_test);
        assert!(!frame.passes[1].depth_test);
    }

    #[test]
    fn test_motion_without_capture_changes_nothing() {
        let mut session = Session::new(SceneKind::Owl.build(), Steering::default());
        session.pointer_moved(400.0);
        assert_eq!(session.knob_value(0), Some(0.0));
    }
}
