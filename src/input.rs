use glam::DVec2;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::camera::SteerCommand;
use crate::slider::Slider;

/// Toolkit-neutral input, with pointer coordinates in window pixels
/// measured from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Steer(SteerCommand),
    PointerDown { x: f64, y: f64 },
    PointerUp,
    PointerMoved { x: f64, y: f64 },
    Quit,
}

/// Which slider, if any, owns the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragCapture {
    target: Option<usize>,
}

impl DragCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// Capture the first slider whose grab region contains `point`
    /// (bottom-left origin). A miss leaves the current capture alone.
    pub fn press(&mut self, sliders: &[Slider], point: DVec2) -> Option<usize> {
        if let Some(hit) = sliders.iter().position(|s| s.hit(point)) {
            self.target = Some(hit);
        }
        self.target
    }

    /// Forward a drag to the captured slider. Returns whether a value changed.
    pub fn drag(&self, sliders: &mut [Slider], x: f64) -> bool {
        match self.target.and_then(|i| sliders.get_mut(i)) {
            Some(slider) => slider.drag_to(x),
            None => false,
        }
    }

    pub fn release(&mut self) {
        self.target = None;
    }
}

/// Adapter that turns winit window events into [`InputEvent`]s.
///
/// Positions are converted to logical pixels and snapped to whole pixels
/// so slider values stay integral.
#[derive(Debug, Clone, Default)]
pub struct WinitInput {
    cursor: Option<(f64, f64)>,
    scale_factor: f64,
}

impl WinitInput {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            cursor: None,
            scale_factor,
        }
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::Quit),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return None;
                }
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::Escape) => Some(InputEvent::Quit),
                    PhysicalKey::Code(code) => Self::keycode_to_command(code).map(InputEvent::Steer),
                    _ => None,
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    let (x, y) = self.cursor?;
                    Some(InputEvent::PointerDown { x, y })
                }
                ElementState::Released => Some(InputEvent::PointerUp),
            },
            WindowEvent::CursorMoved { position, .. } => {
                let scale = if self.scale_factor > 0.0 { self.scale_factor } else { 1.0 };
                let x = (position.x / scale).floor();
                let y = (position.y / scale).floor();
                self.cursor = Some((x, y));
                Some(InputEvent::PointerMoved { x, y })
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
                None
            }
            _ => None,
        }
    }

    /// Arrow keys steer, page keys pitch.
    pub fn keycode_to_command(code: KeyCode) -> Option<SteerCommand> {
        match code {
            KeyCode::ArrowLeft => Some(SteerCommand::TurnLeft),
            KeyCode::ArrowRight => Some(SteerCommand::TurnRight),
            KeyCode::ArrowUp => Some(SteerCommand::Accelerate),
            KeyCode::ArrowDown => Some(SteerCommand::Decelerate),
            KeyCode::PageUp => Some(SteerCommand::PitchUp),
            KeyCode::PageDown => Some(SteerCommand::PitchDown),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_steering() {
        assert_eq!(WinitInput::keycode_to_command(KeyCode::ArrowLeft), Some(SteerCommand::TurnLeft));
        assert_eq!(WinitInput::keycode_to_command(KeyCode::ArrowRight), Some(SteerCommand::TurnRight));
        assert_eq!(WinitInput::keycode_to_command(KeyCode::ArrowUp), Some(SteerCommand::Accelerate));
        assert_eq!(WinitInput::keycode_to_command(KeyCode::ArrowDown), Some(SteerCommand::Decelerate));
        assert_eq!(WinitInput::keycode_to_command(KeyCode::PageUp), Some(SteerCommand::PitchUp));
        assert_eq!(WinitInput::keycode_to_command(KeyCode::PageDown), Some(SteerCommand::PitchDown));
    }

    #[test]
    fn test_letter_keys_are_ignored() {
        assert_eq!(WinitInput::keycode_to_command(KeyCode::KeyW), None);
        assert_eq!(WinitInput::keycode_to_command(KeyCode::Space), None);
    }

    #[test]
    fn test_new_adapter_has_no_cursor() {
        let input = WinitInput::new(2.0);
        assert_eq!(input.cursor(), None);
    }

    #[test]
    fn test_capture_starts_empty() {
        let capture = DragCapture::new();
        assert_eq!(capture.target(), None);
    }
}
