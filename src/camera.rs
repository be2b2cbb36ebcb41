use glam::{DMat4, DVec3};

use crate::traits::CameraController;

/// Key-driven increments applied to the camera's rate state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    pub angular_step: f64,
    pub speed_step: f64,
    pub pitch_step: f64,
    /// Magnitude cap for `speed`; `None` leaves it unbounded
    pub max_speed: Option<f64>,
    /// Magnitude cap for `angular_speed`; `None` leaves it unbounded
    pub max_angular_speed: Option<f64>,
}

impl Default for Steering {
    fn default() -> Self {
        Self {
            angular_step: 0.0001,
            speed_step: 0.001,
            pitch_step: 0.01,
            max_speed: None,
            max_angular_speed: None,
        }
    }
}

/// Steering commands, one per directional or page key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SteerCommand {
    TurnLeft,
    TurnRight,
    Accelerate,
    Decelerate,
    PitchUp,
    PitchDown,
}

/// Starting placement for a scene's camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: DVec3,
    pub yaw: f64,
    pub pitch: f64,
}

/// First-person fly camera integrated once per tick.
///
/// Speeds are per tick: one tick of `update(1.0)` moves `speed` units
/// along the current direction and turns by `angular_speed` radians.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyCamera {
    pub position: DVec3,
    pub yaw: f64,
    pub pitch: f64,
    pub speed: f64,
    pub angular_speed: f64,
    steering: Steering,
}

impl FlyCamera {
    pub fn new(pose: CameraPose, steering: Steering) -> Self {
        Self {
            position: pose.position,
            yaw: pose.yaw,
            pitch: pose.pitch,
            speed: 0.0,
            angular_speed: 0.0,
            steering,
        }
    }

    /// Look direction for the given angles. The horizontal part is unit
    /// length; pitch only adds a vertical component.
    pub fn direction_for(yaw: f64, pitch: f64) -> DVec3 {
        DVec3::new(yaw.sin(), pitch.sin(), yaw.cos())
    }

    /// Current look direction, always derived from `yaw` and `pitch`.
    pub fn direction(&self) -> DVec3 {
        Self::direction_for(self.yaw, self.pitch)
    }

    /// Euler step over `ticks` ticks: turn, then advance along the new direction.
    pub fn step(&mut self, ticks: f64) {
        self.yaw += self.angular_speed * ticks;
        self.position += self.direction() * (self.speed * ticks);
    }

    pub fn steer(&mut self, command: SteerCommand) {
        let s = self.steering;
        match command {
            SteerCommand::TurnLeft => self.angular_speed += s.angular_step,
            SteerCommand::TurnRight => self.angular_speed -= s.angular_step,
            SteerCommand::Accelerate => self.speed += s.speed_step,
            SteerCommand::Decelerate => self.speed -= s.speed_step,
            SteerCommand::PitchUp => self.pitch += s.pitch_step,
            SteerCommand::PitchDown => self.pitch -= s.pitch_step,
        }
        if let Some(cap) = s.max_speed {
            self.speed = self.speed.clamp(-cap, cap);
        }
        if let Some(cap) = s.max_angular_speed {
            self.angular_speed = self.angular_speed.clamp(-cap, cap);
        }
    }
}

impl CameraController for FlyCamera {
    fn update(&mut self, ticks: f64) {
        self.step(ticks);
    }

    fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, self.position + self.direction(), DVec3::Y)
    }

    fn position(&self) -> DVec3 {
        self.position
    }

    fn forward(&self) -> DVec3 {
        self.direction()
    }
}
