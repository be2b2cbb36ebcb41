use std::f64::consts::PI;

use glam::{DMat4, DVec2, DVec3};

use crate::camera::CameraPose;
use crate::draw::{Painter, Pass, Projection, Viewport};
use crate::math::color::{BLACK, WHITE};
use crate::math::Rgb;
use crate::slider::{Knob, Slider, SliderLayout};
use crate::traits::SceneProvider;

const WINDOW_WIDTH: f64 = 600.0;
const WINDOW_HEIGHT: f64 = 600.0;
const SLIDER_HEIGHT: f64 = 120.0;

const BAR_COLOR: Rgb = [0.2, 0.2, 0.0];
const FEATHER: Rgb = [0.4, 0.29, 0.0];
const PLUMAGE: Rgb = [0.69, 0.49, 0.0];
const PANEL_COLOR: Rgb = [0.62, 0.611, 0.015];

const PUPIL_ORBIT: f64 = 1.5;
/// Radians of pupil travel per unit of eye offset
const PUPIL_RATE: f64 = 0.01;

pub const EYES: usize = 0;

/// Pupil displacement for an eye offset: a point on a small circle.
pub fn pupil_offset(eye_offset: f64) -> DVec2 {
    let angle = eye_offset * PUPIL_RATE;
    DVec2::new(PUPIL_ORBIT * angle.cos(), PUPIL_ORBIT * angle.sin())
}

/// Owl on a perch with a slider that swings its pupils.
#[derive(Debug, Clone)]
pub struct OwlScene {
    sliders: Vec<Slider>,
}

impl OwlScene {
    pub fn new() -> Self {
        let center = WINDOW_WIDTH / 2.0;
        let track_y = SLIDER_HEIGHT / 2.0;
        let eyes = Slider::new(
            Knob::new("EYES", 0.0),
            SliderLayout {
                track_center: center,
                drag_limits: (40.0, WINDOW_WIDTH - 40.0),
                grab_band: (50.0, 75.0),
                grab_half_width: 10.0,
                offset: DVec2::ZERO,
                background: None,
                track: [DVec2::new(50.0, track_y), DVec2::new(WINDOW_WIDTH - 50.0, track_y)],
                track_width: 2.0,
                indicator: vec![
                    DVec2::new(center, 76.0),
                    DVec2::new(center + 10.0, 65.0),
                    DVec2::new(center + 10.0, 50.0),
                    DVec2::new(center - 10.0, 50.0),
                    DVec2::new(center - 10.0, 65.0),
                ],
                label_at: None,
            },
        );
        Self { sliders: vec![eyes] }
    }

    pub fn eye_offset(&self) -> f64 {
        self.sliders[EYES].value()
    }

    pub fn draw_perch(&self, painter: &mut Painter) {
        painter.set_color(BAR_COLOR);
        painter.scoped(|p| {
            p.translate(0.0, 0.0, -10.0);
            p.rotate_z(90.0);
            p.scale(1.0, 70.0, 1.0);
            p.cylinder(30, 1.0, 1.0);
        });
    }

    pub fn draw_body(&self, painter: &mut Painter) {
        painter.set_color(FEATHER);
        painter.scoped(|p| {
            p.translate(-35.0, 14.0, -5.0);
            p.scale(13.0, 15.0, 20.0);
            p.sphere(20, 20);
        });

        painter.set_color(PLUMAGE);
        painter.scoped(|p| {
            p.translate(-35.0, 14.0, 0.0);
            p.rotate_z(90.0);
            p.scale(11.0, 20.0, 10.0);
            p.sphere(20, 20);
        });

        // Nose
        painter.scoped(|p| {
            p.translate(-35.0, 17.0, 10.0);
            p.scale(2.0, 4.0, 10.0);
            p.sphere(20, 20);
        });

        // Talons: three flattened slivers per foot
        for foot in [0.0, 10.0] {
            painter.scoped(|p| {
                p.translate(foot, 0.0, 0.0);
                for x in [-42.0, -40.0, -38.0] {
                    p.scoped(|p| {
                        p.translate(x, 0.0, -5.0);
                        p.scale(0.8, 4.0, 0.0);
                        p.sphere(20, 20);
                    });
                }
            });
        }

        painter.set_color(FEATHER);
        painter.scoped(|p| {
            p.translate(-35.0, 13.2, 6.9);
            p.scale(1.1, 10.0, 1.0);
            p.rotate_y(45.0);
            p.cylinder(4, 13.0, 0.0);
        });
    }

    pub fn draw_eyes(&self, painter: &mut Painter) {
        painter.set_color(WHITE);
        for (shift, resolution) in [(0.0, 17), (8.0, 15)] {
            painter.scoped(|p| {
                p.translate(shift, 0.0, 0.0);
                p.translate(-39.0, 20.0, 11.5);
                p.scale(4.0, 4.0, 3.0);
                p.sphere(resolution, resolution);
            });
        }

        let pupil = pupil_offset(self.eye_offset());
        painter.set_color(BLACK);
        painter.scoped(|p| {
            p.translate(pupil.x, pupil.y, 0.0);
            for shift in [0.0, 8.5] {
                p.scoped(|p| {
                    p.translate(shift, 0.0, 0.0);
                    p.translate(-39.3, 19.0, 15.0);
                    p.scale(0.7, 0.7, 0.7);
                    p.sphere(20, 20);
                });
            }
        });
    }
}

impl Default for OwlScene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneProvider for OwlScene {
    fn name(&self) -> &str {
        "owl"
    }

    fn start_pose(&self) -> CameraPose {
        CameraPose {
            position: DVec3::new(-35.0, 10.0, 50.0),
            yaw: PI + 1.0,
            pitch: 0.0,
        }
    }

    fn clear_color(&self) -> Rgb {
        [0.6, 0.6, 0.6]
    }

    fn world_viewport(&self) -> Viewport {
        Viewport::new(0.0, SLIDER_HEIGHT, WINDOW_WIDTH, WINDOW_HEIGHT - SLIDER_HEIGHT)
    }

    fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    fn sliders_mut(&mut self) -> &mut [Slider] {
        &mut self.sliders
    }

    fn compose(&self, painter: &mut Painter) {
        self.draw_perch(painter);
        self.draw_body(painter);
        self.draw_eyes(painter);
    }

    fn overlay(&self) -> Pass {
        let mut painter = Painter::new();
        painter.set_color(PANEL_COLOR);
        painter.polygon_2d(&[
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, SLIDER_HEIGHT),
            DVec2::new(WINDOW_WIDTH, SLIDER_HEIGHT),
            DVec2::new(WINDOW_WIDTH, 0.0),
        ]);
        for slider in &self.sliders {
            slider.draw(&mut painter);
        }

        Pass {
            viewport: Viewport::new(0.0, 0.0, WINDOW_WIDTH, SLIDER_HEIGHT),
            projection: Projection::Ortho {
                left: 0.0,
                right: WINDOW_WIDTH,
                bottom: 0.0,
                top: SLIDER_HEIGHT,
            },
            view: DMat4::IDENTITY,
            depth_test: false,
            ops: painter.finish(),
        }
    }
}
