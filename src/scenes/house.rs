use std::f64::consts::PI;

use glam::{DMat4, DVec2, DVec3};

use crate::camera::CameraPose;
use crate::draw::{Painter, Pass, Projection, Viewport};
use crate::math::color::{gray, saturate};
use crate::math::Rgb;
use crate::slider::{Knob, Slider, SliderLayout};
use crate::texture::TextureSlot;
use crate::traits::SceneProvider;

pub const GROUND_SIZE: usize = 100;

const GROUND_COLOR: Rgb = [0.18, 0.42, 0.26];
const WALL_COLOR: Rgb = [1.0, 0.75, 0.45];
const FENCE_COLOR: Rgb = [0.55, 0.47, 0.40];

const HOUSE_RADIUS: f64 = 17.0;
const FLOOR_HEIGHT: f64 = 17.0;
const ROOF_HEIGHT: f64 = 7.0;
const POST_RADIUS: f64 = 0.7;
const POST_SIDES: u32 = 7;

pub const MAX_FLOORS: u32 = 5;
pub const MAX_WINDOW_REPEAT: u32 = 5;

/// Knob indices, in panel order top to bottom.
pub const ROOF: usize = 0;
pub const FLOORS: usize = 1;
pub const WINDOWS: usize = 2;

const PANEL: Viewport = Viewport::new(450.0, 0.0, 150.0, 600.0);
const SLIDER_SPACING: f64 = 200.0;

/// Square heightmap sampled at integer grid points.
#[derive(Debug, Clone, PartialEq)]
pub struct Terrain {
    size: usize,
    heights: Vec<f64>,
}

impl Terrain {
    pub fn flat(size: usize) -> Self {
        Self {
            size,
            heights: vec![0.0; size * size],
        }
    }

    pub fn height(&self, row: usize, col: usize) -> f64 {
        self.heights[row * self.size + col]
    }

    pub fn set_height(&mut self, row: usize, col: usize, height: f64) {
        self.heights[row * self.size + col] = height;
    }

    /// One quad per interior cell, centred on the origin.
    pub fn cell_quads(&self) -> Vec<[DVec3; 4]> {
        let half = (self.size / 2) as f64;
        let mut quads = Vec::with_capacity(self.size.saturating_sub(1).pow(2));
        for i in 1..self.size {
            for j in 1..self.size {
                let (x, z) = (j as f64 - half, i as f64 - half);
                quads.push([
                    DVec3::new(x, self.height(i, j), z),
                    DVec3::new(x, self.height(i - 1, j), z - 1.0),
                    DVec3::new(x - 1.0, self.height(i - 1, j - 1), z - 1.0),
                    DVec3::new(x - 1.0, self.height(i, j - 1), z),
                ]);
            }
        }
        quads
    }
}

/// Storeys for a floors knob value, always within `1..=MAX_FLOORS`.
pub fn floor_count(knob: f64) -> u32 {
    let stepped = (knob.trunc() as i64).saturating_add(61) / 30 + 1;
    stepped.clamp(1, MAX_FLOORS as i64) as u32
}

/// Texture wraps per wall face for a windows knob value, within `1..=MAX_WINDOW_REPEAT`.
pub fn window_repeat(knob: f64) -> u32 {
    let stepped = (knob.trunc() as i64).saturating_add(60) / 30 + 1;
    stepped.clamp(1, MAX_WINDOW_REPEAT as i64) as u32
}

/// Roof colour for a roof knob value. Every channel is driven by the same
/// normalised offset `t = (knob + 60) / 120`.
pub fn roof_color(knob: f64) -> Rgb {
    let t = (knob + 60.0) / 120.0;
    saturate([t as f32, t.cos() as f32, t.sin().abs() as f32])
}

/// Procedural house on a lawn, behind a fence, at the end of a road.
#[derive(Debug, Clone)]
pub struct HouseScene {
    terrain: Terrain,
    sliders: Vec<Slider>,
}

impl HouseScene {
    pub fn new() -> Self {
        let sliders = vec![
            panel_slider(0, Knob::new("ROOF", 0.5).with_indicator_bias(0.5), (408.0, 431.0), 38.0),
            panel_slider(1, Knob::new("FLOORS", 2.0).with_indicator_bias(2.0), (218.0, 233.0), 30.0),
            panel_slider(2, Knob::new("WINDOWS", 2.0).with_indicator_bias(4.0), (18.0, 36.0), 15.0),
        ];
        Self {
            terrain: Terrain::flat(GROUND_SIZE),
            sliders,
        }
    }

    pub fn terrain_mut(&mut self) -> &mut Terrain {
        &mut self.terrain
    }

    pub fn knob(&self, index: usize) -> f64 {
        self.sliders[index].value()
    }

    pub fn floors(&self) -> u32 {
        floor_count(self.knob(FLOORS))
    }

    pub fn draw_ground(&self, painter: &mut Painter) {
        painter.set_color(GROUND_COLOR);
        for quad in self.terrain.cell_quads() {
            painter.polygon(&quad);
        }
    }

    pub fn draw_house(&self, painter: &mut Painter) {
        let floors = self.floors();
        let repeat = window_repeat(self.knob(WINDOWS)) as f64;

        painter.bind_texture(TextureSlot::Brick);
        painter.set_color(WALL_COLOR);
        for storey in 0..floors {
            painter.scoped(|p| {
                p.scale(1.0, FLOOR_HEIGHT, 1.0);
                p.rotate_y(45.0);
                p.translate(0.0, storey as f64, 0.0);
                p.textured_cylinder(4, HOUSE_RADIUS, HOUSE_RADIUS, repeat);
            });
        }
        painter.unbind_texture();

        painter.set_color(roof_color(self.knob(ROOF)));
        painter.scoped(|p| {
            p.rotate_y(45.0);
            p.translate(0.0, FLOOR_HEIGHT * floors as f64, 0.0);
            p.scale(1.0, ROOF_HEIGHT, 1.0);
            p.cylinder(4, 0.0, HOUSE_RADIUS);
        });
    }

    pub fn draw_fence(&self, painter: &mut Painter) {
        painter.set_color(FENCE_COLOR);

        painter.scoped(|p| {
            p.translate(0.0, 2.0, 0.0);

            // Front, either side of the gate
            p.scoped(|p| {
                p.scale(20.0, 0.5, 10.0);
                p.translate(-1.25, 1.0, 2.0);
                rail_pair(p);
            });
            p.scoped(|p| {
                p.scale(20.0, 0.5, 10.0);
                p.translate(0.25, 1.0, 2.0);
                rail_pair(p);
            });

            // Sides
            for z in [5.0, -45.0] {
                p.scoped(|p| {
                    p.rotate_y(90.0);
                    p.translate(5.0, 0.0, z);
                    long_rail_pair(p);
                });
            }

            // Back
            p.scoped(|p| {
                p.translate(0.0, 0.0, -50.0);
                long_rail_pair(p);
            });
        });

        let posts = [
            (-5.0, 20.0, 10.0),
            (5.0, 20.0, 10.0),
            (25.0, 18.0, 7.0),
            (-25.0, 18.0, 7.0),
            (-25.0, -28.0, 7.0),
            (25.0, -30.0, 7.0),
        ];
        for (x, z, height) in posts {
            painter.scoped(|p| {
                p.translate(x, 0.0, z);
                p.scale(1.0, height, 1.0);
                p.cylinder(POST_SIDES, POST_RADIUS, POST_RADIUS);
            });
        }
    }

    /// Textured strip from the fence gate out to the edge of the ground.
    pub fn draw_road(&self, painter: &mut Painter) {
        let half = (GROUND_SIZE / 2) as f64;
        let texcoords = [
            DVec2::new(1.0, 0.0),
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(1.0, 1.0),
        ];

        painter.bind_texture(TextureSlot::Road);
        for i in (GROUND_SIZE / 2 + 11)..GROUND_SIZE {
            let z = i as f64 - half;
            painter.textured_polygon(
                &[
                    DVec3::new(-4.0, 0.1, z - 1.0),
                    DVec3::new(-4.0, 0.1, z),
                    DVec3::new(4.0, 0.1, z),
                    DVec3::new(4.0, 0.1, z - 1.0),
                ],
                &texcoords,
            );
        }
        painter.unbind_texture();
    }
}

impl Default for HouseScene {
    fn default() -> Self {
        Self::new()
    }
}

/// Unit quad in the XY plane.
fn fence_wall(painter: &mut Painter) {
    painter.polygon(&[
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
    ]);
}

/// Lower rail plus an upper rail two units above it.
fn rail_pair(painter: &mut Painter) {
    fence_wall(painter);
    painter.scoped(|p| {
        p.translate(0.0, 2.0, 0.0);
        fence_wall(p);
    });
}

fn long_rail_pair(painter: &mut Painter) {
    painter.scoped(|p| {
        p.scale(50.0, 0.5, 10.0);
        p.translate(-0.5, 1.0, 2.0);
        rail_pair(p);
    });
}

fn panel_slider(row: usize, knob: Knob, grab_band: (f64, f64), label_x: f64) -> Slider {
    Slider::new(
        knob,
        SliderLayout {
            track_center: PANEL.x + 75.0,
            drag_limits: (465.0, 585.0),
            grab_band,
            grab_half_width: 7.0,
            offset: DVec2::new(0.0, -SLIDER_SPACING * row as f64),
            background: Some(([DVec2::new(0.0, 400.0), DVec2::new(150.0, 450.0)], gray(0.4))),
            track: [DVec2::new(15.0, 425.0), DVec2::new(135.0, 425.0)],
            track_width: 2.0,
            indicator: vec![
                DVec2::new(75.0, 437.0),
                DVec2::new(81.0, 428.0),
                DVec2::new(81.0, 417.0),
                DVec2::new(69.0, 417.0),
                DVec2::new(69.0, 428.0),
            ],
            label_at: Some(DVec2::new(label_x, 500.0)),
        },
    )
}

impl SceneProvider for HouseScene {
    fn name(&self) -> &str {
        "house"
    }

    fn start_pose(&self) -> CameraPose {
        CameraPose {
            position: DVec3::new(2.0, 25.0, 70.0),
            yaw: PI,
            pitch: 0.0,
        }
    }

    fn clear_color(&self) -> Rgb {
        [0.8, 0.9, 1.0]
    }

    fn world_viewport(&self) -> Viewport {
        Viewport::new(0.0, 0.0, 600.0, 600.0)
    }

    fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    fn sliders_mut(&mut self) -> &mut [Slider] {
        &mut self.sliders
    }

    fn compose(&self, painter: &mut Painter) {
        self.draw_ground(painter);
        self.draw_house(painter);
        self.draw_fence(painter);
        self.draw_road(painter);
    }

    fn overlay(&self) -> Pass {
        let mut painter = Painter::new();
        painter.set_color(gray(0.6));
        painter.polygon_2d(&[
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, PANEL.height),
            DVec2::new(PANEL.width, PANEL.height),
            DVec2::new(PANEL.width, 0.0),
        ]);
        for slider in &self.sliders {
            slider.draw(&mut painter);
        }

        Pass {
            viewport: PANEL,
            projection: Projection::Ortho {
                left: 0.0,
                right: PANEL.width,
                bottom: 0.0,
                top: PANEL.height,
            },
            view: DMat4::IDENTITY,
            depth_test: false,
            ops: painter.finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawOp;

    #[test]
    fn test_floor_count_bounds() {
        assert_eq!(floor_count(-60.0), 1);
        assert_eq!(floor_count(2.0), 3);
        assert_eq!(floor_count(60.0), 5);
        assert_eq!(floor_count(-1000.0), 1);
        assert_eq!(floor_count(1000.0), 5);
    }

    #[test]
    fn test_window_repeat_bounds() {
        assert_eq!(window_repeat(-60.0), 1);
        assert_eq!(window_repeat(2.0), 3);
        assert_eq!(window_repeat(60.0), 5);
    }

    #[test]
    fn test_defaults() {
        let scene = HouseScene::new();
        assert_eq!(scene.knob(ROOF), 0.5);
        assert_eq!(scene.knob(FLOORS), 2.0);
        assert_eq!(scene.knob(WINDOWS), 2.0);
        assert_eq!(scene.floors(), 3);
    }

    #[test]
    fn test_road_is_textured() {
        let scene = HouseScene::new();
        let mut painter = Painter::new();
        scene.draw_road(&mut painter);
        assert!(painter.ops().iter().all(|op| matches!(
            op,
            DrawOp::Polygon {
                texture: Some(TextureSlot::Road),
                ..
            }
        )));
    }

    #[test]
    fn test_roof_sits_on_top_floor() {
        let scene = HouseScene::new();
        let mut painter = Painter::new();
        scene.draw_house(&mut painter);
        let apex = painter
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Polygon { vertices, texture: None, .. } => Some(vertices[0].y),
                _ => None,
            })
            .fold(f64::NEG_INFINITY, f64::max);
        assert!((apex - (17.0 * 3.0 + 7.0)).abs() < 1e-9);
    }
}
