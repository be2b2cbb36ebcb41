//! Revolved-polygon solids.
//!
//! A frustum is a ring of `sides` planar quads between a bottom circle at
//! y = 0 and a top circle at y = 1. A sphere is a stack of frustum bands
//! between latitudes -π/2 and π/2. Both are pure functions of their
//! arguments; placement comes from the caller's transform.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::{DVec2, DVec3};

use crate::draw::Painter;

/// Planar quad in local space, wound top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub vertices: [DVec3; 4],
    pub texcoords: [DVec2; 4],
}

/// One latitude band of a sphere, expressed as a frustum placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereBand {
    /// Height of the band's bottom ring
    pub base: f64,
    /// Vertical extent of the band
    pub height: f64,
    pub top_radius: f64,
    pub bottom_radius: f64,
}

/// Quads of a frustum with `sides` faces. `texture_repeat` is how many
/// times the texture wraps across each face; coordinates keep increasing
/// around the ring so a repeating sampler tiles seamlessly.
///
/// Zero sides yields no geometry.
pub fn frustum_quads(sides: u32, top_radius: f64, bottom_radius: f64, texture_repeat: f64) -> Vec<Quad> {
    if sides == 0 {
        return Vec::new();
    }
    let step = TAU / sides as f64;

    (0..sides)
        .map(|k| {
            let a = k as f64 * step;
            let b = a + step;
            let s0 = k as f64 * texture_repeat;
            let s1 = s0 + texture_repeat;
            Quad {
                vertices: [
                    DVec3::new(top_radius * a.sin(), 1.0, top_radius * a.cos()),
                    DVec3::new(top_radius * b.sin(), 1.0, top_radius * b.cos()),
                    DVec3::new(bottom_radius * b.sin(), 0.0, bottom_radius * b.cos()),
                    DVec3::new(bottom_radius * a.sin(), 0.0, bottom_radius * a.cos()),
                ],
                texcoords: [
                    DVec2::new(s0, 0.0),
                    DVec2::new(s1, 0.0),
                    DVec2::new(s1, 1.0),
                    DVec2::new(s0, 1.0),
                ],
            }
        })
        .collect()
}

/// Latitude bands of a unit sphere, south pole first.
pub fn sphere_bands(slices: u32) -> Vec<SphereBand> {
    if slices == 0 {
        return Vec::new();
    }
    let delta = PI / slices as f64;

    (0..slices)
        .map(|k| {
            let phi = -FRAC_PI_2 + k as f64 * delta;
            let next = phi + delta;
            SphereBand {
                base: phi.sin(),
                height: next.sin() - phi.sin(),
                top_radius: next.cos().max(0.0),
                bottom_radius: phi.cos().max(0.0),
            }
        })
        .collect()
}

impl Painter {
    /// Frustum with unit texture repeat.
    pub fn cylinder(&mut self, sides: u32, top_radius: f64, bottom_radius: f64) {
        self.textured_cylinder(sides, top_radius, bottom_radius, 1.0);
    }

    pub fn textured_cylinder(&mut self, sides: u32, top_radius: f64, bottom_radius: f64, texture_repeat: f64) {
        for quad in frustum_quads(sides, top_radius, bottom_radius, texture_repeat) {
            self.textured_polygon(&quad.vertices, &quad.texcoords);
        }
    }

    /// Unit sphere centred on the origin.
    pub fn sphere(&mut self, sides: u32, slices: u32) {
        for band in sphere_bands(slices) {
            self.scoped(|p| {
                p.translate(0.0, band.base, 0.0);
                p.scale(1.0, band.height, 1.0);
                p.cylinder(sides, band.top_radius, band.bottom_radius);
            });
        }
    }
}
