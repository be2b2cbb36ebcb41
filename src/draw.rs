use glam::{DMat4, DVec2, DVec3, DVec4};

use crate::math::color::{Rgb, WHITE};
use crate::math::TransformStack;
use crate::texture::TextureSlot;

/// Recorded drawing operation. Vertices are stored after the model
/// transform, i.e. in the coordinate space of the owning [`Pass`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Filled convex polygon
    Polygon {
        vertices: Vec<DVec3>,
        texcoords: Option<Vec<DVec2>>,
        color: Rgb,
        texture: Option<TextureSlot>,
    },

    /// Independent line segments of the given width
    Lines {
        segments: Vec<[DVec3; 2]>,
        color: Rgb,
        width: f64,
    },

    /// Bitmap label anchored at its bottom-left corner
    Text {
        position: DVec3,
        text: String,
        color: Rgb,
    },
}

/// Rectangular window region in pixels, origin at the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective frustum with edges on the near plane
    Frustum {
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    },
    /// Orthographic box with depth fixed to -1..1
    Ortho {
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
    },
}

impl Projection {
    /// Clip-space matrix with depth mapped to `0..1`.
    pub fn matrix(&self) -> DMat4 {
        match *self {
            Projection::Frustum {
                left,
                right,
                bottom,
                top,
                near,
                far,
            } => {
                let width = right - left;
                let height = top - bottom;
                let depth = near - far;
                DMat4::from_cols(
                    DVec4::new(2.0 * near / width, 0.0, 0.0, 0.0),
                    DVec4::new(0.0, 2.0 * near / height, 0.0, 0.0),
                    DVec4::new(
                        (right + left) / width,
                        (top + bottom) / height,
                        far / depth,
                        -1.0,
                    ),
                    DVec4::new(0.0, 0.0, near * far / depth, 0.0),
                )
            }
            Projection::Ortho {
                left,
                right,
                bottom,
                top,
            } => DMat4::orthographic_rh(left, right, bottom, top, -1.0, 1.0),
        }
    }
}

/// One viewport worth of drawing.
#[derive(Debug, Clone)]
pub struct Pass {
    pub viewport: Viewport,
    pub projection: Projection,
    pub view: DMat4,
    pub depth_test: bool,
    pub ops: Vec<DrawOp>,
}

impl Pass {
    pub fn clip_matrix(&self) -> DMat4 {
        self.projection.matrix() * self.view
    }

    /// Map a pass-space point to window pixels (bottom-left origin).
    pub fn to_window(&self, point: DVec3) -> DVec2 {
        let clip = self.clip_matrix() * point.extend(1.0);
        let ndc = if clip.w.abs() > f64::EPSILON {
            clip.truncate() / clip.w
        } else {
            clip.truncate()
        };
        DVec2::new(
            self.viewport.x + (ndc.x + 1.0) * 0.5 * self.viewport.width,
            self.viewport.y + (ndc.y + 1.0) * 0.5 * self.viewport.height,
        )
    }
}

/// Everything needed to present one frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub clear_color: Rgb,
    pub passes: Vec<Pass>,
}

/// Vertex after triangulation, still in pass space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatVertex {
    pub position: DVec3,
    pub texcoord: DVec2,
    pub color: Rgb,
    pub texture: Option<TextureSlot>,
}

impl DrawOp {
    /// Expand into a triangle list. Polygons become fans, line segments
    /// become quads in the XY plane, text produces nothing.
    pub fn triangles(&self) -> Vec<FlatVertex> {
        match self {
            DrawOp::Polygon {
                vertices,
                texcoords,
                color,
                texture,
            } => {
                if vertices.len() < 3 {
                    return Vec::new();
                }
                let corner = |i: usize| FlatVertex {
                    position: vertices[i],
                    texcoord: texcoords
                        .as_ref()
                        .and_then(|uv| uv.get(i).copied())
                        .unwrap_or(DVec2::ZERO),
                    color: *color,
                    texture: *texture,
                };
                (1..vertices.len() - 1)
                    .flat_map(|i| [corner(0), corner(i), corner(i + 1)])
                    .collect()
            }
            DrawOp::Lines {
                segments,
                color,
                width,
            } => segments
                .iter()
                .filter_map(|[a, b]| {
                    let along = (*b - *a).truncate();
                    if along.length_squared() <= f64::EPSILON {
                        return None;
                    }
                    let half = along.perp().normalize() * (width * 0.5);
                    let offset = half.extend(0.0);
                    let corner = |p: DVec3| FlatVertex {
                        position: p,
                        texcoord: DVec2::ZERO,
                        color: *color,
                        texture: None,
                    };
                    Some([
                        corner(*a - offset),
                        corner(*b - offset),
                        corner(*b + offset),
                        corner(*a - offset),
                        corner(*b + offset),
                        corner(*a + offset),
                    ])
                })
                .flatten()
                .collect(),
            DrawOp::Text { .. } => Vec::new(),
        }
    }
}

/// Immediate-mode recorder: current colour, bound texture, line width and
/// model transform, plus the list of operations emitted so far.
#[derive(Debug, Clone)]
pub struct Painter {
    transform: TransformStack,
    color: Rgb,
    texture: Option<TextureSlot>,
    line_width: f64,
    ops: Vec<DrawOp>,
}

impl Painter {
    pub fn new() -> Self {
        Self {
            transform: TransformStack::new(),
            color: WHITE,
            texture: None,
            line_width: 1.0,
            ops: Vec::new(),
        }
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    pub fn bind_texture(&mut self, slot: TextureSlot) {
        self.texture = Some(slot);
    }

    pub fn unbind_texture(&mut self) {
        self.texture = None;
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    pub fn translate(&mut self, x: f64, y: f64, z: f64) {
        self.transform.translate(x, y, z);
    }

    pub fn scale(&mut self, x: f64, y: f64, z: f64) {
        self.transform.scale(x, y, z);
    }

    pub fn rotate_x(&mut self, degrees: f64) {
        self.transform.rotate_x(degrees);
    }

    pub fn rotate_y(&mut self, degrees: f64) {
        self.transform.rotate_y(degrees);
    }

    pub fn rotate_z(&mut self, degrees: f64) {
        self.transform.rotate_z(degrees);
    }

    pub fn transform_depth(&self) -> usize {
        self.transform.depth()
    }

    /// Push the model transform, run `f`, pop it again.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.transform.push();
        let result = f(self);
        self.transform.pop();
        result
    }

    /// Untextured polygon in the current colour.
    pub fn polygon(&mut self, vertices: &[DVec3]) {
        let vertices = vertices.iter().map(|v| self.transform.apply(*v)).collect();
        self.ops.push(DrawOp::Polygon {
            vertices,
            texcoords: None,
            color: self.color,
            texture: self.texture,
        });
    }

    /// Polygon with one texture coordinate per vertex.
    pub fn textured_polygon(&mut self, vertices: &[DVec3], texcoords: &[DVec2]) {
        let transformed = vertices.iter().map(|v| self.transform.apply(*v)).collect();
        self.ops.push(DrawOp::Polygon {
            vertices: transformed,
            texcoords: Some(texcoords.to_vec()),
            color: self.color,
            texture: self.texture,
        });
    }

    /// 2D polygon in the z = 0 plane.
    pub fn polygon_2d(&mut self, vertices: &[DVec2]) {
        let lifted: Vec<DVec3> = vertices.iter().map(|v| v.extend(0.0)).collect();
        self.polygon(&lifted);
    }

    pub fn lines_2d(&mut self, segments: &[[DVec2; 2]]) {
        let segments = segments
            .iter()
            .map(|[a, b]| {
                [
                    self.transform.apply(a.extend(0.0)),
                    self.transform.apply(b.extend(0.0)),
                ]
            })
            .collect();
        self.ops.push(DrawOp::Lines {
            segments,
            color: self.color,
            width: self.line_width,
        });
    }

    pub fn text_2d(&mut self, position: DVec2, text: &str) {
        self.ops.push(DrawOp::Text {
            position: self.transform.apply(position.extend(0.0)),
            text: text.to_owned(),
            color: self.color,
        });
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn finish(self) -> Vec<DrawOp> {
        self.ops
    }
}

impl Default for Painter {
    fn default() -> Self {
        Self::new()
    }
}
