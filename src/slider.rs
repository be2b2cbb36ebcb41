use glam::DVec2;

use crate::draw::Painter;
use crate::math::color::{BLACK, RED, WHITE};
use crate::math::Rgb;

/// A single user-adjustable scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct Knob {
    pub name: String,
    pub value: f64,
    /// Inclusive bounds a drag can set `value` to. Unbounded until the knob is
    /// attached to a slider, which derives it from the drag limits.
    pub range: (f64, f64),
    /// Value units per pixel of drag
    pub scale: f64,
    /// Subtracted from `value` to place the indicator, so the default sits near the track centre
    pub indicator_bias: f64,
}

impl Knob {
    pub fn new(name: impl Into<String>, default: f64) -> Self {
        Self {
            name: name.into(),
            value: default,
            range: (f64::NEG_INFINITY, f64::INFINITY),
            scale: 1.0,
            indicator_bias: 0.0,
        }
    }

    pub fn with_indicator_bias(mut self, bias: f64) -> Self {
        self.indicator_bias = bias;
        self
    }

    pub fn in_range(&self, value: f64) -> bool {
        value >= self.range.0 && value <= self.range.1
    }

    /// Horizontal indicator displacement in pixels.
    pub fn indicator_offset(&self) -> f64 {
        self.value - self.indicator_bias
    }
}

/// Placement of one slider. Interaction bounds are in window pixels
/// (origin bottom-left); drawing coordinates are local to the panel pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderLayout {
    /// Window x of the track centre
    pub track_center: f64,
    /// Window x range accepted while dragging
    pub drag_limits: (f64, f64),
    /// Window y range of the grab region
    pub grab_band: (f64, f64),
    /// Grab region half-width around the indicator
    pub grab_half_width: f64,

    /// Translation of this slider inside its panel
    pub offset: DVec2,
    /// Filled box behind the track
    pub background: Option<([DVec2; 2], Rgb)>,
    pub track: [DVec2; 2],
    pub track_width: f64,
    /// Indicator outline at zero displacement
    pub indicator: Vec<DVec2>,
    /// Raster position for the label
    pub label_at: Option<DVec2>,
}

impl SliderLayout {
    /// Knob values reachable by dragging between the limits.
    pub fn value_range(&self, scale: f64) -> (f64, f64) {
        let (low, high) = self.drag_limits;
        let ends = (
            (low - self.track_center) * scale,
            (high - self.track_center) * scale,
        );
        if ends.0 <= ends.1 {
            ends
        } else {
            (ends.1, ends.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub knob: Knob,
    pub layout: SliderLayout,
}

impl Slider {
    pub fn new(knob: Knob, layout: SliderLayout) -> Self {
        let range = layout.value_range(knob.scale);
        Self {
            knob: Knob { range, ..knob },
            layout,
        }
    }

    pub fn value(&self) -> f64 {
        self.knob.value
    }

    /// Window x the grab region is centred on, whole pixels.
    pub fn grab_center(&self) -> f64 {
        (self.layout.track_center + self.knob.indicator_offset()).trunc()
    }

    pub fn hit(&self, point: DVec2) -> bool {
        let (low, high) = self.layout.grab_band;
        let center = self.grab_center();
        point.y >= low
            && point.y <= high
            && point.x >= center - self.layout.grab_half_width
            && point.x <= center + self.layout.grab_half_width
    }

    /// Move the knob to follow the pointer. Returns `false` and leaves the
    /// value alone when `x` is outside the drag limits.
    pub fn drag_to(&mut self, x: f64) -> bool {
        let (low, high) = self.layout.drag_limits;
        if x > high || x < low {
            return false;
        }
        self.knob.value = (x - self.layout.track_center) * self.knob.scale;
        true
    }

    pub fn draw(&self, painter: &mut Painter) {
        let layout = &self.layout;
        painter.scoped(|p| {
            p.translate(layout.offset.x, layout.offset.y, 0.0);

            if let Some(at) = layout.label_at {
                p.set_color(WHITE);
                p.text_2d(at, &self.knob.name);
            }

            if let Some(([min, max], color)) = layout.background {
                p.set_color(color);
                p.polygon_2d(&[
                    DVec2::new(min.x, max.y),
                    DVec2::new(max.x, max.y),
                    DVec2::new(max.x, min.y),
                    DVec2::new(min.x, min.y),
                ]);
            }

            p.set_color(BLACK);
            p.set_line_width(layout.track_width);
            p.lines_2d(&[layout.track]);
            p.set_line_width(1.0);

            p.set_color(RED);
            p.scoped(|p| {
                p.translate(self.knob.indicator_offset(), 0.0, 0.0);
                p.polygon_2d(&layout.indicator);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawOp;

    fn slider() -> Slider {
        Slider::new(
            Knob::new("EYES", 0.0),
            SliderLayout {
                track_center: 300.0,
                drag_limits: (40.0, 560.0),
                grab_band: (50.0, 75.0),
                grab_half_width: 10.0,
                offset: DVec2::ZERO,
                background: None,
                track: [DVec2::new(50.0, 60.0), DVec2::new(550.0, 60.0)],
                track_width: 2.0,
                indicator: vec![
                    DVec2::new(300.0, 76.0),
                    DVec2::new(310.0, 65.0),
                    DVec2::new(310.0, 50.0),
                    DVec2::new(290.0, 50.0),
                    DVec2::new(290.0, 65.0),
                ],
                label_at: None,
            },
        )
    }

    #[test]
    fn test_hit_follows_indicator() {
        let mut s = slider();
        assert!(s.hit(DVec2::new(305.0, 60.0)));
        assert!(s.drag_to(400.0));
        assert!(!s.hit(DVec2::new(305.0, 60.0)));
        assert!(s.hit(DVec2::new(395.0, 60.0)));
    }

    #[test]
    fn test_hit_rejects_outside_band() {
        let s = slider();
        assert!(!s.hit(DVec2::new(300.0, 49.0)));
        assert!(!s.hit(DVec2::new(300.0, 76.0)));
    }

    #[test]
    fn test_drag_limits_are_inclusive() {
        let mut s = slider();
        assert!(s.drag_to(40.0));
        assert_eq!(s.value(), -260.0);
        assert!(s.drag_to(560.0));
        assert_eq!(s.value(), 260.0);
        assert!(!s.drag_to(561.0));
        assert_eq!(s.value(), 260.0);
    }

    #[test]
    fn test_knob_range_matches_drag_limits() {
        let mut s = slider();
        assert_eq!(s.knob.range, (-260.0, 260.0));
        assert!(s.knob.in_range(0.0));
        assert!(!s.knob.in_range(261.0));

        assert!(s.drag_to(560.0));
        assert_eq!(s.value(), s.knob.range.1);
        assert!(s.drag_to(40.0));
        assert_eq!(s.value(), s.knob.range.0);
    }

    #[test]
    fn test_detached_knob_is_unbounded() {
        let knob = Knob::new("ROOF", 0.5);
        assert!(knob.in_range(1e12));
        assert!(knob.in_range(-1e12));
    }

    #[test]
    fn test_draw_translates_indicator() {
        let mut s = slider();
        s.knob.value = 20.0;
        let mut painter = Painter::new();
        s.draw(&mut painter);

        let indicator = painter
            .ops()
            .iter()
            .rev()
            .find_map(|op| match op {
                DrawOp::Polygon { vertices, .. } => Some(vertices.clone()),
                _ => None,
            })
            .expect("indicator polygon");
        assert_eq!(indicator[0].x, 320.0);
        assert_eq!(painter.transform_depth(), 0);
    }
}
