use scene_viewer::camera::Steering;
use scene_viewer::input::InputEvent;
use scene_viewer::scenes::house::{FLOORS, ROOF, WINDOWS};
use scene_viewer::scenes::SceneKind;
use scene_viewer::session::{Session, WINDOW_HEIGHT};

fn session(kind: SceneKind) -> Session {
    Session::new(kind.build(), Steering::default())
}

/// Window y (top-left origin) for a y measured from the bottom edge.
fn flip(y: f64) -> f64 {
    WINDOW_HEIGHT as f64 - y
}

#[cfg(test)]
mod slider_tests {
    use super::*;

    #[test]
    fn test_roof_click_drag_release() {
        let mut s = session(SceneKind::House);
        s.handle(InputEvent::PointerDown { x: 525.0, y: flip(425.0) });
        assert_eq!(s.captured(), Some(ROOF));
        assert_eq!(s.captured_name(), Some("ROOF"));

        s.handle(InputEvent::PointerMoved { x: 540.0, y: 0.0 });
        assert_eq!(s.knob_value(ROOF), Some(15.0));

        s.handle(InputEvent::PointerUp);
        assert_eq!(s.captured(), None);
    }

    #[test]
    fn test_drag_outside_track_keeps_value_and_capture() {
        let mut s = session(SceneKind::House);
        s.pointer_pressed(525.0, flip(420.0));
        s.pointer_moved(500.0);
        assert_eq!(s.knob_value(ROOF), Some(-25.0));

        s.pointer_moved(600.0);
        s.pointer_moved(464.0);
        assert_eq!(s.knob_value(ROOF), Some(-25.0));
        assert_eq!(s.captured(), Some(ROOF));

        s.pointer_moved(585.0);
        assert_eq!(s.knob_value(ROOF), Some(60.0));
    }

    #[test]
    fn test_each_house_slider_captures_its_knob() {
        let mut s = session(SceneKind::House);
        s.pointer_pressed(525.0, flip(225.0));
        assert_eq!(s.captured(), Some(FLOORS));
        s.pointer_released();

        // Windows indicator rests two pixels left of centre
        s.pointer_pressed(516.0, flip(27.0));
        assert_eq!(s.captured(), Some(WINDOWS));
        s.pointer_released();

        s.pointer_pressed(533.0, flip(27.0));
        assert_eq!(s.captured(), None);
    }

    #[test]
    fn test_grab_region_follows_knob() {
        let mut s = session(SceneKind::House);
        s.pointer_pressed(525.0, flip(420.0));
        s.pointer_moved(565.0);
        s.pointer_released();

        s.pointer_pressed(525.0, flip(420.0));
        assert_eq!(s.captured(), None);
        s.pointer_pressed(564.0, flip(420.0));
        assert_eq!(s.captured(), Some(ROOF));
    }

    #[test]
    fn test_motion_without_capture_is_ignored() {
        let mut s = session(SceneKind::House);
        s.pointer_pressed(100.0, flip(300.0));
        assert_eq!(s.captured(), None);
        s.pointer_moved(540.0);
        assert_eq!(s.knob_value(ROOF), Some(0.5));
        assert_eq!(s.knob_value(FLOORS), Some(2.0));
        assert_eq!(s.knob_value(WINDOWS), Some(2.0));
    }

    #[test]
    fn test_knobs_report_drag_ranges() {
        let house = session(SceneKind::House);
        for slider in house.scene().sliders() {
            assert_eq!(slider.knob.range, (-60.0, 60.0));
            assert!(slider.knob.in_range(slider.value()));
        }

        let owl = session(SceneKind::Owl);
        assert_eq!(owl.scene().sliders()[0].knob.range, (-260.0, 260.0));
    }

    #[test]
    fn test_owl_eye_slider() {
        let mut s = session(SceneKind::Owl);
        s.pointer_pressed(305.0, flip(60.0));
        assert_eq!(s.captured_name(), Some("EYES"));

        s.pointer_moved(560.0);
        assert_eq!(s.knob_value(0), Some(260.0));
        s.pointer_moved(561.0);
        assert_eq!(s.knob_value(0), Some(260.0));
        s.pointer_moved(40.0);
        assert_eq!(s.knob_value(0), Some(-260.0));

        s.pointer_released();
        assert_eq!(s.captured(), None);
    }

    #[test]
    fn test_owl_band_is_inclusive() {
        let mut s = session(SceneKind::Owl);
        s.pointer_pressed(310.0, flip(75.0));
        assert!(s.captured().is_some());
        s.pointer_released();
        s.pointer_pressed(311.0, flip(60.0));
        assert!(s.captured().is_none());
    }
}
