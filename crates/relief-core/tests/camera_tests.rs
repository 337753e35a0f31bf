// Host-side tests for the orbit camera state machine.

use glam::Vec3;
use relief_core::{
    transition, CameraEvent, CameraState, PointerButton, ProjectionMode, ZOOM_DEFAULT, ZOOM_MAX,
    ZOOM_MIN,
};

fn drag(
    state: &mut CameraState,
    button: PointerButton,
    from: (f32, f32),
    to: (f32, f32),
    shift: bool,
) {
    state.apply(CameraEvent::PointerDown {
        button,
        x: from.0,
        y: from.1,
    });
    state.apply(CameraEvent::PointerMove {
        x: to.0,
        y: to.1,
        shift,
    });
    state.apply(CameraEvent::PointerUp);
}

#[test]
fn default_state() {
    let s = CameraState::default();
    assert_eq!(s.drag_yaw, 0.0);
    assert_eq!(s.drag_roll, 0.0);
    assert_eq!(s.pan, Vec3::ZERO);
    assert_eq!(s.zoom(), ZOOM_DEFAULT);
    assert_eq!(s.projection, ProjectionMode::Perspective);
    assert!(!s.dragging);
}

#[test]
fn pointer_down_starts_drag_without_motion() {
    let s = transition(
        CameraState::default(),
        CameraEvent::PointerDown {
            button: PointerButton::Primary,
            x: 40.0,
            y: 30.0,
        },
    );
    assert!(s.dragging);
    assert!(s.left_button);
    assert_eq!(s.drag_yaw, 0.0);
    assert_eq!(s.last_pointer, glam::Vec2::new(40.0, 30.0));
}

#[test]
fn move_without_drag_is_ignored() {
    let s = CameraState::default();
    let moved = transition(
        s,
        CameraEvent::PointerMove {
            x: 100.0,
            y: 100.0,
            shift: false,
        },
    );
    assert_eq!(moved, s);
}

#[test]
fn left_drag_rotates() {
    let mut s = CameraState::default();
    drag(&mut s, PointerButton::Primary, (10.0, 10.0), (60.0, -10.0), false);
    assert!((s.drag_yaw - 0.5).abs() < 1e-6);
    assert!((s.drag_roll + 0.2).abs() < 1e-6);
    assert_eq!(s.pan, Vec3::ZERO);
    assert!(!s.dragging);
}

#[test]
fn symmetric_drags_cancel_out() {
    let mut s = CameraState::default();
    drag(&mut s, PointerButton::Primary, (0.0, 0.0), (37.0, -12.0), false);
    drag(&mut s, PointerButton::Primary, (37.0, -12.0), (0.0, 0.0), false);
    assert!(s.drag_yaw.abs() < 1e-6);
    assert!(s.drag_roll.abs() < 1e-6);
}

#[test]
fn secondary_drag_pans_on_ground_plane() {
    let mut s = CameraState::default();
    let k = 0.0016 * s.distance();
    drag(&mut s, PointerButton::Secondary, (0.0, 0.0), (10.0, 20.0), false);
    assert!((s.pan.x - 10.0 * k).abs() < 1e-6);
    assert_eq!(s.pan.y, 0.0);
    assert!((s.pan.z - 20.0 * k).abs() < 1e-6);
    assert_eq!(s.drag_yaw, 0.0);
}

#[test]
fn shift_secondary_drag_pans_vertically_with_inverted_y() {
    let mut s = CameraState::default();
    let k = 0.0016 * s.distance();
    drag(&mut s, PointerButton::Secondary, (0.0, 0.0), (10.0, 20.0), true);
    assert!((s.pan.x - 10.0 * k).abs() < 1e-6);
    assert!((s.pan.y + 20.0 * k).abs() < 1e-6);
    assert_eq!(s.pan.z, 0.0);
}

#[test]
fn auxiliary_button_pans_too() {
    let mut s = CameraState::default();
    drag(&mut s, PointerButton::Auxiliary, (0.0, 0.0), (10.0, 0.0), false);
    assert!(s.pan.x > 0.0);
    assert_eq!(s.drag_yaw, 0.0);
}

#[test]
fn pan_speed_scales_with_distance() {
    let mut near = CameraState::default();
    near.apply(CameraEvent::SetZoom(ZOOM_MAX));
    let mut far = CameraState::default();
    far.apply(CameraEvent::SetZoom(ZOOM_MIN));
    drag(&mut near, PointerButton::Secondary, (0.0, 0.0), (10.0, 0.0), false);
    drag(&mut far, PointerButton::Secondary, (0.0, 0.0), (10.0, 0.0), false);
    let ratio = far.pan.x / near.pan.x;
    assert!((ratio - 6.0 / 1.8).abs() < 1e-4);
}

#[test]
fn pointer_up_and_leave_are_idempotent() {
    let mut s = CameraState::default();
    s.apply(CameraEvent::PointerUp);
    s.apply(CameraEvent::PointerUp);
    assert!(!s.dragging);
    s.apply(CameraEvent::PointerDown {
        button: PointerButton::Primary,
        x: 0.0,
        y: 0.0,
    });
    s.apply(CameraEvent::PointerLeave);
    s.apply(CameraEvent::PointerLeave);
    assert!(!s.dragging);
}

#[test]
fn wheel_steps_opposite_to_delta() {
    let mut s = CameraState::default();
    s.apply(CameraEvent::Wheel { delta_y: -120.0 });
    assert_eq!(s.zoom(), ZOOM_DEFAULT + 8.0);
    s.apply(CameraEvent::Wheel { delta_y: 3.0 });
    s.apply(CameraEvent::Wheel { delta_y: 3.0 });
    assert_eq!(s.zoom(), ZOOM_DEFAULT - 8.0);
    s.apply(CameraEvent::Wheel { delta_y: 0.0 });
    s.apply(CameraEvent::Wheel { delta_y: f32::NAN });
    assert_eq!(s.zoom(), ZOOM_DEFAULT - 8.0);
}

#[test]
fn wheel_never_leaves_zoom_range() {
    let mut s = CameraState::default();
    for _ in 0..100 {
        s.apply(CameraEvent::Wheel { delta_y: -1.0 });
        assert!((ZOOM_MIN..=ZOOM_MAX).contains(&s.zoom()));
    }
    assert_eq!(s.zoom(), ZOOM_MAX);
    for _ in 0..100 {
        s.apply(CameraEvent::Wheel { delta_y: 1.0 });
        assert!((ZOOM_MIN..=ZOOM_MAX).contains(&s.zoom()));
    }
    assert_eq!(s.zoom(), ZOOM_MIN);
}

#[test]
fn set_zoom_clamps_and_ignores_garbage() {
    let mut s = CameraState::default();
    s.apply(CameraEvent::SetZoom(1e6));
    assert_eq!(s.zoom(), ZOOM_MAX);
    s.apply(CameraEvent::SetZoom(-5.0));
    assert_eq!(s.zoom(), ZOOM_MIN);
    s.apply(CameraEvent::SetZoom(f32::INFINITY));
    assert_eq!(s.zoom(), ZOOM_MIN);
}

#[test]
fn distance_interpolates_between_bounds() {
    let mut s = CameraState::default();
    s.apply(CameraEvent::SetZoom(ZOOM_MIN));
    assert!((s.distance() - 6.0).abs() < 1e-6);
    s.apply(CameraEvent::SetZoom(ZOOM_MAX));
    assert!((s.distance() - 1.8).abs() < 1e-6);
    s.apply(CameraEvent::SetZoom(100.0));
    assert!((s.distance() - 3.9).abs() < 1e-6);
}

#[test]
fn eye_never_reaches_target() {
    let mut s = CameraState::default();
    for zoom in [ZOOM_MIN, 50.0, ZOOM_MAX] {
        s.apply(CameraEvent::SetZoom(zoom));
        for mode in [ProjectionMode::Perspective, ProjectionMode::Orthographic] {
            s.apply(CameraEvent::SetProjection(mode));
            assert!(s.eye().length() > 1.0);
        }
    }
}

#[test]
fn projection_switch_keeps_pan_and_rotation() {
    let mut s = CameraState::default();
    drag(&mut s, PointerButton::Primary, (0.0, 0.0), (15.0, 5.0), false);
    drag(&mut s, PointerButton::Secondary, (0.0, 0.0), (-7.0, 9.0), true);
    let before = s;
    s.apply(CameraEvent::SetProjection(ProjectionMode::Orthographic));
    assert_eq!(s.projection, ProjectionMode::Orthographic);
    assert_eq!(s.pan, before.pan);
    assert_eq!(s.drag_yaw, before.drag_yaw);
    assert_eq!(s.drag_roll, before.drag_roll);
    assert_eq!(s.zoom(), before.zoom());
}

#[test]
fn projection_mode_parses_widget_values() {
    assert_eq!("perspective".parse::<ProjectionMode>(), Ok(ProjectionMode::Perspective));
    assert_eq!(" orthographic ".parse::<ProjectionMode>(), Ok(ProjectionMode::Orthographic));
    let err = "isometric".parse::<ProjectionMode>().unwrap_err();
    assert_eq!(err.to_string(), "unknown projection mode 'isometric'");
    assert_eq!(ProjectionMode::Perspective.toggled(), ProjectionMode::Orthographic);
}

#[test]
fn zoom_factor_falls_as_zoom_grows() {
    let mut s = CameraState::default();
    s.apply(CameraEvent::SetZoom(0.0));
    assert!((s.zoom_factor() - 2.6).abs() < 1e-6);
    s.apply(CameraEvent::SetZoom(100.0));
    assert!((s.zoom_factor() - 1.6).abs() < 1e-6);
    s.apply(CameraEvent::SetZoom(200.0));
    assert!((s.zoom_factor() - 0.6).abs() < 1e-6);
}
