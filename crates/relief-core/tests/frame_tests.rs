// Host-side tests for per-frame matrix composition.

use glam::{Mat4, Vec3, Vec4};
use relief_core::frame::{compose, model_matrix, projection_matrix, view_matrix};
use relief_core::{
    build_triangle_mesh, CameraEvent, CameraState, FrameInputs, HeightField, PointerButton,
    ProjectionMode,
};

const EPS: f32 = 1e-5;

fn assert_mat_close(a: Mat4, b: Mat4) {
    assert!(a.abs_diff_eq(b, EPS), "{a:?}\n!=\n{b:?}");
}

#[test]
fn flat_quad_modelview_matches_independent_composition() {
    let field = HeightField::from_values(2, 2, vec![0.0; 4]).unwrap();
    let mesh = build_triangle_mesh(&field).unwrap();
    // Flat unit quad at y = 0
    assert!(mesh.positions().chunks_exact(3).all(|v| v[1] == 0.0));
    assert_eq!(&mesh.positions()[0..3], &[-1.0, 0.0, -1.0]);

    let camera = CameraState::default();
    let inputs = FrameInputs {
        rotation_rad: 0.0,
        height_scale: 1.0,
        aspect: 4.0 / 3.0,
    };
    let out = compose(&camera, &inputs);

    let eye = Vec3::new(0.0, 3.0, camera.distance());
    let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
    let model = Mat4::from_translation(Vec3::ZERO)
        * Mat4::from_rotation_y(0.0)
        * Mat4::from_rotation_z(0.0)
        * Mat4::from_scale(Vec3::ONE);
    let v = Vec4::new(-1.0, 0.0, -1.0, 1.0);
    let expected = view * (model * v);
    let got = out.modelview * v;
    assert!((got - expected).length() < EPS, "{got:?} vs {expected:?}");
}

#[test]
fn model_applies_scale_then_roll_then_yaw_then_pan() {
    let mut camera = CameraState::default();
    camera.drag_yaw = 0.3;
    camera.drag_roll = -0.2;
    camera.pan = Vec3::new(0.5, -0.25, 0.1);
    let inputs = FrameInputs {
        rotation_rad: 0.4,
        height_scale: 2.5,
        aspect: 1.0,
    };
    let expected = Mat4::from_translation(camera.pan)
        * Mat4::from_rotation_y(0.4 + 0.3)
        * Mat4::from_rotation_z(-0.2)
        * Mat4::from_scale(Vec3::new(1.0, 2.5, 1.0));
    assert_mat_close(model_matrix(&camera, &inputs), expected);

    // A point straight up gets stretched before it is tilted
    let p = model_matrix(&camera, &inputs).transform_point3(Vec3::Y) - camera.pan;
    assert!((p.length() - 2.5).abs() < EPS);
}

#[test]
fn modelview_is_view_times_model() {
    let mut camera = CameraState::default();
    camera.apply(CameraEvent::PointerDown {
        button: PointerButton::Primary,
        x: 0.0,
        y: 0.0,
    });
    camera.apply(CameraEvent::PointerMove {
        x: 25.0,
        y: 10.0,
        shift: false,
    });
    let inputs = FrameInputs {
        rotation_rad: 1.0,
        height_scale: 0.5,
        aspect: 2.0,
    };
    let out = compose(&camera, &inputs);
    assert_mat_close(
        out.modelview,
        view_matrix(&camera) * model_matrix(&camera, &inputs),
    );
}

#[test]
fn perspective_projection_uses_fixed_fov() {
    let camera = CameraState::default();
    let p = projection_matrix(&camera, 1.5);
    assert_mat_close(
        p,
        Mat4::perspective_rh(70f32.to_radians(), 1.5, 0.001, 50.0),
    );
}

#[test]
fn orthographic_view_widens_as_zoom_grows() {
    let mut camera = CameraState::default();
    camera.apply(CameraEvent::SetProjection(ProjectionMode::Orthographic));

    // y scale is 1 / half-height
    let half_height = |camera: &CameraState| 1.0 / projection_matrix(camera, 1.0).y_axis.y;
    camera.apply(CameraEvent::SetZoom(0.0));
    let at_min = half_height(&camera);
    camera.apply(CameraEvent::SetZoom(100.0));
    let at_mid = half_height(&camera);
    camera.apply(CameraEvent::SetZoom(200.0));
    let at_max = half_height(&camera);

    assert!((at_min - 1.2 / 2.6).abs() < 1e-4, "{at_min}");
    assert!((at_mid - 0.75).abs() < 1e-4, "{at_mid}");
    assert!((at_max - 2.0).abs() < 1e-4, "{at_max}");

    let size = 1.2 / 0.6;
    assert_mat_close(
        projection_matrix(&camera, 1.0),
        Mat4::orthographic_rh(-size, size, -size, size, 0.001, 50.0),
    );
}

#[test]
fn orthographic_uses_fixed_eye() {
    let mut camera = CameraState::default();
    camera.apply(CameraEvent::SetProjection(ProjectionMode::Orthographic));
    assert_mat_close(
        view_matrix(&camera),
        Mat4::look_at_rh(Vec3::new(0.0, 3.0, 3.0), Vec3::ZERO, Vec3::Y),
    );
}

#[test]
fn bad_aspect_falls_back_to_square() {
    let camera = CameraState::default();
    let square = projection_matrix(&camera, 1.0);
    assert_mat_close(projection_matrix(&camera, 0.0), square);
    assert_mat_close(projection_matrix(&camera, f32::NAN), square);
}

#[test]
fn uniforms_are_column_major() {
    let camera = CameraState::default();
    let out = compose(&camera, &FrameInputs::default());
    let u = out.uniforms();
    assert_eq!(u.modelview, out.modelview.to_cols_array_2d());
    assert_eq!(u.projection, out.projection.to_cols_array_2d());
    assert_eq!(std::mem::size_of_val(&u), 128);
}
