// Host-side tests for the owned scene context and widget controls.

use relief_core::{
    parse_zoom, CameraEvent, Controls, DrawMode, HeightField, ProjectionMode, RasterImage,
    ReliefError, Scene,
};

fn grey_image(w: u32, h: u32) -> Vec<u8> {
    (0..w * h)
        .flat_map(|i| {
            let g = (i * 29 % 256) as u8;
            [g, g, g, 255]
        })
        .collect()
}

#[test]
fn frame_without_mesh_draws_nothing() {
    let mut scene = Scene::new();
    let out = scene.frame(&Controls::default(), 1.0);
    assert!(out.draw.is_none());
    assert_eq!(scene.revision(), 0);
}

#[test]
fn loading_an_image_installs_both_buffers() {
    let mut scene = Scene::new();
    let pixels = grey_image(5, 4);
    let mesh = scene.load_image(&RasterImage::rgba(5, 4, &pixels)).unwrap();
    assert_eq!(mesh.triangles.vertex_count(), 4 * 3 * 6);
    assert_eq!(mesh.wire.vertex_count(), 4 * 3 * 6 * 2);
    assert_eq!(scene.revision(), 1);

    let out = scene.frame(&Controls::default(), 1.0);
    let draw = out.draw.unwrap();
    assert_eq!(draw.mode, DrawMode::Triangles);
    assert_eq!(draw.vertex_count, 72);
}

#[test]
fn wireframe_toggle_switches_draw_call() {
    let mut scene = Scene::new();
    let pixels = grey_image(3, 3);
    scene.load_image(&RasterImage::rgba(3, 3, &pixels)).unwrap();
    let controls = Controls {
        wireframe: true,
        ..Controls::default()
    };
    let draw = scene.frame(&controls, 1.0).draw.unwrap();
    assert_eq!(draw.mode, DrawMode::Lines);
    assert_eq!(draw.vertex_count, 2 * 2 * 6 * 2);
}

#[test]
fn failed_rebuild_keeps_previous_mesh() {
    let mut scene = Scene::new();
    let pixels = grey_image(4, 4);
    scene.load_image(&RasterImage::rgba(4, 4, &pixels)).unwrap();
    let before = scene.mesh().cloned();

    let err = scene.load_image(&RasterImage::rgba(0, 0, &[])).unwrap_err();
    assert!(matches!(err, ReliefError::InvalidImage(_)));
    let thin = HeightField::from_values(1, 8, vec![0.5; 8]).unwrap();
    let err = scene.load_height_field(thin).unwrap_err();
    assert_eq!(err, ReliefError::GridTooSmall { width: 1, height: 8 });

    assert_eq!(scene.mesh().cloned(), before);
    assert_eq!(scene.revision(), 1);
}

#[test]
fn reloading_same_image_gives_identical_buffers() {
    let pixels = grey_image(6, 3);
    let image = RasterImage::rgba(6, 3, &pixels);
    let mut scene = Scene::new();
    let first = scene.load_image(&image).unwrap().clone();
    let second = scene.load_image(&image).unwrap().clone();
    assert_eq!(first, second);
    assert_eq!(scene.revision(), 2);
}

#[test]
fn frame_is_repeatable() {
    let mut scene = Scene::new();
    scene.handle(CameraEvent::Wheel { delta_y: -1.0 });
    let controls = Controls {
        rotation_deg: 45.0,
        ..Controls::default()
    };
    let a = scene.frame(&controls, 1.6);
    let b = scene.frame(&controls, 1.6);
    assert_eq!(a, b);
}

#[test]
fn projection_widget_drives_camera_mode() {
    let mut scene = Scene::new();
    let controls = Controls {
        projection: ProjectionMode::Orthographic,
        ..Controls::default()
    };
    scene.frame(&controls, 1.0);
    assert_eq!(scene.camera().projection, ProjectionMode::Orthographic);
}

#[test]
fn missing_widgets_fall_back_to_defaults() {
    let c = Controls::from_widgets(None, None, None, None);
    assert_eq!(c, Controls::default());
    assert_eq!(c.rotation_rad(), 0.0);
    assert_eq!(c.height_scale(), 1.0);
    assert_eq!(c.projection, ProjectionMode::Perspective);
    assert!(!c.wireframe);
}

#[test]
fn widget_values_are_converted() {
    let c = Controls::from_widgets(Some("90"), Some("100"), Some("orthographic"), Some(true));
    assert!((c.rotation_rad() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    assert_eq!(c.height_scale(), 2.0);
    assert_eq!(c.projection, ProjectionMode::Orthographic);
    assert_eq!(c.draw_mode(), DrawMode::Lines);
}

#[test]
fn widget_garbage_is_clamped_or_ignored() {
    let c = Controls::from_widgets(Some("abc"), Some("-40"), Some("fisheye"), None);
    assert_eq!(c.rotation_deg, 0.0);
    assert_eq!(c.height_raw, 0.0);
    assert_eq!(c.projection, ProjectionMode::Perspective);

    let c = Controls::from_widgets(Some("9000"), Some("NaN"), None, None);
    assert_eq!(c.rotation_deg, 360.0);
    assert_eq!(c.height_raw, 50.0);
}

#[test]
fn zoom_slider_parsing() {
    assert_eq!(parse_zoom(Some("120")), Some(120.0));
    assert_eq!(parse_zoom(Some("999")), Some(200.0));
    assert_eq!(parse_zoom(Some("")), None);
    assert_eq!(parse_zoom(None), None);
}
