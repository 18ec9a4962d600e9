use glam::Vec3;
use maglev_core::{OrbitCamera, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE};

#[test]
fn default_pose_matches_initial_eye() {
    let camera = OrbitCamera::default();
    let eye = camera.eye();
    assert!((eye - Vec3::new(5.0, 3.0, 5.0)).length() < 1e-4);
    assert!((camera.target - Vec3::ZERO).length() < 1e-6);
}

#[test]
fn zoom_clamps_distance_to_scene_limits() {
    let mut camera = OrbitCamera::default();
    for _ in 0..200 {
        camera.zoom(0.5);
    }
    assert_eq!(camera.distance, ORBIT_MAX_DISTANCE);
    for _ in 0..200 {
        camera.zoom(-0.5);
    }
    assert_eq!(camera.distance, ORBIT_MIN_DISTANCE);
}

#[test]
fn pitch_never_reaches_the_poles() {
    let mut camera = OrbitCamera::default();
    camera.rotate(0.0, 100.0);
    assert!(camera.pitch < std::f32::consts::FRAC_PI_2);
    assert!(camera.eye().is_finite());
    camera.rotate(0.0, -200.0);
    assert!(camera.pitch > -std::f32::consts::FRAC_PI_2);
}

#[test]
fn rotation_preserves_distance_to_target() {
    let mut camera = OrbitCamera::default();
    let before = (camera.eye() - camera.target).length();
    camera.rotate(1.3, 0.4);
    let after = (camera.eye() - camera.target).length();
    assert!((before - after).abs() < 1e-4);
}

#[test]
fn pan_moves_the_target_but_not_the_distance() {
    let mut camera = OrbitCamera::default();
    let distance = camera.distance;
    camera.pan(0.2, -0.1);
    assert!(camera.target.length() > 0.0);
    assert_eq!(camera.distance, distance);
}

#[test]
fn target_projects_to_the_viewport_center() {
    let camera = OrbitCamera::default();
    let px = camera
        .project_to_screen(camera.target, 800.0, 600.0)
        .expect("target is in front of the camera");
    assert!((px.x - 400.0).abs() < 0.01);
    assert!((px.y - 300.0).abs() < 0.01);
}

#[test]
fn points_behind_the_camera_do_not_project() {
    let camera = OrbitCamera::default();
    let behind = camera.eye() * 2.0 - camera.target;
    assert!(camera.project_to_screen(behind, 800.0, 600.0).is_none());
}

#[test]
fn anchors_track_height_on_screen() {
    // Raising the world anchor moves its projection up (smaller y).
    let camera = OrbitCamera::default();
    let low = camera
        .project_to_screen(Vec3::new(0.0, 1.1, 0.0), 800.0, 600.0)
        .unwrap();
    let high = camera
        .project_to_screen(Vec3::new(0.0, 2.1, 0.0), 800.0, 600.0)
        .unwrap();
    assert!(high.y < low.y);
}
