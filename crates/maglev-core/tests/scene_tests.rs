use maglev_core::mesh::{ids, mesh_count};
use maglev_core::{
    build_scene, label_anchors, label_text, Instance, LabelKind, SceneState, FIELD_LINE_COUNT,
};

fn scene(t: f32, state: &SceneState) -> Vec<Instance> {
    let mut out = Vec::new();
    build_scene(t, state, &mut out);
    out
}

#[test]
fn rebuild_with_equal_inputs_is_identical() {
    let state = SceneState::default();
    assert_eq!(scene(1.234, &state), scene(1.234, &state));
}

#[test]
fn every_instance_references_a_registry_mesh() {
    let state = SceneState::default();
    for inst in scene(2.0, &state) {
        assert!(inst.mesh < mesh_count());
    }
}

#[test]
fn default_scene_draws_every_element_group() {
    let state = SceneState::default();
    let instances = scene(0.0, &state);
    // ground + grid + 3 vehicle boxes + 4 ring pairs + 8 field lines
    // + earth sphere + 2 force glyph pairs
    assert_eq!(instances.len(), 2 + 3 + 8 + 8 + 1 + 4);
    let rings = instances.iter().filter(|i| i.mesh == ids::RING_CORE).count();
    assert_eq!(rings, 4);
    let lines = instances
        .iter()
        .filter(|i| i.mesh >= ids::FIELD_LINE_BASE)
        .count();
    assert_eq!(lines, FIELD_LINE_COUNT);
}

#[test]
fn force_toggle_gates_only_the_force_glyphs() {
    let mut state = SceneState::default();
    let with_forces = scene(0.7, &state);
    state.set_show_forces(false);
    let without_forces = scene(0.7, &state);

    assert!(!without_forces
        .iter()
        .any(|i| i.mesh == ids::FORCE_SHAFT || i.mesh == ids::FORCE_HEAD));
    assert_eq!(with_forces.len(), without_forces.len() + 4);

    // Everything else is untouched by the toggle.
    let non_force: Vec<_> = with_forces
        .iter()
        .filter(|i| i.mesh != ids::FORCE_SHAFT && i.mesh != ids::FORCE_HEAD)
        .collect();
    let remaining: Vec<_> = without_forces.iter().collect();
    assert_eq!(non_force, remaining);
}

#[test]
fn field_line_toggle_gates_the_group() {
    let mut state = SceneState::default();
    state.set_show_field_lines(false);
    let instances = scene(1.0, &state);
    assert!(!instances.iter().any(|i| i.mesh >= ids::FIELD_LINE_BASE));
    state.set_show_field_lines(true);
    let restored = scene(1.0, &state);
    assert_eq!(
        restored
            .iter()
            .filter(|i| i.mesh >= ids::FIELD_LINE_BASE)
            .count(),
        FIELD_LINE_COUNT
    );
}

#[test]
fn force_glyphs_anchor_at_half_a_unit_from_the_height() {
    let mut state = SceneState::default();
    state.set_height(1.6);
    let instances = scene(0.0, &state);
    let mut shaft_ys: Vec<f32> = instances
        .iter()
        .filter(|i| i.mesh == ids::FORCE_SHAFT)
        .map(|i| i.model.w_axis.y)
        .collect();
    shaft_ys.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(shaft_ys.len(), 2);
    assert!((shaft_ys[0] - 1.1).abs() < 1e-6); // magnetic, below
    assert!((shaft_ys[1] - 2.1).abs() < 1e-6); // gravity, above

    // They track the slider with no lag.
    state.set_height(3.0);
    let moved = scene(0.0, &state);
    let max_shaft_y = moved
        .iter()
        .filter(|i| i.mesh == ids::FORCE_SHAFT)
        .map(|i| i.model.w_axis.y)
        .fold(f32::MIN, f32::max);
    assert!((max_shaft_y - 3.5).abs() < 1e-6);
}

#[test]
fn rings_share_one_rotation_phase() {
    let state = SceneState::default();
    let instances = scene(2.9, &state);
    let cores: Vec<_> = instances
        .iter()
        .filter(|i| i.mesh == ids::RING_CORE)
        .collect();
    assert_eq!(cores.len(), 4);
    for pair in cores.windows(2) {
        // Same rotation columns; only the translation differs per ring.
        assert!((pair[0].model.x_axis - pair[1].model.x_axis).length() < 1e-6);
        assert!((pair[0].model.z_axis - pair[1].model.z_axis).length() < 1e-6);
    }
}

#[test]
fn label_anchors_follow_height_and_toggles() {
    let mut state = SceneState::default();
    state.set_height(1.6);
    let anchors = label_anchors(&state);
    assert_eq!(anchors.len(), 5);
    let find = |kind: LabelKind| anchors.iter().find(|(k, _)| *k == kind).unwrap().1;
    assert!((find(LabelKind::GravityForce).y - 2.1).abs() < 1e-6);
    assert!((find(LabelKind::MagneticForce).y - 1.1).abs() < 1e-6);
    assert!((find(LabelKind::Mass).y - 3.1).abs() < 1e-6);

    state.set_show_forces(false);
    let gated = label_anchors(&state);
    assert_eq!(gated.len(), 3);
    assert!(!gated
        .iter()
        .any(|(k, _)| matches!(k, LabelKind::GravityForce | LabelKind::MagneticForce)));
}

#[test]
fn height_label_reads_in_centimeters() {
    let mut state = SceneState::default();
    state.set_height(1.6);
    assert_eq!(label_text(LabelKind::Height, &state), "Height: 160.0cm");
    state.set_height(0.5);
    assert_eq!(label_text(LabelKind::Height, &state), "Height: 50.0cm");
}
