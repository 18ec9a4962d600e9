//! Per-frame scene assembly.
//!
//! `build_scene` is the whole update pass: it maps (elapsed time, scene
//! state) to the instance list the renderer draws, with no retained
//! per-element state. Label anchors for the DOM overlay come from the
//! same inputs.

use glam::{Mat4, Vec3, Vec4};
use smallvec::SmallVec;

use crate::animate;
use crate::constants::{
    CABIN_LOCAL_Y, CANOPY_LOCAL_Y, CANOPY_OPACITY, CHASSIS_LOCAL_Y, COLOR_CABIN, COLOR_CANOPY,
    COLOR_CHASSIS, COLOR_EARTH_FIELD, COLOR_FIELD_LINE, COLOR_GRAVITY, COLOR_GRID, COLOR_GROUND,
    COLOR_MAGNETIC, COLOR_RING, EARTH_FIELD_OPACITY, EARTH_FIELD_Y, FIELD_CAPTION_ANCHOR,
    FIELD_LINE_COUNT, FORCE_ANCHOR_OFFSET, FORCE_EMISSIVE, FORCE_HEAD_OFFSET, FORCE_LABEL_X,
    GROUND_Y, HEIGHT_LABEL_X, MASS_LABEL_RISE, RING_EMISSIVE, RING_GLOW_OPACITY, RING_LOCAL_Y,
    RING_OFFSETS_X,
};
use crate::format;
use crate::mesh::ids;
use crate::state::SceneState;

/// One drawable element for the current frame: a mesh id from the
/// registry, a world transform and material inputs for the shared shader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Instance {
    pub mesh: usize,
    pub model: Mat4,
    pub color: Vec4,
    pub emissive: f32,
}

/// Text overlay slots recomputed per frame alongside the instances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelKind {
    Mass,
    Height,
    FieldCaption,
    GravityForce,
    MagneticForce,
}

#[inline]
fn rgba(rgb: [f32; 3], alpha: f32) -> Vec4 {
    Vec4::new(rgb[0], rgb[1], rgb[2], alpha)
}

/// Rebuild the frame's instance list. Output depends only on the
/// arguments; two calls with equal inputs produce identical lists.
pub fn build_scene(t: f32, state: &SceneState, out: &mut Vec<Instance>) {
    out.clear();
    ground(out);
    vehicle(t, state.levitation_height, out);
    if state.show_field_lines {
        field_lines(t, out);
    }
    earth_field(t, out);
    if state.show_forces {
        force_vectors(state.levitation_height, out);
    }
}

fn ground(out: &mut Vec<Instance>) {
    out.push(Instance {
        mesh: ids::GROUND,
        model: Mat4::from_translation(Vec3::new(0.0, GROUND_Y, 0.0)),
        color: rgba(COLOR_GROUND, 1.0),
        emissive: 0.0,
    });
    out.push(Instance {
        mesh: ids::GRID,
        model: Mat4::IDENTITY,
        color: rgba(COLOR_GRID, 1.0),
        emissive: 0.0,
    });
}

fn vehicle(t: f32, height: f32, out: &mut Vec<Instance>) {
    let group = Mat4::from_translation(Vec3::new(0.0, animate::vehicle_y(t, height), 0.0))
        * Mat4::from_rotation_z(animate::vehicle_roll(t));

    out.push(Instance {
        mesh: ids::CHASSIS,
        model: group * Mat4::from_translation(Vec3::new(0.0, CHASSIS_LOCAL_Y, 0.0)),
        color: rgba(COLOR_CHASSIS, 1.0),
        emissive: 0.0,
    });
    out.push(Instance {
        mesh: ids::CABIN,
        model: group * Mat4::from_translation(Vec3::new(0.0, CABIN_LOCAL_Y, 0.0)),
        color: rgba(COLOR_CABIN, 1.0),
        emissive: 0.0,
    });
    out.push(Instance {
        mesh: ids::CANOPY,
        model: group * Mat4::from_translation(Vec3::new(0.0, CANOPY_LOCAL_Y, 0.0)),
        color: rgba(COLOR_CANOPY, CANOPY_OPACITY),
        emissive: 0.0,
    });

    // The rings ride the vehicle group, so they inherit hover and roll.
    let spin = Mat4::from_rotation_y(animate::ring_yaw(t));
    for x in RING_OFFSETS_X {
        let ring = group * Mat4::from_translation(Vec3::new(x, RING_LOCAL_Y, 0.0)) * spin;
        out.push(Instance {
            mesh: ids::RING_CORE,
            model: ring,
            color: rgba(COLOR_RING, 1.0),
            emissive: RING_EMISSIVE,
        });
        out.push(Instance {
            mesh: ids::RING_GLOW,
            model: ring,
            color: rgba(COLOR_RING, RING_GLOW_OPACITY),
            emissive: 0.0,
        });
    }
}

fn field_lines(t: f32, out: &mut Vec<Instance>) {
    // Quarter turn lays the XY-plane torus flat beneath the vehicle.
    let flat = Mat4::from_rotation_x(std::f32::consts::FRAC_PI_2);
    for i in 0..FIELD_LINE_COUNT {
        let offset = animate::field_line_offset(t, i);
        out.push(Instance {
            mesh: ids::FIELD_LINE_BASE + i,
            model: Mat4::from_translation(Vec3::new(0.0, offset, 0.0)) * flat,
            color: rgba(COLOR_FIELD_LINE, animate::field_line_opacity(offset)),
            emissive: 0.0,
        });
    }
}

fn earth_field(t: f32, out: &mut Vec<Instance>) {
    out.push(Instance {
        mesh: ids::EARTH_FIELD,
        model: Mat4::from_translation(Vec3::new(0.0, EARTH_FIELD_Y, 0.0))
            * Mat4::from_rotation_y(animate::earth_field_yaw(t)),
        color: rgba(COLOR_EARTH_FIELD, EARTH_FIELD_OPACITY),
        emissive: 0.0,
    });
}

fn force_vectors(height: f32, out: &mut Vec<Instance>) {
    // Gravity pulls down from above the vehicle.
    let gravity = Mat4::from_translation(Vec3::new(0.0, height + FORCE_ANCHOR_OFFSET, 0.0));
    out.push(Instance {
        mesh: ids::FORCE_SHAFT,
        model: gravity,
        color: rgba(COLOR_GRAVITY, 1.0),
        emissive: FORCE_EMISSIVE,
    });
    out.push(Instance {
        mesh: ids::FORCE_HEAD,
        model: gravity
            * Mat4::from_translation(Vec3::new(0.0, -FORCE_HEAD_OFFSET, 0.0))
            * Mat4::from_rotation_z(std::f32::consts::PI),
        color: rgba(COLOR_GRAVITY, 1.0),
        emissive: FORCE_EMISSIVE,
    });

    // Magnetic repulsion pushes up from below.
    let magnetic = Mat4::from_translation(Vec3::new(0.0, height - FORCE_ANCHOR_OFFSET, 0.0));
    out.push(Instance {
        mesh: ids::FORCE_SHAFT,
        model: magnetic,
        color: rgba(COLOR_MAGNETIC, 1.0),
        emissive: FORCE_EMISSIVE,
    });
    out.push(Instance {
        mesh: ids::FORCE_HEAD,
        model: magnetic * Mat4::from_translation(Vec3::new(0.0, FORCE_HEAD_OFFSET, 0.0)),
        color: rgba(COLOR_MAGNETIC, 1.0),
        emissive: FORCE_EMISSIVE,
    });
}

/// World anchors for the text overlay this frame. Force labels are gated
/// together with the force glyphs.
pub fn label_anchors(state: &SceneState) -> SmallVec<[(LabelKind, Vec3); 5]> {
    let h = state.levitation_height;
    let mut anchors: SmallVec<[(LabelKind, Vec3); 5]> = SmallVec::new();
    anchors.push((LabelKind::Mass, Vec3::new(0.0, h + MASS_LABEL_RISE, 0.0)));
    anchors.push((LabelKind::Height, Vec3::new(HEIGHT_LABEL_X, h, 0.0)));
    anchors.push((LabelKind::FieldCaption, Vec3::from(FIELD_CAPTION_ANCHOR)));
    if state.show_forces {
        anchors.push((
            LabelKind::GravityForce,
            Vec3::new(FORCE_LABEL_X, h + FORCE_ANCHOR_OFFSET, 0.0),
        ));
        anchors.push((
            LabelKind::MagneticForce,
            Vec3::new(FORCE_LABEL_X, h - FORCE_ANCHOR_OFFSET, 0.0),
        ));
    }
    anchors
}

pub fn label_text(kind: LabelKind, state: &SceneState) -> String {
    match kind {
        LabelKind::Mass => format::MASS_LABEL.to_string(),
        LabelKind::Height => format!("Height: {}", format::height_cm_label(state.levitation_height)),
        LabelKind::FieldCaption => format::FIELD_CAPTION.to_string(),
        LabelKind::GravityForce => format::GRAVITY_FORCE_LABEL.to_string(),
        LabelKind::MagneticForce => format::MAGNETIC_FORCE_LABEL.to_string(),
    }
}
