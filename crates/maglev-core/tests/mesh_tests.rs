use maglev_core::mesh::{
    cuboid, cylinder, grid_xz, mesh_count, plane_xz, scene_meshes, torus, wire_sphere, Topology,
};

#[test]
fn registry_covers_every_scene_mesh() {
    let meshes = scene_meshes();
    assert_eq!(meshes.len(), mesh_count());
    // 10 fixed slots + 8 field lines
    assert_eq!(meshes.len(), 18);
    for mesh in &meshes {
        assert!(!mesh.vertices.is_empty());
        assert!(!mesh.indices.is_empty());
        let max = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < max));
    }
}

#[test]
fn torus_grid_has_the_expected_counts() {
    let t = torus(0.25, 0.05, 16, 32);
    assert_eq!(t.topology, Topology::Triangles);
    assert_eq!(t.vertices.len(), (16 + 1) * (32 + 1));
    assert_eq!(t.indices.len(), 16 * 32 * 6);
}

#[test]
fn torus_normals_are_unit_length() {
    let t = torus(3.0, 0.02, 16, 32);
    for v in &t.vertices {
        let len = (v.normal[0].powi(2) + v.normal[1].powi(2) + v.normal[2].powi(2)).sqrt();
        assert!((len - 1.0).abs() < 1e-3);
    }
}

#[test]
fn torus_lies_in_the_xy_plane() {
    // The scene relies on this: rings stand upright, field lines are laid
    // flat with a quarter turn.
    let t = torus(0.25, 0.05, 16, 32);
    for v in &t.vertices {
        assert!(v.position[2].abs() <= 0.05 + 1e-5);
    }
}

#[test]
fn cuboid_is_six_quads() {
    let c = cuboid(2.0, 0.4, 1.0);
    assert_eq!(c.vertices.len(), 24);
    assert_eq!(c.indices.len(), 36);
    for v in &c.vertices {
        assert!(v.position[0].abs() <= 1.0 + 1e-6);
        assert!(v.position[1].abs() <= 0.2 + 1e-6);
        assert!(v.position[2].abs() <= 0.5 + 1e-6);
    }
}

#[test]
fn cone_has_an_apex_and_no_top_cap() {
    let cone = cylinder(0.0, 0.15, 0.3, 24);
    let apex_count = cone
        .vertices
        .iter()
        .filter(|v| (v.position[1] - 0.15).abs() < 1e-6 && v.position[0].abs() < 1e-6)
        .count();
    assert!(apex_count > 0);
    // side ring pairs + bottom cap only
    assert_eq!(cone.vertices.len(), (24 + 1) * 2 + 1 + (24 + 1));
}

#[test]
fn shaft_cylinder_spans_its_length() {
    let shaft = cylinder(0.05, 0.05, 0.8, 24);
    let min_y = shaft.vertices.iter().map(|v| v.position[1]).fold(f32::MAX, f32::min);
    let max_y = shaft.vertices.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
    assert!((min_y + 0.4).abs() < 1e-6);
    assert!((max_y - 0.4).abs() < 1e-6);
}

#[test]
fn grid_is_a_line_list_with_pairwise_indices() {
    let grid = grid_xz(10.0, 20);
    assert_eq!(grid.topology, Topology::Lines);
    // 21 lines in each direction, two endpoints per line
    assert_eq!(grid.vertices.len(), 21 * 4);
    assert_eq!(grid.indices.len() % 2, 0);
}

#[test]
fn ground_plane_is_a_single_quad() {
    let plane = plane_xz(10.0);
    assert_eq!(plane.vertices.len(), 4);
    assert_eq!(plane.indices.len(), 6);
    assert!(plane.vertices.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
}

#[test]
fn wire_sphere_sits_on_its_radius() {
    let sphere = wire_sphere(2.0, 12, 7, 32);
    assert_eq!(sphere.topology, Topology::Lines);
    assert_eq!(sphere.indices.len() % 2, 0);
    for v in &sphere.vertices {
        let r = (v.position[0].powi(2) + v.position[1].powi(2) + v.position[2].powi(2)).sqrt();
        assert!((r - 2.0).abs() < 1e-3);
    }
}

#[test]
fn field_line_radii_shrink_with_index() {
    let meshes = scene_meshes();
    let max_extent = |idx: usize| -> f32 {
        meshes[idx]
            .vertices
            .iter()
            .map(|v| (v.position[0].powi(2) + v.position[1].powi(2)).sqrt())
            .fold(f32::MIN, f32::max)
    };
    use maglev_core::mesh::ids::FIELD_LINE_BASE;
    for i in 1..8 {
        assert!(max_extent(FIELD_LINE_BASE + i) < max_extent(FIELD_LINE_BASE + i - 1));
    }
    // Outermost line reaches radius 3 plus its tube.
    assert!((max_extent(FIELD_LINE_BASE) - 3.02).abs() < 1e-2);
}
