// Host-side tests for the desk scene graph, camera framing and tessellation.

use glam::{Vec3, Vec4};
use portfolio_web::camera::Camera;
use portfolio_web::scene::mesh::tessellate;
use portfolio_web::scene::{Geometry, Light, Material, NodeKind, SceneGraph, SceneMesher};

#[test]
fn desk_setup_has_every_assembly_under_the_rig() {
    let scene = SceneGraph::desk_setup();
    let rig = scene.rig();
    let children: Vec<_> = scene.children(rig).collect();
    for name in [
        "desk",
        "main_monitor",
        "left_monitor",
        "right_monitor",
        "pc_tower",
        "chair",
        "keyboard",
        "mouse",
    ] {
        let id = scene.find(name).unwrap_or_else(|| panic!("{name} missing"));
        assert!(children.contains(&id), "{name} not parented to the rig");
    }
    assert_eq!(scene.node(rig).parent, Some(scene.root()));
}

#[test]
fn cooler_is_a_named_mesh_inside_the_tower() {
    let scene = SceneGraph::desk_setup();
    let cooler = scene.cooler();
    assert_eq!(scene.find("cpu_cooler"), Some(cooler));
    assert_eq!(scene.node(cooler).parent, scene.find("pc_tower"));
    assert!(matches!(scene.node(cooler).kind, NodeKind::Mesh { .. }));
}

#[test]
fn lights_match_the_room_setup() {
    let scene = SceneGraph::desk_setup();
    let lights = scene.lights();
    let points = lights
        .iter()
        .filter(|l| matches!(l.light, Light::Point { .. }))
        .count();
    let ambient = lights
        .iter()
        .filter(|l| matches!(l.light, Light::Ambient { .. }))
        .count();
    let directional: Vec<_> = lights
        .iter()
        .filter(|l| matches!(l.light, Light::Directional { .. }))
        .collect();
    assert_eq!(points, 3);
    assert_eq!(ambient, 1);
    assert_eq!(directional.len(), 1);
    assert!((directional[0].position - Vec3::new(-5.0, 10.0, 5.0)).length() < 1e-5);
}

#[test]
fn rig_rotation_carries_its_lights_but_not_room_lights() {
    let mut scene = SceneGraph::desk_setup();
    let glow = scene.find("pc_glow").unwrap();
    let room = scene.find("room_light").unwrap();
    let before_glow = scene.world_matrix(glow).transform_point3(Vec3::ZERO);
    let before_room = scene.world_matrix(room).transform_point3(Vec3::ZERO);

    let rig = scene.rig();
    scene.transform_mut(rig).rotation.y = std::f32::consts::PI;

    let after_glow = scene.world_matrix(glow).transform_point3(Vec3::ZERO);
    let after_room = scene.world_matrix(room).transform_point3(Vec3::ZERO);
    assert!((after_glow.x + before_glow.x).abs() < 1e-4);
    assert!((after_glow.z + before_glow.z).abs() < 1e-4);
    assert_eq!(after_room, before_room);
}

#[test]
fn camera_looks_at_the_desk() {
    let camera = Camera::framing_desk(1280, 720);
    let clip = camera.view_projection() * Vec4::new(0.0, 2.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(clip.w > 0.0);
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    assert!((0.0..=1.0).contains(&ndc.z));
    assert!((camera.fovy_radians - 45f32.to_radians()).abs() < 1e-6);
}

#[test]
fn whole_desk_fits_in_a_wide_view() {
    let scene = SceneGraph::desk_setup();
    let camera = Camera::framing_desk(1600, 900);
    let vp = camera.view_projection();
    for name in ["left_monitor", "right_monitor", "chair", "pc_tower"] {
        let p = scene
            .world_matrix(scene.find(name).unwrap())
            .transform_point3(Vec3::ZERO);
        let ndc = vp.project_point3(p);
        assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0, "{name} off screen");
    }
}

#[test]
fn zero_sized_viewport_keeps_a_finite_aspect() {
    let mut camera = Camera::framing_desk(0, 0);
    assert_eq!(camera.aspect, 1.0);
    camera.set_viewport(300, 0);
    assert!(camera.aspect.is_finite());
}

#[test]
fn primitive_vertex_counts() {
    let cube = tessellate(&Geometry::Box {
        width: 1.0,
        height: 2.0,
        depth: 3.0,
    });
    assert_eq!(cube.len(), 36);
    let plane = tessellate(&Geometry::Plane {
        width: 2.0,
        height: 1.0,
    });
    assert_eq!(plane.len(), 6);
    let cylinder = tessellate(&Geometry::Cylinder {
        radius_top: 1.0,
        radius_bottom: 1.0,
        height: 1.0,
        segments: 8,
    });
    // Side quad plus a cap triangle at each end, per segment
    assert_eq!(cylinder.len(), 8 * 12);
}

#[test]
fn box_normals_point_away_from_center() {
    for c in tessellate(&Geometry::Box {
        width: 2.0,
        height: 2.0,
        depth: 2.0,
    }) {
        assert!(c.position.dot(c.normal) > 0.0);
    }
}

#[test]
fn triangles_wind_counter_clockwise_around_their_normal() {
    let corners = tessellate(&Geometry::Box {
        width: 1.0,
        height: 1.0,
        depth: 1.0,
    });
    for tri in corners.chunks(3) {
        let face = (tri[1].position - tri[0].position).cross(tri[2].position - tri[0].position);
        assert!(face.dot(tri[0].normal) > 0.0);
    }
}

#[test]
fn mesher_orders_opaque_before_transparent() {
    let scene = SceneGraph::desk_setup();
    let mesher = SceneMesher::new(&scene);
    let mut verts = Vec::new();
    mesher.fill(&scene, &mut verts);
    assert_eq!(verts.len() as u32, mesher.vertex_count());

    let split = mesher.opaque_vertex_count() as usize;
    assert!(split > 0 && split < verts.len());
    assert!(verts[..split].iter().all(|v| v.color[3] == 1.0));
    assert!(verts[split..].iter().all(|v| v.color[3] < 1.0));
}

#[test]
fn mesher_follows_node_transforms() {
    let mut scene = SceneGraph::desk_setup();
    let mesher = SceneMesher::new(&scene);
    let mut before = Vec::new();
    mesher.fill(&scene, &mut before);

    let rig = scene.rig();
    scene.transform_mut(rig).rotation.y = 0.7;
    let mut after = Vec::new();
    mesher.fill(&scene, &mut after);

    assert_eq!(before.len(), after.len());
    assert!(before.iter().zip(&after).any(|(a, b)| a.position != b.position));
}

#[test]
fn glass_is_translucent_and_lit() {
    let glass = Material::Physical {
        color: [1.0; 3],
        opacity: 0.3,
        transmission: 0.9,
        roughness: 0.0,
    };
    assert!(glass.is_transparent());
    assert!(glass.is_lit());
    assert!(glass.opacity() >= 0.05 && glass.opacity() < 0.3);
    assert!(!Material::basic(0x00ffff).is_lit());
    assert!(!Material::standard(0xaaaaaa, 0.3, 0.9).is_transparent());
}
