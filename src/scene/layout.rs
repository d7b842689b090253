//! Hand-placed desk setup: desk, three monitors, PC tower, chair, peripherals
//! and lights. Inert configuration data; units roughly match a desk 18 wide.

use super::{hex, Geometry, Light, Material, SceneBuilder, SceneGraph, Transform};
use crate::constants::CYLINDER_SEGMENTS;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_6};

fn cuboid(width: f32, height: f32, depth: f32) -> Geometry {
    Geometry::Box {
        width,
        height,
        depth,
    }
}

fn cylinder(radius_top: f32, radius_bottom: f32, height: f32) -> Geometry {
    Geometry::Cylinder {
        radius_top,
        radius_bottom,
        height,
        segments: CYLINDER_SEGMENTS,
    }
}

fn plane(width: f32, height: f32) -> Geometry {
    Geometry::Plane { width, height }
}

struct Palette {
    desk: Material,
    silver_metal: Material,
    white_plastic: Material,
    white_leather: Material,
    chrome: Material,
    glass: Material,
    screen: Material,
    side_screen: Material,
    neon_cyan: Material,
    neon_purple: Material,
    rgb_component: Material,
}

impl Palette {
    fn white_rgb() -> Self {
        Self {
            desk: Material::standard(0xeeeeee, 0.2, 0.1),
            silver_metal: Material::standard(0xaaaaaa, 0.3, 0.9),
            white_plastic: Material::standard(0xffffff, 0.5, 0.0),
            white_leather: Material::standard(0xffffff, 0.6, 0.0),
            chrome: Material::standard(0xcccccc, 0.2, 0.8),
            glass: Material::Physical {
                color: hex(0xffffff),
                opacity: 0.3,
                transmission: 0.9,
                roughness: 0.0,
            },
            screen: Material::basic(0x00aaff),
            side_screen: Material::Basic {
                color: hex(0x0088cc),
                opacity: 0.8,
            },
            neon_cyan: Material::basic(0x00ffff),
            neon_purple: Material::basic(0xff00ff),
            rgb_component: Material::basic(0xff3366),
        }
    }
}

impl SceneGraph {
    /// Build the full desk setup under a `rig` group plus scene-level lights.
    pub fn desk_setup() -> Self {
        let m = Palette::white_rgb();
        let mut b = SceneBuilder::new();
        let root = b.root();
        let rig = b.group(root, "rig", Transform::default());

        // Desk top and legs
        let desk = b.group(rig, "desk", Transform::default());
        b.mesh(desk, cuboid(18.0, 0.5, 8.0), m.desk, Transform::default());
        b.mesh(desk, cuboid(1.0, 6.0, 6.0), m.silver_metal, Transform::at(-8.0, -3.25, 0.0));
        b.mesh(desk, cuboid(1.0, 6.0, 6.0), m.silver_metal, Transform::at(8.0, -3.25, 0.0));

        // Main ultrawide monitor
        let main = b.group(rig, "main_monitor", Transform::at(0.0, 4.0, -2.0));
        b.mesh(
            main,
            Geometry::Cylinder {
                radius_top: 1.0,
                radius_bottom: 1.5,
                height: 0.2,
                segments: 6,
            },
            m.silver_metal,
            Transform::at(0.0, -3.8, 0.0),
        );
        b.mesh(main, cylinder(0.3, 0.3, 4.0), m.silver_metal, Transform::at(0.0, -2.0, 0.0));
        b.mesh(main, cuboid(10.0, 4.5, 0.5), m.silver_metal, Transform::default());
        b.mesh(main, plane(9.6, 4.1), m.screen, Transform::at(0.0, 0.0, 0.26));

        // Side monitors, angled in toward the chair
        for (name, x, yaw) in [("left_monitor", -6.5, FRAC_PI_6), ("right_monitor", 6.5, -FRAC_PI_6)] {
            let side = b.group(rig, name, Transform::at(x, 4.0, -1.0).rotated(0.0, yaw, 0.0));
            b.mesh(side, cuboid(3.0, 5.0, 0.4), m.silver_metal, Transform::default());
            b.mesh(side, plane(2.6, 4.6), m.side_screen, Transform::at(0.0, 0.0, 0.21));
        }

        // PC tower with a glass side panel and visible internals
        let pc = b.group(rig, "pc_tower", Transform::at(6.5, 2.5, 2.0));
        b.mesh(pc, cuboid(2.5, 5.0, 5.0), m.silver_metal, Transform::default());
        b.mesh(pc, cuboid(0.5, 1.0, 3.5), m.rgb_component, Transform::default());
        let cooler = b.named_mesh(
            pc,
            "cpu_cooler",
            cylinder(0.6, 0.6, 0.5),
            m.neon_cyan,
            Transform::at(0.0, 1.5, 1.0).rotated(0.0, 0.0, FRAC_PI_2),
        );
        b.mesh(pc, cuboid(0.2, 1.5, 0.1), m.neon_purple, Transform::at(0.0, 1.5, 2.0));
        b.mesh(
            pc,
            plane(4.5, 4.5),
            m.glass,
            Transform::at(-1.26, 0.0, 0.0).rotated(0.0, -FRAC_PI_2, 0.0),
        );

        // Gaming chair on the floor in front of the desk
        let chair = b.group(rig, "chair", Transform::at(0.0, -3.25, 6.0).rotated(0.0, -0.2, 0.0));
        b.mesh(chair, cuboid(4.0, 0.5, 4.0), m.white_leather, Transform::at(0.0, 2.0, 0.0));
        b.mesh(
            chair,
            cuboid(3.5, 6.0, 0.5),
            m.white_leather,
            Transform::at(0.0, 5.0, 1.8).rotated(-0.1, 0.0, 0.0),
        );
        b.mesh(
            chair,
            cuboid(2.0, 1.5, 0.5),
            m.white_leather,
            Transform::at(0.0, 8.5, 2.1).rotated(-0.1, 0.0, 0.0),
        );
        for x in [-2.1, 2.1] {
            b.mesh(chair, cuboid(0.3, 0.5, 2.5), m.white_plastic, Transform::at(x, 3.0, 0.5));
            b.mesh(chair, cylinder(0.1, 0.1, 1.5), m.chrome, Transform::at(x, 2.25, 0.5));
        }
        b.mesh(chair, cylinder(0.3, 0.3, 2.0), m.chrome, Transform::at(0.0, 1.0, 0.0));
        b.mesh(chair, cuboid(4.0, 0.2, 0.4), m.chrome, Transform::at(0.0, 0.1, 0.0));
        b.mesh(
            chair,
            cuboid(4.0, 0.2, 0.4),
            m.chrome,
            Transform::at(0.0, 0.1, 0.0).rotated(0.0, FRAC_PI_2, 0.0),
        );

        // Peripherals
        b.named_mesh(rig, "keyboard", cuboid(4.0, 0.2, 1.5), m.silver_metal, Transform::at(0.0, 0.35, 2.0));
        b.named_mesh(rig, "mouse", cuboid(0.8, 0.4, 1.2), m.silver_metal, Transform::at(3.5, 0.4, 2.0));

        // Lights: glows ride with the rig, room lights stay put
        b.light(
            rig,
            "keyboard_glow",
            Light::Point {
                color: hex(0xff00ff),
                intensity: 0.5,
                distance: 2.0,
            },
            Transform::at(0.0, 0.5, 2.0),
        );
        b.light(
            rig,
            "screen_glow",
            Light::Point {
                color: hex(0x00ffff),
                intensity: 1.0,
                distance: 10.0,
            },
            Transform::at(0.0, 4.0, 2.0),
        );
        b.light(
            rig,
            "pc_glow",
            Light::Point {
                color: hex(0xff00ff),
                intensity: 1.5,
                distance: 8.0,
            },
            Transform::at(6.5, 2.5, 2.0),
        );
        b.light(
            root,
            "ambient",
            Light::Ambient {
                color: hex(0xffffff),
                intensity: 0.2,
            },
            Transform::default(),
        );
        b.light(
            root,
            "room_light",
            Light::Directional {
                color: hex(0xffffff),
                intensity: 0.5,
            },
            Transform::at(-5.0, 10.0, 5.0),
        );

        b.finish(rig, cooler)
    }
}
