use super::color::{hsl, srgb_hex};
use super::geometry::{capsule, dodecahedron, icosahedron, mountain_range, torus_knot};
use super::terrain::{dune_floor, DuneRipple};
use super::{Atmosphere, Geometry, Light, Material, NodeId, NodeRole, Scene, SceneNode, Transform};
use crate::constants::*;
use crate::content::ContentKind;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Build the full scene. `rng` drives star placement and the coloured
/// accent lights; pass `rand::thread_rng()` for visual variety or a seeded
/// generator for reproducible output.
pub fn build_scene<R: Rng + ?Sized>(rng: &mut R) -> Scene {
    let mut nodes = Vec::new();

    let floor = dune_floor(FLOOR_SIZE, FLOOR_SEGMENTS);
    let dunes = DuneRipple::new(NodeId(nodes.len()), &floor);
    nodes.push(SceneNode::new(
        "desert-floor",
        NodeRole::Dunes,
        Transform::at(Vec3::new(0.0, FLOOR_Y, 0.0)),
        Geometry::Mesh(floor),
        Material::matte(srgb_hex(0xe0c097)),
    ));

    let slate = Material::matte(srgb_hex(0x475569));
    for i in 0..MOUNTAIN_RANGES {
        nodes.push(SceneNode::new(
            "mountains",
            NodeRole::Scenery,
            Transform::at(Vec3::new(
                0.0,
                FLOOR_Y,
                MOUNTAIN_BASE_Z - i as f32 * MOUNTAIN_SPACING_Z,
            )),
            Geometry::Mesh(mountain_range(
                i,
                MOUNTAIN_WIDTH,
                MOUNTAIN_DEPTH,
                MOUNTAIN_SEGMENTS,
            )),
            slate,
        ));
    }

    nodes.push(SceneNode::new(
        "stars",
        NodeRole::Scenery,
        Transform::at(Vec3::ZERO),
        Geometry::Points(starfield(rng, STAR_COUNT)),
        Material {
            opacity: 0.8,
            ..Material::matte([1.0, 1.0, 1.0])
        },
    ));

    nodes.push(SceneNode::new(
        "character",
        NodeRole::Character,
        Transform::at(Vec3::new(0.0, CHARACTER_GROUND_Y, 0.0)),
        Geometry::Mesh(capsule(0.5, 1.0, 4, 8)),
        Material::matte(srgb_hex(0x7e22ce)),
    ));

    for kind in ContentKind::ALL {
        nodes.push(marker(kind));
    }

    let lights = lights(rng);
    let sky = srgb_hex(SKY_HEX);
    let scene = Scene::new(
        nodes,
        lights,
        Atmosphere {
            background: sky,
            fog_color: sky,
            fog_density: FOG_DENSITY,
        },
        Some(dunes),
    );
    log::info!(
        "[scene] nodes={} interactive={} lights={}",
        scene.nodes().len(),
        scene.interactive().len(),
        scene.lights.len()
    );
    scene
}

fn marker(kind: ContentKind) -> SceneNode {
    let (name, mesh, color, emissive, slot) = match kind {
        ContentKind::Experience => ("experience", dodecahedron(1.0), 0x9333ea, 0x4c1d95, 0),
        ContentKind::Projects => (
            "projects",
            torus_knot(0.7, 0.3, 100, 16, 2, 3),
            0x10b981,
            0x065f46,
            1,
        ),
        ContentKind::Skills => ("skills", icosahedron(1.0), 0x3b82f6, 0x1e40af, 2),
    };
    SceneNode::new(
        name,
        NodeRole::Interactive { kind, rotate: true },
        Transform::at(Vec3::from(MARKER_POSITIONS[slot])),
        Geometry::Mesh(mesh),
        Material {
            color: srgb_hex(color),
            emissive: srgb_hex(emissive),
            emissive_intensity: 0.5,
            metalness: 0.8,
            roughness: 0.2,
            opacity: 1.0,
        },
    )
}

/// Uniform points on a spherical shell, folded above the horizon.
fn starfield<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let theta = TAU * rng.gen::<f32>();
            let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
            let radius = STAR_RADIUS_MIN + rng.gen::<f32>() * STAR_RADIUS_SPAN;
            Vec3::new(
                radius * phi.sin() * theta.cos(),
                (radius * phi.cos()).abs(),
                radius * phi.sin() * theta.sin(),
            )
        })
        .collect()
}

fn lights<R: Rng + ?Sized>(rng: &mut R) -> Vec<Light> {
    let mut lights = vec![
        Light::Ambient {
            color: [1.0, 1.0, 1.0],
            intensity: 0.2,
        },
        Light::Directional {
            position: Vec3::new(5.0, 5.0, 5.0),
            color: [1.0, 1.0, 1.0],
            intensity: 0.5,
        },
        Light::Point {
            position: Vec3::new(0.0, 10.0, 0.0),
            color: srgb_hex(0xb39ddb),
            intensity: 1.0,
            range: 20.0,
        },
    ];
    for _ in 0..5 {
        let position = Vec3::new(
            (rng.gen::<f32>() - 0.5) * 50.0,
            rng.gen::<f32>() * 10.0 + 5.0,
            (rng.gen::<f32>() - 0.5) * 50.0,
        );
        lights.push(Light::Point {
            position,
            color: hsl(rng.gen::<f32>(), 0.7, 0.5),
            intensity: rng.gen::<f32>() * 0.5 + 0.5,
            range: rng.gen::<f32>() * 20.0 + 10.0,
        });
    }
    lights
}
