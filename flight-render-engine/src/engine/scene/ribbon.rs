use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

use crate::engine::flight::curve::{FlightPath, FlightRoute};
use constants::flight::RIBBON_STEPS;
use constants::render_settings::{RIBBON_HALF_HEIGHT, RIBBON_Y_OFFSET};

#[derive(Component)]
pub struct PathRibbon;

/// Spawn the two rendered path ribbons, offset slightly below the route so
/// the airplane flies above them.
pub fn spawn_path_ribbons(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    route: &FlightRoute,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    for (path, name) in [
        (&route.camera_path, "flight_path_ribbon"),
        (&route.decorative_path, "decorative_path_ribbon"),
    ] {
        commands.spawn((
            Mesh3d(meshes.add(create_ribbon_mesh(path, RIBBON_STEPS, RIBBON_HALF_HEIGHT))),
            MeshMaterial3d(material.clone()),
            Transform::from_xyz(0.0, RIBBON_Y_OFFSET, 0.0),
            PathRibbon,
            Name::new(name),
        ));
    }
}

/// Extrude a thin vertical ribbon along the path: two vertices per sample,
/// one quad per step.
pub fn create_ribbon_mesh(path: &FlightPath, steps: usize, half_height: f32) -> Mesh {
    let samples = path.sample_positions(steps);

    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(samples.len() * 2);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(samples.len() * 2);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(samples.len() * 2);

    for (i, point) in samples.iter().enumerate() {
        let t = i as f32 / (samples.len() - 1) as f32;
        let tangent = path.tangent_at(t);
        let normal = tangent.cross(Vec3::Y).normalize_or_zero();

        positions.push([point.x, point.y - half_height, point.z]);
        positions.push([point.x, point.y + half_height, point.z]);
        normals.push(normal.to_array());
        normals.push(normal.to_array());
        uvs.push([t, 0.0]);
        uvs.push([t, 1.0]);
    }

    let mut indices: Vec<u32> = Vec::with_capacity(steps * 6);
    for i in 0..steps as u32 {
        let a = i * 2;
        let b = a + 1;
        let c = a + 2;
        let d = a + 3;
        indices.extend_from_slice(&[a, c, b, b, c, d]);
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}
