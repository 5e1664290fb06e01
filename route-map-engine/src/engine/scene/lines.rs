use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use constants::render_settings::{AXIS_X_COLOUR, AXIS_Y_COLOUR, AXIS_Z_COLOUR};

/// Two-vertex line mesh between `from` and `to`.
///
/// Kept in the main world as well so the endpoints can be rewritten each frame.
pub fn segment_mesh(from: Vec3, to: Vec3) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vec![from.to_array(), to.to_array()]);
    mesh.insert_indices(Indices::U32(vec![0, 1]));
    mesh
}

/// Replace the endpoints of a mesh built by `segment_mesh`.
pub fn set_segment_endpoints(mesh: &mut Mesh, from: Vec3, to: Vec3) {
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vec![from.to_array(), to.to_array()]);
}

/// Read back the endpoints of a segment mesh.
pub fn segment_endpoints(mesh: &Mesh) -> Option<(Vec3, Vec3)> {
    let positions = mesh.attribute(Mesh::ATTRIBUTE_POSITION)?.as_float3()?;
    match positions {
        [from, to] => Some((Vec3::from_array(*from), Vec3::from_array(*to))),
        _ => None,
    }
}

/// Axes helper: X red, Y green, Z blue, each `length` long from the origin.
pub fn axes_mesh(length: f32) -> Mesh {
    let vertices = vec![
        [0.0, 0.0, 0.0],
        [length, 0.0, 0.0],
        [0.0, 0.0, 0.0],
        [0.0, length, 0.0],
        [0.0, 0.0, 0.0],
        [0.0, 0.0, length],
    ];
    let colours = vec![
        AXIS_X_COLOUR,
        AXIS_X_COLOUR,
        AXIS_Y_COLOUR,
        AXIS_Y_COLOUR,
        AXIS_Z_COLOUR,
        AXIS_Z_COLOUR,
    ];

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colours);
    mesh.insert_indices(Indices::U32((0..6).collect()));
    mesh
}

pub fn line_material(colour: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: colour,
        unlit: true,
        ..default()
    }
}

/// Spawn a single coloured segment and return its entity.
pub fn spawn_segment(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    from: Vec3,
    to: Vec3,
    colour: Color,
    marker: impl Bundle,
) -> Entity {
    commands
        .spawn((
            Mesh3d(meshes.add(segment_mesh(from, to))),
            MeshMaterial3d(materials.add(line_material(colour))),
            Transform::IDENTITY,
            marker,
        ))
        .id()
}
