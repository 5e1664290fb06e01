use bevy::pbr::wireframe::{Wireframe, WireframeColor};
use bevy::prelude::*;
use bevy::render::render_resource::Face;
use constants::render_settings::{
    AMBIENT_LIGHT_BRIGHTNESS, ORIGIN_MARKER_COLOUR, PYRAMID_COLOUR, PYRAMID_METALLIC,
    PYRAMID_ROUGHNESS, SPOT_LIGHT_INTENSITY, TRACKING_LINE_COLOUR, WIREFRAME_SPHERE_COLOUR,
};
use constants::scene_layout::{
    AXES_LENGTH, ORIGIN_MARKER_RADIUS, PYRAMID_HEIGHT, PYRAMID_POSITION, PYRAMID_RADIUS,
    PYRAMID_SIDES, SKY_RADIUS, SKY_SECTORS, SKY_STACKS, SPOT_LIGHT_ANGLE, SPOT_LIGHT_POSITIONS,
    WIREFRAME_SPHERE_RADIUS, WIREFRAME_SPHERE_SECTORS, WIREFRAME_SPHERE_STACKS,
};

use crate::engine::assets::scene_manifest::SceneConfig;
use crate::engine::camera::camera_reset::InitialView;
use crate::engine::camera::spawn_orbit_camera;
use crate::engine::loading::texture_loader::{PendingTextures, TexturedEntityKind};
use crate::engine::scene::billboard::{GateSprite, KindergartenSprite, spawn_billboard};
use crate::engine::scene::compass::spawn_compass;
use crate::engine::scene::lines::{axes_mesh, line_material, spawn_segment};
use crate::engine::systems::frame_loop::Spin;

#[derive(Component)]
pub struct GroundPlane;

#[derive(Component)]
pub struct SkySphere;

#[derive(Component)]
pub struct WireframeSphere;

#[derive(Component)]
pub struct Pyramid;

#[derive(Component)]
pub struct OriginMarker;

#[derive(Component)]
pub struct AxesHelper;

/// Line from the origin to the wireframe sphere, rewritten every frame.
#[derive(Component)]
pub struct TrackingLine;

/// Build the route map once the scene configuration is known. Textured
/// entities are only requested here and appear when their images arrive.
pub fn assemble_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut pending: ResMut<PendingTextures>,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
) {
    spawn_orbit_camera(&mut commands, &config);
    commands.insert_resource(InitialView::from_config(&config));

    pending.request(
        TexturedEntityKind::GroundPlane,
        asset_server.load(config.ground_texture.clone()),
    );
    pending.request(
        TexturedEntityKind::SkySphere,
        asset_server.load(config.sky_texture.clone()),
    );

    // Only the edges are visible; the faces are fully transparent.
    commands.spawn((
        Mesh3d(meshes.add(
            Sphere::new(WIREFRAME_SPHERE_RADIUS)
                .mesh()
                .uv(WIREFRAME_SPHERE_SECTORS, WIREFRAME_SPHERE_STACKS),
        )),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::NONE,
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        })),
        Wireframe,
        WireframeColor {
            color: WIREFRAME_SPHERE_COLOUR,
        },
        Transform::IDENTITY,
        Spin::default(),
        WireframeSphere,
        Name::new("WireframeSphere"),
    ));

    spawn_segment(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::ZERO,
        Vec3::ZERO,
        TRACKING_LINE_COLOUR,
        (TrackingLine, Name::new("TrackingLine")),
    );

    let pyramid_position = Vec3::from_array(PYRAMID_POSITION);
    commands.spawn((
        Mesh3d(meshes.add(
            Cone {
                radius: PYRAMID_RADIUS,
                height: PYRAMID_HEIGHT,
            }
            .mesh()
            .resolution(PYRAMID_SIDES),
        )),
        MeshMaterial3d(materials.add(pyramid_material())),
        Transform::from_translation(pyramid_position),
        Spin::default(),
        Pyramid,
        Name::new("Pyramid"),
    ));

    for position in SPOT_LIGHT_POSITIONS {
        commands.spawn((
            SpotLight {
                color: Color::WHITE,
                intensity: SPOT_LIGHT_INTENSITY,
                outer_angle: SPOT_LIGHT_ANGLE,
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(Vec3::from_array(position))
                .looking_at(pyramid_position, Vec3::Y),
        ));
    }
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_LIGHT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(ORIGIN_MARKER_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: ORIGIN_MARKER_COLOUR,
            unlit: true,
            ..default()
        })),
        Transform::IDENTITY,
        OriginMarker,
    ));

    commands.spawn((
        Mesh3d(meshes.add(axes_mesh(AXES_LENGTH))),
        MeshMaterial3d(materials.add(line_material(Color::WHITE))),
        Transform::IDENTITY,
        AxesHelper,
    ));

    spawn_billboard(
        &mut commands,
        &mut meshes,
        &mut materials,
        asset_server.load(config.gate_icon.clone()),
        config.gate_position,
        config.sprite_scale,
        (GateSprite, Name::new("GateSprite")),
    );
    spawn_billboard(
        &mut commands,
        &mut meshes,
        &mut materials,
        asset_server.load(config.kindergarten_icon.clone()),
        config.kindergarten_position,
        config.sprite_scale,
        (KindergartenSprite, Name::new("KindergartenSprite")),
    );

    spawn_compass(&mut commands, &asset_server, &config.compass_icon);

    info!("✓ Scene assembled, waiting on ground and sky textures");
}

fn pyramid_material() -> StandardMaterial {
    StandardMaterial {
        base_color: PYRAMID_COLOUR,
        metallic: PYRAMID_METALLIC,
        perceptual_roughness: PYRAMID_ROUGHNESS,
        ..default()
    }
}

fn ground_material(texture: Handle<Image>) -> StandardMaterial {
    StandardMaterial {
        base_color_texture: Some(texture),
        unlit: true,
        cull_mode: None,
        ..default()
    }
}

/// The sky is seen from inside, so front faces are culled.
fn sky_material(texture: Handle<Image>) -> StandardMaterial {
    StandardMaterial {
        base_color_texture: Some(texture),
        unlit: true,
        cull_mode: Some(Face::Front),
        ..default()
    }
}

pub fn spawn_ground_plane(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    texture: Handle<Image>,
    size: f32,
) -> Entity {
    commands
        .spawn((
            Mesh3d(meshes.add(Plane3d::default().mesh().size(size, size))),
            MeshMaterial3d(materials.add(ground_material(texture))),
            Transform::IDENTITY,
            GroundPlane,
            Name::new("GroundPlane"),
        ))
        .id()
}

pub fn spawn_sky_sphere(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    texture: Handle<Image>,
) -> Entity {
    commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(SKY_RADIUS).mesh().uv(SKY_SECTORS, SKY_STACKS))),
            MeshMaterial3d(materials.add(sky_material(texture))),
            Transform::IDENTITY,
            SkySphere,
            Name::new("SkySphere"),
        ))
        .id()
}
