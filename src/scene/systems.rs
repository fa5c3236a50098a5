use crate::core::camera::MainCamera;
use crate::core::config::DemoConfig;
use bevy::prelude::*;

pub fn set_background(mut commands: Commands, config: Res<DemoConfig>) {
    let [r, g, b] = config.scene.background;
    commands.insert_resource(ClearColor(Color::srgb(r, g, b)));
}

/// Large double-sided plane below the effect, turned towards the camera
pub fn spawn_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<DemoConfig>,
    camera: Query<&Transform, With<MainCamera>>,
) {
    let scene = &config.scene;
    let position = Vec3::from_array(scene.ground_position);
    let transform = match camera.single() {
        Ok(camera) => ground_facing(position, camera.translation),
        Err(_) => {
            warn!("No main camera, ground keeps its default orientation");
            Transform::from_translation(position)
        }
    };

    let mesh = Plane3d::new(Vec3::NEG_Z, Vec2::splat(scene.ground_size / 2.0))
        .mesh()
        .subdivisions(scene.ground_subdivisions);

    commands.spawn((
        Name::new("ground"),
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: hex_color(scene.ground_color),
            double_sided: true,
            cull_mode: None,
            ..default()
        })),
        transform,
    ));
}

pub fn spawn_light(mut commands: Commands, config: Res<DemoConfig>) {
    let scene = &config.scene;
    commands.spawn((
        Name::new("point_light"),
        PointLight {
            color: Color::WHITE,
            intensity: scene.light_intensity,
            range: scene.light_range,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(scene.light_position)),
    ));
}

/// Plane meshes face -Z, which `looking_at` points at the target
fn ground_facing(position: Vec3, camera: Vec3) -> Transform {
    if (camera - position).length_squared() <= f32::EPSILON {
        return Transform::from_translation(position);
    }
    Transform::from_translation(position).looking_at(camera, Vec3::Y)
}

fn hex_color(hex: u32) -> Color {
    let [_, r, g, b] = hex.to_be_bytes();
    Color::srgb_u8(r, g, b)
}
