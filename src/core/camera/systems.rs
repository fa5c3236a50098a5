use crate::core::camera::MainCamera;
use crate::core::config::DemoConfig;
use bevy::prelude::*;

pub fn spawn_camera(mut commands: Commands, config: Res<DemoConfig>) {
    let position = Vec3::from_array(config.scene.camera_position);
    commands.spawn((
        Name::new("main_camera"),
        Camera3d::default(),
        Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    info!("Camera spawned at {position}");
}
