mod systems;

use crate::core::camera::systems::spawn_camera;
use bevy::prelude::*;

/// Camera the ground plane is turned towards
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct MainCamera;

pub(crate) struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MainCamera>()
            .add_systems(Startup, spawn_camera);
    }
}
