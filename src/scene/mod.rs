mod systems;

use crate::constants::*;
use crate::scene::systems::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Scenery around the effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub background: [f32; 3],
    pub ground_size: f32,
    pub ground_subdivisions: u32,
    pub ground_color: u32,
    pub ground_position: [f32; 3],
    pub light_position: [f32; 3],
    pub light_range: f32,
    pub light_intensity: f32,
    pub camera_position: [f32; 3],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            background: [0.0, 0.0, 0.0],
            ground_size: GROUND_SIZE,
            ground_subdivisions: GROUND_SUBDIVISIONS,
            ground_color: GROUND_COLOR,
            ground_position: GROUND_POSITION,
            light_position: LIGHT_POSITION,
            light_range: LIGHT_RANGE,
            light_intensity: LIGHT_INTENSITY,
            camera_position: CAMERA_POSITION,
        }
    }
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        // after Startup so the camera is already there to face
        app.add_systems(PostStartup, (set_background, spawn_ground, spawn_light));
    }
}
