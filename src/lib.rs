pub mod constants;
pub mod core;
pub mod effects;
pub mod loading;
pub mod scene;
pub mod scheduler;

pub use crate::core::config::{ConfigError, DemoConfig};
pub use crate::core::state::AppState;

use crate::constants::CONFIG_PATH;
use crate::core::camera::CameraPlugin;
use crate::effects::EffectsPlugin;
use crate::loading::LoadingPlugin;
use crate::scene::ScenePlugin;
use crate::scheduler::SchedulerPlugin;
use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::prelude::*;

/// The trail demo: scenery right away, the particle batch and its groups
/// once the texture has loaded, and the restart scheduler every frame
pub struct SparksPlugin {
    pub config_path: String,
}

impl Default for SparksPlugin {
    fn default() -> Self {
        Self {
            config_path: CONFIG_PATH.to_string(),
        }
    }
}

impl Plugin for SparksPlugin {
    fn build(&self, app: &mut App) {
        let config = DemoConfig::load_or_default(&self.config_path);
        let cadence = config.cadence;

        app.insert_resource(config)
            .init_state::<AppState>()
            .add_plugins((
                CameraPlugin,
                ScenePlugin,
                LoadingPlugin,
                EffectsPlugin,
                SchedulerPlugin::new(cadence),
            ));

        #[cfg(debug_assertions)]
        {
            app.add_plugins(LogDiagnosticsPlugin::default());
        }
    }
}
