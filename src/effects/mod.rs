pub mod beam;
pub mod components;
pub mod curve;
pub mod layout;
pub mod resources;
pub mod systems;

use crate::core::state::AppState;
use crate::effects::systems::setup_trail_effects;
use bevy::prelude::*;
use bevy_hanabi::prelude::*;

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(HanabiPlugin)
            .add_systems(OnEnter(AppState::Running), setup_trail_effects);
    }
}
