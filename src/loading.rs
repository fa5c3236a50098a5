use crate::AppState;
use bevy::prelude::*;
use bevy_asset_loader::prelude::*;

pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_loading_state(
            LoadingState::new(AppState::Loading)
                .continue_to_state(AppState::Running)
                .load_collection::<TextureAssets>(),
        )
        .add_systems(OnEnter(AppState::Running), log_textures_ready);
    }
}

#[derive(AssetCollection, Resource)]
pub struct TextureAssets {
    #[asset(path = "textures/texture1.png")]
    pub beam: Handle<Image>,
}

fn log_textures_ready() {
    info!("Textures loaded");
}
