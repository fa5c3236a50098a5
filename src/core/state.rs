use bevy::prelude::States;

/// `Loading` until the beam texture resolves, then `Running` for the rest of the app
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}
