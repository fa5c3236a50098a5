pub mod events;
pub mod logic;
pub mod systems;

use crate::scheduler::events::EffectRestarted;
use crate::scheduler::logic::{EffectScheduler, RestartCadence};
use crate::scheduler::systems::*;
use bevy::prelude::*;

/// Scheduler over the effect group entities
#[derive(Resource, Deref, DerefMut)]
pub struct TrailScheduler(pub EffectScheduler<Entity>);

impl TrailScheduler {
    pub fn new(cadence: RestartCadence) -> Self {
        Self(EffectScheduler::new(cadence))
    }
}

/// Drives effect groups once per frame. Has no rendering dependencies so it
/// also runs headless.
pub struct SchedulerPlugin {
    cadence: RestartCadence,
}

impl SchedulerPlugin {
    pub fn new(cadence: RestartCadence) -> Self {
        Self { cadence }
    }
}

impl Plugin for SchedulerPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<EffectRestarted>()
            .insert_resource(TrailScheduler::new(self.cadence))
            .add_systems(Update, (forget_despawned_groups, tick_effects).chain());
    }
}
