use bevy::prelude::*;

/// Written once for every emitter that was restarted
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectRestarted {
    pub group: Entity,
    pub emitter: Entity,
}
