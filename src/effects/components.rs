use bevy::prelude::*;

/// Per-frame hook of an updatable node, called with the frame delta in seconds
pub type UpdateHook = fn(&mut Transform, f32);

/// Root of one effect group. The index is the group's position in creation order.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectGroup {
    pub index: usize,
}

/// What the scheduler may do with a node inside an effect group
#[derive(Component, Debug, Clone, Copy, Default)]
pub enum NodeCapability {
    #[default]
    Plain,
    Updatable(UpdateHook),
    /// Owns a particle spawner that is reset on restart
    Emitter,
}
