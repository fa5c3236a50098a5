use bevy::prelude::*;
use bevy_hanabi::prelude::*;

/// The shared particle batch: one effect asset and one texture used by every
/// group. It only exists once the texture has loaded.
///
/// Hanabi's own systems simulate and draw the particles; `update` does not
/// drive them. `elapsed` and `frames` only count how long the batch has been
/// ticked by the scheduler.
#[derive(Resource, Debug, Clone)]
pub struct ParticleBatch {
    pub effect: Handle<EffectAsset>,
    pub texture: Handle<Image>,
    /// Seconds of frame time seen since the batch was created
    pub elapsed: f32,
    /// Frames ticked since the batch was created
    pub frames: u64,
}

impl ParticleBatch {
    pub fn new(effect: Handle<EffectAsset>, texture: Handle<Image>) -> Self {
        Self {
            effect,
            texture,
            elapsed: 0.0,
            frames: 0,
        }
    }

    pub fn update(&mut self, delta: f32) {
        self.elapsed += delta;
        self.frames += 1;
    }
}
