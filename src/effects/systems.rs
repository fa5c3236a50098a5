use crate::core::config::DemoConfig;
use crate::effects::beam::build_beam_effect;
use crate::effects::components::{EffectGroup, NodeCapability};
use crate::effects::resources::ParticleBatch;
use crate::loading::TextureAssets;
use crate::scheduler::TrailScheduler;
use bevy::prelude::*;
use bevy_hanabi::prelude::*;

/// Runs once the beam texture is ready: builds the particle batch and every
/// effect group
pub fn setup_trail_effects(
    mut commands: Commands,
    mut effects: ResMut<Assets<EffectAsset>>,
    mut scheduler: ResMut<TrailScheduler>,
    textures: Res<TextureAssets>,
    config: Res<DemoConfig>,
) {
    let effect = effects.add(build_beam_effect(&config.beam));
    let batch = ParticleBatch::new(effect, textures.beam.clone());

    for index in 0..config.groups.count {
        let group = spawn_effect_group(&mut commands, &batch, &config, index);
        scheduler.push_group(group);
    }

    info!("Particle batch ready with {} trail group(s)", config.groups.count);
    commands.insert_resource(batch);
}

pub fn spawn_effect_group(
    commands: &mut Commands,
    batch: &ParticleBatch,
    config: &DemoConfig,
    index: usize,
) -> Entity {
    let position = config.groups.layout.position(index, config.groups.count);
    let visibility = if config.groups.visible {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };

    commands
        .spawn((
            Name::new(format!("trail_group_{index}")),
            EffectGroup { index },
            NodeCapability::Plain,
            Transform::from_translation(position),
            visibility,
        ))
        .with_children(|parent| {
            parent.spawn((
                Name::new("beam"),
                NodeCapability::Emitter,
                ParticleEffect::new(batch.effect.clone()),
                EffectMaterial {
                    images: vec![batch.texture.clone()],
                },
                Transform::IDENTITY,
            ));
        })
        .id()
}
