use super::TrailScheduler;
use super::events::EffectRestarted;
use super::logic::EffectHost;
use crate::effects::components::{EffectGroup, NodeCapability};
use crate::effects::resources::ParticleBatch;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_hanabi::prelude::*;

type NodeData = (
    &'static NodeCapability,
    Option<&'static mut Transform>,
    Option<&'static mut EffectSpawner>,
);

/// Everything the scheduler touches in the ECS world
#[derive(SystemParam)]
pub struct EffectNodes<'w, 's> {
    hierarchy: Query<'w, 's, &'static Children>,
    nodes: Query<'w, 's, NodeData>,
    batch: Option<ResMut<'w, ParticleBatch>>,
    restarted: MessageWriter<'w, EffectRestarted>,
}

impl EffectNodes<'_, '_> {
    /// The group root followed by all its descendants, depth first
    fn group_nodes(&self, group: Entity) -> Vec<Entity> {
        std::iter::once(group)
            .chain(self.hierarchy.iter_descendants(group))
            .collect()
    }
}

impl EffectHost<Entity> for EffectNodes<'_, '_> {
    fn update_group(&mut self, group: &Entity, delta: f32) {
        for node in self.group_nodes(*group) {
            let Ok((capability, transform, _)) = self.nodes.get_mut(node) else {
                continue;
            };
            if let (NodeCapability::Updatable(hook), Some(mut transform)) = (*capability, transform) {
                hook(&mut transform, delta);
            }
        }
    }

    fn restart_group(&mut self, group: &Entity) {
        for node in self.group_nodes(*group) {
            let Ok((capability, _, spawner)) = self.nodes.get_mut(node) else {
                continue;
            };
            if !matches!(capability, NodeCapability::Emitter) {
                continue;
            }
            if let Some(mut spawner) = spawner {
                spawner.reset();
            }
            debug!("Restarted emitter {node} in group {group}");
            self.restarted.write(EffectRestarted {
                group: *group,
                emitter: node,
            });
        }
    }

    fn update_batch(&mut self, delta: f32) {
        if let Some(batch) = self.batch.as_mut() {
            batch.update(delta);
        }
    }
}

/// The per-frame callback: update hooks, staggered restarts, batch tick.
/// Runs on wall-clock time; virtual time caps long frames at 250 ms, which
/// would stretch the restart cadence after a stall.
pub fn tick_effects(
    time: Res<Time<Real>>,
    mut scheduler: ResMut<TrailScheduler>,
    mut host: EffectNodes,
) {
    scheduler.on_frame(time.delta_secs(), &mut host);
}

/// Drops groups that were despawned so their slots are not restarted
pub fn forget_despawned_groups(
    mut scheduler: ResMut<TrailScheduler>,
    groups: Query<(), With<EffectGroup>>,
) {
    let before = scheduler.groups().len();
    scheduler.retain_groups(|group| groups.contains(*group));
    let removed = before - scheduler.groups().len();
    if removed > 0 {
        info!("Forgot {removed} despawned effect group(s)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::SchedulerPlugin;
    use crate::scheduler::logic::RestartCadence;
    use bevy::ecs::message::Messages;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    fn test_app() -> App {
        test_app_with_frame(Duration::from_millis(200))
    }

    fn test_app_with_frame(frame: Duration) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(frame))
            .add_plugins(SchedulerPlugin::new(RestartCadence::default()));
        app
    }

    fn spawn_group(app: &mut App, child: NodeCapability) -> (Entity, Entity) {
        let world = app.world_mut();
        let group = world
            .spawn((EffectGroup { index: 0 }, NodeCapability::Plain, Transform::default()))
            .id();
        let node = world.spawn((child, Transform::default(), ChildOf(group))).id();
        world.resource_mut::<TrailScheduler>().push_group(group);
        (group, node)
    }

    fn rise(transform: &mut Transform, delta: f32) {
        transform.translation.y += delta;
    }

    #[test]
    fn test_frames_before_texture_load_are_noop() {
        let mut app = test_app();

        for _ in 0..5 {
            app.update();
        }

        let scheduler = app.world().resource::<TrailScheduler>();
        assert!(scheduler.groups().is_empty());
        assert_eq!(scheduler.restarts_issued(), 0);
        assert!(app.world().get_resource::<ParticleBatch>().is_none());
    }

    #[test]
    fn test_emitter_in_group_is_restarted_in_first_slot() {
        let mut app = test_app();
        spawn_group(&mut app, NodeCapability::Emitter);

        for _ in 0..3 {
            app.update();
        }

        let scheduler = app.world().resource::<TrailScheduler>();
        assert_eq!(scheduler.restarts_issued(), 1);
        assert_eq!(scheduler.timer().refresh_index(), 1);
    }

    #[test]
    fn test_emitter_is_restarted_again_after_cycle_wraps() {
        let mut app = test_app();
        let (group, emitter) = spawn_group(&mut app, NodeCapability::Emitter);
        let mut restarted = Vec::new();

        // 16 frames of 0.2s cover one 2s wrap and the first slot after it
        for _ in 0..16 {
            app.update();
            let mut messages = app.world_mut().resource_mut::<Messages<EffectRestarted>>();
            restarted.extend(messages.drain());
        }

        let scheduler = app.world().resource::<TrailScheduler>();
        assert_eq!(scheduler.restarts_issued(), 2);
        assert_eq!(scheduler.timer().refresh_index(), 1);
        assert_eq!(
            restarted,
            vec![EffectRestarted { group, emitter }, EffectRestarted { group, emitter }]
        );
    }

    #[test]
    fn test_long_frames_are_not_clamped() {
        let mut app = test_app_with_frame(Duration::from_millis(400));

        for _ in 0..3 {
            app.update();
        }

        // virtual time would cap each frame at 0.25s, at most 0.75s in total
        let scheduler = app.world().resource::<TrailScheduler>();
        assert!(scheduler.timer().total_time() > 0.76);
    }

    #[test]
    fn test_plain_nodes_are_not_restarted() {
        let mut app = test_app();
        let (group, _) = spawn_group(&mut app, NodeCapability::Plain);
        app.world_mut()
            .resource_mut::<Messages<EffectRestarted>>()
            .clear();

        for _ in 0..3 {
            app.update();
        }

        // the group slot is consumed, but no emitter message is written
        let scheduler = app.world().resource::<TrailScheduler>();
        assert_eq!(scheduler.groups(), &[group]);
        let messages = app.world().resource::<Messages<EffectRestarted>>();
        assert!(messages.is_empty());
    }

    #[test]
    fn test_update_hook_receives_frame_delta() {
        let mut app = test_app();
        let (_, node) = spawn_group(&mut app, NodeCapability::Updatable(rise));

        for _ in 0..3 {
            app.update();
        }

        let transform = app.world().get::<Transform>(node).unwrap();
        assert!(transform.translation.y > 0.0);
    }

    #[test]
    fn test_batch_is_ticked_once_per_frame_when_present() {
        let mut app = test_app();
        app.insert_resource(ParticleBatch::new(Handle::default(), Handle::default()));

        for _ in 0..4 {
            app.update();
        }

        let batch = app.world().resource::<ParticleBatch>();
        assert_eq!(batch.frames, 4);
        assert!(batch.elapsed > 0.0);
    }

    #[test]
    fn test_despawned_group_is_forgotten() {
        let mut app = test_app();
        let (group, _) = spawn_group(&mut app, NodeCapability::Emitter);
        app.world_mut().entity_mut(group).despawn();

        app.update();

        let scheduler = app.world().resource::<TrailScheduler>();
        assert!(scheduler.groups().is_empty());
        assert_eq!(scheduler.restarts_issued(), 0);
    }
}
