use crate::constants::{RESTART_CYCLE_SECONDS, RESTART_TICKS_PER_SECOND};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// How often groups are restarted: one group per `1 / ticks_per_second`
/// slot, and the whole sequence starts over once `cycle_seconds` is exceeded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestartCadence {
    pub ticks_per_second: f32,
    pub cycle_seconds: f32,
}

impl Default for RestartCadence {
    fn default() -> Self {
        Self {
            ticks_per_second: RESTART_TICKS_PER_SECOND,
            cycle_seconds: RESTART_CYCLE_SECONDS,
        }
    }
}

impl RestartCadence {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.ticks_per_second > 0.0) {
            return Err(format!(
                "cadence.ticks_per_second must be positive, got {}",
                self.ticks_per_second
            ));
        }
        if !(self.cycle_seconds > 0.0) {
            return Err(format!(
                "cadence.cycle_seconds must be positive, got {}",
                self.cycle_seconds
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestartTimer {
    cadence: RestartCadence,
    total_time: f32,
    refresh_index: usize,
}

impl RestartTimer {
    pub fn new(cadence: RestartCadence) -> Self {
        Self {
            cadence,
            total_time: 0.0,
            refresh_index: 0,
        }
    }

    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    pub fn refresh_index(&self) -> usize {
        self.refresh_index
    }

    /// Advances the clock and returns the indices of the groups whose restart
    /// slot has been reached. Several slots can be due at once after a long
    /// frame; indices at or past `group_count` are never returned.
    pub fn advance(&mut self, delta: f32, group_count: usize) -> Range<usize> {
        // max() also maps NaN to zero
        self.total_time += delta.max(0.0);

        let start = self.refresh_index;
        let elapsed_slots = (self.total_time * self.cadence.ticks_per_second).floor() as usize;
        while elapsed_slots > self.refresh_index && self.refresh_index < group_count {
            self.refresh_index += 1;
        }
        let due = start..self.refresh_index;

        if self.total_time > self.cadence.cycle_seconds {
            self.total_time = 0.0;
            self.refresh_index = 0;
        }

        due
    }
}

/// The host side of the scheduler: how a group is updated, restarted and how
/// the batch renderer is ticked
pub trait EffectHost<G> {
    fn update_group(&mut self, group: &G, delta: f32);

    fn restart_group(&mut self, group: &G);

    /// Called once per frame; a host without a batch renderer yet does nothing
    fn update_batch(&mut self, delta: f32);
}

#[derive(Debug, Clone)]
pub struct EffectScheduler<G> {
    timer: RestartTimer,
    groups: Vec<G>,
    restarts_issued: u64,
}

impl<G> EffectScheduler<G> {
    pub fn new(cadence: RestartCadence) -> Self {
        Self {
            timer: RestartTimer::new(cadence),
            groups: Vec::new(),
            restarts_issued: 0,
        }
    }

    pub fn push_group(&mut self, group: G) {
        self.groups.push(group);
    }

    pub fn groups(&self) -> &[G] {
        &self.groups
    }

    pub fn retain_groups(&mut self, keep: impl FnMut(&G) -> bool) {
        self.groups.retain(keep);
    }

    pub fn timer(&self) -> &RestartTimer {
        &self.timer
    }

    pub fn restarts_issued(&self) -> u64 {
        self.restarts_issued
    }

    pub fn on_frame<H: EffectHost<G>>(&mut self, delta: f32, host: &mut H) {
        for group in &self.groups {
            host.update_group(group, delta);
        }

        for index in self.timer.advance(delta, self.groups.len()) {
            if let Some(group) = self.groups.get(index) {
                host.restart_group(group);
                self.restarts_issued += 1;
            }
        }

        host.update_batch(delta);
    }
}

impl<G> Default for EffectScheduler<G> {
    fn default() -> Self {
        Self::new(RestartCadence::default())
    }
}
