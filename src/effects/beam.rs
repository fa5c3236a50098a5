// Beam particle effect: parameter record and its translation into a hanabi asset

use crate::constants::*;
use crate::effects::curve::CubicBezier;
use bevy::prelude::*;
use bevy_hanabi::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn mid(&self) -> f32 {
        (self.min + self.max) / 2.0
    }
}

/// Start colour of a particle, somewhere between `low` and `high`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorRange {
    pub low: [f32; 4],
    pub high: [f32; 4],
}

impl ColorRange {
    pub fn bounds(&self) -> (Vec4, Vec4) {
        (Vec4::from_array(self.low), Vec4::from_array(self.high))
    }
}

/// Cone emitter. `angle` is the half-angle from the cone axis in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConeShape {
    pub radius: f32,
    pub angle: f32,
    pub height: f32,
}

impl ConeShape {
    pub fn top_radius(&self) -> f32 {
        self.radius + self.height * self.angle.tan()
    }

    /// Distance from the cone base down to its virtual apex. Particles fly
    /// away from the apex, which gives the cone-shaped emission.
    pub fn apex_depth(&self) -> f32 {
        self.radius / self.angle.tan()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Blending {
    Additive,
    Normal,
}

impl Blending {
    fn alpha_mode(self) -> bevy_hanabi::AlphaMode {
        match self {
            Blending::Additive => bevy_hanabi::AlphaMode::Add,
            Blending::Normal => bevy_hanabi::AlphaMode::Blend,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderMode {
    Billboard,
    /// Particles are stretched along their velocity; `length` is the number
    /// of trail points, one per frame
    Trail { length: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileSheet {
    pub columns: u32,
    pub rows: u32,
    pub index: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Force {
    pub direction: [f32; 3],
    pub magnitude: f32,
}

impl Force {
    pub fn acceleration(&self) -> Vec3 {
        Vec3::from_array(self.direction).normalize_or_zero() * self.magnitude
    }
}

/// Parameters of the beam particle system. Consumed once when the effect
/// asset is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamConfig {
    pub duration: f32,
    pub looping: bool,
    pub burst_count: u32,
    pub max_particles: u32,
    pub life: Interval,
    pub speed: Interval,
    pub start_size: f32,
    pub start_color: ColorRange,
    pub cone: ConeShape,
    pub blending: Blending,
    pub render_mode: RenderMode,
    pub tiles: TileSheet,
    pub size_curve: [f32; 4],
    pub force: Force,
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            duration: BEAM_DURATION,
            looping: false,
            burst_count: BEAM_BURST_COUNT,
            max_particles: BEAM_MAX_PARTICLES,
            life: Interval::new(BEAM_LIFE.0, BEAM_LIFE.1),
            speed: Interval::new(BEAM_SPEED.0, BEAM_SPEED.1),
            start_size: BEAM_START_SIZE,
            start_color: ColorRange {
                low: BEAM_COLOR_LOW,
                high: BEAM_COLOR_HIGH,
            },
            cone: ConeShape {
                radius: BEAM_CONE_RADIUS,
                angle: BEAM_CONE_ANGLE,
                height: BEAM_CONE_HEIGHT,
            },
            blending: Blending::Additive,
            render_mode: RenderMode::Trail {
                length: BEAM_TRAIL_LENGTH,
            },
            tiles: TileSheet {
                columns: BEAM_TILE_COUNT.0,
                rows: BEAM_TILE_COUNT.1,
                index: BEAM_TILE_INDEX,
            },
            size_curve: BEAM_SIZE_CURVE,
            force: Force {
                direction: BEAM_FORCE_DIRECTION,
                magnitude: BEAM_FORCE_MAGNITUDE,
            },
        }
    }
}

impl BeamConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.life.min > 0.0 && self.life.min <= self.life.max) {
            return Err(format!("beam.life must satisfy 0 < min <= max, got {:?}", self.life));
        }
        if !(self.speed.min >= 0.0 && self.speed.min <= self.speed.max) {
            return Err(format!("beam.speed must satisfy 0 <= min <= max, got {:?}", self.speed));
        }
        if self.max_particles == 0 || self.burst_count == 0 {
            return Err("beam.max_particles and beam.burst_count must be at least 1".into());
        }
        if !(self.duration > 0.0) {
            return Err(format!("beam.duration must be positive, got {}", self.duration));
        }
        if !(self.cone.angle > 0.0 && self.cone.angle < std::f32::consts::FRAC_PI_2) {
            return Err(format!("beam.cone.angle must be in (0, pi/2), got {}", self.cone.angle));
        }
        if self.tiles.columns == 0 || self.tiles.rows == 0 {
            return Err("beam.tiles needs at least one column and one row".into());
        }
        Ok(())
    }

    /// Length of a particle along its velocity
    pub fn stretched_length(&self) -> f32 {
        match self.render_mode {
            RenderMode::Billboard => self.start_size,
            RenderMode::Trail { length } => {
                (length * self.speed.mid() / TRAIL_SAMPLES_PER_SECOND).max(self.start_size)
            }
        }
    }

    /// Shrink-over-life keys: the bezier curve applied to the start size
    pub fn size_keys(&self) -> Vec<(f32, Vec3)> {
        let base = Vec3::new(self.stretched_length(), self.start_size, self.start_size);
        CubicBezier::new(self.size_curve)
            .keys(SIZE_CURVE_KEYS)
            .into_iter()
            .map(|(t, scale)| (t, base * scale))
            .collect()
    }

    /// Colour-over-life keys. They multiply the per-particle start colour,
    /// so it is kept as is at birth and reaches transparent black at death.
    pub fn color_keys(&self) -> [(f32, Vec4); 2] {
        [(0.0, Vec4::ONE), (1.0, Vec4::ZERO)]
    }

    fn spawner(&self) -> SpawnerSettings {
        let count = self.burst_count as f32;
        if self.looping {
            SpawnerSettings::burst(count.into(), self.duration.into())
        } else {
            SpawnerSettings::once(count.into())
        }
    }
}

/// Each particle picks its own start colour uniformly between the range bounds
fn init_start_color(writer: &ExprWriter, range: &ColorRange) -> SetAttributeModifier {
    let (low, high) = range.bounds();
    let color = writer
        .lit(low)
        .mix(writer.lit(high), writer.rand(ScalarType::Float))
        .pack4x8unorm();
    SetAttributeModifier::new(Attribute::COLOR, color.expr())
}

pub fn build_beam_effect(config: &BeamConfig) -> EffectAsset {
    let mut size_gradient = bevy_hanabi::Gradient::new();
    for (t, size) in config.size_keys() {
        size_gradient.add_key(t, size);
    }

    let mut color_gradient = bevy_hanabi::Gradient::new();
    for (t, color) in config.color_keys() {
        color_gradient.add_key(t, color);
    }

    let writer = ExprWriter::new();

    let init_pos = SetPositionCone3dModifier {
        height: writer.lit(config.cone.height).expr(),
        base_radius: writer.lit(config.cone.radius).expr(),
        top_radius: writer.lit(config.cone.top_radius()).expr(),
        dimension: ShapeDimension::Volume,
    };

    let init_vel = SetVelocitySphereModifier {
        center: writer.lit(Vec3::new(0.0, -config.cone.apex_depth(), 0.0)).expr(),
        speed: writer
            .lit(config.speed.min)
            .uniform(writer.lit(config.speed.max))
            .expr(),
    };

    let init_age = SetAttributeModifier::new(Attribute::AGE, writer.lit(0.0).expr());
    let init_lifetime = SetAttributeModifier::new(
        Attribute::LIFETIME,
        writer
            .lit(config.life.min)
            .uniform(writer.lit(config.life.max))
            .expr(),
    );
    let init_size = SetAttributeModifier::new(Attribute::SIZE, writer.lit(config.start_size).expr());
    let init_color = init_start_color(&writer, &config.start_color);
    let init_tile = SetAttributeModifier::new(
        Attribute::SPRITE_INDEX,
        writer.lit(config.tiles.index).expr(),
    );

    let update_force = AccelModifier::new(writer.lit(config.force.acceleration()).expr());

    let texture_slot = writer.lit(0u32).expr();

    let mut module = writer.finish();
    module.add_texture_slot("beam_texture");

    let orient = match config.render_mode {
        RenderMode::Trail { .. } => OrientModifier::new(OrientMode::AlongVelocity),
        RenderMode::Billboard => OrientModifier::new(OrientMode::FaceCameraPosition),
    };

    EffectAsset::new(config.max_particles, config.spawner(), module)
        .with_name("beam")
        .with_simulation_space(SimulationSpace::Global)
        .with_alpha_mode(config.blending.alpha_mode())
        .init(init_pos)
        .init(init_vel)
        .init(init_age)
        .init(init_lifetime)
        .init(init_size)
        .init(init_color)
        .init(init_tile)
        .update(update_force)
        .render(orient)
        .render(ParticleTextureModifier {
            texture_slot,
            sample_mapping: ImageSampleMapping::Modulate,
        })
        .render(FlipbookModifier {
            sprite_grid_size: UVec2::new(config.tiles.columns, config.tiles.rows),
        })
        .render(ColorOverLifetimeModifier {
            gradient: color_gradient,
            blend: ColorBlendMode::Modulate,
            mask: ColorBlendMask::RGBA,
        })
        .render(SizeOverLifetimeModifier {
            gradient: size_gradient,
            screen_space_size: false,
        })
}
