pub const APP_NAME: &str = "Sparks Particles";
pub const CONFIG_PATH: &str = "sparks_config.toml";

// restart cadence: one group per 0.2s slot, cycle wraps after 2s
pub const RESTART_TICKS_PER_SECOND: f32 = 5.0;
pub const RESTART_CYCLE_SECONDS: f32 = 2.0;

pub const GROUP_COUNT: usize = 1;
pub const GRID_COLUMNS: usize = 10;
pub const GRID_SPACING: f32 = 2.0;

pub const BEAM_DURATION: f32 = 1.0;
pub const BEAM_BURST_COUNT: u32 = 10;
pub const BEAM_MAX_PARTICLES: u32 = 10;
pub const BEAM_LIFE: (f32, f32) = (0.8, 1.4);
pub const BEAM_SPEED: (f32, f32) = (10.0, 15.0);
pub const BEAM_START_SIZE: f32 = 0.2;
pub const BEAM_COLOR_LOW: [f32; 4] = [1.0, 0.585716, 0.1691176, 1.0];
pub const BEAM_COLOR_HIGH: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const BEAM_CONE_RADIUS: f32 = 0.1;
pub const BEAM_CONE_ANGLE: f32 = 1.0;
pub const BEAM_CONE_HEIGHT: f32 = 0.05;
pub const BEAM_TRAIL_LENGTH: f32 = 20.0;
pub const BEAM_TILE_COUNT: (u32, u32) = (10, 10);
pub const BEAM_TILE_INDEX: i32 = 0;
pub const BEAM_SIZE_CURVE: [f32; 4] = [1.0, 0.95, 0.75, 0.0];
pub const BEAM_FORCE_DIRECTION: [f32; 3] = [0.0, -1.0, 0.0];
pub const BEAM_FORCE_MAGNITUDE: f32 = 20.0;

pub const GROUND_SIZE: f32 = 2000.0;
pub const GROUND_SUBDIVISIONS: u32 = 8;
pub const GROUND_COLOR: u32 = 0x222222;
pub const GROUND_POSITION: [f32; 3] = [0.0, -10.0, 0.0];
pub const LIGHT_POSITION: [f32; 3] = [0.0, 20.0, 0.0];
pub const LIGHT_RANGE: f32 = 300.0;
pub const LIGHT_INTENSITY: f32 = 1_000_000.0;
pub const CAMERA_POSITION: [f32; 3] = [0.0, 10.0, 30.0];

// trail points are recorded once per frame at this rate
pub const TRAIL_SAMPLES_PER_SECOND: f32 = 60.0;
pub const SIZE_CURVE_KEYS: usize = 8;
