use glam::Vec3;

// Scene layout and look shared by scene assembly, the controller and the renderer.

// Camera
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 1.5, 25.0);
pub const LOOK_AT_TARGET: Vec3 = Vec3::new(0.0, 2.0, 0.0);

// Scroll dolly: z = DOLLY_Z_START - scroll / DOLLY_DIVISOR
pub const DOLLY_Z_START: f32 = 100.0;
pub const DOLLY_DIVISOR: f32 = 1.02;

// Ground plane
pub const GROUND_WIDTH: f32 = 20.0;
pub const GROUND_LENGTH: f32 = 140.0;
pub const GROUND_CENTER_Z: f32 = 40.0;
pub const GROUND_COLOR: u32 = 0x1b1c20;

// Candles: two mirrored rows along +z
pub const CANDLES_PER_ROW: usize = 5;
pub const CANDLE_ROW_X: f32 = 4.0; // left row at -x, right row at +x
pub const CANDLE_SPACING_Z: f32 = 20.0;
pub const CANDLE_FLAME_Y: f32 = 0.05;
pub const CANDLE_LIGHT_Y: f32 = 0.2;
pub const CANDLE_RADIUS: f32 = 0.05;
pub const CANDLE_WIDTH_SEGMENTS: u32 = 1; // clamped up by the sphere builder
pub const CANDLE_HEIGHT_SEGMENTS: u32 = 16;
pub const CANDLE_COLOR: u32 = 0xa6731c;
pub const CANDLE_EMISSIVE: u32 = 0xf9c36d;
pub const CANDLE_SPECULAR: u32 = 0xbb7e1c;
pub const CANDLE_SHININESS: f32 = 100.0;
pub const CANDLE_LIGHT_COLOR: u32 = 0xbc893b;
pub const CANDLE_LIGHT_INTENSITY: f32 = 35.0;
pub const CANDLE_LIGHT_RANGE: f32 = 5.0;
pub const LIGHT_DECAY: f32 = 2.0;

// Statue model placement
pub const MODEL_OFFSET: Vec3 = Vec3::new(0.1, 0.0, 0.0);

// Projector spotlight
pub const SLIDE_COUNT: u8 = 5;
pub const INITIAL_SLIDE: u8 = 5;
pub const PROJECTOR_ON_INTENSITY: f32 = 5.0;
pub const PROJECTOR_OFF_INTENSITY: f32 = 0.0;
pub const PROJECTOR_COLOR: u32 = 0xffffff;
pub const PROJECTOR_ANGLE: f32 = std::f32::consts::PI / 20.0;
pub const PROJECTOR_PENUMBRA: f32 = 1.0;
pub const PROJECTOR_RANGE: f32 = 100.0;
pub const PROJECTOR_POSITION: Vec3 = Vec3::new(0.0, 2.0, 5.0);
pub const PROJECTOR_TARGET: Vec3 = Vec3::new(0.0, 2.0, 0.0);

// Renderer
pub const CLEAR_COLOR: u32 = 0x000000;

/// Convert a `0xRRGGBB` colour into linear-light RGB.
#[inline]
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0)]
}
