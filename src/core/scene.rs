use glam::{Mat4, Quat, Vec3};

use super::camera::PerspectiveCamera;
use super::constants::*;
use super::geometry::{self, MeshData};

/// 1-based slide number in `1..=SLIDE_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlideIndex(u8);

impl SlideIndex {
    pub const FIRST: SlideIndex = SlideIndex(1);
    pub const LAST: SlideIndex = SlideIndex(SLIDE_COUNT);
    /// Slide loaded in the projector at start-up.
    pub const INITIAL: SlideIndex = SlideIndex(INITIAL_SLIDE);

    pub fn get(self) -> u8 {
        self.0
    }

    /// The following slide, wrapping from the last back to 1.
    pub fn next(self) -> Self {
        if self.0 + 1 > SLIDE_COUNT {
            Self::FIRST
        } else {
            Self(self.0 + 1)
        }
    }

    /// The preceding slide, wrapping from 1 back to the last.
    pub fn previous(self) -> Self {
        if self.0 - 1 < 1 {
            Self::LAST
        } else {
            Self(self.0 - 1)
        }
    }

    /// Image file name for this slide, e.g. `"3.jpg"`.
    pub fn file_name(self) -> &'static str {
        const NAMES: [&str; SLIDE_COUNT as usize] = ["1.jpg", "2.jpg", "3.jpg", "4.jpg", "5.jpg"];
        NAMES[(self.0 - 1) as usize]
    }

    pub fn all() -> impl Iterator<Item = SlideIndex> {
        (1..=SLIDE_COUNT).map(SlideIndex)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhongMaterial {
    pub color: [f32; 3],
    pub emissive: [f32; 3],
    pub specular: [f32; 3],
    pub shininess: f32,
    pub double_sided: bool,
}

impl PhongMaterial {
    pub fn matte(color: [f32; 3]) -> Self {
        Self {
            color,
            emissive: [0.0; 3],
            specular: hex_to_linear(0x111111),
            shininess: 30.0,
            double_sided: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeshNode {
    pub label: &'static str,
    pub mesh: MeshData,
    pub material: PhongMaterial,
    pub position: Vec3,
    pub rotation: Quat,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl MeshNode {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointLight {
    pub color: [f32; 3],
    pub intensity: f32,
    /// Distance at which the light's contribution reaches zero.
    pub range: f32,
    pub decay: f32,
    pub position: Vec3,
    pub cast_shadow: bool,
}

/// A candle: small emissive flame plus the point light it gives off.
#[derive(Clone, Debug, PartialEq)]
pub struct Candle {
    pub flame: MeshNode,
    pub light: PointLight,
}

/// Slide projector. `map` is the gobo image currently loaded in the
/// projector; `None` projects a plain cone.
#[derive(Clone, Debug, PartialEq)]
pub struct SpotLight {
    pub color: [f32; 3],
    pub intensity: f32,
    /// Half-angle of the outer cone, radians.
    pub angle: f32,
    pub penumbra: f32,
    pub decay: f32,
    pub range: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub map: Option<SlideIndex>,
    pub cast_shadow: bool,
}

impl SpotLight {
    /// View-projection used to project the gobo image along the cone.
    pub fn projection_matrix(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(self.angle * 2.0, 1.0, 0.5, self.range);
        let view = Mat4::look_at_rh(self.position, self.target, Vec3::Y);
        proj * view
    }

    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }
}

/// Where the statue goes once it has loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelPlacement {
    pub position: Vec3,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl ModelPlacement {
    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(self.position)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub camera: PerspectiveCamera,
    pub ground: MeshNode,
    pub candles: Vec<Candle>,
    pub projector: SpotLight,
    pub model: ModelPlacement,
    pub clear_color: [f32; 3],
}

impl Scene {
    pub fn point_lights(&self) -> impl Iterator<Item = &PointLight> {
        self.candles.iter().map(|c| &c.light)
    }

    pub fn meshes(&self) -> impl Iterator<Item = &MeshNode> {
        std::iter::once(&self.ground).chain(self.candles.iter().map(|c| &c.flame))
    }
}

fn ground() -> MeshNode {
    let mut material = PhongMaterial::matte(hex_to_linear(GROUND_COLOR));
    material.double_sided = true;
    MeshNode {
        label: "ground",
        mesh: geometry::plane(GROUND_WIDTH, GROUND_LENGTH),
        material,
        position: Vec3::new(0.0, 0.0, GROUND_CENTER_Z),
        rotation: Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
        cast_shadow: false,
        receive_shadow: true,
    }
}

fn candle(x: f32, z: f32) -> Candle {
    let flame = MeshNode {
        label: "candle",
        mesh: geometry::sphere(CANDLE_RADIUS, CANDLE_WIDTH_SEGMENTS, CANDLE_HEIGHT_SEGMENTS),
        material: PhongMaterial {
            color: hex_to_linear(CANDLE_COLOR),
            emissive: hex_to_linear(CANDLE_EMISSIVE),
            specular: hex_to_linear(CANDLE_SPECULAR),
            shininess: CANDLE_SHININESS,
            double_sided: true,
        },
        position: Vec3::new(x, CANDLE_FLAME_Y, z),
        rotation: Quat::IDENTITY,
        cast_shadow: false,
        receive_shadow: false,
    };
    let light = PointLight {
        color: hex_to_linear(CANDLE_LIGHT_COLOR),
        intensity: CANDLE_LIGHT_INTENSITY,
        range: CANDLE_LIGHT_RANGE,
        decay: LIGHT_DECAY,
        position: Vec3::new(x, CANDLE_LIGHT_Y, z),
        cast_shadow: true,
    };
    Candle { flame, light }
}

fn projector() -> SpotLight {
    SpotLight {
        color: hex_to_linear(PROJECTOR_COLOR),
        intensity: PROJECTOR_OFF_INTENSITY,
        angle: PROJECTOR_ANGLE,
        penumbra: PROJECTOR_PENUMBRA,
        decay: LIGHT_DECAY,
        range: PROJECTOR_RANGE,
        position: PROJECTOR_POSITION,
        target: PROJECTOR_TARGET,
        map: Some(SlideIndex::INITIAL),
        cast_shadow: true,
    }
}

/// Build the full static scene for a viewport with the given aspect ratio.
pub fn assemble(aspect: f32) -> Scene {
    // Left row first, then the mirrored right row.
    let candles = [-CANDLE_ROW_X, CANDLE_ROW_X]
        .into_iter()
        .flat_map(|x| {
            (0..CANDLES_PER_ROW).map(move |i| candle(x, i as f32 * CANDLE_SPACING_Z))
        })
        .collect();

    Scene {
        camera: PerspectiveCamera::new(aspect),
        ground: ground(),
        candles,
        projector: projector(),
        model: ModelPlacement {
            position: MODEL_OFFSET,
            cast_shadow: true,
            receive_shadow: true,
        },
        clear_color: hex_to_linear(CLEAR_COLOR),
    }
}
