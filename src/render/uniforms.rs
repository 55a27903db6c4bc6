use crate::core::{PhongMaterial, PointLight, Scene, SpotLight};
use glam::{Mat3, Mat4};

/// Must match `MAX_POINT_LIGHTS` in `scene.wgsl`.
pub(crate) const MAX_POINT_LIGHTS: usize = 16;

#[repr(C)]
#[derive(Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointLightRaw {
    pos_range: [f32; 4],
    color_intensity: [f32; 4],
    decay: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SpotLightRaw {
    pos_range: [f32; 4],
    dir_decay: [f32; 4],
    color_intensity: [f32; 4],
    cone: [f32; 4],
    view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FrameUniforms {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    counts: [f32; 4],
    points: [PointLightRaw; MAX_POINT_LIGHTS],
    spot: SpotLightRaw,
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    model: [[f32; 4]; 4],
    normal_matrix: [[f32; 4]; 4],
    color: [f32; 4],
    emissive: [f32; 4],
    specular_shininess: [f32; 4],
}

fn pack_point(light: &PointLight) -> PointLightRaw {
    let [r, g, b] = light.color;
    PointLightRaw {
        pos_range: light.position.extend(light.range).to_array(),
        color_intensity: [r, g, b, light.intensity],
        decay: [light.decay, 0.0, 0.0, 0.0],
    }
}

fn pack_spot(spot: &SpotLight, has_map: bool) -> SpotLightRaw {
    let [r, g, b] = spot.color;
    let cos_outer = spot.angle.cos();
    let cos_inner = (spot.angle * (1.0 - spot.penumbra)).cos().max(cos_outer + 1e-4);
    SpotLightRaw {
        pos_range: spot.position.extend(spot.range).to_array(),
        dir_decay: spot.direction().extend(spot.decay).to_array(),
        color_intensity: [r, g, b, spot.intensity],
        cone: [cos_outer, cos_inner, if has_map { 1.0 } else { 0.0 }, 0.0],
        view_proj: spot.projection_matrix().to_cols_array_2d(),
    }
}

/// Per-frame lighting and camera block. `has_gobo` says whether a gobo
/// texture is bound for the projector.
pub(crate) fn frame_uniforms(scene: &Scene, has_gobo: bool) -> FrameUniforms {
    let mut points = [PointLightRaw::default(); MAX_POINT_LIGHTS];
    let mut count = 0usize;
    for (slot, light) in points.iter_mut().zip(scene.point_lights()) {
        *slot = pack_point(light);
        count += 1;
    }
    FrameUniforms {
        view_proj: scene.camera.view_proj().to_cols_array_2d(),
        camera_pos: scene.camera.position.extend(1.0).to_array(),
        counts: [count as f32, 0.0, 0.0, 0.0],
        points,
        spot: pack_spot(&scene.projector, has_gobo),
    }
}

pub(crate) fn object_uniforms(model: Mat4, material: &PhongMaterial, alpha: f32) -> ObjectUniforms {
    let normal = Mat4::from_mat3(Mat3::from_mat4(model).inverse().transpose());
    let [r, g, b] = material.color;
    let [er, eg, eb] = material.emissive;
    let [sr, sg, sb] = material.specular;
    ObjectUniforms {
        model: model.to_cols_array_2d(),
        normal_matrix: normal.to_cols_array_2d(),
        color: [r, g, b, alpha],
        emissive: [er, eg, eb, 0.0],
        specular_shininess: [sr, sg, sb, material.shininess],
    }
}
