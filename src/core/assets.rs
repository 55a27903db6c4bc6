use std::fmt;

use glam::{Mat4, Vec3};
use thiserror::Error;

use super::constants::SLIDE_COUNT;
use super::geometry::{MeshData, Vertex};
use super::scene::SlideIndex;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetch {url} failed: {reason}")]
    Fetch { url: String, reason: String },
    #[error("fetch {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("gltf: {0}")]
    Gltf(#[from] gltf::Error),
    #[error("model requires unsupported extension {0}")]
    UnsupportedExtension(String),
    #[error("model contains no triangle geometry")]
    EmptyModel,
    #[error("image decode: {0}")]
    Image(#[from] image::ImageError),
}

/// Tri-state readiness of one loaded resource.
#[derive(Debug)]
pub enum ResourceState<T> {
    Pending,
    Ready(T),
    Failed(LoadError),
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self::Pending
    }
}

impl<T> ResourceState<T> {
    pub fn from_result(result: Result<T, LoadError>) -> Self {
        match result {
            Ok(v) => Self::Ready(v),
            Err(e) => Self::Failed(e),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn readiness(&self) -> Readiness {
        match self {
            Self::Pending => Readiness::Pending,
            Self::Ready(_) => Readiness::Ready,
            Self::Failed(_) => Readiness::Failed,
        }
    }
}

/// Payload-free view of a [`ResourceState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness {
    Pending,
    Ready,
    Failed,
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Readiness::Pending => "pending",
            Readiness::Ready => "ready",
            Readiness::Failed => "failed",
        })
    }
}

/// RGBA8 pixels, rows top to bottom, sRGB encoded.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, LoadError> {
    let img = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = img.dimensions();
    Ok(DecodedImage {
        width,
        height,
        rgba: img.into_raw(),
    })
}

/// One drawable piece of a loaded model, already in world space.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelPrimitive {
    pub mesh: MeshData,
    pub base_color: [f32; 4],
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelData {
    pub primitives: Vec<ModelPrimitive>,
}

impl ModelData {
    pub fn triangle_count(&self) -> usize {
        self.primitives.iter().map(|p| p.mesh.triangle_count()).sum()
    }
}

/// Decode a `.glb` / `.gltf` (embedded buffers only) and bake every node
/// transform plus `placement` into the vertices.
pub fn decode_model(bytes: &[u8], placement: Mat4) -> Result<ModelData, LoadError> {
    let header = gltf::Gltf::from_slice(bytes)?;
    if let Some(ext) = header.extensions_required().next() {
        return Err(LoadError::UnsupportedExtension(ext.to_string()));
    }
    let (document, buffers, _images) = gltf::import_slice(bytes)?;

    let mut model = ModelData::default();
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next());
    if let Some(scene) = scene {
        for node in scene.nodes() {
            collect_node(&node, &buffers, placement, &mut model);
        }
    }
    if model.primitives.is_empty() {
        return Err(LoadError::EmptyModel);
    }
    Ok(model)
}

fn collect_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent: Mat4,
    model: &mut ModelData,
) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                log::debug!("[assets] skipping non-triangle primitive in {:?}", mesh.name());
                continue;
            }
            if let Some(mesh_data) = read_primitive(&primitive, buffers) {
                model.primitives.push(ModelPrimitive {
                    mesh: mesh_data.transformed(world),
                    base_color: primitive
                        .material()
                        .pbr_metallic_roughness()
                        .base_color_factor(),
                });
            }
        }
    }
    for child in node.children() {
        collect_node(&child, buffers, world, model);
    }
}

fn read_primitive(
    primitive: &gltf::Primitive,
    buffers: &[gltf::buffer::Data],
) -> Option<MeshData> {
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|d| &d.0[..]));
    let positions: Vec<[f32; 3]> = reader.read_positions()?.collect();
    if positions.is_empty() {
        return None;
    }
    let indices: Vec<u32> = match reader.read_indices() {
        Some(idx) => idx.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };
    let normals: Vec<[f32; 3]> = match reader.read_normals() {
        Some(n) => n.collect(),
        None => flat_normals(&positions, &indices),
    };
    let uvs: Vec<[f32; 2]> = reader
        .read_tex_coords(0)
        .map(|t| t.into_f32().collect())
        .unwrap_or_default();

    let vertices = positions
        .iter()
        .enumerate()
        .map(|(i, p)| {
            Vertex::new(
                *p,
                normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
                uvs.get(i).copied().unwrap_or([0.0, 0.0]),
            )
        })
        .collect();
    Some(MeshData { vertices, indices })
}

/// Area-weighted vertex normals for primitives that ship without them.
fn flat_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let pa = Vec3::from(positions[a]);
        let n = (Vec3::from(positions[b]) - pa).cross(Vec3::from(positions[c]) - pa);
        acc[a] += n;
        acc[b] += n;
        acc[c] += n;
    }
    acc.into_iter()
        .map(|n| n.try_normalize().unwrap_or(Vec3::Y).to_array())
        .collect()
}

/// Gobo images keyed by slide.
#[derive(Debug, Default)]
pub struct TextureTable {
    entries: [ResourceState<DecodedImage>; SLIDE_COUNT as usize],
}

impl TextureTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(slide: SlideIndex) -> usize {
        (slide.get() - 1) as usize
    }

    pub fn get(&self, slide: SlideIndex) -> &ResourceState<DecodedImage> {
        &self.entries[Self::slot(slide)]
    }

    pub fn state(&self, slide: SlideIndex) -> Readiness {
        self.get(slide).readiness()
    }

    pub fn resolve(&mut self, slide: SlideIndex, result: Result<DecodedImage, LoadError>) {
        self.entries[Self::slot(slide)] = ResourceState::from_result(result);
    }

    pub fn ready_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_ready()).count()
    }
}

/// Everything loaded out-of-band after start-up. `generation` bumps on every
/// state change so consumers can cheaply notice new data.
#[derive(Debug, Default)]
pub struct Assets {
    pub model: ResourceState<ModelData>,
    pub textures: TextureTable,
    generation: u64,
}

impl Assets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn resolve_model(&mut self, result: Result<ModelData, LoadError>) {
        self.model = ResourceState::from_result(result);
        self.generation += 1;
    }

    pub fn resolve_texture(&mut self, slide: SlideIndex, result: Result<DecodedImage, LoadError>) {
        self.textures.resolve(slide, result);
        self.generation += 1;
    }
}
