// Host-side tests for model/image decoding and the loaded-resource store.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod assets {
        include!("../src/core/assets.rs");
    }
}

use core::assets::*;
use core::scene::SlideIndex;
use glam::{Mat4, Vec3};
use std::io::Cursor;

// One triangle: (0,0,0), (1,0,0), (0,1,0), no normals, no indices.
const TRIANGLE_GLTF: &str = r#"{
  "asset": { "version": "2.0" },
  "scene": 0,
  "scenes": [ { "nodes": [0] } ],
  "nodes": [ { "mesh": 0, "translation": [0.0, 0.0, 2.0] } ],
  "meshes": [ { "primitives": [ { "attributes": { "POSITION": 0 } } ] } ],
  "accessors": [ {
    "bufferView": 0,
    "componentType": 5126,
    "count": 3,
    "type": "VEC3",
    "min": [0.0, 0.0, 0.0],
    "max": [1.0, 1.0, 0.0]
  } ],
  "bufferViews": [ { "buffer": 0, "byteLength": 36 } ],
  "buffers": [ {
    "byteLength": 36,
    "uri": "data:application/octet-stream;base64,AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAA"
  } ]
}"#;

const DRACO_GLTF: &str = r#"{
  "asset": { "version": "2.0" },
  "extensionsUsed": ["KHR_draco_mesh_compression"],
  "extensionsRequired": ["KHR_draco_mesh_compression"],
  "scenes": [ { "nodes": [] } ]
}"#;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 120, 40, 255]));
    let mut out = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

fn tiny_image() -> DecodedImage {
    DecodedImage {
        width: 1,
        height: 1,
        rgba: vec![255; 4],
    }
}

fn slide(n: usize) -> SlideIndex {
    SlideIndex::all().nth(n - 1).unwrap()
}

fn fetch_error(url: &str) -> LoadError {
    LoadError::Status {
        url: url.to_string(),
        status: 404,
    }
}

#[test]
fn decodes_embedded_triangle_with_node_and_placement_transforms() {
    let placement = Mat4::from_translation(Vec3::new(0.1, 0.0, 0.0));
    let model = decode_model(TRIANGLE_GLTF.as_bytes(), placement).expect("decode");
    assert_eq!(model.primitives.len(), 1);
    assert_eq!(model.triangle_count(), 1);

    let prim = &model.primitives[0];
    assert_eq!(prim.mesh.indices, vec![0, 1, 2]);
    let positions: Vec<Vec3> = prim
        .mesh
        .vertices
        .iter()
        .map(|v| Vec3::from(v.position))
        .collect();
    let expected = [
        Vec3::new(0.1, 0.0, 2.0),
        Vec3::new(1.1, 0.0, 2.0),
        Vec3::new(0.1, 1.0, 2.0),
    ];
    for (got, want) in positions.iter().zip(expected) {
        assert!(got.abs_diff_eq(want, 1e-5), "{got} != {want}");
    }
    // Generated normals face +Z for counter-clockwise winding.
    for v in &prim.mesh.vertices {
        assert!(Vec3::from(v.normal).abs_diff_eq(Vec3::Z, 1e-5));
    }
    // Default material is opaque white.
    assert_eq!(prim.base_color, [1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn rejects_models_needing_unsupported_extensions() {
    let err = decode_model(DRACO_GLTF.as_bytes(), Mat4::IDENTITY).unwrap_err();
    assert!(
        matches!(err, LoadError::UnsupportedExtension(_) | LoadError::Gltf(_)),
        "unexpected error {err:?}"
    );
}

#[test]
fn rejects_garbage_model_bytes() {
    assert!(decode_model(b"not a model", Mat4::IDENTITY).is_err());
}

#[test]
fn decodes_png_to_rgba() {
    let img = decode_image(&png_bytes(3, 2)).expect("decode");
    assert_eq!((img.width, img.height), (3, 2));
    assert_eq!(img.rgba.len(), 3 * 2 * 4);
    assert_eq!(&img.rgba[..4], &[200, 120, 40, 255]);
}

#[test]
fn rejects_garbage_image_bytes() {
    let err = decode_image(&[0x00, 0x01, 0x02, 0x03]).unwrap_err();
    assert!(matches!(err, LoadError::Image(_)));
}

#[test]
fn texture_table_starts_pending() {
    let table = TextureTable::new();
    for slide in SlideIndex::all() {
        assert_eq!(table.state(slide), Readiness::Pending);
    }
    assert_eq!(table.ready_count(), 0);
}

#[test]
fn texture_table_tracks_each_slide_independently() {
    let mut table = TextureTable::new();
    let two = slide(2);
    let four = slide(4);
    table.resolve(two, Ok(tiny_image()));
    table.resolve(four, Err(fetch_error("./public/photos/4.jpg")));

    assert_eq!(table.state(two), Readiness::Ready);
    assert_eq!(table.state(four), Readiness::Failed);
    assert_eq!(table.state(SlideIndex::FIRST), Readiness::Pending);
    assert_eq!(table.get(two).ready().map(|i| i.width), Some(1));
    assert!(table.get(four).ready().is_none());
    assert_eq!(table.ready_count(), 1);

    table.resolve(four, Ok(tiny_image()));
    assert_eq!(table.state(four), Readiness::Ready);
    assert_eq!(table.ready_count(), 2);
}

#[test]
fn assets_bump_generation_on_every_resolution() {
    let mut assets = Assets::new();
    assert_eq!(assets.generation(), 0);
    assert_eq!(assets.model.readiness(), Readiness::Pending);

    assets.resolve_texture(SlideIndex::LAST, Ok(tiny_image()));
    assert_eq!(assets.generation(), 1);

    assets.resolve_model(Err(LoadError::EmptyModel));
    assert_eq!(assets.generation(), 2);
    assert_eq!(assets.model.readiness(), Readiness::Failed);
}

#[test]
fn readiness_displays_lowercase() {
    assert_eq!(Readiness::Pending.to_string(), "pending");
    assert_eq!(Readiness::Ready.to_string(), "ready");
    assert_eq!(Readiness::Failed.to_string(), "failed");
}

#[test]
fn load_errors_name_the_url() {
    let msg = fetch_error("./public/model/littleB.glb").to_string();
    assert!(msg.contains("littleB.glb"));
    assert!(msg.contains("404"));
}
