use glam::{Mat3, Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }
}

/// Indexed triangle list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Bake `transform` into positions and normals.
    pub fn transformed(mut self, transform: Mat4) -> Self {
        let normal_matrix = Mat3::from_mat4(transform).inverse().transpose();
        for v in &mut self.vertices {
            let p = transform.transform_point3(Vec3::from(v.position));
            let n = (normal_matrix * Vec3::from(v.normal)).normalize_or_zero();
            v.position = p.to_array();
            v.normal = n.to_array();
        }
        self
    }
}

/// Rectangle in the XY plane facing +Z, centred on the origin.
pub fn plane(width: f32, height: f32) -> MeshData {
    let hw = width * 0.5;
    let hh = height * 0.5;
    let n = [0.0, 0.0, 1.0];
    let vertices = vec![
        Vertex::new([-hw, hh, 0.0], n, [0.0, 0.0]),
        Vertex::new([hw, hh, 0.0], n, [1.0, 0.0]),
        Vertex::new([-hw, -hh, 0.0], n, [0.0, 1.0]),
        Vertex::new([hw, -hh, 0.0], n, [1.0, 1.0]),
    ];
    let indices = vec![0, 2, 1, 2, 3, 1];
    MeshData { vertices, indices }
}

/// UV sphere. Segment counts are clamped to at least 3 around and 2 down,
/// so requests like `sphere(r, 1, 16)` still produce a closed solid.
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
    let mut indices = Vec::new();

    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let phi = std::f32::consts::PI * v;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let theta = std::f32::consts::TAU * u;
            let normal = Vec3::new(-theta.cos() * phi.sin(), phi.cos(), theta.sin() * phi.sin());
            vertices.push(Vertex::new(
                (normal * radius).to_array(),
                normal.to_array(),
                [u, 1.0 - v],
            ));
        }
    }

    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // Skip the collapsed triangles at the poles.
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    MeshData { vertices, indices }
}
