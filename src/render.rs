use crate::constants::MSAA_SAMPLES;
use crate::core::{
    surface_resize, Assets, ModelData, PhongMaterial, Scene, SlideIndex, SLIDE_COUNT,
};
use web_sys as web;

mod helpers;
mod mesh;
mod targets;
mod uniforms;

use mesh::GpuMesh;
use targets::RenderTargets;
use uniforms::FrameUniforms;

/// A gobo image that has been uploaded, with the bind group that samples it.
struct Gobo {
    bind_group: wgpu::BindGroup,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    view_format: wgpu::TextureFormat,
    targets: RenderTargets,

    pipeline: wgpu::RenderPipeline,
    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    object_bgl: wgpu::BindGroupLayout,
    gobo_bgl: wgpu::BindGroupLayout,
    linear_sampler: wgpu::Sampler,

    // Ground and candles, built once from the scene description
    scene_meshes: Vec<GpuMesh>,
    // Statue primitives, uploaded when the model finishes loading
    model_meshes: Vec<GpuMesh>,
    model_uploaded: bool,
    gobos: Vec<Option<Gobo>>,
    // 1x1 white stand-in bound while the selected gobo is not ready
    blank_gobo: Gobo,
    assets_generation: Option<u64>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, scene: &Scene) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Canvases only expose linear formats; render through an sRGB view.
        let view_format = format.add_srgb_suffix();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: if view_format != format {
                vec![view_format]
            } else {
                vec![]
            },
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} format={:?} view={:?}", width, height, format, view_format);

        let targets = RenderTargets::new(&device, width, height, view_format, MSAA_SAMPLES);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let frame_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bgl"),
            entries: &[helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX_FRAGMENT,
            )],
        });
        let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bgl"),
            entries: &[helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX_FRAGMENT,
            )],
        });
        let gobo_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("gobo_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&frame_bgl, &object_bgl, &gobo_bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_scene_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            mesh::vertex_layout(),
            view_format,
            MSAA_SAMPLES,
        );

        let frame_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bg"),
            layout: &frame_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("gobo_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let scene_meshes = scene
            .meshes()
            .map(|node| {
                GpuMesh::new(
                    &device,
                    &object_bgl,
                    node.label,
                    &node.mesh,
                    &uniforms::object_uniforms(node.model_matrix(), &node.material, 1.0),
                )
            })
            .collect();

        let blank_gobo = Self::upload_gobo(
            &device,
            &queue,
            &gobo_bgl,
            &linear_sampler,
            "gobo_blank",
            1,
            1,
            &[255, 255, 255, 255],
        );

        let [r, g, b] = scene.clear_color;
        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format,
            targets,
            pipeline,
            frame_buffer,
            frame_bind_group,
            object_bgl,
            gobo_bgl,
            linear_sampler,
            scene_meshes,
            model_meshes: Vec::new(),
            model_uploaded: false,
            gobos: (0..SLIDE_COUNT).map(|_| None).collect(),
            blank_gobo,
            assets_generation: None,
            width,
            height,
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            },
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn upload_gobo(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        label: &str,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) -> Gobo {
        let (_tex, view) = helpers::create_rgba_texture(device, queue, label, width, height, rgba);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });
        Gobo { bind_group }
    }

    fn upload_model(&mut self, model: &ModelData) {
        for (i, prim) in model.primitives.iter().enumerate() {
            let [r, g, b, a] = prim.base_color;
            let material = PhongMaterial::matte([r, g, b]);
            self.model_meshes.push(GpuMesh::new(
                &self.device,
                &self.object_bgl,
                &format!("model_{i}"),
                &prim.mesh,
                // Vertices are already in world space.
                &uniforms::object_uniforms(glam::Mat4::IDENTITY, &material, a),
            ));
        }
        log::info!(
            "[gpu] model uploaded: {} primitives, {} triangles",
            self.model_meshes.len(),
            model.triangle_count()
        );
    }

    /// Upload anything that became ready since the last call.
    pub fn sync_assets(&mut self, assets: &Assets) {
        if self.assets_generation == Some(assets.generation()) {
            return;
        }
        self.assets_generation = Some(assets.generation());

        if !self.model_uploaded {
            if let Some(model) = assets.model.ready() {
                self.upload_model(model);
                self.model_uploaded = true;
            }
        }
        for slide in SlideIndex::all() {
            let slot = (slide.get() - 1) as usize;
            if self.gobos[slot].is_some() {
                continue;
            }
            if let Some(img) = assets.textures.get(slide).ready() {
                self.gobos[slot] = Some(Self::upload_gobo(
                    &self.device,
                    &self.queue,
                    &self.gobo_bgl,
                    &self.linear_sampler,
                    slide.file_name(),
                    img.width,
                    img.height,
                    &img.rgba,
                ));
                log::debug!("[gpu] gobo {} uploaded", slide.file_name());
            }
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if let Some((width, height)) = surface_resize((self.width, self.height), (width, height)) {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.reconfigure();
                self.surface.get_current_texture()?
            }
            Err(e) => return Err(e),
        };
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });

        let gobo = scene
            .projector
            .map
            .and_then(|slide| self.gobos[(slide.get() - 1) as usize].as_ref());
        let frame_uniforms = uniforms::frame_uniforms(scene, gobo.is_some());
        self.queue
            .write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&frame_uniforms));
        let gobo_bind_group = &gobo.unwrap_or(&self.blank_gobo).bind_group;

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.frame_bind_group, &[]);
            rpass.set_bind_group(2, gobo_bind_group, &[]);
            for mesh in self.scene_meshes.iter().chain(self.model_meshes.iter()) {
                mesh.draw(&mut rpass);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
