use super::helpers::{self, DEPTH_FORMAT};
use wgpu;

/// Size-dependent render attachments.
///
/// - `msaa_*` is the multisampled colour target resolved into the swapchain.
/// - `depth_*` matches the MSAA sample count.
pub(crate) struct RenderTargets {
    #[allow(dead_code)]
    pub(crate) msaa_tex: wgpu::Texture,
    pub(crate) msaa_view: wgpu::TextureView,
    #[allow(dead_code)]
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let (msaa_tex, msaa_view) = helpers::create_attachment_texture(
            device,
            "msaa_color",
            width,
            height,
            color_format,
            sample_count,
        );
        let (depth_tex, depth_view) = helpers::create_attachment_texture(
            device,
            "depth",
            width,
            height,
            DEPTH_FORMAT,
            sample_count,
        );
        Self {
            msaa_tex,
            msaa_view,
            depth_tex,
            depth_view,
            color_format,
            sample_count,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height, self.color_format, self.sample_count);
    }
}
