use super::helpers::create_texture;
use wgpu;

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Size-dependent attachments, rebuilt on resize.
pub(crate) struct RenderTargets {
    pub(crate) msaa_view: Option<wgpu::TextureView>,
    pub(crate) depth_view: wgpu::TextureView,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
    _msaa_tex: Option<wgpu::Texture>,
    _depth_tex: wgpu::Texture,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let (msaa_tex, msaa_view) = if sample_count > 1 {
            let (tex, view) = create_texture(
                device,
                "msaa_color",
                width,
                height,
                color_format,
                wgpu::TextureUsages::RENDER_ATTACHMENT,
                sample_count,
            );
            (Some(tex), Some(view))
        } else {
            (None, None)
        };
        let (depth_tex, depth_view) = create_texture(
            device,
            "depth",
            width,
            height,
            DEPTH_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
            sample_count,
        );
        Self {
            msaa_view,
            depth_view,
            color_format,
            sample_count,
            _msaa_tex: msaa_tex,
            _depth_tex: depth_tex,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height, self.color_format, self.sample_count);
    }
}

/// Fixed-size depth map rendered from the directional light.
pub(crate) struct ShadowMap {
    pub(crate) view: wgpu::TextureView,
    pub(crate) sampler: wgpu::Sampler,
    _tex: wgpu::Texture,
}

impl ShadowMap {
    pub(crate) fn new(device: &wgpu::Device, size: u32) -> Self {
        let (tex, view) = create_texture(
            device,
            "shadow_map",
            size,
            size,
            DEPTH_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            1,
        );
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("shadow_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            compare: Some(wgpu::CompareFunction::LessEqual),
            ..Default::default()
        });
        Self {
            view,
            sampler,
            _tex: tex,
        }
    }
}
