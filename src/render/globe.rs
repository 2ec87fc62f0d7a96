use super::helpers::{self, MeshBuffers};
use super::ObjectUniforms;
use globe_core::constants::{GLOBE_RADIUS, GLOBE_SEGMENTS};
use globe_core::geometry::uv_sphere;
use globe_core::texture::TextureImage;

/// Textured globe and the additive atmosphere shell. Both draw the same
/// sphere mesh with different model matrices and shaders.
pub(crate) struct GlobeResources {
    pub(crate) sphere: MeshBuffers,
    pub(crate) globe_pipeline: wgpu::RenderPipeline,
    pub(crate) atmosphere_pipeline: wgpu::RenderPipeline,
    pub(crate) globe_object: wgpu::Buffer,
    pub(crate) globe_object_bg: wgpu::BindGroup,
    pub(crate) atmosphere_object: wgpu::Buffer,
    pub(crate) atmosphere_object_bg: wgpu::BindGroup,
    pub(crate) texture_bgl: wgpu::BindGroupLayout,
    pub(crate) texture_bg: wgpu::BindGroup,
    sampler: wgpu::Sampler,
    // keeps the sampled texture alive alongside its bind group
    _texture: wgpu::Texture,
}

pub(crate) fn create_globe_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    globals_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
) -> GlobeResources {
    let sphere = helpers::upload_mesh(
        device,
        "sphere_mesh",
        &uv_sphere(GLOBE_RADIUS, GLOBE_SEGMENTS, GLOBE_SEGMENTS),
    );
    let object_bgl = helpers::uniform_bgl(device, "object_bgl");
    let texture_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("globe_texture_bgl"),
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
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("globe_sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });
    let (texture, texture_bg) = texture_bind_group(
        device,
        queue,
        &texture_bgl,
        &sampler,
        &TextureImage::placeholder(),
    );

    let identity = ObjectUniforms::default();
    let (globe_object, globe_object_bg) =
        helpers::uniform_buffer_with_group(device, &object_bgl, "globe_object", &identity);
    let (atmosphere_object, atmosphere_object_bg) =
        helpers::uniform_buffer_with_group(device, &object_bgl, "atmosphere_object", &identity);

    let globe_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("globe_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::shaders::GLOBE_WGSL.into()),
    });
    let atmosphere_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("atmosphere_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::shaders::ATMOSPHERE_WGSL.into()),
    });
    let globe_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("globe_pl"),
        bind_group_layouts: &[globals_bgl, &object_bgl, &texture_bgl],
        push_constant_ranges: &[],
    });
    let atmosphere_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("atmosphere_pl"),
        bind_group_layouts: &[globals_bgl, &object_bgl],
        push_constant_ranges: &[],
    });
    let globe_pipeline = helpers::make_mesh_pipeline(
        device,
        "globe_pipeline",
        &globe_layout,
        &globe_shader,
        &[helpers::mesh_vertex_layout()],
        wgpu::PrimitiveState {
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
        true,
        color_format,
        None,
    );
    // Inside of the larger shell, added on top of whatever is behind it.
    let atmosphere_pipeline = helpers::make_mesh_pipeline(
        device,
        "atmosphere_pipeline",
        &atmosphere_layout,
        &atmosphere_shader,
        &[helpers::mesh_vertex_layout()],
        wgpu::PrimitiveState {
            cull_mode: Some(wgpu::Face::Front),
            ..Default::default()
        },
        false,
        color_format,
        Some(wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent::OVER,
        }),
    );

    GlobeResources {
        sphere,
        globe_pipeline,
        atmosphere_pipeline,
        globe_object,
        globe_object_bg,
        atmosphere_object,
        atmosphere_object_bg,
        texture_bgl,
        texture_bg,
        sampler,
        _texture: texture,
    }
}

impl GlobeResources {
    /// Swap the sampled surface image.
    pub(crate) fn set_texture(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, image: &TextureImage) {
        let (texture, bg) = texture_bind_group(device, queue, &self.texture_bgl, &self.sampler, image);
        self._texture = texture;
        self.texture_bg = bg;
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, globals_bg: &wgpu::BindGroup) {
        rpass.set_vertex_buffer(0, self.sphere.vertex_buf.slice(..));
        rpass.set_index_buffer(self.sphere.index_buf.slice(..), wgpu::IndexFormat::Uint32);

        rpass.set_pipeline(&self.globe_pipeline);
        rpass.set_bind_group(0, globals_bg, &[]);
        rpass.set_bind_group(1, &self.globe_object_bg, &[]);
        rpass.set_bind_group(2, &self.texture_bg, &[]);
        rpass.draw_indexed(0..self.sphere.index_count, 0, 0..1);
    }

    pub(crate) fn draw_atmosphere(&self, rpass: &mut wgpu::RenderPass<'_>, globals_bg: &wgpu::BindGroup) {
        rpass.set_vertex_buffer(0, self.sphere.vertex_buf.slice(..));
        rpass.set_index_buffer(self.sphere.index_buf.slice(..), wgpu::IndexFormat::Uint32);
        rpass.set_pipeline(&self.atmosphere_pipeline);
        rpass.set_bind_group(0, globals_bg, &[]);
        rpass.set_bind_group(1, &self.atmosphere_object_bg, &[]);
        rpass.draw_indexed(0..self.sphere.index_count, 0, 0..1);
    }
}

fn texture_bind_group(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    image: &TextureImage,
) -> (wgpu::Texture, wgpu::BindGroup) {
    let (texture, view) = helpers::upload_rgba_texture(device, queue, "globe_texture", image);
    let bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("globe_texture_bg"),
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
    (texture, bg)
}
