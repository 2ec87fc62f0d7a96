use glam::Vec3;
use wgpu::util::DeviceExt;

const STAR_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

pub(crate) struct StarResources {
    pipeline: wgpu::RenderPipeline,
    vertex_buf: wgpu::Buffer,
    count: u32,
}

pub(crate) fn create_star_resources(
    device: &wgpu::Device,
    globals_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    stars: &[Vec3],
) -> StarResources {
    let points: Vec<[f32; 3]> = stars.iter().map(|p| p.to_array()).collect();
    // zero-sized buffers are rejected; keep one dummy point and draw none
    let contents: &[u8] = if points.is_empty() {
        &[0u8; 12]
    } else {
        bytemuck::cast_slice(&points)
    };
    let vertex_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("star_points"),
        contents,
        usage: wgpu::BufferUsages::VERTEX,
    });
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("stars_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::shaders::STARS_WGSL.into()),
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("stars_pl"),
        bind_group_layouts: &[globals_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = super::helpers::make_mesh_pipeline(
        device,
        "stars_pipeline",
        &layout,
        &shader,
        &[wgpu::VertexBufferLayout {
            array_stride: 12,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &STAR_ATTRIBUTES,
        }],
        wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::PointList,
            ..Default::default()
        },
        false,
        color_format,
        None,
    );
    StarResources {
        pipeline,
        vertex_buf,
        count: points.len() as u32,
    }
}

impl StarResources {
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, globals_bg: &wgpu::BindGroup) {
        if self.count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, globals_bg, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buf.slice(..));
        rpass.draw(0..self.count, 0..1);
    }
}
