use super::helpers::{self, MeshBuffers};
use globe_core::geometry::unit_box;
use globe_core::MarkerInstance;

const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
    6 => Float32x4,
    7 => Float32x4
];

/// Instanced population bars. The instance buffer grows to the largest
/// marker count seen and is rewritten every frame.
pub(crate) struct MarkerResources {
    cube: MeshBuffers,
    pipeline: wgpu::RenderPipeline,
    instance_buf: wgpu::Buffer,
    capacity: usize,
    count: u32,
}

pub(crate) fn create_marker_resources(
    device: &wgpu::Device,
    globals_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
) -> MarkerResources {
    let cube = helpers::upload_mesh(device, "marker_cube", &unit_box());
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("markers_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::shaders::MARKERS_WGSL.into()),
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("markers_pl"),
        bind_group_layouts: &[globals_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_mesh_pipeline(
        device,
        "markers_pipeline",
        &layout,
        &shader,
        &[
            helpers::mesh_vertex_layout(),
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<MarkerInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &INSTANCE_ATTRIBUTES,
            },
        ],
        wgpu::PrimitiveState {
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
        true,
        color_format,
        Some(wgpu::BlendState::ALPHA_BLENDING),
    );
    let capacity = 1;
    MarkerResources {
        cube,
        pipeline,
        instance_buf: instance_buffer(device, capacity),
        capacity,
        count: 0,
    }
}

fn instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("marker_instances"),
        size: (capacity * std::mem::size_of::<MarkerInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl MarkerResources {
    pub(crate) fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, instances: &[MarkerInstance]) {
        if instances.len() > self.capacity {
            self.capacity = instances.len().next_power_of_two();
            self.instance_buf = instance_buffer(device, self.capacity);
            log::debug!("[render] marker instance buffer grown to {}", self.capacity);
        }
        if !instances.is_empty() {
            queue.write_buffer(&self.instance_buf, 0, bytemuck::cast_slice(instances));
        }
        self.count = instances.len() as u32;
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, globals_bg: &wgpu::BindGroup) {
        if self.count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, globals_bg, &[]);
        rpass.set_vertex_buffer(0, self.cube.vertex_buf.slice(..));
        rpass.set_vertex_buffer(1, self.instance_buf.slice(..));
        rpass.set_index_buffer(self.cube.index_buf.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.cube.index_count, 0, 0..self.count);
    }
}
