use globe_core::texture::TextureImage;
use globe_core::SceneContext;
use glam::{Mat4, Vec3};
use web_sys as web;

mod globe;
mod helpers;
mod markers;
mod stars;
mod targets;

use globe::GlobeResources;
use markers::MarkerResources;
use stars::StarResources;
use targets::DepthTarget;

pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct GlobalUniforms {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
}

impl Default for GlobalUniforms {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            view: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    model: [[f32; 4]; 4],
}

impl Default for ObjectUniforms {
    fn default() -> Self {
        Self::from_mat(Mat4::IDENTITY)
    }
}

impl ObjectUniforms {
    fn from_mat(m: Mat4) -> Self {
        Self {
            model: m.to_cols_array_2d(),
        }
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    globals: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    globe: GlobeResources,
    stars: StarResources,
    markers: MarkerResources,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, stars: &[Vec3]) -> anyhow::Result<Self> {
        let width = canvas.width().clamp(1, wgpu::Limits::default().max_texture_dimension_2d);
        let height = canvas.height().clamp(1, wgpu::Limits::default().max_texture_dimension_2d);

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
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth = DepthTarget::new(&device, width, height);
        let globals_bgl = helpers::uniform_bgl(&device, "globals_bgl");
        let (globals, globals_bg) = helpers::uniform_buffer_with_group(
            &device,
            &globals_bgl,
            "globals",
            &GlobalUniforms::default(),
        );
        let globe = globe::create_globe_resources(&device, &queue, &globals_bgl, format);
        let stars = stars::create_star_resources(&device, &globals_bgl, format, stars);
        let markers = markers::create_marker_resources(&device, &globals_bgl, format);
        log::info!("[render] surface {}x{} format={:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            globals,
            globals_bg,
            globe,
            stars,
            markers,
            width,
            height,
            clear_color: wgpu::Color::BLACK,
        })
    }

    pub fn set_globe_texture(&mut self, image: &TextureImage) {
        self.globe.set_texture(&self.device, &self.queue, image);
        log::info!("[render] globe texture {}x{}", image.width, image.height);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let limit = self.device.limits().max_texture_dimension_2d;
        let (width, height) = (width.min(limit), height.min(limit));
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    /// Draw one frame: stars, globe, markers, then the atmosphere on top.
    pub fn render(&mut self, scene: &SceneContext, elapsed_sec: f32) -> Result<(), wgpu::SurfaceError> {
        self.resize_if_needed(scene.viewport.width, scene.viewport.height);

        let globals = GlobalUniforms {
            view_proj: scene.camera.view_proj().to_cols_array_2d(),
            view: scene.camera.view_matrix().to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.globals, 0, bytemuck::bytes_of(&globals));
        self.queue.write_buffer(
            &self.globe.globe_object,
            0,
            bytemuck::bytes_of(&ObjectUniforms::from_mat(scene.globe_model())),
        );
        self.queue.write_buffer(
            &self.globe.atmosphere_object,
            0,
            bytemuck::bytes_of(&ObjectUniforms::from_mat(scene.atmosphere_model())),
        );
        let instances = scene.marker_instances(elapsed_sec);
        self.markers.upload(&self.device, &self.queue, &instances);

        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                // reconfigure now; the next frame gets a fresh texture
                self.surface.configure(&self.device, &self.config);
                return Err(e);
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.stars.draw(&mut rpass, &self.globals_bg);
            self.globe.draw(&mut rpass, &self.globals_bg);
            self.markers.draw(&mut rpass, &self.globals_bg);
            self.globe.draw_atmosphere(&mut rpass, &self.globals_bg);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
