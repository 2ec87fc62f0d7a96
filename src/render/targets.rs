use super::helpers;

/// Depth attachment sized to the surface.
///
/// Markers stand on the globe and the atmosphere wraps it, so everything
/// after the starfield is depth tested.
pub(crate) struct DepthTarget {
    // owns the storage behind `view`
    _tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

impl DepthTarget {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (tex, view) = helpers::create_depth_texture(device, width, height);
        Self { _tex: tex, view }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self._tex, self.view) = helpers::create_depth_texture(device, width, height);
    }
}
