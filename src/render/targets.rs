use relief_core::gpu;

/// Depth attachment sized to the surface, recreated on resize.
pub(crate) struct DepthTarget {
    pub(crate) tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

impl DepthTarget {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (tex, view) = gpu::create_depth_texture(device, width, height);
        Self { tex, view }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.tex.destroy();
        (self.tex, self.view) = gpu::create_depth_texture(device, width, height);
    }
}
