use relief_core::{DrawMode, FrameOutput, FrameUniforms, MeshBuffers, CLEAR_COLOR};
use web_sys as web;
use wgpu::util::DeviceExt;

mod targets;
use relief_core::gpu;
use targets::DepthTarget;

/// Uploaded vertex buffer paired with its draw count.
struct VertexBuffer {
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl VertexBuffer {
    fn upload(device: &wgpu::Device, label: &str, positions: &[f32], vertex_count: u32) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(positions),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            buffer,
            vertex_count,
        }
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    triangle_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,

    triangles: Option<VertexBuffer>,
    lines: Option<VertexBuffer>,
    uploaded_revision: u64,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
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
                    // Default limits: older WebGPU impls reject unknown limit fields
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
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth = DepthTarget::new(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("terrain_shader"),
            source: wgpu::ShaderSource::Wgsl(relief_core::TERRAIN_WGSL.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("terrain_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let triangle_pipeline = gpu::make_mesh_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            "fs_main",
            wgpu::PrimitiveTopology::TriangleList,
            format,
        );
        let line_pipeline = gpu::make_mesh_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            "fs_wire",
            wgpu::PrimitiveTopology::LineList,
            format,
        );

        let [r, g, b, a] = CLEAR_COLOR;
        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            uniform_buffer,
            bind_group,
            triangle_pipeline,
            line_pipeline,
            triangles: None,
            lines: None,
            uploaded_revision: 0,
            width,
            height,
            clear_color: wgpu::Color { r, g, b, a },
        })
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Replace both vertex buffers when the scene has a newer mesh than the GPU.
    pub fn sync_mesh(&mut self, mesh: Option<&MeshBuffers>, revision: u64) {
        if revision == self.uploaded_revision {
            return;
        }
        if let Some(mesh) = mesh {
            let t = &mesh.triangles;
            let w = &mesh.wire;
            self.triangles = Some(VertexBuffer::upload(
                &self.device,
                "triangle_vb",
                t.positions(),
                t.vertex_count(),
            ));
            self.lines = Some(VertexBuffer::upload(
                &self.device,
                "line_vb",
                w.positions(),
                w.vertex_count(),
            ));
            log::info!(
                "[gpu] uploaded mesh rev {} ({} + {} vertices)",
                revision,
                t.vertex_count(),
                w.vertex_count()
            );
        }
        self.uploaded_revision = revision;
    }

    pub fn render(&mut self, out: &FrameOutput) -> Result<(), wgpu::SurfaceError> {
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&out.matrices.uniforms()),
        );

        let frame = self.surface.get_current_texture()?;
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
                label: Some("terrain_pass"),
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
            if let Some(draw) = out.draw {
                let (pipeline, vb) = match draw.mode {
                    DrawMode::Triangles => (&self.triangle_pipeline, self.triangles.as_ref()),
                    DrawMode::Lines => (&self.line_pipeline, self.lines.as_ref()),
                };
                if let Some(vb) = vb.filter(|vb| vb.vertex_count > 0) {
                    rpass.set_pipeline(pipeline);
                    rpass.set_bind_group(0, &self.bind_group, &[]);
                    rpass.set_vertex_buffer(0, vb.buffer.slice(..));
                    rpass.draw(0..draw.vertex_count.min(vb.vertex_count), 0..1);
                }
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
