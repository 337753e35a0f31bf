use relief_core::gpu;
use relief_core::{DrawMode, FrameOutput, FrameUniforms, MeshBuffers, CLEAR_COLOR};
use wgpu::util::DeviceExt;

struct MeshBuffer {
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

pub struct GpuState<'w> {
    pub window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    triangle_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    triangles: Option<MeshBuffer>,
    lines: Option<MeshBuffer>,
    uploaded_revision: u64,
    width: u32,
    height: u32,
}

fn depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    gpu::create_depth_texture(device, width, height).1
}

impl<'w> GpuState<'w> {
    pub async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("terrain"),
            source: wgpu::ShaderSource::Wgsl(relief_core::TERRAIN_WGSL.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
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
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
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
        let depth_view = depth_view(&device, width, height);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            depth_view,
            triangle_pipeline,
            line_pipeline,
            uniform_buffer,
            bind_group,
            triangles: None,
            lines: None,
            uploaded_revision: 0,
            width,
            height,
        })
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = depth_view(&self.device, self.width, self.height);
    }

    fn upload(&self, label: &str, positions: &[f32], vertex_count: u32) -> MeshBuffer {
        let buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(positions),
                usage: wgpu::BufferUsages::VERTEX,
            });
        MeshBuffer {
            buffer,
            vertex_count,
        }
    }

    pub fn sync_mesh(&mut self, mesh: Option<&MeshBuffers>, revision: u64) {
        if revision == self.uploaded_revision {
            return;
        }
        if let Some(mesh) = mesh {
            let t = &mesh.triangles;
            let w = &mesh.wire;
            self.triangles = Some(self.upload("triangle_vb", t.positions(), t.vertex_count()));
            self.lines = Some(self.upload("line_vb", w.positions(), w.vertex_count()));
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
            let [r, g, b, a] = CLEAR_COLOR;
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
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
                    DrawMode::Triangles => (&self.triangle_pipeline, &self.triangles),
                    DrawMode::Lines => (&self.line_pipeline, &self.lines),
                };
                if let Some(vb) = vb {
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
