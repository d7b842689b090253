use crate::camera::Camera;
use crate::dom;
use crate::rig::RenderSurface;
use crate::scene::{Light, SceneGraph, SceneMesher, Vertex};
use glam::Vec3;
use web_sys as web;

mod helpers;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub const MAX_POINT_LIGHTS: usize = 4;

#[repr(C)]
#[derive(Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
struct PointLightPacked {
    position_range: [f32; 4],
    color_intensity: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    ambient: [f32; 4],
    dir_light_dir: [f32; 4],
    dir_light_color: [f32; 4],
    points: [PointLightPacked; MAX_POINT_LIGHTS],
    point_count: u32,
    _pad: [u32; 3],
}

impl SceneUniforms {
    fn new(scene: &SceneGraph, camera: &Camera) -> Self {
        let mut u = Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            ambient: [0.0; 4],
            dir_light_dir: [0.0, -1.0, 0.0, 0.0],
            dir_light_color: [0.0; 4],
            points: [PointLightPacked::default(); MAX_POINT_LIGHTS],
            point_count: 0,
            _pad: [0; 3],
        };
        for wl in scene.lights() {
            match wl.light {
                Light::Ambient { color, intensity } => {
                    for c in 0..3 {
                        u.ambient[c] += color[c] * intensity;
                    }
                }
                Light::Directional { color, intensity } => {
                    let dir = (Vec3::ZERO - wl.position).normalize_or_zero();
                    u.dir_light_dir = dir.extend(0.0).to_array();
                    u.dir_light_color = [color[0], color[1], color[2], intensity];
                }
                Light::Point {
                    color,
                    intensity,
                    distance,
                } => {
                    let n = u.point_count as usize;
                    if n < MAX_POINT_LIGHTS {
                        u.points[n] = PointLightPacked {
                            position_range: wl.position.extend(distance).to_array(),
                            color_intensity: [color[0], color[1], color[2], intensity],
                        };
                        u.point_count += 1;
                    }
                }
            }
        }
        u
    }
}

/// wgpu-backed render surface: a canvas appended to the scene container.
pub struct GpuState {
    canvas: web::HtmlCanvasElement,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    opaque_pipeline: wgpu::RenderPipeline,
    transparent_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    // Built on the first render, once the scene exists
    mesher: Option<SceneMesher>,
    vertex_buffer: Option<wgpu::Buffer>,
    scratch: Vec<Vertex>,
}

impl GpuState {
    /// Acquire WebGPU for `canvas`. Fails when the browser has no WebGPU
    /// adapter, which callers treat as a missing renderer.
    pub async fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
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
        // Transparent canvas so the page background shows through
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
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
        let (_, depth_view) = helpers::create_depth_texture(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let opaque_pipeline = helpers::make_mesh_pipeline(&device, &pl, &shader, format, false);
        let transparent_pipeline = helpers::make_mesh_pipeline(&device, &pl, &shader, format, true);
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        log::info!("[gpu] surface ready: {:?} {}x{}", format, width, height);
        Ok(Self {
            canvas,
            surface,
            device,
            queue,
            config,
            depth_view,
            opaque_pipeline,
            transparent_pipeline,
            uniform_buffer,
            bind_group,
            mesher: None,
            vertex_buffer: None,
            scratch: Vec::new(),
        })
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
        let (_, depth_view) =
            helpers::create_depth_texture(&self.device, self.config.width, self.config.height);
        self.depth_view = depth_view;
    }

    fn ensure_mesh(&mut self, scene: &SceneGraph) {
        if self.mesher.is_some() {
            return;
        }
        let mesher = SceneMesher::new(scene);
        let size = (mesher.vertex_count().max(1) as u64) * std::mem::size_of::<Vertex>() as u64;
        self.vertex_buffer = Some(self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_vertices"),
            size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        log::info!("[gpu] scene mesh: {} vertices", mesher.vertex_count());
        self.mesher = Some(mesher);
    }
}

impl RenderSurface for GpuState {
    fn set_size(&mut self, width: u32, height: u32) {
        let (w_px, h_px) = dom::sync_canvas_backing_size(&self.canvas, width, height);
        if w_px != self.config.width || h_px != self.config.height {
            self.config.width = w_px;
            self.config.height = h_px;
            self.reconfigure();
        }
    }

    fn render(&mut self, scene: &SceneGraph, camera: &Camera) -> anyhow::Result<()> {
        self.ensure_mesh(scene);
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.reconfigure();
                return Ok(());
            }
            Err(e) => return Err(anyhow::anyhow!("surface error: {:?}", e)),
        };
        let (Some(mesher), Some(vertex_buffer)) = (&self.mesher, &self.vertex_buffer) else {
            return Ok(());
        };
        mesher.fill(scene, &mut self.scratch);
        self.queue
            .write_buffer(vertex_buffer, 0, bytemuck::cast_slice(&self.scratch));
        let uniforms = SceneUniforms::new(scene, camera);
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

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
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
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
            let opaque = mesher.opaque_vertex_count();
            let total = mesher.vertex_count();
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, vertex_buffer.slice(..));
            rpass.set_pipeline(&self.opaque_pipeline);
            rpass.draw(0..opaque, 0..1);
            if total > opaque {
                rpass.set_pipeline(&self.transparent_pipeline);
                rpass.draw(opaque..total, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
