use std::sync::Arc;

use glam::Vec2;
use image::RgbaImage;
use log::{debug, info};
use wgpu::util::DeviceExt;
use winit::{dpi::PhysicalSize, event_loop::EventLoopProxy, window::Window};

use super::frame::{DrawCommand, Frame};
use super::sprite::{as_bytes, quad_vertices, SpritePipeline, VERTICES_PER_QUAD};
use super::texture::{GpuTexture, TextureId};
use crate::config::WindowConfig;
use crate::error::{EngineError, Result};

/// Window plus everything wgpu needs to draw a [`Frame`] into it.
pub struct Graphics {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,
    sprites: SpritePipeline,
    textures: Vec<GpuTexture>,
    canvas: Vec2,
}

/// Creates the graphics context for `window` and hands it back through `proxy`.
pub async fn create_graphics(
    window: Arc<Window>,
    window_config: &WindowConfig,
    proxy: EventLoopProxy<Graphics>,
) -> Result<()> {
    let graphics = Graphics::new(window, window_config).await?;
    proxy
        .send_event(graphics)
        .map_err(|_| EngineError::EventLoopClosed)
}

impl Graphics {
    async fn new(window: Arc<Window>, window_config: &WindowConfig) -> Result<Self> {
        let mut backends = wgpu::Backends::all();
        backends.remove(wgpu::Backends::GL);
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends,
            ..Default::default()
        });

        let surface = instance.create_surface(Arc::clone(&window))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        info!("using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                label: None,
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await?;

        let mut size = window.inner_size();
        size.width = size.width.max(1);
        size.height = size.height.max(1);

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|format| format.is_srgb())
            .unwrap_or(caps.formats[0]);
        let desired_present_mode = if window_config.vsync {
            wgpu::PresentMode::Fifo
        } else {
            wgpu::PresentMode::Immediate
        };
        let present_mode = if caps.present_modes.contains(&desired_present_mode) {
            desired_present_mode
        } else {
            caps.present_modes[0]
        };
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 1,
        };
        surface.configure(&device, &surface_config);

        let sprites = SpritePipeline::new(&device, format);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            surface_config,
            sprites,
            textures: Vec::new(),
            canvas: Vec2::new(window_config.width as f32, window_config.height as f32),
        })
    }

    pub fn canvas(&self) -> Vec2 {
        self.canvas
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        // Minimised windows report 0x0.
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.surface_config.width = size.width;
        self.surface_config.height = size.height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Reconfigures the surface at its current size after it was lost or went stale.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn upload_texture(&mut self, label: &str, image: &RgbaImage) -> TextureId {
        let texture = GpuTexture::from_image(
            &self.device,
            &self.queue,
            &self.sprites.bind_group_layout,
            &self.sprites.sampler,
            label,
            image,
        );
        self.textures.push(texture);
        debug!(
            "uploaded texture {label} ({}x{})",
            image.width(),
            image.height()
        );
        TextureId(self.textures.len() - 1)
    }

    pub fn render(&mut self, frame: &Frame) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Images (rasterized text) only live for this frame.
        let transient: Vec<GpuTexture> = frame
            .commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Image { image, .. } => Some(GpuTexture::from_image(
                    &self.device,
                    &self.queue,
                    &self.sprites.bind_group_layout,
                    &self.sprites.sampler,
                    "Frame Image",
                    image,
                )),
                DrawCommand::Sprite { .. } => None,
            })
            .collect();

        let mut bind_groups = Vec::with_capacity(frame.commands().len());
        let mut vertices = Vec::with_capacity(frame.commands().len() * 24);
        let mut transient_iter = transient.iter();
        for command in frame.commands() {
            let bind_group = match command {
                DrawCommand::Sprite { texture, .. } => {
                    self.textures.get(texture.0).map(|t| &t.bind_group)
                }
                DrawCommand::Image { .. } => transient_iter.next().map(|t| &t.bind_group),
            };
            let Some(bind_group) = bind_group else {
                continue;
            };
            bind_groups.push(bind_group);
            vertices.extend_from_slice(&quad_vertices(command.dest(), frame.canvas()));
        }

        let vertex_buffer = (!vertices.is_empty()).then(|| {
            self.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Sprite Vertex Buffer"),
                    contents: &as_bytes(&vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                })
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Sprite Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(frame.clear_color().to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if let Some(vertex_buffer) = &vertex_buffer {
                pass.set_pipeline(&self.sprites.pipeline);
                pass.set_vertex_buffer(0, vertex_buffer.slice(..));
                for (index, bind_group) in bind_groups.iter().enumerate() {
                    let first = index as u32 * VERTICES_PER_QUAD;
                    pass.set_bind_group(0, *bind_group, &[]);
                    pass.draw(first..first + VERTICES_PER_QUAD, 0..1);
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}
