use anyhow::{Context, Result};

use crate::coords::Viewport;
use crate::paint::Color;
use crate::render::TextureStore;

use super::{GraphicsDevice, TextureError, TextureId};

/// Initialization parameters for the GPU layer.
///
/// Keep this structure minimal. Add configuration flags only when a concrete
/// platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Backends wgpu may pick from.
    pub backends: wgpu::Backends,

    pub power_preference: wgpu::PowerPreference,

    /// Forces a software adapter (useful on CI machines without a GPU).
    pub force_fallback_adapter: bool,

    /// Required wgpu features.
    ///
    /// Favor an empty set for portability; sprites need none.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::HighPerformance,
            force_fallback_adapter: false,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
        }
    }
}

/// Owns the wgpu adapter, device and queue.
///
/// This context has no surface: windowing stays with the host engine. Render into
/// an [`OffscreenTarget`] or into any view the host hands over via
/// [`RenderTarget`](crate::render::RenderTarget).
pub struct Gpu {
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,
}

/// Color texture usable as a render attachment and copy source.
pub struct OffscreenTarget {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub format: wgpu::TextureFormat,
    pub viewport: Viewport,
}

impl Gpu {
    /// Acquires an adapter and device.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu; see
    /// [`Gpu::new_blocking`] for synchronous callers.
    pub async fn new(init: GpuInit) -> Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: init.backends,
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: init.power_preference,
                compatible_surface: None,
                force_fallback_adapter: init.force_fallback_adapter,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("pixkit device"),
                required_features: init.required_features,
                required_limits: init.required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        log::debug!("gpu: using adapter {:?}", adapter.get_info().name);

        Ok(Self { adapter, device, queue })
    }

    /// Blocks the current thread on [`Gpu::new`].
    pub fn new_blocking(init: GpuInit) -> Result<Self> {
        pollster::block_on(Self::new(init))
    }

    pub fn adapter_info(&self) -> wgpu::AdapterInfo {
        self.adapter.get_info()
    }

    /// Returns a reference to the logical device.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    /// Returns a reference to the command queue.
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn max_texture_dimension(&self) -> u32 {
        self.device.limits().max_texture_dimension_2d
    }

    /// Creates an offscreen color target of the given size.
    pub fn create_offscreen_target(
        &self,
        viewport: Viewport,
        format: wgpu::TextureFormat,
    ) -> OffscreenTarget {
        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("pixkit offscreen target"),
            size: wgpu::Extent3d {
                width: viewport.width.max(1),
                height: viewport.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        OffscreenTarget { texture, view, format, viewport }
    }

    pub fn create_encoder(&self) -> wgpu::CommandEncoder {
        self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("pixkit frame encoder"),
        })
    }

    pub fn submit(&self, encoder: wgpu::CommandEncoder) {
        self.queue.submit(std::iter::once(encoder.finish()));
    }
}

/// [`GraphicsDevice`] over a wgpu [`Gpu`], storing textures in a [`TextureStore`].
///
/// The viewport is whatever the host reports for the current frame (window
/// inner size or offscreen target size).
pub struct GpuDevice<'a> {
    gpu: &'a Gpu,
    textures: &'a mut TextureStore,
    viewport: Viewport,
}

impl<'a> GpuDevice<'a> {
    #[inline]
    pub fn new(gpu: &'a Gpu, textures: &'a mut TextureStore, viewport: Viewport) -> Self {
        Self { gpu, textures, viewport }
    }

    #[inline]
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

impl GraphicsDevice for GpuDevice<'_> {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn create_texture(
        &mut self,
        width: u32,
        height: u32,
        pixels: &[Color],
    ) -> Result<TextureId, TextureError> {
        self.textures
            .upload(self.gpu.device(), self.gpu.queue(), width, height, pixels)
    }
}
