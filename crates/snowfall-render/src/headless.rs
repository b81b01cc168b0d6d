//! Offscreen capture of a snowfall frame
//!
//! `HeadlessContext` owns a device, a circle pipeline and a single color
//! target. `capture` draws a filled `CircleBatch` into that target and hands
//! the frame back as an `RgbaImage`.

use crate::batch::CircleBatch;
use crate::circle_pipeline::CirclePipeline;
use crate::context::RenderError;
use image::RgbaImage;
use snowfall_core::{Rgba, Viewport};

/// Capture target format; sRGB so the PNG matches what the window shows
const CAPTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

const BYTES_PER_PIXEL: u32 = 4;

/// Byte layout of a texture-to-buffer copy.
///
/// wgpu requires every copied row to start on a `COPY_BYTES_PER_ROW_ALIGNMENT`
/// boundary, so the staging buffer holds `padded` bytes per row of which only
/// `unpadded` are pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowLayout {
    height: u32,
    unpadded: u32,
    padded: u32,
}

impl RowLayout {
    fn new(viewport: Viewport) -> Self {
        let unpadded = viewport.width * BYTES_PER_PIXEL;
        let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
        Self {
            height: viewport.height,
            unpadded,
            padded: unpadded.div_ceil(align) * align,
        }
    }

    fn buffer_size(&self) -> u64 {
        self.padded as u64 * self.height as u64
    }

    /// Drop the per-row padding, keeping tightly packed RGBA rows
    fn strip(&self, data: &[u8]) -> Vec<u8> {
        data.chunks_exact(self.padded as usize)
            .take(self.height as usize)
            .flat_map(|row| &row[..self.unpadded as usize])
            .copied()
            .collect()
    }
}

/// Offscreen wgpu context that captures snowfall frames to images
pub struct HeadlessContext {
    device: wgpu::Device,
    queue: wgpu::Queue,
    pipeline: CirclePipeline,
    viewport: Viewport,
    target: wgpu::Texture,
    target_view: wgpu::TextureView,
}

impl HeadlessContext {
    /// Create a context whose frames are `viewport` pixels in size
    pub async fn new(viewport: Viewport) -> Result<Self, RenderError> {
        if viewport.is_empty() {
            return Err(RenderError::EmptyTarget {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::AdapterNotFound)?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Snowfall Capture Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await
            .map_err(|e| RenderError::DeviceCreation(e.to_string()))?;

        let pipeline = CirclePipeline::new(&device, CAPTURE_FORMAT);

        let target = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Snowfall Capture Target"),
            size: extent(viewport),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: CAPTURE_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let target_view = target.create_view(&wgpu::TextureViewDescriptor::default());

        tracing::debug!(
            adapter = %adapter.get_info().name,
            width = viewport.width,
            height = viewport.height,
            "capture context ready"
        );

        Ok(Self {
            device,
            queue,
            pipeline,
            viewport,
            target,
            target_view,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Draw `batch` over `background` and read the frame back.
    ///
    /// Blocks until the GPU has finished the copy.
    pub fn capture(
        &mut self,
        batch: &mut CircleBatch,
        background: Rgba,
    ) -> Result<RgbaImage, RenderError> {
        batch.submit(
            &self.pipeline,
            &self.device,
            &self.queue,
            &self.target_view,
            self.viewport.width,
            self.viewport.height,
            background,
        );

        let layout = RowLayout::new(self.viewport);
        let staging = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Snowfall Capture Readback"),
            size: layout.buffer_size(),
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Snowfall Capture Encoder"),
            });
        encoder.copy_texture_to_buffer(
            wgpu::ImageCopyTexture {
                texture: &self.target,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::ImageCopyBuffer {
                buffer: &staging,
                layout: wgpu::ImageDataLayout {
                    offset: 0,
                    bytes_per_row: Some(layout.padded),
                    rows_per_image: Some(layout.height),
                },
            },
            extent(self.viewport),
        );
        self.queue.submit(std::iter::once(encoder.finish()));

        let slice = staging.slice(..);
        let (tx, rx) = std::sync::mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        self.device.poll(wgpu::Maintain::Wait);
        rx.recv()
            .map_err(|e| RenderError::BufferReadFailed(e.to_string()))?
            .map_err(|e| RenderError::BufferReadFailed(e.to_string()))?;

        let pixels = layout.strip(&slice.get_mapped_range());
        staging.unmap();

        RgbaImage::from_raw(self.viewport.width, self.viewport.height, pixels).ok_or_else(|| {
            RenderError::BufferReadFailed("readback does not cover the frame".to_string())
        })
    }
}

fn extent(viewport: Viewport) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: viewport.width,
        height: viewport.height,
        depth_or_array_layers: 1,
    }
}
