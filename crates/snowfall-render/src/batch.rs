//! Per-frame circle batch: collects draw calls, then submits one instanced draw

use crate::circle_pipeline::{CircleInstance, CirclePipeline};
use snowfall_core::Rgba;
use snowfall_particles::DrawSurface;

/// A `DrawSurface` that queues circles for the GPU
#[derive(Default)]
pub struct CircleBatch {
    instances: Vec<CircleInstance>,
    instance_buffer: Option<wgpu::Buffer>,
    /// Capacity of `instance_buffer` in instances
    buffer_capacity: usize,
}

impl CircleBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn instances(&self) -> &[CircleInstance] {
        &self.instances
    }

    /// Clear `view` to `background` and draw every queued circle on top
    #[allow(clippy::too_many_arguments)]
    pub fn submit(
        &mut self,
        pipeline: &CirclePipeline,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        width: u32,
        height: u32,
        background: Rgba,
    ) {
        pipeline.set_viewport(queue, width, height);
        self.upload(device, queue);

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Snowfall Frame Encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Snowfall Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color(background)),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // An empty batch still clears the frame
            let buffer = self.instance_buffer.as_ref().filter(|_| !self.instances.is_empty());
            if let Some(buffer) = buffer {
                let byte_len =
                    (self.instances.len() * std::mem::size_of::<CircleInstance>()) as u64;
                pass.set_pipeline(&pipeline.pipeline);
                pass.set_bind_group(0, &pipeline.uniform_bind_group, &[]);
                pass.set_vertex_buffer(0, buffer.slice(..byte_len));
                pass.set_index_buffer(
                    pipeline.quad_index_buffer.slice(..),
                    wgpu::IndexFormat::Uint16,
                );
                pass.draw_indexed(0..6, 0, 0..self.instances.len() as u32);
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    /// Copy queued instances to the GPU, growing the buffer when needed
    fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) {
        if self.instances.is_empty() {
            return;
        }
        if self.instance_buffer.is_none() || self.buffer_capacity < self.instances.len() {
            let capacity = self.instances.len().next_power_of_two();
            tracing::debug!(capacity, "growing circle instance buffer");
            self.instance_buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Circle Instance Buffer"),
                size: (capacity * std::mem::size_of::<CircleInstance>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.buffer_capacity = capacity;
        }
        if let Some(buffer) = &self.instance_buffer {
            queue.write_buffer(buffer, 0, bytemuck::cast_slice(&self.instances));
        }
    }
}

impl DrawSurface for CircleBatch {
    fn fill_circle(&mut self, center: [f32; 2], diameter: f32, color: Rgba) {
        self.instances.push(CircleInstance {
            center_diameter: [center[0], center[1], diameter, 0.0],
            color: color.to_linear_f32(),
        });
    }
}

/// Background color as a wgpu clear value (linear space)
pub fn clear_color(color: Rgba) -> wgpu::Color {
    let [r, g, b, a] = color.to_linear_f32();
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}
