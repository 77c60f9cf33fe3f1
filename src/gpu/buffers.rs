use wgpu::util::DeviceExt;
use wgpu::{Buffer, BufferUsages, Device, Queue};

use crate::config::{GRID_DOT_DUTY, GRID_DOT_PERIOD_PX};
use crate::error::PlotError;
use crate::plot::{PlotLayout, PlotVertex};

/// Vertex and uniform buffers backing the plot
pub struct PlotBuffers {
    /// Spines, gridlines and tick marks (line list, written once)
    pub axes_buffer: Buffer,
    pub axes_vertex_count: u32,
    /// Data trace (line strip, rewritten every frame)
    pub trace_buffer: Buffer,
    pub trace_vertex_count: u32,
    /// Uniform buffer for line styling
    pub uniforms_buffer: Buffer,
}

/// Line styling passed to the shader (16 bytes)
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlotUniforms {
    pub dash_period: f32,
    pub dash_duty: f32,
    pub linear_output: u32, // 1 when the surface expects linear colour (sRGB format)
    pub _padding: u32,
}

impl PlotUniforms {
    pub fn for_format(format: wgpu::TextureFormat) -> Self {
        Self {
            dash_period: GRID_DOT_PERIOD_PX,
            dash_duty: GRID_DOT_DUTY,
            linear_output: format.is_srgb() as u32,
            _padding: 0,
        }
    }
}

impl PlotBuffers {
    /// Create buffers for the static axes and an initial trace
    pub fn new(
        device: &Device,
        layout: &PlotLayout,
        format: wgpu::TextureFormat,
        xs: &[f64],
        ys: &[f64],
    ) -> Result<Self, PlotError> {
        let axes = layout.axes_vertices();
        let trace = layout.trace_vertices(xs, ys)?;

        let axes_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("axes-vertex-buffer"),
            contents: bytemuck::cast_slice(&axes),
            usage: BufferUsages::VERTEX,
        });

        let trace_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("trace-vertex-buffer"),
            contents: bytemuck::cast_slice(&trace),
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        });

        let uniforms_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("plot-uniforms-buffer"),
            contents: bytemuck::bytes_of(&PlotUniforms::for_format(format)),
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
        });

        Ok(Self {
            axes_buffer,
            axes_vertex_count: axes.len() as u32,
            trace_buffer,
            trace_vertex_count: trace.len() as u32,
            uniforms_buffer,
        })
    }

    /// Replace the trace's y data, keeping its x positions
    pub fn set_ydata(
        &self,
        queue: &Queue,
        layout: &PlotLayout,
        xs: &[f64],
        ys: &[f64],
    ) -> Result<(), PlotError> {
        if ys.len() != self.trace_vertex_count as usize {
            return Err(PlotError::LengthMismatch {
                xs: self.trace_vertex_count as usize,
                ys: ys.len(),
            });
        }
        let trace = layout.trace_vertices(xs, ys)?;
        queue.write_buffer(&self.trace_buffer, 0, bytemuck::cast_slice(&trace));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniforms_size() {
        assert_eq!(std::mem::size_of::<PlotUniforms>(), 16);
    }

    #[test]
    fn test_uniforms_follow_format() {
        let srgb = PlotUniforms::for_format(wgpu::TextureFormat::Bgra8UnormSrgb);
        assert_eq!(srgb.linear_output, 1);
        let unorm = PlotUniforms::for_format(wgpu::TextureFormat::Bgra8Unorm);
        assert_eq!(unorm.linear_output, 0);
        assert_eq!(unorm.dash_period, GRID_DOT_PERIOD_PX);
    }
}
