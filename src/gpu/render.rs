use wgpu::{
    BindGroup, BindGroupLayout, Buffer, Device, RenderPipeline as WgpuRenderPipeline,
    TextureFormat, TextureView,
};

use super::buffers::PlotBuffers;
use crate::plot::{PixelRect, PlotVertex};

/// Render pipelines for the line plot: one for axes, one for the trace
pub struct PlotPipeline {
    axes_pipeline: WgpuRenderPipeline,
    trace_pipeline: WgpuRenderPipeline,
    bind_group_layout: BindGroupLayout,
}

impl PlotPipeline {
    /// Create the plot pipelines for the given surface format
    pub fn new(device: &Device, format: TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("plot-shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/plot.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("plot-bind-group-layout"),
            entries: &[
                // Line styling (uniform)
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("plot-pipeline-layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let create = |label: &str, topology: wgpu::PrimitiveTopology| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[PlotVertex::layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
        };

        Self {
            axes_pipeline: create("axes-render-pipeline", wgpu::PrimitiveTopology::LineList),
            trace_pipeline: create("trace-render-pipeline", wgpu::PrimitiveTopology::LineStrip),
            bind_group_layout,
        }
    }

    /// Create a bind group for the uniforms buffer
    pub fn create_bind_group(&self, device: &Device, uniforms_buffer: &Buffer) -> BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("plot-bind-group"),
            layout: &self.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms_buffer.as_entire_binding(),
            }],
        })
    }

    /// Draw axes, then the trace clipped to `axes_area`
    pub fn draw(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &TextureView,
        bind_group: &BindGroup,
        buffers: &PlotBuffers,
        axes_area: PixelRect,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("plot-render-pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::WHITE),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_bind_group(0, bind_group, &[]);

        pass.set_pipeline(&self.axes_pipeline);
        pass.set_vertex_buffer(0, buffers.axes_buffer.slice(..));
        pass.draw(0..buffers.axes_vertex_count, 0..1);

        if axes_area.width == 0 || axes_area.height == 0 {
            return;
        }
        pass.set_scissor_rect(axes_area.x, axes_area.y, axes_area.width, axes_area.height);
        pass.set_pipeline(&self.trace_pipeline);
        pass.set_vertex_buffer(0, buffers.trace_buffer.slice(..));
        pass.draw(0..buffers.trace_vertex_count, 0..1);
    }
}
