/// How the fragment shader dashes a line
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashAxis {
    Solid = 0,
    /// Dots follow screen x (horizontal lines)
    Horizontal = 1,
    /// Dots follow screen y (vertical lines)
    Vertical = 2,
}

/// GPU-compatible line vertex.
///
/// Layout: 28 bytes, tightly packed.
/// - position: [f32; 2] = 8 bytes - Normalized device coordinates
/// - color: [f32; 4] = 16 bytes - sRGB colour with alpha
/// - dash_axis: u32 = 4 bytes - [`DashAxis`] discriminant
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlotVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
    pub dash_axis: u32,
}

impl PlotVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4, 2 => Uint32];

    pub fn new(position: [f32; 2], color: [f32; 4], dash: DashAxis) -> Self {
        Self {
            position,
            color,
            dash_axis: dash as u32,
        }
    }

    /// Vertex buffer layout matching `VertexInput` in plot.wgsl
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PlotVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}
