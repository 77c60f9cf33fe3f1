mod buffers;
mod context;
mod render;

pub use buffers::{PlotBuffers, PlotUniforms};
pub use context::GpuContext;
pub use render::PlotPipeline;
