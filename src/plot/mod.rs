mod labels;
mod layout;
mod vertex;

pub use labels::{glyph_strokes, text_segments, text_width, tick_label, TextStyle};
pub use layout::{minor_ticks, AxesRect, AxisRange, PixelRect, PlotLayout};
pub use vertex::{DashAxis, PlotVertex};
