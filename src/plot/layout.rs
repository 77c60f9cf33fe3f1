use crate::animation::sampling::arange;
use crate::config::{
    AXES_BOTTOM, AXES_COLOR, AXES_LEFT, AXES_RIGHT, AXES_TOP, GRID_COLOR, LABEL_GLYPH_HEIGHT,
    LABEL_GLYPH_WIDTH, LABEL_PAD, LABEL_SPACING, MAJOR_TICK_LENGTH, MINOR_TICK_LENGTH,
    TRACE_COLOR, X_MAX, X_MIN, X_TICK_STEP, Y_LIMIT, Y_TICK_STEP,
};
use crate::error::PlotError;
use crate::plot::labels::{text_segments, text_width, tick_label, TextStyle};
use crate::plot::vertex::{DashAxis, PlotVertex};

/// Closed interval shown along one axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Position of `value` as a fraction of the range (0 at min, 1 at max)
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min - 1e-9 && value <= self.max + 1e-9
    }
}

/// Axes rectangle in figure fractions, origin bottom-left
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxesRect {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

/// Pixel rectangle with the origin at the top-left of the surface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Static description of the plot: limits, ticks, gridlines and placement.
#[derive(Clone, Debug)]
pub struct PlotLayout {
    pub x_axis: AxisRange,
    pub y_axis: AxisRange,
    pub x_ticks: Vec<f64>,
    pub y_ticks: Vec<f64>,
    pub x_minor_ticks: Vec<f64>,
    pub y_minor_ticks: Vec<f64>,
    pub axes: AxesRect,
    pub label_style: TextStyle,
}

impl Default for PlotLayout {
    fn default() -> Self {
        Self::new(
            AxisRange::new(X_MIN, X_MAX),
            AxisRange::new(-Y_LIMIT, Y_LIMIT),
            arange(X_MIN, X_MAX + X_TICK_STEP, X_TICK_STEP),
            arange(-Y_LIMIT, Y_LIMIT, Y_TICK_STEP),
        )
    }
}

impl PlotLayout {
    pub fn new(x_axis: AxisRange, y_axis: AxisRange, x_ticks: Vec<f64>, y_ticks: Vec<f64>) -> Self {
        let x_minor_ticks = minor_ticks(&x_ticks, &x_axis);
        let y_minor_ticks = minor_ticks(&y_ticks, &y_axis);

        Self {
            x_axis,
            y_axis,
            x_ticks,
            y_ticks,
            x_minor_ticks,
            y_minor_ticks,
            axes: AxesRect {
                left: AXES_LEFT,
                right: AXES_RIGHT,
                bottom: AXES_BOTTOM,
                top: AXES_TOP,
            },
            label_style: TextStyle {
                glyph_width: LABEL_GLYPH_WIDTH,
                glyph_height: LABEL_GLYPH_HEIGHT,
                spacing: LABEL_SPACING,
            },
        }
    }

    /// Map a data point to normalized device coordinates
    pub fn data_to_ndc(&self, x: f64, y: f64) -> [f32; 2] {
        let (fx, fy) = self.data_to_figure(x, y);
        figure_to_ndc(fx, fy)
    }

    /// Map a data point to figure fractions
    pub fn data_to_figure(&self, x: f64, y: f64) -> (f64, f64) {
        let fx = self.axes.left + self.x_axis.normalize(x) * (self.axes.right - self.axes.left);
        let fy = self.axes.bottom + self.y_axis.normalize(y) * (self.axes.top - self.axes.bottom);
        (fx, fy)
    }

    /// Axes area in pixels for a surface of the given size, for scissoring
    pub fn axes_pixels(&self, width: u32, height: u32) -> PixelRect {
        let w = width as f64;
        let h = height as f64;
        let x0 = (self.axes.left * w).floor();
        let x1 = (self.axes.right * w).ceil().min(w);
        let y0 = ((1.0 - self.axes.top) * h).floor();
        let y1 = ((1.0 - self.axes.bottom) * h).ceil().min(h);

        PixelRect {
            x: x0 as u32,
            y: y0 as u32,
            width: (x1 - x0).max(0.0) as u32,
            height: (y1 - y0).max(0.0) as u32,
        }
    }

    /// Line-list geometry for spines, dotted major gridlines and tick marks
    pub fn axes_vertices(&self) -> Vec<PlotVertex> {
        let mut vertices = Vec::new();
        let (x0, x1) = (self.x_axis.min, self.x_axis.max);
        let (y0, y1) = (self.y_axis.min, self.y_axis.max);

        // Gridlines at major ticks only
        for &x in self.x_ticks.iter().filter(|&&x| self.x_axis.contains(x)) {
            self.push_segment(&mut vertices, (x, y0), (x, y1), GRID_COLOR, DashAxis::Vertical);
        }
        for &y in self.y_ticks.iter().filter(|&&y| self.y_axis.contains(y)) {
            self.push_segment(&mut vertices, (x0, y), (x1, y), GRID_COLOR, DashAxis::Horizontal);
        }

        // Spines
        let corners = [(x0, y0), (x1, y0), (x1, y1), (x0, y1)];
        for i in 0..corners.len() {
            let next = corners[(i + 1) % corners.len()];
            self.push_segment(&mut vertices, corners[i], next, AXES_COLOR, DashAxis::Solid);
        }

        // Outward ticks on the bottom and left spines
        let [_, spine_bottom] = figure_to_ndc(0.0, self.axes.bottom);
        let [spine_left, _] = figure_to_ndc(self.axes.left, 0.0);
        for (ticks, length) in [
            (&self.x_ticks, MAJOR_TICK_LENGTH),
            (&self.x_minor_ticks, MINOR_TICK_LENGTH),
        ] {
            for &x in ticks.iter().filter(|&&x| self.x_axis.contains(x)) {
                let [nx, _] = self.data_to_ndc(x, y0);
                let [_, below] = figure_to_ndc(0.0, self.axes.bottom - length);
                vertices.push(PlotVertex::new([nx, spine_bottom], AXES_COLOR, DashAxis::Solid));
                vertices.push(PlotVertex::new([nx, below], AXES_COLOR, DashAxis::Solid));
            }
        }
        for (ticks, length) in [
            (&self.y_ticks, MAJOR_TICK_LENGTH),
            (&self.y_minor_ticks, MINOR_TICK_LENGTH),
        ] {
            for &y in ticks.iter().filter(|&&y| self.y_axis.contains(y)) {
                let [_, ny] = self.data_to_ndc(x0, y);
                let [outside, _] = figure_to_ndc(self.axes.left - length, 0.0);
                vertices.push(PlotVertex::new([spine_left, ny], AXES_COLOR, DashAxis::Solid));
                vertices.push(PlotVertex::new([outside, ny], AXES_COLOR, DashAxis::Solid));
            }
        }

        vertices.extend(self.label_vertices());
        vertices
    }

    /// Line-list geometry for the major tick labels: centered below the
    /// x ticks, right-aligned left of the y ticks
    pub fn label_vertices(&self) -> Vec<PlotVertex> {
        let style = &self.label_style;
        let mut segments = Vec::new();

        let x_label_bottom =
            self.axes.bottom - MAJOR_TICK_LENGTH - LABEL_PAD - style.glyph_height;
        for &x in self.x_ticks.iter().filter(|&&x| self.x_axis.contains(x)) {
            let text = tick_label(x);
            let (fx, _) = self.data_to_figure(x, self.y_axis.min);
            let left = fx - text_width(&text, style) / 2.0;
            segments.extend(text_segments(&text, left, x_label_bottom, style));
        }

        let y_label_right = self.axes.left - MAJOR_TICK_LENGTH - LABEL_PAD;
        for &y in self.y_ticks.iter().filter(|&&y| self.y_axis.contains(y)) {
            let text = tick_label(y);
            let (_, fy) = self.data_to_figure(self.x_axis.min, y);
            let left = y_label_right - text_width(&text, style);
            segments.extend(text_segments(&text, left, fy - style.glyph_height / 2.0, style));
        }

        segments
            .into_iter()
            .flat_map(|[(x0, y0), (x1, y1)]| {
                [
                    PlotVertex::new(figure_to_ndc(x0, y0), AXES_COLOR, DashAxis::Solid),
                    PlotVertex::new(figure_to_ndc(x1, y1), AXES_COLOR, DashAxis::Solid),
                ]
            })
            .collect()
    }

    /// Line-strip geometry for the data trace
    pub fn trace_vertices(&self, xs: &[f64], ys: &[f64]) -> Result<Vec<PlotVertex>, PlotError> {
        if xs.len() != ys.len() {
            return Err(PlotError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }

        Ok(xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| PlotVertex::new(self.data_to_ndc(x, y), TRACE_COLOR, DashAxis::Solid))
            .collect())
    }

    fn push_segment(
        &self,
        vertices: &mut Vec<PlotVertex>,
        from: (f64, f64),
        to: (f64, f64),
        color: [f32; 4],
        dash: DashAxis,
    ) {
        vertices.push(PlotVertex::new(self.data_to_ndc(from.0, from.1), color, dash));
        vertices.push(PlotVertex::new(self.data_to_ndc(to.0, to.1), color, dash));
    }
}

fn figure_to_ndc(fx: f64, fy: f64) -> [f32; 2] {
    [(fx * 2.0 - 1.0) as f32, (fy * 2.0 - 1.0) as f32]
}

/// Minor tick positions between (and beyond) evenly spaced major ticks.
///
/// Spacings of 1, 2.5, 5 or 10 (times a power of ten) split into 5
/// divisions, all others into 4. Positions outside `range` or on a major tick are dropped.
pub fn minor_ticks(major: &[f64], range: &AxisRange) -> Vec<f64> {
    if major.len() < 2 {
        return Vec::new();
    }
    let step = major[1] - major[0];
    if !(step > 0.0) {
        return Vec::new();
    }

    let mantissa = step / 10f64.powf(step.log10().floor());
    let divisions = if [1.0, 2.5, 5.0, 10.0]
        .iter()
        .any(|m| (mantissa - m).abs() < 1e-9)
    {
        5
    } else {
        4
    };
    let minor_step = step / divisions as f64;

    let first = major[0] - ((major[0] - range.min) / minor_step).floor() * minor_step;
    let tolerance = minor_step * 1e-6;

    let mut ticks = Vec::new();
    let mut i = 0;
    loop {
        let value = first + i as f64 * minor_step;
        if value > range.max + tolerance {
            break;
        }
        let on_major = ((value - major[0]) / step - ((value - major[0]) / step).round()).abs()
            * step
            < tolerance;
        if !on_major && range.contains(value) {
            ticks.push(value);
        }
        i += 1;
    }
    ticks
}
