use std::f64::consts::TAU;
use std::time::Duration;

// ============================================
// Spatial Grid
// ============================================

/// Number of sample points along the x axis
pub const GRID_POINTS: usize = 1000;

/// Spatial domain covered by the grid (inclusive on both ends)
pub const X_MIN: f64 = -10.0;
pub const X_MAX: f64 = 10.0;

// ============================================
// Frame Timing
// ============================================

/// Frames per animation cycle
pub const FRAME_COUNT: usize = 100;

/// Animation time range swept by one cycle
pub const FRAME_TIME_START: f64 = 0.0;
pub const FRAME_TIME_END: f64 = TAU;

/// Delay between successive frames
pub const FRAME_INTERVAL_MS: u64 = 100;

/// Restart from the first frame once the cycle finishes
pub const LOOP_ANIMATION: bool = true;

// ============================================
// Wave Parameters
// ============================================

/// Amplitudes of the two sine components
pub const DEFAULT_A1: f64 = -0.41;
pub const DEFAULT_A2: f64 = -0.3;

/// Angular (spatial) frequencies
pub const DEFAULT_W1: f64 = 1.0;
pub const DEFAULT_W2: f64 = 2.0;

/// Phase rates (multiplied by time)
pub const DEFAULT_G1: f64 = 1.0;
pub const DEFAULT_G2: f64 = 9.92;

/// Carried time samples: count and range
pub const T_SAMPLE_COUNT: usize = 100;
pub const T_SAMPLE_START: f64 = -1.0;
pub const T_SAMPLE_END: f64 = 1.0;

// ============================================
// Plot Styling
// ============================================

/// Vertical axis limit (symmetric around zero)
pub const Y_LIMIT: f64 = 6.78;

/// Major tick spacing
pub const X_TICK_STEP: f64 = 1.0;
pub const Y_TICK_STEP: f64 = 0.5;

/// Axes rectangle as figure fractions (left, right, bottom, top)
pub const AXES_LEFT: f64 = 0.125;
pub const AXES_RIGHT: f64 = 0.9;
pub const AXES_BOTTOM: f64 = 0.11;
pub const AXES_TOP: f64 = 0.88;

/// Tick mark lengths as figure fractions
pub const MAJOR_TICK_LENGTH: f64 = 0.012;
pub const MINOR_TICK_LENGTH: f64 = 0.007;

/// Tick label glyph size, gap between glyphs, and gap to the tick mark
pub const LABEL_GLYPH_WIDTH: f64 = 0.009;
pub const LABEL_GLYPH_HEIGHT: f64 = 0.02;
pub const LABEL_SPACING: f64 = 0.003;
pub const LABEL_PAD: f64 = 0.008;

/// Matplotlib's default first line colour (#1f77b4)
pub const TRACE_COLOR: [f32; 4] = [0.122, 0.467, 0.706, 1.0];
pub const AXES_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
pub const GRID_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Dotted gridline pattern in pixels: one period, fraction drawn
pub const GRID_DOT_PERIOD_PX: f32 = 3.0;
pub const GRID_DOT_DUTY: f32 = 0.4;

// ============================================
// Window
// ============================================

pub const WINDOW_TITLE: &str = "Wave Superposition";
pub const WINDOW_WIDTH: u32 = 640;
pub const WINDOW_HEIGHT: u32 = 480;

/// Settings for one animation run
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationConfig {
    pub grid_points: usize,
    pub x_range: (f64, f64),
    pub frame_count: usize,
    pub time_range: (f64, f64),
    pub frame_interval: Duration,
    pub looping: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            grid_points: GRID_POINTS,
            x_range: (X_MIN, X_MAX),
            frame_count: FRAME_COUNT,
            time_range: (FRAME_TIME_START, FRAME_TIME_END),
            frame_interval: Duration::from_millis(FRAME_INTERVAL_MS),
            looping: LOOP_ANIMATION,
        }
    }
}
