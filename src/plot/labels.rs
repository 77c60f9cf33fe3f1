//! Numeric tick labels drawn as line segments.
//!
//! Glyphs are seven-segment style strokes in a unit box (x right, y up),
//! which covers every character a tick value needs: digits, minus sign and
//! decimal point.

/// Segment endpoints in glyph units
pub type Stroke = [(f64, f64); 2];

/// A line segment in figure fractions
pub type Segment = [(f64, f64); 2];

const TOP: Stroke = [(0.0, 1.0), (1.0, 1.0)];
const UPPER_RIGHT: Stroke = [(1.0, 1.0), (1.0, 0.5)];
const LOWER_RIGHT: Stroke = [(1.0, 0.5), (1.0, 0.0)];
const BOTTOM: Stroke = [(0.0, 0.0), (1.0, 0.0)];
const LOWER_LEFT: Stroke = [(0.0, 0.0), (0.0, 0.5)];
const UPPER_LEFT: Stroke = [(0.0, 0.5), (0.0, 1.0)];
const MIDDLE: Stroke = [(0.0, 0.5), (1.0, 0.5)];
const DOT: Stroke = [(0.2, 0.0), (0.2, 0.12)];

/// Size and spacing of label glyphs, in figure fractions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub glyph_width: f64,
    pub glyph_height: f64,
    pub spacing: f64,
}

/// Strokes for one character; unsupported characters draw nothing
pub fn glyph_strokes(c: char) -> &'static [Stroke] {
    match c {
        '0' => &[TOP, UPPER_RIGHT, LOWER_RIGHT, BOTTOM, LOWER_LEFT, UPPER_LEFT],
        '1' => &[UPPER_RIGHT, LOWER_RIGHT],
        '2' => &[TOP, UPPER_RIGHT, MIDDLE, LOWER_LEFT, BOTTOM],
        '3' => &[TOP, UPPER_RIGHT, MIDDLE, LOWER_RIGHT, BOTTOM],
        '4' => &[UPPER_LEFT, MIDDLE, UPPER_RIGHT, LOWER_RIGHT],
        '5' => &[TOP, UPPER_LEFT, MIDDLE, LOWER_RIGHT, BOTTOM],
        '6' => &[TOP, UPPER_LEFT, MIDDLE, LOWER_LEFT, LOWER_RIGHT, BOTTOM],
        '7' => &[TOP, UPPER_RIGHT, LOWER_RIGHT],
        '8' => &[TOP, UPPER_RIGHT, LOWER_RIGHT, BOTTOM, LOWER_LEFT, UPPER_LEFT, MIDDLE],
        '9' => &[TOP, UPPER_RIGHT, LOWER_RIGHT, BOTTOM, UPPER_LEFT, MIDDLE],
        '-' => &[MIDDLE],
        '.' => &[DOT],
        _ => &[],
    }
}

/// Horizontal advance of a character in glyph widths
fn advance(c: char) -> f64 {
    if c == '.' {
        0.4
    } else {
        1.0
    }
}

/// Tick value as text: at most two decimals, trailing zeros dropped.
pub fn tick_label(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Total width of `text` in figure fractions
pub fn text_width(text: &str, style: &TextStyle) -> f64 {
    let count = text.chars().count();
    if count == 0 {
        return 0.0;
    }
    let glyphs: f64 = text.chars().map(advance).sum();
    glyphs * style.glyph_width + (count - 1) as f64 * style.spacing
}

/// Segments for `text` with its bottom-left corner at (`left`, `bottom`)
pub fn text_segments(text: &str, left: f64, bottom: f64, style: &TextStyle) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = left;

    for c in text.chars() {
        for &[(x0, y0), (x1, y1)] in glyph_strokes(c) {
            segments.push([
                (cursor + x0 * style.glyph_width, bottom + y0 * style.glyph_height),
                (cursor + x1 * style.glyph_width, bottom + y1 * style.glyph_height),
            ]);
        }
        cursor += advance(c) * style.glyph_width + style.spacing;
    }

    segments
}
