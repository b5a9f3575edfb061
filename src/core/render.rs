//=========================================================================
// Render Seam
//=========================================================================
//
// Minimal drawing vocabulary shared by scenes and the paint tool.
//
// Architecture:
//   Scene::draw / PaintTool::draw → Canvas::draw_line() → DrawList
//                                                          ↓
//                                               FrameSink (runtime)
//
// No GPU backend lives here. A `Canvas` is anything that accepts line
// segments; `DrawList` records them for the frame.
//
//=========================================================================

//=== Point ===============================================================

/// 2D position in screen space (pixels, top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

//=== Color ===============================================================

/// Linear RGBA color, each channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const PINK: Self = Self::rgb(1.0, 0.4, 0.7);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);

    /// Opaque color from three channels.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

//=== LineSegment =========================================================

/// One recorded `draw_line` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
    pub color: Color,
}

impl LineSegment {
    /// Returns `true` when both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.from == self.to
    }
}

//=== Canvas ==============================================================

/// Line-rendering primitive consumed by scenes and the paint tool.
pub trait Canvas {
    /// Draws a straight segment from `from` to `to`.
    fn draw_line(&mut self, from: Point, to: Point, color: Color);
}

//=== DrawList ============================================================

/// Canvas that records every segment for the current frame.
///
/// Cleared by the runtime at the start of each draw pass; capacity is
/// kept across frames.
#[derive(Debug, Default)]
pub struct DrawList {
    segments: Vec<LineSegment>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list with room for `capacity` segments.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: Vec::with_capacity(capacity),
        }
    }

    /// Recorded segments in draw order.
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Drops all segments, preserving capacity.
    pub fn clear(&mut self) {
        self.segments.clear();
    }
}

impl Canvas for DrawList {
    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.segments.push(LineSegment { from, to, color });
    }
}

//=== FrameSink ===========================================================

/// Receives each finished frame on the core thread.
pub type FrameSink = Box<dyn FnMut(&DrawList) + Send + 'static>;

//=========================================================================
// Unit Tests
//=========================================================================
