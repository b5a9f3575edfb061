//=========================================================================
// Paint Tool
//=========================================================================
//
// Turns per-tick pointer samples into a few renderable polylines.
//
// Architecture:
//   PaintInput (pointer, chord) → update() → strokes[line_index]
//                                              ↓
//                               draw() → Canvas::draw_line()
//
// Recording stops once every stroke slot is complete; only the clear
// chord (rising edge) brings the tool back to an empty state.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, trace};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::KeyChord;
use crate::core::render::{Canvas, Point};

//=== Module Declarations =================================================

mod config;
mod stroke;

//=== Public API ==========================================================

pub use config::PaintConfig;
pub use stroke::Stroke;

//=== PaintInput ==========================================================

/// Pointer and keyboard queries the paint tool polls once per tick.
pub trait PaintInput {
    /// Whether the touch contact (or primary button) is down.
    fn pointer_down(&self) -> bool;

    /// Current pointer position in screen space.
    fn pointer_position(&self) -> Point;

    /// Whether `chord` is fully held right now.
    fn chord_held(&self, chord: KeyChord) -> bool;
}

//=== PaintError ==========================================================

/// Reasons a sampled point was not recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaintError {
    /// Every point slot of the active stroke is used.
    #[error("stroke {stroke} is full ({capacity} points)")]
    StrokeFull { stroke: usize, capacity: usize },

    /// All stroke slots are complete.
    #[error("no active stroke, all slots are complete")]
    NoActiveStroke,
}

//=== PaintTool ===========================================================

/// Freehand stroke recorder.
pub struct PaintTool {
    config: PaintConfig,
    strokes: Vec<Stroke>,
    line_index: usize,
    pointer_was_down: bool,
    chord_latch: bool,
}

impl PaintTool {
    //--- Construction -----------------------------------------------------

    pub fn new(config: PaintConfig) -> Self {
        let strokes = (0..config.max_strokes())
            .map(|_| Stroke::new(config.max_points()))
            .collect();

        Self {
            config,
            strokes,
            line_index: 0,
            pointer_was_down: false,
            chord_latch: false,
        }
    }

    //--- Lifecycle --------------------------------------------------------

    /// Empties every stroke and returns to the first slot.
    pub fn init(&mut self) {
        debug!(
            "Paint tool ready: {} strokes x {} points, clear with {}",
            self.strokes.len(),
            self.config.max_points(),
            self.config.clear_chord()
        );
        self.clear_strokes();
    }

    /// Samples input for one tick.
    ///
    /// 1. On the tick the clear chord becomes held, wipes all strokes.
    /// 2. While a stroke slot remains, records the pointer when down or
    ///    completes the active stroke on release.
    pub fn update<I>(&mut self, input: &I)
    where
        I: PaintInput + ?Sized,
    {
        let chord_held = input.chord_held(self.config.clear_chord());
        if chord_held && !self.chord_latch {
            info!("Clearing all strokes ({})", self.config.clear_chord());
            self.clear_strokes();
        }
        self.chord_latch = chord_held;

        if self.is_complete() {
            return;
        }

        if input.pointer_down() {
            if let Err(e) = self.record_point(input.pointer_position()) {
                trace!("Point dropped: {}", e);
            }
            self.pointer_was_down = true;
        } else if self.pointer_was_down {
            self.release();
        }
    }

    /// Emits every recorded segment, colored by stroke slot.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        // Suppression follows the stroke being recorded, not the slot
        // being drawn; with every slot complete nothing is suppressed.
        // `release` flags a stroke only as it moves past it, so the active
        // stroke's flag is never set here and every frame draws in full.
        if self
            .active_stroke()
            .is_some_and(Stroke::is_first_point_pending)
        {
            return;
        }

        for (slot, stroke) in self.strokes.iter().enumerate() {
            let color = self.config.color_for(slot);
            for (from, to) in stroke.segments() {
                canvas.draw_line(from, to, color);
            }
        }
    }

    pub fn uninit(&mut self) {
        trace!("Paint tool uninit");
    }

    //--- Recording --------------------------------------------------------

    /// Appends `point` to the active stroke and returns its index there.
    pub fn record_point(&mut self, point: Point) -> Result<usize, PaintError> {
        let slot = self.line_index;
        let stroke = self
            .strokes
            .get_mut(slot)
            .ok_or(PaintError::NoActiveStroke)?;

        stroke.push(point).ok_or(PaintError::StrokeFull {
            stroke: slot,
            capacity: stroke.capacity(),
        })
    }

    //--- Queries ----------------------------------------------------------

    /// Slot currently recording; equals the slot count once all are done.
    pub fn line_index(&self) -> usize {
        self.line_index
    }

    pub fn stroke(&self, slot: usize) -> Option<&Stroke> {
        self.strokes.get(slot)
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Returns `true` once every stroke slot has been released.
    pub fn is_complete(&self) -> bool {
        self.line_index >= self.strokes.len()
    }

    pub fn config(&self) -> &PaintConfig {
        &self.config
    }

    //--- Internal Helpers -------------------------------------------------

    fn active_stroke(&self) -> Option<&Stroke> {
        self.strokes.get(self.line_index)
    }

    fn release(&mut self) {
        if let Some(stroke) = self.strokes.get_mut(self.line_index) {
            stroke.mark_first_point_pending();
            debug!("Stroke {} complete with {} points", self.line_index, stroke.len());
        }
        self.line_index += 1;
        self.pointer_was_down = false;
    }

    /// Clears stroke data; the chord latch is left alone.
    fn clear_strokes(&mut self) {
        for stroke in &mut self.strokes {
            stroke.clear();
        }
        self.line_index = 0;
        self.pointer_was_down = false;
    }
}

impl Default for PaintTool {
    fn default() -> Self {
        Self::new(PaintConfig::default())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::{Color, DrawList};

    //--- Test Helpers -----------------------------------------------------

    /// Scripted input for one tick.
    #[derive(Default)]
    struct FakeInput {
        down: bool,
        position: Point,
        chord: bool,
    }

    impl PaintInput for FakeInput {
        fn pointer_down(&self) -> bool {
            self.down
        }

        fn pointer_position(&self) -> Point {
            self.position
        }

        fn chord_held(&self, _chord: KeyChord) -> bool {
            self.chord
        }
    }

    fn pointer_at(x: f32, y: f32) -> FakeInput {
        FakeInput { down: true, position: Point::new(x, y), chord: false }
    }

    fn pointer_up() -> FakeInput {
        FakeInput::default()
    }

    fn chord() -> FakeInput {
        FakeInput { chord: true, ..FakeInput::default() }
    }

    /// Draws `points` samples then releases.
    fn stroke_with(tool: &mut PaintTool, points: usize) {
        for i in 0..points {
            tool.update(&pointer_at(i as f32, 0.0));
        }
        tool.update(&pointer_up());
    }

    fn point_counts(tool: &PaintTool) -> Vec<usize> {
        tool.strokes().iter().map(Stroke::len).collect()
    }

    //=====================================================================
    // Recording
    //=====================================================================

    #[test]
    fn init_leaves_tool_empty() {
        let mut tool = PaintTool::default();
        stroke_with(&mut tool, 4);

        tool.init();

        assert_eq!(tool.line_index(), 0);
        assert_eq!(point_counts(&tool), vec![0, 0, 0]);
    }

    #[test]
    fn pointer_down_records_into_active_stroke() {
        let mut tool = PaintTool::default();

        tool.update(&pointer_at(1.0, 2.0));
        tool.update(&pointer_at(3.0, 4.0));

        assert_eq!(tool.line_index(), 0);
        assert_eq!(
            tool.stroke(0).map(Stroke::points),
            Some(&[Point::new(1.0, 2.0), Point::new(3.0, 4.0)][..])
        );
    }

    #[test]
    fn release_completes_stroke_and_advances() {
        let mut tool = PaintTool::default();

        stroke_with(&mut tool, 3);

        assert_eq!(tool.line_index(), 1);
        assert!(tool.stroke(0).is_some_and(Stroke::is_first_point_pending));
        assert!(tool.stroke(1).is_some_and(Stroke::is_empty));
    }

    #[test]
    fn idle_pointer_does_not_advance() {
        let mut tool = PaintTool::default();
        for _ in 0..10 {
            tool.update(&pointer_up());
        }
        assert_eq!(tool.line_index(), 0);
    }

    #[test]
    fn overflow_point_leaves_stroke_unchanged() {
        let mut tool = PaintTool::default();
        for i in 0..256 {
            tool.update(&pointer_at(i as f32, 1.0));
        }
        let before = tool.stroke(0).map(|s| s.points().to_vec());

        tool.update(&pointer_at(999.0, 999.0));

        assert_eq!(tool.stroke(0).map(|s| s.points().to_vec()), before);
        assert_eq!(tool.stroke(0).map(Stroke::len), Some(256));
        assert_eq!(
            tool.record_point(Point::ZERO),
            Err(PaintError::StrokeFull { stroke: 0, capacity: 256 })
        );
    }

    #[test]
    fn fourth_stroke_records_nothing() {
        let mut tool = PaintTool::default();
        stroke_with(&mut tool, 2);
        stroke_with(&mut tool, 3);
        stroke_with(&mut tool, 4);
        assert!(tool.is_complete());

        stroke_with(&mut tool, 5);

        assert_eq!(tool.line_index(), 3);
        assert_eq!(point_counts(&tool), vec![2, 3, 4]);
        assert_eq!(tool.record_point(Point::ZERO), Err(PaintError::NoActiveStroke));
    }

    //=====================================================================
    // Clear Chord
    //=====================================================================

    #[test]
    fn chord_edge_clears_everything() {
        let mut tool = PaintTool::default();
        stroke_with(&mut tool, 2);
        stroke_with(&mut tool, 2);
        stroke_with(&mut tool, 2);

        tool.update(&chord());

        assert_eq!(tool.line_index(), 0);
        assert_eq!(point_counts(&tool), vec![0, 0, 0]);
        assert!(tool.strokes().iter().all(|s| !s.is_first_point_pending()));
    }

    #[test]
    fn holding_chord_clears_once() {
        let mut tool = PaintTool::default();
        stroke_with(&mut tool, 2);

        // Rising edge clears, then drawing continues with the chord held
        tool.update(&chord());
        for i in 0..3 {
            tool.update(&FakeInput {
                down: true,
                position: Point::new(i as f32, 0.0),
                chord: true,
            });
        }
        assert_eq!(tool.stroke(0).map(Stroke::len), Some(3));

        // Released then pressed again: second edge
        tool.update(&pointer_up());
        tool.update(&chord());
        assert_eq!(tool.stroke(0).map(Stroke::len), Some(0));
    }

    #[test]
    fn chord_clear_forgets_pointer_down() {
        let mut tool = PaintTool::default();
        tool.update(&pointer_at(0.0, 0.0));

        // Pointer lifts on the same tick the chord clears
        tool.update(&chord());

        assert_eq!(tool.line_index(), 0, "no release after a clear");
    }

    //=====================================================================
    // Drawing
    //=====================================================================

    #[test]
    fn draw_colors_by_slot() {
        let mut tool = PaintTool::default();
        stroke_with(&mut tool, 2);
        stroke_with(&mut tool, 1);
        stroke_with(&mut tool, 3);

        let mut canvas = DrawList::new();
        tool.draw(&mut canvas);

        let colors: Vec<_> = canvas.segments().iter().map(|s| s.color).collect();
        assert_eq!(
            colors,
            vec![
                Color::WHITE, Color::WHITE,
                Color::PINK,
                Color::YELLOW, Color::YELLOW, Color::YELLOW,
            ]
        );
    }

    #[test]
    fn draw_connects_consecutive_points() {
        let mut tool = PaintTool::default();
        tool.update(&pointer_at(0.0, 0.0));
        tool.update(&pointer_at(10.0, 0.0));

        let mut canvas = DrawList::new();
        tool.draw(&mut canvas);

        let segments = canvas.segments();
        assert_eq!(segments.len(), 2);
        assert!(segments[0].is_degenerate());
        assert_eq!(segments[1].from, Point::new(0.0, 0.0));
        assert_eq!(segments[1].to, Point::new(10.0, 0.0));
    }

    #[test]
    fn released_strokes_stay_visible_in_every_state() {
        let mut tool = PaintTool::default();

        // Between strokes: stroke 0 is flagged, active stroke 1 is not
        stroke_with(&mut tool, 2);
        assert!(tool.stroke(0).is_some_and(Stroke::is_first_point_pending));
        assert!(!tool.active_stroke().is_some_and(Stroke::is_first_point_pending));
        let mut canvas = DrawList::new();
        tool.draw(&mut canvas);
        assert_eq!(canvas.len(), 2);

        // First point of the next stroke
        tool.update(&pointer_at(50.0, 50.0));
        canvas.clear();
        tool.draw(&mut canvas);
        assert_eq!(canvas.len(), 3);

        // All slots complete: no active stroke
        tool.update(&pointer_up());
        stroke_with(&mut tool, 1);
        assert!(tool.active_stroke().is_none());
        canvas.clear();
        tool.draw(&mut canvas);
        assert_eq!(canvas.len(), 4);
    }

    #[test]
    fn empty_tool_draws_nothing() {
        let mut canvas = DrawList::new();
        PaintTool::default().draw(&mut canvas);
        assert!(canvas.is_empty());
    }

    #[test]
    fn custom_config_limits_apply() {
        let config = PaintConfig::new().with_max_strokes(1).with_max_points(2);
        let mut tool = PaintTool::new(config);

        stroke_with(&mut tool, 5);

        assert!(tool.is_complete());
        assert_eq!(point_counts(&tool), vec![2]);
    }
}
