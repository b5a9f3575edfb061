//=========================================================================
// Paint Configuration
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::KeyChord;
use crate::core::render::Color;

//=== PaintConfig =========================================================

/// Limits, hotkey and colors for the [`PaintTool`](super::PaintTool).
///
/// # Default Values
///
/// - **Strokes**: 3
/// - **Points per stroke**: 256
/// - **Clear chord**: Ctrl+Z
/// - **Palette**: white, pink, yellow (one per stroke slot)
///
/// ```
/// # use stagepaint::core::paint::PaintConfig;
/// # use stagepaint::core::input::{KeyChord, KeyCode, Modifiers};
/// let config = PaintConfig::new()
///     .with_max_points(512)
///     .with_clear_chord(KeyChord::new(Modifiers::CTRL, KeyCode::Backspace));
/// assert_eq!(config.max_points(), 512);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PaintConfig {
    max_strokes: usize,
    max_points: usize,
    clear_chord: KeyChord,
    palette: Vec<Color>,
}

impl PaintConfig {
    pub fn new() -> Self {
        Self {
            max_strokes: 3,
            max_points: 256,
            clear_chord: KeyChord::CTRL_Z,
            palette: vec![Color::WHITE, Color::PINK, Color::YELLOW],
        }
    }

    /// Sets how many strokes are recorded before input is ignored.
    ///
    /// # Panics
    ///
    /// Panics if `count == 0`.
    pub fn with_max_strokes(mut self, count: usize) -> Self {
        assert!(count > 0, "Stroke count must be positive");
        self.max_strokes = count;
        self
    }

    /// Sets the number of point slots per stroke.
    ///
    /// # Panics
    ///
    /// Panics if `count == 0`.
    pub fn with_max_points(mut self, count: usize) -> Self {
        assert!(count > 0, "Point capacity must be positive");
        self.max_points = count;
        self
    }

    /// Sets the chord that wipes all strokes.
    pub fn with_clear_chord(mut self, chord: KeyChord) -> Self {
        self.clear_chord = chord;
        self
    }

    /// Sets stroke colors; slot `k` uses `palette[k % palette.len()]`.
    ///
    /// # Panics
    ///
    /// Panics if `palette` is empty.
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        assert!(!palette.is_empty(), "Palette must contain at least one color");
        self.palette = palette;
        self
    }

    pub fn max_strokes(&self) -> usize {
        self.max_strokes
    }

    pub fn max_points(&self) -> usize {
        self.max_points
    }

    pub fn clear_chord(&self) -> KeyChord {
        self.clear_chord
    }

    /// Color for stroke slot `slot`.
    pub fn color_for(&self, slot: usize) -> Color {
        self.palette[slot % self.palette.len()]
    }
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
