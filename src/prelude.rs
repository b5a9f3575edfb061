//=========================================================================
// Prelude
//=========================================================================
//
// Re-exports the types most applications need.
//
// Usage:
//   use stagepaint::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::engine::{Engine, EngineBuilder, EngineError};

// Global systems and context
pub use crate::core::globals::{GlobalContext, GlobalSystems, Progress};

// Input
pub use crate::core::input::{KeyChord, KeyCode, Modifiers, MouseButton};

// Scenes
pub use crate::core::scene::{Scene, SceneDirector, SceneKind, SceneRequest, Stage};

// Paint
pub use crate::core::paint::{PaintConfig, PaintInput, PaintTool};

// Rendering
pub use crate::core::render::{Canvas, Color, DrawList, Point};
