//=========================================================================
// Input
//=========================================================================
//
// Engine-side input types and per-tick input state.
//
// Architecture:
//   platform → InputEvent batches → StateTracker → polled by
//   scenes (keys) and the PaintTool (pointer + clear chord)
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod state_tracker;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyChord, KeyCode, Modifiers, MouseButton};
pub use state_tracker::StateTracker;
