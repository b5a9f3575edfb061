//=========================================================================
// Global Engine State
//=========================================================================
//
// Separates systems (logic components) from context (shared data).
//
// Architecture:
//   GlobalSystems: SceneDirector + PaintTool (owned by orchestrator)
//   GlobalContext: StateTracker + RequestQueue + Progress (passed to scenes)
//
//=========================================================================

//=== Module Declarations =================================================

mod global_context;
mod global_systems;

//=== Public API ==========================================================

pub use global_context::{GlobalContext, Progress};
pub use global_systems::GlobalSystems;
