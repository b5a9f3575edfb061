//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container for scenes.
//
// Contains state data that scenes read/write:
// - input_state: Low-level input state (keys, mouse, modifiers)
// - scene_requests: Requests for the director (scene change, resets)
// - progress: Snapshot of director state (scene, stage, coins)
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, StateTracker};
use crate::core::scene::{RequestQueue, SceneKind, Stage};

//=== Progress ============================================================

/// Director state as seen by scenes.
///
/// Refreshed by the director before every lifecycle call; writes to it
/// are overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub scene: SceneKind,
    pub stage: Stage,
    /// Coins captured the last time Game was left.
    pub coin_count: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            scene: SceneKind::Title,
            stage: Stage::FIRST,
            coin_count: 0,
        }
    }
}

//=== GlobalContext =======================================================

/// Shared context data accessible to scenes during updates.
///
/// Scenes receive `&mut GlobalContext` in their lifecycle methods and
/// `&GlobalContext` while drawing.
pub struct GlobalContext {
    /// Keyboard, mouse and modifier state for the current tick.
    pub input_state: StateTracker,

    /// Requests drained by the director at the tick boundary.
    pub scene_requests: RequestQueue,

    /// Current scene, stage and captured coins.
    pub progress: Progress,

    /// Input batches received this tick, consumed by `GlobalSystems`.
    pub(crate) frame_events: Vec<Vec<InputEvent>>,
}

impl GlobalContext {
    /// Creates a context with no input and no pending requests.
    pub fn new() -> Self {
        Self {
            input_state: StateTracker::new(),
            scene_requests: RequestQueue::new(),
            progress: Progress::default(),
            frame_events: Vec::new(),
        }
    }

    /// Queues a batch of input events for the next update.
    pub fn push_input(&mut self, batch: Vec<InputEvent>) {
        if !batch.is_empty() {
            self.frame_events.push(batch);
        }
    }
}

impl Default for GlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
