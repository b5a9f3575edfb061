//=========================================================================
// Request Queue
//=========================================================================
//
// Requests scenes make of the director during their update.
//
// The director drains this queue at the tick boundary; a `Change` only
// records the next scene, the switch itself happens in execute_stage().
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::SceneKind;

//=== SceneRequest ========================================================

/// Something a scene asks the director to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRequest {
    /// Switch to this scene at the next `execute_stage`.
    Change(SceneKind),

    /// Re-run `init` on the current scene.
    Replay,

    /// Return to the first stage.
    ResetStage,

    /// Forget the captured coin count.
    ResetCoinCount,
}

//=== RequestQueue ========================================================

/// FIFO of [`SceneRequest`]s, drained by the director once per tick.
#[derive(Debug, Default)]
pub struct RequestQueue {
    queue: Vec<SceneRequest>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a request for the next tick boundary.
    pub fn push(&mut self, request: SceneRequest) {
        self.queue.push(request);
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneRequest> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn clear(&mut self) {
        self.queue.clear()
    }

    /// Takes all requests, leaving the queue empty.
    pub fn take(&mut self) -> Vec<SceneRequest> {
        std::mem::take(&mut self.queue)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
