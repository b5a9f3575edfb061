//=========================================================================
// Input Buffer
//
// Collects input between two redraws, split into discrete events
// (keys, buttons) and continuous events (pointer motion).
//
// Responsibilities:
// - Keep discrete events in arrival order, dropping consecutive repeats
//   (OS key repeat)
// - Coalesce continuous events so only the latest pointer position
//   crosses the channel
// - Hand both halves out once per frame via `drain()`
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashSet;

//=== Internal Modules ====================================================

use crate::core::input::InputEvent;

//=== InputBuffer =========================================================

/// Transient per-frame event store on the platform thread.
pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 64;
        const CONTINUOUS_BASE: usize = 4;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: HashSet::with_capacity(CONTINUOUS_BASE),
        }
    }

    //--- Event Handling ---------------------------------------------------

    /// Replaces any earlier event of the same kind (latest position wins).
    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        self.continuous.replace(event);
    }

    /// Appends a key or button event unless it repeats the previous one.
    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------

    /// Takes this frame's events; `None` when nothing was buffered.
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }

        let discrete = std::mem::replace(&mut self.discrete, Vec::with_capacity(64));
        let continuous = self.continuous.drain().collect();
        Some((discrete, continuous))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, Modifiers};

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key, modifiers: Modifiers::NONE }
    }

    fn mouse_move(x: f32, y: f32) -> InputEvent {
        InputEvent::MouseMoved { x, y }
    }

    #[test]
    fn key_repeat_is_collapsed() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(key_down(KeyCode::KeyA));
        buffer.push_discrete(key_down(KeyCode::KeyA));
        buffer.push_discrete(key_down(KeyCode::KeyB));
        assert_eq!(buffer.discrete.len(), 2);
    }

    #[test]
    fn press_release_press_is_kept() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(key_down(KeyCode::Space));
        buffer.push_discrete(key_up(KeyCode::Space));
        buffer.push_discrete(key_down(KeyCode::Space));
        assert_eq!(buffer.discrete.len(), 3);
    }

    #[test]
    fn latest_pointer_position_wins() {
        let mut buffer = InputBuffer::new();
        buffer.push_continuous(mouse_move(10.0, 10.0));
        buffer.push_continuous(mouse_move(20.0, 30.0));

        let (_, continuous) = buffer.drain().unwrap();
        assert_eq!(continuous.len(), 1);
        match &continuous[0] {
            InputEvent::MouseMoved { x, y } => assert_eq!((*x, *y), (20.0, 30.0)),
            other => panic!("Expected MouseMoved, found {:?}", other),
        }
    }

    #[test]
    fn drain_empties_buffer() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(key_down(KeyCode::KeyA));
        buffer.push_continuous(mouse_move(5.0, 5.0));

        let (discrete, continuous) = buffer.drain().unwrap();
        assert_eq!(discrete.len() + continuous.len(), 2);
        assert!(buffer.is_empty());
        assert!(buffer.drain().is_none());
    }

    #[test]
    fn empty_buffer_drains_to_none() {
        assert!(InputBuffer::new().drain().is_none());
    }
}
