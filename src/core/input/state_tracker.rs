//=========================================================================
// State Tracker
//=========================================================================
//
// Per-tick input state with frame deltas.
//
// Architecture:
//   InputEvent → process_events() → HashSet (keys/buttons held) → query
//
// Frame lifecycle: clear() → process_events() → finalize_frame() → query
//
// The tracker is also the concrete `PaintInput`: the left mouse button
// stands in for the touch contact and the cursor for the touch position.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyChord, KeyCode, Modifiers, MouseButton};
use crate::core::paint::PaintInput;
use crate::core::render::Point;

//=== StateTracker ========================================================

/// Tracks held keys/buttons and the keys/buttons that changed this tick.
pub struct StateTracker {
    //--- Persistent State (survives frame boundary) ----------------------
    keys_down: HashSet<KeyCode>,
    mouse_buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),
    modifiers: Modifiers,

    //--- Frame Deltas (reset each frame via clear()) --------------------
    keys_pressed_this_frame: HashSet<KeyCode>,
    keys_released_this_frame: HashSet<KeyCode>,
    mouse_buttons_pressed_this_frame: HashSet<MouseButton>,
    mouse_buttons_released_this_frame: HashSet<MouseButton>,

    //--- Continuous Input ------------------------------------------------
    mouse_delta: (f32, f32),
    last_mouse_position: (f32, f32),
}

impl StateTracker {
    /// Creates a tracker with nothing held and the cursor at the origin.
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            mouse_buttons_down: HashSet::new(),
            mouse_position: (0.0, 0.0),
            modifiers: Modifiers::NONE,
            keys_pressed_this_frame: HashSet::new(),
            keys_released_this_frame: HashSet::new(),
            mouse_buttons_pressed_this_frame: HashSet::new(),
            mouse_buttons_released_this_frame: HashSet::new(),
            mouse_delta: (0.0, 0.0),
            last_mouse_position: (0.0, 0.0),
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears frame deltas. Call once at the start of each tick.
    pub fn clear(&mut self) {
        self.keys_pressed_this_frame.clear();
        self.keys_released_this_frame.clear();
        self.mouse_buttons_pressed_this_frame.clear();
        self.mouse_buttons_released_this_frame.clear();
        self.last_mouse_position = self.mouse_position;
    }

    /// Applies a batch of events in order.
    pub fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    /// Computes the cursor delta for this tick.
    pub fn finalize_frame(&mut self) {
        self.mouse_delta = (
            self.mouse_position.0 - self.last_mouse_position.0,
            self.mouse_position.1 - self.last_mouse_position.1,
        );
    }

    fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { key, modifiers } => {
                self.modifiers = *modifiers;
                if self.keys_down.insert(*key) {
                    self.keys_pressed_this_frame.insert(*key);
                }
                self.sync_modifier_keys(*key);
            }

            InputEvent::KeyUp { key, modifiers } => {
                self.modifiers = *modifiers;
                if self.keys_down.remove(key) {
                    self.keys_released_this_frame.insert(*key);
                }
                self.sync_modifier_keys(*key);
            }

            InputEvent::MouseButtonDown { button, modifiers } => {
                self.modifiers = *modifiers;
                if self.mouse_buttons_down.insert(*button) {
                    self.mouse_buttons_pressed_this_frame.insert(*button);
                }
            }

            InputEvent::MouseButtonUp { button, modifiers } => {
                self.modifiers = *modifiers;
                if self.mouse_buttons_down.remove(button) {
                    self.mouse_buttons_released_this_frame.insert(*button);
                }
            }

            InputEvent::MouseMoved { x, y } => {
                self.mouse_position = (*x, *y);
            }

            InputEvent::Unidentified => {}
        }
    }

    /// Modifier flags lag the modifier key's own event by one event on
    /// most platforms; the held set is authoritative for those keys.
    fn sync_modifier_keys(&mut self, key: KeyCode) {
        match key {
            KeyCode::ControlLeft | KeyCode::ControlRight => {
                self.modifiers.ctrl = self.keys_down.contains(&KeyCode::ControlLeft)
                    || self.keys_down.contains(&KeyCode::ControlRight);
            }
            KeyCode::ShiftLeft | KeyCode::ShiftRight => {
                self.modifiers.shift = self.keys_down.contains(&KeyCode::ShiftLeft)
                    || self.keys_down.contains(&KeyCode::ShiftRight);
            }
            _ => {}
        }
    }

    //=====================================================================
    // Query API - Keyboard
    //=====================================================================

    /// Returns `true` only on the tick the key went UP → DOWN.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed_this_frame.contains(&key)
    }

    /// Returns `true` while the key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` only on the tick the key went DOWN → UP.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released_this_frame.contains(&key)
    }

    /// Returns `true` while the chord's key and modifiers are all held.
    pub fn is_chord_held(&self, chord: KeyChord) -> bool {
        chord.matches(self.modifiers, self.is_key_down(chord.key))
    }

    //=====================================================================
    // Query API - Mouse
    //=====================================================================

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons_pressed_this_frame.contains(&button)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.mouse_buttons_released_this_frame.contains(&button)
    }

    /// Cursor position in screen coordinates (pixels, top-left origin).
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }

    /// Cursor movement since the previous tick.
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    /// Modifier state reported with the most recent key/button event.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}

//--- PaintInput ----------------------------------------------------------

impl PaintInput for StateTracker {
    fn pointer_down(&self) -> bool {
        self.is_button_down(MouseButton::Left)
    }

    fn pointer_position(&self) -> Point {
        Point::from(self.mouse_position)
    }

    fn chord_held(&self, chord: KeyChord) -> bool {
        self.is_chord_held(chord)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
