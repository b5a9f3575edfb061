//=========================================================================
// Input Event Types
//=========================================================================
//
// Engine-side representation of low-level input.
//
// The platform layer translates OS events (winit) into these types before
// they cross the thread boundary. Nothing here depends on winit.
//
// Event Flow:
// ```text
// Platform Layer (winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (held keys, buttons, cursor)
//         ↓
//    Scenes / PaintTool (polled each tick)
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;
use std::hash::{Hash, Hasher};

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// `Left` doubles as the touch contact for pointer-driven features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,

    /// Side, thumb and macro buttons.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier (layout independent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Modifier Keys ----------------------------------------------------
    //
    // Reported as ordinary keys so that releasing Ctrl produces a KeyUp
    // carrying the updated modifier state.
    //
    ControlLeft,
    ControlRight,
    ShiftLeft,
    ShiftRight,

    //--- Special Keys -----------------------------------------------------
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Key reported by the platform but not mapped here.
    Unidentified,
}

//=== Modifiers ===========================================================

/// Modifier key state (Shift, Ctrl, Alt).
///
/// Left and right variants are not distinguished. On macOS, Command is
/// reported as Ctrl by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false };
    pub const CTRL: Self = Self { shift: false, ctrl: true, alt: false };
    pub const ALT: Self = Self { shift: false, ctrl: false, alt: true };

    /// Returns `true` if every modifier set in `required` is also set here.
    ///
    /// Extra modifiers are allowed: `CTRL | SHIFT` contains `CTRL`.
    pub fn contains(self, required: Modifiers) -> bool {
        (!required.shift || self.shift)
            && (!required.ctrl || self.ctrl)
            && (!required.alt || self.alt)
    }
}

//=== KeyChord ============================================================

/// A key combined with the modifiers that must be held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub modifiers: Modifiers,
    pub key: KeyCode,
}

impl KeyChord {
    /// Ctrl+Z, the default "clear strokes" hotkey.
    pub const CTRL_Z: Self = Self::new(Modifiers::CTRL, KeyCode::KeyZ);

    pub const fn new(modifiers: Modifiers, key: KeyCode) -> Self {
        Self { modifiers, key }
    }

    /// Evaluates the chord against a modifier snapshot and key state.
    pub fn matches(&self, held: Modifiers, key_down: bool) -> bool {
        key_down && held.contains(self.modifiers)
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.modifiers.shift {
            f.write_str("Shift+")?;
        }
        if self.modifiers.alt {
            f.write_str("Alt+")?;
        }
        write!(f, "{:?}", self.key)
    }
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// Equality and hashing follow the event *identity*: key/button plus
/// modifiers. `MouseMoved` events compare equal regardless of
/// coordinates so the platform buffer can coalesce them (last wins).
#[derive(Debug, Clone)]
pub enum InputEvent {
    KeyDown { key: KeyCode, modifiers: Modifiers },
    KeyUp { key: KeyCode, modifiers: Modifiers },
    MouseButtonDown { button: MouseButton, modifiers: Modifiers },
    MouseButtonUp { button: MouseButton, modifiers: Modifiers },

    /// Cursor position in screen space (pixels, top-left origin).
    MouseMoved { x: f32, y: f32 },

    /// Ignored by the state tracker.
    Unidentified,
}

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown { key: a, modifiers: ma }, KeyDown { key: b, modifiers: mb })
            | (KeyUp { key: a, modifiers: ma }, KeyUp { key: b, modifiers: mb }) => {
                a == b && ma == mb
            }
            (
                MouseButtonDown { button: a, modifiers: ma },
                MouseButtonDown { button: b, modifiers: mb },
            )
            | (
                MouseButtonUp { button: a, modifiers: ma },
                MouseButtonUp { button: b, modifiers: mb },
            ) => a == b && ma == mb,
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::KeyDown { key, modifiers } | Self::KeyUp { key, modifiers } => {
                key.hash(state);
                modifiers.hash(state);
            }
            Self::MouseButtonDown { button, modifiers }
            | Self::MouseButtonUp { button, modifiers } => {
                button.hash(state);
                modifiers.hash(state);
            }
            // Coordinates are deliberately not hashed (see PartialEq)
            Self::MouseMoved { .. } | Self::Unidentified => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
