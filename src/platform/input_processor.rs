//=========================================================================
// Input Processor
//=========================================================================
//
// Translates winit window events into engine `InputEvent`s.
//
// Architecture:
//   WindowEvent → InputProcessor → InputEvent → InputBuffer
//
// Modifier state arrives separately (ModifiersChanged) and is stamped
// onto every following key and button event. OS key repeats and keys
// the engine does not name are dropped here.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== InputProcessor ======================================================

/// Stateful winit → engine translator.
pub(crate) struct InputProcessor {
    modifiers: Modifiers,
}

impl InputProcessor {
    pub(crate) fn new() -> Self {
        Self { modifiers: Modifiers::NONE }
    }

    //--- Modifier State ---------------------------------------------------

    pub(crate) fn update_modifiers(&mut self, state: ModifiersState) {
        self.modifiers = Modifiers::from(state);
    }

    pub(crate) fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    //--- Translation ------------------------------------------------------

    /// Returns `None` for OS repeats and unnamed keys.
    pub(crate) fn key(&self, event: &KeyEvent) -> Option<InputEvent> {
        if event.repeat {
            return None;
        }

        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };

        match KeyCode::from(code) {
            KeyCode::Unidentified => None,
            key => Some(self.key_transition(key, event.state)),
        }
    }

    pub(crate) fn button(&self, button: WinitMouseButton, state: ElementState) -> InputEvent {
        let button = MouseButton::from(button);
        let modifiers = self.modifiers;

        match state {
            ElementState::Pressed => InputEvent::MouseButtonDown { button, modifiers },
            ElementState::Released => InputEvent::MouseButtonUp { button, modifiers },
        }
    }

    /// Pointer motion in physical pixels.
    pub(crate) fn pointer_moved(&self, x: f64, y: f64) -> InputEvent {
        InputEvent::MouseMoved { x: x as f32, y: y as f32 }
    }

    //--- Internal Helpers -------------------------------------------------

    fn key_transition(&self, key: KeyCode, state: ElementState) -> InputEvent {
        let modifiers = self.modifiers;

        match state {
            ElementState::Pressed => InputEvent::KeyDown { key, modifiers },
            ElementState::Released => InputEvent::KeyUp { key, modifiers },
        }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Cmd (reported as `super_key()` on macOS) counts as Ctrl, so Cmd+Z
/// also clears strokes.
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key() || state.super_key(),
            alt: state.alt_key(),
        }
    }
}

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode as W;

        match code {
            //--- Digits ---------------------------------------------------
            W::Digit0 => Self::Digit0,
            W::Digit1 => Self::Digit1,
            W::Digit2 => Self::Digit2,
            W::Digit3 => Self::Digit3,
            W::Digit4 => Self::Digit4,
            W::Digit5 => Self::Digit5,
            W::Digit6 => Self::Digit6,
            W::Digit7 => Self::Digit7,
            W::Digit8 => Self::Digit8,
            W::Digit9 => Self::Digit9,

            //--- Letters --------------------------------------------------
            W::KeyA => Self::KeyA,
            W::KeyB => Self::KeyB,
            W::KeyC => Self::KeyC,
            W::KeyD => Self::KeyD,
            W::KeyE => Self::KeyE,
            W::KeyF => Self::KeyF,
            W::KeyG => Self::KeyG,
            W::KeyH => Self::KeyH,
            W::KeyI => Self::KeyI,
            W::KeyJ => Self::KeyJ,
            W::KeyK => Self::KeyK,
            W::KeyL => Self::KeyL,
            W::KeyM => Self::KeyM,
            W::KeyN => Self::KeyN,
            W::KeyO => Self::KeyO,
            W::KeyP => Self::KeyP,
            W::KeyQ => Self::KeyQ,
            W::KeyR => Self::KeyR,
            W::KeyS => Self::KeyS,
            W::KeyT => Self::KeyT,
            W::KeyU => Self::KeyU,
            W::KeyV => Self::KeyV,
            W::KeyW => Self::KeyW,
            W::KeyX => Self::KeyX,
            W::KeyY => Self::KeyY,
            W::KeyZ => Self::KeyZ,

            //--- Arrows ---------------------------------------------------
            W::ArrowUp => Self::ArrowUp,
            W::ArrowDown => Self::ArrowDown,
            W::ArrowLeft => Self::ArrowLeft,
            W::ArrowRight => Self::ArrowRight,

            //--- Modifier keys --------------------------------------------
            W::ControlLeft => Self::ControlLeft,
            W::ControlRight => Self::ControlRight,
            W::ShiftLeft => Self::ShiftLeft,
            W::ShiftRight => Self::ShiftRight,

            //--- Special --------------------------------------------------
            W::Space => Self::Space,
            W::Enter => Self::Enter,
            W::Escape => Self::Escape,
            W::Tab => Self::Tab,
            W::Backspace => Self::Backspace,
            W::Delete => Self::Delete,

            _ => Self::Unidentified,
        }
    }
}

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => Self::Left,
            WinitMouseButton::Right => Self::Right,
            WinitMouseButton::Middle => Self::Middle,
            _ => Self::Other,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn held(shift: bool, ctrl: bool, alt: bool) -> ModifiersState {
        let mut state = ModifiersState::empty();
        state.set(ModifiersState::SHIFT, shift);
        state.set(ModifiersState::CONTROL, ctrl);
        state.set(ModifiersState::ALT, alt);
        state
    }

    #[test]
    fn modifiers_start_released() {
        assert_eq!(InputProcessor::new().modifiers(), Modifiers::NONE);
    }

    #[test]
    fn ctrl_is_stamped_on_keys() {
        let mut processor = InputProcessor::new();
        processor.update_modifiers(held(false, true, false));

        assert_eq!(
            processor.key_transition(KeyCode::KeyZ, ElementState::Pressed),
            InputEvent::KeyDown { key: KeyCode::KeyZ, modifiers: Modifiers::CTRL }
        );
    }

    #[test]
    fn release_keeps_current_modifiers() {
        let mut processor = InputProcessor::new();
        processor.update_modifiers(held(true, false, false));

        assert_eq!(
            processor.key_transition(KeyCode::KeyA, ElementState::Released),
            InputEvent::KeyUp { key: KeyCode::KeyA, modifiers: Modifiers::SHIFT }
        );
    }

    #[test]
    fn cmd_counts_as_ctrl() {
        let mut processor = InputProcessor::new();
        processor.update_modifiers(ModifiersState::SUPER);

        assert_eq!(processor.modifiers(), Modifiers::CTRL);
        assert_eq!(
            processor.key_transition(KeyCode::KeyZ, ElementState::Pressed),
            InputEvent::KeyDown { key: KeyCode::KeyZ, modifiers: Modifiers::CTRL }
        );
    }

    #[test]
    fn buttons_carry_modifiers() {
        let mut processor = InputProcessor::new();
        processor.update_modifiers(held(false, false, true));

        assert_eq!(
            processor.button(WinitMouseButton::Left, ElementState::Pressed),
            InputEvent::MouseButtonDown { button: MouseButton::Left, modifiers: Modifiers::ALT }
        );
    }

    #[test]
    fn pointer_motion_keeps_coordinates() {
        match InputProcessor::new().pointer_moved(123.5, 456.75) {
            InputEvent::MouseMoved { x, y } => assert_eq!((x, y), (123.5, 456.75)),
            other => panic!("Expected MouseMoved, got {:?}", other),
        }
    }

    #[test]
    fn clear_chord_keys_are_mapped() {
        assert_eq!(KeyCode::from(WinitKeyCode::ControlLeft), KeyCode::ControlLeft);
        assert_eq!(KeyCode::from(WinitKeyCode::ControlRight), KeyCode::ControlRight);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyZ), KeyCode::KeyZ);
    }

    #[test]
    fn unnamed_keys_are_unidentified() {
        assert_eq!(KeyCode::from(WinitKeyCode::F13), KeyCode::Unidentified);
        assert_eq!(KeyCode::from(WinitKeyCode::NumpadAdd), KeyCode::Unidentified);
    }

    #[test]
    fn extra_buttons_collapse_to_other() {
        assert_eq!(MouseButton::from(WinitMouseButton::Back), MouseButton::Other);
        assert_eq!(MouseButton::from(WinitMouseButton::Right), MouseButton::Right);
    }
}
