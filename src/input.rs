//! Platform-neutral input events

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// A discrete event the loop reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Start, flap or restart depending on the mode
    Flap,
    /// Stop immediately
    Quit,
}

/// Translate a winit key event
pub fn from_key_event(event: &KeyEvent) -> Option<InputEvent> {
    map_key(event.state, event.repeat, event.physical_key)
}

/// Only fresh Space presses flap; releases and auto-repeat are ignored.
pub fn map_key(state: ElementState, repeat: bool, key: PhysicalKey) -> Option<InputEvent> {
    if state != ElementState::Pressed || repeat {
        return None;
    }
    match key {
        PhysicalKey::Code(KeyCode::Space) => Some(InputEvent::Flap),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPACE: PhysicalKey = PhysicalKey::Code(KeyCode::Space);

    #[test]
    fn test_space_press_flaps() {
        assert_eq!(
            map_key(ElementState::Pressed, false, SPACE),
            Some(InputEvent::Flap)
        );
    }

    #[test]
    fn test_space_release_and_repeat_ignored() {
        assert_eq!(map_key(ElementState::Released, false, SPACE), None);
        assert_eq!(map_key(ElementState::Pressed, true, SPACE), None);
    }

    #[test]
    fn test_other_keys_ignored() {
        let enter = PhysicalKey::Code(KeyCode::Enter);
        assert_eq!(map_key(ElementState::Pressed, false, enter), None);
        let escape = PhysicalKey::Code(KeyCode::Escape);
        assert_eq!(map_key(ElementState::Pressed, false, escape), None);
    }
}
