use egui::Key;

use crate::brush::BrushColor;

/// What a key does to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectColor(BrushColor),
    ShrinkBrush,
    GrowBrush,
    Undo,
    Redo,
    Quit,
}

/// Keys act on release, except quitting.
pub fn action_for_key_release(key: Key) -> Option<Action> {
    let slot = match key {
        Key::Num1 => 1,
        Key::Num2 => 2,
        Key::Num3 => 3,
        Key::Num4 => 4,
        Key::Num5 => 5,
        Key::Num6 => 6,
        Key::Num7 => 7,
        Key::Num8 => 8,
        Key::Z => return Some(Action::Undo),
        Key::Y => return Some(Action::Redo),
        Key::Comma => return Some(Action::ShrinkBrush),
        Key::Period => return Some(Action::GrowBrush),
        _ => return None,
    };
    BrushColor::from_slot(slot).map(Action::SelectColor)
}

pub fn action_for_key_press(key: Key) -> Option<Action> {
    (key == Key::Escape).then_some(Action::Quit)
}
