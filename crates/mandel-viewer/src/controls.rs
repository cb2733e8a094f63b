//! Buttons, key bindings, and status labels.

use egui::{InputState, Key};
use mandel_core::types::Direction;
use mandel_render::{Action, ViewState};

/// Control panel buttons, laid out two per row.
pub const BUTTONS: &[(&str, Action)] = &[
    ("Zoom In", Action::ZoomIn),
    ("Zoom Out", Action::ZoomOut),
    ("Move Up", Action::Pan(Direction::Up)),
    ("Move Down", Action::Pan(Direction::Down)),
    ("Move Left", Action::Pan(Direction::Left)),
    ("Move Right", Action::Pan(Direction::Right)),
    ("More Iterations", Action::IncreaseIterations),
    ("Fewer Iterations", Action::DecreaseIterations),
    ("Reset", Action::Reset),
];

pub const KEY_BINDINGS: &[(Key, Action)] = &[
    (Key::ArrowUp, Action::Pan(Direction::Up)),
    (Key::ArrowDown, Action::Pan(Direction::Down)),
    (Key::ArrowLeft, Action::Pan(Direction::Left)),
    (Key::ArrowRight, Action::Pan(Direction::Right)),
    (Key::Plus, Action::ZoomIn),
    (Key::Equals, Action::ZoomIn),
    (Key::Minus, Action::ZoomOut),
    (Key::CloseBracket, Action::IncreaseIterations),
    (Key::OpenBracket, Action::DecreaseIterations),
    (Key::R, Action::Reset),
];

pub fn action_for_key(key: Key) -> Option<Action> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, action)| *action)
}

/// Actions for keys pressed this frame, in binding order.
///
/// `+` and `=` share a physical key on most layouts; one press zooms once.
pub fn pressed_actions(input: &InputState) -> Vec<Action> {
    let mut actions: Vec<Action> = KEY_BINDINGS
        .iter()
        .filter(|(key, _)| input.key_pressed(*key))
        .map(|(_, action)| *action)
        .collect();
    actions.dedup();
    actions
}

pub fn zoom_label(view: &ViewState) -> String {
    format!("Zoom: {:.4}", view.zoom)
}

pub fn shift_x_label(view: &ViewState) -> String {
    format!("X: {:.4}", view.shift_x)
}

pub fn shift_y_label(view: &ViewState) -> String {
    format!("Y: {:.4}", view.shift_y)
}

pub fn iterations_label(view: &ViewState) -> String {
    format!("Iterations: {}", view.max_iterations)
}

pub fn status_labels(view: &ViewState) -> [String; 4] {
    [
        zoom_label(view),
        shift_x_label(view),
        shift_y_label(view),
        iterations_label(view),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_use_four_decimals() {
        let view = ViewState {
            zoom: 2.0,
            shift_x: -0.5,
            shift_y: 0.123456,
            max_iterations: 1024,
        };
        assert_eq!(
            status_labels(&view),
            [
                "Zoom: 2.0000".to_string(),
                "X: -0.5000".to_string(),
                "Y: 0.1235".to_string(),
                "Iterations: 1024".to_string(),
            ]
        );
    }

    #[test]
    fn arrows_pan_and_brackets_change_budget() {
        assert_eq!(action_for_key(Key::ArrowLeft), Some(Action::Pan(Direction::Left)));
        assert_eq!(action_for_key(Key::Equals), Some(Action::ZoomIn));
        assert_eq!(action_for_key(Key::Minus), Some(Action::ZoomOut));
        assert_eq!(action_for_key(Key::CloseBracket), Some(Action::IncreaseIterations));
        assert_eq!(action_for_key(Key::Escape), None);
    }

    #[test]
    fn every_button_action_has_a_key() {
        for (label, action) in BUTTONS {
            assert!(
                KEY_BINDINGS.iter().any(|(_, bound)| bound == action),
                "{label} has no key binding"
            );
        }
    }

    #[test]
    fn keys_are_bound_once() {
        let mut keys: Vec<Key> = KEY_BINDINGS.iter().map(|(key, _)| *key).collect();
        keys.sort_by_key(|key| key.name());
        let before = keys.len();
        keys.dedup();
        assert_eq!(keys.len(), before);
    }
}
