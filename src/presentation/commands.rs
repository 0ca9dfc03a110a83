use crate::domain::keybinding::{Action, Keybind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register = |action: Action, key: KeyEvent, is_primary: bool| {
            if is_primary {
                display_bindings.insert(action, key);
            }
            input_bindings.push((key, action));
        };

        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            true,
        );
        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            false,
        );

        register(
            Action::PreviousSetting,
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            true,
        );
        register(
            Action::NextSetting,
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            true,
        );
        register(
            Action::NextSetting,
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            false,
        );
        register(
            Action::Decrease,
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            true,
        );
        register(
            Action::Increase,
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            true,
        );

        register(
            Action::DeleteDigit,
            KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
            true,
        );
        register(
            Action::ClearGuess,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            true,
        );

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(k, _)| k.code == key.code && k.modifiers == key.modifiers)
            .map(|(_, a)| *a)
    }
}

pub trait HasCommands {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(KeyCode::Esc, KeyModifiers::NONE, Some(Action::Quit) ; "esc_quits")]
    #[test_case(KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Action::Quit) ; "ctrl_c_quits")]
    #[test_case(KeyCode::Tab, KeyModifiers::NONE, Some(Action::NextSetting) ; "tab_next_setting")]
    #[test_case(KeyCode::Right, KeyModifiers::NONE, Some(Action::Increase) ; "right_increases")]
    #[test_case(KeyCode::Char('7'), KeyModifiers::NONE, None ; "digits_are_not_commands")]
    #[test_case(KeyCode::Char('q'), KeyModifiers::NONE, None ; "plain_q_is_input")]
    fn test_find_action(code: KeyCode, modifiers: KeyModifiers, expected: Option<Action>) {
        let registry = CommandRegistry::new();
        assert_eq!(registry.find_action(KeyEvent::new(code, modifiers)), expected);
    }

    #[test]
    fn test_primary_binding_is_displayed() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.get(Action::Quit),
            Some(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
        );
    }
}
