use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::Game;
use crate::input::Input;

/// What a key press asks for: a game input, or a restart handled by the shell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum KeyAction {
    Game(Input),
    Restart,
}

pub fn map_key_event(event: KeyEvent) -> Option<KeyAction> {
    map_key(event.code, event.kind, event.modifiers)
}

/// Key releases and repeats are ignored; every action is a discrete press.
pub fn map_key(
    key_code: KeyCode,
    kind: KeyEventKind,
    modifiers: KeyModifiers,
) -> Option<KeyAction> {
    if kind != KeyEventKind::Press {
        return None;
    }

    let action = match key_code {
        KeyCode::Char('c') | KeyCode::Char('C') if modifiers.contains(KeyModifiers::CONTROL) => {
            KeyAction::Game(Input::Quit)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            KeyAction::Game(Input::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            KeyAction::Game(Input::MoveRight)
        }
        // Down rotates like in the classic build
        KeyCode::Down
        | KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char(' ') => KeyAction::Game(Input::RotateClockwise),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Game(Input::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,
        _ => return None,
    };

    Some(action)
}

/// Feeds actions to the game in the order they arrived. A restart resets the
/// game on the spot, so inputs after it queue on the fresh game. Nothing
/// after a quit is applied. Returns true once a quit is queued.
pub fn apply_actions<I>(game: &mut Game, actions: I) -> bool
where
    I: IntoIterator<Item = KeyAction>,
{
    for action in actions {
        match action {
            KeyAction::Game(input) => {
                game.push_input(input);
                if input == Input::Quit {
                    return true;
                }
            }
            KeyAction::Restart => game.reset(),
        }
    }

    false
}
