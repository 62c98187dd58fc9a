//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a character to the name field.
    Insert(char),
    /// Delete the last character of the name field.
    Backspace,
    /// Submit the name field as a guess.
    Submit,
    /// Show or hide the silhouette.
    ToggleSilhouette,
    /// Draw a new target.
    PlayAgain,
    /// Leave the game.
    Quit,
    /// Key has no binding.
    Nothing,
}

/// Maps a key to an action.
///
/// While the round is over the name field is disabled: Enter or `r` starts
/// a new round and `q` quits.
pub fn action_for(key: KeyEvent, round_over: bool) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            _ => Action::Nothing,
        };
    }

    match (key.code, round_over) {
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Tab, false) => Action::ToggleSilhouette,
        (KeyCode::Enter, false) => Action::Submit,
        (KeyCode::Backspace, false) => Action::Backspace,
        (KeyCode::Char(c), false) => Action::Insert(c),
        (KeyCode::Enter, true) | (KeyCode::Char('r' | 'R'), true) => Action::PlayAgain,
        (KeyCode::Char('q' | 'Q'), true) => Action::Quit,
        _ => Action::Nothing,
    }
}
