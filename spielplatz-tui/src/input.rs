use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use spielplatz_core::model::FilterToggle;

use crate::app::{App, Screen};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Action {
    None,
    Quit,
    /// Run `service.ingest()` again and replace the snapshot
    Reload,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{BackTab, Char, Down, Enter, Esc, Left, Right, Tab, Up};

    // Global shortcuts
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    match key.code {
        Char('q') => return Action::Quit,
        Char('r') => return Action::Reload,
        _ => {}
    }

    // Ignore input while a request is in flight
    if app.is_loading {
        return Action::None;
    }

    if let Char(digit @ '1'..='7') = key.code {
        let toggle = digit
            .to_digit(10)
            .and_then(|number| usize::try_from(number).ok())
            .and_then(|number| FilterToggle::ALL.get(number - 1).copied());
        if let Some(toggle) = toggle {
            app.toggle_filter(toggle);
        }
        return Action::None;
    }

    match key.code {
        Char('d') => app.cycle_district(true),
        Char('D') => app.cycle_district(false),
        Char('c') => app.clear_filters(),
        _ => {}
    }

    match app.screen {
        Screen::List => match key.code {
            Up | Char('k') => app.move_selection(false),
            Down | Char('j') => app.move_selection(true),
            Enter | Right => {
                if app.selected().is_some() {
                    app.screen = Screen::Detail;
                }
            }
            Tab | BackTab => app.screen = Screen::Districts,
            _ => {}
        },

        Screen::Detail => match key.code {
            Left | Esc | Char('b') => app.screen = Screen::List,
            Up | Char('k') => app.move_selection(false),
            Down | Char('j') => app.move_selection(true),
            _ => {}
        },

        Screen::Districts => match key.code {
            Left | Esc | Char('b') | Tab | BackTab => app.screen = Screen::List,
            _ => {}
        },
    }
    Action::None
}
