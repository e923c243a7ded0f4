//! Keyboard input handling.
//!
//! Maps terminal key events to [`App`] actions.  There is no
//! refresh key: a listing is fetched once per session.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

/// Apply one key event to the app.  Only key presses count.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{harness, sample_items};
    use crate::controller::ListingStatus;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_and_esc_quit() {
        let mut h = harness();
        handle_key_event(&mut h.app, press(KeyCode::Char('q')));
        assert!(h.app.quit);

        let mut h = harness();
        handle_key_event(&mut h.app, press(KeyCode::Esc));
        assert!(h.app.quit);
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_does_not() {
        let mut h = harness();
        handle_key_event(&mut h.app, press(KeyCode::Char('c')));
        assert!(!h.app.quit);

        handle_key_event(
            &mut h.app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(h.app.quit);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut h = harness();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key_event(&mut h.app, release);
        assert!(!h.app.quit);
    }

    #[test]
    fn vim_keys_scroll() {
        let mut h = harness();
        h.items.publish(sample_items());
        h.status.publish(Some(ListingStatus::Done));

        handle_key_event(&mut h.app, press(KeyCode::Char('j')));
        handle_key_event(&mut h.app, press(KeyCode::Char('j')));
        assert_eq!(h.app.list_state.selected(), Some(1));

        handle_key_event(&mut h.app, press(KeyCode::Char('k')));
        assert_eq!(h.app.list_state.selected(), Some(0));

        handle_key_event(&mut h.app, press(KeyCode::Char('G')));
        assert_eq!(h.app.list_state.selected(), Some(2));

        handle_key_event(&mut h.app, press(KeyCode::Home));
        assert_eq!(h.app.list_state.selected(), Some(0));
    }
}
