//! Property-based tests for the App state machine.
//!
//! Tests verify that invariants hold under arbitrary key sequences:
//! the cursor stays on the list, selection stays in range, and quitting
//! always saves exactly what the store holds.

use proptest::prelude::*;
use sshtoggle_app::{App, AppAction, AppEvent, KeyInput};
use sshtoggle_core::{ReaderConfig, Record, Scan, SelectionStore, read, serialize};

/// Generate random key presses, bound and unbound.
fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        3 => Just(KeyInput::Up),
        3 => Just(KeyInput::Down),
        1 => Just(KeyInput::Home),
        1 => Just(KeyInput::End),
        3 => Just(KeyInput::Enter),
        2 => Just(KeyInput::Char(' ')),
        1 => Just(KeyInput::Char('?')),
        1 => Just(KeyInput::Char('z')),
    ]
}

fn app_with(len: usize, selected: &[usize]) -> App {
    let records = (0..len).map(|n| Record::vault(format!("Vault{n}"))).collect();
    let store = SelectionStore::new(records, selected.iter().copied());
    let mut app = App::new();
    let _ = app.handle(AppEvent::Loaded { scan: Scan { store, malformed: vec![] } });
    app
}

proptest! {
    #[test]
    fn prop_cursor_and_selection_stay_in_range(
        len in 0usize..8,
        keys in prop::collection::vec(key_strategy(), 0..60),
    ) {
        let mut app = app_with(len, &[]);

        for key in keys {
            let _ = app.handle(AppEvent::Key(key));

            let store = app.store();
            prop_assert!(app.cursor() < store.len().max(1));
            prop_assert!(store.selected().all(|position| position < store.len()));
        }
    }

    #[test]
    fn prop_double_toggle_is_identity(len in 1usize..8, moves in 0usize..16) {
        let mut app = app_with(len, &[0]);
        for _ in 0..moves {
            let _ = app.handle(AppEvent::Key(KeyInput::Down));
        }
        let before = app.store().clone();

        let _ = app.handle(AppEvent::Key(KeyInput::Enter));
        prop_assert_ne!(app.store(), &before);
        let _ = app.handle(AppEvent::Key(KeyInput::Enter));

        prop_assert_eq!(app.store(), &before);
    }

    #[test]
    fn prop_quit_saves_current_state(
        len in 0usize..8,
        keys in prop::collection::vec(key_strategy(), 0..40),
    ) {
        let mut app = app_with(len, &[]);
        for key in keys {
            let _ = app.handle(AppEvent::Key(key));
        }

        let actions = app.handle(AppEvent::Key(KeyInput::Char('q')));
        let expected = serialize(app.store());
        prop_assert_eq!(
            actions,
            vec![AppAction::Save { contents: expected.clone() }, AppAction::Quit]
        );

        // The saved text loads back into the same store.
        let reloaded = read(&expected, &ReaderConfig::default()).expect("drop policy never fails");
        prop_assert_eq!(&reloaded.store, app.store());
    }
}

#[test]
fn moving_down_len_times_returns_to_start() {
    let mut app = app_with(5, &[]);
    for _ in 0..5 {
        let _ = app.handle(AppEvent::Key(KeyInput::Char('j')));
    }
    assert_eq!(app.cursor(), 0);
}
