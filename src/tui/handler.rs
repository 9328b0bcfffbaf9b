//! Event handler for the TUI
//!
//! Routes keyboard events to the form or the entry list depending on which
//! panel has focus.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, FocusedPanel};
use super::controller;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick(Instant::now());
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports both press and release
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    match app.focused_panel {
        FocusedPanel::Form => handle_form_key(app, key),
        FocusedPanel::List => handle_list_key(app, key),
    }

    Ok(())
}

/// Handle keys while typing into the form
fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.form.prev_field(),
        KeyCode::Enter => controller::submit(app),
        KeyCode::Esc => app.focused_panel = FocusedPanel::List,

        KeyCode::Char(c) => app.form.focused_input().insert(c),
        KeyCode::Backspace => app.form.focused_input().backspace(),
        KeyCode::Delete => app.form.focused_input().delete(),
        KeyCode::Left => app.form.focused_input().move_left(),
        KeyCode::Right => app.form.focused_input().move_right(),
        KeyCode::Home => app.form.focused_input().move_start(),
        KeyCode::End => app.form.focused_input().move_end(),

        _ => {}
    }
}

/// Handle keys when the entry list is focused
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),

        // Reordering only affects the view
        KeyCode::Char('J') => app.move_row_down(),
        KeyCode::Char('K') => app.move_row_up(),

        KeyCode::Char('d') | KeyCode::Delete => controller::delete_selected(app),

        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab | KeyCode::Enter => {
            app.toggle_panel_focus()
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::config::settings::Settings;
    use crate::storage::Storage;
    use crate::tui::form::FormField;
    use tempfile::TempDir;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_fill_form_and_submit() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        type_str(&mut app, "Rent");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "1200.00");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Housing");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "01/01/2024");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.rows.len(), 1);
        assert_eq!(app.total, "$1200.00");
        assert_eq!(app.form.focused_field, FormField::Description);
        assert_eq!(storage.entries.load().unwrap().len(), 1);
    }

    #[test]
    fn test_letters_in_form_are_not_commands() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        type_str(&mut app, "quick dinner");
        assert!(!app.should_quit);
        assert_eq!(app.form.description_input.value(), "quick dinner");
    }

    #[test]
    fn test_list_navigation_and_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        for (desc, cost) in [("Lunch", "5.00"), ("Coffee", "3.50")] {
            type_str(&mut app, desc);
            press(&mut app, KeyCode::Tab);
            type_str(&mut app, cost);
            press(&mut app, KeyCode::Tab);
            type_str(&mut app, "Food");
            press(&mut app, KeyCode::Tab);
            type_str(&mut app, "01/01/2024");
            press(&mut app, KeyCode::Enter);
        }

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focused_panel, FocusedPanel::List);

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected_description(), Some("Coffee"));
        press(&mut app, KeyCode::Char('d'));

        assert_eq!(app.total, "$5.00");
        assert_eq!(storage.entries.load().unwrap().len(), 1);
    }

    #[test]
    fn test_release_events_ignored() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        let mut key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_event(&mut app, Event::Key(key)).unwrap();

        assert_eq!(app.form.description_input.value(), "");
    }

    #[test]
    fn test_quit_keys() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);

        let mut app = App::new(&storage, &settings);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
