//! Form and row actions
//!
//! Glue between key events and the entry service: each action runs the
//! service call and then updates the view state on `App`. Failures become
//! danger alerts; nothing here returns an error to the event loop. After a
//! non-validation failure the store may already have changed, so the view
//! is reloaded from it.

use crate::services::EntryService;

use super::app::App;
use super::widgets::alert::AlertKind;

pub const ADDED_MESSAGE: &str = "Budget Line Added";
pub const REMOVED_MESSAGE: &str = "Budget Line Removed";

/// Populate the table and total from storage
pub fn load(app: &mut App) {
    match EntryService::new(app.storage).list() {
        Ok(entries) => {
            app.render_all(&entries);
            app.render_sum(&entries);
        }
        Err(e) => app.show_alert(e.to_string(), AlertKind::Danger),
    }
}

/// Validate and store the form contents
pub fn submit(app: &mut App) {
    let form = app.form.to_entry_form();
    let service = EntryService::new(app.storage);

    match service.submit(&form) {
        Ok(entry) => {
            app.render_entry(entry);
            refresh_sum(app);
            app.show_alert(ADDED_MESSAGE, AlertKind::Success);
            app.clear_form();
        }
        Err(e) if e.is_validation() => app.show_alert(e.to_string(), AlertKind::Danger),
        Err(e) => {
            load(app);
            app.show_alert(e.to_string(), AlertKind::Danger);
        }
    }
}

/// Delete the selected row and every stored line sharing its description
pub fn delete_selected(app: &mut App) {
    let Some(description) = app.selected_description().map(str::to_string) else {
        return;
    };

    app.remove_row(&description);

    match EntryService::new(app.storage).remove(&description) {
        Ok(_) => {
            refresh_sum(app);
            app.show_alert(REMOVED_MESSAGE, AlertKind::Success);
        }
        Err(e) => {
            load(app);
            app.show_alert(e.to_string(), AlertKind::Danger);
        }
    }
}

fn refresh_sum(app: &mut App) {
    match EntryService::new(app.storage).list() {
        Ok(entries) => app.render_sum(&entries),
        Err(e) => app.show_alert(e.to_string(), AlertKind::Danger),
    }
}
