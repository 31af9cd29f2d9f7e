//! Input handler for a code field in the Editing state.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::KeyEvent;
use tracing::warn;

use crate::editor::CodeLanguage;
use crate::tui::code_panel::{handle_edit_key, EditAction};
use crate::tui::AppState;

/// Handle input while `language`'s field is editing
pub fn handle_edit_input(
    state: &mut AppState,
    language: CodeLanguage,
    key: KeyEvent,
) -> Result<bool> {
    let Some(buffer) = state.session.field_mut(language).buffer_mut() else {
        return Ok(false);
    };

    match handle_edit_key(buffer, key) {
        EditAction::Continue => {}
        EditAction::Cancel => {
            state.session.cancel_field(language);
            state.set_status(format!("{language} edit cancelled"));
        }
        EditAction::Save => match state.session.save_field(language) {
            Ok(_) => {
                let target = if state.session.is_custom() {
                    "custom layout"
                } else {
                    "working copy"
                };
                state.set_status(format!("{language} saved to {target}"));
            }
            Err(e) => {
                warn!("Failed to persist {language}: {e}");
                state.alert.error(e.to_string(), Instant::now());
            }
        },
    }
    Ok(false)
}
