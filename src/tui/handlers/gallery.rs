//! Input handler for the design gallery.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::clipboard::copy_text;
use crate::tui::component::Component;
use crate::tui::design_browser::DesignBrowserEvent;
use crate::tui::{AppState, View};

/// Handle input while the gallery is open
pub fn handle_gallery_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let View::Gallery(browser) = &mut state.view else {
        return Ok(false);
    };

    match browser.handle_input(key) {
        Some(DesignBrowserEvent::Copy(text)) => {
            if copy_text(state.clipboard.as_mut(), &text) {
                browser.notify_copied(Instant::now());
            }
        }
        Some(DesignBrowserEvent::Closed) => {
            // Drops the browser and its snackbar
            state.view = View::Playground;
            state.set_status("Back to playground");
        }
        None => {}
    }
    Ok(false)
}
