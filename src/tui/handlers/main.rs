//! Playground input handler.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

use crate::clipboard::{copy_text, COPIED_MESSAGE};
use crate::editor::CodeLanguage;
use crate::models::LayoutFamily;
use crate::tui::component::ContextualComponent;
use crate::tui::design_browser::DesignBrowser;
use crate::tui::preset_picker::PresetListEvent;
use crate::tui::sidebar::SidebarEvent;
use crate::tui::{AppState, Theme, View};

/// Handle input for the playground view
pub fn handle_main_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('c') {
            state.should_quit = true;
            return Ok(true);
        }
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
            return Ok(true);
        }
        KeyCode::Char(c @ '1'..='3') => {
            let index = usize::from(c as u8 - b'1');
            change_family(state, LayoutFamily::ALL[index]);
        }
        KeyCode::Tab => change_family(state, state.session.family().next()),
        KeyCode::BackTab => change_family(state, state.session.family().previous()),
        KeyCode::Char('l') => {
            state.session.toggle_layouts();
            if state.session.show_layouts() {
                state.sidebar.reset();
            } else {
                state.alert.dismiss();
            }
        }
        KeyCode::Char('g') => {
            state.view = View::Gallery(DesignBrowser::new(state.session.catalog()));
            state.set_status("Design gallery");
        }
        KeyCode::Char('e') => begin_edit(state, CodeLanguage::Html),
        KeyCode::Char('E') => begin_edit(state, CodeLanguage::Css),
        KeyCode::Char('x') if state.session.selection().is_some() => {
            state.session.toggle_html_code();
        }
        KeyCode::Char('X') if state.session.selection().is_some() => {
            state.session.toggle_css_code();
        }
        KeyCode::Char('c') => copy_field(state, CodeLanguage::Html),
        KeyCode::Char('C') => copy_field(state, CodeLanguage::Css),
        KeyCode::Char('S') => save_custom_layout(state),
        KeyCode::Char('t') => cycle_theme(state),
        KeyCode::Char('?') => state.show_help = true,
        _ => route_to_list(state, key),
    }
    Ok(false)
}

fn change_family(state: &mut AppState, family: LayoutFamily) {
    if family == state.session.family() {
        return;
    }
    state.session.set_family(family);
    state.preset_list.reset();
    state.sidebar.reset();
    state.set_status(format!("{} selected", family.display_name()));
}

/// Whether the field's code is on screen and may be edited.
fn code_visible(state: &AppState, language: CodeLanguage) -> bool {
    if state.session.selection().is_none() {
        return false;
    }
    state.session.is_custom()
        || match language {
            CodeLanguage::Html => state.session.show_html_code(),
            CodeLanguage::Css => state.session.show_css_code(),
        }
}

fn begin_edit(state: &mut AppState, language: CodeLanguage) {
    if !code_visible(state, language) {
        state.set_status(format!("Show the {language} code first"));
        return;
    }
    state.session.field_mut(language).begin_edit();
}

fn copy_field(state: &mut AppState, language: CodeLanguage) {
    if state.session.selection().is_none() {
        return;
    }
    let text = match language {
        CodeLanguage::Html => state.session.markup(),
        CodeLanguage::Css => state.session.stylesheet(),
    };
    if copy_text(state.clipboard.as_mut(), text) {
        state.alert.success(COPIED_MESSAGE, Instant::now());
    }
}

fn save_custom_layout(state: &mut AppState) {
    match state.session.save_custom_layout() {
        Ok(true) => state.alert.success("Custom layout saved!", Instant::now()),
        Ok(false) => state.set_status("Select Custom Layout to save it"),
        Err(e) => {
            warn!("Failed to save custom layout: {e}");
            state.alert.error(e.to_string(), Instant::now());
        }
    }
}

fn cycle_theme(state: &mut AppState) {
    let mode = state.config.ui.theme_mode.cycle();
    state.config.ui.theme_mode = mode;
    state.theme = Theme::from_mode(mode);
    if let Err(e) = state.config.save() {
        warn!("Failed to save theme preference: {e:#}");
    }
    info!("Theme set to {}", mode.as_str());
    state.set_status(format!("Theme: {}", mode.as_str()));
}

fn route_to_list(state: &mut AppState, key: KeyEvent) {
    if state.session.show_layouts() {
        let context = state.preset_list_context();
        if let Some(PresetListEvent::Selected(selection)) =
            state.preset_list.handle_input(key, &context)
        {
            state.set_status(format!("{selection} selected"));
            state.session.select(selection);
        }
    } else {
        let family = state.session.family();
        if let Some(SidebarEvent::PropertySelected(property)) =
            state.sidebar.handle_input(key, &family)
        {
            state.session.select_property(Some(property));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::config::Config;
    use crate::session::Session;
    use crate::store::CustomLayoutStore;
    use crate::tui::handle_key_event;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state() -> AppState {
        let mut config = Config::default();
        config.ui.show_help_on_startup = false;
        AppState::new(
            Session::new(CustomLayoutStore::in_memory()),
            config,
            Box::new(MemoryClipboard::default()),
            None,
        )
    }

    fn press(state: &mut AppState, codes: &[KeyCode]) {
        for code in codes {
            handle_key_event(state, key(*code)).expect("key handled");
        }
    }

    #[test]
    fn test_family_keys_reset_selection() {
        let mut state = state();
        press(&mut state, &[KeyCode::Char('l'), KeyCode::Enter]);
        assert_eq!(
            state.session.selection().map(|s| s.name().to_string()),
            Some("Holy Grail".to_string())
        );

        press(&mut state, &[KeyCode::Char('2')]);
        assert_eq!(state.session.family(), LayoutFamily::Grid);
        assert!(state.session.selection().is_none());
        assert_eq!(state.preset_list.selected(), 0);

        press(&mut state, &[KeyCode::BackTab]);
        assert_eq!(state.session.family(), LayoutFamily::Flex);
    }

    #[test]
    fn test_sidebar_selects_property() {
        let mut state = state();
        press(&mut state, &[KeyCode::Down, KeyCode::Enter]);
        assert_eq!(state.session.selected_property(), Some("flex-direction"));

        // Showing the preset list clears the property
        press(&mut state, &[KeyCode::Char('l')]);
        assert!(state.session.selected_property().is_none());
    }

    #[test]
    fn test_edit_requires_visible_code() {
        let mut state = state();
        press(&mut state, &[KeyCode::Char('l'), KeyCode::Enter, KeyCode::Char('e')]);
        assert!(state.session.editing_field().is_none());

        press(&mut state, &[KeyCode::Char('x'), KeyCode::Char('e')]);
        assert_eq!(state.session.editing_field(), Some(CodeLanguage::Html));
    }

    #[test]
    fn test_edit_and_save_custom_markup() {
        let mut state = state();
        press(&mut state, &[KeyCode::Char('3'), KeyCode::Char('l'), KeyCode::End, KeyCode::Enter]);
        assert!(state.session.is_custom());

        press(&mut state, &[KeyCode::Char('e')]);
        for c in "<p>Hi</p>".chars() {
            press(&mut state, &[KeyCode::Char(c)]);
        }
        handle_key_event(
            &mut state,
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
        )
        .expect("save handled");

        assert!(state.session.editing_field().is_none());
        assert_eq!(state.session.markup(), "<p>Hi</p>");
        let stored = state.session.into_store().into_snapshot();
        assert_eq!(stored.media.html, "<p>Hi</p>");
    }

    #[test]
    fn test_escape_cancels_edit() {
        let mut state = state();
        press(&mut state, &[KeyCode::Char('l'), KeyCode::End, KeyCode::Enter, KeyCode::Char('E')]);
        press(&mut state, &[KeyCode::Char('z'), KeyCode::Esc]);
        assert!(state.session.editing_field().is_none());
        assert_eq!(state.session.stylesheet(), "");
    }

    #[test]
    fn test_save_custom_layout_shows_alert() {
        let mut state = state();
        press(&mut state, &[KeyCode::Char('l'), KeyCode::Char('S')]);
        assert!(!state.alert.is_visible());

        press(&mut state, &[KeyCode::End, KeyCode::Enter, KeyCode::Char('S')]);
        assert_eq!(
            state.alert.current().map(|n| n.message.as_str()),
            Some("Custom layout saved!")
        );

        // Hiding the list dismisses the alert
        press(&mut state, &[KeyCode::Char('l')]);
        assert!(!state.alert.is_visible());
    }

    #[test]
    fn test_copy_markup_shows_copied_alert() {
        let mut state = state();
        press(&mut state, &[KeyCode::Char('l'), KeyCode::Enter, KeyCode::Char('c')]);
        assert_eq!(
            state.alert.current().map(|n| n.message.as_str()),
            Some(COPIED_MESSAGE)
        );
    }

    #[test]
    fn test_selected_preset_usable_with_list_hidden() {
        let mut state = state();
        press(&mut state, &[KeyCode::Char('l'), KeyCode::Enter, KeyCode::Char('l')]);
        assert!(!state.session.show_layouts());
        assert!(state.preview_content().is_some());

        press(&mut state, &[KeyCode::Char('x'), KeyCode::Char('e')]);
        assert_eq!(state.session.editing_field(), Some(CodeLanguage::Html));
        press(&mut state, &[KeyCode::Esc, KeyCode::Char('c')]);
        assert_eq!(
            state.alert.current().map(|n| n.message.as_str()),
            Some(COPIED_MESSAGE)
        );
    }

    #[test]
    fn test_failed_copy_shows_nothing() {
        let mut state = state();
        state.clipboard = Box::new(MemoryClipboard {
            history: Vec::new(),
            fail: true,
        });
        press(&mut state, &[KeyCode::Char('l'), KeyCode::Enter, KeyCode::Char('C')]);
        assert!(!state.alert.is_visible());
    }

    #[test]
    fn test_gallery_copy_and_close() {
        let mut state = state();
        press(&mut state, &[KeyCode::Char('g'), KeyCode::Char('c')]);
        let View::Gallery(browser) = &state.view else {
            panic!("gallery should be open");
        };
        assert!(browser.snackbar().is_visible());

        press(&mut state, &[KeyCode::Esc]);
        assert!(matches!(state.view, View::Playground));
    }

    #[test]
    fn test_quit() {
        let mut state = state();
        let quit = handle_key_event(&mut state, key(KeyCode::Char('q'))).expect("handled");
        assert!(quit);
        assert!(state.should_quit);
    }
}
