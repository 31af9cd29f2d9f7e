//! Preset list for the selected family, followed by the custom entry.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::catalog::PresetCatalog;
use crate::constants::{CUSTOM_LAYOUT_DESCRIPTION, CUSTOM_LAYOUT_NAME};
use crate::models::{LayoutFamily, PresetSelection};
use crate::tui::component::{select_next, select_previous, ContextualComponent};
use crate::tui::Theme;

/// What the preset list needs to know about the session.
#[derive(Debug, Clone)]
pub struct PresetListContext {
    /// Catalog to list from
    pub catalog: PresetCatalog,
    /// Family whose presets are listed
    pub family: LayoutFamily,
    /// Currently active selection, marked in the list
    pub active: Option<PresetSelection>,
}

/// Events emitted by the preset list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetListEvent {
    /// User picked an entry
    Selected(PresetSelection),
}

/// Cursor state of the preset list.
#[derive(Debug, Clone, Default)]
pub struct PresetList {
    selected: usize,
}

impl PresetList {
    /// Creates a list with the cursor on the first preset.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: 0 }
    }

    /// Cursor index.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Moves the cursor back to the top, e.g. after a family change.
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    /// Entry under the cursor.
    #[must_use]
    pub fn highlighted(&self, context: &PresetListContext) -> PresetSelection {
        context
            .catalog
            .presets(context.family)
            .get(self.selected)
            .map_or(PresetSelection::Custom, |preset| {
                PresetSelection::Preset(preset.name.to_string())
            })
    }

    fn len(context: &PresetListContext) -> usize {
        context.catalog.presets(context.family).len() + 1
    }
}

impl ContextualComponent for PresetList {
    type Context = PresetListContext;
    type Event = PresetListEvent;

    fn handle_input(&mut self, key: KeyEvent, context: &Self::Context) -> Option<Self::Event> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = select_previous(self.selected);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = select_next(self.selected, Self::len(context));
                None
            }
            KeyCode::Home => {
                self.selected = 0;
                None
            }
            KeyCode::End => {
                self.selected = Self::len(context) - 1;
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                Some(PresetListEvent::Selected(self.highlighted(context)))
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, context: &Self::Context) {
        let entries = context
            .catalog
            .presets(context.family)
            .iter()
            .map(|preset| (preset.name, preset.description))
            .chain(std::iter::once((
                CUSTOM_LAYOUT_NAME,
                CUSTOM_LAYOUT_DESCRIPTION,
            )));

        let items: Vec<ListItem> = entries
            .enumerate()
            .map(|(i, (name, description))| {
                let active = context.active.as_ref().is_some_and(|a| a.name() == name);
                let marker = if active { "● " } else { "  " };

                let name_style = if i == self.selected {
                    Style::default()
                        .fg(theme.background)
                        .bg(theme.primary)
                        .add_modifier(Modifier::BOLD)
                } else if active {
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };

                ListItem::new(vec![
                    Line::from(Span::styled(format!("{marker}{name}"), name_style)),
                    Line::from(Span::styled(
                        format!("    {description}"),
                        Style::default().fg(theme.text_muted),
                    )),
                ])
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", context.family.heading()))
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(list, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn context(family: LayoutFamily) -> PresetListContext {
        PresetListContext {
            catalog: PresetCatalog::builtin(),
            family,
            active: None,
        }
    }

    #[test]
    fn test_enter_selects_highlighted_preset() {
        let ctx = context(LayoutFamily::Grid);
        let mut list = PresetList::new();
        list.handle_input(key(KeyCode::Down), &ctx);

        let event = list.handle_input(key(KeyCode::Enter), &ctx);
        assert_eq!(
            event,
            Some(PresetListEvent::Selected(PresetSelection::Preset(
                "Dashboard Layout".to_string()
            )))
        );
    }

    #[test]
    fn test_last_entry_is_custom_layout() {
        let ctx = context(LayoutFamily::Media);
        let mut list = PresetList::new();
        list.handle_input(key(KeyCode::End), &ctx);
        assert_eq!(list.selected(), 6);
        assert_eq!(list.highlighted(&ctx), PresetSelection::Custom);

        // Cursor stops at the end
        list.handle_input(key(KeyCode::Down), &ctx);
        assert_eq!(list.selected(), 6);
    }

    #[test]
    fn test_reset_returns_to_top() {
        let ctx = context(LayoutFamily::Flex);
        let mut list = PresetList::new();
        list.handle_input(key(KeyCode::Char('j')), &ctx);
        list.reset();
        assert_eq!(list.selected(), 0);
        list.handle_input(key(KeyCode::Char('k')), &ctx);
        assert_eq!(list.selected(), 0);
    }
}
