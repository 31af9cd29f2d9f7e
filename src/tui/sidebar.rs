//! Property sidebar: the properties demonstrated for the selected family.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::catalog::properties;
use crate::models::LayoutFamily;
use crate::tui::component::{select_next, select_previous, ContextualComponent};
use crate::tui::Theme;

/// Events emitted by the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEvent {
    /// User picked a property
    PropertySelected(&'static str),
}

/// Cursor state of the property sidebar.
#[derive(Debug, Clone, Default)]
pub struct PropertySidebar {
    selected: usize,
}

impl PropertySidebar {
    /// Creates a sidebar with the cursor on the first property.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: 0 }
    }

    /// Moves the cursor back to the top.
    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

impl ContextualComponent for PropertySidebar {
    type Context = LayoutFamily;
    type Event = SidebarEvent;

    fn handle_input(&mut self, key: KeyEvent, family: &LayoutFamily) -> Option<Self::Event> {
        let props = properties::properties(*family);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = select_previous(self.selected);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = select_next(self.selected, props.len());
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => props
                .get(self.selected)
                .map(|&property| SidebarEvent::PropertySelected(property)),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, family: &LayoutFamily) {
        let items: Vec<ListItem> = properties::properties(*family)
            .iter()
            .enumerate()
            .map(|(i, property)| {
                let style = if i == self.selected {
                    Style::default()
                        .fg(theme.background)
                        .bg(theme.primary)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };
                ListItem::new(Line::from(Span::styled(format!(" {property}"), style)))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} Properties ", family.display_name()))
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(list, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_select_property() {
        let mut sidebar = PropertySidebar::new();
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);

        sidebar.handle_input(down, &LayoutFamily::Flex);
        assert_eq!(
            sidebar.handle_input(enter, &LayoutFamily::Flex),
            Some(SidebarEvent::PropertySelected("flex-direction"))
        );
    }

    #[test]
    fn test_cursor_stays_within_family() {
        let mut sidebar = PropertySidebar::new();
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        for _ in 0..20 {
            sidebar.handle_input(down, &LayoutFamily::Grid);
        }
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            sidebar.handle_input(enter, &LayoutFamily::Grid),
            Some(SidebarEvent::PropertySelected("align-items"))
        );
    }
}
