//! Design gallery: standalone HTML/CSS snippets with copy buttons.
//!
//! The browser owns its snackbar. Closing the gallery drops the browser and
//! with it any message still waiting to expire.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::catalog::PresetCatalog;
use crate::clipboard::COPIED_MESSAGE;
use crate::editor::{CodeField, CodeLanguage};
use crate::models::Design;
use crate::notify::{NotificationChannel, NotificationKind, Notifier};
use crate::preview::outline;
use crate::session::PreviewContent;
use crate::tui::code_panel::render_code_field;
use crate::tui::component::{select_next, select_previous, Component};
use crate::tui::Theme;

/// Events emitted by the design browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesignBrowserEvent {
    /// Copy this text to the clipboard
    Copy(String),
    /// Leave the gallery
    Closed,
}

/// Gallery state: cursor, code toggles and the snackbar.
#[derive(Debug, Clone)]
pub struct DesignBrowser {
    designs: &'static [Design],
    selected: usize,
    show_html: bool,
    show_css: bool,
    snackbar: Notifier,
}

impl DesignBrowser {
    /// Opens the gallery on the first design.
    #[must_use]
    pub fn new(catalog: PresetCatalog) -> Self {
        Self {
            designs: catalog.designs(),
            selected: 0,
            show_html: false,
            show_css: false,
            snackbar: Notifier::new(NotificationChannel::Snackbar),
        }
    }

    /// Design under the cursor.
    #[must_use]
    pub fn selected_design(&self) -> Option<&'static Design> {
        self.designs.get(self.selected)
    }

    /// Whether the HTML code panel is shown.
    #[must_use]
    pub const fn show_html(&self) -> bool {
        self.show_html
    }

    /// Whether the CSS code panel is shown.
    #[must_use]
    pub const fn show_css(&self) -> bool {
        self.show_css
    }

    /// The gallery's snackbar.
    #[must_use]
    pub const fn snackbar(&self) -> &Notifier {
        &self.snackbar
    }

    /// Shows the "copied" snackbar.
    pub fn notify_copied(&mut self, now: Instant) {
        self.snackbar.success(COPIED_MESSAGE, now);
    }

    /// Expires the snackbar. Returns true if it was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.snackbar.tick(now)
    }

    /// Live preview content for the selected design.
    #[must_use]
    pub fn preview_content(&self) -> Option<PreviewContent> {
        self.selected_design().map(|design| PreviewContent {
            title: design.name.to_string(),
            markup: design.markup().to_string(),
            stylesheet: design.stylesheet().to_string(),
        })
    }

    fn render_details(&self, f: &mut Frame, area: Rect, theme: &Theme, design: &Design) {
        let code_panels = usize::from(self.show_html) + usize::from(self.show_css);
        let mut constraints = vec![Constraint::Length(4)];
        constraints.extend(std::iter::repeat(Constraint::Min(5)).take(code_panels));
        if code_panels == 0 {
            constraints.push(Constraint::Min(3));
        }
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                design.name,
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                design.description,
                Style::default().fg(theme.text_secondary),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Design "));
        f.render_widget(header, chunks[0]);

        let mut next = 1;
        if self.show_html {
            let field = CodeField::new(CodeLanguage::Html, design.markup());
            render_code_field(f, chunks[next], &field, theme);
            next += 1;
        }
        if self.show_css {
            let field = CodeField::new(CodeLanguage::Css, design.stylesheet());
            render_code_field(f, chunks[next], &field, theme);
        }

        if code_panels == 0 {
            let lines: Vec<Line> = outline::outline(design.markup())
                .iter()
                .map(|node| {
                    Line::from(vec![
                        Span::raw("  ".repeat(node.depth)),
                        Span::styled(node.label(), Style::default().fg(theme.code_keyword)),
                        Span::styled(
                            node.text.as_deref().map(|t| format!(" {t}")).unwrap_or_default(),
                            Style::default().fg(theme.text_muted),
                        ),
                    ])
                })
                .collect();
            let structure = Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title(" Structure "));
            f.render_widget(structure, chunks[1]);
        }
    }

    fn render_snackbar(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(notification) = self.snackbar.current() else {
            return;
        };
        let width = u16::try_from(notification.message.len() + 4)
            .unwrap_or(u16::MAX)
            .min(area.width);
        let rect = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(3),
            width,
            height: 3.min(area.height),
        };
        let color = match notification.kind {
            NotificationKind::Success => theme.success,
            NotificationKind::Error => theme.error,
        };
        f.render_widget(Clear, rect);
        f.render_widget(
            Paragraph::new(notification.message.as_str())
                .style(Style::default().fg(color).bg(theme.surface))
                .block(Block::default().borders(Borders::ALL)),
            rect,
        );
    }
}

impl Component for DesignBrowser {
    type Event = DesignBrowserEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = select_previous(self.selected);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = select_next(self.selected, self.designs.len());
                None
            }
            KeyCode::Char('x') => {
                self.show_html = !self.show_html;
                None
            }
            KeyCode::Char('X') => {
                self.show_css = !self.show_css;
                None
            }
            KeyCode::Char('c') => self
                .selected_design()
                .map(|d| DesignBrowserEvent::Copy(d.markup().to_string())),
            KeyCode::Char('C') => self
                .selected_design()
                .map(|d| DesignBrowserEvent::Copy(d.stylesheet().to_string())),
            KeyCode::Esc | KeyCode::Char('g') => Some(DesignBrowserEvent::Closed),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(area);

        let items: Vec<ListItem> = self
            .designs
            .iter()
            .enumerate()
            .map(|(i, design)| {
                let style = if i == self.selected {
                    Style::default()
                        .fg(theme.background)
                        .bg(theme.primary)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };
                ListItem::new(Line::from(Span::styled(format!(" {}", design.name), style)))
            })
            .collect();
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Design Gallery ")
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(list, chunks[0]);

        if let Some(design) = self.selected_design() {
            self.render_details(f, chunks[1], theme, design);
        }

        self.render_snackbar(f, area, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_copy_emits_trimmed_code() {
        let mut browser = DesignBrowser::new(PresetCatalog::builtin());
        let Some(DesignBrowserEvent::Copy(html)) = browser.handle_input(key(KeyCode::Char('c')))
        else {
            panic!("expected copy event");
        };
        assert_eq!(html, html.trim());
        assert!(html.starts_with('<'));

        let Some(DesignBrowserEvent::Copy(css)) = browser.handle_input(key(KeyCode::Char('C')))
        else {
            panic!("expected copy event");
        };
        assert!(css.contains('{'));
    }

    #[test]
    fn test_code_toggles() {
        let mut browser = DesignBrowser::new(PresetCatalog::builtin());
        assert!(!browser.show_html());
        browser.handle_input(key(KeyCode::Char('x')));
        browser.handle_input(key(KeyCode::Char('X')));
        assert!(browser.show_html());
        assert!(browser.show_css());
        browser.handle_input(key(KeyCode::Char('x')));
        assert!(!browser.show_html());
    }

    #[test]
    fn test_navigation_and_close() {
        let mut browser = DesignBrowser::new(PresetCatalog::builtin());
        for _ in 0..20 {
            browser.handle_input(key(KeyCode::Down));
        }
        assert_eq!(
            browser.selected_design().map(|d| d.name),
            Some("Toggle Switches")
        );
        assert_eq!(
            browser.handle_input(key(KeyCode::Esc)),
            Some(DesignBrowserEvent::Closed)
        );
    }

    #[test]
    fn test_snackbar_expires_after_three_seconds() {
        let mut browser = DesignBrowser::new(PresetCatalog::builtin());
        let start = Instant::now();
        browser.notify_copied(start);
        assert_eq!(
            browser.snackbar().current().map(|n| n.message.as_str()),
            Some(COPIED_MESSAGE)
        );

        assert!(!browser.tick(start + Duration::from_millis(2900)));
        assert!(browser.tick(start + Duration::from_secs(3)));
        assert!(browser.snackbar().current().is_none());
    }

    #[test]
    fn test_preview_content_follows_selection() {
        let mut browser = DesignBrowser::new(PresetCatalog::builtin());
        browser.handle_input(key(KeyCode::Down));
        let content = browser.preview_content().expect("design selected");
        assert_eq!(content.title, "Elegant Hero");
    }
}
