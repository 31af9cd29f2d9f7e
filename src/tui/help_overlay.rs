//! Help overlay listing every key binding, grouped by view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

use super::Theme;

/// Key bindings per section.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("1 / 2 / 3", "Flexbox, Grid or Media Queries"),
            ("Tab / Shift+Tab", "Next / previous family"),
            ("l", "Show or hide the preset list"),
            ("g", "Open the design gallery"),
            ("↑ ↓ / k j", "Move the list cursor"),
            ("Enter", "Select preset or property"),
        ],
    ),
    (
        "Code",
        &[
            ("x / X", "Show or hide HTML / CSS code"),
            ("e / E", "Edit HTML / CSS"),
            ("Ctrl+S", "Save the field being edited"),
            ("Esc", "Cancel editing"),
            ("c / C", "Copy HTML / CSS to the clipboard"),
            ("S", "Save the custom layout"),
        ],
    ),
    (
        "Design Gallery",
        &[
            ("↑ ↓", "Select design"),
            ("x / X", "Show or hide HTML / CSS code"),
            ("c / C", "Copy HTML / CSS"),
            ("Esc / g", "Back to the playground"),
        ],
    ),
    (
        "General",
        &[
            ("t", "Cycle theme (auto, light, dark)"),
            ("?", "Toggle this help"),
            ("q", "Quit"),
        ],
    ),
];

/// Scroll state of the help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlayState {
    /// Current scroll position (line offset)
    pub scroll_offset: usize,
    total_lines: usize,
}

impl HelpOverlayState {
    /// Creates a new help overlay state.
    #[must_use]
    pub fn new() -> Self {
        let total_lines = Self::get_help_content(&Theme::dark()).len();
        Self {
            scroll_offset: 0,
            total_lines,
        }
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }

    fn get_help_content(theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (i, (section, bindings)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                *section,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )));
            for (keys, action) in *bindings {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {keys:<18}"),
                        Style::default().fg(theme.accent),
                    ),
                    Span::styled(*action, Style::default().fg(theme.text)),
                ]));
            }
        }
        lines
    }

    /// Render the help overlay as a centered modal.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        // 60% width, 80% height
        let width = (area.width * 60) / 100;
        let height = (area.height * 80) / 100;
        let modal_area = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let content = Self::get_help_content(theme);
        let visible_height = chunks[0].height.saturating_sub(2) as usize;

        frame.render_widget(Clear, modal_area);
        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .title(" Help - Keyboard Shortcuts ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .style(Style::default().fg(theme.text).bg(theme.background))
            .wrap(Wrap { trim: false })
            .scroll((u16::try_from(self.scroll_offset).unwrap_or(u16::MAX), 0));
        frame.render_widget(paragraph, chunks[0]);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .style(Style::default().fg(theme.primary));
        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines.saturating_sub(visible_height))
                .position(self.scroll_offset);
        frame.render_stateful_widget(scrollbar, chunks[1], &mut scrollbar_state);
    }
}

impl Default for HelpOverlayState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;

    #[test]
    fn test_scroll_bounds() {
        let mut help = HelpOverlayState::new();
        help.scroll_up();
        assert_eq!(help.scroll_offset, 0);
        for _ in 0..200 {
            help.scroll_down();
        }
        assert_eq!(help.scroll_offset, help.total_lines - 1);
    }

    #[test]
    fn test_every_section_is_listed() {
        let content = HelpOverlayState::get_help_content(&Theme::dark());
        let text: Vec<String> = content.iter().map(ToString::to_string).collect();
        for (section, _) in SECTIONS {
            assert!(text.iter().any(|line| line == section));
        }
    }

    #[test]
    fn test_theme_hint_follows_cycle_order() {
        let mut mode = ThemeMode::Auto;
        let mut order = Vec::new();
        for _ in 0..3 {
            order.push(mode.as_str());
            mode = mode.cycle();
        }
        let expected = format!("Cycle theme ({})", order.join(", "));

        let content = HelpOverlayState::get_help_content(&Theme::dark());
        assert!(content
            .iter()
            .any(|line| line.to_string().ends_with(&expected)));
    }
}
