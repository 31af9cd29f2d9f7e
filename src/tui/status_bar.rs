//! Status bar widget for displaying status messages and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme, View};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual hints
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let first_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.as_str()),
            ])
        } else if !state.status_message.is_empty() {
            Line::from(state.status_message.as_str())
        } else {
            Self::preview_line(state, theme)
        };

        let status_text = vec![first_line, Self::hints_line(state, theme)];

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    fn preview_line<'a>(state: &'a AppState, theme: &Theme) -> Line<'a> {
        match &state.preview_writer {
            Some(writer) => Line::from(vec![
                Span::styled("Live preview: ", Style::default().fg(theme.primary)),
                Span::styled(
                    writer.path().display().to_string(),
                    Style::default().fg(theme.text_secondary),
                ),
            ]),
            None => Line::from(""),
        }
    }

    /// Key hints for the current context
    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints: &[(&str, &str)] = if state.session.editing_field().is_some() {
            &[
                ("Ctrl+S", "Save"),
                ("Esc", "Cancel"),
                ("←↑↓→", "Move"),
            ]
        } else if matches!(state.view, View::Gallery(_)) {
            &[
                ("↑↓", "Design"),
                ("x/X", "Code"),
                ("c/C", "Copy"),
                ("Esc", "Back"),
                ("?", "Help"),
            ]
        } else if state.session.show_layouts() {
            &[
                ("Enter", "Select"),
                ("e/E", "Edit"),
                ("x/X", "Code"),
                ("c/C", "Copy"),
                ("S", "Save custom"),
                ("l", "Properties"),
                ("?", "Help"),
            ]
        } else {
            &[
                ("Enter", "Property"),
                ("1/2/3", "Family"),
                ("l", "Layouts"),
                ("g", "Gallery"),
                ("?", "Help"),
                ("q", "Quit"),
            ]
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*action, Style::default().fg(theme.text_muted)));
        }
        Line::from(spans)
    }
}
