//! HTML/CSS code panel: read-only view or edit buffer with a cursor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::editor::{CodeField, CodeLanguage, TextBuffer};
use crate::tui::Theme;

/// Outcome of a key press while a field is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// Key was applied to the buffer (or ignored)
    Continue,
    /// Ctrl+S: commit the buffer
    Save,
    /// Esc: discard the buffer
    Cancel,
}

/// Applies an editing key to the buffer.
pub fn handle_edit_key(buffer: &mut TextBuffer, key: KeyEvent) -> EditAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') => EditAction::Save,
            _ => EditAction::Continue,
        };
    }

    match key.code {
        KeyCode::Esc => return EditAction::Cancel,
        KeyCode::Char(c) => buffer.insert_char(c),
        KeyCode::Tab => buffer.insert_str("  "),
        KeyCode::Enter => buffer.insert_newline(),
        KeyCode::Backspace => buffer.backspace(),
        KeyCode::Delete => buffer.delete(),
        KeyCode::Left => buffer.move_left(),
        KeyCode::Right => buffer.move_right(),
        KeyCode::Up => buffer.move_up(),
        KeyCode::Down => buffer.move_down(),
        KeyCode::Home => buffer.move_home(),
        KeyCode::End => buffer.move_end(),
        _ => {}
    }
    EditAction::Continue
}

/// Renders a code field.
pub fn render_code_field(f: &mut Frame, area: Rect, field: &CodeField, theme: &Theme) {
    let language = field.language();
    let (title, lines) = match field.buffer() {
        Some(buffer) => (
            format!(" {language} (editing, Ctrl+S save, Esc cancel) "),
            buffer_lines(buffer, theme),
        ),
        None => {
            let lines = if field.value().is_empty() {
                vec![Line::from(Span::styled(
                    "(empty)",
                    Style::default().fg(theme.text_muted),
                ))]
            } else {
                field
                    .value()
                    .lines()
                    .map(|line| highlight(line, language, theme))
                    .collect()
            };
            (format!(" {language} "), lines)
        }
    };

    let border_style = if field.is_editing() {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.primary)
    };

    // Keep the cursor row visible while editing
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = field
        .buffer()
        .map_or(0, |b| b.cursor().0.saturating_sub(inner_height.saturating_sub(1)));

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(theme.text).bg(theme.surface))
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );
    f.render_widget(paragraph, area);
}

fn buffer_lines<'a>(buffer: &'a TextBuffer, theme: &Theme) -> Vec<Line<'a>> {
    let (cursor_row, cursor_col) = buffer.cursor();
    let cursor_style = Style::default()
        .fg(theme.background)
        .bg(theme.accent)
        .add_modifier(Modifier::BOLD);

    buffer
        .lines()
        .iter()
        .enumerate()
        .map(|(row, line)| {
            if row != cursor_row {
                return Line::from(line.as_str());
            }
            let before: String = line.chars().take(cursor_col).collect();
            let at = line.chars().nth(cursor_col).map_or(' ', |c| c);
            let after: String = line.chars().skip(cursor_col + 1).collect();
            Line::from(vec![
                Span::raw(before),
                Span::styled(at.to_string(), cursor_style),
                Span::raw(after),
            ])
        })
        .collect()
}

/// Light syntax coloring: tags in markup, selectors and values in stylesheets.
fn highlight<'a>(line: &'a str, language: CodeLanguage, theme: &Theme) -> Line<'a> {
    let keyword = Style::default().fg(theme.code_keyword);
    let value = Style::default().fg(theme.code_value);

    match language {
        CodeLanguage::Html => {
            let mut spans = Vec::new();
            let mut rest = line;
            while let Some(start) = rest.find('<') {
                if start > 0 {
                    spans.push(Span::raw(&rest[..start]));
                }
                let end = rest[start..].find('>').map_or(rest.len(), |i| start + i + 1);
                spans.push(Span::styled(&rest[start..end], keyword));
                rest = &rest[end..];
            }
            if !rest.is_empty() {
                spans.push(Span::raw(rest));
            }
            Line::from(spans)
        }
        CodeLanguage::Css => {
            let trimmed = line.trim_end();
            if trimmed.ends_with('{') || trimmed.starts_with('@') {
                Line::from(Span::styled(line, keyword))
            } else if let Some((property, rest)) = line.split_once(':') {
                Line::from(vec![
                    Span::raw(property),
                    Span::raw(":"),
                    Span::styled(rest, value),
                ])
            } else {
                Line::from(line)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_save() {
        let mut buffer = TextBuffer::new("");
        for c in "<p>".chars() {
            assert_eq!(handle_edit_key(&mut buffer, key(KeyCode::Char(c))), EditAction::Continue);
        }
        handle_edit_key(&mut buffer, key(KeyCode::Enter));
        handle_edit_key(&mut buffer, key(KeyCode::Tab));

        assert_eq!(buffer.text(), "<p>\n  ");
        assert_eq!(
            handle_edit_key(&mut buffer, KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            EditAction::Save
        );
    }

    #[test]
    fn test_escape_cancels() {
        let mut buffer = TextBuffer::new("x");
        assert_eq!(handle_edit_key(&mut buffer, key(KeyCode::Esc)), EditAction::Cancel);
        assert_eq!(buffer.text(), "x");
    }

    #[test]
    fn test_other_control_keys_are_ignored() {
        let mut buffer = TextBuffer::new("x");
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(handle_edit_key(&mut buffer, ctrl_a), EditAction::Continue);
        assert_eq!(buffer.text(), "x");
    }

    #[test]
    fn test_highlight_splits_html_tags() {
        let theme = Theme::dark();
        let line = highlight("<div class=\"a\">Hi</div>", CodeLanguage::Html, &theme);
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[1].content, "Hi");
    }

    #[test]
    fn test_highlight_css_declaration() {
        let theme = Theme::dark();
        let line = highlight("  display: flex;", CodeLanguage::Css, &theme);
        assert_eq!(line.spans[2].content, " flex;");
    }
}
