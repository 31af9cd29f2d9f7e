//! Terminal user interface for the responsive-design playground.
//!
//! Architecture:
//! - `AppState` is the single source of truth for what is on screen.
//! - The event loop polls input every 100 ms, expires notifications and
//!   rewrites the live preview file when its content changes.
//! - Views are rendered from state; input handlers live in `handlers`.

pub mod code_panel;
pub mod component;
pub mod design_browser;
pub mod handlers;
pub mod help_overlay;
pub mod preset_picker;
pub mod sidebar;
pub mod status_bar;
pub mod theme;

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use tracing::warn;

use crate::catalog::properties;
use crate::clipboard::ClipboardSink;
use crate::config::Config;
use crate::editor::CodeLanguage;
use crate::models::LayoutFamily;
use crate::notify::{NotificationChannel, NotificationKind, Notifier};
use crate::preview::{outline, ContentTrust, PreviewRenderer, PreviewWriter};
use crate::session::{PreviewContent, Session};

pub use component::{Component, ContextualComponent};
pub use theme::Theme;

use code_panel::render_code_field;
use design_browser::DesignBrowser;
use help_overlay::HelpOverlayState;
use preset_picker::{PresetList, PresetListContext};
use sidebar::PropertySidebar;
use status_bar::StatusBar;

/// Top-level view.
#[derive(Debug, Clone)]
pub enum View {
    /// Family sidebar, preset list, code panels and preview
    Playground,
    /// Design gallery; dropping it drops its snackbar
    Gallery(DesignBrowser),
}

/// Application state - single source of truth
pub struct AppState {
    // Core data
    /// Selection, working copy and custom layout store
    pub session: Session,
    /// Application configuration
    pub config: Config,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Active view
    pub view: View,
    /// Property sidebar cursor
    pub sidebar: PropertySidebar,
    /// Preset list cursor
    pub preset_list: PresetList,
    /// Banner above the layouts view
    pub alert: Notifier,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,
    /// Whether the help overlay is open
    pub show_help: bool,
    /// Help overlay scroll state
    pub help: HelpOverlayState,

    // System resources
    /// Live preview output, `None` when disabled
    pub preview_writer: Option<PreviewWriter>,
    /// Clipboard used by copy actions
    pub clipboard: Box<dyn ClipboardSink>,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state for a new session.
    #[must_use]
    pub fn new(
        session: Session,
        config: Config,
        clipboard: Box<dyn ClipboardSink>,
        preview_writer: Option<PreviewWriter>,
    ) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let show_help = config.ui.show_help_on_startup;
        Self {
            session,
            config,
            theme,
            view: View::Playground,
            sidebar: PropertySidebar::new(),
            preset_list: PresetList::new(),
            alert: Notifier::new(NotificationChannel::Alert),
            status_message: String::new(),
            error_message: None,
            show_help,
            help: HelpOverlayState::new(),
            preview_writer,
            clipboard,
            should_quit: false,
        }
    }

    /// Sets the status bar message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Shows an error overlay.
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clears the error overlay.
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Context handed to the preset list.
    #[must_use]
    pub fn preset_list_context(&self) -> PresetListContext {
        PresetListContext {
            catalog: self.session.catalog(),
            family: self.session.family(),
            active: self.session.selection().cloned(),
        }
    }

    /// What the live preview should show right now.
    #[must_use]
    pub fn preview_content(&self) -> Option<PreviewContent> {
        match &self.view {
            View::Gallery(browser) => browser.preview_content(),
            View::Playground => self.session.preview_content(),
        }
    }

    /// Expires notifications. Returns true if anything was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut cleared = self.alert.tick(now);
        if let View::Gallery(browser) = &mut self.view {
            cleared |= browser.tick(now);
        }
        cleared
    }

    /// Rewrites the preview file when its content changed.
    ///
    /// A write failure disables the live preview for the rest of the session.
    pub fn refresh_preview(&mut self) {
        let Some(content) = self.preview_content() else {
            return;
        };
        let Some(writer) = self.preview_writer.as_mut() else {
            return;
        };

        let renderer = PreviewRenderer::new(
            ContentTrust::from_flag(self.config.preview.trusted_content),
            self.theme.preview_theme(),
        );
        let document = renderer.render(&content.title, &content.markup, &content.stylesheet);
        if let Err(e) = writer.write(&document) {
            warn!("Live preview disabled: {e:#}");
            self.preview_writer = None;
            self.set_error(format!("Live preview disabled: {e:#}"));
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Auto follows the OS theme, Dark/Light are explicit
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        state.tick(Instant::now());
        state.refresh_preview();

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(state, key)? {
                    break;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);

    match &state.view {
        View::Playground => render_playground(f, chunks[1], state),
        View::Gallery(browser) => browser.render(f, chunks[1], &state.theme),
    }

    StatusBar::render(f, chunks[2], state, &state.theme);

    if state.show_help {
        state.help.render(f, f.area(), &state.theme);
    }

    if let Some(error) = &state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Title bar: family tabs, layouts flag and theme
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let mut spans = vec![Span::styled(
        " Layout Lab  ",
        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
    )];

    for (i, family) in LayoutFamily::ALL.iter().enumerate() {
        let style = if *family == state.session.family() {
            Style::default()
                .fg(theme.background)
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        spans.push(Span::styled(
            format!(" {} {} ", i + 1, family.display_name()),
            style,
        ));
        spans.push(Span::raw(" "));
    }

    let layouts = if state.session.show_layouts() {
        "Hide Layouts"
    } else {
        "Show Layouts"
    };
    spans.push(Span::styled(
        format!(" | l: {layouts} | t: {} ", state.config.ui.theme_mode.as_str()),
        Style::default().fg(theme.text_muted),
    ));

    let title_widget = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Playground: list on the left, alert, code panels and preview on the right
fn render_playground(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let columns = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(32), Constraint::Percentage(68)])
        .split(area);

    if state.session.show_layouts() {
        state
            .preset_list
            .render(f, columns[0], theme, &state.preset_list_context());
    } else {
        state
            .sidebar
            .render(f, columns[0], theme, &state.session.family());
    }

    let code_languages: Vec<CodeLanguage> = visible_code(state);
    let mut constraints = Vec::new();
    if state.alert.is_visible() {
        constraints.push(Constraint::Length(3));
    }
    constraints.extend(code_languages.iter().map(|_| Constraint::Min(6)));
    constraints.push(Constraint::Min(6));

    let rows = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(columns[1]);

    let mut next = 0;
    if let Some(notification) = state.alert.current() {
        let color = match notification.kind {
            NotificationKind::Success => theme.success,
            NotificationKind::Error => theme.error,
        };
        let banner = Paragraph::new(notification.message.as_str())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(banner, rows[next]);
        next += 1;
    }

    for language in code_languages {
        render_code_field(f, rows[next], state.session.field(language), theme);
        next += 1;
    }

    render_preview_panel(f, rows[next], state);
}

/// Code panels on screen: both for the custom entry, toggled ones otherwise.
fn visible_code(state: &AppState) -> Vec<CodeLanguage> {
    if state.session.selection().is_none() {
        return Vec::new();
    }
    let custom = state.session.is_custom();
    let mut languages = Vec::new();
    if custom || state.session.show_html_code() {
        languages.push(CodeLanguage::Html);
    }
    if custom || state.session.show_css_code() {
        languages.push(CodeLanguage::Css);
    }
    languages
}

/// Structure of the previewed markup, or why there is nothing to preview
fn render_preview_panel(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let (title, lines) = match state.session.preview_content() {
        Some(content) => {
            let nodes = outline::outline(&content.markup);
            let lines: Vec<Line> = if nodes.is_empty() {
                vec![Line::from(Span::styled(
                    "(no markup)",
                    Style::default().fg(theme.text_muted),
                ))]
            } else {
                nodes
                    .iter()
                    .map(|node| {
                        Line::from(vec![
                            Span::raw("  ".repeat(node.depth)),
                            Span::styled(node.label(), Style::default().fg(theme.code_keyword)),
                            Span::styled(
                                node.text.as_deref().map(|t| format!(" {t}")).unwrap_or_default(),
                                Style::default().fg(theme.text_secondary),
                            ),
                        ])
                    })
                    .collect()
            };
            (format!(" Preview: {} ", content.title), lines)
        }
        None => {
            let message = if state.session.show_layouts() {
                format!("Select a {} layout to preview", state.session.family().display_name())
            } else if let Some(property) = state.session.selected_property() {
                properties::missing_example_message(property)
            } else {
                "Select a property to see an example".to_string()
            };
            (
                " Preview ".to_string(),
                vec![Line::from(Span::styled(
                    message,
                    Style::default().fg(theme.text_muted),
                ))],
            )
        }
    };

    let preview = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.background)),
        );
    f.render_widget(preview, area);
}

fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(60, 30, f.area());
    f.render_widget(ratatui::widgets::Clear, area);
    let overlay = Paragraph::new(vec![
        Line::from(Span::styled(
            error,
            Style::default().fg(theme.error),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter or Esc to dismiss",
            Style::default().fg(theme.text_muted),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Error ")
            .border_style(Style::default().fg(theme.error))
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(overlay, area);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
pub(crate) fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    // If error overlay is shown, allow dismissing with Enter or Esc
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        return Ok(false);
    }

    if state.show_help {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => state.help.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => state.help.scroll_down(),
            KeyCode::Esc | KeyCode::Char('?' | 'q') => state.show_help = false,
            _ => {}
        }
        return Ok(false);
    }

    if let Some(language) = state.session.editing_field() {
        return handlers::handle_edit_input(state, language, key);
    }

    match state.view {
        View::Gallery(_) => handlers::handle_gallery_input(state, key),
        View::Playground => handlers::handle_main_input(state, key),
    }
}
