//! Component trait pattern for TUI components.
//!
//! This module defines the traits used to implement self-contained,
//! testable TUI components that can handle their own input and rendering.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A component that can be rendered and handle input.
///
/// Components are self-contained UI elements that manage their own state,
/// handle keyboard input, and can emit events to communicate with the parent.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to the parent.
    /// Returns `None` if input was handled internally without needing parent action.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Extended trait for components that need shared context.
///
/// List components read the current family from the session instead of
/// keeping a copy that could go stale.
pub trait ContextualComponent {
    /// The type of context this component needs
    type Context;

    /// Event type this component can emit
    type Event;

    /// Handle keyboard input with access to shared context.
    fn handle_input(&mut self, key: KeyEvent, context: &Self::Context) -> Option<Self::Event>;

    /// Render the component with access to shared context.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, context: &Self::Context);
}

/// Moves a list cursor up, stopping at the top.
pub(crate) const fn select_previous(selected: usize) -> usize {
    selected.saturating_sub(1)
}

/// Moves a list cursor down, stopping at the last of `len` items.
pub(crate) const fn select_next(selected: usize, len: usize) -> usize {
    if len > 0 && selected + 1 < len {
        selected + 1
    } else {
        selected
    }
}
