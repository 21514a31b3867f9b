//! Dialog overlays
//!
//! Only the top overlay receives keys. A report opened from the selector is
//! stacked on it, so closing the report returns to the selector.

use super::report::ReportKind;

/// An overlay drawn on top of the dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    QuitConfirm,
    /// Region/status/capacity/fuel controls
    Filter { selected_index: usize },
    /// Visible columns and sort key
    Columns { selected_index: usize },
    /// Report template picker
    Reports { selected_index: usize },
    /// A rendered report; the dialog keeps its own scroll position
    ReportView { kind: ReportKind },
    /// Keyboard shortcuts
    Help,
}

/// Open overlays, bottom first
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    /// Close the top overlay
    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// The overlay receiving input
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.stack.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }
}
