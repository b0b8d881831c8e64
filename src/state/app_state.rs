//! Application state definitions

use super::BuilderForm;
use crate::controller::{ControllerPhase, RenderOutcome, UserSelection};
use std::collections::VecDeque;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Input controls
    pub form: BuilderForm,
    /// Output pane lifecycle
    pub phase: ControllerPhase,
    /// Preview scroll position (lines)
    pub scroll_offset: usize,
    /// Errors waiting to be shown in the modal dialog
    pub error_queue: VecDeque<String>,
}

impl AppState {
    pub fn new(form: BuilderForm) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }

    /// Record a trigger; returns the selection snapshot that will be served
    pub fn begin_trigger(&mut self) -> UserSelection {
        let selection = self.form.selection();
        self.phase = ControllerPhase::Generating(selection.clone());
        self.scroll_offset = 0;
        selection
    }

    /// Selection waiting for the client, if a trigger is pending
    pub fn pending_selection(&self) -> Option<&UserSelection> {
        match &self.phase {
            ControllerPhase::Generating(selection) => Some(selection),
            _ => None,
        }
    }

    pub fn finish_trigger(&mut self, outcome: RenderOutcome) {
        self.phase = ControllerPhase::Rendered(outcome);
        self.scroll_offset = 0;
    }

    /// Drop the displayed result and return to idle
    pub fn clear_output(&mut self) {
        if !self.phase.is_generating() {
            self.phase = ControllerPhase::Idle;
            self.scroll_offset = 0;
        }
    }

    pub fn outcome(&self) -> Option<&RenderOutcome> {
        self.phase.outcome()
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
