//! Application state and core logic

use crate::config::AppConfig;
use crate::controller;
use crate::export;
use crate::generation::GenerationClient;
use crate::platform::is_shortcut;
use crate::state::{AppState, BuilderField, BuilderForm};
use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Window for the second Ctrl+C of a double-tap quit
const QUIT_WINDOW: Duration = Duration::from_secs(1);

/// Lines moved per PageUp/PageDown
const PAGE_LINES: usize = 10;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client used for live generation
    client: Box<dyn GenerationClient>,
    /// Timeout imposed on each generation call, if any
    request_timeout: Option<Duration>,
    /// Where exports are written
    export_dir: PathBuf,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &AppConfig, client: Box<dyn GenerationClient>) -> Self {
        let form = BuilderForm::new(config.form_type(), config.tone(), config.demo_mode());
        Self {
            state: AppState::new(form),
            client,
            request_timeout: config.request_timeout(),
            export_dir: config.export_dir(),
            quit: false,
            status_message: None,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn client_description(&self) -> String {
        self.client.describe()
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// True when a trigger is waiting to be served
    pub fn has_pending_trigger(&self) -> bool {
        self.state.pending_selection().is_some()
    }

    /// Serve the pending trigger, if any.
    ///
    /// Called by the event loop after the "generating" frame has been drawn.
    pub async fn run_pending_trigger(&mut self) {
        let Some(selection) = self.state.pending_selection().cloned() else {
            return;
        };
        let outcome = controller::handle_trigger(
            &selection,
            self.client.as_ref(),
            self.request_timeout,
        )
        .await;
        self.state.finish_trigger(outcome);
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c();
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        if is_shortcut(&key, 'g') {
            self.trigger();
            return Ok(());
        }
        if is_shortcut(&key, 'e') {
            self.run_action(Self::export_current);
            return Ok(());
        }
        if is_shortcut(&key, 'y') {
            self.run_action(Self::copy_html);
            return Ok(());
        }
        if is_shortcut(&key, 'l') {
            self.run_action(Self::copy_download_link);
            return Ok(());
        }

        let editing = self.state.form.is_editing_text();
        let active = self.state.form.active;

        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            KeyCode::PageDown => self.state.scroll_down(PAGE_LINES),
            KeyCode::PageUp => self.state.scroll_up(PAGE_LINES),
            KeyCode::Esc => self.state.clear_output(),
            KeyCode::Enter => match active {
                BuilderField::Generate => self.trigger(),
                BuilderField::Description => self.state.form.newline(),
                BuilderField::DemoMode => self.state.form.toggle_demo_mode(),
                BuilderField::FormType | BuilderField::Tone => self.state.form.next_field(),
            },
            KeyCode::Backspace if editing => self.state.form.backspace(),
            KeyCode::Char(c) if editing => self.state.form.input_char(c),
            KeyCode::Char(' ') => match active {
                BuilderField::Generate => self.trigger(),
                _ => self.state.form.select_next_option(),
            },
            KeyCode::Right | KeyCode::Char('l') => self.state.form.select_next_option(),
            KeyCode::Left | KeyCode::Char('h') => self.state.form.select_prev_option(),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(1),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        match self.last_ctrl_c {
            Some(previous) if now.duration_since(previous) <= QUIT_WINDOW => self.quit = true,
            _ => {
                self.last_ctrl_c = Some(now);
                self.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
        }
    }

    /// Snapshot the controls and mark the trigger pending
    fn trigger(&mut self) {
        if self.has_pending_trigger() {
            return;
        }
        let selection = self.state.begin_trigger();
        tracing::debug!("Triggered: {selection:?}");
    }

    /// Run a fallible action, routing failures to the error dialog
    fn run_action(&mut self, action: fn(&mut Self) -> Result<String>) {
        match action(self) {
            Ok(message) => self.status_message = Some(message),
            Err(err) => self.push_error(format!("{err:#}")),
        }
    }

    /// Write the displayed form to a printable HTML file
    fn export_current(&mut self) -> Result<String> {
        let outcome = self
            .state
            .outcome()
            .ok_or_else(|| anyhow!("Nothing to export yet. Generate a form first."))?;
        let (Some(html), Some(form_type)) = (outcome.html(), outcome.form_type()) else {
            return Err(anyhow!("The last generation failed; there is nothing to export."));
        };
        let path = export::export_html(&self.export_dir, form_type, html, chrono::Local::now())?;
        Ok(format!("Exported to {} (open it in a browser to print)", path.display()))
    }

    fn copy_html(&mut self) -> Result<String> {
        let html = self
            .state
            .outcome()
            .and_then(|o| o.html())
            .ok_or_else(|| anyhow!("No form HTML to copy."))?
            .to_string();
        self.copy_to_clipboard(&html)?;
        Ok(format!("Copied {} chars of HTML", html.chars().count()))
    }

    fn copy_download_link(&mut self) -> Result<String> {
        let link = self
            .state
            .outcome()
            .and_then(|o| o.download_link())
            .ok_or_else(|| anyhow!("No downloadable document for this form."))?;
        self.copy_to_clipboard(link)?;
        Ok(format!("Copied {link}"))
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
