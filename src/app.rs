//! Application state and key handling for the terminal front end

use crate::form::{ContactForm, Form};
use crate::page::{anchor_scroll_target, NavMenu, StickyHeader};
use crate::pipeline::{ContactPipeline, SubmissionOutcome, SubmitAttempt};
use crate::platform::SUBMIT_MODIFIER;
use crate::ui::{self, TerminalDisplay};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

/// Scroll units reported to the header per row scrolled; the configured
/// scroll threshold is expressed in these units
const SCROLL_UNITS_PER_ROW: u32 = 20;

/// Rows available to the page until the terminal reports its size
const DEFAULT_VIEWPORT_HEIGHT: u16 = 23;

/// Main application struct
pub struct App {
    /// Validation and submission pipeline owning the form
    pub pipeline: ContactPipeline,
    /// What the pipeline last rendered
    pub display: Arc<TerminalDisplay>,
    /// Field jump menu
    pub menu: NavMenu,
    /// Header style driven by the scroll offset
    pub header: StickyHeader,
    /// First content row shown at the top of the page view
    pub scroll: u16,
    viewport_height: u16,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    pub fn new(pipeline: ContactPipeline, display: Arc<TerminalDisplay>) -> Self {
        let header = StickyHeader::new(pipeline.config().scroll_threshold);
        Self {
            pipeline,
            display,
            menu: NavMenu::default(),
            header,
            scroll: 0,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn form(&self) -> &ContactForm {
        self.pipeline.form()
    }

    /// Rows the header currently covers at the top of the page view
    pub fn header_height(&self) -> u16 {
        ui::header_height(self.header.is_scrolled())
    }

    /// Record the rows available to the page, keeping the scroll in range
    pub fn set_viewport_height(&mut self, height: u16) {
        if height != self.viewport_height {
            self.viewport_height = height;
            self.scroll_to(self.scroll);
        }
    }

    fn scroll_to(&mut self, offset: u16) {
        let content_height = ui::item_rows(self.form())
            .last()
            .map_or(0, |(top, height)| top + height);
        self.scroll = offset.min(content_height.saturating_sub(self.viewport_height));
        if self
            .header
            .on_scroll(u32::from(self.scroll) * SCROLL_UNITS_PER_ROW)
        {
            tracing::debug!(
                "Header compact at offset {}: {}",
                self.header.last_offset(),
                self.header.is_scrolled()
            );
        }
    }

    /// Scroll just enough for the focused item to be fully visible
    fn reveal_active(&mut self) {
        let rows = ui::item_rows(self.form());
        let Some(&(top, height)) = rows.get(self.form().active_field_index) else {
            return;
        };
        // Scrolling up may expand the header, so leave room for the full one
        if top < self.scroll + self.header_height() {
            self.scroll_to(top.saturating_sub(ui::header_height(false)));
        } else if top + height > self.scroll.saturating_add(self.viewport_height) {
            self.scroll_to(top + height - self.viewport_height);
        }
    }

    /// Scroll to a field the way an in-page `#name` link does, below the header
    fn scroll_to_anchor(&mut self, index: usize) {
        let rows = ui::item_rows(self.form());
        let href = format!(
            "#{}",
            self.form().get_field(index).map_or("", |f| f.name.as_str())
        );
        let target_top = rows
            .get(index)
            .map(|&(top, _)| f64::from(top) - f64::from(self.scroll));
        if let Some(destination) = anchor_scroll_target(
            &href,
            target_top,
            f64::from(self.scroll),
            f64::from(self.header_height()),
        ) {
            self.scroll_to(destination.clamp(0.0, f64::from(u16::MAX)) as u16);
        }
        self.reveal_active();
    }

    /// Apply the outcome of a finished submission, if any
    pub async fn tick(&mut self) {
        if let Some(outcome) = self.pipeline.poll_submission().await {
            match outcome {
                SubmissionOutcome::Success => tracing::debug!("Submission completed"),
                SubmissionOutcome::Failure(e) => tracing::debug!("Submission completed with {e}"),
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::F(1) {
            self.menu.toggle();
            return;
        }

        if self.menu.is_open() {
            self.handle_menu_key(key);
            return;
        }

        let on_button = self.form().is_button_active();
        let submit_chord = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | SUBMIT_MODIFIER);
        let typing = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);

        match key.code {
            KeyCode::Tab => self.move_focus(|form| form.next_field()),
            KeyCode::BackTab => self.move_focus(|form| form.prev_field()),
            KeyCode::Char('s') if submit_chord => self.submit(),
            KeyCode::Enter if on_button => self.submit(),
            KeyCode::Enter => {
                // Enter in a multiline field adds a newline
                if self.form().is_active_field_multiline() {
                    self.input_char('\n');
                }
            }
            KeyCode::Char(c) if typing && !on_button => self.input_char(c),
            KeyCode::Backspace if !on_button => {
                if let Some(field) = self.pipeline.form_mut().get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    /// Keys while the jump menu is open: Esc closes, a digit jumps to a field
    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.menu.on_escape();
            }
            KeyCode::Char(c) => {
                let field_count = self.form().fields().len();
                if let Some(index) = c.to_digit(10).map(|d| d as usize) {
                    if (1..=field_count).contains(&index) {
                        self.shift_focus(|form| form.set_active_field(index - 1));
                        self.scroll_to_anchor(index - 1);
                        self.menu.on_link_chosen();
                    }
                }
            }
            _ => {}
        }
    }

    /// Move focus, validate the field being left and bring the new one into view
    fn move_focus(&mut self, step: impl FnOnce(&mut ContactForm)) {
        self.shift_focus(step);
        self.reveal_active();
    }

    fn shift_focus(&mut self, step: impl FnOnce(&mut ContactForm)) {
        let left = self.form().active_field_name().map(str::to_string);
        step(self.pipeline.form_mut());
        if let Some(name) = left {
            self.pipeline.validate_field(&name);
        }
    }

    fn input_char(&mut self, c: char) {
        if let Some(field) = self.pipeline.form_mut().get_active_field_mut() {
            field.push_char(c);
        }
    }

    fn submit(&mut self) {
        match self.pipeline.begin_submit() {
            SubmitAttempt::Started(id) => tracing::debug!("Submission {id} started"),
            SubmitAttempt::Rejected(e) => tracing::debug!("Submission rejected: {e}"),
            SubmitAttempt::Ignored => tracing::debug!("Submission already in flight"),
        }
    }
}
