//! The builder's input controls

use super::field::FormField;
use crate::catalog::{FormType, ToneOption};
use crate::controller::UserSelection;

/// Focusable controls, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuilderField {
    #[default]
    FormType,
    Tone,
    Description,
    DemoMode,
    Generate,
}

/// Widget values for the builder page
#[derive(Debug, Clone)]
pub struct BuilderForm {
    pub form_type: FormType,
    pub tone: ToneOption,
    pub description: FormField,
    pub demo_mode: bool,
    pub active: BuilderField,
}

impl BuilderForm {
    pub fn new(form_type: FormType, tone: ToneOption, demo_mode: bool) -> Self {
        Self {
            form_type,
            tone,
            description: FormField::text("Describe the form you want", true),
            demo_mode,
            active: BuilderField::FormType,
        }
    }

    /// The description control only exists for custom requests
    pub fn is_description_visible(&self) -> bool {
        self.form_type.is_custom()
    }

    /// Controls currently reachable with Tab
    pub fn visible_fields(&self) -> Vec<BuilderField> {
        let mut fields = vec![BuilderField::FormType, BuilderField::Tone];
        if self.is_description_visible() {
            fields.push(BuilderField::Description);
        }
        fields.push(BuilderField::DemoMode);
        fields.push(BuilderField::Generate);
        fields
    }

    fn active_position(&self, fields: &[BuilderField]) -> usize {
        fields.iter().position(|f| *f == self.active).unwrap_or(0)
    }

    pub fn next_field(&mut self) {
        let fields = self.visible_fields();
        let pos = self.active_position(&fields);
        self.active = fields[(pos + 1) % fields.len()];
    }

    pub fn prev_field(&mut self) {
        let fields = self.visible_fields();
        let pos = self.active_position(&fields);
        self.active = if pos == 0 {
            fields[fields.len() - 1]
        } else {
            fields[pos - 1]
        };
    }

    /// Right/next on a choice control
    pub fn select_next_option(&mut self) {
        match self.active {
            BuilderField::FormType => self.form_type = self.form_type.next(),
            BuilderField::Tone => self.tone.toggle(),
            BuilderField::DemoMode => self.demo_mode = !self.demo_mode,
            BuilderField::Description | BuilderField::Generate => {}
        }
    }

    /// Left/previous on a choice control
    pub fn select_prev_option(&mut self) {
        match self.active {
            BuilderField::FormType => self.form_type = self.form_type.prev(),
            BuilderField::Tone => self.tone.toggle(),
            BuilderField::DemoMode => self.demo_mode = !self.demo_mode,
            BuilderField::Description | BuilderField::Generate => {}
        }
    }

    pub fn toggle_demo_mode(&mut self) {
        self.demo_mode = !self.demo_mode;
    }

    pub fn is_editing_text(&self) -> bool {
        self.active == BuilderField::Description && self.is_description_visible()
    }

    pub fn input_char(&mut self, c: char) {
        if self.is_editing_text() {
            self.description.push_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.is_editing_text() {
            self.description.pop_char();
        }
    }

    pub fn newline(&mut self) {
        if self.is_editing_text() {
            self.description.push_newline();
        }
    }

    /// Snapshot the controls for one trigger.
    ///
    /// A description typed for a custom form is not carried over once another
    /// form type is selected.
    pub fn selection(&self) -> UserSelection {
        let description = if self.is_description_visible() {
            self.description.as_text().to_string()
        } else {
            String::new()
        };
        UserSelection {
            form_type: self.form_type,
            tone: self.tone,
            description,
            demo_mode: self.demo_mode,
        }
    }
}

impl Default for BuilderForm {
    fn default() -> Self {
        Self::new(FormType::default(), ToneOption::default(), false)
    }
}
