//! Form field value objects

/// A single free-text field with its label
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub value: String,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(label: &str, is_multiline: bool) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
            is_multiline,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Start a new line (multiline fields only)
    pub fn push_newline(&mut self) {
        if self.is_multiline {
            self.value.push('\n');
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pop() {
        let mut field = FormField::text("Description", true);
        for c in "rash".chars() {
            field.push_char(c);
        }
        field.pop_char();
        assert_eq!(field.as_text(), "ras");
    }

    #[test]
    fn test_newline_only_in_multiline() {
        let mut single = FormField::text("A", false);
        single.push_newline();
        assert_eq!(single.as_text(), "");

        let mut multi = FormField::text("B", true);
        multi.push_char('x');
        multi.push_newline();
        multi.push_char('y');
        assert_eq!(multi.as_text(), "x\ny");
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut field = FormField::text("A", false);
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }
}
