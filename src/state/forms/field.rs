//! Form field value objects

/// Input type of a text field, mirroring the input surface of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Tel,
}

impl InputKind {
    /// Example value shown while the field is empty
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::Text => None,
            Self::Email => Some("nombre@correo.es"),
            Self::Tel => Some("600 000 000"),
        }
    }
}

/// A single text input with its wire name, label and current value
#[derive(Debug, Clone)]
pub struct FormField {
    /// Name transmitted to the form endpoint
    pub name: &'static str,
    /// Placeholder shown as the field title
    pub label: &'static str,
    pub value: String,
    pub kind: InputKind,
    pub required: bool,
}

impl FormField {
    /// Create an optional free-text field
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: String::new(),
            kind: InputKind::Text,
            required: false,
        }
    }

    /// Create an email field
    pub fn email(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: InputKind::Email,
            ..Self::text(name, label)
        }
    }

    /// Create a telephone field
    pub fn tel(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: InputKind::Tel,
            ..Self::text(name, label)
        }
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// True when the value is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Title used when rendering, with a marker on required fields
    pub fn title(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.to_string()
        }
    }
}
