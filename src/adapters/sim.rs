use crate::domain::model::{FieldSnapshot, Validity};
use crate::domain::ports::FieldControl;
use regex::Regex;

/// A host-independent form control with constraint validation modeled on
/// the browser's `checkValidity()`: required presence, anchored regex
/// pattern, max length, and a minimal email shape check. Used by the
/// crate's tests and by embedders that have no live DOM.
#[derive(Debug, Clone)]
pub struct SimField {
    snapshot: FieldSnapshot,
    value: String,
}

impl SimField {
    pub fn new(snapshot: FieldSnapshot) -> Self {
        Self {
            snapshot,
            value: String::new(),
        }
    }
}

impl FieldControl for SimField {
    fn snapshot(&self) -> FieldSnapshot {
        self.snapshot.clone()
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        if let Some(options) = &self.snapshot.options {
            // Assigning to a select only sticks when an option carries
            // that exact value, as in the DOM.
            if options.iter().any(|option| option.value == value) {
                self.value = value.to_string();
            }
        } else {
            self.value = value.to_string();
        }
    }

    fn check_validity(&self) -> Validity {
        if self.snapshot.required && self.value.is_empty() {
            return Validity::invalid("Please fill out this field.");
        }
        if self.value.is_empty() {
            return Validity::ok();
        }

        if !self.snapshot.pattern.is_empty() {
            // Browsers anchor the pattern attribute to the whole value
            // and ignore patterns that fail to compile.
            let anchored = format!("^(?:{})$", self.snapshot.pattern);
            if let Ok(regex) = Regex::new(&anchored) {
                if !regex.is_match(&self.value) {
                    let message = if self.snapshot.title.is_empty() {
                        "Please match the requested format.".to_string()
                    } else {
                        format!("Please match the requested format: {}.", self.snapshot.title)
                    };
                    return Validity::invalid(&message);
                }
            }
        }

        if let Some(max_length) = self.snapshot.max_length {
            if self.value.chars().count() > max_length as usize {
                return Validity::invalid(&format!(
                    "Please shorten this text to {} characters or less.",
                    max_length
                ));
            }
        }

        if self.snapshot.control == "email" {
            let at = self.value.find('@');
            let well_formed =
                matches!(at, Some(position) if position > 0 && position < self.value.len() - 1);
            if !well_formed {
                return Validity::invalid("Please include an '@' in the email address.");
            }
        }

        Validity::ok()
    }
}
