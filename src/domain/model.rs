use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User-supplied personal data, the source of truth for filling.
/// Read-only for the whole pipeline; only the settings surface writes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile {
    entries: BTreeMap<String, String>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fields the settings form collects.
    pub fn basic(
        full_name: &str,
        email: &str,
        phone: &str,
        address: &str,
        birth_date: &str,
    ) -> Self {
        let mut profile = Self::new();
        profile.set("fullName", full_name);
        profile.set("email", email);
        profile.set("phone", phone);
        profile.set("address", address);
        profile.set("birthDate", birth_date);
        profile
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One entry of a selection control.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

impl SelectOption {
    pub fn new(value: &str, text: &str) -> Self {
        Self {
            value: value.to_string(),
            text: text.to_string(),
        }
    }
}

/// Raw attributes of one form control, captured by the host when a fill
/// starts. `label` is the text of the label element associated with the
/// control's id, empty when there is none. `options` is `Some` exactly for
/// selection controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub name: String,
    pub id: String,
    pub label: String,
    pub placeholder: String,
    /// The input's type attribute, or the lowercased tag name for
    /// non-input controls ("textarea", "select").
    pub control: String,
    pub pattern: String,
    pub max_length: Option<u32>,
    pub title: String,
    pub required: bool,
    pub options: Option<Vec<SelectOption>>,
}

impl FieldSnapshot {
    pub fn input(name: &str, control: &str) -> Self {
        Self {
            name: name.to_string(),
            control: control.to_string(),
            ..Self::default()
        }
    }

    pub fn select(name: &str, options: Vec<SelectOption>) -> Self {
        Self {
            name: name.to_string(),
            control: "select".to_string(),
            options: Some(options),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = pattern.to_string();
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn is_select(&self) -> bool {
        self.options.is_some()
    }

    pub fn is_password(&self) -> bool {
        self.control == "password"
    }
}

/// Prompt-bound summary of a selection control's options. Large option
/// lists are sampled to keep prompt size bounded.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectSummary {
    All { values: Vec<String> },
    Sample { values: Vec<String>, total: usize },
}

impl SelectSummary {
    pub fn total(&self) -> usize {
        match self {
            SelectSummary::All { values } => values.len(),
            SelectSummary::Sample { total, .. } => *total,
        }
    }
}

/// Derived metadata for one field, the unit the prompt builder works with.
/// Ephemeral: lives for one fill operation.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub label: String,
    pub placeholder: String,
    pub name: String,
    pub control: String,
    pub pattern: String,
    pub max_length: Option<u32>,
    pub title: String,
    pub required: bool,
    pub select: Option<SelectSummary>,
}

/// A cluster of related fields filled together in one model invocation.
/// `indices` point into the page's control list, in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGroup {
    pub key: String,
    pub indices: Vec<usize>,
}

/// Outcome of one native constraint check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validity {
    pub valid: bool,
    pub message: String,
}

impl Validity {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(message: &str) -> Self {
        Self {
            valid: false,
            message: message.to_string(),
        }
    }
}

/// A field that failed native validation after the fill pass.
/// `index` is the field's position within its group.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidField {
    pub index: usize,
    pub name: String,
    pub value: String,
    pub pattern: String,
    pub message: String,
}

/// Counters for one completed group fill.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroupStats {
    pub fields: usize,
    /// Fields that failed native validation after the fill pass.
    pub invalid: usize,
    /// Fields rewritten by the fix pass.
    pub corrected: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GroupOutcome {
    Filled(GroupStats),
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupReport {
    pub key: String,
    pub fields: usize,
    pub outcome: GroupOutcome,
}

/// Per-group outcomes for one page fill. A failed group never blocks its
/// siblings, so a report can mix successes and failures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageReport {
    pub groups: Vec<GroupReport>,
}

impl PageReport {
    pub fn filled_groups(&self) -> usize {
        self.groups
            .iter()
            .filter(|g| matches!(g.outcome, GroupOutcome::Filled(_)))
            .count()
    }

    pub fn failed_groups(&self) -> usize {
        self.groups.len() - self.filled_groups()
    }
}
