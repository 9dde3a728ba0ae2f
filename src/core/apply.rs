use crate::domain::model::{FieldSnapshot, InvalidField, SelectOption};
use crate::domain::ports::FieldControl;
use std::collections::BTreeMap;

/// Write one value per field into the group's controls. `indices` map the
/// group's positions onto the page-wide control list; `snapshots` and
/// `values` are group-local and parallel to it.
pub fn apply_values(
    controls: &mut [Box<dyn FieldControl>],
    indices: &[usize],
    snapshots: &[FieldSnapshot],
    values: &[String],
) {
    for (position, &index) in indices.iter().enumerate() {
        write_value(
            controls[index].as_mut(),
            &snapshots[position],
            &values[position],
        );
    }
}

/// Apply corrected values to the fields that failed validation. Only keys
/// present in the fix payload are written. Returns how many fields were
/// rewritten.
pub fn apply_fixes(
    controls: &mut [Box<dyn FieldControl>],
    indices: &[usize],
    snapshots: &[FieldSnapshot],
    invalid: &[InvalidField],
    names: &[String],
    fixes: &BTreeMap<String, String>,
) -> usize {
    let mut corrected = 0;
    for field in invalid {
        let key = &names[field.index];
        if let Some(new_value) = fixes.get(key) {
            let written = write_value(
                controls[indices[field.index]].as_mut(),
                &snapshots[field.index],
                new_value,
            );
            if written {
                tracing::info!(
                    "Fixed {}: \"{}\" -> \"{}\"",
                    field.name,
                    field.value,
                    new_value
                );
                corrected += 1;
            }
        }
    }
    corrected
}

/// Selection controls pick the first option whose value or visible text
/// exactly equals the supplied value; no match leaves the control
/// untouched. Everything else is a direct overwrite. No fuzzy matching.
fn write_value(control: &mut dyn FieldControl, snapshot: &FieldSnapshot, value: &str) -> bool {
    match &snapshot.options {
        Some(options) => match resolve_option(options, value) {
            Some(option) => {
                control.set_value(&option.value);
                true
            }
            None => false,
        },
        None => {
            control.set_value(value);
            true
        }
    }
}

fn resolve_option<'a>(options: &'a [SelectOption], value: &str) -> Option<&'a SelectOption> {
    options
        .iter()
        .find(|option| option.value == value || option.text.trim() == value)
}
