use crate::domain::model::{FieldSnapshot, InvalidField};
use crate::domain::ports::FieldControl;

/// Run native constraint validation over a just-filled group and collect
/// the fields that failed.
///
/// Skipped outright: password fields (never validated or corrected),
/// optional fields whose value is empty or whitespace-only, and any field
/// whose value is exactly the empty string. The empty string is the
/// model's "no data" sentinel and is honored even on required fields
/// rather than force-filling them with placeholder junk.
pub fn collect_invalid(
    controls: &[Box<dyn FieldControl>],
    indices: &[usize],
    snapshots: &[FieldSnapshot],
    values: &[String],
    names: &[String],
) -> Vec<InvalidField> {
    let mut invalid = Vec::new();

    for (position, &index) in indices.iter().enumerate() {
        let snapshot = &snapshots[position];
        if snapshot.is_password() {
            continue;
        }

        let value = &values[position];
        if !snapshot.required && value.trim().is_empty() {
            continue;
        }
        if value.is_empty() {
            continue;
        }

        let validity = controls[index].check_validity();
        if !validity.valid {
            invalid.push(InvalidField {
                index: position,
                name: names[position].clone(),
                value: value.clone(),
                pattern: snapshot.pattern.clone(),
                message: validity.message,
            });
        }
    }

    invalid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SimField;
    use crate::domain::model::FieldSnapshot;

    fn setup(
        snapshots: Vec<FieldSnapshot>,
        values: Vec<&str>,
    ) -> (Vec<Box<dyn FieldControl>>, Vec<usize>, Vec<String>, Vec<String>) {
        let mut controls: Vec<Box<dyn FieldControl>> = snapshots
            .iter()
            .map(|s| Box::new(SimField::new(s.clone())) as Box<dyn FieldControl>)
            .collect();
        let indices: Vec<usize> = (0..snapshots.len()).collect();
        let names: Vec<String> = snapshots.iter().map(|s| s.name.clone()).collect();
        let values: Vec<String> = values.into_iter().map(String::from).collect();
        for (control, value) in controls.iter_mut().zip(&values) {
            control.set_value(value);
        }
        (controls, indices, names, values)
    }

    #[test]
    fn test_password_fields_are_never_validated() {
        let snapshots = vec![FieldSnapshot::input("password", "password").required()];
        let (controls, indices, names, values) = setup(snapshots.clone(), vec!["garbage"]);

        let invalid = collect_invalid(&controls, &indices, &snapshots, &values, &names);

        assert!(invalid.is_empty());
    }

    #[test]
    fn test_optional_whitespace_value_is_skipped() {
        let snapshots = vec![FieldSnapshot::input("middleName", "text").with_pattern("[A-Z]+")];
        let (controls, indices, names, values) = setup(snapshots.clone(), vec!["   "]);

        let invalid = collect_invalid(&controls, &indices, &snapshots, &values, &names);

        assert!(invalid.is_empty());
    }

    #[test]
    fn test_empty_sentinel_is_honored_even_for_required_fields() {
        let snapshots = vec![FieldSnapshot::input("ssn", "text").required()];
        let (controls, indices, names, values) = setup(snapshots.clone(), vec![""]);

        let invalid = collect_invalid(&controls, &indices, &snapshots, &values, &names);

        assert!(invalid.is_empty());
    }

    #[test]
    fn test_pattern_failure_is_collected_with_message() {
        let snapshots = vec![FieldSnapshot::input("firstName", "text").with_pattern("[A-Za-z]+")];
        let (controls, indices, names, values) = setup(snapshots.clone(), vec!["O'Connor"]);

        let invalid = collect_invalid(&controls, &indices, &snapshots, &values, &names);

        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].index, 0);
        assert_eq!(invalid[0].name, "firstName");
        assert_eq!(invalid[0].value, "O'Connor");
        assert_eq!(invalid[0].pattern, "[A-Za-z]+");
        assert!(!invalid[0].message.is_empty());
    }

    #[test]
    fn test_valid_fields_are_not_collected() {
        let snapshots = vec![
            FieldSnapshot::input("firstName", "text").with_pattern("[A-Za-z]+"),
            FieldSnapshot::input("zip", "text").with_pattern(r"\d{5}"),
        ];
        let (controls, indices, names, values) = setup(snapshots.clone(), vec!["Jane", "abc"]);

        let invalid = collect_invalid(&controls, &indices, &snapshots, &values, &names);

        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].name, "zip");
    }
}
