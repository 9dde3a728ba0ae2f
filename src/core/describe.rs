use crate::config::EngineConfig;
use crate::domain::model::{FieldDescriptor, FieldSnapshot, SelectSummary};

/// Derive prompt-facing metadata for one field. Selection controls embed
/// all option values when the list is small, otherwise a short sample so
/// the prompt stays bounded. No side effects.
pub fn describe_field(snapshot: &FieldSnapshot, config: &EngineConfig) -> FieldDescriptor {
    let select = snapshot.options.as_ref().map(|options| {
        if options.len() <= config.inline_option_limit {
            SelectSummary::All {
                values: options.iter().map(|o| o.value.clone()).collect(),
            }
        } else {
            SelectSummary::Sample {
                values: options
                    .iter()
                    .take(config.option_sample_size)
                    .map(|o| o.value.clone())
                    .collect(),
                total: options.len(),
            }
        }
    });

    FieldDescriptor {
        label: snapshot.label.clone(),
        placeholder: snapshot.placeholder.clone(),
        name: snapshot.name.clone(),
        control: snapshot.control.clone(),
        pattern: snapshot.pattern.clone(),
        max_length: snapshot.max_length,
        title: snapshot.title.clone(),
        required: snapshot.required,
        select,
    }
}

pub fn describe_fields(snapshots: &[FieldSnapshot], config: &EngineConfig) -> Vec<FieldDescriptor> {
    snapshots
        .iter()
        .map(|snapshot| describe_field(snapshot, config))
        .collect()
}

/// Prompt keys, one per field: the declared name, or a positional
/// fallback for anonymous fields. The model is instructed to answer with
/// exactly these keys.
pub fn field_names(descriptors: &[FieldDescriptor]) -> Vec<String> {
    descriptors
        .iter()
        .enumerate()
        .map(|(index, descriptor)| {
            if descriptor.name.is_empty() {
                format!("field_{}", index)
            } else {
                descriptor.name.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SelectOption;

    fn options(values: &[&str]) -> Vec<SelectOption> {
        values.iter().map(|v| SelectOption::new(v, v)).collect()
    }

    #[test]
    fn test_describe_plain_input() {
        let snapshot = FieldSnapshot::input("email", "email")
            .with_label("Email address")
            .with_pattern(r".+@.+")
            .required();
        let descriptor = describe_field(&snapshot, &EngineConfig::default());

        assert_eq!(descriptor.name, "email");
        assert_eq!(descriptor.control, "email");
        assert_eq!(descriptor.label, "Email address");
        assert_eq!(descriptor.pattern, r".+@.+");
        assert!(descriptor.required);
        assert!(descriptor.select.is_none());
    }

    #[test]
    fn test_small_select_embeds_all_options() {
        let snapshot = FieldSnapshot::select("state", options(&["CA", "NY", "TX"]));
        let descriptor = describe_field(&snapshot, &EngineConfig::default());

        assert_eq!(
            descriptor.select,
            Some(SelectSummary::All {
                values: vec!["CA".to_string(), "NY".to_string(), "TX".to_string()]
            })
        );
    }

    #[test]
    fn test_large_select_is_sampled() {
        let snapshot = FieldSnapshot::select(
            "state",
            options(&["AL", "AK", "AZ", "AR", "CA", "CO", "CT"]),
        );
        let descriptor = describe_field(&snapshot, &EngineConfig::default());

        match descriptor.select {
            Some(SelectSummary::Sample { values, total }) => {
                assert_eq!(values, vec!["AL", "AK", "AZ"]);
                assert_eq!(total, 7);
            }
            other => panic!("expected sampled summary, got {:?}", other),
        }
    }

    #[test]
    fn test_boundary_select_of_five_embeds_all() {
        let snapshot = FieldSnapshot::select("size", options(&["XS", "S", "M", "L", "XL"]));
        let descriptor = describe_field(&snapshot, &EngineConfig::default());
        assert!(matches!(descriptor.select, Some(SelectSummary::All { .. })));
    }

    #[test]
    fn test_field_names_fall_back_to_position() {
        let snapshots = vec![
            FieldSnapshot::input("email", "email"),
            FieldSnapshot::input("", "text"),
        ];
        let descriptors = describe_fields(&snapshots, &EngineConfig::default());
        let names = field_names(&descriptors);
        assert_eq!(names, vec!["email".to_string(), "field_1".to_string()]);
    }
}
