use crate::config::EngineConfig;
use crate::domain::model::{FieldDescriptor, FieldSnapshot, InvalidField, Profile, SelectSummary};
use crate::utils::error::Result;
use std::fmt::Write;

/// Render the initial fill prompt: serialized profile plus one numbered
/// metadata line per field, and the response contract (a JSON object
/// keyed by exact field name, empty string as the no-data sentinel).
pub fn build_fill_prompt(
    profile: &Profile,
    descriptors: &[FieldDescriptor],
    names: &[String],
) -> Result<String> {
    let profile_json = serde_json::to_string(profile)?;
    let summary = field_summary(descriptors, names);

    Ok(format!(
        r#"You are an on-device assistant that fills web forms using the user's profile data.

Profile JSON:
{profile_json}

Field Metadata:
{summary}

Instructions:
- If the profile has no relevant data for a field, return an empty string for it (e.g. middle name, credit card info, password).
- Produce the best string value for each field based on the profile and metadata.
- MUST match any regex/pattern exactly (transform profile data as needed: remove punctuation, strip country codes, reformat).
- Dates: convert YYYY-MM-DD to the requested format (e.g., MM/DD/YYYY).
- Addresses: split into street, apt, city, state, zip for separate fields.
- Phones: follow the placeholder/pattern (e.g., (123) 456-7890).

Output: a JSON object with exact field names as keys and string values (empty string if a pattern cannot be satisfied)."#
    ))
}

fn field_summary(descriptors: &[FieldDescriptor], names: &[String]) -> String {
    descriptors
        .iter()
        .zip(names)
        .enumerate()
        .map(|(index, (field, name))| {
            let mut line = format!("{}. {} (type: {}", index + 1, name, field.control);
            if !field.label.is_empty() {
                let _ = write!(line, ", label: \"{}\"", field.label.trim());
            }
            if !field.placeholder.is_empty() {
                let _ = write!(line, ", placeholder: \"{}\"", field.placeholder);
            }
            let _ = write!(line, ", required: {})", field.required);
            if !field.pattern.is_empty() {
                let _ = write!(line, " pattern: {}", field.pattern);
            }
            if !field.title.is_empty() {
                let _ = write!(line, " hint: {}", field.title);
            }
            if let Some(select) = &field.select {
                let _ = write!(line, " select: select with {} options", select.total());
                match select {
                    SelectSummary::All { values } => {
                        let _ = write!(line, " options: {}", values.join(", "));
                    }
                    SelectSummary::Sample { values, .. } => {
                        let _ = write!(line, " sample options: {}...", values.join(", "));
                    }
                }
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the corrective prompt for fields that failed native validation.
///
/// Each field's constraints are restated from scratch and the rejected
/// value is deliberately not echoed: a model shown its own wrong answer
/// tends to repeat it, so the correction must be re-derived from the
/// profile plus constraints alone.
pub fn build_fix_prompt(
    invalid: &[InvalidField],
    snapshots: &[FieldSnapshot],
    names: &[String],
    profile: &Profile,
    config: &EngineConfig,
) -> Result<String> {
    let profile_json = serde_json::to_string(profile)?;

    let detail_lines = invalid
        .iter()
        .map(|field| {
            let snapshot = &snapshots[field.index];
            let name = &names[field.index];

            let mut constraints = vec![format!("type={}", snapshot.control)];
            if !snapshot.pattern.is_empty() {
                constraints.push(format!("regex={}", snapshot.pattern));
            }
            if let Some(max_length) = snapshot.max_length {
                constraints.push(format!("maxlength={}", max_length));
            }
            if !snapshot.placeholder.is_empty() {
                constraints.push(format!("example=\"{}\"", snapshot.placeholder));
            }
            if snapshot.required {
                constraints.push("required".to_string());
            }

            if let Some(options) = &snapshot.options {
                let values: Vec<String> = options
                    .iter()
                    .map(|o| {
                        let value = o.value.trim();
                        if value.is_empty() {
                            o.text.trim()
                        } else {
                            value
                        }
                        .to_string()
                    })
                    .filter(|v| !v.is_empty())
                    .take(config.fix_option_limit)
                    .collect();
                if !values.is_empty() {
                    constraints.push(format!("options=[{}]", values.join("|")));
                }
            }

            format!("- {}: ({})", name, constraints.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n");

    let example_key = invalid
        .first()
        .map(|field| names[field.index].as_str())
        .unwrap_or("fieldName");

    Ok(format!(
        r#"Your task is to correct field values using the provided profile data. For each field listed under "Fields to Correct", generate a new, valid value that satisfies its constraints. Use the "Profile" object as the source of truth. Output JSON only (no prose).

Profile: {profile_json}

Fields to Correct:
{detail_lines}

Return a JSON object containing only the corrected keys and their new values. Example: {{"{example_key}":"..."}}"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::describe::{describe_fields, field_names};
    use crate::domain::model::SelectOption;

    fn profile() -> Profile {
        Profile::basic(
            "Jane O'Connor",
            "jane@example.com",
            "+1 555 123 4567",
            "12 Elm St, Springfield, IL 62704",
            "1990-04-01",
        )
    }

    #[test]
    fn test_fill_prompt_serializes_profile_and_numbers_fields() {
        let snapshots = vec![
            FieldSnapshot::input("firstName", "text").with_label(" First name "),
            FieldSnapshot::input("email", "email")
                .with_placeholder("you@example.com")
                .required(),
        ];
        let config = EngineConfig::default();
        let descriptors = describe_fields(&snapshots, &config);
        let names = field_names(&descriptors);

        let prompt = build_fill_prompt(&profile(), &descriptors, &names).unwrap();

        assert!(prompt.contains("\"email\":\"jane@example.com\""));
        assert!(prompt.contains("1. firstName (type: text, label: \"First name\", required: false)"));
        assert!(prompt.contains(
            "2. email (type: email, placeholder: \"you@example.com\", required: true)"
        ));
        assert!(prompt.contains("JSON object with exact field names as keys"));
    }

    #[test]
    fn test_fill_prompt_renders_pattern_hint_and_select_summary() {
        let snapshots = vec![
            FieldSnapshot::input("zip", "text")
                .with_pattern(r"\d{5}")
                .with_title("Five digits"),
            FieldSnapshot::select(
                "state",
                vec![
                    SelectOption::new("CA", "California"),
                    SelectOption::new("NY", "New York"),
                ],
            ),
        ];
        let config = EngineConfig::default();
        let descriptors = describe_fields(&snapshots, &config);
        let names = field_names(&descriptors);

        let prompt = build_fill_prompt(&profile(), &descriptors, &names).unwrap();

        assert!(prompt.contains(r"pattern: \d{5}"));
        assert!(prompt.contains("hint: Five digits"));
        assert!(prompt.contains("select: select with 2 options options: CA, NY"));
    }

    #[test]
    fn test_fill_prompt_marks_sampled_options() {
        let options: Vec<SelectOption> = ["AL", "AK", "AZ", "AR", "CA", "CO"]
            .iter()
            .map(|v| SelectOption::new(v, v))
            .collect();
        let snapshots = vec![FieldSnapshot::select("state", options)];
        let config = EngineConfig::default();
        let descriptors = describe_fields(&snapshots, &config);
        let names = field_names(&descriptors);

        let prompt = build_fill_prompt(&profile(), &descriptors, &names).unwrap();

        assert!(prompt.contains("select with 6 options sample options: AL, AK, AZ..."));
    }

    #[test]
    fn test_fix_prompt_restates_constraints_without_the_bad_value() {
        let snapshots = vec![FieldSnapshot::input("firstName", "text")
            .with_pattern("[A-Za-z]+")
            .with_placeholder("Jane")
            .required()];
        let names = vec!["firstName".to_string()];
        let invalid = vec![InvalidField {
            index: 0,
            name: "firstName".to_string(),
            value: "J@ne!!".to_string(),
            pattern: "[A-Za-z]+".to_string(),
            message: "Please match the requested format.".to_string(),
        }];

        let prompt = build_fix_prompt(
            &invalid,
            &snapshots,
            &names,
            &profile(),
            &EngineConfig::default(),
        )
        .unwrap();

        assert!(prompt.contains(
            "- firstName: (type=text, regex=[A-Za-z]+, example=\"Jane\", required)"
        ));
        assert!(prompt.contains("Example: {\"firstName\":\"...\"}"));
        // The rejected value must not be anchored into the prompt.
        assert!(!prompt.contains("J@ne!!"));
    }

    #[test]
    fn test_fix_prompt_caps_select_options_and_drops_empty_values() {
        let mut options = vec![SelectOption::new("", "Pick one")];
        for i in 0..10 {
            options.push(SelectOption::new(&format!("v{}", i), &format!("v{}", i)));
        }
        let snapshots = vec![FieldSnapshot::select("state", options)];
        let names = vec!["state".to_string()];
        let invalid = vec![InvalidField {
            index: 0,
            name: "state".to_string(),
            value: "Nowhere".to_string(),
            pattern: String::new(),
            message: "bad".to_string(),
        }];

        let prompt = build_fix_prompt(
            &invalid,
            &snapshots,
            &names,
            &profile(),
            &EngineConfig::default(),
        )
        .unwrap();

        // Empty option value falls back to its text, then the cap applies.
        assert!(prompt.contains("options=[Pick one|v0|v1|v2|v3|v4|v5|v6]"));
        assert!(!prompt.contains("v7"));
    }

    #[test]
    fn test_fix_prompt_handles_maxlength() {
        let snapshots = vec![FieldSnapshot::input("nickname", "text").with_max_length(8)];
        let names = vec!["nickname".to_string()];
        let invalid = vec![InvalidField {
            index: 0,
            name: "nickname".to_string(),
            value: "far-too-long-value".to_string(),
            pattern: String::new(),
            message: "too long".to_string(),
        }];

        let prompt = build_fix_prompt(
            &invalid,
            &snapshots,
            &names,
            &profile(),
            &EngineConfig::default(),
        )
        .unwrap();

        assert!(prompt.contains("- nickname: (type=text, maxlength=8)"));
    }
}
