use crate::domain::model::{FieldGroup, FieldSnapshot};
use std::collections::HashMap;

/// Partition fields into related groups from their `(name, id)` pairs
/// alone, so grouping stays unit-testable without any DOM concern.
///
/// Priority order: fields whose name/id contains a case-insensitive
/// "firstname"/"lastname" token join a single `name` group; everything
/// else groups by name-or-id with trailing digits stripped, so `phone1`
/// and `phone2` land in one `phone` group. Anonymous fields form
/// singleton groups. This is a naming heuristic, not a guarantee;
/// ambiguous names may group together and that is accepted behavior.
pub fn group_fields(pairs: &[(String, String)]) -> Vec<FieldGroup> {
    let mut groups: Vec<FieldGroup> = Vec::new();
    let mut position: HashMap<String, usize> = HashMap::new();

    for (index, (name, id)) in pairs.iter().enumerate() {
        let key = group_key(name, id, index);
        match position.get(&key) {
            Some(&at) => groups[at].indices.push(index),
            None => {
                position.insert(key.clone(), groups.len());
                groups.push(FieldGroup {
                    key,
                    indices: vec![index],
                });
            }
        }
    }

    groups
}

pub fn group_snapshots(snapshots: &[FieldSnapshot]) -> Vec<FieldGroup> {
    let pairs: Vec<(String, String)> = snapshots
        .iter()
        .map(|s| (s.name.clone(), s.id.clone()))
        .collect();
    group_fields(&pairs)
}

fn group_key(name: &str, id: &str, index: usize) -> String {
    let base = if name.is_empty() { id } else { name };
    if base.is_empty() {
        // No name and no id: nothing to correlate on.
        return format!("field_{}", index);
    }

    let lower = base.to_ascii_lowercase();
    if lower.contains("firstname") || lower.contains("lastname") {
        return "name".to_string();
    }

    let stripped = lower.trim_end_matches(|c: char| c.is_ascii_digit());
    if stripped.is_empty() {
        lower
    } else {
        stripped.to_string()
    }
}
