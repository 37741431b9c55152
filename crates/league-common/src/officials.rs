//! Officials assigned to an event, grouped by duty.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::content::ContentId;

/// Duty id -> ordered, de-duplicated official ids.
pub type OfficialAssignments = BTreeMap<u64, Vec<u64>>;

/// Payload used when an event carries no assignments.
pub const EMPTY_PAYLOAD: &str = "{}";

/// A duty officials can be assigned to (umpire, scorekeeper, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duty {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub order: Option<i64>,
}

/// A published official.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Official {
    pub id: ContentId,
    pub title: String,
}

/// Choices offered by the bulk-edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficialsDirectory {
    pub duties: Vec<Duty>,
    pub officials: Vec<Official>,
}

impl OfficialsDirectory {
    /// Sort duties by explicit order (unordered last) and officials by title.
    pub fn sorted(mut self) -> Self {
        self.duties
            .sort_by_key(|d| (d.order.is_none(), d.order.unwrap_or_default(), d.id));
        self.officials
            .sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        self
    }

    /// The form is only offered when there is something to choose.
    pub fn is_usable(&self) -> bool {
        !self.duties.is_empty() && !self.officials.is_empty()
    }
}

/// Clean a submitted assignment map.
///
/// Duties with a non-positive id or a non-list value are dropped. Official
/// ids are coerced to non-negative integers; zeros and repeats are removed
/// and duties left empty are omitted.
pub fn sanitize(raw: &Value) -> OfficialAssignments {
    let mut clean = OfficialAssignments::new();
    let Some(duties) = raw.as_object() else {
        return clean;
    };

    for (duty_key, officials) in duties {
        let duty_id = absint_str(duty_key);
        if duty_id == 0 {
            continue;
        }
        let Some(officials) = officials.as_array() else {
            continue;
        };

        let mut ids: Vec<u64> = Vec::with_capacity(officials.len());
        for id in officials.iter().map(absint).filter(|id| *id > 0) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        // Keys that normalize to the same duty: the last one wins.
        if ids.is_empty() {
            clean.remove(&duty_id);
        } else {
            clean.insert(duty_id, ids);
        }
    }

    clean
}

/// Serialize stored assignments for the list-row prefill payload.
pub fn row_payload(assignments: Option<&OfficialAssignments>) -> String {
    match assignments {
        Some(a) => serde_json::to_string(a).unwrap_or_else(|_| EMPTY_PAYLOAD.to_string()),
        None => EMPTY_PAYLOAD.to_string(),
    }
}

/// Absolute integer value of a JSON scalar; anything unparseable is 0.
fn absint(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(i64::unsigned_abs)
            .or_else(|| n.as_u64())
            .or_else(|| n.as_f64().map(|f| f.trunc().abs() as u64))
            .unwrap_or(0),
        Value::String(s) => absint_str(s),
        Value::Bool(true) => 1,
        _ => 0,
    }
}

/// Leading integer of a string, ignoring sign; `"12abc"` is 12.
fn absint_str(s: &str) -> u64 {
    let s = s.trim();
    let s = s.strip_prefix(['-', '+']).unwrap_or(s);
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}
