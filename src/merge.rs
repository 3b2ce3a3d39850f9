//! Recursive JSON value merge with a configurable array policy.
//!
//! Node field updates arrive as partial JSON objects. Folding them into the
//! existing node data needs a deep merge where the update side wins on
//! conflict, objects merge key by key, and array fields are treated as an
//! atomic unit governed by [`ArrayMergePolicy`].

use serde_json::{Map, Value};

/// What to do when both sides of a merge carry an array for the same field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayMergePolicy {
    /// The update's array replaces the existing one wholesale.
    ///
    /// This is the policy the reconciler uses: an array field in an update is
    /// the complete new value of that field, never a batch of appends.
    Overwrite,
    /// Existing elements followed by the update's elements.
    Concat,
}

/// Merge `update` into `base`, returning a new value.
///
/// - Two objects merge key-recursively; keys only in one side pass through.
/// - Two arrays combine per `policy`.
/// - Any other pairing (including `null` on the update side) resolves to the
///   update's value.
pub fn merge_values(base: &Value, update: &Value, policy: ArrayMergePolicy) -> Value {
    match (base, update) {
        (Value::Object(base_map), Value::Object(update_map)) => {
            Value::Object(merge_objects(base_map, update_map, policy))
        }
        (Value::Array(base_items), Value::Array(update_items)) => match policy {
            ArrayMergePolicy::Overwrite => Value::Array(update_items.clone()),
            ArrayMergePolicy::Concat => {
                let mut items = base_items.clone();
                items.extend(update_items.iter().cloned());
                Value::Array(items)
            }
        },
        (_, update) => update.clone(),
    }
}

/// Merge two JSON object maps key by key, recursing via [`merge_values`].
pub fn merge_objects(
    base: &Map<String, Value>,
    update: &Map<String, Value>,
    policy: ArrayMergePolicy,
) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, update_value) in update {
        let value = match base.get(key) {
            Some(base_value) => merge_values(base_value, update_value, policy),
            None => update_value.clone(),
        };
        merged.insert(key.clone(), value);
    }
    merged
}
