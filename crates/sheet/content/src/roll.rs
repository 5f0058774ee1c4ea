//! Roll-context derivation.
//!
//! The host's dice-formula evaluator resolves plain keys (`str`, `lvl`),
//! so character records get their ability entries copied to the top level
//! of the context before a formula like `str.mod + 4` is evaluated.

use serde_json::{Map, Value, json};
use sheet_core::ActorKind;

use crate::record::actor_kind;

/// Build the flattened data view consumed by dice-formula evaluation.
///
/// For `character` records every entry of `abilities` is copied to the top
/// level and `lvl` is set from `attributes.level.value`, defaulting to 0
/// when the level entry is absent. Records of any other kind get the plain
/// clone of their fields.
pub fn roll_context(record: &Value) -> Map<String, Value> {
    let mut context = record.as_object().cloned().unwrap_or_default();
    if actor_kind(record) != Some(ActorKind::Character) {
        return context;
    }

    if let Some(abilities) = record.get("abilities").and_then(Value::as_object) {
        for (key, entry) in abilities {
            context.insert(key.clone(), entry.clone());
        }
    }

    let level = record
        .pointer("/attributes/level/value")
        .and_then(Value::as_i64)
        .unwrap_or(0);
    context.insert("lvl".to_owned(), json!(level));

    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn abilities_are_copied_to_the_top_level() {
        let record = json!({
            "type": "character",
            "abilities": { "str": { "mod": 2 }, "dex": { "mod": -1 } },
        });
        let context = roll_context(&record);

        assert_eq!(context["str"], json!({ "mod": 2 }));
        assert_eq!(context["dex"], json!({ "mod": -1 }));
        // The nested entries stay in place.
        assert_eq!(context["abilities"]["str"]["mod"], json!(2));
    }

    #[test]
    fn level_defaults_to_zero_when_absent() {
        let record = json!({
            "type": "character",
            "abilities": { "str": { "mod": 2 } },
        });
        assert_eq!(roll_context(&record)["lvl"], json!(0));
    }

    #[test]
    fn level_is_lifted_when_present() {
        let record = json!({
            "type": "character",
            "attributes": { "level": { "value": 4 } },
        });
        assert_eq!(roll_context(&record)["lvl"], json!(4));
    }

    #[test]
    fn non_character_records_are_cloned_unflattened() {
        let record = json!({
            "type": "npc",
            "abilities": { "str": { "mod": 2 } },
        });
        let context = roll_context(&record);
        assert!(!context.contains_key("str"));
        assert!(!context.contains_key("lvl"));
        assert_eq!(Value::Object(context), record);
    }
}
