//! Derived-data preparation for host actor records.
//!
//! This is the operation the host calls from its document lifecycle each
//! time an actor needs its derived fields refreshed.

use serde_json::{Map, Value, json};
use sheet_core::{DerivedStats, SkillKind, SkillValues};

use crate::record::{RecordError, actor_kind, parse_snapshot};

/// Refresh the derived fields of one actor record in place.
///
/// The record's type tag selects what is written back:
/// - player characters get every known skill's `value` and the
///   `encumbrance` block,
/// - NPCs get `xp`,
/// - `character` records and records with an unrecognized type tag are
///   left byte-identical.
///
/// Skill keys outside the fixed skill set are never touched, and no
/// formula is ever applied to them.
pub fn prepare_actor(record: &mut Value) -> Result<DerivedStats, RecordError> {
    let Some(kind) = actor_kind(record) else {
        let tag = record.get("type").and_then(Value::as_str).unwrap_or("");
        tracing::warn!(tag, "unknown actor type; leaving record untouched");
        return Ok(DerivedStats::Unchanged);
    };

    let snapshot = parse_snapshot(record)?;
    let derived = DerivedStats::compute(&snapshot);
    merge_derived(record, &derived)?;
    tracing::debug!(kind = %kind, "prepared derived data");
    Ok(derived)
}

/// Write a computation result back into the record's host layout.
fn merge_derived(record: &mut Value, derived: &DerivedStats) -> Result<(), RecordError> {
    match derived {
        DerivedStats::Pc {
            skills,
            encumbrance,
        } => {
            if let Some(entries) = record.get_mut("skills").and_then(Value::as_object_mut) {
                merge_skill_values(entries, skills);
            }
            let block = serde_json::to_value(encumbrance)
                .map_err(|e| RecordError::Serialization(e.to_string()))?;
            record["encumbrance"] = block;
        }
        DerivedStats::Npc { xp } => {
            record["xp"] = json!(xp);
        }
        DerivedStats::Unchanged => {}
    }
    Ok(())
}

fn merge_skill_values(entries: &mut Map<String, Value>, skills: &SkillValues) {
    for (name, entry) in entries.iter_mut() {
        let Ok(kind) = name.parse::<SkillKind>() else {
            continue;
        };
        entry["value"] = json!(skills.get(kind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pc_record() -> Value {
        json!({
            "type": "PC",
            "attributes": {
                "Strength": { "value": 5 },
                "Endurance": { "value": 4 },
                "Agility": { "value": 3 },
                "Perception": { "value": 2 },
                "Intelligence": { "value": 1 },
                "Charisma": { "value": 1 },
                "Luck": { "value": 1 },
            },
            "skills": {
                "Big Guns": { "value": 0, "increases": 0 },
                "Melee": { "value": 0, "increases": 0 },
                "Folk Dancing": { "value": 12, "increases": 4 },
            },
            "items": [
                { "type": "weapon", "encumbrance": 3 },
                { "type": "perk", "encumbrance": 9 },
            ],
            "encumbrance": { "max": 0, "value": 0 },
        })
    }

    #[test]
    fn pc_preparation_writes_skills_and_encumbrance() {
        let mut record = pc_record();
        prepare_actor(&mut record).unwrap();

        // Big Guns: 10 + 10*AGI + 10*PER + Luck = 10 + 30 + 20 + 1
        assert_eq!(record["skills"]["Big Guns"]["value"], json!(61));
        // Melee: 20 + 10*STR + 10*AGI + Luck = 20 + 50 + 30 + 1
        assert_eq!(record["skills"]["Melee"]["value"], json!(101));
        // increases inputs are preserved on the sheet
        assert_eq!(record["skills"]["Big Guns"]["increases"], json!(0));

        assert_eq!(record["encumbrance"], json!({ "max": 9, "value": 3 }));
    }

    #[test]
    fn unknown_skill_keys_are_left_untouched() {
        let mut record = pc_record();
        prepare_actor(&mut record).unwrap();
        assert_eq!(
            record["skills"]["Folk Dancing"],
            json!({ "value": 12, "increases": 4 })
        );
    }

    #[test]
    fn increases_have_no_effect_on_prepared_output() {
        let mut plain = pc_record();
        let mut invested = pc_record();
        invested["skills"]["Big Guns"]["increases"] = json!(100);

        prepare_actor(&mut plain).unwrap();
        prepare_actor(&mut invested).unwrap();

        assert_eq!(
            plain["skills"]["Big Guns"]["value"],
            invested["skills"]["Big Guns"]["value"]
        );
    }

    #[test]
    fn npc_preparation_writes_experience() {
        let mut record = json!({ "type": "npc", "cr": 3 });
        let derived = prepare_actor(&mut record).unwrap();
        assert_eq!(derived, DerivedStats::Npc { xp: 900 });
        assert_eq!(record["xp"], json!(900));
    }

    #[test]
    fn unrecognized_type_is_an_identity_pass() {
        let mut record = json!({
            "type": "monster",
            "attributes": { "Strength": { "value": 5 } },
            "skills": { "Big Guns": { "value": 7 } },
        });
        let before = record.clone();
        let derived = prepare_actor(&mut record).unwrap();
        assert_eq!(derived, DerivedStats::Unchanged);
        assert_eq!(record, before);
    }

    #[test]
    fn character_records_are_not_modified() {
        let mut record = json!({
            "type": "character",
            "abilities": { "str": { "mod": 2 } },
            "skills": { "Melee": { "value": 5, "increases": 0 } },
        });
        let before = record.clone();
        prepare_actor(&mut record).unwrap();
        assert_eq!(record, before);
    }

    #[test]
    fn malformed_pc_record_is_rejected_before_any_write() {
        let mut record = json!({
            "type": "PC",
            "skills": { "Big Guns": { "value": 7, "increases": 0 } },
        });
        let before = record.clone();
        assert!(matches!(
            prepare_actor(&mut record),
            Err(RecordError::MissingAttributes)
        ));
        assert_eq!(record, before);
    }
}
