//! Raw actor record parsing.
//!
//! The host persists actors as JSON documents with the layout
//! `type`, `attributes.<Name>.value`, `skills.<Name>.{value,increases}`,
//! `items[].{type,encumbrance}`, `cr`. This module turns such a record
//! into an [`ActorSnapshot`] for the calculator, rejecting records whose
//! attribute data is missing instead of silently computing from defaults.

use serde_json::{Map, Value};
use sheet_core::{
    ActorKind, ActorSnapshot, AttributeKind, Attributes, CarriedItem, ItemKind, SkillKind,
    SkillSet, SkillState,
};
use thiserror::Error;

/// Errors surfaced while parsing or writing back an actor record.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("actor record is not a JSON object")]
    NotAnObject,

    #[error("actor record has no type tag")]
    MissingType,

    #[error("unrecognized actor type tag: {0:?}")]
    UnknownActorType(String),

    #[error("actor record has no attribute block")]
    MissingAttributes,

    #[error("attribute {0} is missing from the actor record")]
    MissingAttribute(AttributeKind),

    #[error("expected a numeric value at {path}")]
    NonNumeric { path: String },

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Normalized actor kind of a record, if its type tag is recognized.
///
/// Unknown tags (and records without a tag) return `None`; the caller is
/// expected to leave such records untouched.
pub fn actor_kind(record: &Value) -> Option<ActorKind> {
    record
        .get("type")
        .and_then(Value::as_str)
        .and_then(|tag| tag.parse().ok())
}

/// Parse a host actor record into a calculator snapshot.
///
/// Attribute data is required for player characters; NPC and character
/// records may omit the block entirely (nothing derived for them reads
/// it), but a present block must be complete and numeric.
pub fn parse_snapshot(record: &Value) -> Result<ActorSnapshot, RecordError> {
    let fields = record.as_object().ok_or(RecordError::NotAnObject)?;
    let tag = fields
        .get("type")
        .and_then(Value::as_str)
        .ok_or(RecordError::MissingType)?;
    let kind: ActorKind = tag
        .parse()
        .map_err(|_| RecordError::UnknownActorType(tag.to_owned()))?;

    let attributes = match fields.get("attributes").and_then(Value::as_object) {
        Some(block) => parse_attributes(block)?,
        None if kind == ActorKind::Pc => return Err(RecordError::MissingAttributes),
        None => Attributes::default(),
    };

    let skills = match fields.get("skills").and_then(Value::as_object) {
        Some(block) => parse_skills(block)?,
        None => SkillSet::default(),
    };

    let items = match fields.get("items").and_then(Value::as_array) {
        Some(entries) => parse_items(entries)?,
        None => Vec::new(),
    };

    let challenge = match fields.get("cr") {
        Some(value) => read_int(value, "cr")?,
        None => 0,
    };

    Ok(ActorSnapshot::new(kind, attributes)
        .with_skills(skills)
        .with_items(items)
        .with_challenge(challenge))
}

fn parse_attributes(block: &Map<String, Value>) -> Result<Attributes, RecordError> {
    let mut attributes = Attributes::default();
    for kind in AttributeKind::all() {
        let entry = block
            .get(kind.as_ref())
            .ok_or(RecordError::MissingAttribute(kind))?;
        let value = entry
            .get("value")
            .ok_or(RecordError::MissingAttribute(kind))?;
        attributes.set(kind, read_int(value, &format!("attributes.{kind}.value"))?);
    }
    Ok(attributes)
}

fn parse_skills(block: &Map<String, Value>) -> Result<SkillSet, RecordError> {
    let mut skills = SkillSet::default();
    // Keys outside the fixed skill set are the host's business; only known
    // names are read.
    for kind in SkillKind::all() {
        let Some(entry) = block.get(kind.as_ref()) else {
            continue;
        };
        let mut state = SkillState::default();
        if let Some(value) = entry.get("value") {
            state.value = read_int(value, &format!("skills.{kind}.value"))?;
        }
        if let Some(increases) = entry.get("increases") {
            state.increases = read_int(increases, &format!("skills.{kind}.increases"))?;
        }
        skills.set(kind, state);
    }
    Ok(skills)
}

fn parse_items(entries: &[Value]) -> Result<Vec<CarriedItem>, RecordError> {
    let mut items = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let kind = entry
            .get("type")
            .and_then(Value::as_str)
            .map(ItemKind::from_tag)
            .unwrap_or_default();
        let encumbrance = match entry.get("encumbrance") {
            Some(value) => Some(read_int(value, &format!("items[{index}].encumbrance"))?),
            None => None,
        };
        items.push(CarriedItem::new(kind, encumbrance));
    }
    Ok(items)
}

/// Read an integer from a JSON number.
///
/// The host stores integers for every field this engine reads; real-valued
/// inputs are truncated toward zero rather than rejected.
fn read_int(value: &Value, path: &str) -> Result<i32, RecordError> {
    if let Some(int) = value.as_i64() {
        Ok(int as i32)
    } else if let Some(float) = value.as_f64() {
        Ok(float as i32)
    } else {
        Err(RecordError::NonNumeric {
            path: path.to_owned(),
        })
    }
}
