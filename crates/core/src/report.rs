//! Read-side model of the analysis API's response.
//!
//! The shape is owned by the API, so every field is optional and a field with
//! an unexpected type reads as absent instead of failing the whole report.
//! Lists are read item by item: unreadable elements are dropped, the rest kept.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// What the API returns and what gets stored under the session key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisEnvelope {
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub result: Option<AnalysisReport>,
    #[serde(default, deserialize_with = "lenient")]
    pub processing_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisReport {
    #[serde(default, deserialize_with = "lenient")]
    pub rag_indicator: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub source_cross_check: SourceCrossCheck,
    #[serde(default, deserialize_with = "lenient")]
    pub heuristic: Heuristic,
    #[serde(default, deserialize_with = "lenient")]
    pub technical: Technical,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub red_flags: Vec<String>,
    #[serde(default, deserialize_with = "lenient_opt_vec")]
    pub entities: Option<Vec<Entity>>,
    #[serde(default, deserialize_with = "lenient")]
    pub credibility_score: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub credibility: Credibility,
    #[serde(default, deserialize_with = "lenient")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SourceCrossCheck {
    #[serde(default, deserialize_with = "lenient")]
    pub checked: Option<Value>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub matches: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Heuristic {
    /// `None` when the field is missing; `Some(empty)` when sent empty.
    #[serde(default, deserialize_with = "lenient_opt_vec")]
    pub loaded_terms: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub emotion_density_pct: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub subjectivity_score: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub passive_voice_pct: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Technical {
    #[serde(default, deserialize_with = "lenient")]
    pub method: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub sources_checked: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Credibility {
    #[serde(default, deserialize_with = "lenient")]
    pub score: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Metadata {
    #[serde(default, deserialize_with = "lenient")]
    pub processed_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub domain: Option<String>,
}

/// A named person, place or organisation.
///
/// The API sends `{"name": .., "type": ..}`, a `[name, type]` pair, or just
/// the name as a bare string.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "EntityRepr")]
pub struct Entity {
    pub name: Option<String>,
    pub kind: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EntityRepr {
    Object {
        #[serde(default, deserialize_with = "lenient")]
        name: Option<String>,
        #[serde(default, rename = "type", deserialize_with = "lenient")]
        kind: Option<String>,
    },
    Pair(Vec<Value>),
    Name(String),
}

impl From<EntityRepr> for Entity {
    fn from(repr: EntityRepr) -> Self {
        match repr {
            EntityRepr::Object { name, kind } => Entity { name, kind },
            EntityRepr::Pair(items) => {
                let text = |i: usize| items.get(i).and_then(Value::as_str).map(str::to_string);
                Entity {
                    name: text(0),
                    kind: text(1),
                }
            }
            EntityRepr::Name(name) => Entity { name: Some(name), kind: None },
        }
    }
}

impl Entity {
    /// The API sometimes emits placeholder entities; those are not shown.
    pub fn is_displayable(&self) -> bool {
        match self.name.as_deref().map(str::trim) {
            Some(name) => !name.is_empty() && name != "undefined",
            None => false,
        }
    }
}

impl AnalysisReport {
    pub fn rag(&self) -> Rag {
        Rag::from_indicator(self.rag_indicator.as_deref())
    }

    /// Entities worth listing; empty when the field is missing.
    pub fn displayable_entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities
            .iter()
            .flatten()
            .filter(|e| e.is_displayable())
    }
}

/// Red/amber/green trust classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rag {
    Green,
    #[default]
    Yellow,
    Red,
}

impl Rag {
    /// Unknown or missing indicators read as `Yellow`.
    pub fn from_indicator(indicator: Option<&str>) -> Rag {
        match indicator.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("green") => Rag::Green,
            Some("red") => Rag::Red,
            _ => Rag::Yellow,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Rag::Green => "#299f4a",
            Rag::Yellow => "#f5b100",
            Rag::Red => "#e53e3e",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rag::Green => "High Trust",
            Rag::Yellow => "Medium Trust",
            Rag::Red => "Low Trust",
        }
    }
}

/// Deserializes `T`, or its default if the value has some other shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let v = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(v).unwrap_or_default())
}

/// Keeps the array elements that read as `T`; anything but an array is empty.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(lenient_opt_vec(deserializer)?.unwrap_or_default())
}

/// Like `lenient_vec`, but a non-array (or null) reads as `None`.
fn lenient_opt_vec<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter_map(|v| serde_json::from_value(v).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}
