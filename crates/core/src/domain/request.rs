use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Body accepted by every POST route.
///
/// `filters` may be missing or `null`; both mean "no filters".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub filters: Filters,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    /// Scalars (numbers, booleans) are kept as their JSON text.
    #[serde(
        default,
        deserialize_with = "scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub concept: Option<String>,
    /// Everything else the client sends; accepted and ignored.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Filters {
    /// The requested concept exactly as sent, unless it is empty.
    pub fn concept(&self) -> Option<&str> {
        self.concept.as_deref().filter(|c| !c.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(D::Error::custom(format!(
            "concept must be a string, number or boolean (got {other})"
        ))),
    }
}
