//! JWT claim structure carried by bearer tokens.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Identity asserted by every token minted by `/generate-token`.
pub const TOKEN_SUBJECT: &str = "testuser";

/// The `aud` claim, which RFC 7519 allows to be a single string or an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Audience {
    Single(String),
    Many(Vec<String>),
}

impl Audience {
    pub fn contains(&self, audience: &str) -> bool {
        match self {
            Self::Single(aud) => aud == audience,
            Self::Many(auds) => auds.iter().any(|aud| aud == audience),
        }
    }
}

impl Default for Audience {
    fn default() -> Self {
        Self::Single(String::new())
    }
}

/// JWT claims for bearer tokens.
///
/// Every field defaults when absent or of an unexpected JSON type so that, in
/// signature-only mode, a correctly signed token is accepted whatever its
/// payload looks like. Numbers in string claims are kept as their decimal
/// text; fractional timestamps are truncated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject
    #[serde(default, deserialize_with = "lenient_string")]
    pub sub: String,
    /// Display name of the subject
    #[serde(default, deserialize_with = "lenient_string")]
    pub unique_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub iss: String,
    #[serde(default, deserialize_with = "lenient_audience")]
    pub aud: Audience,
    /// Expiration (Unix timestamp)
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub exp: i64,
    /// Not before (Unix timestamp)
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub nbf: i64,
    /// Issued at (Unix timestamp)
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub iat: i64,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_audience<'de, D>(deserializer: D) -> Result<Audience, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Audience::Single(s),
        Value::Array(items) => Audience::Many(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => Audience::default(),
    })
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    })
}
