use serde::Deserialize;
use serde_json::Value;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Opaque movie identifier as handed out by the catalog API.
///
/// The backend currently emits integers, but nothing on this side depends on
/// that: the id is only ever echoed back into request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum MovieId {
    Number(i64),
    Text(String),
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieId::Number(n) => write!(f, "{n}"),
            MovieId::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for MovieId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<i64>() {
            Ok(n) => MovieId::Number(n),
            Err(_) => MovieId::Text(s.to_string()),
        })
    }
}

impl From<i64> for MovieId {
    fn from(n: i64) -> Self {
        MovieId::Number(n)
    }
}

/// Row of the search, catalog and similar-movies endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub year: Option<Scalar>,
    #[serde(default)]
    pub rating: Option<Scalar>,
}

/// The `movie` object of a detail payload. Same shape as a summary, but the
/// id is not needed to render it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MovieRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub year: Option<Scalar>,
    #[serde(default)]
    pub rating: Option<Scalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MovieDetails {
    #[serde(default)]
    pub movie: Option<MovieRecord>,
    #[serde(default)]
    pub actors: Option<Vec<Credit>>,
    #[serde(default)]
    pub directors: Option<Vec<Credit>>,
    #[serde(default)]
    pub genres: Option<Vec<Credit>>,
}

/// Year or rating as sent by the backend. Numbers may arrive as integers,
/// floats or strings, and none of them should fail the whole payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Scalar(pub Value);

impl Scalar {
    /// Display text, or `None` for falsy values (`0`, `""`, `false`).
    pub fn text(&self) -> Option<String> {
        truthy_text(&self.0)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar(Value::from(n))
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar(Value::from(n))
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar(Value::from(s))
    }
}

/// Actor, director or genre attached to a movie. Kept as raw JSON since the
/// backend forwards whole graph nodes and only `name` is displayed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Credit(pub Value);

impl Credit {
    /// The `name` field when it holds something displayable, else the compact
    /// JSON of the whole record.
    pub fn display_name(&self) -> String {
        self.0
            .get("name")
            .and_then(truthy_text)
            .unwrap_or_else(|| self.0.to_string())
    }
}

fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(0), _) => None,
            (Some(i), _) => Some(i.to_string()),
            (None, Some(u)) => Some(u.to_string()),
            // f64 Display drops the fraction of whole numbers: 1979.0 -> "1979"
            _ => n
                .as_f64()
                .filter(|f| *f != 0.0 && !f.is_nan())
                .map(|f| f.to_string()),
        },
        other => Some(other.to_string()),
    }
}
