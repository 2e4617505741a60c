//! Wire types for the `/recommend` endpoint.
//!
//! Bodies are read leniently: the widget renders whatever the server sends and
//! never rejects a response for having an unexpected shape.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque movie identifier, echoed back exactly as the server sent it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub Value);

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            Value::Null => f.write_str("undefined"),
            other => write!(f, "{other}"),
        }
    }
}

/// One ranked recommendation as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    #[serde(rename = "movieId", default)]
    pub movie_id: MovieId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    /// Dissimilarity, lower is better. Not bounded to [0, 1].
    #[serde(default = "nan", deserialize_with = "lenient_number")]
    pub distance: f64,
}

impl ScoredItem {
    pub fn new(movie_id: impl Into<Value>, title: impl Into<String>, distance: f64) -> Self {
        Self {
            movie_id: MovieId(movie_id.into()),
            title: title.into(),
            distance,
        }
    }
}

/// A successful response body. `results` is `None` when the field is absent
/// or is not an array.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecommendResponse {
    pub query: Option<String>,
    pub results: Option<Vec<ScoredItem>>,
}

impl RecommendResponse {
    /// Extract whatever is usable from an arbitrary JSON body. Array elements
    /// that are not objects are skipped.
    pub fn from_value(body: &Value) -> Self {
        let query = body.get("query").and_then(Value::as_str).map(str::to_string);
        let results = body.get("results").and_then(Value::as_array).map(|items| {
            items
                .iter()
                .filter_map(|item| ScoredItem::deserialize(item).ok())
                .collect()
        });
        Self { query, results }
    }

    pub fn len(&self) -> usize {
        self.results.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Error body sent with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<Value>,
}

fn nan() -> f64 {
    f64::NAN
}

fn lenient_string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_number<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_well_formed_body() {
        let body = json!({
            "query": "Avatar",
            "results": [
                {"movieId": 72998, "title": "Avatar (2009)", "distance": 0.12},
                {"movieId": "tt0499549", "title": "Up (2009)", "distance": 0.4},
            ]
        });
        let resp = RecommendResponse::from_value(&body);
        assert_eq!(resp.query.as_deref(), Some("Avatar"));
        let items = resp.results.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].movie_id.to_string(), "72998");
        assert_eq!(items[1].movie_id.to_string(), "tt0499549");
        assert_eq!(items[1].distance, 0.4);
    }

    #[test]
    fn missing_results_is_none() {
        let resp = RecommendResponse::from_value(&json!({"ok": true}));
        assert!(resp.results.is_none());
        assert!(resp.is_empty());

        let resp = RecommendResponse::from_value(&json!({"results": "nope"}));
        assert!(resp.results.is_none());
    }

    #[test]
    fn odd_fields_are_tolerated() {
        let body = json!({"results": [
            {"title": 42, "distance": "0.25"},
            {"movieId": 1},
            7,
        ]});
        let items = RecommendResponse::from_value(&body).results.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "42");
        assert_eq!(items[0].distance, 0.25);
        assert_eq!(items[0].movie_id.to_string(), "undefined");
        assert_eq!(items[1].title, "");
        assert!(items[1].distance.is_nan());
    }
}
