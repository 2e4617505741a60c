//! Widget configuration: defaults merged with a TOML table.
//!
//! Bad input never fails startup. Unparseable files, unknown keys and values
//! of the wrong type are logged and the defaults stay in place.

use std::path::Path;
use tracing::{debug, warn};

const KNOWN_CONFIG_KEYS: &[&str] = &[
    "api_root",
    "result_count",
    "share_count",
    "debounce_ms",
    "min_query_len",
    "toast_ms",
    "chips",
    "theme_toggle",
    "copy_link",
    "clear_button",
    "page_url",
];

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub api_root: String,
    /// `n` sent with every search, also the skeleton row count.
    pub result_count: u32,
    pub share_count: u32,
    pub debounce_ms: u64,
    pub min_query_len: usize,
    pub toast_ms: u64,
    /// Quick-search suggestions. Empty hides the chip row.
    pub chips: Vec<String>,
    pub theme_toggle: bool,
    pub copy_link: bool,
    pub clear_button: bool,
    /// Page location used where there is no address bar.
    pub page_url: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_root: "/api".to_string(),
            result_count: 10,
            share_count: crate::share::DEFAULT_SHARE_COUNT,
            debounce_ms: 450,
            min_query_len: 3,
            toast_ms: 2200,
            chips: ["Toy Story", "The Matrix", "Inception", "Pulp Fiction", "Amélie"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            theme_toggle: true,
            copy_link: true,
            clear_button: true,
            page_url: "http://localhost:5000/".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Defaults overridden by the keys present in `content`.
    pub fn from_toml_str(content: &str) -> Self {
        let mut config = Self::default();
        let table = match content.parse::<toml::Table>() {
            Ok(t) => t,
            Err(e) => {
                warn!(error = %e, "Failed to parse widget config, using defaults");
                return config;
            }
        };

        for key in table.keys() {
            if !KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
                match KNOWN_CONFIG_KEYS.iter().min_by_key(|k| edit_distance(key, k)) {
                    Some(suggestion) if edit_distance(key, suggestion) <= 3 => warn!(
                        key = key.as_str(),
                        suggestion = *suggestion,
                        "Unknown key in widget config, did you mean '{suggestion}'?"
                    ),
                    _ => warn!(
                        key = key.as_str(),
                        "Unknown key in widget config (known keys: {})",
                        KNOWN_CONFIG_KEYS.join(", ")
                    ),
                }
            }
        }

        if let Some(v) = string_key(&table, "api_root") {
            config.api_root = v;
        }
        if let Some(v) = int_key(&table, "result_count") {
            config.result_count = v as u32;
        }
        if let Some(v) = int_key(&table, "share_count") {
            config.share_count = v as u32;
        }
        if let Some(v) = int_key(&table, "debounce_ms") {
            config.debounce_ms = v as u64;
        }
        if let Some(v) = int_key(&table, "min_query_len") {
            config.min_query_len = v as usize;
        }
        if let Some(v) = int_key(&table, "toast_ms") {
            config.toast_ms = v as u64;
        }
        if let Some(v) = table.get("chips") {
            match v.as_array() {
                Some(items) => {
                    config.chips = items
                        .iter()
                        .filter_map(|c| c.as_str().map(|s| s.trim().to_string()))
                        .filter(|s| !s.is_empty())
                        .collect();
                }
                None => warn!(key = "chips", "Expected an array of strings"),
            }
        }
        if let Some(v) = bool_key(&table, "theme_toggle") {
            config.theme_toggle = v;
        }
        if let Some(v) = bool_key(&table, "copy_link") {
            config.copy_link = v;
        }
        if let Some(v) = bool_key(&table, "clear_button") {
            config.clear_button = v;
        }
        if let Some(v) = string_key(&table, "page_url") {
            config.page_url = v;
        }

        config
    }
}

/// Load a config file, falling back to defaults when it is missing or unreadable.
pub fn load_widget_config(path: &Path) -> WidgetConfig {
    if !path.exists() {
        debug!(path = %path.display(), "No widget config, using defaults");
        return WidgetConfig::default();
    }
    match std::fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), "Loading widget config");
            WidgetConfig::from_toml_str(&content)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read widget config");
            WidgetConfig::default()
        }
    }
}

fn string_key(table: &toml::Table, key: &str) -> Option<String> {
    let v = table.get(key)?;
    match v.as_str() {
        Some(s) => Some(s.to_string()),
        None => {
            warn!(key, "Expected a string");
            None
        }
    }
}

fn int_key(table: &toml::Table, key: &str) -> Option<i64> {
    let v = table.get(key)?;
    match v.as_integer() {
        Some(n) if n > 0 => Some(n),
        _ => {
            warn!(key, "Expected a positive integer");
            None
        }
    }
}

fn bool_key(table: &toml::Table, key: &str) -> Option<bool> {
    let v = table.get(key)?;
    match v.as_bool() {
        Some(b) => Some(b),
        None => {
            warn!(key, "Expected a boolean");
            None
        }
    }
}

/// Levenshtein distance for typo suggestions on config keys.
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for i in 0..a.len() {
        curr[0] = i + 1;
        for j in 0..b.len() {
            let cost = if a[i] == b[j] { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_keeps_defaults() {
        assert_eq!(WidgetConfig::from_toml_str(""), WidgetConfig::default());
    }

    #[test]
    fn overrides_known_keys() {
        let config = WidgetConfig::from_toml_str(
            r#"
            api_root = "http://backend:5000/api"
            result_count = 6
            debounce_ms = 300
            chips = ["Heat", "  ", "Alien"]
            theme_toggle = false
            "#,
        );
        assert_eq!(config.api_root, "http://backend:5000/api");
        assert_eq!(config.result_count, 6);
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.chips, vec!["Heat", "Alien"]);
        assert!(!config.theme_toggle);
        assert!(config.copy_link);
        assert_eq!(config.toast_ms, 2200);
    }

    #[test]
    fn bad_values_are_ignored() {
        let config = WidgetConfig::from_toml_str(
            r#"
            result_count = -4
            toast_ms = "soon"
            chips = "Heat"
            resutl_count = 3
            "#,
        );
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn unparseable_file_uses_defaults() {
        assert_eq!(WidgetConfig::from_toml_str("result_count = ["), WidgetConfig::default());
    }

    #[test]
    fn edit_distance_basics() {
        assert_eq!(edit_distance("resutl_count", "result_count"), 2);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("same", "same"), 0);
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flickfind.toml");
        std::fs::write(&path, "share_count = 12\ncopy_link = false\n").unwrap();
        let config = load_widget_config(&path);
        assert_eq!(config.share_count, 12);
        assert!(!config.copy_link);

        let missing = load_widget_config(&dir.path().join("absent.toml"));
        assert_eq!(missing, WidgetConfig::default());
    }
}
