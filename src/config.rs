//! Widget Configuration
//!
//! Read once from `data-*` attributes on `<body>`; anything missing or
//! malformed keeps its default.

use std::str::FromStr;

pub const DEFAULT_DEBOUNCE_MS: u32 = 300;
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;
pub const DEFAULT_HIGHLIGHT_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    /// Prefix for endpoint paths, e.g. "" or "https://host/api"
    pub api_base: String,
    pub debounce_ms: u32,
    pub min_query_len: usize,
    pub highlight_ms: u32,
    /// Warehouse column written on export
    pub warehouse: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            highlight_ms: DEFAULT_HIGHLIGHT_MS,
            warehouse: String::new(),
        }
    }
}

impl WidgetConfig {
    /// Build from an attribute lookup (attribute name without `data-`).
    /// Returns the config and a warning per value that could not be parsed.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut warnings = Vec::new();

        let debounce_ms = parse_or(&lookup, "debounce-ms", defaults.debounce_ms, &mut warnings);
        let highlight_ms = parse_or(&lookup, "highlight-ms", defaults.highlight_ms, &mut warnings);
        let min_query_len = parse_or(&lookup, "min-query", defaults.min_query_len, &mut warnings);

        let config = Self {
            api_base: lookup("api-base")
                .map(|s| s.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            debounce_ms,
            min_query_len,
            highlight_ms,
            warehouse: lookup("warehouse").map(|s| s.trim().to_string()).unwrap_or(defaults.warehouse),
        };
        (config, warnings)
    }

    /// Read from the current document's `<body>`
    pub fn from_document() -> Self {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());

        let (config, warnings) = Self::from_lookup(|key| {
            body.as_ref().and_then(|b| b.get_attribute(&format!("data-{}", key)))
        });
        for warning in &warnings {
            web_sys::console::warn_1(&format!("[CONFIG] {}", warning).into());
        }
        config
    }

    /// Full URL for an endpoint path such as "/search"
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// Length counted in UTF-16 units, as the browser reports it
    pub fn is_searchable(&self, query: &str) -> bool {
        query.encode_utf16().count() >= self.min_query_len
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T, warnings: &mut Vec<String>) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warnings.push(format!("data-{}={:?} is not a number, using default", key, raw));
            default
        }),
        None => default,
    }
}
