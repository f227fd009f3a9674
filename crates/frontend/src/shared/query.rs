//! Query string access

use serde::de::DeserializeOwned;
use web_sys::window;

/// Raw `?...` part of the current URL, empty outside the browser
pub fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Parse a query string (with or without the leading `?`) into `T`.
///
/// Only the first occurrence of each plain key is kept, and bracketed keys
/// (`a[b]=..`) are ignored. Input that still fails to parse yields
/// `T::default()`, the same as an empty query.
pub fn parse_query<T>(search: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let flat = first_values(search.trim_start_matches('?'));
    match serde_qs::from_str(&flat) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("unparsable query string {:?}: {}", search, e);
            T::default()
        }
    }
}

fn first_values(query: &str) -> String {
    let mut seen: Vec<&str> = Vec::new();
    let mut pairs: Vec<&str> = Vec::new();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let key = pair.split_once('=').map_or(pair, |(k, _)| k);
        if key.is_empty() || key.contains('[') || key.contains("%5B") || key.contains("%5b") {
            continue;
        }
        if !seen.contains(&key) {
            seen.push(key);
            pairs.push(pair);
        }
    }
    pairs.join("&")
}
