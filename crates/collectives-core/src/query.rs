//! Query-string parameters of the navigable location.
//!
//! Parameters keep their original order so a round trip through the router
//! produces the same URL the user saw.

use std::fmt;

/// Ordered `key=value` pairs from a URL query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string, with or without the leading `?`.
    ///
    /// Keys without `=` get an empty value. `+` decodes to a space and
    /// percent escapes are decoded; an invalid escape keeps the raw text.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| match part.split_once('=') {
                Some((key, value)) => (decode(key), decode(value)),
                None => (decode(part), String::new()),
            })
            .collect();
        Self { pairs }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key`, replacing the first occurrence in place and dropping any
    /// duplicates. New keys are appended.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.pairs.iter().position(|(k, _)| *k == key) {
            Some(idx) => {
                self.pairs[idx].1 = value;
                let mut seen = 0;
                self.pairs.retain(|(k, _)| {
                    if *k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push((key, value)),
        }
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterate pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// Renders without the leading `?`.
impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (key, value)) in self.pairs.iter().enumerate() {
            if idx > 0 {
                f.write_str("&")?;
            }
            write!(
                f,
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}

/// Lets router query segments parse straight into [`QueryParams`].
impl From<&str> for QueryParams {
    fn from(query: &str) -> Self {
        Self::parse(query)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.set(key.into(), value.into());
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decodes_plus_and_escapes() {
        let params = QueryParams::parse("?q=open+source&name=caf%C3%A9");
        assert_eq!(params.get("q"), Some("open source"));
        assert_eq!(params.get("name"), Some("café"));
    }

    #[test]
    fn parse_handles_bare_keys_and_empty_parts() {
        let params = QueryParams::parse("flag&&q=");
        assert_eq!(params.get("flag"), Some(""));
        assert_eq!(params.get("q"), Some(""));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn parse_keeps_invalid_escape_verbatim() {
        let params = QueryParams::parse("q=100%");
        assert_eq!(params.get("q"), Some("100%"));
    }

    #[test]
    fn set_replaces_in_place_and_dedupes() {
        let mut params = QueryParams::parse("q=a&offset=0&limit=20&offset=5");
        params.set("offset", 40);
        assert_eq!(params.to_string(), "q=a&offset=40&limit=20");
    }

    #[test]
    fn set_appends_new_key() {
        let params = QueryParams::parse("q=a").with("offset", 20);
        assert_eq!(params.to_string(), "q=a&offset=20");
    }

    #[test]
    fn display_encodes_reserved_characters() {
        let params = QueryParams::new().with("q", "a&b=c d");
        assert_eq!(params.to_string(), "q=a%26b%3Dc%20d");
        assert_eq!(QueryParams::parse(&params.to_string()), params);
    }

    #[test]
    fn from_str_and_iterator() {
        let parsed = QueryParams::from("?q=x&limit=10");
        let built: QueryParams = vec![("q", "x"), ("limit", "10")].into_iter().collect();
        assert_eq!(parsed, built);
    }

    #[test]
    fn empty_query_renders_empty() {
        assert!(QueryParams::parse("").is_empty());
        assert_eq!(QueryParams::new().to_string(), "");
    }
}
