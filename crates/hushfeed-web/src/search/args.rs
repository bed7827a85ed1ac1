//! Parsed request query parameters.

use url::form_urlencoded;

/// The request's query string, decoded once into ordered pairs.
///
/// Blank values (`?t=`) are dropped at parse time, so `get` never returns an
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryArgs {
    pairs: Vec<(String, String)>,
}

impl QueryArgs {
    /// Parse a raw (still percent-encoded) query string.
    pub fn parse(raw: Option<&str>) -> Self {
        let pairs = raw
            .map(|qs| {
                form_urlencoded::parse(qs.as_bytes())
                    .filter(|(_, v)| !v.is_empty())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .unwrap_or_default();
        Self { pairs }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy without any `key` pairs.
    pub fn without(&self, key: &str) -> Self {
        Self {
            pairs: self.pairs.iter().filter(|(k, _)| k != key).cloned().collect(),
        }
    }

    /// Re-encode with every `key` replaced by a single `key=value`, or
    /// removed when `value` is `None`. Other pairs keep their order.
    pub fn encode_with(&self, key: &str, value: Option<&str>) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in self.iter().filter(|(k, _)| *k != key) {
            serializer.append_pair(k, v);
        }
        if let Some(value) = value {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}
