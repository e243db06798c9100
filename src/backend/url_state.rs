use std::fmt;

/// Query parameter that keeps the mobile menu modal open.
pub const MOBILE_MENU: &str = "mobilemenu";
/// Query parameter that keeps the mobile search modal open.
pub const MOBILE_SEARCH: &str = "mobilesearch";

const OPEN: &str = "open";

/// Ordered query string parameters. Keys are unique; setting an existing key
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `search`, with or without the leading `?`. Malformed input
    /// yields no parameters; later duplicates win.
    pub fn parse(search: &str) -> Self {
        let raw = search.strip_prefix('?').unwrap_or(search);
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw).unwrap_or_else(|err| {
            tracing::warn!(%search, "ignoring malformed query string: {}", err);
            Vec::new()
        });
        let mut params = Self::new();
        for (key, value) in pairs {
            params.set(key, value);
        }
        params
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.remove(index).1)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encodes the parameters without a leading `?`.
    pub fn stringify(&self) -> String {
        serde_urlencoded::to_string(&self.0).unwrap_or_default()
    }

    /// `?query`, or an empty string when there is nothing to encode.
    pub fn to_search(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("?{}", self.stringify())
        }
    }

    /// Order-insensitive comparison.
    pub fn same_entries(&self, other: &QueryParams) -> bool {
        self.0.len() == other.0.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}

pub fn with_modal_open(params: &QueryParams, key: &str) -> QueryParams {
    let mut next = params.clone();
    next.set(key, OPEN);
    next
}

pub fn without_modal_open(params: &QueryParams, key: &str) -> QueryParams {
    let mut next = params.clone();
    next.remove(key);
    next
}

pub fn is_modal_open(params: &QueryParams, key: &str) -> bool {
    params.get(key) == Some(OPEN)
}

/// A path plus its raw query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
    pub search: String,
}

impl Location {
    /// Splits a router URL such as `/s?address=x` into path and `?query`.
    /// An empty query (`/s?`) is treated as no query.
    pub fn from_url(url: &str) -> Self {
        let url = url.split('#').next().unwrap_or_default();
        let (pathname, query) = url.split_once('?').unwrap_or((url, ""));
        let pathname = if pathname.is_empty() { "/" } else { pathname };
        Self {
            pathname: pathname.to_string(),
            search: if query.is_empty() {
                String::new()
            } else {
                format!("?{query}")
            },
        }
    }

    pub fn query(&self) -> QueryParams {
        QueryParams::parse(&self.search)
    }

    pub fn with_query(&self, params: &QueryParams) -> Location {
        Location {
            pathname: self.pathname.clone(),
            search: params.to_search(),
        }
    }

    pub fn with_modal_open(&self, key: &str) -> Location {
        self.with_query(&with_modal_open(&self.query(), key))
    }

    pub fn without_modal_open(&self, key: &str) -> Location {
        self.with_query(&without_modal_open(&self.query(), key))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pathname, self.search)
    }
}
