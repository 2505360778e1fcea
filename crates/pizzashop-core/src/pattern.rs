//! Route path patterns with `:param` segments.
//!
//! A pattern such as `/updatePizza/:pizzaName` compiles into an anchored
//! regular expression. Matching follows the usual client-router defaults:
//!
//! - static segments compare case-insensitively
//! - a single trailing slash is optional
//! - each parameter captures exactly one non-empty segment
//! - captured values are percent-decoded

use std::borrow::Cow;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use regex::Regex;

use crate::error::RouteError;

/// Characters escaped when a parameter value is written into a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Strip the query string and fragment from a URL path.
///
/// An empty remainder is treated as the root path.
pub fn path_of(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let path = &url[..end];
    if path.is_empty() { "/" } else { path }
}

// ============================================================================
// Params
// ============================================================================

/// Path parameters extracted from a URL, in pattern order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a parameter, replacing any previous value under the same name.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

// ============================================================================
// PathPattern
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A compiled route path pattern.
#[derive(Clone, Debug)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
    regex: Regex,
}

impl PathPattern {
    /// Compile a pattern like `/updatePizza/:pizzaName`.
    pub fn parse(source: &str) -> Result<Self, RouteError> {
        let invalid = |reason: &str| RouteError::InvalidPattern {
            pattern: source.to_string(),
            reason: reason.to_string(),
        };

        if !source.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }

        let trimmed = source.strip_suffix('/').unwrap_or(source);
        let mut segments = Vec::new();
        let mut expr = String::from("(?i)^");

        for raw in trimmed.split('/').skip(1) {
            if raw.is_empty() {
                return Err(invalid("empty path segment"));
            }
            expr.push('/');

            if let Some(name) = raw.strip_prefix(':') {
                if !is_valid_param_name(name) {
                    return Err(invalid("parameter name must be alphanumeric"));
                }
                if segments.contains(&Segment::Param(name.to_string())) {
                    return Err(RouteError::DuplicateParam {
                        pattern: source.to_string(),
                        param: name.to_string(),
                    });
                }
                expr.push_str("([^/]+)");
                segments.push(Segment::Param(name.to_string()));
            } else {
                expr.push_str(&regex::escape(raw));
                segments.push(Segment::Static(raw.to_string()));
            }
        }
        expr.push_str("/?$");

        let regex = Regex::new(&expr).map_err(|e| invalid(&e.to_string()))?;

        Ok(Self {
            source: source.to_string(),
            segments,
            regex,
        })
    }

    /// Parameter names in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Match a path (no query or fragment) and extract its parameters.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let captures = self.regex.captures(path)?;
        let params = self
            .param_names()
            .zip(captures.iter().skip(1))
            .filter_map(|(name, value)| {
                let raw = value?.as_str();
                // Undecodable values keep their raw form.
                let decoded = percent_decode_str(raw)
                    .decode_utf8()
                    .map(Cow::into_owned)
                    .unwrap_or_else(|_| raw.to_string());
                Some((name.to_string(), decoded))
            })
            .collect();
        Some(params)
    }

    /// Build a concrete path, percent-encoding parameter values.
    pub fn build(&self, params: &Params) -> Result<String, RouteError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Static(text) => path.push_str(text),
                Segment::Param(name) => {
                    let value = params
                        .get(name)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| RouteError::MissingParam {
                            pattern: self.source.clone(),
                            param: name.clone(),
                        })?;
                    path.extend(utf8_percent_encode(value, SEGMENT));
                }
            }
        }
        Ok(path)
    }
}

fn is_valid_param_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
