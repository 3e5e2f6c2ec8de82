//! Caller-supplied list filters and query-string building.

use std::collections::BTreeMap;

use crate::error::{CfError, Result};

/// Filter keys and values passed through to a list endpoint.
pub type QueryParams = BTreeMap<String, String>;

/// Reject any key outside `allowed` before a request is built.
pub(crate) fn validate_query(params: &QueryParams, allowed: &[&str]) -> Result<()> {
    if let Some(key) = params.keys().find(|k| !allowed.contains(&k.as_str())) {
        return Err(CfError::invalid_parameter(
            key.clone(),
            format!("not an accepted filter key (accepted: {})", allowed.join(", ")),
        ));
    }
    Ok(())
}

/// Ordered, url-encoded query string builder.
#[derive(Debug, Default, Clone)]
pub(crate) struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn push(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    #[must_use]
    pub fn push_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    #[must_use]
    pub fn extend(mut self, params: &QueryParams) -> Self {
        self.pairs
            .extend(params.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// `path` with the query appended, or `path` alone when empty.
    pub fn finish(self, path: &str) -> String {
        if self.pairs.is_empty() {
            return path.to_string();
        }
        let query = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{path}?{query}")
    }
}
