//! Result of an "expect exactly one" query.

use serde::{Deserialize, Serialize};

/// Three-way outcome of a singleton lookup (zone by name, active certificate, ...).
///
/// `NotFound` is a legitimate answer. `Ambiguous` means the API returned
/// several matches where one was expected; nothing is picked on the caller's
/// behalf, the caller has to escalate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[must_use]
pub enum Lookup<T> {
    Found(T),
    NotFound,
    Ambiguous {
        /// Number of matches returned.
        matches: usize,
    },
}

impl<T> Lookup<T> {
    /// Classify a list of matches.
    pub fn from_matches(mut items: Vec<T>) -> Self {
        if items.len() > 1 {
            return Self::Ambiguous {
                matches: items.len(),
            };
        }
        items.pop().map_or(Self::NotFound, Self::Found)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Lookup<U> {
        match self {
            Self::Found(v) => Lookup::Found(f(v)),
            Self::NotFound => Lookup::NotFound,
            Self::Ambiguous { matches } => Lookup::Ambiguous { matches },
        }
    }

    /// The value, if exactly one match was found.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Lookup<&T> {
        match self {
            Self::Found(v) => Lookup::Found(v),
            Self::NotFound => Lookup::NotFound,
            Self::Ambiguous { matches } => Lookup::Ambiguous { matches: *matches },
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous { .. })
    }
}
