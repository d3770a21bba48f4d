//! [`RequestSpec`] + [`StatsRegistry`] -> [`ResolvedStats`].
//!
//! Per-stat failures are folded into the result list as [`Outcome::Error`]
//! carrying the failure's description, so one bad name never aborts the
//! request and every output format sees the same text.

use serde::Serialize;

use crate::registry::StatsRegistry;
use crate::request::RequestSpec;

/// Result of resolving one stat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Value(i64),
    Error(String),
}

impl Outcome {
    pub fn value(&self) -> Option<i64> {
        match self {
            Outcome::Value(v) => Some(*v),
            Outcome::Error(_) => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Value(v) => write!(f, "{v}"),
            Outcome::Error(e) => f.write_str(e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatResult {
    pub name: String,
    pub outcome: Outcome,
}

impl StatResult {
    pub fn value(name: impl Into<String>, v: i64) -> Self {
        Self {
            name: name.into(),
            outcome: Outcome::Value(v),
        }
    }

    pub fn error(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: Outcome::Error(description.into()),
        }
    }
}

/// Ordered results handed to the formatter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedStats(Vec<StatResult>);

impl ResolvedStats {
    pub fn new(results: Vec<StatResult>) -> Self {
        Self(results)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StatResult> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries that resolved to a value.
    pub fn value_count(&self) -> usize {
        self.0.iter().filter(|r| r.outcome.value().is_some()).count()
    }
}

impl<'a> IntoIterator for &'a ResolvedStats {
    type Item = &'a StatResult;
    type IntoIter = std::slice::Iter<'a, StatResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Read every requested stat from the registry. Pure read, no retries.
pub fn resolve(spec: &RequestSpec, registry: &dyn StatsRegistry) -> ResolvedStats {
    if spec.wants_all() {
        let all = registry
            .read_all()
            .into_iter()
            .map(|(name, v)| StatResult::value(name, v))
            .collect();
        return ResolvedStats(all);
    }

    let results = spec
        .requested_names
        .iter()
        .map(|name| match registry.read_one(name) {
            Ok(v) => StatResult::value(name.as_str(), v),
            Err(e) => {
                tracing::debug!(stat = %name, error = %e, "stat resolution failed");
                StatResult::error(name.as_str(), e.to_string())
            }
        })
        .collect();
    ResolvedStats(results)
}
