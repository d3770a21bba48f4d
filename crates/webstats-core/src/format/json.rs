//! Pretty printed JSON array of single-key objects: `[{"name": value}, ...]`.
//!
//! Values keep their type: resolved stats are numbers, failures are strings.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Result, StatsError};
use crate::resolve::{ResolvedStats, StatResult};

struct Entry<'a>(&'a StatResult);

impl Serialize for Entry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.0.name, &self.0.outcome)?;
        map.end()
    }
}

pub fn render(stats: &ResolvedStats) -> Result<String> {
    let entries: Vec<Entry<'_>> = stats.iter().map(Entry).collect();
    serde_json::to_string_pretty(&entries)
        .map_err(|e| StatsError::Internal(format!("json encode failed: {e}")))
}
