//! Named `i64` gauges backed by `DashMap`.
//!
//! A stat must be registered before it can be updated or read. Reads of every
//! stat are returned sorted by name so output stays deterministic.

use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use webstats_core::error::{Result, StatsError};
use webstats_core::StatsRegistry;

#[derive(Default)]
pub struct StatsStore {
    map: DashMap<String, AtomicI64>,
}

impl StatsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stat starting at 0. Registering twice keeps the value.
    pub fn register(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(StatsError::BadConfig("stat name must not be empty".into()));
        }
        self.map
            .entry(name.to_string())
            .or_insert_with(|| AtomicI64::new(0));
        Ok(())
    }

    /// Overwrite the current value.
    pub fn set(&self, name: &str, v: i64) -> Result<()> {
        let stat = self
            .map
            .get(name)
            .ok_or_else(|| StatsError::StatNotFound(name.to_string()))?;
        stat.store(v, Ordering::Relaxed);
        Ok(())
    }

    /// Add a signed delta.
    pub fn add(&self, name: &str, delta: i64) -> Result<()> {
        let stat = self
            .map
            .get(name)
            .ok_or_else(|| StatsError::StatNotFound(name.to_string()))?;
        stat.fetch_add(delta, Ordering::Relaxed);
        Ok(())
    }

    /// Increment by 1.
    pub fn inc(&self, name: &str) -> Result<()> {
        self.add(name, 1)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl StatsRegistry for StatsStore {
    fn read_all(&self) -> Vec<(String, i64)> {
        let mut all: Vec<(String, i64)> = self
            .map
            .iter()
            .map(|r| (r.key().clone(), r.value().load(Ordering::Relaxed)))
            .collect();
        all.sort();
        all
    }

    fn read_one(&self, name: &str) -> Result<i64> {
        self.map
            .get(name)
            .map(|v| v.load(Ordering::Relaxed))
            .ok_or_else(|| StatsError::StatNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_starts_at_zero_and_is_idempotent() {
        let s = StatsStore::new();
        s.register("a").unwrap();
        s.add("a", 5).unwrap();
        s.register("a").unwrap();
        assert_eq!(s.read_one("a").unwrap(), 5);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(StatsStore::new().register("").is_err());
    }

    #[test]
    fn updates_need_registration() {
        let s = StatsStore::new();
        assert_eq!(s.inc("x"), Err(StatsError::StatNotFound("x".into())));
        assert_eq!(s.set("x", 1), Err(StatsError::StatNotFound("x".into())));
    }

    #[test]
    fn set_and_add_signed() {
        let s = StatsStore::new();
        s.register("g").unwrap();
        s.set("g", 10).unwrap();
        s.add("g", -15).unwrap();
        assert_eq!(s.read_one("g").unwrap(), -5);
    }

    #[test]
    fn read_all_is_sorted() {
        let s = StatsStore::new();
        for n in ["zeta", "alpha", "mid"] {
            s.register(n).unwrap();
        }
        s.inc("mid").unwrap();
        assert_eq!(
            s.read_all(),
            vec![("alpha".into(), 0), ("mid".into(), 1), ("zeta".into(), 0)]
        );
    }

    #[test]
    fn unknown_read_fails_with_name() {
        let err = StatsStore::new().read_one("nope").unwrap_err();
        assert_eq!(err.to_string(), "stat not found: nope");
    }
}
