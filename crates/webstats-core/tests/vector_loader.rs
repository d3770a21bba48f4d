//! JSON scenario vector loader shared by pipeline tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::{BTreeMap, HashMap};
use std::fs;

use serde::Deserialize;
use webstats_core::{Environment, MonitorConfig, Result, StatsError, StatsRegistry};

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    pub request: RequestData,
    #[serde(default)]
    pub registry: BTreeMap<String, i64>,
    #[serde(default)]
    pub monitor: MonitorConfig,
    #[serde(default)]
    pub now: u64,
    #[serde(default = "default_hostname")]
    pub hostname: String,
    pub expect: Expect,
}

#[derive(Debug, Deserialize)]
pub struct RequestData {
    pub method: String,
    #[serde(default)]
    pub query: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct Expect {
    pub status: u16,
    /// Body compared as parsed JSON.
    #[serde(default)]
    pub json: Option<serde_json::Value>,
    /// Body compared byte for byte.
    #[serde(default)]
    pub body: Option<String>,
}

fn default_hostname() -> String {
    "localhost".into()
}

pub fn load(name: &str) -> TestVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

/// Registry backed by the vector's `registry` map; reads are counted.
pub struct VectorRegistry {
    stats: BTreeMap<String, i64>,
    pub reads: std::sync::atomic::AtomicUsize,
}

impl VectorRegistry {
    pub fn new(stats: BTreeMap<String, i64>) -> Self {
        Self {
            stats,
            reads: Default::default(),
        }
    }
}

impl StatsRegistry for VectorRegistry {
    fn read_all(&self) -> Vec<(String, i64)> {
        self.reads.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        self.stats.iter().map(|(k, v)| (k.clone(), *v)).collect()
    }

    fn read_one(&self, name: &str) -> Result<i64> {
        self.reads.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        self.stats
            .get(name)
            .copied()
            .ok_or_else(|| StatsError::StatNotFound(name.to_string()))
    }
}

pub struct VectorEnv {
    pub now: u64,
    pub hostname: String,
}

impl Environment for VectorEnv {
    fn now_epoch_secs(&self) -> u64 {
        self.now
    }
    fn hostname(&self) -> String {
        self.hostname.clone()
    }
}
