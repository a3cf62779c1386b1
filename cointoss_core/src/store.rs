//! Key-value persistence for statistics.
//!
//! The backend stores raw strings. [`StatsStore`] owns the JSON encoding
//! and the tolerant decoding rules: an absent key, unparseable JSON, or a
//! missing/falsy field all read as zero.

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::Value;

use crate::error::StoreError;
use crate::stats::Statistics;

/// Key under which statistics are kept.
pub const STATS_KEY: &str = "coinFlipStats";

pub trait KeyValueStore {
    /// Read a value by key. `None` if absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value under key.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store, for tests and sessions that need no persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for &K {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<K> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Statistics record on top of a raw key-value backend.
#[derive(Debug)]
pub struct StatsStore<K> {
    backend: K,
}

impl<K: KeyValueStore> StatsStore<K> {
    pub fn new(backend: K) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    pub fn load(&self) -> Statistics {
        match self.backend.get(STATS_KEY) {
            Some(raw) => decode_stats(&raw),
            None => {
                log::info!("no saved statistics, starting fresh");
                Statistics::default()
            }
        }
    }

    pub fn save(&self, stats: &Statistics) -> Result<(), StoreError> {
        let json = serde_json::to_string(stats)?;
        self.backend.set(STATS_KEY, &json)
    }
}

/// Decode a stored record, substituting zero for anything unusable.
///
/// The total is rebuilt from the two counters so a hand-edited or stale
/// entry cannot break `total == heads + tails`.
pub fn decode_stats(raw: &str) -> Statistics {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("discarding unreadable statistics: {err}");
            return Statistics::default();
        }
    };
    let heads = count_field(&value, "headsCount");
    let tails = count_field(&value, "tailsCount");
    let Some(stats) = Statistics::try_new(heads, tails) else {
        log::warn!("discarding statistics with overflowing counters");
        return Statistics::default();
    };
    if count_field(&value, "totalCount") != stats.total_count() {
        log::warn!(
            "stored total disagrees with counters, using {}",
            stats.total_count()
        );
    }
    stats
}

fn count_field(value: &Value, name: &str) -> u64 {
    match value.get(name) {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::FlipOutcome;

    #[test]
    fn missing_key_loads_zero() {
        let store = StatsStore::new(MemoryStore::new());
        assert_eq!(store.load(), Statistics::default());
    }

    #[test]
    fn round_trip() {
        let store = StatsStore::new(MemoryStore::new());
        let mut stats = Statistics::new(4, 9);
        stats.record(FlipOutcome::Heads);
        store.save(&stats).unwrap();
        assert_eq!(store.load(), stats);
    }

    #[test]
    fn corrupt_json_loads_zero() {
        let store = StatsStore::new(MemoryStore::with_entry(STATS_KEY, "{not json"));
        assert_eq!(store.load(), Statistics::default());
    }

    #[test]
    fn non_object_loads_zero() {
        assert_eq!(decode_stats("null"), Statistics::default());
        assert_eq!(decode_stats("[1,2,3]"), Statistics::default());
    }

    #[test]
    fn falsy_fields_load_zero() {
        let stats = decode_stats(r#"{"headsCount":null,"tailsCount":4,"totalCount":false}"#);
        assert_eq!(stats, Statistics::new(0, 4));
        let stats = decode_stats(r#"{"tailsCount":-2,"headsCount":""}"#);
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn overflowing_counters_load_zero() {
        let stats = decode_stats(
            r#"{"headsCount":18446744073709551615,"tailsCount":1,"totalCount":0}"#,
        );
        assert_eq!(stats, Statistics::default());
        let stats = decode_stats(r#"{"headsCount":1e300,"tailsCount":1e300,"totalCount":1}"#);
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn max_heads_alone_still_loads() {
        let stats = decode_stats(r#"{"headsCount":18446744073709551615}"#);
        assert_eq!(stats.heads_count(), u64::MAX);
        assert_eq!(stats.total_count(), u64::MAX);
    }

    #[test]
    fn inconsistent_total_is_rebuilt() {
        let stats = decode_stats(r#"{"headsCount":1,"tailsCount":1,"totalCount":5}"#);
        assert_eq!(stats.total_count(), 2);
    }
}
