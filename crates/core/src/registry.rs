//! Concurrent in-memory registry of ingest sources.
//!
//! Backed by a sharded `DashMap`: single-key operations lock one shard and
//! are linearizable per key. `list`, `clear` and `len` visit shards one at a
//! time, so under concurrent writers they may reflect a state that never
//! existed at a single instant. Every returned descriptor is still a whole
//! value cloned under its shard lock, never a torn one.

use dashmap::DashMap;
use tracing::debug;

use crate::ingest::IngestDescriptor;

/// Latest-value map from signal name to descriptor.
#[derive(Debug, Default)]
pub struct IngestRegistry {
    entries: DashMap<String, IngestDescriptor>,
}

impl IngestRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Insert or wholesale replace the entry keyed by `descriptor.signal_name`.
    pub fn put(&self, descriptor: IngestDescriptor) {
        let key = descriptor.signal_name.clone();
        if self.entries.insert(key.clone(), descriptor).is_some() {
            debug!(signal = %key, "replaced existing ingest entry");
        }
    }

    /// Current descriptor for `signal_name`, if any.
    pub fn get(&self, signal_name: &str) -> Option<IngestDescriptor> {
        self.entries.get(signal_name).map(|e| e.value().clone())
    }

    /// All current descriptors, in no particular order.
    pub fn list(&self) -> Vec<IngestDescriptor> {
        self.entries
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Remove every entry. Writers racing with this may or may not survive.
    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn descriptor(name: &str, url: &str) -> IngestDescriptor {
        IngestDescriptor::new(name).with_field("url", url)
    }

    #[test]
    fn test_put_then_get() {
        let reg = IngestRegistry::new();
        let d = descriptor("cpu-metrics", "http://x");
        reg.put(d.clone());
        assert_eq!(reg.get("cpu-metrics"), Some(d));
    }

    #[test]
    fn test_get_missing_returns_none() {
        let reg = IngestRegistry::new();
        assert!(reg.get("unknown").is_none());
    }

    #[test]
    fn test_put_replaces_wholesale() {
        let reg = IngestRegistry::new();
        reg.put(descriptor("video", "http://a").with_field("status", "up"));
        reg.put(descriptor("video", "http://b"));

        let got = reg.get("video").unwrap();
        assert_eq!(got.fields.get("url").unwrap(), "http://b");
        assert!(!got.fields.contains_key("status"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_list_contains_distinct_entries() {
        let reg = IngestRegistry::new();
        let d1 = descriptor("a", "http://a");
        let d2 = descriptor("b", "http://b");
        reg.put(d1.clone());
        reg.put(d2.clone());

        let listed = reg.list();
        assert_eq!(listed.len(), 2);
        assert!(listed.contains(&d1));
        assert!(listed.contains(&d2));
    }

    #[test]
    fn test_clear_empties_registry() {
        let reg = IngestRegistry::new();
        reg.put(descriptor("a", "http://a"));
        reg.put(descriptor("b", "http://b"));
        reg.clear();

        assert!(reg.list().is_empty());
        assert!(reg.is_empty());
        assert!(reg.get("a").is_none());
    }

    #[test]
    fn test_concurrent_puts_same_key_never_tear() {
        let reg = Arc::new(IngestRegistry::new());
        let writers = 16;
        let rounds = 200;

        std::thread::scope(|s| {
            for i in 0..writers {
                let reg = reg.clone();
                s.spawn(move || {
                    for round in 0..rounds {
                        let tag = format!("{i}-{round}");
                        reg.put(
                            IngestDescriptor::new("shared")
                                .with_field("url", format!("http://{tag}"))
                                .with_field("tag", tag),
                        );
                    }
                });
            }
        });

        // Whatever write won, both fields must come from the same put.
        let got = reg.get("shared").unwrap();
        let tag = got.fields.get("tag").unwrap().as_str().unwrap();
        assert_eq!(
            got.fields.get("url").unwrap().as_str().unwrap(),
            format!("http://{tag}")
        );

        // The last committed put is the final round of some writer.
        let final_tags: HashSet<String> = (0..writers)
            .map(|i| format!("{i}-{}", rounds - 1))
            .collect();
        assert!(final_tags.contains(tag), "survivor {tag} is not a final write");
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_concurrent_puts_distinct_keys_all_visible() {
        let reg = Arc::new(IngestRegistry::new());

        std::thread::scope(|s| {
            for i in 0..8 {
                let reg = reg.clone();
                s.spawn(move || {
                    for j in 0..50 {
                        reg.put(descriptor(&format!("sig-{i}-{j}"), "http://x"));
                    }
                });
            }
        });

        let names: HashSet<String> = reg.list().into_iter().map(|d| d.signal_name).collect();
        assert_eq!(names.len(), 400);
        assert!(names.contains("sig-7-49"));
    }

    #[test]
    fn test_list_during_writes_has_no_duplicates() {
        let reg = Arc::new(IngestRegistry::new());
        for i in 0..64 {
            reg.put(descriptor(&format!("base-{i}"), "http://x"));
        }

        std::thread::scope(|s| {
            let writer = reg.clone();
            s.spawn(move || {
                for i in 0..500 {
                    writer.put(descriptor(&format!("base-{}", i % 64), &format!("http://{i}")));
                    writer.put(descriptor(&format!("extra-{i}"), "http://y"));
                }
            });

            for _ in 0..20 {
                let listed = reg.list();
                let unique: HashSet<&str> =
                    listed.iter().map(|d| d.signal_name.as_str()).collect();
                assert_eq!(unique.len(), listed.len());
                for d in &listed {
                    assert!(d.fields.contains_key("url"));
                }
            }
        });
    }
}
