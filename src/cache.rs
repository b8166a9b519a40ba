use std::time::{Duration, Instant};

use dashmap::DashMap;

#[derive(Clone)]
struct CachedEntry {
    body: Vec<u8>,
    expires_at: Instant,
}

impl CachedEntry {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Process-local cache for fully rendered listing pages. Entries are keyed
/// by the requested page number and hold the exact response bytes, so a hit
/// replays a byte-identical body. The fixed TTL is the only invalidation.
pub struct PageCache {
    entries: DashMap<String, CachedEntry>,
    ttl: Duration,
}

impl PageCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let entry = self.entries.get(key)?;
        if entry.is_expired() {
            drop(entry);
            self.entries.remove(key);
            return None;
        }
        Some(entry.body.clone())
    }

    pub fn put(&self, key: &str, body: Vec<u8>) {
        self.entries.insert(
            key.to_string(),
            CachedEntry {
                body,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_replays_identical_bytes() {
        let cache = PageCache::new(Duration::from_secs(60));
        cache.put("index:page=1", b"first render".to_vec());
        assert_eq!(cache.get("index:page=1").as_deref(), Some(&b"first render"[..]));
        // A second render would differ, but the cache keeps serving the
        // original until expiry.
        assert_eq!(cache.get("index:page=1").as_deref(), Some(&b"first render"[..]));
    }

    #[test]
    fn keys_are_independent() {
        let cache = PageCache::new(Duration::from_secs(60));
        cache.put("index:page=1", b"one".to_vec());
        assert!(cache.get("index:page=2").is_none());
    }

    #[test]
    fn expired_entries_miss() {
        let cache = PageCache::new(Duration::from_millis(0));
        cache.put("index:page=1", b"stale".to_vec());
        std::thread::sleep(Duration::from_millis(5));
        assert!(cache.get("index:page=1").is_none());
    }
}
