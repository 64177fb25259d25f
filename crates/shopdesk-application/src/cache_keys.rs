//! Query cache keys and a typed read-through helper.
//!
//! Keys are `/`-separated so whole families can be dropped with
//! `invalidate_prefix`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use shopdesk_core::error::Result;
use shopdesk_core::ports::QueryCache;
use std::future::Future;

pub const PRODUCTS: &str = "products/";
pub const LANGUAGES: &str = "languages/";
pub const TRANSLATIONS: &str = "translations/";
pub const CMS: &str = "cms/";

pub fn product_list<Q: Serialize>(query: &Q) -> String {
    let query = serde_json::to_string(query).unwrap_or_default();
    format!("{}list/{}", PRODUCTS, query)
}

pub fn product(id: i64) -> String {
    format!("{}{}", PRODUCTS, id)
}

pub fn languages(include_disabled: bool) -> String {
    format!("{}{}", LANGUAGES, if include_disabled { "all" } else { "enabled" })
}

pub fn translation_status(product_id: i64, language_code: &str) -> String {
    format!("{}{}/status/{}", TRANSLATIONS, product_id, language_code)
}

pub fn cms_pages() -> String {
    format!("{}pages", CMS)
}

pub fn cms_blocks() -> String {
    format!("{}blocks", CMS)
}

/// Returns the cached value for `key`, or runs `fetch` and caches its result.
///
/// Entries that no longer decode as `T` are dropped and refetched.
pub async fn cached<T, F, Fut>(cache: &dyn QueryCache, key: &str, fetch: F) -> Result<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    if let Some(value) = cache.get(key) {
        match serde_json::from_value(value) {
            Ok(hit) => return Ok(hit),
            Err(e) => {
                tracing::warn!("[QueryCache] Dropping undecodable entry {}: {}", key, e);
                cache.invalidate(key);
            }
        }
    }

    let fresh = fetch().await?;
    match serde_json::to_value(&fresh) {
        Ok(json) => cache.put(key, json),
        Err(e) => tracing::warn!("[QueryCache] Not caching {}: {}", key, e),
    }
    Ok(fresh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopdesk_core::error::ShopdeskError;
    use shopdesk_infrastructure::MemoryQueryCache;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_cached_fetches_once() {
        let cache = MemoryQueryCache::new(Duration::from_secs(60));
        let counter = AtomicUsize::new(0);
        let fetches = &counter;

        for _ in 0..3 {
            let value: Vec<String> = cached(&cache, &languages(false), move || async move {
                fetches.fetch_add(1, Ordering::SeqCst);
                Ok(vec!["en".to_string()])
            })
            .await
            .unwrap();
            assert_eq!(value, vec!["en"]);
        }
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let cache = MemoryQueryCache::new(Duration::from_secs(60));
        let result: Result<u32> = cached(&cache, "k", || async {
            Err(ShopdeskError::http(503, "Service Unavailable"))
        })
        .await;
        assert!(result.is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_keys_share_prefixes() {
        assert!(translation_status(4, "de").starts_with(TRANSLATIONS));
        assert!(product(4).starts_with(PRODUCTS));
        assert_ne!(languages(true), languages(false));
    }
}
