use serde_json::Value;

/// Keyed cache of query results, shared by every screen.
///
/// Values are stored as JSON so one cache can hold any payload type; typed
/// access lives in the application layer.
pub trait QueryCache: Send + Sync {
    /// Returns the cached value unless it is missing or stale.
    fn get(&self, key: &str) -> Option<Value>;

    fn put(&self, key: &str, value: Value);

    fn invalidate(&self, key: &str);

    /// Drops every entry whose key starts with `prefix`.
    fn invalidate_prefix(&self, prefix: &str);
}
