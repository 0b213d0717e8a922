use crate::core::demo;
use crate::domain::model::{Package, RawRow};
use crate::domain::ports::{CatalogSource, Clock};
use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

/// The single cached catalog snapshot, replaced wholesale on refresh.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub packages: Vec<Package>,
    pub fetched_at: DateTime<Utc>,
}

/// Process-wide catalog cache with a TTL and an injected clock and source.
///
/// Reads take a snapshot of the slot; the lock is never held across the
/// upstream fetch, so two handlers that both see an expired entry may each
/// fetch and overwrite the slot. That race is accepted: the source is
/// read-only and idempotent, last writer wins.
pub struct CatalogCache<S, K> {
    source: S,
    clock: K,
    ttl: Duration,
    slot: Mutex<Option<CacheEntry>>,
}

impl<S: CatalogSource, K: Clock> CatalogCache<S, K> {
    pub fn new(source: S, clock: K, ttl_seconds: u64) -> Self {
        Self {
            source,
            clock,
            ttl: Duration::seconds(ttl_seconds as i64),
            slot: Mutex::new(None),
        }
    }

    /// Returns the catalog, refreshing from the upstream source when the
    /// cached entry is older than the TTL or `force_refresh` is set.
    ///
    /// An unconfigured source yields the built-in demo catalog, which is
    /// never cached so the real source is retried on every call. A
    /// configured source that errors yields an empty list and leaves any
    /// previous good entry in place.
    pub async fn get_catalog(&self, force_refresh: bool) -> Vec<Package> {
        if !force_refresh {
            if let Some(packages) = self.fresh_snapshot() {
                return packages;
            }
        }

        if !self.source.is_configured() {
            tracing::warn!("Catalog source not configured, serving demo catalog");
            return demo::demo_packages();
        }

        tracing::debug!("Fetching catalog from upstream source");
        match self.source.fetch_rows().await {
            Ok(rows) => {
                let packages = parse_active_rows(&rows);
                tracing::info!(
                    "Catalog refreshed: {} active of {} rows",
                    packages.len(),
                    rows.len()
                );
                let entry = CacheEntry {
                    packages: packages.clone(),
                    fetched_at: self.clock.now(),
                };
                if let Ok(mut slot) = self.slot.lock() {
                    *slot = Some(entry);
                }
                packages
            }
            Err(e) => {
                // Signal that something is broken instead of silently
                // substituting demo data; the previous good entry stays.
                tracing::error!("Catalog fetch failed: {}", e);
                Vec::new()
            }
        }
    }

    fn fresh_snapshot(&self) -> Option<Vec<Package>> {
        let slot = self.slot.lock().ok()?;
        let entry = slot.as_ref()?;
        if self.clock.now() - entry.fetched_at < self.ttl {
            Some(entry.packages.clone())
        } else {
            None
        }
    }
}

/// Parses rows, keeping only "active" entries. A malformed row is skipped
/// without failing the whole fetch.
fn parse_active_rows(rows: &[RawRow]) -> Vec<Package> {
    rows.iter()
        .filter_map(|row| match Package::from_row(row) {
            Ok(package) if package.is_active() => Some(package),
            Ok(package) => {
                tracing::debug!("Skipping inactive package: {}", package.id);
                None
            }
            Err(e) => {
                tracing::warn!("Skipping unparseable catalog row: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{Result, TourError};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct ScriptedSource {
        configured: bool,
        responses: Mutex<VecDeque<Result<Vec<RawRow>>>>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(configured: bool, responses: Vec<Result<Vec<RawRow>>>) -> Self {
            Self {
                configured,
                responses: Mutex::new(responses.into_iter().collect()),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CatalogSource for ScriptedSource {
        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn fetch_rows(&self) -> Result<Vec<RawRow>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| panic!("unexpected fetch"))
        }
    }

    #[derive(Clone)]
    struct ManualClock(Arc<Mutex<DateTime<Utc>>>);

    impl ManualClock {
        fn new() -> Self {
            Self(Arc::new(Mutex::new(Utc::now())))
        }

        fn advance_seconds(&self, seconds: i64) {
            let mut now = self.0.lock().unwrap();
            *now = *now + Duration::seconds(seconds);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.0.lock().unwrap()
        }
    }

    fn row(id: &str, status: &str) -> RawRow {
        let mut fields = std::collections::HashMap::new();
        fields.insert("id".to_string(), id.to_string());
        fields.insert("name".to_string(), format!("Tour {}", id));
        fields.insert("region".to_string(), "South Island".to_string());
        fields.insert("type".to_string(), "Nature".to_string());
        fields.insert("duration".to_string(), "6".to_string());
        fields.insert("price".to_string(), "2299".to_string());
        fields.insert("group_size".to_string(), "2-8".to_string());
        fields.insert("status".to_string(), status.to_string());
        RawRow { fields }
    }

    fn source_error() -> TourError {
        TourError::SourceError {
            message: "upstream exploded".to_string(),
        }
    }

    #[tokio::test]
    async fn test_cache_hit_within_ttl_skips_upstream() {
        let source = ScriptedSource::new(true, vec![Ok(vec![row("1", "Active")])]);
        let clock = ManualClock::new();
        let cache = CatalogCache::new(source, clock.clone(), 300);

        let first = cache.get_catalog(false).await;
        clock.advance_seconds(100);
        let second = cache.get_catalog(false).await;

        assert_eq!(first, second);
        assert_eq!(cache.source.call_count(), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_triggers_refetch() {
        let source = ScriptedSource::new(
            true,
            vec![
                Ok(vec![row("1", "Active")]),
                Ok(vec![row("1", "Active"), row("2", "Active")]),
            ],
        );
        let clock = ManualClock::new();
        let cache = CatalogCache::new(source, clock.clone(), 300);

        assert_eq!(cache.get_catalog(false).await.len(), 1);
        clock.advance_seconds(301);
        assert_eq!(cache.get_catalog(false).await.len(), 2);
        assert_eq!(cache.source.call_count(), 2);
    }

    #[tokio::test]
    async fn test_force_refresh_ignores_ttl() {
        let source = ScriptedSource::new(
            true,
            vec![Ok(vec![row("1", "Active")]), Ok(vec![row("2", "Active")])],
        );
        let clock = ManualClock::new();
        let cache = CatalogCache::new(source, clock, 300);

        cache.get_catalog(false).await;
        let refreshed = cache.get_catalog(true).await;

        assert_eq!(refreshed[0].id, "2");
        assert_eq!(cache.source.call_count(), 2);
    }

    #[tokio::test]
    async fn test_unconfigured_source_serves_demo_and_never_caches() {
        let source = ScriptedSource::new(false, vec![]);
        let clock = ManualClock::new();
        let cache = CatalogCache::new(source, clock, 300);

        let first = cache.get_catalog(false).await;
        let second = cache.get_catalog(false).await;

        assert_eq!(first.len(), 6);
        assert_eq!(second.len(), 6);
        // Demo data must not enter the slot.
        assert!(cache.slot.lock().unwrap().is_none());
        assert_eq!(cache.source.call_count(), 0);
    }

    #[tokio::test]
    async fn test_configured_error_returns_empty_not_demo() {
        let source = ScriptedSource::new(true, vec![Err(source_error())]);
        let clock = ManualClock::new();
        let cache = CatalogCache::new(source, clock, 300);

        let packages = cache.get_catalog(false).await;
        assert!(packages.is_empty());
        assert!(cache.slot.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_force_refresh_preserves_previous_entry() {
        let source = ScriptedSource::new(
            true,
            vec![Ok(vec![row("1", "Active")]), Err(source_error())],
        );
        let clock = ManualClock::new();
        let cache = CatalogCache::new(source, clock.clone(), 300);

        cache.get_catalog(false).await;
        let failed = cache.get_catalog(true).await;
        assert!(failed.is_empty());

        // The old entry is still valid, so a plain read serves it again.
        clock.advance_seconds(10);
        let recovered = cache.get_catalog(false).await;
        assert_eq!(recovered.len(), 1);
        assert_eq!(cache.source.call_count(), 2);
    }

    #[tokio::test]
    async fn test_only_active_rows_are_retained() {
        let source = ScriptedSource::new(
            true,
            vec![Ok(vec![
                row("1", "Active"),
                row("2", "Inactive"),
                row("3", "ACTIVE"),
            ])],
        );
        let clock = ManualClock::new();
        let cache = CatalogCache::new(source, clock, 300);

        let packages = cache.get_catalog(false).await;
        let ids: Vec<&str> = packages.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn test_malformed_row_is_skipped_without_failing_fetch() {
        let mut broken = row("2", "Active");
        broken
            .fields
            .insert("price".to_string(), "koha".to_string());

        let source = ScriptedSource::new(true, vec![Ok(vec![row("1", "Active"), broken])]);
        let clock = ManualClock::new();
        let cache = CatalogCache::new(source, clock, 300);

        let packages = cache.get_catalog(false).await;
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].id, "1");
    }
}
