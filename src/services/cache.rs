use redis::aio::ConnectionManager;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::models::PartnerProfile;

/// Errors that can occur with cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Cache key for the active partner catalog
const PARTNERS_KEY: &str = "partners:active";

/// Two-tier cache for the partner catalog
///
/// L1 is in-process (moka), L2 is Redis shared across instances. The
/// catalog is static reference data read on every compatibility request,
/// so both tiers use the same TTL and there is no write-path
/// invalidation. Match results are never cached; scores are
/// request-scoped output.
pub struct CacheManager {
    redis: Arc<tokio::sync::Mutex<ConnectionManager>>,
    l1_cache: moka::future::Cache<String, Vec<u8>>,
    ttl_secs: u64,
}

impl CacheManager {
    /// Create a new cache manager; fails only if Redis is unreachable
    pub async fn new(redis_url: &str, l1_size: u64, ttl_secs: u64) -> Result<Self, CacheError> {
        let client = redis::Client::open(redis_url)?;
        let redis = redis::aio::ConnectionManager::new(client).await?;

        let l1_cache = moka::future::CacheBuilder::new(l1_size)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Ok(Self {
            redis: Arc::new(tokio::sync::Mutex::new(redis)),
            l1_cache,
            ttl_secs,
        })
    }

    /// Cached partner catalog, if any tier holds a fresh copy
    ///
    /// Cache failures are downgraded to a miss: the caller falls back to
    /// the store and the request still succeeds.
    pub async fn get_partners(&self) -> Option<Vec<PartnerProfile>> {
        if let Some(bytes) = self.l1_cache.get(PARTNERS_KEY).await {
            tracing::trace!("L1 cache hit: {}", PARTNERS_KEY);
            return serde_json::from_slice(&bytes).ok();
        }

        let fetched: Result<Option<String>, redis::RedisError> = {
            let mut conn = self.redis.lock().await;
            redis::cmd("GET")
                .arg(PARTNERS_KEY)
                .query_async(&mut *conn)
                .await
        };

        match fetched {
            Ok(Some(json)) => {
                tracing::trace!("L2 cache hit: {}", PARTNERS_KEY);
                self.l1_cache
                    .insert(PARTNERS_KEY.to_string(), json.as_bytes().to_vec())
                    .await;
                serde_json::from_str(&json).ok()
            }
            Ok(None) => {
                tracing::trace!("Cache miss: {}", PARTNERS_KEY);
                None
            }
            Err(e) => {
                tracing::warn!("Redis read failed, treating as cache miss: {}", e);
                None
            }
        }
    }

    /// Store the partner catalog in both tiers
    ///
    /// Best-effort: a failed write is logged and otherwise ignored.
    pub async fn put_partners(&self, partners: &[PartnerProfile]) {
        let json = match serde_json::to_string(partners) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize partner catalog for cache: {}", e);
                return;
            }
        };

        self.l1_cache
            .insert(PARTNERS_KEY.to_string(), json.as_bytes().to_vec())
            .await;

        let mut conn = self.redis.lock().await;
        if let Err(e) = redis::cmd("SETEX")
            .arg(PARTNERS_KEY)
            .arg(self.ttl_secs)
            .arg(json)
            .query_async::<()>(&mut *conn)
            .await
        {
            tracing::warn!("Redis write failed: {}", e);
        }
    }

    /// Drop the catalog from both tiers
    pub async fn invalidate_partners(&self) -> Result<(), CacheError> {
        self.l1_cache.invalidate(PARTNERS_KEY).await;
        let mut conn = self.redis.lock().await;
        redis::cmd("DEL")
            .arg(PARTNERS_KEY)
            .query_async::<()>(&mut *conn)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_partners() -> Vec<PartnerProfile> {
        vec![PartnerProfile {
            id: 1,
            name: "Emma".to_string(),
            age: Some(26),
            city: Some("Paris".to_string()),
            hobbies: vec!["hiking".to_string()],
            personality: vec!["kind".to_string()],
            description: None,
            image: None,
            is_active: true,
        }]
    }

    #[tokio::test]
    #[ignore = "Requires Redis"]
    async fn test_partner_catalog_round_trip() {
        let cache = CacheManager::new("redis://127.0.0.1:6379", 1000, 60)
            .await
            .expect("Failed to create cache");

        cache.invalidate_partners().await.unwrap();
        assert!(cache.get_partners().await.is_none());

        let partners = sample_partners();
        cache.put_partners(&partners).await;

        let cached = cache.get_partners().await.unwrap();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].name, "Emma");

        cache.invalidate_partners().await.unwrap();
        assert!(cache.get_partners().await.is_none());
    }
}
