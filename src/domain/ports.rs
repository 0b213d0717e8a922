use crate::domain::model::{Package, RawRow};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Upstream catalog provider. Fetches are read-only and idempotent.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Whether the source has the credentials it needs to be called at all.
    fn is_configured(&self) -> bool;

    async fn fetch_rows(&self) -> Result<Vec<RawRow>>;
}

/// Free-text answer collaborator (generative model). The engine passes the
/// most relevant catalog entries as context and falls back to a canned
/// responder when this fails.
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    async fn generate(&self, user_text: &str, packages: &[Package]) -> Result<String>;
}

/// Injected time source so cache TTL logic is testable without real time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn sheets_endpoint(&self) -> &str;
    fn sheet_id(&self) -> &str;
    fn sheets_api_key(&self) -> &str;
    fn gemini_endpoint(&self) -> &str;
    fn gemini_api_key(&self) -> &str;
    fn cache_ttl_seconds(&self) -> u64;
    fn request_timeout_seconds(&self) -> u64;
}
