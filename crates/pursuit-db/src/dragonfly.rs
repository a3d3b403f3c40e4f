//! `Dragonfly` (Redis-compatible) case storage.
//!
//! Each case is stored as a JSON string under its own key, and the set of
//! known ids is kept in an index set so the whole store can be listed
//! without a key scan.
//!
//! # Key Patterns
//!
//! | Pattern | Type | Description |
//! |---------|------|-------------|
//! | `case:{id}` | JSON | Full case record |
//! | `cases:index` | Set | Every case id ever written |
//!
//! When a TTL is configured, every write refreshes the expiry of the case
//! key. Expired ids linger in the index until the next listing prunes them.

use std::collections::BTreeMap;

use fred::prelude::*;
use fred::types::Expiration;
use pursuit_core::{CaseStore, StoreError};
use pursuit_types::{Case, CaseId};

use crate::error::DbError;

/// Name of the set holding every stored case id.
pub const INDEX_KEY: &str = "cases:index";

/// Key under which one case record is stored.
pub fn case_key(case_id: CaseId) -> String {
    format!("case:{case_id}")
}

/// Case store backed by a `Dragonfly` instance.
///
/// Wraps a [`fred::prelude::Client`]; clones share the connection.
#[derive(Clone)]
pub struct DragonflyCaseStore {
    client: Client,
    ttl_seconds: Option<i64>,
}

impl std::fmt::Debug for DragonflyCaseStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragonflyCaseStore")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}

impl DragonflyCaseStore {
    /// Connect to `Dragonfly` at the given URL.
    ///
    /// The URL should follow the Redis URL scheme:
    /// `redis://host:port` or `redis://host:port/db`
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Config`] if the URL cannot be parsed or the TTL
    /// does not fit a Redis expiry.
    /// Returns [`DbError::Dragonfly`] if the connection fails.
    pub async fn connect(url: &str, ttl_seconds: Option<u64>) -> Result<Self, DbError> {
        let config = Config::from_url(url)
            .map_err(|e| DbError::Config(format!("Invalid Dragonfly URL: {e}")))?;
        let ttl_seconds = ttl_seconds
            .map(i64::try_from)
            .transpose()
            .map_err(|e| DbError::Config(format!("case TTL out of range: {e}")))?;

        let client = Builder::from_config(config).build()?;
        client.init().await?;

        tracing::info!(ttl_seconds, "Connected to Dragonfly");
        Ok(Self {
            client,
            ttl_seconds,
        })
    }

    /// Write a case and register its id in the index.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Serialization`] if serialization fails.
    /// Returns [`DbError::Dragonfly`] if a write fails.
    pub async fn put_case(&self, case: &Case) -> Result<(), DbError> {
        let json = serde_json::to_string(case)?;
        let expiry = self.ttl_seconds.map(Expiration::EX);
        let _: () = self
            .client
            .set(case_key(case.case_id).as_str(), json.as_str(), expiry, None, false)
            .await?;
        let _: u32 = self
            .client
            .sadd(INDEX_KEY, case.case_id.to_string().as_str())
            .await?;
        Ok(())
    }

    /// Read one case, `None` when the key is absent or expired.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Serialization`] if the stored JSON is invalid.
    /// Returns [`DbError::Dragonfly`] if the read fails.
    pub async fn get_case(&self, case_id: CaseId) -> Result<Option<Case>, DbError> {
        let value: Option<String> = self.client.get(case_key(case_id).as_str()).await?;
        value
            .map(|s| serde_json::from_str(&s))
            .transpose()
            .map_err(DbError::from)
    }

    /// Read every indexed case, pruning ids whose record has expired.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a read fails or a record is invalid.
    pub async fn all_cases(&self) -> Result<BTreeMap<CaseId, Case>, DbError> {
        let members: Vec<String> = self.client.smembers(INDEX_KEY).await?;
        let mut cases = BTreeMap::new();

        for member in members {
            let Ok(case_id) = member.parse::<CaseId>() else {
                tracing::warn!(member = %member, "Dropping malformed id from case index");
                let _: u32 = self.client.srem(INDEX_KEY, member.as_str()).await?;
                continue;
            };
            match self.get_case(case_id).await? {
                Some(case) => {
                    cases.insert(case_id, case);
                }
                None => {
                    let _: u32 = self.client.srem(INDEX_KEY, member.as_str()).await?;
                }
            }
        }
        Ok(cases)
    }

    /// Delete every case key and the index.
    ///
    /// Intended for test setup; does not touch unrelated keys.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Dragonfly`] if a command fails.
    pub async fn purge(&self) -> Result<(), DbError> {
        let members: Vec<String> = self.client.smembers(INDEX_KEY).await?;
        for member in members {
            let _: u32 = self.client.del(format!("case:{member}").as_str()).await?;
        }
        let _: u32 = self.client.del(INDEX_KEY).await?;
        Ok(())
    }
}

impl CaseStore for DragonflyCaseStore {
    async fn get(&self, case_id: CaseId) -> Result<Option<Case>, StoreError> {
        Ok(self.get_case(case_id).await?)
    }

    async fn get_all(&self) -> Result<BTreeMap<CaseId, Case>, StoreError> {
        Ok(self.all_cases().await?)
    }

    async fn put(&self, case: &Case) -> Result<(), StoreError> {
        Ok(self.put_case(case).await?)
    }
}
