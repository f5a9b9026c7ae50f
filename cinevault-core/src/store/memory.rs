//! In-memory content store, used by the integration tests and as a
//! zero-dependency backend for local development. Semantics are pinned to
//! the shared helpers in [`crate::store`], so it answers queries exactly
//! like the Postgres backend.

use async_trait::async_trait;
use chrono::Utc;
use cinevault_model::{ContentDraft, ContentFilter, ContentRecord};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::Result;
use crate::store::{apply_patch, build_record, matches_filter, ContentStore};

/// Single-process store backed by a `RwLock`'d vector. Writers serialize on
/// the lock; concurrent updates to the same id race at last-write-wins
/// granularity, one whole request at a time.
#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    records: RwLock<Vec<ContentRecord>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn insert(&self, draft: ContentDraft) -> Result<ContentRecord> {
        let record = build_record(draft, Utc::now())?;
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContentRecord>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ContentRecord>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|r| r.slug.as_deref() == Some(slug))
            .cloned())
    }

    async fn list(&self, filter: &ContentFilter) -> Result<Vec<ContentRecord>> {
        let records = self.records.read().await;
        let mut matched: Vec<ContentRecord> = records
            .iter()
            .filter(|r| matches_filter(r, filter))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }

    async fn update(
        &self,
        id: Uuid,
        draft: ContentDraft,
    ) -> Result<Option<ContentRecord>> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                apply_patch(record, draft, Utc::now())?;
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() < before)
    }
}
