//! The content store trait and the record-building logic shared by every
//! backend, so that validation and merge semantics cannot drift between
//! Postgres and the in-memory implementation.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cinevault_model::{ContentDraft, ContentFilter, ContentRecord, ContentType};
use uuid::Uuid;

use crate::error::{CatalogError, Result};
use crate::slug;

/// Durable storage and query evaluation for the catalog collection.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Validate and persist a new record, assigning `id`, timestamps and a
    /// generated slug when the draft carries none.
    async fn insert(&self, draft: ContentDraft) -> Result<ContentRecord>;

    /// Exact id lookup. A miss is `Ok(None)`, never an error.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContentRecord>>;

    /// Exact slug lookup, used as the fallback when an id lookup misses.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<ContentRecord>>;

    /// All records matching every supplied predicate, newest first.
    async fn list(&self, filter: &ContentFilter) -> Result<Vec<ContentRecord>>;

    /// Merge the draft's supplied fields onto the existing record and
    /// refresh `updated_at`. `Ok(None)` when the id is unknown.
    async fn update(&self, id: Uuid, draft: ContentDraft)
        -> Result<Option<ContentRecord>>;

    /// Remove a record. `Ok(false)` when the id is unknown.
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

/// Build a full record from a create draft, enforcing the store invariants:
/// a recognized type, a non-empty title and a non-empty poster.
pub fn build_record(
    draft: ContentDraft,
    now: DateTime<Utc>,
) -> Result<ContentRecord> {
    let content_type = parse_type(draft.content_type.as_deref())?;
    let title = draft
        .title
        .filter(|t| !t.is_empty())
        .ok_or_else(|| CatalogError::Validation("title is required".into()))?;
    let poster = draft
        .poster
        .filter(|p| !p.is_empty())
        .ok_or_else(|| CatalogError::Validation("poster is required".into()))?;

    let slug = match draft.slug {
        Some(s) if !s.is_empty() => Some(s),
        _ => Some(slug::generate(&title, now)),
    };

    Ok(ContentRecord {
        id: Uuid::new_v4(),
        slug,
        content_type,
        title,
        poster,
        banner: draft.banner,
        description: draft.description,
        year: draft.year,
        language: draft.language,
        category: draft.category,
        genre: draft.genre,
        quality: draft.quality,
        rating: draft.rating,
        tags: draft.tags.unwrap_or_default(),
        watch_link: draft.watch_link,
        download_link: draft.download_link,
        seasons: draft.seasons.unwrap_or_default(),
        created_at: now,
        updated_at: now,
    })
}

/// Merge a partial draft onto an existing record. Only supplied fields
/// change; a supplied `type` must still be recognized.
pub fn apply_patch(
    record: &mut ContentRecord,
    draft: ContentDraft,
    now: DateTime<Utc>,
) -> Result<()> {
    if let Some(raw) = draft.content_type.as_deref() {
        record.content_type = parse_type(Some(raw))?;
    }
    if let Some(title) = draft.title {
        if title.is_empty() {
            return Err(CatalogError::Validation("title is required".into()));
        }
        record.title = title;
    }
    if let Some(poster) = draft.poster {
        if poster.is_empty() {
            return Err(CatalogError::Validation("poster is required".into()));
        }
        record.poster = poster;
    }
    if let Some(slug) = draft.slug {
        record.slug = Some(slug);
    }
    if let Some(banner) = draft.banner {
        record.banner = Some(banner);
    }
    if let Some(description) = draft.description {
        record.description = Some(description);
    }
    if let Some(year) = draft.year {
        record.year = Some(year);
    }
    if let Some(language) = draft.language {
        record.language = Some(language);
    }
    if let Some(category) = draft.category {
        record.category = Some(category);
    }
    if let Some(genre) = draft.genre {
        record.genre = Some(genre);
    }
    if let Some(quality) = draft.quality {
        record.quality = Some(quality);
    }
    if let Some(rating) = draft.rating {
        record.rating = Some(rating);
    }
    if let Some(tags) = draft.tags {
        record.tags = tags;
    }
    if let Some(watch_link) = draft.watch_link {
        record.watch_link = Some(watch_link);
    }
    if let Some(download_link) = draft.download_link {
        record.download_link = Some(download_link);
    }
    if let Some(seasons) = draft.seasons {
        record.seasons = seasons;
    }
    record.updated_at = now;
    Ok(())
}

/// Predicate evaluation for the in-memory backend; the Postgres backend
/// expresses the same semantics in SQL.
pub fn matches_filter(record: &ContentRecord, filter: &ContentFilter) -> bool {
    if let Some(wanted) = filter.effective_type() {
        if record.content_type.to_string() != wanted {
            return false;
        }
    }
    if let Some(category) = filter.category.as_deref() {
        if record.category.as_deref() != Some(category) {
            return false;
        }
    }
    if let Some(language) = filter.language.as_deref() {
        if record.language.as_deref() != Some(language) {
            return false;
        }
    }
    if let Some(search) = filter.search.as_deref() {
        let needle = search.to_lowercase();
        let in_title = record.title.to_lowercase().contains(&needle);
        let in_description = record
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&needle));
        let in_tags = record
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(&needle));
        if !(in_title || in_description || in_tags) {
            return false;
        }
    }
    true
}

fn parse_type(raw: Option<&str>) -> Result<ContentType> {
    let raw = raw.ok_or_else(|| {
        CatalogError::Validation("type is required and must be movie or series".into())
    })?;
    raw.parse::<ContentType>().map_err(|_| {
        CatalogError::Validation(format!(
            "type must be movie or series, got {raw}"
        ))
    })
}
