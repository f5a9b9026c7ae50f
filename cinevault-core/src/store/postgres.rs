//! Postgres-backed content store.
//!
//! The collection maps to a single `content` table; seasons are persisted as
//! JSONB and tags as `text[]`. Filters are compiled with `QueryBuilder` so
//! only the supplied predicates reach the database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cinevault_model::{ContentDraft, ContentFilter, ContentRecord, ContentType};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::{Postgres, QueryBuilder, Row};
use tracing::debug;
use uuid::Uuid;

use crate::error::{CatalogError, Result};
use crate::store::{apply_patch, build_record, ContentStore};

const COLUMNS: &str = "id, slug, content_type, title, poster, banner, \
     description, year, language, category, genre, quality, rating, tags, \
     watch_link, download_link, seasons, created_at, updated_at";

/// Content store backed by a Postgres connection pool.
#[derive(Debug, Clone)]
pub struct PostgresContentStore {
    pool: PgPool,
}

impl PostgresContentStore {
    /// Connect to the database and bring the schema up to date.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| CatalogError::Store(e.to_string()))?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool; migrations are the caller's concern.
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn write_record(&self, record: &ContentRecord, insert: bool) -> Result<()> {
        let seasons = serde_json::to_value(&record.seasons)?;
        let sql = if insert {
            "INSERT INTO content (id, slug, content_type, title, poster, \
             banner, description, year, language, category, genre, quality, \
             rating, tags, watch_link, download_link, seasons, created_at, \
             updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, \
             $14, $15, $16, $17, $18, $19)"
        } else {
            "UPDATE content SET slug = $2, content_type = $3, title = $4, \
             poster = $5, banner = $6, description = $7, year = $8, \
             language = $9, category = $10, genre = $11, quality = $12, \
             rating = $13, tags = $14, watch_link = $15, download_link = $16, \
             seasons = $17, created_at = $18, updated_at = $19 \
             WHERE id = $1"
        };
        sqlx::query(sql)
            .bind(record.id)
            .bind(&record.slug)
            .bind(record.content_type.to_string())
            .bind(&record.title)
            .bind(&record.poster)
            .bind(&record.banner)
            .bind(&record.description)
            .bind(&record.year)
            .bind(&record.language)
            .bind(&record.category)
            .bind(&record.genre)
            .bind(&record.quality)
            .bind(record.rating)
            .bind(&record.tags)
            .bind(&record.watch_link)
            .bind(&record.download_link)
            .bind(seasons)
            .bind(record.created_at)
            .bind(record.updated_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

fn record_from_row(row: &PgRow) -> Result<ContentRecord> {
    let type_raw: String = row.try_get("content_type")?;
    let content_type = type_raw.parse::<ContentType>().map_err(|e| {
        CatalogError::Store(format!("corrupt content_type column: {e}"))
    })?;
    let seasons_json: serde_json::Value = row.try_get("seasons")?;

    Ok(ContentRecord {
        id: row.try_get::<Uuid, _>("id")?,
        slug: row.try_get("slug")?,
        content_type,
        title: row.try_get("title")?,
        poster: row.try_get("poster")?,
        banner: row.try_get("banner")?,
        description: row.try_get("description")?,
        year: row.try_get("year")?,
        language: row.try_get("language")?,
        category: row.try_get("category")?,
        genre: row.try_get("genre")?,
        quality: row.try_get("quality")?,
        rating: row.try_get("rating")?,
        tags: row.try_get("tags")?,
        watch_link: row.try_get("watch_link")?,
        download_link: row.try_get("download_link")?,
        seasons: serde_json::from_value(seasons_json)?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
    })
}

#[async_trait]
impl ContentStore for PostgresContentStore {
    async fn insert(&self, draft: ContentDraft) -> Result<ContentRecord> {
        let record = build_record(draft, Utc::now())?;
        self.write_record(&record, true).await?;
        Ok(record)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContentRecord>> {
        let row = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM content WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(record_from_row).transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ContentRecord>> {
        let row = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM content WHERE slug = $1 \
             ORDER BY created_at DESC LIMIT 1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(record_from_row).transpose()
    }

    async fn list(&self, filter: &ContentFilter) -> Result<Vec<ContentRecord>> {
        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT {COLUMNS} FROM content WHERE TRUE"
        ));

        if let Some(content_type) = filter.effective_type() {
            qb.push(" AND content_type = ");
            qb.push_bind(content_type.to_string());
        }
        if let Some(category) = &filter.category {
            qb.push(" AND category = ");
            qb.push_bind(category.clone());
        }
        if let Some(language) = &filter.language {
            qb.push(" AND language = ");
            qb.push_bind(language.clone());
        }
        if let Some(search) = &filter.search {
            let pattern = format!("%{search}%");
            qb.push(" AND (title ILIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" OR description ILIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" OR EXISTS (SELECT 1 FROM unnest(tags) AS tag \
                     WHERE tag ILIKE ");
            qb.push_bind(pattern);
            qb.push("))");
        }
        qb.push(" ORDER BY created_at DESC");

        debug!("listing content with filter: {:?}", filter);
        let rows = qb.build().fetch_all(&self.pool).await?;
        rows.iter().map(record_from_row).collect()
    }

    async fn update(
        &self,
        id: Uuid,
        draft: ContentDraft,
    ) -> Result<Option<ContentRecord>> {
        let Some(mut record) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        apply_patch(&mut record, draft, Utc::now())?;
        self.write_record(&record, false).await?;
        Ok(Some(record))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM content WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
