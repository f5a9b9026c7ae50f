//! Shared data models for the Cinevault content catalog.
//!
//! Everything that crosses the HTTP boundary lives here: the catalog record
//! and its nested season/episode structures, the filter and draft types used
//! by the store, and the response envelope. Wire keys are camelCase to match
//! the catalog's JSON contract (`watchLink`, `episodeNumber`, ...).

pub mod content;
pub mod content_type;
pub mod envelope;
pub mod filter;

pub use content::{ContentDraft, ContentRecord, Episode, Season};
pub use content_type::ContentType;
pub use envelope::ApiResponse;
pub use filter::{ContentFilter, TYPE_WILDCARD};
