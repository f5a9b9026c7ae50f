//! Slug derivation for records created without one.
//!
//! The slug is the lowercased title with runs of non-alphanumerics collapsed
//! into single hyphens, edge hyphens trimmed, and a base-36 encoding of the
//! creation instant (milliseconds) appended. The suffix stands in for a
//! uniqueness constraint; two creates with the same title in the same
//! millisecond can still collide, which matches the historical behavior.

use chrono::{DateTime, Utc};

/// Derive a slug from a title and a creation instant.
///
/// Deterministic for a given title + instant. A title that strips to nothing
/// yields the bare base-36 suffix.
pub fn generate(title: &str, instant: DateTime<Utc>) -> String {
    let base = slugify(title);
    let suffix = to_base36(instant.timestamp_millis().max(0) as u64);
    if base.is_empty() {
        suffix
    } else {
        format!("{base}-{suffix}")
    }
}

/// Lowercase and hyphenate a title: runs of anything outside `[a-z0-9]`
/// become a single hyphen, leading and trailing hyphens are trimmed.
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    out
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    String::from_utf8(buf).expect("base36 digits are ascii")
}
