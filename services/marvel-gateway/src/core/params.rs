//! Lenient query parameter parsing
//!
//! `skip` and `limit` arrive as free-form query text. Both the
//! upstream proxy and the local store read them through
//! [`parse_or_default`] so they agree on every input.

/// Default offset when `skip` is absent or unparseable
pub const DEFAULT_SKIP: i64 = 0;

/// Default page size when `limit` is absent or unparseable
pub const DEFAULT_LIMIT: i64 = 100;

/// Parse the leading integer of `raw`, or return `default`.
///
/// Surrounding whitespace is ignored and an optional sign is
/// accepted. Digits are read up to the first non-digit, so `"12abc"`
/// yields 12. Input without leading digits (`""`, `"abc"`, `"-"`)
/// and values overflowing `i64` yield `default`.
pub fn parse_or_default(raw: Option<&str>, default: i64) -> i64 {
    let Some(raw) = raw else {
        return default;
    };

    let trimmed = raw.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return default;
    }

    match rest[..digits_end].parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => default,
    }
}

/// Pagination window shared by the proxy and the local store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Page {
    /// Build a page from raw query values, applying defaults
    pub fn from_query(skip: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            skip: parse_or_default(skip, DEFAULT_SKIP),
            limit: parse_or_default(limit, DEFAULT_LIMIT),
        }
    }

    /// Half-open index range of this page within `len` items
    ///
    /// Negative values are treated as zero; a start past the end
    /// yields an empty range.
    pub fn range(&self, len: usize) -> std::ops::Range<usize> {
        let start = usize::try_from(self.skip).unwrap_or(0).min(len);
        let limit = usize::try_from(self.limit).unwrap_or(0);
        let end = start.saturating_add(limit).min(len);
        start..end
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}
