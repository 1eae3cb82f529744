use crate::error::{PinkuError, Result};
use crate::models::RemoteBookmark;
use crate::utils;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Pinboard accepts at most three tags per `posts/all` query
pub const MAX_TAGS: usize = 3;

/// Criteria narrowing which bookmarks are fetched and kept.
///
/// `tags`, `start`, `results`, `fromdt`, `todt` and `meta` are forwarded to
/// Pinboard as-is. The four boolean filters are applied locally to every
/// fetched bookmark. Setting both halves of a pair (`private_only` and
/// `public_only`, or `toread_only` and `read_only`) rejects every bookmark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterConfig {
    pub tags: Vec<String>,
    pub start: Option<usize>,
    pub results: Option<usize>,
    pub fromdt: Option<DateTime<Utc>>,
    pub todt: Option<DateTime<Utc>>,
    pub meta: bool,
    pub private_only: bool,
    pub public_only: bool,
    pub toread_only: bool,
    pub read_only: bool,
}

/// Why a fetched bookmark was dropped before reaching the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    Shared,
    Private,
    AlreadyRead,
    Unread,
}

impl std::fmt::Display for Exclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Exclusion::Shared => "shared bookmark excluded by --private",
            Exclusion::Private => "private bookmark excluded by --public",
            Exclusion::AlreadyRead => "read bookmark excluded by --toread",
            Exclusion::Unread => "unread bookmark excluded by --read",
        };
        f.write_str(s)
    }
}

impl FilterConfig {
    /// Check the configuration once, before anything talks to Pinboard.
    pub fn validate(&self) -> Result<()> {
        if self.tags.len() > MAX_TAGS {
            return Err(PinkuError::InvalidInput(format!(
                "At most {} tags can be used as a filter, got {}",
                MAX_TAGS,
                self.tags.len()
            )));
        }

        if let Some(tag) = self
            .tags
            .iter()
            .find(|t| t.is_empty() || utils::has_whitespace(t))
        {
            return Err(PinkuError::InvalidInput(format!(
                "Invalid tag name: '{}' (tags cannot be empty or contain spaces)",
                tag
            )));
        }

        if let (Some(from), Some(to)) = (self.fromdt, self.todt) {
            if to < from {
                return Err(PinkuError::InvalidInput(format!(
                    "--todt ({}) is earlier than --fromdt ({})",
                    to.format("%Y-%m-%d"),
                    from.format("%Y-%m-%d")
                )));
            }
        }

        Ok(())
    }

    /// Returns the first local filter rejecting `bookmark`, if any.
    pub fn exclusion(&self, bookmark: &RemoteBookmark) -> Option<Exclusion> {
        if self.private_only && bookmark.shared {
            return Some(Exclusion::Shared);
        }
        if self.public_only && !bookmark.shared {
            return Some(Exclusion::Private);
        }
        if self.toread_only && !bookmark.toread {
            return Some(Exclusion::AlreadyRead);
        }
        if self.read_only && bookmark.toread {
            return Some(Exclusion::Unread);
        }
        None
    }
}
