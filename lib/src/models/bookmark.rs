use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bookmark as returned by Pinboard, after decoding the wire format
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteBookmark {
    pub url: String,
    pub title: String,
    /// Pinboard's "extended" description
    pub extended: String,
    pub tags: Vec<String>,
    /// Public when true, private when false
    pub shared: bool,
    pub toread: bool,
    pub time: DateTime<Utc>,
    /// Change detection signature, only present when requested with `meta`
    pub meta: Option<String>,
    pub hash: Option<String>,
}

impl RemoteBookmark {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_extended(mut self, extended: impl Into<String>) -> Self {
        self.extended = extended.into();
        self
    }

    pub fn shared(mut self, shared: bool) -> Self {
        self.shared = shared;
        self
    }

    pub fn toread(mut self, toread: bool) -> Self {
        self.toread = toread;
        self
    }
}

/// A row of Buku's `bookmarks` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocalRecord {
    pub id: usize,
    pub url: String,
    pub title: String,
    /// Comma-wrapped tag string, e.g. `,a,b,`
    pub tags: String,
    pub description: String,
}

impl LocalRecord {
    pub fn new(id: usize, url: String, title: String, tags: String, description: String) -> Self {
        Self {
            id,
            url,
            title,
            tags,
            description,
        }
    }
}
