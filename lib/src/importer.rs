//! Pinboard to Buku import pipeline.
//!
//! One pass, one process: check for changes, fetch, filter, dedup by URL,
//! insert. Only the insert step is allowed to fail per record; everything
//! else aborts the run.

use crate::db::BookmarkStore;
use crate::error::Result;
use crate::models::{FilterConfig, RemoteBookmark};
use crate::pinboard::BookmarkSource;
use crate::tags::format_tags;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A bookmark the store refused to insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedRecord {
    pub url: String,
    pub reason: String,
}

/// Outcome of one `import_bookmarks` run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Bookmarks inserted into the store
    pub added: usize,
    /// Bookmarks returned by Pinboard
    pub fetched: usize,
    /// Bookmarks skipped because their URL is already stored
    pub already_present: usize,
    /// Bookmarks rejected by the visibility or read filters
    pub filtered_out: usize,
    /// Set when the from-date guard found nothing new; holds Pinboard's last update time
    pub up_to_date: Option<DateTime<Utc>>,
    /// Bookmarks the store refused, in fetch order
    pub failures: Vec<FailedRecord>,
}

pub struct Importer<S, D> {
    source: S,
    store: D,
    filters: FilterConfig,
}

impl<S: BookmarkSource, D: BookmarkStore> Importer<S, D> {
    pub fn new(source: S, store: D, filters: FilterConfig) -> Self {
        Self {
            source,
            store,
            filters,
        }
    }

    pub fn store(&self) -> &D {
        &self.store
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn import_bookmarks(&self) -> Result<ImportReport> {
        if let Some(fromdt) = self.filters.fromdt {
            let last_update = self.source.last_update()?;
            if last_update <= fromdt {
                log::info!("No Pinboard bookmarks since {}", last_update);
                return Ok(ImportReport {
                    up_to_date: Some(last_update),
                    ..Default::default()
                });
            }
        }

        let records = self.source.all_posts(&self.filters)?;
        self.add_to_store(&records)
    }

    fn add_to_store(&self, records: &[RemoteBookmark]) -> Result<ImportReport> {
        let mut report = ImportReport {
            fetched: records.len(),
            ..Default::default()
        };

        for rec in records {
            if let Some(reason) = self.filters.exclusion(rec) {
                log::debug!("Skipping {}: {}", rec.url, reason);
                report.filtered_out += 1;
                continue;
            }

            if let Some(id) = self.store.get_rec_id(&rec.url)? {
                log::debug!("Skipping {}: already stored at index {}", rec.url, id);
                report.already_present += 1;
                continue;
            }

            let tags = format_tags(&rec.tags);
            match self.store.add_rec(&rec.url, &rec.title, &tags, &rec.extended) {
                Ok(id) => {
                    log::debug!("Added {} at index {}", rec.url, id);
                    report.added += 1;
                }
                Err(e) => {
                    log::debug!("Could not add '{}': {}", rec.url, e);
                    report.failures.push(FailedRecord {
                        url: rec.url.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        log::info!("Added {} bookmarks to Buku", report.added);
        Ok(report)
    }
}
