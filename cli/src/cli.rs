use crate::fetch_ui::import_with_spinner;
use crate::format::ReportFormat;
use chrono::{DateTime, NaiveDate, Utc};
use clap::Parser;
use pinku::config::Config;
use pinku::db::BukuDb;
use pinku::error::Result;
use pinku::models::FilterConfig;
use pinku::pinboard::PinboardClient;
use pinku::{utils, Importer};
use std::path::PathBuf;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const API_KEY_VAR: &str = "PINBOARD_API_KEY";

/// The Pinboard token from the environment value, if it is usable
pub fn api_key(value: Option<String>) -> Option<String> {
    value.filter(|key| !key.trim().is_empty())
}

/// Parse a `YYYY-MM-DD` argument into midnight UTC of that day
pub fn parse_date(value: &str) -> std::result::Result<DateTime<Utc>, String> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| {
            format!(
                "Not a valid date: '{}'. Dates must be in 'Year-month-day' format",
                value
            )
        })
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Import Pinboard bookmarks into a Buku database", long_about = None)]
pub struct Cli {
    /// Filter by up to three tags
    #[arg(short = 't', long = "tag", num_args = 1..=3)]
    pub tags: Vec<String>,

    /// Offset value
    #[arg(short = 's', long)]
    pub start: Option<usize>,

    /// Number of results to return
    #[arg(short = 'r', long)]
    pub results: Option<usize>,

    /// Return only bookmarks created after this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub fromdt: Option<DateTime<Utc>>,

    /// Return only bookmarks created before this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub todt: Option<DateTime<Utc>>,

    /// Request change detection signatures from Pinboard
    #[arg(long)]
    pub meta: bool,

    /// Import only private bookmarks
    #[arg(long)]
    pub private: bool,

    /// Import only public bookmarks
    #[arg(long)]
    pub public: bool,

    /// Import only unread bookmarks
    #[arg(long)]
    pub toread: bool,

    /// Import only read bookmarks
    #[arg(long)]
    pub read: bool,

    /// Optional custom Buku database file path
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Optional custom configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long)]
    pub nc: bool,

    /// Report format: plain, json, yaml or toml
    #[arg(short = 'f', long)]
    pub format: Option<String>,

    /// Show debug information
    #[arg(short = 'g', long = "debug")]
    pub debug: bool,
}

impl Cli {
    pub fn filters(&self) -> FilterConfig {
        FilterConfig {
            tags: self.tags.clone(),
            start: self.start,
            results: self.results,
            fromdt: self.fromdt,
            todt: self.todt,
            meta: self.meta,
            private_only: self.private,
            public_only: self.public,
            toread_only: self.toread,
            read_only: self.read,
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.db.clone().unwrap_or_else(utils::get_default_dbpath)
    }
}

/// Run one import with an explicit Pinboard credential
pub fn run(args: &Cli, api_key: &str) -> Result<()> {
    let filters = args.filters();
    filters.validate()?;

    let cfg = if let Some(config_path) = &args.config {
        Config::load_from_path(config_path)?
    } else {
        Config::load()
    };

    let db_path = args.db_path();
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    log::debug!("Using Buku database at {:?}", db_path);

    let db = BukuDb::init(&db_path)?;
    let client = PinboardClient::new(api_key, &cfg)?;
    let importer = Importer::new(client, db, filters);

    let report_format = args
        .format
        .as_deref()
        .map(ReportFormat::from_string)
        .unwrap_or(ReportFormat::Plain);

    let report = import_with_spinner(&importer, report_format.is_plain())?;
    report_format.print_report(&report, args.nc)?;
    Ok(())
}
