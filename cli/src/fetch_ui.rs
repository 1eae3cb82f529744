use indicatif::{ProgressBar, ProgressStyle};
use pinku::db::BookmarkStore;
use pinku::error::Result;
use pinku::pinboard::BookmarkSource;
use pinku::{ImportReport, Importer, PinkuError};

/// Run an import with visual spinner feedback
///
/// The spinner draws to stderr and is hidden when stderr is not a terminal.
pub fn import_with_spinner<S, D>(importer: &Importer<S, D>, visible: bool) -> Result<ImportReport>
where
    S: BookmarkSource,
    D: BookmarkStore,
{
    let spinner = if visible {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }

    spinner.set_message("Fetching bookmarks from Pinboard...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = importer.import_bookmarks();

    match &result {
        Ok(report) => {
            log::debug!(
                "Fetched {}, filtered {}, already present {}",
                report.fetched,
                report.filtered_out,
                report.already_present
            );
            spinner.finish_and_clear();
        }
        Err(e) => spinner.finish_with_message(format!("✗ Import failed ({})", categorize_error(e))),
    }

    result
}

/// Categorize error for user-friendly display
pub fn categorize_error(error: &PinkuError) -> &'static str {
    match error {
        PinkuError::Api { status: 401, .. } => "unauthorized",
        PinkuError::Api { status: 429, .. } => "rate limited",
        PinkuError::Api { status, .. } if *status >= 500 => "server error",
        PinkuError::Api { .. } => "api error",
        PinkuError::Http(e) if e.is_timeout() => "timeout",
        PinkuError::Http(e) if e.is_connect() => "connection error",
        PinkuError::Http(_) => "fetch error",
        PinkuError::Json(_) => "unexpected response",
        PinkuError::Database(_) => "database error",
        _ => "error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(401, "unauthorized")]
    #[case(429, "rate limited")]
    #[case(503, "server error")]
    #[case(404, "api error")]
    fn test_categorize_api_error(#[case] status: u16, #[case] expected: &str) {
        let error = PinkuError::Api {
            status,
            message: String::new(),
        };
        assert_eq!(categorize_error(&error), expected);
    }

    #[rstest]
    #[case(PinkuError::Json("bad".into()), "unexpected response")]
    #[case(PinkuError::InvalidInput("bad".into()), "error")]
    fn test_categorize_other_errors(#[case] error: PinkuError, #[case] expected: &str) {
        assert_eq!(categorize_error(&error), expected);
    }
}
