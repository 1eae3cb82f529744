use owo_colors::OwoColorize;
use pinku::ImportReport;

pub trait Colorize {
    fn to_colored(&self) -> String;
}

pub struct ColorizeReport<'a>(pub &'a ImportReport);

impl<'a> Colorize for ColorizeReport<'a> {
    fn to_colored(&self) -> String {
        let report = self.0;

        if let Some(last_update) = report.up_to_date {
            return format!(
                "{} {}",
                "No Pinboard bookmarks since".yellow(),
                last_update.to_string().bright_blue()
            );
        }

        let mut s = format!(
            "{} {} {}",
            "✓ Added".green(),
            report.added.to_string().bold().green(),
            "bookmarks to Buku".green()
        );

        // Only mention skipped records when there were any
        if report.already_present > 0 || report.filtered_out > 0 {
            s.push_str(&format!(
                "\n  {} already present, {} filtered out",
                report.already_present.to_string().yellow(),
                report.filtered_out.to_string().yellow()
            ));
        }
        if !report.failures.is_empty() {
            s.push_str(&format!(
                "\n  {} {}",
                report.failures.len().to_string().red(),
                "could not be added".red()
            ));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinku::importer::FailedRecord;

    #[test]
    fn test_colorize_counts() {
        let report = ImportReport {
            added: 2,
            fetched: 4,
            already_present: 1,
            filtered_out: 1,
            ..Default::default()
        };

        let colorized = ColorizeReport(&report).to_colored();
        assert!(colorized.contains("Added"));
        assert!(colorized.contains("already present"));
        assert!(!colorized.contains("could not be added"));
    }

    #[test]
    fn test_colorize_without_skips_is_single_line() {
        let report = ImportReport {
            added: 3,
            fetched: 3,
            ..Default::default()
        };

        let colorized = ColorizeReport(&report).to_colored();
        assert_eq!(colorized.lines().count(), 1);
    }

    #[test]
    fn test_colorize_failures() {
        let report = ImportReport {
            added: 1,
            fetched: 2,
            failures: vec![FailedRecord {
                url: "http://b.com".to_string(),
                reason: "disk full".to_string(),
            }],
            ..Default::default()
        };

        let colorized = ColorizeReport(&report).to_colored();
        assert!(colorized.contains("could not be added"));
    }
}
