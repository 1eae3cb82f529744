use crate::output::colorize::{Colorize, ColorizeReport};
use pinku::error::Result;
use pinku::{ImportReport, PinkuError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Yaml,
    Toml,
    Plain,
}

impl ReportFormat {
    pub fn from_string(format: &str) -> Self {
        match format {
            "json" => ReportFormat::Json,
            "yaml" | "yml" => ReportFormat::Yaml,
            "toml" => ReportFormat::Toml,
            _ => ReportFormat::Plain,
        }
    }

    pub fn is_plain(self) -> bool {
        self == ReportFormat::Plain
    }

    /// Serialize the report for the machine-readable formats
    pub fn render(self, report: &ImportReport) -> Result<String> {
        match self {
            ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            ReportFormat::Yaml => Ok(serde_yaml::to_string(report)?),
            ReportFormat::Toml => {
                toml::to_string(report).map_err(|e| PinkuError::Other(e.to_string()))
            }
            ReportFormat::Plain => Ok(plain_summary(report)),
        }
    }

    pub fn print_report(self, report: &ImportReport, no_color: bool) -> Result<()> {
        match self {
            ReportFormat::Plain => {
                for line in failure_lines(report) {
                    eprintln!("{}", line);
                }
                if no_color {
                    println!("{}", plain_summary(report));
                } else {
                    println!("{}", ColorizeReport(report).to_colored());
                }
            }
            _ => println!("{}", self.render(report)?),
        }
        Ok(())
    }
}

/// One line per bookmark the store refused
pub fn failure_lines(report: &ImportReport) -> Vec<String> {
    report
        .failures
        .iter()
        .map(|f| format!("Could not add '{}': {}", f.url, f.reason))
        .collect()
}

pub fn plain_summary(report: &ImportReport) -> String {
    match report.up_to_date {
        Some(last_update) => format!("No Pinboard bookmarks since {}", last_update),
        None => format!("Added {} bookmarks to Buku", report.added),
    }
}
