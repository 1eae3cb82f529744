pub mod config;
pub mod db;
pub mod error;
pub mod importer;
pub mod models;
pub mod pinboard;
pub mod tags;
pub mod utils;

// Re-export error types for convenience
pub use error::PinkuError;
pub use importer::{ImportReport, Importer};
