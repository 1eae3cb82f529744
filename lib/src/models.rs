pub mod bookmark;
pub mod filter;

pub use bookmark::{LocalRecord, RemoteBookmark};
pub use filter::FilterConfig;
