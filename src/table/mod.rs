//! Fetch the museums page and turn its first table into a cleaned dataset.

pub mod builder;
pub mod fetch;
pub mod html;
pub mod outliers;

pub use builder::{BuilderSettings, TableBuilder};
pub use fetch::{HttpPageFetcher, PageFetcher, StaticPageFetcher};
pub use html::{parse_first_table, HtmlTable};
