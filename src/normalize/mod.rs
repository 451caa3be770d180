//! Field normalizers applied to every scraped museum row.
//!
//! Both normalizers return `Option`s: a value that cannot be normalized is a
//! row-level miss, never an error.

pub mod countries;
pub mod geo;
pub mod numeric;

pub use geo::{clean_city_name, country_to_iso2};
pub use numeric::normalize_visitor_count;
