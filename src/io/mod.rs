//! File format reading and writing, organized by format.
//!
//! - `csv` - results tables in, summary tables out
//! - `geojson` - district boundaries
//! - `png` - watermark images in, infographics out

pub(crate) mod csv;
pub(crate) mod geojson;
pub(crate) mod png;
