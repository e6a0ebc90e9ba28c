//! GeoJSON boundary reading.

mod read;

pub(crate) use read::*;
