mod boundaries;
mod fit;
mod proj;

pub use boundaries::DistrictBoundaries;
pub use fit::FittedMap;
pub use proj::AlbersProjection;
