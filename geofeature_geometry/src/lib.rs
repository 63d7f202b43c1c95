//! GeoJSON Feature model: geometries, the [`GeoFeature`] entity with its geocoding
//! [`Properties`], and the GeoJSON encoder/decoder in [`geojson`].

mod feature;
pub mod geojson;
pub mod geometry;

pub use feature::*;
pub use geojson::*;
pub use geometry::*;
