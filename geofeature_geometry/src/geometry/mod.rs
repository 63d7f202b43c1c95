// Geometry types held by a feature: points, line strings, polygons, their multi-geometry
// counterparts and geometry collections. Every type converts to and from the GeoJSON
// coordinate arrays through `GeometryTrait`; the `Geometry` enum adds the `type`
// discriminant on top.
#![allow(clippy::module_inception)]

mod coordinates;
mod geometry;
mod line_string;
mod macros;
mod multi_line_string;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use geometry::*;
pub use line_string::*;
pub use multi_line_string::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
