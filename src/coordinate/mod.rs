//! The two coordinate representations handled by the projection: Geodetic
//! (latitude, longitude) and projected (easting, northing). Both are plain
//! `Copy` values, passed by value and owning nothing.
mod geodetic;
mod projected;

pub use geodetic::GeodeticCoordinate;
pub use projected::ProjectedCoordinate;
