//! *New Zealand Transverse Mercator and the Topo50 map sheet grid*.
//!
//! Conversion between ellipsoidal latitude/longitude and NZTM2000
//! easting/northing, using the series solution of
//! [Redfearn (1948)](crate::Bibliography::Red48) as expressed in the
//! [GDA Technical Manual](crate::Bibliography::Icsm02), plus the map sheet
//! indexing that turns a projected coordinate into a Topo50 grid reference
//! ("BQ31 487 279") and back.
//!
//! ```
//! use nztm::prelude::*;
//!
//! let wellington = GeodeticCoordinate::geo(-41.2865, 174.7762);
//! let projected = geodetic_to_nztm(wellington);
//! let topo50 = MapSheetIndex::topo50()?;
//! let reference = topo50.grid_reference(projected, Precision::Standard)?;
//! assert_eq!(reference.to_string(), "BQ31 487 279");
//! # Ok::<(), nztm::Error>(())
//! ```

mod bibliography;
mod coordinate;
mod ellipsoid;
mod projection;
mod topo50;

pub mod math;

pub use bibliography::Bibliography;
pub use coordinate::GeodeticCoordinate;
pub use coordinate::ProjectedCoordinate;
pub use ellipsoid::Ellipsoid;
pub use projection::nztm;
pub use projection::nztm::geodetic_to_nztm;
pub use projection::nztm::nztm_to_geodetic;
pub use projection::tmerc;
pub use projection::ProjectionParameters;
pub use topo50::GridReference;
pub use topo50::MapSheetExtent;
pub use topo50::MapSheetIndex;
pub use topo50::Precision;

/// The bread-and-butter, shrink-wrapped and ready to use
pub mod prelude {
    pub use crate::coordinate::GeodeticCoordinate;
    pub use crate::coordinate::ProjectedCoordinate;
    pub use crate::ellipsoid::Ellipsoid;
    pub use crate::projection::nztm::{geodetic_to_nztm, nztm_to_geodetic};
    pub use crate::projection::ProjectionParameters;
    pub use crate::topo50::{GridReference, MapSheetExtent, MapSheetIndex, Precision};
    pub use crate::Error;
}

use thiserror::Error;

/// The *Rust NZTM* errors reported to the calling application
#[derive(Error, Debug)]
pub enum Error {
    #[error("i/o error")]
    Io(#[from] std::io::Error),

    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("malformed value for {0}: {1}")]
    BadParam(String, String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("no map sheet covers E{easting} N{northing}")]
    SheetNotFound { easting: f64, northing: f64 },

    #[error("unknown map sheet code: {0}")]
    UnknownSheetCode(String),
}
