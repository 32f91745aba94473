//! Transverse Mercator projection definitions.
//!
//! A [ProjectionParameters] is built once, and is immutable from then on:
//! It is `Copy`, `Send` and `Sync`, so any number of threads may project
//! through the same instance without coordination.
pub mod nztm;
pub mod tmerc;

use crate::coordinate::{GeodeticCoordinate, ProjectedCoordinate};
use crate::ellipsoid::Ellipsoid;

/// The definition of a specific Transverse Mercator projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionParameters {
    ellps: Ellipsoid,
    central_meridian: f64,
    origin_latitude: f64,
    scale_factor: f64,
    false_easting: f64,
    false_northing: f64,
    unit_to_metre: f64,
    // Meridian arc from the equator to the origin latitude. Needed by every
    // projection call, so computed once, here.
    meridian_arc_at_origin: f64,
}

impl ProjectionParameters {
    /// Projection parameters from the ellipsoid size and shape
    /// (semimajor axis `a`, inverse flattening `rf`), the central meridian
    /// `cm` (radians), the scale factor `sf` on the central meridian, the
    /// origin latitude `lat_0` (radians), the false easting and northing
    /// (in output units), and the output-unit-to-metre factor.
    ///
    /// No validation: `a > 0` and `rf >= 0` are preconditions.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        a: f64,
        rf: f64,
        cm: f64,
        sf: f64,
        lat_0: f64,
        x_0: f64,
        y_0: f64,
        unit_to_metre: f64,
    ) -> ProjectionParameters {
        ProjectionParameters::with_ellipsoid(
            Ellipsoid::new(a, rf),
            cm,
            sf,
            lat_0,
            x_0,
            y_0,
            unit_to_metre,
        )
    }

    /// As [new](ProjectionParameters::new), but for an already constructed
    /// ellipsoid. The ellipsoid is copied into the projection.
    #[must_use]
    pub fn with_ellipsoid(
        ellps: Ellipsoid,
        cm: f64,
        sf: f64,
        lat_0: f64,
        x_0: f64,
        y_0: f64,
        unit_to_metre: f64,
    ) -> ProjectionParameters {
        ProjectionParameters {
            ellps,
            central_meridian: cm,
            origin_latitude: lat_0,
            scale_factor: sf,
            false_easting: x_0,
            false_northing: y_0,
            unit_to_metre,
            meridian_arc_at_origin: ellps.meridian_arc(lat_0),
        }
    }

    /// Geodetic to projected
    #[must_use]
    pub fn fwd(&self, geo: GeodeticCoordinate) -> ProjectedCoordinate {
        tmerc::forward(self, geo)
    }

    /// Projected to geodetic
    #[must_use]
    pub fn inv(&self, projected: ProjectedCoordinate) -> GeodeticCoordinate {
        tmerc::inverse(self, projected)
    }

    // ----- Accessors -------------------------------------------------------------

    #[must_use]
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellps
    }

    /// Radians
    #[must_use]
    pub fn central_meridian(&self) -> f64 {
        self.central_meridian
    }

    /// Radians
    #[must_use]
    pub fn origin_latitude(&self) -> f64 {
        self.origin_latitude
    }

    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    #[must_use]
    pub fn false_easting(&self) -> f64 {
        self.false_easting
    }

    #[must_use]
    pub fn false_northing(&self) -> f64 {
        self.false_northing
    }

    #[must_use]
    pub fn unit_to_metre(&self) -> f64 {
        self.unit_to_metre
    }

    #[must_use]
    pub fn meridian_arc_at_origin(&self) -> f64 {
        self.meridian_arc_at_origin
    }
}

// ----- Tests ---------------------------------------------------------------------
