use crate::math::angular;
use std::fmt;

/// Latitude and longitude, in radians, referred to the projection ellipsoid.
///
/// The latitude is expected in [-π/2, π/2]. The longitude is unrestricted:
/// The forward projection normalizes the difference from the central
/// meridian itself.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct GeodeticCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

// ----- C O N S T R U C T O R S ---------------------------------------------

/// Constructors
impl GeodeticCoordinate {
    /// A `GeodeticCoordinate` from latitude/longitude, with the angular input in degrees
    #[must_use]
    pub fn geo(latitude: f64, longitude: f64) -> GeodeticCoordinate {
        GeodeticCoordinate {
            latitude: latitude.to_radians(),
            longitude: longitude.to_radians(),
        }
    }

    /// A `GeodeticCoordinate` from latitude/longitude, with the angular input in radians
    #[must_use]
    pub fn raw(latitude: f64, longitude: f64) -> GeodeticCoordinate {
        GeodeticCoordinate {
            latitude,
            longitude,
        }
    }

    /// A `GeodeticCoordinate` from latitude/longitude given as
    /// (degrees, minutes, seconds) triplets
    #[must_use]
    pub fn dms(latitude: (i32, u16, f64), longitude: (i32, u16, f64)) -> GeodeticCoordinate {
        GeodeticCoordinate::geo(
            angular::dms_to_dd(latitude.0, latitude.1, latitude.2),
            angular::dms_to_dd(longitude.0, longitude.1, longitude.2),
        )
    }

    /// A `GeodeticCoordinate` consisting of 2 `NaN`s
    #[must_use]
    pub fn nan() -> GeodeticCoordinate {
        GeodeticCoordinate::raw(f64::NAN, f64::NAN)
    }
}

// ----- A C C E S S O R S ---------------------------------------------------

impl GeodeticCoordinate {
    /// The latitude, in degrees
    #[must_use]
    pub fn latitude_degrees(&self) -> f64 {
        self.latitude.to_degrees()
    }

    /// The longitude, in degrees
    #[must_use]
    pub fn longitude_degrees(&self) -> f64 {
        self.longitude.to_degrees()
    }

    /// (latitude, longitude) in degrees
    #[must_use]
    pub fn to_degrees(&self) -> (f64, f64) {
        (self.latitude_degrees(), self.longitude_degrees())
    }

    /// The larger of the absolute latitude and longitude differences, in radians.
    /// Crude, but it is what the round trip tolerances are stated in.
    #[must_use]
    pub fn max_abs_difference(&self, other: &GeodeticCoordinate) -> f64 {
        (self.latitude - other.latitude)
            .abs()
            .max((self.longitude - other.longitude).abs())
    }
}

/// Degrees with 6 decimals, as the licence reports want them
impl fmt::Display for GeodeticCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);
        write!(
            f,
            "{:.*} {:.*}",
            precision,
            self.latitude_degrees(),
            precision,
            self.longitude_degrees()
        )
    }
}

// ----- T E S T S ---------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn constructors() {
        let c = GeodeticCoordinate::geo(-41.2865, 174.7762);
        let d = GeodeticCoordinate::raw(-41.2865_f64.to_radians(), 174.7762_f64.to_radians());
        assert_eq!(c, d);
        assert_eq!(c.latitude_degrees(), (-41.2865_f64).to_radians().to_degrees());

        let e = GeodeticCoordinate::dms((-41, 17, 11.4), (174, 46, 34.32));
        assert!(e.max_abs_difference(&c) < 1e-12);

        assert!(GeodeticCoordinate::nan().latitude.is_nan());
    }

    #[test]
    fn display() {
        let c = GeodeticCoordinate::geo(-41.2865, 174.7762);
        assert_eq!(c.to_string(), "-41.286500 174.776200");
        assert_eq!(format!("{c:.2}"), "-41.29 174.78");
        let (lat, lon) = c.to_degrees();
        assert_float_eq!(lat, -41.2865, abs <= 1e-12);
        assert_float_eq!(lon, 174.7762, abs <= 1e-12);
    }
}
