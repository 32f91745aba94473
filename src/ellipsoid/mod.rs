mod meridians;

use crate::Error;

/// Representation of a biaxial reference ellipsoid.
///
/// Constructed from the semimajor axis and the *inverse* flattening, as
/// geodetic datum definitions usually publish them. An inverse flattening
/// of 0 encodes a sphere. The eccentricities are computed once, at
/// construction, since every projection call needs them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    rf: f64,
    f: f64,
    es: f64,
    eps: f64,
}

/// GRS80 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        Ellipsoid::new(6_378_137.0, 298.257_222_101)
    }
}

// Name, semimajor axis, inverse flattening
#[rustfmt::skip]
const ELLIPSOIDS: [(&str, f64, f64); 7] = [
    ("GRS80",   6_378_137.0,   298.257_222_101),
    ("WGS84",   6_378_137.0,   298.257_223_563),
    ("intl",    6_378_388.0,   297.0),
    ("Helmert", 6_378_200.0,   298.3),
    ("clrk66",  6_378_206.4,   294.978_698_2),
    ("clrk80",  6_378_249.145, 293.465),
    ("bessel",  6_377_397.155, 299.152_812_8),
];

impl Ellipsoid {
    /// User defined ellipsoid. The semimajor axis must be positive, and the
    /// inverse flattening non-negative: Anything else is a programming error.
    #[must_use]
    pub fn new(semimajor_axis: f64, inverse_flattening: f64) -> Ellipsoid {
        debug_assert!(semimajor_axis > 0.0, "semimajor axis must be positive");
        debug_assert!(inverse_flattening >= 0.0, "inverse flattening must be >= 0");

        let f = if inverse_flattening != 0.0 {
            1.0 / inverse_flattening
        } else {
            0.0
        };
        let es = 2.0 * f - f * f;
        Ellipsoid {
            a: semimajor_axis,
            rf: inverse_flattening,
            f,
            es,
            eps: es / (1.0 - es),
        }
    }

    /// A sphere of radius `radius`
    #[must_use]
    pub fn sphere(radius: f64) -> Ellipsoid {
        Ellipsoid::new(radius, 0.0)
    }

    /// Predefined ellipsoid
    pub fn named(name: &str) -> Result<Ellipsoid, Error> {
        ELLIPSOIDS
            .iter()
            .find(|e| e.0 == name)
            .map(|e| Ellipsoid::new(e.1, e.2))
            .ok_or_else(|| Error::NotFound(format!("ellipsoid {name}")))
    }

    // ----- Size ------------------------------------------------------------------

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    // ----- Flattenings -----------------------------------------------------------

    /// The inverse flattening, *1/f*. Zero for a sphere.
    #[must_use]
    pub fn inverse_flattening(&self) -> f64 {
        self.rf
    }

    /// The flattening, *f = (a - b)/a*
    #[must_use]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    /// The third flattening, *n = (a - b) / (a + b) = f / (2 - f)*
    #[must_use]
    pub fn third_flattening(&self) -> f64 {
        self.f / (2.0 - self.f)
    }

    // ----- Eccentricities --------------------------------------------------------

    /// The squared eccentricity *e² = 2f - f²*.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.es
    }

    /// The eccentricity *e*
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.es.sqrt()
    }

    /// The squared second eccentricity *e'² = e² / (1 - e²)*
    #[must_use]
    pub fn second_eccentricity_squared(&self) -> f64 {
        self.eps
    }

    // ----- Curvatures ------------------------------------------------------------

    /// The radius of curvature in the prime vertical, *N* (ν in Redfearn's notation)
    #[must_use]
    pub fn prime_vertical_radius_of_curvature(&self, latitude: f64) -> f64 {
        let s = latitude.sin();
        self.a / (1.0 - self.es * s * s).sqrt()
    }

    /// The meridian radius of curvature, *M* (ρ in Redfearn's notation)
    #[must_use]
    pub fn meridian_radius_of_curvature(&self, latitude: f64) -> f64 {
        let s = latitude.sin();
        let w2 = 1.0 - self.es * s * s;
        self.a / w2.sqrt() * (1.0 - self.es) / w2
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn test_ellipsoid() -> Result<(), Error> {
        // Constructors
        let ellps = Ellipsoid::named("intl")?;
        assert_eq!(ellps.flattening(), 1. / 297.);
        assert_eq!(ellps.inverse_flattening(), 297.);

        let ellps = Ellipsoid::named("GRS80")?;
        assert_eq!(ellps.semimajor_axis(), 6378137.0);
        assert_eq!(ellps.flattening(), 1. / 298.257222101);
        assert_eq!(ellps, Ellipsoid::default());

        assert!(matches!(
            Ellipsoid::named("banana"),
            Err(Error::NotFound(_))
        ));
        Ok(())
    }

    #[test]
    fn shape_and_size() -> Result<(), Error> {
        let ellps = Ellipsoid::named("GRS80")?;

        assert_float_eq!(ellps.eccentricity(), 0.081819191, abs <= 1.0e-9);
        assert_float_eq!(
            ellps.eccentricity_squared(),
            0.006_694_380_022_90,
            abs <= 1.0e-13
        );
        assert_float_eq!(
            ellps.second_eccentricity_squared(),
            0.006_739_496_775_48,
            abs <= 1.0e-13
        );
        assert_float_eq!(ellps.semiminor_axis(), 6_356_752.314_140, abs <= 1e-6);
        assert_float_eq!(ellps.third_flattening(), 0.001_679_220_394_63, abs <= 1e-14);
        Ok(())
    }

    #[test]
    fn sphere() {
        let sphere = Ellipsoid::sphere(6_371_000.0);
        assert_eq!(sphere.flattening(), 0.0);
        assert_eq!(sphere.eccentricity_squared(), 0.0);
        assert_eq!(sphere.second_eccentricity_squared(), 0.0);
        assert_eq!(sphere.semiminor_axis(), 6_371_000.0);
        assert_eq!(sphere.meridian_radius_of_curvature(0.7), 6_371_000.0);
    }

    #[test]
    fn curvatures() -> Result<(), Error> {
        let ellps = Ellipsoid::named("GRS80")?;
        let pole = 90_f64.to_radians();

        // The curvatures at the North Pole
        assert_float_eq!(ellps.meridian_radius_of_curvature(pole), 6_399_593.6259, abs <= 1e-4);
        assert_float_eq!(
            ellps.prime_vertical_radius_of_curvature(pole),
            6_399_593.6259,
            abs <= 1e-4
        );

        // The curvatures at the Equator
        assert_float_eq!(ellps.meridian_radius_of_curvature(0.0), 6_335_439.3271, abs <= 1e-4);
        assert_eq!(ellps.prime_vertical_radius_of_curvature(0.0), ellps.semimajor_axis());
        Ok(())
    }
}
