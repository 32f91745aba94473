//! New Zealand Transverse Mercator 2000, as defined in
//! [LINZS25002](crate::Bibliography::LinzS25002).
//!
//! The projection parameters are fixed: A single immutable instance is
//! built on first use and shared by everyone.
use once_cell::sync::Lazy;

use crate::coordinate::{GeodeticCoordinate, ProjectedCoordinate};
use crate::projection::ProjectionParameters;

/// Semimajor axis of the GRS80 ellipsoid (metres)
pub const NZTM_A: f64 = 6_378_137.0;
/// Inverse flattening of the GRS80 ellipsoid
pub const NZTM_RF: f64 = 298.257_222_101;
/// Central meridian (degrees)
pub const NZTM_CM: f64 = 173.0;
/// Origin latitude (degrees)
pub const NZTM_OLAT: f64 = 0.0;
/// Scale factor on the central meridian
pub const NZTM_SF: f64 = 0.9996;
/// False easting (metres)
pub const NZTM_FE: f64 = 1_600_000.0;
/// False northing (metres)
pub const NZTM_FN: f64 = 10_000_000.0;

static NZTM: Lazy<ProjectionParameters> = Lazy::new(projection);

/// A fresh NZTM projection definition
#[must_use]
pub fn projection() -> ProjectionParameters {
    ProjectionParameters::new(
        NZTM_A,
        NZTM_RF,
        NZTM_CM.to_radians(),
        NZTM_SF,
        NZTM_OLAT.to_radians(),
        NZTM_FE,
        NZTM_FN,
        1.0,
    )
}

/// The process wide NZTM projection
#[must_use]
pub fn nztm() -> &'static ProjectionParameters {
    &NZTM
}

/// Latitude/longitude (NZGD2000) to NZTM easting/northing
#[must_use]
pub fn geodetic_to_nztm(geo: GeodeticCoordinate) -> ProjectedCoordinate {
    NZTM.fwd(geo)
}

/// NZTM easting/northing to latitude/longitude (NZGD2000)
#[must_use]
pub fn nztm_to_geodetic(projected: ProjectedCoordinate) -> GeodeticCoordinate {
    NZTM.inv(projected)
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    // The three check points of the NZ coordinate conversion utility, with
    // latitude/longitude pinned as golden values
    #[rustfmt::skip]
    const CHECK_POINTS: [(f64, f64, f64, f64); 3] = [
        (1576041.15, 6188574.24, -34.444_065_991_045_33, 172.739_193_967_394_16),
        (1576542.01, 5515331.05, -40.512_408_979_770_456, 172.723_105_967_535_67),
        (1307103.22, 4826464.86, -46.651_295_012_187_36, 169.172_062_008_054_07),
    ];

    #[test]
    fn parameters() {
        let tm = nztm();
        assert_eq!(tm.central_meridian(), 173_f64.to_radians());
        assert_eq!(tm.scale_factor(), 0.9996);
        assert_eq!(tm.false_easting(), 1_600_000.);
        assert_eq!(tm.false_northing(), 10_000_000.);
        assert_eq!(tm.unit_to_metre(), 1.0);
        assert_eq!(tm.meridian_arc_at_origin(), 0.0);
        assert_eq!(tm.ellipsoid().inverse_flattening(), 298.257222101);
        assert_eq!(*tm, projection());
    }

    #[test]
    fn check_points() {
        for (easting, northing, lat, lon) in CHECK_POINTS {
            let projected = ProjectedCoordinate::raw(easting, northing);
            let geo = nztm_to_geodetic(projected);
            assert_float_eq!(geo.latitude_degrees(), lat, abs <= 1e-9);
            assert_float_eq!(geo.longitude_degrees(), lon, abs <= 1e-9);

            // And back again, to within a centimetre
            let back = geodetic_to_nztm(geo);
            assert!(back.hypot2(&projected) < 0.01);
        }
    }

    #[test]
    fn cities() {
        // Golden values
        #[rustfmt::skip]
        let cities = [
            (-41.2865, 174.7762, 1_748_735.553_060_300_2, 5_427_916.478_721_41),   // Wellington
            (-36.8485, 174.7633, 1_757_209.253_477_870_3, 5_920_482.808_800_593),  // Auckland
            (-43.5321, 172.6362, 1_570_604.409_169_915_8, 5_180_029.367_363_863),  // Christchurch
            (-45.8788, 170.5028, 1_406_216.074_371_976_3, 4_916_386.023_464_05),   // Dunedin
        ];
        for (lat, lon, easting, northing) in cities {
            let p = geodetic_to_nztm(GeodeticCoordinate::geo(lat, lon));
            assert_float_eq!(p.easting, easting, abs <= 1e-6);
            assert_float_eq!(p.northing, northing, abs <= 1e-6);
        }
    }

    #[test]
    fn roundtrip() {
        // latitude/longitude -> NZTM -> latitude/longitude, all over the country
        for lat in -47..=-34 {
            for lon in 166..=179 {
                let geo = GeodeticCoordinate::geo(f64::from(lat), f64::from(lon));
                let back = nztm_to_geodetic(geodetic_to_nztm(geo));
                assert!(back.max_abs_difference(&geo) < 1e-6);
            }
        }

        // NZTM -> latitude/longitude -> NZTM
        for lat in -47..=-34 {
            for lon in 167..=179 {
                let geo = GeodeticCoordinate::geo(f64::from(lat), f64::from(lon));
                let projected = geodetic_to_nztm(geo);
                let back = geodetic_to_nztm(nztm_to_geodetic(projected));
                assert_float_eq!(back.easting, projected.easting, abs <= 1e-3);
                assert_float_eq!(back.northing, projected.northing, abs <= 1e-3);
            }
        }
    }

    #[test]
    fn shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let geo = GeodeticCoordinate::geo(-40. - f64::from(i), 172. + f64::from(i));
                    nztm_to_geodetic(geodetic_to_nztm(geo)).max_abs_difference(&geo)
                })
            })
            .collect();
        for handle in handles {
            let deviation = handle.join().unwrap();
            assert!(deviation < 1e-6);
        }
    }
}
