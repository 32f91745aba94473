//! Transverse Mercator, following Redfearn (1948)
//!
//! The direct and inverse series of [Redfearn](crate::Bibliography::Red48),
//! truncated at the 8th power of the longitude difference, in the nested form
//! of the [GDA Technical Manual](crate::Bibliography::Icsm02). Good to the
//! centimetre within a few degrees of the central meridian, degrading
//! gracefully beyond. Nothing is checked, and nothing fails: Both directions
//! are total functions over the finite doubles.
//!
//! The coefficient polynomials are kept in exactly the published nesting,
//! so results agree with other implementations of the GDA formulae to the
//! last bit or so.
use crate::coordinate::{GeodeticCoordinate, ProjectedCoordinate};
use crate::math::angular;
use crate::projection::ProjectionParameters;

// Radii of curvature in the prime vertical (ν) and meridian (ρ), and their ratio ψ
fn curvatures(tm: &ProjectionParameters, latitude: f64) -> (f64, f64, f64) {
    let ellps = tm.ellipsoid();
    let eta = ellps.prime_vertical_radius_of_curvature(latitude);
    let rho = ellps.meridian_radius_of_curvature(latitude);
    (eta, rho, eta / rho)
}

// ----- F O R W A R D -----------------------------------------------------------------

/// Geodetic to Transverse Mercator
#[must_use]
pub fn forward(tm: &ProjectionParameters, geo: GeodeticCoordinate) -> ProjectedCoordinate {
    let sf = tm.scale_factor();
    let utom = tm.unit_to_metre();
    let lat = geo.latitude;

    // The longitude as reckoned from the central meridian
    let dlon = angular::normalize_longitude(geo.longitude - tm.central_meridian());

    let m = tm.ellipsoid().meridian_arc(lat);
    let (eta, _rho, psi) = curvatures(tm, lat);

    let (slt, clt) = lat.sin_cos();
    let wc = clt * dlon;
    let wc2 = wc * wc;

    let t = slt / clt;
    let t2 = t * t;
    let t4 = t2 * t2;
    let t6 = t2 * t4;

    // Easting
    let trm1 = (psi - t2) / 6.0;

    let trm2 = (((4.0 * (1.0 - 6.0 * t2) * psi + (1.0 + 8.0 * t2)) * psi - 2.0 * t2) * psi + t4)
        / 120.0;

    let trm3 = (61.0 - 479.0 * t2 + 179.0 * t4 - t6) / 5040.0;

    let gce = (sf * eta * dlon * clt) * (((trm3 * wc2 + trm2) * wc2 + trm1) * wc2 + 1.0);
    let easting = gce / utom + tm.false_easting();

    // Northing
    let trm1 = 1.0 / 2.0;

    let trm2 = ((4.0 * psi + 1.0) * psi - t2) / 24.0;

    let trm3 = ((((8.0 * (11.0 - 24.0 * t2) * psi - 28.0 * (1.0 - 6.0 * t2)) * psi
        + (1.0 - 32.0 * t2))
        * psi
        - 2.0 * t2)
        * psi
        + t4)
        / 720.0;

    let trm4 = (1385.0 - 3111.0 * t2 + 543.0 * t4 - t6) / 40320.0;

    let gcn = (eta * t) * ((((trm4 * wc2 + trm3) * wc2 + trm2) * wc2 + trm1) * wc2);
    let northing = (gcn + m - tm.meridian_arc_at_origin()) * sf / utom + tm.false_northing();

    ProjectedCoordinate::raw(easting, northing)
}

// ----- I N V E R S E -----------------------------------------------------------------

/// Transverse Mercator to geodetic.
///
/// The longitude is returned as reckoned from the central meridian plus
/// the correction, i.e. not normalized: Points east of the antimeridian
/// come back with longitudes above π.
#[must_use]
pub fn inverse(tm: &ProjectionParameters, projected: ProjectedCoordinate) -> GeodeticCoordinate {
    let sf = tm.scale_factor();
    let utom = tm.unit_to_metre();

    // --- 1. The foot-point latitude: Where the meridian arc equals the true northing

    let cn1 = (projected.northing - tm.false_northing()) * utom / sf + tm.meridian_arc_at_origin();
    let fphi = tm.ellipsoid().footpoint_latitude(cn1);
    let (slt, clt) = fphi.sin_cos();

    let (eta, rho, psi) = curvatures(tm, fphi);

    // --- 2. Normalized easting

    let e = (projected.easting - tm.false_easting()) * utom;
    let x = e / (eta * sf);
    let x2 = x * x;

    let t = slt / clt;
    let t2 = t * t;
    let t4 = t2 * t2;

    // --- 3. Latitude correction

    let trm1 = 1.0 / 2.0;

    let trm2 = ((-4.0 * psi + 9.0 * (1.0 - t2)) * psi + 12.0 * t2) / 24.0;

    let trm3 = ((((8.0 * (11.0 - 24.0 * t2) * psi - 12.0 * (21.0 - 71.0 * t2)) * psi
        + 15.0 * ((15.0 * t2 - 98.0) * t2 + 15.0))
        * psi
        + 180.0 * ((-3.0 * t2 + 5.0) * t2))
        * psi
        + 360.0 * t4)
        / 720.0;

    let trm4 = (((1575.0 * t2 + 4095.0) * t2 + 3633.0) * t2 + 1385.0) / 40320.0;

    let latitude = fphi + (t * x * e / (sf * rho)) * (((trm4 * x2 - trm3) * x2 + trm2) * x2 - trm1);

    // --- 4. Longitude correction

    let trm1 = 1.0;

    let trm2 = (psi + 2.0 * t2) / 6.0;

    let trm3 = (((-4.0 * (1.0 - 6.0 * t2) * psi + (9.0 - 68.0 * t2)) * psi + 72.0 * t2) * psi
        + 24.0 * t4)
        / 120.0;

    let trm4 = (((720.0 * t2 + 1320.0) * t2 + 662.0) * t2 + 61.0) / 5040.0;

    let longitude =
        tm.central_meridian() - (x / clt) * (((trm4 * x2 - trm3) * x2 + trm2) * x2 - trm1);

    GeodeticCoordinate::raw(latitude, longitude)
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ellipsoid::Ellipsoid;
    use float_eq::assert_float_eq;

    fn utm32() -> ProjectionParameters {
        ProjectionParameters::with_ellipsoid(
            Ellipsoid::default(),
            9_f64.to_radians(),
            0.9996,
            0.0,
            500_000.,
            0.,
            1.0,
        )
    }

    #[test]
    fn tmerc() {
        // Validation values from PROJ (Poder/Engsager):
        // echo 12 55 0 0 | cct -d18 +proj=utm +zone=32 | clip
        // Redfearn agrees to better than a millimetre, 3° off the central meridian
        #[rustfmt::skip]
        let geo = [
            GeodeticCoordinate::geo( 55.,  12.),
            GeodeticCoordinate::geo(-55.,  12.),
        ];

        #[rustfmt::skip]
        let projected = [
            ProjectedCoordinate::raw( 691_875.632_139_661, 6_098_907.825_005_012),
            ProjectedCoordinate::raw( 691_875.632_139_661,-6_098_907.825_005_012),
        ];

        let tm = utm32();
        for (g, p) in geo.iter().zip(projected.iter()) {
            let result = forward(&tm, *g);
            assert!(result.hypot2(p) < 1e-3);

            let back = inverse(&tm, result);
            assert!(back.max_abs_difference(g) < 1e-9);
        }
    }

    #[test]
    fn origin_latitude_and_offsets() {
        // Test involving scale and all offsets. Expected value from PROJ:
        // echo 1 52 0 0 | cct -d 15 proj=tmerc lat_0=49 lon_0=-2 k_0=0.9996012717 x_0=400000 y_0=-100000 ellps=airy  --
        let tm = ProjectionParameters::new(
            6_377_563.396,
            299.324_964_6,
            (-2_f64).to_radians(),
            0.999_601_271_7,
            49_f64.to_radians(),
            400_000.,
            -100_000.,
            1.0,
        );

        let geo = GeodeticCoordinate::geo(52., 1.);
        let expected = ProjectedCoordinate::raw(605909.130344302393496, 237803.365171569399536);
        let projected = forward(&tm, geo);
        assert!(projected.hypot2(&expected) < 1e-3);
        assert!(inverse(&tm, projected).max_abs_difference(&geo) < 1e-9);
    }

    #[test]
    fn central_meridian() {
        // On the central meridian the easting is the false easting, and the
        // northing is the scaled meridian arc
        let tm = utm32();
        let lat = 55_f64.to_radians();
        let p = forward(&tm, GeodeticCoordinate::raw(lat, 9_f64.to_radians()));
        assert_eq!(p.easting, 500_000.);
        assert_float_eq!(
            p.northing,
            0.9996 * tm.ellipsoid().meridian_arc(lat),
            abs <= 1e-6
        );

        // Symmetric around the central meridian
        let east = forward(&tm, GeodeticCoordinate::geo(55., 10.));
        let west = forward(&tm, GeodeticCoordinate::geo(55., 8.));
        assert_float_eq!(east.easting - 500_000., 500_000. - west.easting, abs <= 1e-6);
        assert_float_eq!(east.northing, west.northing, abs <= 1e-6);
    }

    #[test]
    fn longitude_wraparound() {
        // A longitude given a full turn off must project to the same point
        let tm = utm32();
        let a = forward(&tm, GeodeticCoordinate::geo(55., 12.));
        let b = forward(&tm, GeodeticCoordinate::geo(55., 12. + 360.));
        let c = forward(&tm, GeodeticCoordinate::geo(55., 12. - 720.));
        assert!(a.hypot2(&b) < 1e-6);
        assert!(a.hypot2(&c) < 1e-6);
    }

    #[test]
    fn units() {
        // Same projection, but in international feet
        let metric = utm32();
        let feet = ProjectionParameters::with_ellipsoid(
            Ellipsoid::default(),
            9_f64.to_radians(),
            0.9996,
            0.0,
            500_000. / 0.3048,
            0.,
            0.3048,
        );
        let geo = GeodeticCoordinate::geo(-55., 11.);
        let m = forward(&metric, geo);
        let f = forward(&feet, geo);
        assert_float_eq!(f.easting * 0.3048, m.easting, abs <= 1e-6);
        assert_float_eq!(f.northing * 0.3048, m.northing, abs <= 1e-6);
        assert!(inverse(&feet, f).max_abs_difference(&geo) < 1e-9);
    }

    #[test]
    fn sphere() {
        // rf == 0: The Redfearn series degenerates gracefully to the spherical TM
        let tm = ProjectionParameters::with_ellipsoid(
            Ellipsoid::sphere(6_371_000.),
            0.,
            1.0,
            0.0,
            0.,
            0.,
            1.0,
        );
        let geo = GeodeticCoordinate::geo(30., 1.);
        let p = forward(&tm, geo);

        // Closed form spherical transverse mercator
        let (lat, lon) = (geo.latitude, geo.longitude);
        let b = lat.cos() * lon.sin();
        let x = 6_371_000. * 0.5 * ((1. + b) / (1. - b)).ln();
        let y = 6_371_000. * (lat.tan() / lon.cos()).atan();
        assert!(p.hypot2(&ProjectedCoordinate::raw(x, y)) < 1e-3);
        assert!(inverse(&tm, p).max_abs_difference(&geo) < 1e-12);
    }
}
