use super::*;

// ----- Meridian geometry -----------------------------------------------------
impl Ellipsoid {
    /// The meridian arc length from the equator to `latitude` (radians),
    /// in metres.
    ///
    /// Helmert's series, truncated at *e⁶*, in the form given by the
    /// [GDA Technical Manual](crate::Bibliography::Icsm02). Valid for any
    /// finite argument, although only geodetic latitudes make sense.
    /// Compared to [Bowring (1983)](crate::Bibliography::Bow83) and later
    /// exact methods, the error stays below 1 mm all the way to the pole.
    #[must_use]
    pub fn meridian_arc(&self, latitude: f64) -> f64 {
        let e2 = self.es;
        let e4 = e2 * e2;
        let e6 = e4 * e2;

        let a0 = 1. - (e2 / 4.0) - (3.0 * e4 / 64.0) - (5.0 * e6 / 256.0);
        let a2 = (3.0 / 8.0) * (e2 + e4 / 4.0 + 15.0 * e6 / 128.0);
        let a4 = (15.0 / 256.0) * (e4 + 3.0 * e6 / 4.0);
        let a6 = 35.0 * e6 / 3072.0;

        self.a
            * (a0 * latitude - a2 * (2. * latitude).sin() + a4 * (4. * latitude).sin()
                - a6 * (6. * latitude).sin())
    }

    /// The foot-point latitude: The latitude (radians) at which the meridian
    /// arc from the equator has length `arc` (metres).
    ///
    /// A closed form series in the third flattening, *n*, and the rectifying
    /// latitude σ = arc/G, where *G* is the mean length of one radian of the
    /// meridian. No iteration, so no convergence issues: The approximate
    /// inverse of [meridian_arc](Ellipsoid::meridian_arc).
    #[must_use]
    pub fn footpoint_latitude(&self, arc: f64) -> f64 {
        let n = self.third_flattening();
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n2 * n2;

        let g = self.a * (1.0 - n) * (1.0 - n2) * (1.0 + 9.0 * n2 / 4.0 + 225.0 * n4 / 64.0);
        let sigma = arc / g;

        sigma
            + (3.0 * n / 2.0 - 27.0 * n3 / 32.0) * (2.0 * sigma).sin()
            + (21.0 * n2 / 16.0 - 55.0 * n4 / 32.0) * (4.0 * sigma).sin()
            + (151.0 * n3 / 96.0) * (6.0 * sigma).sin()
            + (1097.0 * n4 / 512.0) * (8.0 * sigma).sin()
    }
}
