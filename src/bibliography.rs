/// Some literature, that has been useful in designing and implementing this library.
pub enum Bibliography {
    /// B. R. Bowring (1983): *New equations for meridional distance*.
    /// Bull. Geodesique 57, 374–381.
    /// [DOI](https://doi.org/10.1007/BF02520940).
    Bow83,

    /// F.R. Helmert (1880): *Die mathematischen und physikalischen Theorieen
    /// der höheren Geodäsie*, Vol. 1. Teubner, Leipzig.
    /// Source of the meridian arc series, in the truncated form used here.
    Hel1880,

    /// Intergovernmental Committee on Surveying and Mapping (2002):
    /// *Geocentric Datum of Australia Technical Manual*, version 2.2.
    /// Chapter 5 gives the Redfearn formulae in the exact form implemented
    /// in [tmerc](crate::tmerc).
    Icsm02,

    /// Charles F.F. Karney (2011): *Transverse Mercator with an accuracy of a few nanometers*.
    /// J. Geodesy. 85(8): 475–485.
    /// [DOI](https://doi.org/10.1007/s00190-011-0445-3).
    /// Useful as a yardstick for how quickly the Redfearn series degrades
    /// away from the central meridian.
    Kar11,

    /// Land Information New Zealand: *Standard for New Zealand Geodetic Datum
    /// 2000 projections* (LINZS25002). Defines the NZTM2000 parameters.
    LinzS25002,

    /// J.C.B. Redfearn (1948): *Transverse Mercator formulae*.
    /// Empire Survey Review, 9(69), pp. 318-322.
    /// [DOI](https://doi.org/10.1179/sre.1948.9.69.318).
    Red48,
}
