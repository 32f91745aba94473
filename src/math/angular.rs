use std::f64::consts::PI;

/// Simplistic transformation from degrees, minutes and seconds-with-decimals
/// to degrees-with-decimals. No sanity check: Sign taken from degree-component,
/// minutes forced to unsigned by u16 type, but passing a negative value for
/// seconds leads to undefined behaviour.
pub fn dms_to_dd(d: i32, m: u16, s: f64) -> f64 {
    d.signum() as f64 * (d.abs() as f64 + (m as f64 + s / 60.) / 60.)
}

/// Transformation from degrees-with-decimals to (signed degrees, minutes,
/// seconds-with-decimals). The sign is carried by the degree component,
/// so for angles in the open interval (-1°, 0°) it is lost: Use the
/// `signum` of the input when formatting those.
pub fn dd_to_dms(dd: f64) -> (i32, u16, f64) {
    let sign = dd.signum();
    let dd = dd.abs();
    let d = dd.floor();
    let mm = (dd - d) * 60.;
    let m = mm.floor();
    let s = (mm - m) * 60.;
    ((sign * d) as i32, m as u16, s)
}

/// Bring a longitude difference into [-π, π] by repeatedly adding or
/// subtracting a full turn.
///
/// A loop rather than a `%`: Values already inside the
/// interval pass through bit-for-bit, and both end points are kept.
pub fn normalize_longitude(angle: f64) -> f64 {
    let mut angle = angle;
    while angle > PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

// ----- Tests ---------------------------------------------------------------------
