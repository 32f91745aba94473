use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Easting and northing, in metres, in some projected system.
///
/// There is no intrinsic range check: Whether a value is meaningful depends
/// on the projection's zone of accuracy, which is documented, not enforced.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct ProjectedCoordinate {
    pub easting: f64,
    pub northing: f64,
}

impl ProjectedCoordinate {
    /// A `ProjectedCoordinate` from easting/northing
    #[must_use]
    pub fn raw(easting: f64, northing: f64) -> ProjectedCoordinate {
        ProjectedCoordinate { easting, northing }
    }

    /// A `ProjectedCoordinate` consisting of 2 `NaN`s
    #[must_use]
    pub fn nan() -> ProjectedCoordinate {
        ProjectedCoordinate::raw(f64::NAN, f64::NAN)
    }

    /// Euclidean distance between two projected coordinates
    #[must_use]
    pub fn hypot2(&self, other: &ProjectedCoordinate) -> f64 {
        (self.easting - other.easting).hypot(self.northing - other.northing)
    }
}

/// Whole metres, "1748735 mE 5427916 mN"
impl fmt::Display for ProjectedCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} mE {} mN", self.easting as i64, self.northing as i64)
    }
}

/// Parse the space separated "easting northing" pair the licence API
/// returns. Trailing "mE"/"mN" unit tags, as written by `Display`, are
/// accepted as well.
impl FromStr for ProjectedCoordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<ProjectedCoordinate, Error> {
        let fields: Vec<&str> = s
            .split_whitespace()
            .filter(|field| *field != "mE" && *field != "mN")
            .collect();
        let [easting, northing] = fields[..] else {
            return Err(Error::Syntax(format!(
                "expected 'easting northing', got '{s}'"
            )));
        };
        let easting = easting
            .parse::<f64>()
            .map_err(|e| Error::BadParam("easting".to_string(), e.to_string()))?;
        let northing = northing
            .parse::<f64>()
            .map_err(|e| Error::BadParam("northing".to_string(), e.to_string()))?;
        Ok(ProjectedCoordinate::raw(easting, northing))
    }
}

// ----- T E S T S ---------------------------------------------------
