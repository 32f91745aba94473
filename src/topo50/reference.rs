use crate::Error;
use std::fmt;
use std::str::FromStr;

/// The resolution of the local offset digits of a grid reference
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Whole units of 100 m, always 3 digits: "007"
    #[default]
    Standard,
    /// Units of 100 m with two decimals (i.e. metres), zero padded to at
    /// least 5 characters: "07.50"
    High,
}

impl Precision {
    /// Format a local offset, given in units of 100 m.
    ///
    /// An offset that rounds up to 1000 lies on the next 100 km line, and
    /// is written as offset zero in the square beyond it.
    #[must_use]
    pub fn format(self, offset: f64) -> String {
        let digits = self.digits(offset);
        if digits.parse::<f64>().map_or(false, |value| value >= 1000.0) {
            return self.digits(0.0);
        }
        digits
    }

    fn digits(self, offset: f64) -> String {
        match self {
            Precision::Standard => format!("{offset:03.0}"),
            Precision::High => {
                let mut digits = format!("{offset:.2}");
                while digits.len() < 5 {
                    digits.insert(0, '0');
                }
                digits
            }
        }
    }
}

/// A Topo50 grid reference: A sheet code and the local offset digits,
/// e.g. "BQ31 487 279".
///
/// The digits are kept as text, since their formatting (leading zeros,
/// number of decimals) carries the precision of the reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridReference {
    pub sheet: String,
    pub easting: String,
    pub northing: String,
}

impl GridReference {
    /// The local offsets as numbers, in units of 100 m
    pub fn offsets(&self) -> Result<(f64, f64), Error> {
        Ok((parse_offset(&self.easting)?, parse_offset(&self.northing)?))
    }

    /// The precision implied by the digits
    #[must_use]
    pub fn precision(&self) -> Precision {
        if self.easting.contains('.') || self.northing.contains('.') {
            return Precision::High;
        }
        Precision::Standard
    }
}

fn parse_offset(digits: &str) -> Result<f64, Error> {
    let value = digits
        .parse::<f64>()
        .map_err(|e| Error::BadParam(digits.to_string(), e.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(Error::BadParam(
            digits.to_string(),
            "local offsets must be finite and non-negative".to_string(),
        ));
    }
    Ok(value)
}

impl fmt::Display for GridReference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.sheet, self.easting, self.northing)
    }
}

/// Parse "BQ31 487 279". Sheet codes are case insensitive
impl FromStr for GridReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<GridReference, Error> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        let [sheet, easting, northing] = fields[..] else {
            return Err(Error::Syntax(format!(
                "expected 'sheet easting northing', got '{s}'"
            )));
        };
        let reference = GridReference {
            sheet: sheet.to_ascii_uppercase(),
            easting: easting.to_string(),
            northing: northing.to_string(),
        };
        reference.offsets()?;
        Ok(reference)
    }
}
