//! The Topo50 map sheet grid.
//!
//! Topo50 divides the NZTM plane into sheets of 24 km (east-west) by 36 km
//! (north-south). A sheet code consists of a two letter *north code*
//! (the row, "AS" in the far north to "CK" at Stewart Island) followed
//! by a two digit *east code* (the column). The Chatham Islands sheets,
//! prefixed "CI", sit on a grid of their own and take no part in the row
//! and column extents.
//!
//! A point is located on a sheet by the 100 m digits of its easting and
//! northing within the surrounding 100 km square: "BQ31 487 279" is
//! E1748700, N5427900, on sheet BQ31 (Wellington).
mod reference;

pub use reference::GridReference;
pub use reference::Precision;

use crate::coordinate::ProjectedCoordinate;
use crate::Error;
use log::{debug, trace, warn};
use once_cell::sync::OnceCell;
use std::collections::BTreeMap;
use std::fmt;
use std::io::BufRead;

/// The sheet code prefix of the Chatham Islands sheets
pub const EXCLUDED_PREFIX: &str = "CI";

// Side length of the square addressed by the local offset digits
const SQUARE: f64 = 100_000.0;

// Metres per unit of the local offset digits
const DIGIT_UNIT: f64 = 100.0;

/// The compiled-in Topo50 sheet table
const TOPO50_TABLE: &str = include_str!("../../data/topo50.csv");

static TOPO50: OnceCell<MapSheetIndex> = OnceCell::new();

// ----- M A P   S H E E T   E X T E N T ------------------------------------------------

/// The bounding box of a single map sheet, in NZTM metres.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSheetExtent {
    pub code: String,
    pub name: String,
    pub min_easting: f64,
    pub max_easting: f64,
    pub min_northing: f64,
    pub max_northing: f64,
}

impl MapSheetExtent {
    #[must_use]
    pub fn new(
        code: &str,
        name: &str,
        easting: (f64, f64),
        northing: (f64, f64),
    ) -> MapSheetExtent {
        MapSheetExtent {
            code: code.to_string(),
            name: name.to_string(),
            min_easting: easting.0,
            max_easting: easting.1,
            min_northing: northing.0,
            max_northing: northing.1,
        }
    }

    /// The (north code, east code) pair, if the code has the regular
    /// 4 character form
    #[must_use]
    pub fn split_code(&self) -> Option<(&str, &str)> {
        if self.code.len() != 4 || !self.code.is_ascii() {
            return None;
        }
        Some(self.code.split_at(2))
    }

    /// Half open containment: The western and southern borders belong to
    /// the sheet, the eastern and northern to its neighbours
    #[must_use]
    pub fn contains(&self, coord: &ProjectedCoordinate) -> bool {
        (self.min_easting..self.max_easting).contains(&coord.easting)
            && (self.min_northing..self.max_northing).contains(&coord.northing)
    }
}

/// The sheet summary
impl fmt::Display for MapSheetExtent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Sheet:       {}", self.code)?;
        writeln!(f, "Name:        {}", self.name)?;
        writeln!(f, "minEasting:  {}", self.min_easting as i64)?;
        writeln!(f, "maxEasting:  {}", self.max_easting as i64)?;
        writeln!(f, "minNorthing: {}", self.min_northing as i64)?;
        write!(f, "maxNorthing: {}", self.max_northing as i64)
    }
}

// ----- M A P   S H E E T   I N D E X --------------------------------------------------

// The [min, max) interval covered by all sheets sharing a north or east code
#[derive(Debug, Clone, PartialEq)]
struct CodeExtent {
    code: String,
    min: f64,
    max: f64,
}

impl CodeExtent {
    fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

// Grow the interval for `code`, or append a new one
fn aggregate(extents: &mut Vec<CodeExtent>, code: &str, min: f64, max: f64) {
    if let Some(extent) = extents.iter_mut().find(|e| e.code == code) {
        extent.min = extent.min.min(min);
        extent.max = extent.max.max(max);
        return;
    }
    extents.push(CodeExtent {
        code: code.to_string(),
        min,
        max,
    });
}

/// Sheet lookup by code, and classification of projected coordinates
/// into sheets.
///
/// Built once from a reference table, and immutable from then on.
#[derive(Debug, Default, Clone)]
pub struct MapSheetIndex {
    sheets: BTreeMap<String, MapSheetExtent>,
    // Ascending by code, i.e. west to east
    east: Vec<CodeExtent>,
    // Descending by code, i.e. north to south
    north: Vec<CodeExtent>,
}

impl MapSheetIndex {
    /// Build the index from a collection of sheets. A later sheet with the
    /// same code as an earlier one replaces it.
    pub fn new<I>(sheets: I) -> MapSheetIndex
    where
        I: IntoIterator<Item = MapSheetExtent>,
    {
        let mut table = BTreeMap::new();
        for sheet in sheets {
            if let Some(previous) = table.insert(sheet.code.clone(), sheet) {
                warn!("Topo50: duplicate definition of sheet {}", previous.code);
            }
        }

        // The BTreeMap iterates in code order, so the aggregated tables
        // come out sorted
        let mut east = Vec::new();
        let mut north = Vec::new();
        for sheet in table.values() {
            let Some((north_code, east_code)) = sheet.split_code() else {
                warn!("Topo50: irregular sheet code '{}' left out of the grid extents", sheet.code);
                continue;
            };
            if north_code == EXCLUDED_PREFIX {
                continue;
            }
            aggregate(&mut east, east_code, sheet.min_easting, sheet.max_easting);
            aggregate(&mut north, north_code, sheet.min_northing, sheet.max_northing);
        }
        north.reverse();

        debug!(
            "Topo50: {} sheets, {} east codes, {} north codes",
            table.len(),
            east.len(),
            north.len()
        );

        MapSheetIndex {
            sheets: table,
            east,
            north,
        }
    }

    /// Build the index from the text of a sheet table: One sheet per line,
    /// as `code,name,min_easting,max_easting,min_northing,max_northing`.
    /// Blank lines and lines starting with `#` are ignored. Commas in the
    /// name are allowed.
    pub fn parse(table: &str) -> Result<MapSheetIndex, Error> {
        let mut sheets = Vec::new();
        for (number, line) in table.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            sheets.push(parse_sheet(line, number + 1)?);
        }
        Ok(MapSheetIndex::new(sheets))
    }

    /// As [parse](MapSheetIndex::parse), but reading the table from `reader`
    pub fn from_reader<R: BufRead>(reader: R) -> Result<MapSheetIndex, Error> {
        let mut table = String::new();
        for line in reader.lines() {
            table.push_str(&line?);
            table.push('\n');
        }
        MapSheetIndex::parse(&table)
    }

    /// The Topo50 index, built from the compiled-in sheet table on first use
    pub fn topo50() -> Result<&'static MapSheetIndex, Error> {
        TOPO50.get_or_try_init(|| MapSheetIndex::parse(TOPO50_TABLE))
    }

    /// Number of sheets in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// All sheets, in code order
    pub fn sheets(&self) -> impl Iterator<Item = &MapSheetExtent> {
        self.sheets.values()
    }

    /// Look up a sheet by its code
    pub fn sheet(&self, code: &str) -> Result<&MapSheetExtent, Error> {
        self.sheets
            .get(code)
            .ok_or_else(|| Error::UnknownSheetCode(code.to_string()))
    }

    /// The east code whose easting interval contains `easting`
    #[must_use]
    pub fn east_code(&self, easting: f64) -> Option<&str> {
        self.east
            .iter()
            .find(|e| e.contains(easting))
            .map(|e| e.code.as_str())
    }

    /// The north code whose northing interval contains `northing`
    #[must_use]
    pub fn north_code(&self, northing: f64) -> Option<&str> {
        self.north
            .iter()
            .find(|e| e.contains(northing))
            .map(|e| e.code.as_str())
    }

    /// The code of the sheet covering (`easting`, `northing`).
    ///
    /// Only the row and column extents are consulted, so the sheet itself
    /// need not be in the table (e.g. an all-sea sheet that was never
    /// printed).
    pub fn classify(&self, easting: f64, northing: f64) -> Result<String, Error> {
        let (Some(east), Some(north)) = (self.east_code(easting), self.north_code(northing)) else {
            debug!("Topo50: E{easting} N{northing} is outside the sheet grid");
            return Err(Error::SheetNotFound { easting, northing });
        };
        trace!("Topo50: E{easting} N{northing} -> {north}{east}");
        Ok(format!("{north}{east}"))
    }

    /// The local offset digits of (`easting`, `northing`): The position
    /// within the surrounding 100 km square, in units of 100 m
    #[must_use]
    pub fn local_offset(easting: f64, northing: f64, precision: Precision) -> (String, String) {
        (
            precision.format(easting.rem_euclid(SQUARE) / DIGIT_UNIT),
            precision.format(northing.rem_euclid(SQUARE) / DIGIT_UNIT),
        )
    }

    /// The NZTM coordinate of a point given by its sheet code and local offset.
    ///
    /// The offsets address the 100 km square containing the sheet's south
    /// west corner. Where a sheet straddles a 100 km line, offsets smaller
    /// than the corner's belong to the next square up.
    pub fn sheet_to_coordinate(
        &self,
        code: &str,
        local_easting: f64,
        local_northing: f64,
    ) -> Result<ProjectedCoordinate, Error> {
        let sheet = self.sheet(code)?;
        let easting = unwrap_square(sheet.min_easting, local_easting);
        let northing = unwrap_square(sheet.min_northing, local_northing);
        Ok(ProjectedCoordinate::raw(easting, northing))
    }

    /// The grid reference of `coord`
    pub fn grid_reference(
        &self,
        coord: ProjectedCoordinate,
        precision: Precision,
    ) -> Result<GridReference, Error> {
        let sheet = self.classify(coord.easting, coord.northing)?;
        let (easting, northing) =
            MapSheetIndex::local_offset(coord.easting, coord.northing, precision);
        Ok(GridReference {
            sheet,
            easting,
            northing,
        })
    }

    /// The NZTM coordinate of a grid reference
    pub fn to_nztm(&self, reference: &GridReference) -> Result<ProjectedCoordinate, Error> {
        let (easting, northing) = reference.offsets()?;
        self.sheet_to_coordinate(&reference.sheet, easting, northing)
    }
}

// Offset `local` (in digit units) from the 100 km line at or below `min`,
// moving up one square when that would land before the sheet begins.
// Half a standard digit of slack, since references are rounded.
fn unwrap_square(min: f64, local: f64) -> f64 {
    let base = min - min.rem_euclid(SQUARE);
    let value = base + local * DIGIT_UNIT;
    if value < min - DIGIT_UNIT / 2.0 {
        return value + SQUARE;
    }
    value
}

fn parse_sheet(line: &str, number: usize) -> Result<MapSheetExtent, Error> {
    // The four numbers from the right, so the name may contain commas
    let mut fields: Vec<&str> = line.rsplitn(5, ',').collect();
    fields.reverse();
    let head = fields.first().and_then(|head| head.split_once(','));
    let (Some((code, name)), 5) = (head, fields.len()) else {
        return Err(Error::Syntax(format!(
            "line {number}: expected 'code,name,min_easting,max_easting,min_northing,max_northing'"
        )));
    };

    let mut numbers = [0.0; 4];
    for (value, field) in numbers.iter_mut().zip(&fields[1..]) {
        *value = field.trim().parse::<f64>().map_err(|e| {
            Error::BadParam(format!("line {number}, '{}'", field.trim()), e.to_string())
        })?;
    }

    Ok(MapSheetExtent::new(
        code.trim(),
        name.trim(),
        (numbers[0], numbers[1]),
        (numbers[2], numbers[3]),
    ))
}

// ----- T E S T S ---------------------------------------------------------------------
