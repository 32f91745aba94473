//! NZTM: Conversion between NZGD2000 latitude/longitude, NZTM2000
//! easting/northing, and Topo50 grid references.
//!
//! Coordinates are taken from the command line, or, if none are given,
//! from stdin, one per line.
use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::{debug, trace};
use nztm::prelude::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "nztm")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Topo50 sheet table (code,name,min_easting,max_easting,min_northing,max_northing)
    #[clap(long, global = true)]
    sheets: Option<PathBuf>,

    /// Number of decimals in the output
    #[clap(short = 'd', long, global = true)]
    decimals: Option<usize>,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Latitude and longitude (degrees) to NZTM easting and northing
    Fwd {
        /// Report fwd-inv roundtrip deviation
        #[clap(short, long)]
        roundtrip: bool,

        /// "latitude longitude"
        #[clap(allow_negative_numbers = true)]
        args: Vec<String>,
    },

    /// NZTM easting and northing to latitude and longitude (degrees)
    Inv {
        /// Report inv-fwd roundtrip deviation
        #[clap(short, long)]
        roundtrip: bool,

        /// "easting northing"
        args: Vec<String>,
    },

    /// NZTM easting and northing to Topo50 grid reference
    Topo50 {
        /// Local offsets with two decimals, i.e. to the metre
        #[clap(long)]
        high: bool,

        /// "easting northing"
        args: Vec<String>,
    },

    /// Topo50 grid reference to NZTM easting and northing
    Sheet {
        /// "sheet easting northing", e.g. "BQ31 487 279"
        args: Vec<String>,
    },

    /// Summary of one or more Topo50 sheets
    Info {
        /// Sheet codes
        #[clap(required = true)]
        codes: Vec<String>,
    },

    /// Run the three NZTM check points through all conversions
    Demo,
}

// The three check points of the NZ coordinate conversion utility
const CHECK_POINTS: [(f64, f64); 3] = [
    (1_576_041.15, 6_188_574.24),
    (1_576_542.01, 5_515_331.05),
    (1_307_103.22, 4_826_464.86),
];

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    trace!("{:#?}", options);

    match &options.command {
        Command::Fwd { roundtrip, args } => {
            let decimals = options.decimals.unwrap_or(3);
            for record in records(args)? {
                let (lat, lon) = pair(&record)?;
                let geo = GeodeticCoordinate::geo(lat, lon);
                let p = geodetic_to_nztm(geo);
                print!("{:.*} {:.*}", decimals, p.easting, decimals, p.northing);
                if *roundtrip {
                    let back = nztm_to_geodetic(p);
                    // Deviation in degrees
                    print!(" {:.3e}", back.max_abs_difference(&geo).to_degrees());
                }
                println!();
            }
        }

        Command::Inv { roundtrip, args } => {
            let decimals = options.decimals.unwrap_or(9);
            for record in records(args)? {
                let p: ProjectedCoordinate = record
                    .parse()
                    .with_context(|| format!("bad NZTM coordinate '{record}'"))?;
                let geo = nztm_to_geodetic(p);
                let (lat, lon) = geo.to_degrees();
                print!("{lat:.decimals$} {lon:.decimals$}");
                if *roundtrip {
                    // Deviation in metres
                    let back = geodetic_to_nztm(geo);
                    print!(" {:.3e}", back.hypot2(&p));
                }
                println!();
            }
        }

        Command::Topo50 { high, args } => {
            let index = sheet_index(options.sheets.as_ref())?;
            let precision = if *high {
                Precision::High
            } else {
                Precision::Standard
            };
            for record in records(args)? {
                let p: ProjectedCoordinate = record
                    .parse()
                    .with_context(|| format!("bad NZTM coordinate '{record}'"))?;
                let reference = index
                    .grid_reference(p, precision)
                    .with_context(|| format!("cannot locate '{record}'"))?;
                println!("{reference}");
            }
        }

        Command::Sheet { args } => {
            let index = sheet_index(options.sheets.as_ref())?;
            let decimals = options.decimals.unwrap_or(0);
            for record in records(args)? {
                let reference: GridReference = record
                    .parse()
                    .with_context(|| format!("bad grid reference '{record}'"))?;
                let p = index.to_nztm(&reference)?;
                println!("{:.*} {:.*}", decimals, p.easting, decimals, p.northing);
            }
        }

        Command::Info { codes } => {
            let index = sheet_index(options.sheets.as_ref())?;
            for (i, code) in codes.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{}", index.sheet(&code.to_ascii_uppercase())?);
            }
        }

        Command::Demo => demo(&sheet_index(options.sheets.as_ref())?)?,
    }

    Ok(())
}

fn demo(index: &MapSheetIndex) -> Result<(), anyhow::Error> {
    for (easting, northing) in CHECK_POINTS {
        let p = ProjectedCoordinate::raw(easting, northing);
        let geo = nztm_to_geodetic(p);
        let back = geodetic_to_nztm(geo);
        let (lat, lon) = geo.to_degrees();

        println!("Input NZTM:   {easting:.2} {northing:.2}");
        println!("Output lat/lon: {lat:.9} {lon:.9}");
        println!("Back to NZTM: {:.2} {:.2}", back.easting, back.northing);
        println!(
            "Difference:   {:.4} {:.4}",
            back.easting - easting,
            back.northing - northing
        );
        println!("Topo50:       {}", index.grid_reference(p, Precision::Standard)?);
        println!("Topo50 high:  {}", index.grid_reference(p, Precision::High)?);
        println!();
    }
    Ok(())
}

// The sheet table: Given explicitly, found in the local data directory,
// or compiled in
fn sheet_index(explicit: Option<&PathBuf>) -> Result<MapSheetIndex, anyhow::Error> {
    let path = explicit.cloned().or_else(|| {
        dirs::data_local_dir()
            .map(|dir| dir.join("nztm").join("topo50.csv"))
            .filter(|path| path.exists())
    });

    let Some(path) = path else {
        return Ok(MapSheetIndex::topo50()?.clone());
    };

    debug!("Reading sheet table {}", path.display());
    let file = File::open(&path)
        .with_context(|| format!("cannot open sheet table {}", path.display()))?;
    let index = MapSheetIndex::from_reader(BufReader::new(file))
        .with_context(|| format!("cannot read sheet table {}", path.display()))?;
    Ok(index)
}

// The command line arguments as a single record, or, if there are none,
// the non-empty, non-comment lines of stdin
fn records(args: &[String]) -> Result<Vec<String>, anyhow::Error> {
    if !args.is_empty() {
        return Ok(vec![args.join(" ")]);
    }
    let mut records = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        records.push(line.to_string());
    }
    Ok(records)
}

fn pair(record: &str) -> Result<(f64, f64), anyhow::Error> {
    let fields: Vec<&str> = record.split_whitespace().collect();
    let [a, b] = fields[..] else {
        bail!("expected two numbers, got '{record}'");
    };
    let a = a.parse::<f64>().with_context(|| format!("bad number '{a}'"))?;
    let b = b.parse::<f64>().with_context(|| format!("bad number '{b}'"))?;
    Ok((a, b))
}
