//! Geographic radius clustering tool
//!
//! Reads coordinates from a CSV file, groups every chain of points lying within
//! a given great-circle radius of each other, and prints each group with its
//! mean center point.

use anyhow::{Context, bail};
use clap::Parser;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::Level;

mod cluster;


use cluster::{Clustering, Coordinate, CoordinateList, cluster};

const PATH_PROMPT: &str = "Enter the path to your CSV file: ";
const RADIUS_PROMPT: &str = "Enter clustering radius in kilometers: ";

#[derive(Parser, Debug)]
#[command(name = "geo_cluster")]
#[command(about = "Great-circle radius clustering of geographic coordinates", long_about = None)]
struct Args {
    /// Input CSV file (prompted for when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Clustering radius in km (prompted for when omitted)
    #[arg(short, long)]
    radius: Option<f64>,

    /// 1-indexed column holding latitude
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u16).range(1..))]
    lat_column: u16,

    /// 1-indexed column holding longitude
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    lon_column: u16,

    /// Also write cluster assignments to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(args, &mut stdin.lock(), &mut stdout.lock()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so the cluster report on stdout stays clean
fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Runs the whole pipeline, prompting on `out` and reading answers from `input`
/// for anything not supplied on the command line
fn run<R: BufRead, W: Write>(args: Args, input: &mut R, out: &mut W) -> anyhow::Result<()> {
    let path = match args.input {
        Some(path) => path,
        None => PathBuf::from(prompt(input, out, PATH_PROMPT)?),
    };

    let columns = ColumnLayout::from_one_based(args.lat_column, args.lon_column);
    let coordinates = read_coordinates_from_path(&path, columns)?;

    if coordinates.is_empty() {
        writeln!(out, "No valid coordinates found in the file.")?;
        return Ok(());
    }

    tracing::debug!(count = coordinates.len(), path = %path.display(), "read coordinates");

    let radius = match args.radius {
        Some(radius) => radius,
        None => parse_radius(&prompt(input, out, RADIUS_PROMPT)?)?,
    };

    let clustering = cluster(&coordinates, radius).context("clustering failed")?;
    tracing::debug!(
        clusters = clustering.len(),
        largest = clustering.groups().values().map(Vec::len).max().unwrap_or(0),
        radius_km = radius,
        "clustered"
    );

    print_clusters(out, &clustering).context("failed to write cluster report")?;

    if let Some(output_file) = args.output {
        write_clusters_to_csv(&output_file, &clustering)?;
        tracing::info!(path = %output_file.display(), "cluster assignments written");
    }

    Ok(())
}

/// Writes `message` and returns the next input line with surrounding whitespace trimmed
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> anyhow::Result<String> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("no answer given to prompt {:?}", message.trim());
    }

    Ok(line.trim().to_string())
}

fn parse_radius(answer: &str) -> anyhow::Result<f64> {
    answer
        .trim()
        .parse::<f64>()
        .with_context(|| format!("invalid clustering radius {answer:?}"))
}

/// Zero-based positions of the latitude and longitude fields in a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnLayout {
    lat: usize,
    lon: usize,
}

impl ColumnLayout {
    fn from_one_based(lat: u16, lon: u16) -> Self {
        Self {
            lat: usize::from(lat.saturating_sub(1)),
            lon: usize::from(lon.saturating_sub(1)),
        }
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::from_one_based(3, 4)
    }
}

/// Reads coordinates from a CSV file
///
/// See [`read_coordinates`] for the row rules.
fn read_coordinates_from_path(
    path: &Path,
    columns: ColumnLayout,
) -> anyhow::Result<CoordinateList> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    read_coordinates(file, columns).with_context(|| format!("failed to read {}", path.display()))
}

/// Reads coordinates from CSV data
///
/// Rows may have any number of fields. A row contributes a coordinate only if
/// both configured columns are present and hold finite numbers; any other row,
/// header rows included, is skipped.
fn read_coordinates<R: io::Read>(
    reader: R,
    columns: ColumnLayout,
) -> csv::Result<CoordinateList> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut coordinates = CoordinateList::new();
    let mut skipped = 0usize;

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        match parse_coordinate(&record, columns) {
            Some(coordinate) => coordinates.push(coordinate),
            None => {
                skipped += 1;
                tracing::trace!(row, "skipping malformed row");
            }
        }
    }

    tracing::debug!(parsed = coordinates.len(), skipped, "parsed CSV rows");
    Ok(coordinates)
}

fn parse_coordinate(record: &StringRecord, columns: ColumnLayout) -> Option<Coordinate> {
    let lat = parse_degrees(record.get(columns.lat)?)?;
    let lon = parse_degrees(record.get(columns.lon)?)?;
    Some(Coordinate::new(lat, lon))
}

fn parse_degrees(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Writes the cluster report, clusters in ascending ID order
///
/// Format per cluster:
///
/// ```text
///
/// Cluster 0: Picture Point → (lat, lon)
///   Coordinates in cluster:
///     (lat, lon)
/// ```
fn print_clusters<W: Write>(out: &mut W, clustering: &Clustering) -> io::Result<()> {
    for (id, center, members) in clustering.iter() {
        writeln!(out)?;
        writeln!(
            out,
            "Cluster {id}: Picture Point → ({:.6}, {:.6})",
            center.lat, center.lon
        )?;
        writeln!(out, "  Coordinates in cluster:")?;
        for point in members {
            writeln!(out, "    ({:.6}, {:.6})", point.lat, point.lon)?;
        }
    }

    out.flush()
}

/// Writes one row per clustered point with its cluster ID and centroid
fn write_clusters_to_csv(output_file: &Path, clustering: &Clustering) -> anyhow::Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(output_file)
        .with_context(|| format!("failed to create {}", output_file.display()))?;

    writer.write_record([
        "cluster",
        "latitude",
        "longitude",
        "centroid_latitude",
        "centroid_longitude",
    ])?;

    for (id, center, members) in clustering.iter() {
        for point in members {
            writer.write_record([
                id.to_string(),
                point.lat.to_string(),
                point.lon.to_string(),
                center.lat.to_string(),
                center.lon.to_string(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}
