//! CSV ingest for the regional price dataset.
//!
//! Expected header: `month,region,price`. Any row whose month or price does not
//! parse fails the whole load; the chart never renders from partial data.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::core::{PricePoint, parse_month, parse_price};
use crate::error::{ChartError, ChartResult};

const REQUIRED_COLUMNS: [&str; 3] = ["month", "region", "price"];

#[derive(Debug, Deserialize)]
struct RawPriceRow {
    month: String,
    region: String,
    price: String,
}

/// Reads and parses the CSV file at `path`.
pub fn load_price_points(path: impl AsRef<Path>) -> ChartResult<Vec<PricePoint>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ChartError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loading price points");
    parse_price_points(file)
}

/// Parses price rows from any CSV source.
pub fn parse_price_points(reader: impl Read) -> ChartResult<Vec<PricePoint>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(ChartError::InvalidData(format!(
                "missing required column `{column}`"
            )));
        }
    }

    let mut points = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);
        let row: RawPriceRow = record.deserialize(Some(&headers))?;
        points.push(parse_row(row, line)?);
    }

    if points.is_empty() {
        return Err(ChartError::InvalidData(
            "price dataset contains no rows".to_owned(),
        ));
    }

    info!(rows = points.len(), "parsed price points");
    Ok(points)
}

fn parse_row(row: RawPriceRow, line: u64) -> ChartResult<PricePoint> {
    let malformed = |err: ChartError| ChartError::MalformedRow {
        line,
        message: err.to_string(),
    };

    if row.region.is_empty() {
        return Err(ChartError::MalformedRow {
            line,
            message: "region must not be empty".to_owned(),
        });
    }

    let timestamp = parse_month(&row.month).map_err(malformed)?;
    let price = parse_price(&row.price).map_err(malformed)?;

    Ok(PricePoint {
        region: row.region,
        month: row.month,
        timestamp,
        price,
    })
}
