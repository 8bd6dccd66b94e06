// src/spreadsheets/load_xlsx.rs

use crate::domain::listing::ProductListing;
use crate::errors::DataError;
use crate::geos::UNKNOWN_ORIGIN;
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// Columns read from the listings sheet, in `ProductListing` field order.
pub const LISTING_COLUMNS: [&str; 8] = [
    "PRODUCT LINK",
    "TITLE",
    "PRICE",
    "MARKETPLACE",
    "BRAND",
    "ASAL BRAND",
    "Kategori",
    "Lokasi",
];

/// Row counts from preprocessing, logged at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub rows_read: usize,
    pub dropped_missing: usize,
    pub dropped_unknown_origin: usize,
}

/// Opens the first sheet of an xlsx/xls/ods workbook and returns the cleaned listings.
pub fn load_listings(path: &Path) -> Result<(Vec<ProductListing>, LoadReport), DataError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(DataError::EmptyWorkbook)??;

    listings_from_range(&range)
}

/// Keeps only the listing columns, drops rows with any missing value and rows whose
/// brand origin is unknown ("-"). Duplicate rows are kept.
pub fn listings_from_range(
    range: &Range<Data>,
) -> Result<(Vec<ProductListing>, LoadReport), DataError> {
    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .map(|cells| cells.iter().map(|c| cell_text(c).unwrap_or_default()).collect())
        .unwrap_or_default();

    let mut index = [0usize; LISTING_COLUMNS.len()];
    for (slot, name) in index.iter_mut().zip(LISTING_COLUMNS) {
        *slot = header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))?;
    }

    let mut report = LoadReport::default();
    let mut listings = Vec::new();

    for cells in rows {
        report.rows_read += 1;

        let Some(listing) = parse_row(cells, &index) else {
            report.dropped_missing += 1;
            continue;
        };
        if listing.brand_origin == UNKNOWN_ORIGIN {
            report.dropped_unknown_origin += 1;
            continue;
        }
        listings.push(listing);
    }

    Ok((listings, report))
}

fn parse_row(cells: &[Data], index: &[usize; LISTING_COLUMNS.len()]) -> Option<ProductListing> {
    let text = |i: usize| cells.get(index[i]).and_then(cell_text);

    Some(ProductListing {
        link: text(0)?,
        title: text(1)?,
        price: cells.get(index[2]).and_then(cell_number)?,
        marketplace: text(3)?,
        brand: text(4)?,
        brand_origin: text(5)?,
        category: text(6)?,
        location: text(7)?,
    })
}

/// Text content of a cell; empty and error cells count as missing.
/// Text cells are trimmed; a blank cell counts as missing.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(f.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::DateTime(dt) => Some(dt.as_f64().to_string()),
        Data::Error(_) | Data::Empty => None,
    }
}

/// Numeric content of a cell. Numeric strings ("125000", "125000.5") are accepted.
fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) if f.is_finite() => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}
