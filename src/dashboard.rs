// dashboard.rs
use crate::config::Config;
use crate::domain::{
    attach_provinces, AdministrativeRegion, JoinReport, LocationMode, NormalizedListing,
    ProductListing, RegionLookup,
};
use crate::errors::DataError;
use crate::geos::boundaries::{load_provinces, load_regencies, province_shapes_geojson};
use crate::spreadsheets::{load_listings, LoadReport};
use chrono::{DateTime, Local};
use tracing::{info, warn};

/// Everything loaded at startup. Immutable afterwards and shared by all workers.
#[derive(Debug)]
pub struct Dashboard {
    pub listings: Vec<NormalizedListing>,
    pub provinces: Vec<String>,
    /// Pre-serialized province shapes for the map.
    pub province_shapes: String,
    pub load_report: LoadReport,
    pub join_report: JoinReport,
    pub loaded_at: DateTime<Local>,
}

impl Dashboard {
    pub fn load(config: &Config) -> Result<Self, DataError> {
        let (listings, load_report) = load_listings(&config.listings_path)?;
        info!(
            path = %config.listings_path.display(),
            rows = load_report.rows_read,
            kept = listings.len(),
            dropped_missing = load_report.dropped_missing,
            dropped_unknown_origin = load_report.dropped_unknown_origin,
            "listings loaded"
        );

        let provinces = load_provinces(&config.province_boundaries_path)?;
        info!(provinces = provinces.len(), "province boundaries loaded");

        let mode = match &config.regency_boundaries_path {
            Some(path) => {
                let regencies = load_regencies(path)?;
                let lookup = RegionLookup::from_regions(&regencies);
                info!(
                    regions = lookup.len(),
                    duplicates = lookup.duplicates(),
                    "regency boundaries loaded, normalizing locations"
                );
                LocationMode::Regency(lookup)
            }
            None => LocationMode::Province,
        };

        Ok(Self::from_parts(listings, &provinces, &mode, load_report))
    }

    pub fn from_parts(
        listings: Vec<ProductListing>,
        provinces: &[AdministrativeRegion],
        mode: &LocationMode,
        load_report: LoadReport,
    ) -> Self {
        let (listings, join_report) = attach_provinces(listings, mode);
        if join_report.dropped > 0 {
            warn!(
                dropped = join_report.dropped,
                distinct = join_report.unmatched_locations.len(),
                sample = ?join_report.unmatched_locations.iter().take(10).collect::<Vec<_>>(),
                "listings without a matching region were dropped"
            );
        }

        Dashboard {
            listings,
            provinces: provinces.iter().map(|p| p.name.clone()).collect(),
            province_shapes: province_shapes_geojson(provinces),
            load_report,
            join_report,
            loaded_at: Local::now(),
        }
    }

    pub fn has_province(&self, name: &str) -> bool {
        self.provinces.iter().any(|p| p == name)
    }
}
