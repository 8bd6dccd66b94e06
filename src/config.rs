//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Size of the astra worker pool.
    pub workers: usize,
    /// Listings workbook (xlsx/xls/ods).
    pub listings_path: PathBuf,
    /// Province boundaries, GeoJSON.
    pub province_boundaries_path: PathBuf,
    /// Regency/city boundaries, GeoJSON. When set, the "Lokasi" column is treated as
    /// free-text city/regency and joined to a province; otherwise it already holds the
    /// province name.
    pub regency_boundaries_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `DASHBOARD_ADDR` | Server bind address | `127.0.0.1:3000` |
    /// | `DASHBOARD_WORKERS` | Worker threads | `8` |
    /// | `LISTINGS_PATH` | Listings workbook | `Identifikasi-Brand-E-Commerce.xlsx` |
    /// | `PROVINCE_BOUNDARIES_PATH` | Level-1 GeoJSON | `boundaries/idn_admbnda_adm1_bps_20200401.geojson` |
    /// | `REGENCY_BOUNDARIES_PATH` | Level-2 GeoJSON | (unset) |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("DASHBOARD_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let workers = match env::var("DASHBOARD_WORKERS") {
            Ok(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidWorkers(raw))?,
            Err(_) => 8,
        };

        let listings_path = env::var("LISTINGS_PATH")
            .unwrap_or_else(|_| "Identifikasi-Brand-E-Commerce.xlsx".to_string())
            .into();

        let province_boundaries_path = env::var("PROVINCE_BOUNDARIES_PATH")
            .unwrap_or_else(|_| "boundaries/idn_admbnda_adm1_bps_20200401.geojson".to_string())
            .into();

        let regency_boundaries_path = env::var("REGENCY_BOUNDARIES_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            addr,
            workers,
            listings_path,
            province_boundaries_path,
            regency_boundaries_path,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid DASHBOARD_ADDR format")]
    InvalidAddr,

    #[error("DASHBOARD_WORKERS must be a positive integer, got '{0}'")]
    InvalidWorkers(String),
}
