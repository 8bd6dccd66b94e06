pub mod aggregate;
pub mod filters;
pub mod join;
pub mod listing;
pub mod normalize;
pub mod region;
pub mod stats;

pub use filters::DashboardState;
pub use join::{attach_provinces, JoinReport, LocationMode, RegionLookup};
pub use listing::{NormalizedListing, OriginLabel, ProductListing};
pub use region::AdministrativeRegion;
