pub mod export_xlsx;
pub mod load_xlsx;

pub use export_xlsx::{export_listings_xlsx, listings_workbook};
pub use load_xlsx::{load_listings, LoadReport};
