pub mod dashboard;
pub mod dominance;
pub mod location;
pub mod price;

pub use dashboard::dashboard_page;
