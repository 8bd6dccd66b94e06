//! Vega-Lite specifications for the dashboard charts. The page hands them to
//! vega-embed in the browser; nothing here draws anything.

pub mod choropleth;
pub mod donut;
pub mod price;

pub use choropleth::choropleth_spec;
pub use donut::donut_spec;
pub use price::{boxplot_spec, grouped_price_spec};

use crate::domain::listing::OriginLabel;
use serde_json::{json, Value};

/// Fixed Lokal/Impor color scale shared by every chart that splits on origin.
pub(crate) fn origin_color_scale() -> Value {
    let labels = OriginLabel::ALL;
    json!({
        "domain": labels.iter().map(|l| l.as_str()).collect::<Vec<_>>(),
        "range": labels.iter().map(|l| l.color()).collect::<Vec<_>>(),
    })
}
