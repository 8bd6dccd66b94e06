use crate::geos::DOMESTIC_ORIGIN;
use serde::Serialize;
use std::fmt;

/// One product row from the listings workbook, after preprocessing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListing {
    pub link: String,
    pub title: String,
    pub price: f64,
    pub marketplace: String,
    pub brand: String,
    pub brand_origin: String, // "ID" = domestic, anything else = imported
    pub category: String,
    pub location: String, // raw "Lokasi" text
}

impl ProductListing {
    pub fn is_domestic(&self) -> bool {
        self.brand_origin == DOMESTIC_ORIGIN
    }

    pub fn origin_label(&self) -> OriginLabel {
        if self.is_domestic() {
            OriginLabel::Lokal
        } else {
            OriginLabel::Impor
        }
    }
}

/// A listing with its province resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedListing {
    pub listing: ProductListing,
    pub province: String,
}

impl NormalizedListing {
    pub fn is_domestic(&self) -> bool {
        self.listing.is_domestic()
    }

    pub fn origin_label(&self) -> OriginLabel {
        self.listing.origin_label()
    }
}

/// Display label used by every chart: local vs imported.
/// Ordered the way a sorted group-by would order the labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum OriginLabel {
    Impor,
    Lokal,
}

impl OriginLabel {
    pub const ALL: [OriginLabel; 2] = [OriginLabel::Lokal, OriginLabel::Impor];

    pub fn as_str(&self) -> &'static str {
        match self {
            OriginLabel::Lokal => "Lokal",
            OriginLabel::Impor => "Impor",
        }
    }

    /// Chart color for the label.
    pub fn color(&self) -> &'static str {
        match self {
            OriginLabel::Lokal => "#1f77b4",
            OriginLabel::Impor => "#ff4b4b",
        }
    }
}

impl fmt::Display for OriginLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
