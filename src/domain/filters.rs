// src/domain/filters.rs

use crate::domain::listing::NormalizedListing;
use crate::geos::{ALL_CATEGORIES, ALL_MARKETPLACES, CATEGORIES, COLOR_THEMES, MARKETPLACES};
use url::form_urlencoded;

#[derive(Debug, Clone, PartialEq)]
pub enum MarketplaceFilter {
    All,
    Only(String),
}

impl MarketplaceFilter {
    pub fn parse(value: &str) -> Option<Self> {
        if value == ALL_MARKETPLACES {
            return Some(MarketplaceFilter::All);
        }
        MARKETPLACES
            .contains(&value)
            .then(|| MarketplaceFilter::Only(value.to_string()))
    }

    pub fn as_param(&self) -> &str {
        match self {
            MarketplaceFilter::All => ALL_MARKETPLACES,
            MarketplaceFilter::Only(name) => name,
        }
    }

    pub fn matches(&self, listing: &NormalizedListing) -> bool {
        match self {
            MarketplaceFilter::All => true,
            MarketplaceFilter::Only(name) => listing.listing.marketplace == *name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Option<Self> {
        if value == ALL_CATEGORIES {
            return Some(CategoryFilter::All);
        }
        CATEGORIES
            .contains(&value)
            .then(|| CategoryFilter::Only(value.to_string()))
    }

    pub fn as_param(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(name) => name,
        }
    }

    pub fn matches(&self, listing: &NormalizedListing) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => listing.listing.category == *name,
        }
    }
}

/// Central tendency used by the grouped price chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceStat {
    #[default]
    Arithmetic,
    Geometric,
}

impl PriceStat {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "aritmetika" => Some(PriceStat::Arithmetic),
            "geometrik" => Some(PriceStat::Geometric),
            _ => None,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            PriceStat::Arithmetic => "aritmetika",
            PriceStat::Geometric => "geometrik",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceStat::Arithmetic => "Rata-rata Harga",
            PriceStat::Geometric => "Rata-rata Geometrik Harga",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dominance,
    Location,
    Price,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Dominance, Tab::Location, Tab::Price];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dominasi" => Some(Tab::Dominance),
            "lokasi" => Some(Tab::Location),
            "harga" => Some(Tab::Price),
            _ => None,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            Tab::Dominance => "dominasi",
            Tab::Location => "lokasi",
            Tab::Price => "harga",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dominance => "Dominasi Produk",
            Tab::Location => "Sebaran Lokasi",
            Tab::Price => "Analisis Harga",
        }
    }
}

/// Everything the user can select in the UI. Parsed from the query string on every
/// request and passed explicitly to the page and chart builders.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub tab: Tab,
    pub theme: &'static str,
    pub marketplace: MarketplaceFilter,
    pub category: CategoryFilter,
    pub province: Option<String>,
    pub price_stat: PriceStat,
}

impl Default for DashboardState {
    fn default() -> Self {
        DashboardState {
            tab: Tab::default(),
            theme: COLOR_THEMES[0],
            marketplace: MarketplaceFilter::All,
            category: CategoryFilter::All,
            province: None,
            price_stat: PriceStat::default(),
        }
    }
}

impl DashboardState {
    pub fn parse_theme(value: &str) -> Option<&'static str> {
        COLOR_THEMES.iter().copied().find(|t| *t == value)
    }

    /// Builds the state from a raw query string. Missing parameters take their
    /// defaults; unknown values are rejected with a message naming the parameter.
    pub fn from_query(
        query: Option<&str>,
        is_province: impl Fn(&str) -> bool,
    ) -> Result<Self, String> {
        let mut state = DashboardState::default();

        for (key, value) in form_urlencoded::parse(query.unwrap_or("").as_bytes()) {
            let invalid = || format!("unknown value '{value}' for '{key}'");
            match key.as_ref() {
                "tab" => state.tab = Tab::parse(&value).ok_or_else(invalid)?,
                "theme" => state.theme = Self::parse_theme(&value).ok_or_else(invalid)?,
                "marketplace" => {
                    state.marketplace = MarketplaceFilter::parse(&value).ok_or_else(invalid)?
                }
                "kategori" => state.category = CategoryFilter::parse(&value).ok_or_else(invalid)?,
                "rerata" => state.price_stat = PriceStat::parse(&value).ok_or_else(invalid)?,
                "provinsi" if value.is_empty() => state.province = None,
                "provinsi" if is_province(&value) => state.province = Some(value.to_string()),
                "provinsi" => return Err(invalid()),
                _ => {}
            }
        }

        Ok(state)
    }

    /// Whether a listing passes the marketplace, category and province selections.
    /// Used by the export; the charts apply the selections they each care about.
    pub fn matches(&self, listing: &NormalizedListing) -> bool {
        self.marketplace.matches(listing)
            && self.category.matches(listing)
            && self
                .province
                .as_deref()
                .map_or(true, |p| listing.province == p)
    }

    /// Query parameters that reproduce this state, in a stable order.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        let mut params = vec![
            ("tab", self.tab.as_param()),
            ("theme", self.theme),
            ("marketplace", self.marketplace.as_param()),
            ("kategori", self.category.as_param()),
            ("rerata", self.price_stat.as_param()),
        ];
        if let Some(province) = &self.province {
            params.push(("provinsi", province.as_str()));
        }
        params
    }

    /// Query string (without the leading `?`) that reproduces this state.
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params())
            .finish()
    }

    /// Link to the dashboard with one change applied.
    pub fn href_with(&self, change: impl FnOnce(&mut DashboardState)) -> String {
        let mut next = self.clone();
        change(&mut next);
        format!("/?{}", next.query_string())
    }
}
