// src/domain/aggregate.rs
//
// Derived tables behind each chart. Every function takes the listings it should look
// at explicitly; nothing here reads shared state.

use crate::domain::filters::{CategoryFilter, PriceStat};
use crate::domain::listing::{NormalizedListing, OriginLabel};
use crate::domain::stats::{geometric_mean, mean, quantile, BoxStats};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OriginSplit {
    pub lokal: usize,
    pub impor: usize,
}

impl OriginSplit {
    pub fn total(&self) -> usize {
        self.lokal + self.impor
    }

    pub fn count(&self, label: OriginLabel) -> usize {
        match label {
            OriginLabel::Lokal => self.lokal,
            OriginLabel::Impor => self.impor,
        }
    }

    pub fn percent(&self, label: OriginLabel) -> f64 {
        percent(self.count(label), self.total())
    }
}

pub fn origin_split<'a>(listings: impl IntoIterator<Item = &'a NormalizedListing>) -> OriginSplit {
    listings
        .into_iter()
        .fold(OriginSplit::default(), |mut split, l| {
            match l.origin_label() {
                OriginLabel::Lokal => split.lokal += 1,
                OriginLabel::Impor => split.impor += 1,
            }
            split
        })
}

/// Share of domestic listings within a marketplace selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalShare {
    pub local: usize,
    pub total: usize,
    pub percent: f64,
}

pub fn local_share<'a>(listings: impl IntoIterator<Item = &'a NormalizedListing>) -> LocalShare {
    let split = origin_split(listings);
    LocalShare {
        local: split.lokal,
        total: split.total(),
        percent: split.percent(OriginLabel::Lokal),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

fn sorted_counts(counts: HashMap<&str, usize>) -> Vec<CategoryCount> {
    let mut rows: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    rows
}

/// Domestic listings per category, most common first.
pub fn category_counts<'a>(
    listings: impl IntoIterator<Item = &'a NormalizedListing>,
) -> Vec<CategoryCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for l in listings.into_iter().filter(|l| l.is_domestic()) {
        *counts.entry(l.listing.category.as_str()).or_default() += 1;
    }
    sorted_counts(counts)
}

/// Domestic listings per category inside one province.
pub fn province_categories<'a>(
    listings: impl IntoIterator<Item = &'a NormalizedListing>,
    province: &str,
) -> Vec<CategoryCount> {
    category_counts(listings.into_iter().filter(|l| l.province == province))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvinceCount {
    pub province: String,
    pub count: usize,
}

/// Domestic listings per province for every province in `provinces`, in that order.
/// Provinces without listings get 0; listings whose province is not in the list are
/// left out of the table.
pub fn province_counts<'a>(
    listings: impl IntoIterator<Item = &'a NormalizedListing>,
    provinces: &[String],
) -> Vec<ProvinceCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for l in listings.into_iter().filter(|l| l.is_domestic()) {
        *counts.entry(l.province.as_str()).or_default() += 1;
    }

    provinces
        .iter()
        .map(|province| ProvinceCount {
            province: province.clone(),
            count: counts.get(province.as_str()).copied().unwrap_or(0),
        })
        .collect()
}

/// Serializes with the column names the price chart shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPrice {
    #[serde(rename = "Kategori")]
    pub category: String,
    #[serde(rename = "Produk")]
    pub label: OriginLabel,
    #[serde(rename = "Harga")]
    pub price: f64,
}

/// Mean price per (category, label), ordered by category then label.
pub fn mean_price_by_category<'a>(
    listings: impl IntoIterator<Item = &'a NormalizedListing>,
    stat: PriceStat,
) -> Vec<CategoryPrice> {
    let mut groups: BTreeMap<(&str, OriginLabel), Vec<f64>> = BTreeMap::new();
    for l in listings {
        groups
            .entry((l.listing.category.as_str(), l.origin_label()))
            .or_default()
            .push(l.listing.price);
    }

    groups
        .into_iter()
        .filter_map(|((category, label), prices)| {
            let price = match stat {
                PriceStat::Arithmetic => mean(&prices)?,
                PriceStat::Geometric => geometric_mean(&prices),
            };
            Some(CategoryPrice {
                category: category.to_string(),
                label,
                price,
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceDistribution {
    pub boxes: Vec<(OriginLabel, BoxStats)>,
    pub p95: Option<f64>,
}

impl PriceDistribution {
    /// Upper bound of the price axis, 10% above the 95th percentile.
    pub fn axis_max(&self) -> Option<f64> {
        self.p95.map(|p| p * 1.1)
    }
}

pub fn price_distribution<'a>(
    listings: impl IntoIterator<Item = &'a NormalizedListing>,
    category: &CategoryFilter,
) -> PriceDistribution {
    let mut by_label: BTreeMap<OriginLabel, Vec<f64>> = BTreeMap::new();
    let mut all = Vec::new();
    for l in listings.into_iter().filter(|l| category.matches(l)) {
        by_label.entry(l.origin_label()).or_default().push(l.listing.price);
        all.push(l.listing.price);
    }

    let boxes = OriginLabel::ALL
        .iter()
        .filter_map(|label| {
            let prices = by_label.get(label)?;
            Some((*label, BoxStats::from_values(prices)?))
        })
        .collect();

    PriceDistribution {
        boxes,
        p95: quantile(&all, 0.95),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceInsight {
    ImportHigher,
    LocalHigher,
    Balanced,
}

impl PriceInsight {
    pub fn sentence(&self) -> &'static str {
        match self {
            PriceInsight::ImportHigher => "Produk impor umumnya berada pada kisaran harga yang lebih tinggi, sementara produk lokal cenderung lebih terjangkau.",
            PriceInsight::LocalHigher => "Produk lokal justru memiliki rata-rata harga lebih tinggi dibandingkan produk impor, menunjukkan adanya segmen premium pada produk dalam negeri.",
            PriceInsight::Balanced => "Harga produk lokal dan impor relatif seimbang, menunjukkan persaingan yang cukup setara di pasar e-commerce.",
        }
    }
}

/// Compares mean local price to mean import price. Missing either side counts as balanced.
pub fn price_insight<'a>(listings: impl IntoIterator<Item = &'a NormalizedListing>) -> PriceInsight {
    let (mut local, mut import) = (Vec::new(), Vec::new());
    for l in listings {
        match l.origin_label() {
            OriginLabel::Lokal => local.push(l.listing.price),
            OriginLabel::Impor => import.push(l.listing.price),
        }
    }

    match (mean(&local), mean(&import)) {
        (Some(l), Some(i)) if l < i => PriceInsight::ImportHigher,
        (Some(l), Some(i)) if l > i => PriceInsight::LocalHigher,
        _ => PriceInsight::Balanced,
    }
}
