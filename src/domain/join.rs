// src/domain/join.rs

use crate::domain::listing::{NormalizedListing, ProductListing};
use crate::domain::normalize::normalize_location;
use crate::domain::region::{AdministrativeRegion, RegionLevel};
use std::collections::{BTreeSet, HashMap};

/// Level-2 region name -> parent province name.
#[derive(Debug, Default)]
pub struct RegionLookup {
    provinces: HashMap<String, String>,
    duplicates: usize,
}

impl RegionLookup {
    /// Keeps the first occurrence of a duplicated region name, in boundary file order.
    pub fn from_regions(regions: &[AdministrativeRegion]) -> Self {
        let mut lookup = RegionLookup::default();

        for region in regions.iter().filter(|r| r.level == RegionLevel::Regency) {
            let Some(parent) = &region.parent else {
                continue;
            };
            if lookup.provinces.contains_key(&region.name) {
                lookup.duplicates += 1;
                tracing::debug!(region = %region.name, province = %parent, "duplicate region name ignored");
                continue;
            }
            lookup
                .provinces
                .insert(region.name.clone(), parent.clone());
        }

        lookup
    }

    pub fn province_of(&self, normalized: &str) -> Option<&str> {
        self.provinces.get(normalized).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.provinces.len()
    }

    pub fn duplicates(&self) -> usize {
        self.duplicates
    }
}

/// How the "Lokasi" column is turned into a province.
#[derive(Debug)]
pub enum LocationMode {
    /// The column already holds the province name.
    Province,
    /// The column holds a city/regency; normalize it and look up the parent province.
    Regency(RegionLookup),
}

/// What the join did with the listings it was given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinReport {
    pub matched: usize,
    pub dropped: usize,
    /// Distinct normalized locations that matched no region, sorted.
    pub unmatched_locations: Vec<String>,
}

pub fn attach_provinces(
    listings: Vec<ProductListing>,
    mode: &LocationMode,
) -> (Vec<NormalizedListing>, JoinReport) {
    let mut joined = Vec::with_capacity(listings.len());
    let mut report = JoinReport::default();
    let mut unmatched = BTreeSet::new();

    for listing in listings {
        let province = match mode {
            LocationMode::Province => Some(listing.location.clone()),
            LocationMode::Regency(lookup) => {
                let normalized = normalize_location(&listing.location);
                let province = lookup.province_of(&normalized).map(str::to_string);
                // A bare prefix like "Kab." normalizes to nothing; it is dropped but not
                // reported as a location name.
                if province.is_none() && !normalized.is_empty() {
                    unmatched.insert(normalized);
                }
                province
            }
        };

        match province {
            Some(province) => {
                report.matched += 1;
                joined.push(NormalizedListing { listing, province });
            }
            None => report.dropped += 1,
        }
    }

    report.unmatched_locations = unmatched.into_iter().collect();
    (joined, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(location: &str) -> ProductListing {
        ProductListing {
            link: format!("https://example.com/{location}"),
            title: "Kemeja".to_string(),
            price: 100_000.0,
            marketplace: "Blibli".to_string(),
            brand: "Brand".to_string(),
            brand_origin: "ID".to_string(),
            category: "Fashion & Aksesoris".to_string(),
            location: location.to_string(),
        }
    }

    fn regions() -> Vec<AdministrativeRegion> {
        vec![
            AdministrativeRegion::province("Jawa Barat"),
            AdministrativeRegion::regency("Bandung", "Jawa Barat"),
            AdministrativeRegion::regency("Kota Bandung", "Jawa Barat"),
            AdministrativeRegion::regency("Kota Surakarta", "Jawa Tengah"),
            AdministrativeRegion::regency("Kota Jakarta Selatan", "Dki Jakarta"),
        ]
    }

    #[test]
    fn lookup_keeps_first_duplicate() {
        let mut regions = regions();
        regions.push(AdministrativeRegion::regency("Bandung", "Somewhere Else"));

        let lookup = RegionLookup::from_regions(&regions);

        assert_eq!(lookup.len(), 4);
        assert_eq!(lookup.duplicates(), 1);
        assert_eq!(lookup.province_of("Bandung"), Some("Jawa Barat"));
        // Provinces are not keys.
        assert_eq!(lookup.province_of("Jawa Barat"), None);
    }

    #[test]
    fn join_resolves_and_drops_unmatched() {
        let mode = LocationMode::Regency(RegionLookup::from_regions(&regions()));
        let input = vec![
            listing("Kab. Bandung"),
            listing("Solo"),
            listing("Jakarta Selatan"),
            listing("Atlantis"),
            listing("Atlantis "),
        ];

        let (joined, report) = attach_provinces(input, &mode);

        let provinces: Vec<&str> = joined.iter().map(|l| l.province.as_str()).collect();
        assert_eq!(provinces, vec!["Jawa Barat", "Jawa Tengah", "Dki Jakarta"]);
        assert_eq!(report.matched, 3);
        assert_eq!(report.dropped, 2);
        assert_eq!(report.unmatched_locations, vec!["Atlantis".to_string()]);
    }

    #[test]
    fn blank_locations_are_dropped_without_a_name() {
        let mode = LocationMode::Regency(RegionLookup::from_regions(&regions()));

        let (joined, report) = attach_provinces(vec![listing("Kab."), listing("Solo")], &mode);

        assert_eq!(joined.len(), 1);
        assert_eq!(report.dropped, 1);
        assert!(report.unmatched_locations.is_empty());
    }

    #[test]
    fn join_is_idempotent() {
        let mode = LocationMode::Regency(RegionLookup::from_regions(&regions()));
        let input = vec![listing("Kota Bandung"), listing("Solo"), listing("Nowhere")];

        let (first, _) = attach_provinces(input, &mode);
        let again: Vec<ProductListing> = first.iter().map(|l| l.listing.clone()).collect();
        let (second, report) = attach_provinces(again, &mode);

        assert_eq!(first, second);
        assert_eq!(report.dropped, 0);
    }

    #[test]
    fn province_mode_uses_location_verbatim() {
        let (joined, report) = attach_provinces(vec![listing("Jawa Timur")], &LocationMode::Province);

        assert_eq!(joined[0].province, "Jawa Timur");
        assert_eq!(report.matched, 1);
        assert!(report.unmatched_locations.is_empty());
    }
}
