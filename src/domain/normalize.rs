// src/domain/normalize.rs

use crate::geos::{
    CAPITAL_TERRITORY, CITY_PREFIX, LOCATION_OVERRIDES, PREFIXED_CITIES, REGENCY_PREFIXES,
};

/// Rewrites free-text marketplace location into the level-2 spelling used by the
/// boundary dataset. The order of checks is the precedence: overrides first, then
/// the prefix rules, then the known-city list. Never fails; a result that matches
/// no region is dropped later by the join.
pub fn normalize_location(raw: &str) -> String {
    let loc = raw.trim();

    if let Some((_, canonical)) = LOCATION_OVERRIDES.iter().find(|(key, _)| *key == loc) {
        return (*canonical).to_string();
    }

    for prefix in REGENCY_PREFIXES {
        if let Some(rest) = loc.strip_prefix(prefix) {
            return rest.trim().to_string();
        }
    }

    if loc.starts_with(CITY_PREFIX) {
        return loc.to_string();
    }

    if loc.starts_with(CAPITAL_TERRITORY) || PREFIXED_CITIES.contains(&loc) {
        return format!("{CITY_PREFIX}{loc}");
    }

    loc.to_string()
}
