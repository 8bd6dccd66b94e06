// src/geos/boundaries.rs

use crate::domain::region::AdministrativeRegion;
use crate::errors::DataError;
use geojson::{Feature, FeatureCollection, GeoJson, JsonObject};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Province name attribute in the statistics-bureau boundary files.
pub const PROVINCE_NAME_FIELD: &str = "ADM1_EN";
/// Regency/city name attribute in the level-2 boundary file.
pub const REGENCY_NAME_FIELD: &str = "ADM2_EN";

fn read_collection(path: &Path) -> Result<FeatureCollection, DataError> {
    let raw = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;

    match raw.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(fc) => Ok(fc),
        _ => Err(DataError::NotAFeatureCollection(path.display().to_string())),
    }
}

fn string_property(feature: &Feature, field: &str) -> Option<String> {
    match feature.property(field)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

/// Level-1 regions with their geometry, in file order.
pub fn provinces_from_collection(fc: FeatureCollection) -> Vec<AdministrativeRegion> {
    fc.features
        .into_iter()
        .filter_map(|feature| {
            let name = string_property(&feature, PROVINCE_NAME_FIELD)?;
            Some(AdministrativeRegion::province(name).with_geometry(feature.geometry))
        })
        .collect()
}

/// Level-2 regions with their parent province. Geometry is not needed for the join
/// and is dropped.
pub fn regencies_from_collection(fc: &FeatureCollection) -> Vec<AdministrativeRegion> {
    fc.features
        .iter()
        .filter_map(|feature| {
            let name = string_property(feature, REGENCY_NAME_FIELD)?;
            let province = string_property(feature, PROVINCE_NAME_FIELD)?;
            Some(AdministrativeRegion::regency(name, province))
        })
        .collect()
}

pub fn load_provinces(path: &Path) -> Result<Vec<AdministrativeRegion>, DataError> {
    Ok(provinces_from_collection(read_collection(path)?))
}

pub fn load_regencies(path: &Path) -> Result<Vec<AdministrativeRegion>, DataError> {
    Ok(regencies_from_collection(&read_collection(path)?))
}

/// Province shapes as a FeatureCollection carrying only a `name` property, served to
/// the choropleth.
pub fn province_shapes_geojson(provinces: &[AdministrativeRegion]) -> String {
    let features = provinces
        .iter()
        .map(|region| {
            let mut properties = JsonObject::new();
            properties.insert("name".to_string(), Value::String(region.name.clone()));
            Feature {
                bbox: None,
                geometry: region.geometry.clone(),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    GeoJson::FeatureCollection(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROVINCES: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"ADM1_EN": "Bali", "ADM1_PCODE": "ID51"},
             "geometry": {"type": "Polygon", "coordinates": [[[115.0, -8.0], [115.5, -8.0], [115.5, -8.5], [115.0, -8.0]]]}},
            {"type": "Feature", "properties": {"ADM1_EN": null}, "geometry": null},
            {"type": "Feature", "properties": {"ADM1_EN": "Papua"}, "geometry": null}
        ]
    }"#;

    const REGENCIES: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"ADM2_EN": "Kota Denpasar", "ADM1_EN": "Bali"}, "geometry": null},
            {"type": "Feature", "properties": {"ADM2_EN": "Badung", "ADM1_EN": "Bali"}, "geometry": null},
            {"type": "Feature", "properties": {"ADM2_EN": "Orphan"}, "geometry": null}
        ]
    }"#;

    fn collection(raw: &str) -> FeatureCollection {
        match raw.parse::<GeoJson>().unwrap() {
            GeoJson::FeatureCollection(fc) => fc,
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn provinces_keep_file_order_and_skip_unnamed() {
        let provinces = provinces_from_collection(collection(PROVINCES));

        let names: Vec<&str> = provinces.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bali", "Papua"]);
        assert!(provinces[0].geometry.is_some());
    }

    #[test]
    fn regencies_need_a_parent() {
        let regencies = regencies_from_collection(&collection(REGENCIES));

        assert_eq!(regencies.len(), 2);
        assert_eq!(regencies[0].name, "Kota Denpasar");
        assert_eq!(regencies[0].parent.as_deref(), Some("Bali"));
    }

    #[test]
    fn shapes_only_carry_the_name() {
        let provinces = provinces_from_collection(collection(PROVINCES));

        let json: Value = serde_json::from_str(&province_shapes_geojson(&provinces)).unwrap();

        assert_eq!(json["features"][0]["properties"], serde_json::json!({"name": "Bali"}));
        assert_eq!(json["features"][0]["geometry"]["type"], "Polygon");
    }
}
