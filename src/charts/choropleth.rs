use crate::domain::aggregate::ProvinceCount;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
struct ProvinceRow<'a> {
    #[serde(flatten)]
    count: &'a ProvinceCount,
    href: String,
}

/// Province map colored by the number of domestic listings. Shapes are fetched from
/// `shapes_url`; counts are joined onto them by province name. Clicking a province
/// follows the `href` produced for it.
pub fn choropleth_spec(
    counts: &[ProvinceCount],
    shapes_url: &str,
    theme: &str,
    href: impl Fn(&str) -> String,
) -> Value {
    let values: Vec<ProvinceRow> = counts
        .iter()
        .map(|count| ProvinceRow { count, href: href(&count.province) })
        .collect();

    json!({
        "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
        "width": "container",
        "height": 500,
        "data": { "url": shapes_url, "format": { "type": "json", "property": "features" } },
        "transform": [{
            "lookup": "properties.name",
            "from": { "data": { "values": values }, "key": "province", "fields": ["count", "href"] },
            "default": 0
        }],
        "projection": { "type": "mercator" },
        "mark": { "type": "geoshape", "stroke": "white", "strokeWidth": 0.5, "cursor": "pointer" },
        "encoding": {
            "color": {
                "field": "count",
                "type": "quantitative",
                "scale": { "scheme": theme },
                "title": "Jumlah Penjual"
            },
            "href": { "field": "href", "type": "nominal" },
            "tooltip": [
                { "field": "properties.name", "type": "nominal", "title": "Provinsi" },
                { "field": "count", "type": "quantitative", "title": "Jumlah Penjual" }
            ]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_province_gets_a_count_and_link() {
        let counts = vec![
            ProvinceCount { province: "Bali".to_string(), count: 3 },
            ProvinceCount { province: "Aceh".to_string(), count: 0 },
        ];

        let spec = choropleth_spec(&counts, "/geo/provinces.json", "viridis", |p| format!("/?provinsi={p}"));

        let values = spec["transform"][0]["from"]["data"]["values"].as_array().unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[1]["province"], "Aceh");
        assert_eq!(values[1]["count"], 0);
        assert_eq!(values[1]["href"], "/?provinsi=Aceh");
        assert_eq!(spec["encoding"]["color"]["scale"]["scheme"], "viridis");
        assert_eq!(spec["data"]["url"], "/geo/provinces.json");
    }
}
