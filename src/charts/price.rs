use crate::charts::origin_color_scale;
use crate::domain::aggregate::{CategoryPrice, PriceDistribution};
use crate::domain::filters::PriceStat;
use crate::domain::listing::OriginLabel;
use crate::domain::stats::BoxStats;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
struct BoxRow<'a> {
    #[serde(rename = "Jenis Produk")]
    label: OriginLabel,
    #[serde(flatten)]
    stats: &'a BoxStats,
}

/// Bars of mean price per category, Lokal and Impor side by side.
pub fn grouped_price_spec(prices: &[CategoryPrice], stat: PriceStat) -> Value {
    json!({
        "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
        "data": { "values": prices },
        "width": "container",
        "height": 500,
        "mark": "bar",
        "encoding": {
            "x": { "field": "Kategori", "type": "nominal", "title": "Kategori", "axis": { "labelAngle": -45 } },
            "xOffset": { "field": "Produk", "type": "nominal" },
            "y": { "field": "Harga", "type": "quantitative", "title": stat.label() },
            "color": {
                "field": "Produk",
                "type": "nominal",
                "scale": origin_color_scale(),
                "legend": { "title": "Produk" }
            },
            "tooltip": [
                { "field": "Kategori", "type": "nominal", "title": "Kategori" },
                { "field": "Produk", "type": "nominal", "title": "Produk" },
                { "field": "Harga", "type": "quantitative", "title": stat.label(), "format": ",.2f" }
            ]
        }
    })
}

/// Boxplot from precomputed quartiles and whiskers. The price axis stops 10% above
/// the 95th percentile so a few very expensive items don't flatten the boxes.
pub fn boxplot_spec(dist: &PriceDistribution) -> Value {
    let values: Vec<BoxRow> = dist
        .boxes
        .iter()
        .map(|(label, stats)| BoxRow { label: *label, stats })
        .collect();

    let mut y_scale = json!({ "zero": true });
    if let Some(max) = dist.axis_max() {
        y_scale = json!({ "domain": [0.0, max], "clamp": true });
    }
    let x = json!({ "field": "Jenis Produk", "type": "nominal", "title": "Jenis Produk" });
    let color = json!({ "field": "Jenis Produk", "type": "nominal", "scale": origin_color_scale(), "legend": null });

    json!({
        "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
        "data": { "values": values },
        "width": "container",
        "height": 400,
        "encoding": { "x": x },
        "layer": [
            {
                "mark": { "type": "rule", "clip": true },
                "encoding": {
                    "y": { "field": "lower_whisker", "type": "quantitative", "title": "Harga Produk", "scale": y_scale },
                    "y2": { "field": "upper_whisker" }
                }
            },
            {
                "mark": { "type": "bar", "size": 60, "clip": true },
                "encoding": {
                    "y": { "field": "q1", "type": "quantitative" },
                    "y2": { "field": "q3" },
                    "color": color,
                    "tooltip": [
                        { "field": "Jenis Produk", "type": "nominal" },
                        { "field": "count", "type": "quantitative", "title": "Jumlah" },
                        { "field": "q1", "type": "quantitative", "format": ",.0f" },
                        { "field": "median", "type": "quantitative", "format": ",.0f" },
                        { "field": "q3", "type": "quantitative", "format": ",.0f" },
                        { "field": "outliers", "type": "quantitative", "title": "Pencilan" }
                    ]
                }
            },
            {
                "mark": { "type": "tick", "color": "white", "size": 60, "clip": true },
                "encoding": { "y": { "field": "median", "type": "quantitative" } }
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxplot_axis_is_bounded_by_p95() {
        let dist = PriceDistribution {
            boxes: vec![(OriginLabel::Lokal, BoxStats::from_values(&[1.0, 2.0, 3.0]).unwrap())],
            p95: Some(100.0),
        };

        let spec = boxplot_spec(&dist);

        let domain = &spec["layer"][0]["encoding"]["y"]["scale"]["domain"];
        assert_eq!(domain[0], 0.0);
        assert!((domain[1].as_f64().unwrap() - 110.0).abs() < 1e-9);
        let row = &spec["data"]["values"][0];
        assert_eq!(row["Jenis Produk"], "Lokal");
        assert_eq!(row["median"], 2.0);
        assert_eq!(row["lower_whisker"], 1.0);
        assert_eq!(row["count"], 3);
    }

    #[test]
    fn boxplot_without_data_has_open_axis() {
        let spec = boxplot_spec(&PriceDistribution { boxes: vec![], p95: None });

        assert!(spec["layer"][0]["encoding"]["y"]["scale"]["domain"].is_null());
    }

    #[test]
    fn grouped_bars_title_follows_stat() {
        let prices = vec![CategoryPrice {
            category: "Lain-Lain".to_string(),
            label: OriginLabel::Impor,
            price: 12.5,
        }];

        let spec = grouped_price_spec(&prices, PriceStat::Geometric);

        assert_eq!(spec["encoding"]["y"]["title"], "Rata-rata Geometrik Harga");
        let row = &spec["data"]["values"][0];
        assert_eq!(row["Kategori"], "Lain-Lain");
        assert_eq!(row["Produk"], "Impor");
        assert_eq!(row["Harga"], 12.5);
    }
}
