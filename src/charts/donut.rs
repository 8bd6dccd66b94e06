use crate::charts::origin_color_scale;
use crate::domain::aggregate::OriginSplit;
use crate::domain::listing::OriginLabel;
use serde_json::{json, Value};

/// Donut of Lokal vs Impor with the Lokal share printed in the middle.
pub fn donut_spec(split: &OriginSplit) -> Value {
    let total = split.total();
    let values: Vec<Value> = OriginLabel::ALL
        .iter()
        .map(|label| {
            let count = split.count(*label);
            let share = if total == 0 { 0.0 } else { count as f64 / total as f64 };
            json!({ "Produk": label.as_str(), "Jumlah": count, "Persentase": share })
        })
        .collect();

    json!({
        "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
        "data": { "values": values },
        "height": 280,
        "width": "container",
        "params": [{
            "name": "pilih",
            "select": { "type": "point", "fields": ["Produk"] },
            "value": [{ "Produk": OriginLabel::Lokal.as_str() }]
        }],
        "layer": [
            {
                "mark": { "type": "arc", "innerRadius": 72, "outerRadius": 130 },
                "encoding": {
                    "theta": { "field": "Jumlah", "type": "quantitative", "stack": true },
                    "color": { "field": "Produk", "type": "nominal", "scale": origin_color_scale() },
                    "opacity": { "condition": { "param": "pilih", "value": 1 }, "value": 0.5 },
                    "tooltip": [
                        { "field": "Produk", "type": "nominal" },
                        { "field": "Jumlah", "type": "quantitative" },
                        { "field": "Persentase", "type": "quantitative", "format": ".1%" }
                    ]
                }
            },
            {
                "transform": [{ "filter": { "param": "pilih", "empty": false } }],
                "mark": { "type": "text", "font": "Lato", "fontSize": 30, "fontWeight": 700, "fontStyle": "italic" },
                "encoding": {
                    "text": { "field": "Persentase", "type": "quantitative", "format": ".1%" },
                    "color": { "field": "Produk", "type": "nominal", "scale": origin_color_scale(), "legend": null }
                }
            }
        ]
    })
}
