use crate::charts::choropleth_spec;
use crate::dashboard::Dashboard;
use crate::domain::aggregate::{province_categories, province_counts};
use crate::domain::filters::Tab;
use crate::domain::DashboardState;
use crate::templates::components::{category_table, thousands};
use crate::templates::{card, chart};
use maud::{html, Markup};

pub const SHAPES_URL: &str = "/geo/provinces.json";

pub fn location_tab(dashboard: &Dashboard, state: &DashboardState) -> Markup {
    let counts = province_counts(&dashboard.listings, &dashboard.provinces);
    let spec = choropleth_spec(&counts, SHAPES_URL, state.theme, |province| {
        state.href_with(|s| {
            s.tab = Tab::Location;
            s.province = Some(province.to_string());
        })
    });
    let report = &dashboard.join_report;
    let loaded = &dashboard.load_report;

    html! {
        h2 { "🗺️ Sebaran Lokasi Penjual Produk Lokal" }
        p { "Peta ini menunjukkan konsentrasi penjual produk lokal di setiap provinsi. Klik provinsi untuk melihat kategori produknya." }
        (chart("choropleth", &spec))

        @if let Some(province) = &state.province {
            (card(&format!("📦 Kategori Produk di {province}"), html! {
                (category_table(&province_categories(&dashboard.listings, province)))
                p { a href=(state.href_with(|s| s.province = None)) { "Tutup pilihan provinsi" } }
            }))
        }

        @if report.dropped > 0 {
            p class="note" id="unmatched-note" {
                (thousands(report.dropped)) " produk tidak dapat dipetakan ke provinsi ("
                (thousands(report.unmatched_locations.len())) " nama lokasi tidak dikenal) dan tidak diikutkan."
            }
        }
        @if loaded.dropped_missing + loaded.dropped_unknown_origin > 0 {
            p class="note" id="load-note" {
                "Dari " (thousands(loaded.rows_read)) " baris data, "
                (thousands(loaded.dropped_missing)) " baris dilewati karena kolomnya kosong dan "
                (thousands(loaded.dropped_unknown_origin)) " karena asal brand tidak diketahui."
            }
        }
    }
}
