use crate::charts::{boxplot_spec, grouped_price_spec};
use crate::dashboard::Dashboard;
use crate::domain::aggregate::{mean_price_by_category, price_distribution, price_insight};
use crate::domain::filters::{CategoryFilter, PriceStat};
use crate::domain::DashboardState;
use crate::geos::{ALL_CATEGORIES, CATEGORIES};
use crate::templates::chart;
use crate::templates::components::state_select;
use maud::{html, Markup};

pub fn price_tab(dashboard: &Dashboard, state: &DashboardState) -> Markup {
    let listings = &dashboard.listings;
    let prices = mean_price_by_category(listings, state.price_stat);
    let distribution = price_distribution(listings, &state.category);
    let insight = price_insight(listings);

    let stats = [
        (PriceStat::Arithmetic.as_param(), "Rata-rata aritmetika"),
        (PriceStat::Geometric.as_param(), "Rata-rata geometrik"),
    ];
    let categories: Vec<(&str, &str)> = std::iter::once(ALL_CATEGORIES)
        .chain(CATEGORIES.iter().copied())
        .map(|c| (c, c))
        .collect();

    html! {
        h2 { "💰 Rata-rata Harga Produk Lokal vs Impor Setiap Kategori" }
        (state_select(state, "rerata", "Ukuran rata-rata", &stats, state.price_stat.as_param()))
        (chart("grouped-price", &grouped_price_spec(&prices, state.price_stat)))

        h2 { "💳 Distribusi Harga Produk Lokal vs Impor" }
        div class="columns wide" {
            div {
                (state_select(state, "kategori", "Pilih Kategori", &categories, state.category.as_param()))
                p {
                    "Distribusi harga produk lokal dan impor menunjukkan adanya perbedaan pola di pasar. "
                    span id="price-insight" { (insight.sentence()) }
                }
                p {
                    "Informasi ini memberi gambaran bagaimana kedua jenis produk menempati segmen harga "
                    "dan bagaimana konsumen dapat mempertimbangkan pilihan sesuai kebutuhan."
                }
            }
            div {
                h3 style="text-align: center; font-size: 16px; font-weight: 600;" {
                    @match &state.category {
                        CategoryFilter::All => "Distribusi Harga Produk Lokal dan Impor di Semua Kategori",
                        CategoryFilter::Only(name) => {
                            "Distribusi Harga Produk Lokal vs Impor di Kategori " (name)
                        }
                    }
                }
                (chart("price-box", &boxplot_spec(&distribution)))
            }
        }
    }
}
