use crate::charts::donut_spec;
use crate::dashboard::Dashboard;
use crate::domain::aggregate::{category_counts, local_share, origin_split};
use crate::domain::{DashboardState, OriginLabel};
use crate::geos::{ALL_MARKETPLACES, MARKETPLACES};
use crate::templates::components::{category_table, state_select, thousands};
use crate::templates::chart;
use maud::{html, Markup};

pub fn dominance_tab(dashboard: &Dashboard, state: &DashboardState) -> Markup {
    let split = origin_split(&dashboard.listings);
    let in_marketplace: Vec<_> = dashboard
        .listings
        .iter()
        .filter(|l| state.marketplace.matches(l))
        .collect();
    let share = local_share(in_marketplace.iter().copied());
    let categories = category_counts(in_marketplace.iter().copied());

    let marketplaces: Vec<(&str, &str)> = std::iter::once(ALL_MARKETPLACES)
        .chain(MARKETPLACES.iter().copied())
        .map(|m| (m, m))
        .collect();

    html! {
        h2 { "📦 Dominasi Produk Lokal vs Impor" }
        div class="columns" {
            div { (chart("donut", &donut_spec(&split))) }
            div {
                p {
                    "Produk lokal mencakup "
                    strong { (format!("{:.1}%", split.percent(OriginLabel::Lokal))) }
                    " sedangkan produk impor mencakup "
                    strong { (format!("{:.1}%", split.percent(OriginLabel::Impor))) }
                    " dari total penawaran di e-commerce. Perbandingan ini memberikan gambaran mengenai "
                    "komposisi produk yang tersedia di pasar digital, serta menunjukkan bagaimana kedua "
                    "jenis produk hadir dan bersaing di platform online."
                }
                p {
                    "Informasi ini bermanfaat untuk memahami kecenderungan penawaran produk di e-commerce, "
                    "baik dalam melihat kekuatan produk dalam negeri maupun posisi produk impor di tengah "
                    "persaingan pasar."
                }
            }
        }

        h2 { "🔍 Analisis Produk Lokal Berdasarkan Marketplace" }
        div class="columns wide" {
            div {
                (state_select(state, "marketplace", "Pilih marketplace", &marketplaces, state.marketplace.as_param()))
                div class="metric-title" {
                    "Produk Lokal di " strong { (state.marketplace.as_param()) }
                }
                div class="metric-value" id="local-share" {
                    (format!("{:.1}%", share.percent))
                    span { " (" (thousands(share.local)) " dari " (thousands(share.total)) " produk)" }
                }
                p {
                    "Bagian ini menampilkan jumlah produk lokal yang tersedia di setiap marketplace. "
                    "Informasi ini membantu untuk memahami seberapa besar kontribusi produk lokal dalam "
                    "platform yang dipilih, sekaligus memperlihatkan kategori mana yang lebih dominan."
                }
            }
            div { (category_table(&categories)) }
        }
    }
}
