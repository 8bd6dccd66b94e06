use crate::dashboard::Dashboard;
use crate::domain::filters::Tab;
use crate::domain::DashboardState;
use crate::geos::COLOR_THEMES;
use crate::templates::components::{state_select, thousands};
use crate::templates::desktop_layout;
use crate::templates::pages::{dominance, location, price};
use maud::{html, Markup};

pub const PAGE_TITLE: &str = "Monitoring Produk Lokal";

pub fn dashboard_page(dashboard: &Dashboard, state: &DashboardState) -> Markup {
    let content = match state.tab {
        Tab::Dominance => dominance::dominance_tab(dashboard, state),
        Tab::Location => location::location_tab(dashboard, state),
        Tab::Price => price::price_tab(dashboard, state),
    };

    desktop_layout(
        PAGE_TITLE,
        sidebar(state),
        html! {
            nav class="tabs" {
                @for tab in Tab::ALL {
                    a href=(state.href_with(|s| s.tab = tab))
                      class=[(tab == state.tab).then_some("active")] {
                        (tab.title())
                    }
                }
            }
            (content)
            footer {
                (thousands(dashboard.listings.len())) " produk dianalisis · data dimuat "
                (dashboard.loaded_at.format("%d-%m-%Y %H:%M").to_string())
                " · "
                a href=(format!("/export.xlsx?{}", state.query_string())) { "Unduh data (xlsx)" }
            }
        },
    )
}

fn sidebar(state: &DashboardState) -> Markup {
    let themes: Vec<(&str, &str)> = COLOR_THEMES.iter().map(|t| (*t, *t)).collect();

    html! {
        h1 { "🛍️ Dashboard Monitoring Produk Lokal di Marketplace" }
        p {
            "Visualisasi interaktif produk lokal di marketplace Indonesia. "
            "Dashboard ini dirancang untuk memantau tren, distribusi, dan perbandingan produk lokal "
            "dengan produk impor sebagai dasar pertimbangan kebijakan strategis."
        }
        (state_select(state, "theme", "Pilih tema warna", &themes, state.theme))
    }
}
