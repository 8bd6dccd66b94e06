use crate::domain::aggregate::CategoryCount;
use crate::domain::DashboardState;
use maud::{html, Markup, PreEscaped};
use serde_json::Value;

pub mod error;

pub use error::html_error_response;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Placeholder div plus the vega-embed call that renders `spec` into it.
pub fn chart(id: &str, spec: &Value) -> Markup {
    // A literal "</script>" inside the JSON would end the script element early.
    let spec = spec.to_string().replace("</", "<\\/");
    html! {
        div id=(id) class="chart" {}
        script {
            (PreEscaped(format!("vegaEmbed('#{id}', {spec}, {{actions: false}});")))
        }
    }
}

/// 12345 -> "12,345"
pub fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Drop-down that reloads the dashboard with one parameter changed. The other
/// selections ride along as hidden inputs.
pub fn state_select(
    state: &DashboardState,
    param: &str,
    label: &str,
    options: &[(&str, &str)],
    selected: &str,
) -> Markup {
    html! {
        form method="get" action="/" class="state-select" {
            @for (key, value) in state.params() {
                @if key != param {
                    input type="hidden" name=(key) value=(value);
                }
            }
            label for=(param) { (label) }
            select name=(param) id=(param) onchange="this.form.submit()" {
                @for (value, text) in options {
                    option value=(value) selected[*value == selected] { (text) }
                }
            }
            noscript { button type="submit" { "Terapkan" } }
        }
    }
}

/// Category table with a progress bar scaled to the largest count.
pub fn category_table(rows: &[CategoryCount]) -> Markup {
    let max = rows.iter().map(|r| r.count).max().unwrap_or(0);

    html! {
        table class="category-table" {
            thead {
                tr {
                    th { "Kategori" }
                    th { "Jumlah Produk" }
                }
            }
            tbody {
                @for row in rows {
                    tr {
                        td { (row.category) }
                        td {
                            div class="progress" {
                                span class="progress-label" { (thousands(row.count)) }
                                progress max=(max) value=(row.count) {}
                            }
                        }
                    }
                }
                @if rows.is_empty() {
                    tr { td colspan="2" class="empty" { "Tidak ada produk lokal." } }
                }
            }
        }
    }
}
