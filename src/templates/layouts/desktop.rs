use maud::{html, Markup, DOCTYPE};

const STYLE: &str = r#"
body { margin: 0; font-family: "Source Sans Pro", system-ui, sans-serif; color: #31333f; display: flex; min-height: 100vh; }
aside { width: 300px; flex-shrink: 0; background: #f0f2f6; padding: 2rem 1.5rem; }
aside h1 { font-size: 1.4rem; line-height: 1.3; }
main { flex: 1; padding: 2rem 3rem; min-width: 0; }
nav.tabs { display: flex; gap: 1.5rem; border-bottom: 1px solid #e6e6e6; margin-bottom: 1.5rem; }
nav.tabs a { font-size: 18px; padding: 10px; text-decoration: none; color: #31333f; border-bottom: 3px solid transparent; }
nav.tabs a.active { color: #ff4b4b; border-bottom-color: #ff4b4b; }
.columns { display: grid; grid-template-columns: 1.2fr 2fr; gap: 2rem; align-items: start; }
.columns.wide { grid-template-columns: 1.5fr 2fr; }
.chart { width: 100%; }
.metric-title { font-size: 18px; }
.metric-value { font-size: 36px; font-weight: 500; }
.metric-value span { font-size: 18px; }
.state-select { display: flex; flex-direction: column; gap: .4rem; margin-bottom: 1rem; }
.state-select select { padding: 8px; font-size: 16px; }
table.category-table { width: 100%; border-collapse: collapse; }
table.category-table th, table.category-table td { padding: 8px; border-bottom: 1px solid #f3f4f6; text-align: left; }
.progress { display: flex; gap: .5rem; align-items: center; }
.progress progress { flex: 1; }
.card { border: 1px solid #e6e6e6; border-radius: 8px; padding: 1rem 1.5rem; margin-top: 1.5rem; }
.note { font-size: .9rem; color: #6b7280; }
footer { margin-top: 3rem; font-size: .8rem; color: #9ca3af; }
"#;

pub fn desktop_layout(title: &str, sidebar: Markup, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="id" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (maud::PreEscaped(STYLE)) }
                script src="https://cdn.jsdelivr.net/npm/vega@5" {}
                script src="https://cdn.jsdelivr.net/npm/vega-lite@5" {}
                script src="https://cdn.jsdelivr.net/npm/vega-embed@6" {}
            }
            body {
                aside { (sidebar) }
                main { (content) }
            }
        }
    }
}
