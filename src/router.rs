use crate::dashboard::Dashboard;
use crate::domain::DashboardState;
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp};
use crate::spreadsheets::export_listings_xlsx;
use crate::templates;
use astra::Request;

pub fn handle(req: Request, dashboard: &Dashboard) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    tracing::debug!(%method, %path, "request");

    match (method, path) {
        ("GET", "/") => {
            let state = dashboard_state(&req, dashboard)?;
            html_response(templates::pages::dashboard_page(dashboard, &state))
        }
        ("GET", "/geo/provinces.json") => json_response(dashboard.province_shapes.clone()),
        ("GET", "/export.xlsx") => {
            let state = dashboard_state(&req, dashboard)?;
            let rows: Vec<_> = dashboard
                .listings
                .iter()
                .filter(|l| state.matches(l))
                .collect();
            let filename = format!(
                "produk_{}.xlsx",
                dashboard.loaded_at.format("%Y%m%d")
            );
            tracing::info!(rows = rows.len(), query = %state.query_string(), "export");
            export_listings_xlsx(&rows, &filename)
        }
        _ => Err(ServerError::NotFound),
    }
}

fn dashboard_state(req: &Request, dashboard: &Dashboard) -> Result<DashboardState, ServerError> {
    DashboardState::from_query(req.uri().query(), |p| dashboard.has_province(p))
        .map_err(ServerError::BadRequest)
}
