// src/tests/router_tests/dashboard_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::templates::html_error_response;
use crate::tests::utils::{body_string, get, sample_dashboard};

#[test]
fn dashboard_shows_origin_split() {
    let dashboard = sample_dashboard();

    let resp = handle(get("/"), &dashboard).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("75.0%"), "local share missing");
    assert!(body.contains("25.0%"), "import share missing");
    assert!(body.contains("vegaEmbed('#donut'"));
}

#[test]
fn marketplace_filter_changes_local_share() {
    let dashboard = sample_dashboard();

    let body = body_string(handle(get("/?marketplace=Bukalapak"), &dashboard).unwrap());

    assert!(body.contains("0.0%"));
    assert!(body.contains("(0 dari 1 produk)"));
    assert!(body.contains("Tidak ada produk lokal."));
}

#[test]
fn province_click_lists_categories() {
    let dashboard = sample_dashboard();

    let body = body_string(handle(get("/?tab=lokasi&provinsi=Jawa+Barat"), &dashboard).unwrap());

    assert!(body.contains("Kategori Produk di Jawa Barat"));
    assert!(body.contains("Fashion &amp; Aksesoris"));
    assert!(body.contains("Makanan &amp; Minuman"));
    // The listing from "Atlantis" could not be placed on the map.
    assert!(body.contains("1 produk tidak dapat dipetakan"));
}

#[test]
fn location_tab_reports_skipped_rows() {
    let dashboard = sample_dashboard();

    let body = body_string(handle(get("/?tab=lokasi"), &dashboard).unwrap());

    assert!(body.contains(r#"id="load-note""#));
    assert!(body.contains("Dari 8 baris data, 2 baris dilewati karena kolomnya kosong dan 1 karena asal brand tidak diketahui."));
}

#[test]
fn choropleth_counts_every_province() {
    let dashboard = sample_dashboard();

    let body = body_string(handle(get("/?tab=lokasi"), &dashboard).unwrap());

    assert!(body.contains(r#""province":"Papua""#));
    assert!(body.contains(r#""count":0"#));
    assert!(body.contains(r#""count":2"#));
    assert!(body.contains("&rerata=aritmetika&provinsi=Papua"));
}

#[test]
fn price_tab_follows_category() {
    let dashboard = sample_dashboard();

    let body = body_string(
        handle(get("/?tab=harga&kategori=Makanan+%26+Minuman&rerata=geometrik"), &dashboard).unwrap(),
    );

    assert!(body.contains("di Kategori Makanan &amp; Minuman"));
    assert!(body.contains("Rata-rata Geometrik Harga"));
    assert!(body.contains("Produk impor umumnya berada pada kisaran harga yang lebih tinggi"));
}

#[test]
fn unknown_query_values_are_bad_requests() {
    let dashboard = sample_dashboard();

    let err = handle(get("/?theme=pink"), &dashboard).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(html_error_response(err).status(), 400);

    let err = handle(get("/?provinsi=Narnia"), &dashboard).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn unknown_route_is_not_found() {
    let dashboard = sample_dashboard();

    let err = handle(get("/admin"), &dashboard).unwrap_err();

    assert!(matches!(err, ServerError::NotFound));
    let resp = html_error_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Kembali ke dashboard"));
}

#[test]
fn province_shapes_are_served_as_json() {
    let dashboard = sample_dashboard();

    let resp = handle(get("/geo/provinces.json"), &dashboard).unwrap();

    assert_eq!(resp.headers()["Content-Type"], "application/json");
    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["features"].as_array().unwrap().len(), 4);
    assert_eq!(json["features"][3]["properties"]["name"], "Papua");
}
