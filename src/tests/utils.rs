use crate::dashboard::Dashboard;
use crate::domain::{AdministrativeRegion, LocationMode, ProductListing, RegionLookup};
use crate::spreadsheets::LoadReport;
use astra::{Body, Request, Response};
use http::{Method, Request as HttpRequest};
use std::io::Read;

fn listing(marketplace: &str, origin: &str, category: &str, location: &str, price: f64) -> ProductListing {
    ProductListing {
        link: format!("https://{}.example/{}", marketplace.to_lowercase(), location.replace(' ', "-")),
        title: format!("Produk {category}"),
        price,
        marketplace: marketplace.to_string(),
        brand: "Merek".to_string(),
        brand_origin: origin.to_string(),
        category: category.to_string(),
        location: location.to_string(),
    }
}

/// Four listings that resolve to a province (three domestic) and one that doesn't.
pub fn sample_dashboard() -> Dashboard {
    let listings = vec![
        listing("Blibli", "ID", "Fashion & Aksesoris", "Kab. Bandung", 100_000.0),
        listing("Blibli", "ID", "Makanan & Minuman", "Solo", 50_000.0),
        listing("Bukalapak", "CN", "Elektronik & Gadget", "Jakarta Selatan", 300_000.0),
        listing("OLX", "ID", "Makanan & Minuman", "Kota Bandung", 20_000.0),
        listing("OLX", "US", "Fashion & Aksesoris", "Atlantis", 75_000.0),
    ];

    let provinces = vec![
        AdministrativeRegion::province("Jawa Barat"),
        AdministrativeRegion::province("Jawa Tengah"),
        AdministrativeRegion::province("Dki Jakarta"),
        AdministrativeRegion::province("Papua"),
    ];
    let regencies = vec![
        AdministrativeRegion::regency("Bandung", "Jawa Barat"),
        AdministrativeRegion::regency("Kota Bandung", "Jawa Barat"),
        AdministrativeRegion::regency("Kota Surakarta", "Jawa Tengah"),
        AdministrativeRegion::regency("Kota Jakarta Selatan", "Dki Jakarta"),
    ];
    let mode = LocationMode::Regency(RegionLookup::from_regions(&regencies));

    let report = LoadReport {
        rows_read: 8,
        dropped_missing: 2,
        dropped_unknown_origin: 1,
    };
    Dashboard::from_parts(listings, &provinces, &mode, report)
}

pub fn get(uri: &str) -> Request {
    HttpRequest::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_bytes(mut resp: Response) -> Vec<u8> {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    bytes
}

pub fn body_string(resp: Response) -> String {
    String::from_utf8(body_bytes(resp)).unwrap()
}
