use crate::router::handle;
use crate::tests::utils::{body_bytes, get, sample_dashboard};
use calamine::{Data, Reader, Xlsx};
use std::io::Cursor;

/// Exports `uri` and reads back the Provinsi column of every data row.
fn exported_provinces(uri: &str) -> Vec<String> {
    let dashboard = sample_dashboard();
    let resp = handle(get(uri), &dashboard).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let mut workbook = Xlsx::new(Cursor::new(body_bytes(resp))).expect("not an xlsx file");
    let range = workbook
        .worksheet_range_at(0)
        .expect("no worksheet")
        .expect("unreadable worksheet");

    let mut rows = range.rows();
    let header = rows.next().expect("missing header row");
    assert_eq!(header[9], Data::String("Provinsi".to_string()));
    rows.map(|row| row[9].to_string()).collect()
}

#[test]
fn export_returns_a_workbook() {
    let dashboard = sample_dashboard();

    let resp = handle(get("/export.xlsx?marketplace=OLX"), &dashboard).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Type"],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = resp.headers()["Content-Disposition"].to_str().unwrap().to_string();
    assert!(disposition.starts_with("attachment; filename=\"produk_"));

    // xlsx files are zip archives.
    let bytes = body_bytes(resp);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn export_without_filters_has_every_listing() {
    let mut provinces = exported_provinces("/export.xlsx");
    provinces.sort();

    assert_eq!(provinces, vec!["Dki Jakarta", "Jawa Barat", "Jawa Barat", "Jawa Tengah"]);
}

#[test]
fn export_honours_selected_province() {
    assert_eq!(exported_provinces("/export.xlsx?provinsi=Jawa+Tengah"), vec!["Jawa Tengah"]);
}

#[test]
fn export_honours_selected_marketplace() {
    assert_eq!(exported_provinces("/export.xlsx?marketplace=OLX"), vec!["Jawa Barat"]);
}

#[test]
fn export_combines_category_and_province() {
    let provinces =
        exported_provinces("/export.xlsx?kategori=Makanan+%26+Minuman&provinsi=Jawa+Barat");

    assert_eq!(provinces, vec!["Jawa Barat"]);
}
