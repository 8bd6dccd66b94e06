use crate::domain::listing::NormalizedListing;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::Workbook;

const HEADERS: [&str; 10] = [
    "PRODUCT LINK",
    "TITLE",
    "PRICE",
    "MARKETPLACE",
    "BRAND",
    "ASAL BRAND",
    "Produk",
    "Kategori",
    "Lokasi",
    "Provinsi",
];

pub fn export_listings_xlsx(listings: &[&NormalizedListing], filename: &str) -> ResultResp {
    let buffer = listings_workbook(listings)?;
    xlsx_response(buffer, filename)
}

/// Writes the listings, with their resolved province, into a single-sheet workbook.
pub fn listings_workbook(listings: &[&NormalizedListing]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, row) in listings.iter().enumerate() {
        let r = (i + 1) as u32;
        let listing = &row.listing;

        let text_cells = [
            (0, listing.link.as_str()),
            (1, listing.title.as_str()),
            (3, listing.marketplace.as_str()),
            (4, listing.brand.as_str()),
            (5, listing.brand_origin.as_str()),
            (6, row.origin_label().as_str()),
            (7, listing.category.as_str()),
            (8, listing.location.as_str()),
            (9, row.province.as_str()),
        ];
        for (col, value) in text_cells {
            worksheet.write_string(r, col, value).map_err(|e| {
                ServerError::XlsxError(format!("Failed to write {}: {}", HEADERS[col as usize], e))
            })?;
        }

        worksheet
            .write_number(r, 2, listing.price)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write price: {}", e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}
