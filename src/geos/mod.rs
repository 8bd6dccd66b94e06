// src/geos/mod.rs

pub mod boundaries;

/// Tokens that mark a regency ("kabupaten"). Checked in order.
pub const REGENCY_PREFIXES: &[&str] = &["Kab.", "Kabupaten "];

/// Prefix used by the boundary dataset for cities.
pub const CITY_PREFIX: &str = "Kota ";

/// Every sub-division of the capital territory is a city in the boundary dataset.
pub const CAPITAL_TERRITORY: &str = "Jakarta";

/// Irregular spellings, aliases and abbreviations seen in marketplace location text,
/// mapped to the level-2 name used by the boundary dataset.
pub const LOCATION_OVERRIDES: &[(&str, &str)] = &[
    ("Solo", "Kota Surakarta"),
    ("Surakarta (Solo)", "Kota Surakarta"),
    ("Surakarta", "Kota Surakarta"),
    ("Jogja", "Kota Yogyakarta"),
    ("Yogyakarta", "Kota Yogyakarta"),
    ("Tangsel", "Kota Tangerang Selatan"),
    ("Pangkalpinang", "Kota Pangkal Pinang"),
    ("Pangkal Pinang", "Kota Pangkal Pinang"),
    ("Baubau", "Kota Bau-Bau"),
    ("Bau Bau", "Kota Bau-Bau"),
];

/// Cities that need the "Kota " prefix but are usually written without it.
pub const PREFIXED_CITIES: &[&str] = &[
    "Surabaya",
    "Medan",
    "Semarang",
    "Makassar",
    "Palembang",
    "Depok",
    "Batam",
    "Denpasar",
    "Pekanbaru",
    "Banjarmasin",
    "Pontianak",
    "Samarinda",
    "Balikpapan",
    "Manado",
    "Cimahi",
    "Bandar Lampung",
    "Tangerang Selatan",
    "Banda Aceh",
    "Ambon",
    "Mataram",
    "Kendari",
    "Palu",
    "Bengkulu",
    "Jambi",
];

pub const ALL_MARKETPLACES: &str = "Semua Marketplace";

pub const MARKETPLACES: &[&str] = &["Blibli", "Bukalapak", "OLX"];

pub const ALL_CATEGORIES: &str = "Semua Kategori";

pub const CATEGORIES: &[&str] = &[
    "Elektronik & Gadget",
    "Fashion & Aksesoris",
    "Hobi, Seni, & Olahraga",
    "Ibu, Bayi & Anak",
    "Lain-Lain",
    "Makanan & Minuman",
    "Otomotif & Mesin",
    "Perawatan Diri & Kesehatan",
    "Rumah Tangga & Furniture",
];

/// Vega color scheme names offered in the sidebar.
pub const COLOR_THEMES: &[&str] = &[
    "blues", "cividis", "greens", "inferno", "magma", "plasma", "reds", "rainbow", "turbo",
    "viridis",
];

/// Brand origin code for domestically produced goods.
pub const DOMESTIC_ORIGIN: &str = "ID";

/// Brand origin placeholder for "unknown"; such rows are excluded.
pub const UNKNOWN_ORIGIN: &str = "-";
