use geojson::Geometry;

/// Administrative level in the national statistics boundary dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionLevel {
    Province,
    Regency,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdministrativeRegion {
    pub name: String,
    pub level: RegionLevel,
    /// Parent province name; only set for regencies/cities.
    pub parent: Option<String>,
    pub geometry: Option<Geometry>,
}

impl AdministrativeRegion {
    pub fn province(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: RegionLevel::Province,
            parent: None,
            geometry: None,
        }
    }

    pub fn regency(name: impl Into<String>, province: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: RegionLevel::Regency,
            parent: Some(province.into()),
            geometry: None,
        }
    }

    pub fn with_geometry(mut self, geometry: Option<Geometry>) -> Self {
        self.geometry = geometry;
        self
    }
}
