//! Fixed country-to-region mapping.
//!
//! This is constant reference data, not a runtime service. The table covers
//! the 20 markets the dashboard reports on; anything else resolves to `None`.

pub const KNOWN_REGIONS: [&str; 4] = ["Europe", "North America", "Asia Pacific", "Oceania"];

const COUNTRY_REGIONS: [(&str, &str); 20] = [
    ("United Kingdom", "Europe"),
    ("France", "Europe"),
    ("Germany", "Europe"),
    ("Netherlands", "Europe"),
    ("Belgium", "Europe"),
    ("Switzerland", "Europe"),
    ("Spain", "Europe"),
    ("Norway", "Europe"),
    ("Portugal", "Europe"),
    ("Italy", "Europe"),
    ("Poland", "Europe"),
    ("Austria", "Europe"),
    ("Denmark", "Europe"),
    ("Finland", "Europe"),
    ("Sweden", "Europe"),
    ("Australia", "Oceania"),
    ("Japan", "Asia Pacific"),
    ("Singapore", "Asia Pacific"),
    ("USA", "North America"),
    ("Canada", "North America"),
];

pub fn region_for_country(country: &str) -> Option<&'static str> {
    COUNTRY_REGIONS
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, region)| *region)
}

pub fn known_countries() -> Vec<&'static str> {
    COUNTRY_REGIONS.iter().map(|(name, _)| *name).collect()
}
