use super::countries;

/// Names the ISO table does not know under their everyday form
const COUNTRY_OVERRIDES: &[(&str, &str)] = &[
    ("Turkey", "TR"),
    ("Vatican", "VA"),
    ("Russia", "RU"),
    ("Iran", "IR"),
    ("South Korea", "KR"),
    ("North Korea", "KP"),
];

/// Reduce "City, Region" forms to the bare city name
pub fn clean_city_name(city: &str) -> String {
    city.split(',').next().unwrap_or_default().trim().to_string()
}

/// Resolve a free-text country name to its ISO 3166-1 alpha-2 code.
///
/// Tries the ISO table first, then the override map. `None` flows forward:
/// the population lookup works without a country code.
pub fn country_to_iso2(country: Option<&str>) -> Option<String> {
    let name = country?.trim();
    if name.is_empty() {
        return None;
    }

    if let Some(found) = countries::lookup(name) {
        return Some(found.alpha2.to_string());
    }

    COUNTRY_OVERRIDES
        .iter()
        .find(|(override_name, _)| *override_name == name)
        .map(|(_, code)| code.to_string())
}
