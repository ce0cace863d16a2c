//! Static city data for supported cities
//!
//! This module contains the static list of cities the backend has monitoring
//! coverage for, with their geographic coordinates.

/// A city with air quality monitoring coverage
#[derive(Debug, Clone, Copy)]
pub struct City {
    /// Canonical city name as the backend expects it
    pub name: &'static str,
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
}

/// Static array of all supported cities
///
/// Matches the backend's coverage table; coordinates are the monitoring grid
/// points used for each city.
pub static CITIES: [City; 6] = [
    City {
        name: "Delhi",
        latitude: 28.7041,
        longitude: 77.1025,
    },
    City {
        name: "Mumbai",
        latitude: 19.0760,
        longitude: 72.8777,
    },
    City {
        name: "Bengaluru",
        latitude: 12.9716,
        longitude: 77.5946,
    },
    City {
        name: "Hyderabad",
        latitude: 17.3850,
        longitude: 78.4867,
    },
    City {
        name: "Chennai",
        latitude: 13.0827,
        longitude: 80.2707,
    },
    City {
        name: "Kolkata",
        latitude: 22.5726,
        longitude: 88.3639,
    },
];

/// Get a city by name, case-insensitively
///
/// # Arguments
///
/// * `name` - The city name (e.g., "Delhi", "mumbai")
///
/// # Returns
///
/// Returns `Some(&City)` if found, `None` otherwise
pub fn get_city_by_name(name: &str) -> Option<&'static City> {
    let name = name.trim();
    CITIES.iter().find(|city| city.name.eq_ignore_ascii_case(name))
}

/// Get all supported cities
pub fn all_cities() -> &'static [City] {
    &CITIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cities_array_has_6_entries() {
        assert_eq!(CITIES.len(), 6);
        assert_eq!(all_cities().len(), 6);
    }

    #[test]
    fn test_each_city_has_valid_indian_coordinates() {
        // Indian subcontinent latitude range: 8 to 35
        // Indian subcontinent longitude range: 68 to 97
        for city in all_cities() {
            assert!(
                city.latitude >= 8.0 && city.latitude <= 35.0,
                "City {} has invalid latitude: {}",
                city.name,
                city.latitude
            );
            assert!(
                city.longitude >= 68.0 && city.longitude <= 97.0,
                "City {} has invalid longitude: {}",
                city.name,
                city.longitude
            );
        }
    }

    #[test]
    fn test_get_city_by_name_is_case_insensitive() {
        assert!(get_city_by_name("Delhi").is_some());
        assert!(get_city_by_name("delhi").is_some());
        assert!(get_city_by_name("DELHI").is_some());
        assert!(get_city_by_name(" Delhi ").is_some());
    }

    #[test]
    fn test_get_city_by_name_returns_canonical_entry() {
        let city = get_city_by_name("mumbai").expect("Mumbai should be supported");
        assert_eq!(city.name, "Mumbai");
        assert!((city.latitude - 19.0760).abs() < 0.0001);
        assert!((city.longitude - 72.8777).abs() < 0.0001);
    }

    #[test]
    fn test_get_city_by_name_returns_none_for_unsupported() {
        assert!(get_city_by_name("Atlantis").is_none());
        assert!(get_city_by_name("").is_none());
    }

    #[test]
    fn test_all_cities_have_unique_names() {
        let mut names: Vec<&str> = all_cities().iter().map(|c| c.name).collect();
        names.sort();
        let original_len = names.len();
        names.dedup();
        assert_eq!(names.len(), original_len, "City names are not unique");
    }
}
