//! Location record - one saved place

use serde::{Deserialize, Serialize};

/// A saved map location that can be displayed, searched, and edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique database identifier, assigned by the store on insert
    pub id: i64,
    /// Human readable description of the place
    pub address: String,
    /// Latitude coordinate used to position the map marker
    pub latitude: f64,
    /// Longitude coordinate used to position the map marker
    pub longitude: f64,
}

impl Location {
    pub fn new(id: i64, address: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            address: address.into(),
            latitude,
            longitude,
        }
    }

    /// Formatted "lat, lng" string shown in list rows
    pub fn coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} ({})", self.id, self.address, self.coordinates())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_format() {
        let loc = Location::new(1, "CN Tower, Toronto, ON", 43.6426, -79.3871);
        assert_eq!(loc.coordinates(), "43.6426, -79.3871");
    }

    #[test]
    fn test_coordinates_pad_to_four_places() {
        let loc = Location::new(2, "Test Plaza", 43.0, -79.0);
        assert_eq!(loc.coordinates(), "43.0000, -79.0000");
    }

    #[test]
    fn test_display_includes_id_and_address() {
        let loc = Location::new(7, "High Park, Toronto, ON", 43.6465, -79.4637);
        let s = loc.to_string();
        assert!(s.starts_with("#7 High Park"));
    }
}
