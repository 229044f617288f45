#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// List-item projection of a route.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct RouteSummary {
    pub id: u64,
    pub name: String,
}

/// Full route record with its ordered schedules. Fetched lazily on every
/// drill-down; never cached across selections.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct RouteDetail {
    pub id: u64,
    pub name: String,
    pub route_number: u32,
    pub distance: f64,
    pub average_delay_minutes: f64,
    #[serde(default)]
    pub schedules: Vec<Schedule>,
}

/// A scheduled departure/arrival pairing bound to one vehicle.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Schedule {
    pub id: u64,
    pub departure_time: String,
    pub arrival_time: String,
    pub vehicle: Vehicle,
}

/// Static attributes of a physical transit unit.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Vehicle {
    pub vehicle_type: String,
    pub registration_number: String,
    pub brand: String,
    pub model: String,
    pub capacity: u32,
}

fn first_page() -> u32 {
    1
}

/// One page of the route listing. Invariant once loaded: `1 <= page <= pages`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct PageResult {
    pub items: Vec<RouteSummary>,
    #[serde(default = "first_page")]
    pub page: u32,
    pub pages: u32,
}

/// One trip found between two stops.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct SearchResult {
    pub route_name: String,
    pub route_number: u32,
    pub vehicle_name: String,
    pub vehicle_id: u64,
    pub from_stop_time: String,
    pub to_stop_time: String,
}

/// Raw location payload for a vehicle; either coordinate may be missing.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Deserialize)]
pub struct VehicleLocation {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl VehicleLocation {
    /// Validated coordinates: both present, finite, and nonzero. Zero is
    /// the backend's placeholder for an unknown position.
    pub fn coords(self) -> Option<MapCoords> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng))
                if lat != 0.0 && lng != 0.0 && lat.is_finite() && lng.is_finite() =>
            {
                Some(MapCoords { lat, lng })
            }
            _ => None,
        }
    }
}

/// A validated vehicle position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapCoords {
    pub lat: f64,
    pub lng: f64,
}
