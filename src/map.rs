//! Map presenter: shows a vehicle's live position in its own pop-up surface.
//!
//! The surface is opened blank before the location request goes out so the
//! browser treats it as user-initiated rather than an unsolicited pop-up
//! arriving with the response. Once the map document is written, the surface
//! owns its own rendering lifecycle and is never torn down by the main app.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use crate::net::error::ApiError;
use crate::net::types::MapCoords;

/// Fixed zoom level for the single-vehicle view.
pub const MAP_ZOOM: u32 = 15;

/// Failures of the search-to-map handoff.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// The blank surface could not be opened; no request was made. The user
    /// can correct this by allowing pop-ups.
    #[error("pop-up window was blocked by the browser")]
    SurfaceBlocked,
    /// 401 from the location endpoint; bubbles to the shell logout.
    #[error("session expired")]
    Unauthorized,
    #[error("could not load the vehicle position")]
    Location,
    #[error("invalid coordinates")]
    InvalidCoordinates,
}

impl From<ApiError> for MapError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized => Self::Unauthorized,
            _ => Self::Location,
        }
    }
}

/// Locate a vehicle and render it into a freshly opened surface.
///
/// Opens the surface first; if that fails no request is issued. Any failure
/// after the open closes the surface again. On success the validated
/// coordinates are returned so the shell can record them.
pub async fn show_on_map(token: &str, vehicle_id: u64) -> Result<MapCoords, MapError> {
    #[cfg(feature = "csr")]
    {
        let surface = open_surface()?;
        let location = match crate::net::api::fetch_vehicle_location(token, vehicle_id).await {
            Ok(location) => location,
            Err(err) => {
                close_surface(&surface);
                return Err(err.into());
            }
        };
        let Some(coords) = location.coords() else {
            close_surface(&surface);
            return Err(MapError::InvalidCoordinates);
        };
        render_document(&surface, &map_document(coords));
        Ok(coords)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, vehicle_id);
        Err(MapError::SurfaceBlocked)
    }
}

/// Build the self-contained Leaflet document for one marker at `coords`.
pub fn map_document(coords: MapCoords) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>Vehicle map</title>
  <meta charset="UTF-8"/>
  <link rel="stylesheet" href="https://unpkg.com/leaflet/dist/leaflet.css"/>
  <style>
    html, body, #map {{
      height: 100%;
      margin: 0;
      padding: 0;
    }}
  </style>
</head>
<body>
  <div id="map"></div>
  <script src="https://unpkg.com/leaflet/dist/leaflet.js"></script>
  <script>
    document.addEventListener("DOMContentLoaded", function () {{
      const map = L.map('map').setView([{lat}, {lng}], {zoom});
      L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
        maxZoom: 19,
      }}).addTo(map);
      L.marker([{lat}, {lng}]).addTo(map)
        .bindPopup('Vehicle is here').openPopup();
    }});
  </script>
</body>
</html>
"#,
        lat = coords.lat,
        lng = coords.lng,
        zoom = MAP_ZOOM,
    )
}

#[cfg(feature = "csr")]
fn open_surface() -> Result<web_sys::Window, MapError> {
    let window = web_sys::window().ok_or(MapError::SurfaceBlocked)?;
    match window.open() {
        Ok(Some(surface)) => Ok(surface),
        _ => Err(MapError::SurfaceBlocked),
    }
}

#[cfg(feature = "csr")]
fn close_surface(surface: &web_sys::Window) {
    let _ = surface.close();
}

#[cfg(feature = "csr")]
fn render_document(surface: &web_sys::Window, html: &str) {
    if let Some(doc) = surface.document() {
        let _ = doc.write(&js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(html)));
        let _ = doc.close();
    }
}
