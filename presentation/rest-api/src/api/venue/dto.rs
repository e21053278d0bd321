use poem_openapi::Object;

use business::domain::venue::model::Venue;

#[derive(Debug, Clone, Object)]
pub struct VenueResponse {
    /// Venue identifier used in group orders
    pub id: String,
    /// Venue display name
    pub name: String,
    /// Street address
    pub address: String,
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
}

impl From<&Venue> for VenueResponse {
    fn from(venue: &Venue) -> Self {
        Self {
            id: venue.id.clone(),
            name: venue.name.clone(),
            address: venue.address.clone(),
            lat: venue.lat,
            lng: venue.lng,
        }
    }
}
