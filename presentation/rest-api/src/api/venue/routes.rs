use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::venue::model::VenueDirectory;

use crate::api::error::ErrorResponse;
use crate::api::tags::ApiTags;
use crate::api::venue::dto::VenueResponse;

pub struct VenueApi {
    directory: Arc<VenueDirectory>,
}

impl VenueApi {
    pub fn new(directory: Arc<VenueDirectory>) -> Self {
        Self { directory }
    }
}

/// Venue reference data API
///
/// Read-only directory of the venues the catering service operates from.
#[OpenApi]
impl VenueApi {
    /// List all venues
    #[oai(path = "/venues", method = "get", tag = "ApiTags::Venues")]
    async fn list_venues(&self) -> Json<Vec<VenueResponse>> {
        Json(self.directory.all().iter().map(VenueResponse::from).collect())
    }

    /// Get a venue by ID
    #[oai(path = "/venues/:id", method = "get", tag = "ApiTags::Venues")]
    async fn get_venue(&self, id: Path<String>) -> GetVenueResponse {
        match self.directory.find(&id.0) {
            Some(venue) => GetVenueResponse::Ok(Json(venue.into())),
            None => GetVenueResponse::NotFound(Json(ErrorResponse {
                name: "NotFound".to_string(),
                message: "venue.not_found".to_string(),
            })),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetVenueResponse {
    #[oai(status = 200)]
    Ok(Json<VenueResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}
