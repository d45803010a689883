//! Site content handlers.
//!
//! All content is hard-coded in [`crate::content`]; these handlers just
//! serialize it for the front-end.

use axum::{extract::State, Json};
use std::sync::Arc;
use utoipa;

use crate::content::{self, GalleryImage, PricingTable, Property, Review};
use crate::web::dto::SiteInfoResponse;

use super::AppState;

/// GET /api/property - Property details and amenities.
#[utoipa::path(
    get,
    path = "/api/property",
    tag = "content",
    responses(
        (status = 200, description = "Property details", body = Property)
    )
)]
pub async fn get_property() -> Json<Property> {
    Json(content::property())
}

/// GET /api/gallery - Gallery images, first entry is the default main image.
#[utoipa::path(
    get,
    path = "/api/gallery",
    tag = "content",
    responses(
        (status = 200, description = "Gallery images", body = Vec<GalleryImage>)
    )
)]
pub async fn get_gallery() -> Json<Vec<GalleryImage>> {
    Json(content::gallery())
}

/// GET /api/reviews - Guest reviews.
#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = "content",
    responses(
        (status = 200, description = "Guest reviews", body = Vec<Review>)
    )
)]
pub async fn get_reviews() -> Json<Vec<Review>> {
    Json(content::reviews())
}

/// GET /api/pricing - The pricing table.
#[utoipa::path(
    get,
    path = "/api/pricing",
    tag = "content",
    responses(
        (status = 200, description = "Pricing table", body = PricingTable)
    )
)]
pub async fn get_pricing() -> Json<PricingTable> {
    Json(content::pricing())
}

/// GET /api/site - Public site information (footer content).
#[utoipa::path(
    get,
    path = "/api/site",
    tag = "content",
    responses(
        (status = 200, description = "Site information", body = SiteInfoResponse)
    )
)]
pub async fn get_site_info(State(state): State<Arc<AppState>>) -> Json<SiteInfoResponse> {
    Json(SiteInfoResponse {
        name: state.site.name.clone(),
        manager_name: state.site.manager_name.clone(),
        manager_url: state.site.manager_url.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_property_body() {
        let Json(property) = get_property().await;
        assert!(property.title.contains("Wimbledon"));
        assert_eq!(property.amenities.len(), 8);
    }

    #[tokio::test]
    async fn test_get_gallery_body() {
        let Json(gallery) = get_gallery().await;
        assert_eq!(gallery.len(), 6);
    }

    #[tokio::test]
    async fn test_get_pricing_body() {
        let Json(pricing) = get_pricing().await;
        assert_eq!(pricing.nightly_rate, 250);
    }
}
